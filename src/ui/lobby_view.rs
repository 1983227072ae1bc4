use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::palette::player_color;
use crate::game::PlayerRegistry;

pub fn render(frame: &mut Frame, registry: &PlayerRegistry, input: &str, message: Option<&str>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Players
            Constraint::Length(3), // Input
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_players(frame, registry, chunks[0]);
    render_input(frame, input, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_players(frame: &mut Frame, registry: &PlayerRegistry, area: Rect) {
    let items: Vec<ListItem> = registry
        .players()
        .iter()
        .enumerate()
        .map(|(i, player)| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:>2}. ", i + 1)),
                Span::styled("●  ", Style::default().fg(player_color(player))),
                Span::raw(player.color.clone()),
            ]))
        })
        .collect();

    let title = format!("Players ({})", registry.len());
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(list, area);
}

fn render_input(frame: &mut Frame, input: &str, area: Rect) {
    let widget = Paragraph::new(Line::from(vec![
        Span::raw(input.to_string()),
        Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("New player color"),
    );
    frame.render_widget(widget, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new("Enter: Add player  |  Del: Clear  |  Tab: Start  |  Esc: Quit")
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );
    frame.render_widget(controls, area);
}
