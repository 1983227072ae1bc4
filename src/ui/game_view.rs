use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::palette::player_color;
use crate::game::{Cell, GameEngine, GameStatus};

pub fn render(
    frame: &mut Frame,
    engine: &GameEngine,
    selected_column: usize,
    message: Option<&str>,
) {
    let board_rows = u16::try_from(engine.board().height())
        .unwrap_or(u16::MAX)
        .saturating_add(4);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),       // Header
            Constraint::Min(board_rows), // Board
            Constraint::Length(3),       // Message
            Constraint::Length(3),       // Controls
        ])
        .split(frame.area());

    render_header(frame, engine, chunks[0]);
    render_board(frame, engine, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, engine: &GameEngine, area: Rect) {
    let current = engine.current_player();

    let status = match engine.status() {
        GameStatus::Active => format!(
            "Current Player: {} ({})  |  Move {}",
            current.color,
            current.id,
            engine.moves_played() + 1
        ),
        GameStatus::Won(_) | GameStatus::Tied => "Game Over".to_string(),
    };

    let header = Paragraph::new(status)
        .style(
            Style::default()
                .fg(player_color(current))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, engine: &GameEngine, selected_column: usize, area: Rect) {
    let board = engine.board();
    let width = board.width();
    let winning = engine.winning_line();
    let inner = "═".repeat(width * 3 + 1);
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..width {
        let label = format!("{:^3}", col + 1);
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    lines.push(Line::from(format!("  ╔{inner}╗")));

    for (row, cells) in board.rows().enumerate() {
        let mut row_spans = vec![Span::raw("  ║")];

        for (col, cell) in cells.iter().enumerate() {
            let span = match cell {
                Cell::Empty => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
                Cell::Piece(id) => {
                    let color = engine
                        .players()
                        .iter()
                        .find(|p| p.id == *id)
                        .map(player_color)
                        .unwrap_or(Color::White);
                    let in_line = winning.is_some_and(|line| line.contains(&(row, col)));
                    if in_line {
                        Span::styled(
                            " ◆ ",
                            Style::default().fg(color).add_modifier(Modifier::BOLD),
                        )
                    } else {
                        Span::styled(" ● ", Style::default().fg(color))
                    }
                }
            };
            row_spans.push(span);
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{inner}╝")));

    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..width {
        if col == selected_column && !engine.is_over() {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let msg_widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from(
        "←/→: Move  |  Enter/1-9: Drop  |  N: New game  |  L: Lobby  |  Q: Quit",
    );

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
