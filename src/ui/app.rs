use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use tracing::{debug, info, warn};

use super::palette::parse_color;
use crate::config::AppConfig;
use crate::game::{GameEngine, MoveResult, PlayerRegistry};

/// Which screen the terminal is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Lobby,
    Game,
}

/// End-of-game text waiting for its display time.
#[derive(Debug, Clone)]
struct Announcement {
    text: String,
    due: Instant,
}

pub struct App {
    registry: PlayerRegistry,
    engine: Option<GameEngine>,
    screen: Screen,
    width: usize,
    height: usize,
    announce_delay: Duration,
    poll_interval: Duration,
    selected_column: usize,
    input: String,
    message: Option<String>,
    announcement: Option<Announcement>,
    should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let mut app = App {
            registry: PlayerRegistry::new(),
            engine: None,
            screen: Screen::Lobby,
            width: config.board.width,
            height: config.board.height,
            announce_delay: Duration::from_millis(config.ui.announce_delay_ms),
            poll_interval: Duration::from_millis(config.ui.poll_interval_ms),
            selected_column: 0,
            input: String::new(),
            message: None,
            announcement: None,
            should_quit: false,
        };
        for color in &config.lobby.players {
            if !app.add_player(color) {
                warn!(color = %color, "skipping configured player with unrecognised color");
            }
        }
        app
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn registry(&self) -> &PlayerRegistry {
        &self.registry
    }

    pub fn engine(&self) -> Option<&GameEngine> {
        self.engine.as_ref()
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            self.tick(Instant::now());
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.poll_interval)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Surface a pending end-of-game announcement once its delay has passed.
    pub fn tick(&mut self, now: Instant) {
        if self.announcement.as_ref().is_some_and(|a| now >= a.due) {
            if let Some(announcement) = self.announcement.take() {
                info!(text = %announcement.text, "announcing result");
                self.message = Some(announcement.text);
            }
        }
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.screen {
            Screen::Lobby => self.handle_lobby_key(key),
            Screen::Game => self.handle_game_key(key),
        }
    }

    fn handle_lobby_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) => self.input.push(c),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => {
                let color = std::mem::take(&mut self.input);
                if color.trim().is_empty() {
                    return;
                }
                if self.add_player(&color) {
                    self.message = None;
                } else {
                    self.message = Some(format!(
                        "Unrecognised color '{}'. Please choose a valid color.",
                        color.trim()
                    ));
                }
            }
            KeyCode::Delete => {
                self.registry.clear();
                self.message = Some("Player list cleared.".to_string());
            }
            KeyCode::Tab => self.start_game(),
            _ => {}
        }
    }

    fn handle_game_key(&mut self, key: KeyEvent) {
        // Clear message on any key press, unless the result is still pending
        if self.announcement.is_none() {
            self.message = None;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.width {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece(self.selected_column);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let col = c as usize - '1' as usize;
                if col < self.width {
                    self.selected_column = col;
                    self.drop_piece(col);
                }
            }
            KeyCode::Char('n') => self.start_game(),
            KeyCode::Char('l') => {
                self.engine = None;
                self.announcement = None;
                self.message = None;
                self.screen = Screen::Lobby;
            }
            _ => {}
        }
    }

    /// Register a player if the color is one the terminal can draw.
    fn add_player(&mut self, color: &str) -> bool {
        let color = color.trim();
        if parse_color(color).is_none() {
            return false;
        }
        self.registry.register(color);
        true
    }

    /// Replace any running game with a fresh one for the current lobby.
    fn start_game(&mut self) {
        match self.registry.start_game(self.width, self.height) {
            Ok(engine) => {
                self.engine = Some(engine);
                self.announcement = None;
                self.selected_column = self.width / 2;
                self.screen = Screen::Game;
                self.message = Some("New game started!".to_string());
            }
            Err(e) => {
                self.message = Some(format!("Cannot start: {e}"));
            }
        }
    }

    /// Drop piece in the given column
    fn drop_piece(&mut self, col: usize) {
        let Some(engine) = self.engine.as_mut() else {
            return;
        };
        let over = engine.is_over();

        match engine.apply_move(col) {
            MoveResult::Rejected if over => {
                if self.announcement.is_none() {
                    self.message = Some("Game over! Press 'n' to play again.".to_string());
                }
            }
            MoveResult::Rejected => {
                self.message = Some("Column is full!".to_string());
            }
            MoveResult::Continue { placed, next } => {
                debug!(row = placed.row, col = placed.col, next = %next.id, "turn passed");
            }
            MoveResult::Win { winner, .. } => {
                self.announce(format!("{} player won!!", winner.color));
            }
            MoveResult::Tie { .. } => {
                self.announce("Tie!".to_string());
            }
        }
    }

    fn announce(&mut self, text: String) {
        self.announcement = Some(Announcement {
            text,
            due: Instant::now() + self.announce_delay,
        });
    }

    /// Render the UI
    pub fn render(&self, frame: &mut ratatui::Frame) {
        match (self.screen, self.engine.as_ref()) {
            (Screen::Game, Some(engine)) => {
                super::game_view::render(frame, engine, self.selected_column, self.message())
            }
            _ => super::lobby_view::render(frame, &self.registry, &self.input, self.message()),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameStatus, PlayerId};
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_line(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));
    }

    fn config(players: &[&str], delay_ms: u64) -> AppConfig {
        let mut config = AppConfig::default();
        config.lobby.players = players.iter().map(|s| s.to_string()).collect();
        config.ui.announce_delay_ms = delay_ms;
        config
    }

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_lobby_registers_valid_colors() {
        let mut app = App::default();
        type_line(&mut app, "red");
        type_line(&mut app, "blue");

        let colors: Vec<&str> = app
            .registry()
            .players()
            .iter()
            .map(|p| p.color.as_str())
            .collect();
        assert_eq!(colors, vec!["red", "blue"]);
        assert_eq!(app.message(), None);
    }

    #[test]
    fn test_lobby_rejects_unknown_color() {
        let mut app = App::default();
        type_line(&mut app, "blurple");
        assert!(app.registry().is_empty());
        assert_eq!(
            app.message(),
            Some("Unrecognised color 'blurple'. Please choose a valid color.")
        );
    }

    #[test]
    fn test_configured_players_skip_invalid() {
        let app = App::new(&config(&["red", "nope", "green"], 0));
        assert_eq!(app.registry().len(), 2);
        assert_eq!(app.registry().players()[1].id, PlayerId(2));
    }

    #[test]
    fn test_start_requires_a_player() {
        let mut app = App::default();
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.screen(), Screen::Lobby);
        assert_eq!(
            app.message(),
            Some("Cannot start: a game needs at least one player")
        );
    }

    #[test]
    fn test_digit_keys_drop_into_column() {
        let mut app = App::new(&config(&["red", "yellow"], 0));
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.screen(), Screen::Game);

        app.handle_key(key(KeyCode::Char('3')));
        let engine = app.engine().unwrap();
        assert_eq!(engine.board().get(5, 2).owner(), Some(PlayerId(1)));
        assert_eq!(engine.turn_index(), 1);
        assert_eq!(app.selected_column(), 2);
    }

    #[test]
    fn test_win_is_announced_after_delay() {
        let mut app = App::new(&config(&["red", "yellow"], 60_000));
        app.handle_key(key(KeyCode::Tab));
        for c in ['1', '2', '1', '2', '1', '2', '1'] {
            app.handle_key(key(KeyCode::Char(c)));
        }

        // The engine is terminal immediately, the text is not shown yet.
        let engine = app.engine().unwrap();
        assert_eq!(engine.status(), GameStatus::Won(PlayerId(1)));
        assert_eq!(app.message(), None);

        // Further drops are inert.
        app.handle_key(key(KeyCode::Char('4')));
        assert_eq!(app.engine().unwrap().moves_played(), 7);

        app.tick(Instant::now() + Duration::from_secs(120));
        assert_eq!(app.message(), Some("red player won!!"));
    }

    #[test]
    fn test_new_game_keeps_lobby() {
        let mut app = App::new(&config(&["red"], 0));
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Char('1')));
        app.handle_key(key(KeyCode::Char('n')));

        assert_eq!(app.engine().unwrap().moves_played(), 0);
        assert_eq!(app.registry().len(), 1);

        app.handle_key(key(KeyCode::Char('l')));
        assert_eq!(app.screen(), Screen::Lobby);
        assert!(app.engine().is_none());
    }

    #[test]
    fn test_full_column_message() {
        let mut cfg = config(&["red", "yellow"], 0);
        cfg.board.height = 2;
        let mut app = App::new(&cfg);
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Char('1')));
        app.handle_key(key(KeyCode::Char('1')));
        app.handle_key(key(KeyCode::Char('1')));
        assert_eq!(app.message(), Some("Column is full!"));
        assert_eq!(app.engine().unwrap().turn_index(), 0);
    }

    #[test]
    fn test_renders_board_taller_than_terminal() {
        let mut cfg = config(&["red"], 0);
        cfg.board.width = 1;
        cfg.board.height = usize::from(u16::MAX);
        let mut app = App::new(&cfg);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.screen(), Screen::Game);
        assert!(screen_text(&app).contains("Connect Four"));
    }

    #[test]
    fn test_renders_both_screens() {
        let mut app = App::new(&config(&["red", "yellow"], 0));
        assert!(screen_text(&app).contains("yellow"));

        app.handle_key(key(KeyCode::Tab));
        let text = screen_text(&app);
        assert!(text.contains("Connect Four"));
        assert!(text.contains("red"));
    }
}
