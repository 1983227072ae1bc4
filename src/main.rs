use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use multi_connect_four::config::AppConfig;
use multi_connect_four::ui::App;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

/// Play Connect Four with any number of players in the terminal.
#[derive(Parser)]
#[command(name = "multi_connect_four", about = "Multi-player Connect Four")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override board width
    #[arg(long)]
    width: Option<usize>,

    /// Override board height
    #[arg(long)]
    height: Option<usize>,

    /// Register a player with this color (repeatable)
    #[arg(long = "player")]
    players: Vec<String>,

    /// File that receives log output
    #[arg(long, default_value = "connect_four.log")]
    log_file: PathBuf,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    init_logging(&cli.log_file)?;

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    if let Some(width) = cli.width {
        config.board.width = width;
    }
    if let Some(height) = cli.height {
        config.board.height = height;
    }
    config.lobby.players.extend(cli.players);
    config.validate().context("invalid configuration")?;

    info!(
        width = config.board.width,
        height = config.board.height,
        players = config.lobby.players.len(),
        "starting"
    );

    run(&config).context("terminal UI failed")
}

/// Log to a file so output does not interfere with the TUI.
fn init_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("installing log subscriber: {e}"))?;
    Ok(())
}

fn run(config: &AppConfig) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let res = app.run(&mut terminal);

    // Restore terminal even if the app failed
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_logging_init_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        init_logging(&dir.path().join("first.log")).unwrap();
        let err = init_logging(&dir.path().join("second.log")).unwrap_err();
        assert!(err.to_string().starts_with("installing log subscriber"));
    }
}
