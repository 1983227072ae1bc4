use std::path::PathBuf;

use crate::game::PlayerId;

/// Errors that can occur when setting up a new game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("board width must be > 0")]
    ZeroWidth,

    #[error("board height must be > 0")]
    ZeroHeight,

    #[error("board of {width} x {height} cells is too large")]
    TooLarge { width: usize, height: usize },

    #[error("a game needs at least one player")]
    NoPlayers,

    #[error("player {0} appears more than once")]
    DuplicatePlayer(PlayerId),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_error_display() {
        assert_eq!(SetupError::NoPlayers.to_string(), "a game needs at least one player");
        assert_eq!(
            SetupError::DuplicatePlayer(PlayerId(2)).to_string(),
            "player p2 appears more than once"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("board.width must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: board.width must be > 0"
        );
    }
}
