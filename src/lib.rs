//! # Multi Connect Four
//!
//! Connect Four for any number of players on a board of any size. The rules
//! engine is independent of the terminal UI built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, players, lobby registry, engine state machine
//! - [`ui`]: Terminal UI: lobby and game view
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
