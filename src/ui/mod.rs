//! Terminal UI: a lobby for registering players and a game view that forwards
//! column choices to the engine.

mod app;
mod game_view;
mod lobby_view;
pub mod palette;

pub use app::{App, Screen};
