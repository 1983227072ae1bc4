//! Core Connect Four rules: board representation, players, the lobby
//! registry, and the game engine state machine. Nothing here knows about the
//! terminal.

mod board;
mod player;
mod registry;
mod state;

pub use board::{Board, Cell, WIN_LENGTH};
pub use player::{Player, PlayerId};
pub use registry::PlayerRegistry;
pub use state::{GameEngine, GameStatus, MoveResult, Placement};
