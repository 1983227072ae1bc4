use std::collections::HashSet;

use tracing::{debug, info, trace};

use super::board::WIN_LENGTH;
use super::{Board, Player, PlayerId};
use crate::error::SetupError;

/// Where the game is in its lifecycle. `Won` and `Tied` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Active,
    Won(PlayerId),
    Tied,
}

/// The cell filled by an accepted move, so a front end can draw it without
/// asking the engine again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub player: PlayerId,
}

/// Outcome of a single `apply_move` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveResult {
    /// The mover completed four in a row.
    Win { placed: Placement, winner: Player },
    /// The board filled up without a winner.
    Tie { placed: Placement },
    /// Play goes on with `next`.
    Continue { placed: Placement, next: Player },
    /// Full column, unknown column, or finished game. Nothing changed.
    Rejected,
}

impl MoveResult {
    pub fn placement(&self) -> Option<Placement> {
        match self {
            MoveResult::Win { placed, .. }
            | MoveResult::Tie { placed }
            | MoveResult::Continue { placed, .. } => Some(*placed),
            MoveResult::Rejected => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, MoveResult::Win { .. } | MoveResult::Tie { .. })
    }
}

/// Rules engine for one game: owns the board and cycles turns through the
/// players in the order they were given.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    players: Vec<Player>,
    turn: usize,
    status: GameStatus,
    moves_played: usize,
}

impl GameEngine {
    /// Start a fresh game. Fails if either dimension is zero, the player list
    /// is empty, or two players share an id.
    pub fn new(width: usize, height: usize, players: Vec<Player>) -> Result<Self, SetupError> {
        if width == 0 {
            return Err(SetupError::ZeroWidth);
        }
        if height == 0 {
            return Err(SetupError::ZeroHeight);
        }
        if width.checked_mul(height).is_none() {
            return Err(SetupError::TooLarge { width, height });
        }
        if players.is_empty() {
            return Err(SetupError::NoPlayers);
        }
        let mut seen = HashSet::with_capacity(players.len());
        for player in &players {
            if !seen.insert(player.id) {
                return Err(SetupError::DuplicatePlayer(player.id));
            }
        }

        info!(width, height, players = players.len(), "new game");

        Ok(GameEngine {
            board: Board::new(width, height),
            players,
            turn: 0,
            status: GameStatus::Active,
            moves_played: 0,
        })
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Player whose move it is (or who made the final move once the game is over).
    pub fn current_player(&self) -> &Player {
        &self.players[self.turn]
    }

    pub fn turn_index(&self) -> usize {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if game is over
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::Active
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Row a piece dropped in column `x` would land on, or `None` if the
    /// column is full or out of range.
    pub fn legal_drop_column(&self, x: usize) -> Option<usize> {
        self.board.drop_row(x)
    }

    /// Get list of legal columns (not full)
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_over() {
            return Vec::new();
        }
        self.board.legal_columns()
    }

    /// The four cells that decided the game, if someone won.
    pub fn winning_line(&self) -> Option<[(usize, usize); WIN_LENGTH]> {
        match self.status {
            GameStatus::Won(id) => self.board.winning_line(id),
            _ => None,
        }
    }

    /// Drop the current player's piece into column `x`.
    pub fn apply_move(&mut self, x: usize) -> MoveResult {
        if self.is_over() {
            trace!(column = x, "move after game end ignored");
            return MoveResult::Rejected;
        }
        let Some(row) = self.legal_drop_column(x) else {
            trace!(column = x, "move into full or unknown column ignored");
            return MoveResult::Rejected;
        };

        let mover = self.players[self.turn].clone();
        self.board.place(row, x, mover.id);
        self.moves_played += 1;
        let placed = Placement {
            row,
            col: x,
            player: mover.id,
        };
        debug!(player = %mover.id, row, col = x, "piece placed");

        // A move that fills the board and completes a line is a win.
        if self.board.has_four(mover.id) {
            self.status = GameStatus::Won(mover.id);
            info!(winner = %mover.id, color = %mover.color, moves = self.moves_played, "game won");
            return MoveResult::Win {
                placed,
                winner: mover,
            };
        }

        if self.board.is_full() {
            self.status = GameStatus::Tied;
            info!(moves = self.moves_played, "game tied");
            return MoveResult::Tie { placed };
        }

        self.turn = (self.turn + 1) % self.players.len();
        MoveResult::Continue {
            placed,
            next: self.players[self.turn].clone(),
        }
    }
}
