//! Lobby of players waiting for a game.
//!
//! The registry outlives individual games: it hands a copy of its player list
//! to each new [`GameEngine`] and is never touched by the engine afterwards.

use tracing::info;

use super::{GameEngine, Player, PlayerId};
use crate::error::SetupError;

/// Ordered list of registered players. Registration order is turn order.
#[derive(Debug, Clone)]
pub struct PlayerRegistry {
    players: Vec<Player>,
    /// Id handed to the next registration. Never reused, even after `clear`.
    next_id: u32,
}

impl PlayerRegistry {
    pub fn new() -> Self {
        PlayerRegistry {
            players: Vec::new(),
            next_id: 1,
        }
    }

    /// Add a player with the given display color and return its id.
    pub fn register(&mut self, color: impl Into<String>) -> PlayerId {
        let id = PlayerId(self.next_id);
        self.next_id += 1;
        let player = Player::new(id, color);
        info!(player = %id, color = %player.color, "player registered");
        self.players.push(player);
        id
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Remove every player. Ids keep counting up.
    pub fn clear(&mut self) {
        self.players.clear();
    }

    /// Create a new game for the currently registered players.
    pub fn start_game(&self, width: usize, height: usize) -> Result<GameEngine, SetupError> {
        GameEngine::new(width, height, self.players.clone())
    }
}

impl Default for PlayerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::MoveResult;

    #[test]
    fn test_register_assigns_sequential_ids() {
        let mut registry = PlayerRegistry::new();
        assert!(registry.is_empty());

        let red = registry.register("red");
        let blue = registry.register("blue");

        assert_eq!(red, PlayerId(1));
        assert_eq!(blue, PlayerId(2));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(blue).map(|p| p.color.as_str()), Some("blue"));
        assert_eq!(registry.get(PlayerId(9)), None);
    }

    #[test]
    fn test_clear_keeps_counter() {
        let mut registry = PlayerRegistry::new();
        registry.register("red");
        registry.clear();
        assert!(registry.is_empty());
        assert_eq!(registry.register("green"), PlayerId(2));
    }

    #[test]
    fn test_start_game_uses_registration_order() {
        let mut registry = PlayerRegistry::new();
        registry.register("red");
        registry.register("yellow");
        registry.register("green");

        let mut game = registry.start_game(7, 6).unwrap();
        assert_eq!(game.players(), registry.players());
        assert_eq!(game.current_player().color, "red");

        match game.apply_move(0) {
            MoveResult::Continue { next, .. } => assert_eq!(next.color, "yellow"),
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn test_start_game_requires_players() {
        let registry = PlayerRegistry::new();
        assert_eq!(registry.start_game(7, 6).unwrap_err(), SetupError::NoPlayers);
    }

    #[test]
    fn test_games_do_not_affect_registry() {
        let mut registry = PlayerRegistry::new();
        registry.register("red");
        let mut first = registry.start_game(4, 4).unwrap();
        first.apply_move(0);

        registry.register("blue");
        let second = registry.start_game(4, 4).unwrap();
        assert_eq!(first.players().len(), 1);
        assert_eq!(second.players().len(), 2);
        assert_eq!(second.moves_played(), 0);
    }
}
