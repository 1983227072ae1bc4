use std::fmt;

/// Identifier of a registered player, displayed as `p1`, `p2`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}", self.0)
    }
}

/// A participant in a game. The color is an opaque display attribute; the
/// rules never look at it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub color: String,
}

impl Player {
    pub fn new(id: PlayerId, color: impl Into<String>) -> Self {
        Player {
            id,
            color: color.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_display() {
        assert_eq!(PlayerId(1).to_string(), "p1");
        assert_eq!(PlayerId(12).to_string(), "p12");
    }

    #[test]
    fn test_player_new() {
        let player = Player::new(PlayerId(3), "teal");
        assert_eq!(player.color, "teal");
        assert_eq!(player.id, PlayerId(3));
    }
}
