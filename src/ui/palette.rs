use ratatui::style::Color;

use crate::game::Player;

/// Interpret a player's display attribute as a terminal color. Accepts the
/// names ratatui knows (`red`, `light-blue`, `gray`, ...), `#rrggbb` and
/// 256-color indexes.
pub fn parse_color(name: &str) -> Option<Color> {
    match name.trim().parse::<Color>() {
        Ok(Color::Reset) | Err(_) => None,
        Ok(color) => Some(color),
    }
}

/// Color a player's pieces are drawn in.
pub fn player_color(player: &Player) -> Color {
    parse_color(&player.color).unwrap_or(Color::White)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::PlayerId;

    #[test]
    fn test_parse_named_colors() {
        assert_eq!(parse_color("red"), Some(Color::Red));
        assert_eq!(parse_color(" yellow "), Some(Color::Yellow));
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_color("#ff8000"), Some(Color::Rgb(255, 128, 0)));
    }

    #[test]
    fn test_rejects_unknown_color() {
        assert_eq!(parse_color("notacolor"), None);
        assert_eq!(parse_color(""), None);
        assert_eq!(parse_color("reset"), None);
    }

    #[test]
    fn test_player_color_falls_back_to_white() {
        let player = Player::new(PlayerId(1), "sparkly");
        assert_eq!(player_color(&player), Color::White);
    }
}
