//! Starting layout.
//!
//! Each player starts with an L-shaped foothold of three cells in a corner:
//! the corner itself plus its two edge neighbors. Four players take the
//! corners clockwise from `(0, 0)`. Two players take opposite corners,
//! `(0, 0)` and `(maxX - 1, maxY - 1)`.

use crate::core::{Color, ConfigError, GameConfig, Square};

/// The three foothold cells for a corner at `(x, y)`.
///
/// `x` must be `0` or `width - 1`, `y` must be `0` or `height - 1`.
#[must_use]
pub fn fill_init_corner(width: usize, height: usize, x: i32, y: i32, color: Color) -> [Square; 3] {
    let inner_x = if x == 0 { 1 } else { width as i32 - 2 };
    let inner_y = if y == 0 { 1 } else { height as i32 - 2 };
    [
        Square::new(x, y, color),
        Square::new(x, inner_y, color),
        Square::new(inner_x, y, color),
    ]
}

/// Initial placements for every player, in seat order.
///
/// Validates the config first, so unsupported player counts fail here
/// rather than producing a partial layout.
pub fn init_board_setup(config: &GameConfig) -> Result<Vec<Square>, ConfigError> {
    config.validate()?;

    let max_x = config.width as i32 - 1;
    let max_y = config.height as i32 - 1;
    let corners = match config.player_count() {
        2 => vec![(0, 0), (max_x, max_y)],
        4 => vec![(0, 0), (max_x, 0), (max_x, max_y), (0, max_y)],
        n => return Err(ConfigError::UnsupportedPlayerCount(n)),
    };

    Ok(corners
        .iter()
        .zip(&config.player_colors)
        .flat_map(|(&(x, y), &color)| fill_init_corner(config.width, config.height, x, y, color))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_init_corner() {
        assert_eq!(
            fill_init_corner(6, 6, 0, 0, Color::RED),
            [
                Square::new(0, 0, Color::RED),
                Square::new(0, 1, Color::RED),
                Square::new(1, 0, Color::RED),
            ]
        );
        assert_eq!(
            fill_init_corner(6, 8, 5, 7, Color::GREEN),
            [
                Square::new(5, 7, Color::GREEN),
                Square::new(5, 6, Color::GREEN),
                Square::new(4, 7, Color::GREEN),
            ]
        );
    }

    #[test]
    fn test_four_player_setup() {
        let moves = init_board_setup(&GameConfig::four_player(6, 6)).unwrap();
        assert_eq!(moves.len(), 12);

        assert!(moves.contains(&Square::new(0, 0, Color::RED)));
        assert!(moves.contains(&Square::new(5, 0, Color::GREEN)));
        assert!(moves.contains(&Square::new(4, 0, Color::GREEN)));
        assert!(moves.contains(&Square::new(5, 5, Color::YELLOW)));
        assert!(moves.contains(&Square::new(0, 5, Color::ORANGE)));
        assert!(moves.contains(&Square::new(0, 4, Color::ORANGE)));

        for color in Color::PALETTE {
            assert_eq!(moves.iter().filter(|s| s.color == color).count(), 3);
        }
    }

    #[test]
    fn test_two_player_setup() {
        let moves = init_board_setup(&GameConfig::two_player(8, 6)).unwrap();
        assert_eq!(
            moves,
            vec![
                Square::new(0, 0, Color::RED),
                Square::new(0, 1, Color::RED),
                Square::new(1, 0, Color::RED),
                Square::new(7, 5, Color::GREEN),
                Square::new(7, 4, Color::GREEN),
                Square::new(6, 5, Color::GREEN),
            ]
        );
    }

    #[test]
    fn test_setup_cells_are_distinct_on_smallest_board() {
        let moves = init_board_setup(&GameConfig::four_player(4, 4)).unwrap();
        let mut positions: Vec<_> = moves.iter().map(|s| (s.x, s.y)).collect();
        positions.sort_unstable();
        positions.dedup();
        assert_eq!(positions.len(), 12);
    }

    #[test]
    fn test_setup_rejects_unsupported_counts() {
        let three = GameConfig::new(6, 6).with_players([Color::RED, Color::GREEN, Color::YELLOW]);
        assert_eq!(init_board_setup(&three), Err(ConfigError::UnsupportedPlayerCount(3)));

        let one = GameConfig::new(6, 6).with_players([Color::RED]);
        assert_eq!(init_board_setup(&one), Err(ConfigError::UnsupportedPlayerCount(1)));
    }
}
