//! Capture resolution.
//!
//! Every successful placement converts the eight cells around the target:
//! each occupied neighbor of another color takes the mover's color. Empty
//! neighbors and the mover's own cells are left alone. Clone and jump
//! capture identically.

use smallvec::SmallVec;
use tracing::trace;

use crate::board::{squares_adjacent_to, BoardState};
use crate::core::{BoardError, Color, Position, Square};

/// Conversions produced by one placement. At most eight.
pub type Captures = SmallVec<[Square; 8]>;

/// Neighbors of `target` that flip to `player_color`, already recolored.
pub fn captures(board: &BoardState, target: Position, player_color: Color) -> Result<Captures, BoardError> {
    let converted: Captures = squares_adjacent_to(board, target.x, target.y)?
        .into_iter()
        .filter(|s| !s.color.is_empty() && s.color != player_color)
        .map(|s| Square::new(s.x, s.y, player_color))
        .collect();

    trace!(%target, count = converted.len(), "resolved captures");
    Ok(converted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captures_flip_other_colors() {
        let mut board = BoardState::new(6, 6);
        board.set_color(1, 1, Color::GREEN).unwrap();
        board.set_color(3, 3, Color::YELLOW).unwrap();
        board.set_color(2, 1, Color::RED).unwrap();
        board.set_color(4, 4, Color::GREEN).unwrap();

        let result = captures(&board, Position::new(2, 2), Color::RED).unwrap();
        assert_eq!(
            result.as_slice(),
            &[Square::new(1, 1, Color::RED), Square::new(3, 3, Color::RED)]
        );
    }

    #[test]
    fn test_captures_skip_empty_and_own() {
        let mut board = BoardState::new(6, 6);
        board.set_color(1, 2, Color::RED).unwrap();

        let result = captures(&board, Position::new(2, 2), Color::RED).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_captures_all_eight() {
        let mut board = BoardState::new(3, 3);
        for y in 0..3 {
            for x in 0..3 {
                board.set_color(x, y, Color::ORANGE).unwrap();
            }
        }
        board.clear(1, 1).unwrap();

        let result = captures(&board, Position::new(1, 1), Color::GREEN).unwrap();
        assert_eq!(result.len(), 8);
        assert!(result.iter().all(|s| s.color == Color::GREEN));
    }

    #[test]
    fn test_captures_at_corner() {
        let mut board = BoardState::new(4, 4);
        board.set_color(1, 0, Color::GREEN).unwrap();
        board.set_color(0, 1, Color::YELLOW).unwrap();
        board.set_color(1, 1, Color::GREEN).unwrap();

        let result = captures(&board, Position::new(0, 0), Color::RED).unwrap();
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_captures_out_of_bounds() {
        let board = BoardState::new(4, 4);
        assert!(captures(&board, Position::new(4, 4), Color::RED).is_err());
    }
}
