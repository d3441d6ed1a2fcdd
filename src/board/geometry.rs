//! Chebyshev neighborhoods over a board.
//!
//! A cell's neighborhood at distance `d` is every other in-bounds cell whose
//! column and row each differ by at most `d`. At distance 1 that is the eight
//! surrounding cells (five on an edge, three in a corner).

use smallvec::SmallVec;

use crate::board::BoardState;
use crate::core::{BoardError, Color, Position, Square};

/// Cells around a center. 24 covers distance 2 without spilling.
pub type Neighborhood = SmallVec<[Square; 24]>;

/// Chebyshev distance between two cells.
#[must_use]
pub fn chebyshev_distance(x1: i32, y1: i32, x2: i32, y2: i32) -> u32 {
    Position::new(x1, y1).distance(Position::new(x2, y2))
}

/// All in-bounds cells other than `(x, y)` within Chebyshev distance `distance`,
/// with their current colors, row-major.
///
/// Fails if the center itself is off the board.
pub fn squares_within_distance(
    board: &BoardState,
    x: i32,
    y: i32,
    distance: u32,
) -> Result<Neighborhood, BoardError> {
    board.current_color(x, y)?;

    // Clip to the board; the center is in bounds, so neither side is 0.
    let d = i32::try_from(distance).unwrap_or(i32::MAX);
    let max_x = board.width() as i32 - 1;
    let max_y = board.height() as i32 - 1;

    let mut squares = Neighborhood::new();
    for y1 in y.saturating_sub(d).max(0)..=y.saturating_add(d).min(max_y) {
        for x1 in x.saturating_sub(d).max(0)..=x.saturating_add(d).min(max_x) {
            if (x1, y1) == (x, y) {
                continue;
            }
            squares.push(Square::new(x1, y1, board.current_color(x1, y1)?));
        }
    }
    Ok(squares)
}

/// The distance-1 neighborhood.
///
/// ```
/// use slime_wars::board::{squares_adjacent_to, BoardState};
///
/// let board = BoardState::new(8, 8);
/// assert_eq!(squares_adjacent_to(&board, 3, 3).unwrap().len(), 8);
/// assert_eq!(squares_adjacent_to(&board, 0, 3).unwrap().len(), 5);
/// assert_eq!(squares_adjacent_to(&board, 7, 7).unwrap().len(), 3);
/// ```
pub fn squares_adjacent_to(board: &BoardState, x: i32, y: i32) -> Result<Neighborhood, BoardError> {
    squares_within_distance(board, x, y, 1)
}

/// Whether any distance-1 neighbor holds `color`.
pub fn has_adjacent_color(board: &BoardState, x: i32, y: i32, color: Color) -> Result<bool, BoardError> {
    has_color_within_distance(board, x, y, color, 1)
}

/// Whether any neighbor within `distance` holds `color`.
pub fn has_color_within_distance(
    board: &BoardState,
    x: i32,
    y: i32,
    color: Color,
    distance: u32,
) -> Result<bool, BoardError> {
    Ok(squares_within_distance(board, x, y, distance)?
        .iter()
        .any(|s| s.color == color))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacent_counts() {
        let board = BoardState::new(8, 8);

        assert_eq!(squares_adjacent_to(&board, 3, 3).unwrap().len(), 8);
        assert_eq!(squares_adjacent_to(&board, 0, 0).unwrap().len(), 3);
        assert_eq!(squares_adjacent_to(&board, 7, 0).unwrap().len(), 3);
        assert_eq!(squares_adjacent_to(&board, 3, 0).unwrap().len(), 5);
        assert_eq!(squares_adjacent_to(&board, 7, 4).unwrap().len(), 5);
    }

    #[test]
    fn test_adjacent_excludes_center() {
        let board = BoardState::new(8, 8);
        let squares = squares_adjacent_to(&board, 3, 3).unwrap();
        assert!(!squares.iter().any(|s| (s.x, s.y) == (3, 3)));
        assert!(squares.iter().all(|s| chebyshev_distance(s.x, s.y, 3, 3) == 1));
    }

    #[test]
    fn test_adjacent_order_is_row_major() {
        let board = BoardState::new(4, 4);
        let positions: Vec<_> = squares_adjacent_to(&board, 1, 1)
            .unwrap()
            .iter()
            .map(|s| (s.x, s.y))
            .collect();
        assert_eq!(
            positions,
            vec![(0, 0), (1, 0), (2, 0), (0, 1), (2, 1), (0, 2), (1, 2), (2, 2)]
        );
    }

    #[test]
    fn test_within_distance_two() {
        let board = BoardState::new(8, 8);
        assert_eq!(squares_within_distance(&board, 4, 4, 2).unwrap().len(), 24);
        assert_eq!(squares_within_distance(&board, 0, 0, 2).unwrap().len(), 8);
        assert_eq!(squares_within_distance(&board, 4, 4, 0).unwrap().len(), 0);
    }

    #[test]
    fn test_within_distance_larger_than_board() {
        let board = BoardState::new(6, 6);

        assert_eq!(squares_within_distance(&board, 0, 0, 100_000).unwrap().len(), 35);
        assert_eq!(squares_within_distance(&board, 5, 2, 3_000_000_000).unwrap().len(), 35);
        assert_eq!(squares_within_distance(&board, 2, 5, i32::MAX as u32).unwrap().len(), 35);
        assert_eq!(squares_within_distance(&board, 3, 3, u32::MAX).unwrap().len(), 35);
        assert_eq!(has_color_within_distance(&board, 0, 0, Color::EMPTY, u32::MAX), Ok(true));
    }

    #[test]
    fn test_within_distance_carries_colors() {
        let mut board = BoardState::new(6, 6);
        board.set_color(2, 3, Color::RED).unwrap();

        let squares = squares_adjacent_to(&board, 3, 3).unwrap();
        assert!(squares.contains(&Square::new(2, 3, Color::RED)));
        assert!(squares.contains(&Square::new(4, 3, Color::EMPTY)));
    }

    #[test]
    fn test_center_out_of_bounds() {
        let board = BoardState::new(4, 4);
        assert!(squares_adjacent_to(&board, -1, 0).is_err());
        assert!(squares_within_distance(&board, 4, 0, 2).is_err());
        assert!(has_adjacent_color(&board, 0, 9, Color::RED).is_err());
    }

    #[test]
    fn test_finds_adjacent_color() {
        let mut board = BoardState::new(8, 8);
        let color = Color::new(1, 1).unwrap();
        board.set_color(3, 3, color).unwrap();

        assert_eq!(has_adjacent_color(&board, 3, 2, color), Ok(true));
        assert_eq!(has_adjacent_color(&board, 3, 1, color), Ok(false));
        assert_eq!(has_adjacent_color(&board, 3, 3, color), Ok(false));
        assert_eq!(has_color_within_distance(&board, 3, 1, color, 2), Ok(true));
    }

    #[test]
    fn test_chebyshev_distance() {
        assert_eq!(chebyshev_distance(0, 0, 0, 0), 0);
        assert_eq!(chebyshev_distance(0, 0, 1, 1), 1);
        assert_eq!(chebyshev_distance(0, 0, 2, 1), 2);
        assert_eq!(chebyshev_distance(5, 0, 0, 3), 5);
    }
}
