//! Move legality.
//!
//! A target must be empty. With no origin, one of its eight neighbors must
//! already hold the mover's color. With an origin, the origin must hold the
//! mover's color and lie within `MAX_MOVE_DISTANCE` of the target.

use crate::board::{has_adjacent_color, has_color_within_distance, BoardState};
use crate::core::{BoardError, Color, Origin, Position};

/// Farthest an origin may be from its target (2 = jump).
pub const MAX_MOVE_DISTANCE: u32 = 2;

/// Whether `player_color` may place at `target` from `origin`.
///
/// Fails only when `target` or a preselected origin is off the board.
pub fn is_valid_move(
    board: &BoardState,
    player_color: Color,
    target: Position,
    origin: Origin,
) -> Result<bool, BoardError> {
    if !board.color_at(target)?.is_empty() || player_color.is_empty() {
        return Ok(false);
    }

    match origin {
        Origin::Unselected => has_adjacent_color(board, target.x, target.y, player_color),
        Origin::Preselected(from) => {
            Ok(board.color_at(from)? == player_color && from.distance(target) <= MAX_MOVE_DISTANCE)
        }
    }
}

/// Whether any cell of `player_color` has an empty cell within move range.
pub fn has_any_valid_move(board: &BoardState, player_color: Color) -> bool {
    if player_color.is_empty() {
        return false;
    }
    board.squares_with_color(player_color).iter().any(|own| {
        matches!(
            has_color_within_distance(board, own.x, own.y, Color::EMPTY, MAX_MOVE_DISTANCE),
            Ok(true)
        )
    })
}
