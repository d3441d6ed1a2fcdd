//! Grid positions and colored squares.
//!
//! Coordinates are signed so that callers can pass raw offsets (`x - 1`,
//! `y + 2`) and get an `OutOfBounds` error instead of an integer underflow.

use serde::{Deserialize, Serialize};

use super::color::Color;

/// A cell address on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Create a position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev distance: the larger of the column and row differences.
    ///
    /// ```
    /// use slime_wars::core::Position;
    ///
    /// assert_eq!(Position::new(0, 0).distance(Position::new(2, 1)), 2);
    /// assert_eq!(Position::new(3, 3).distance(Position::new(3, 3)), 0);
    /// ```
    #[must_use]
    pub const fn distance(self, other: Position) -> u32 {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        if dx > dy {
            dx
        } else {
            dy
        }
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A position paired with a color.
///
/// Used both for board queries ("this cell currently holds this color") and
/// for board updates ("write this color at this cell"). Equality covers all
/// three fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub x: i32,
    pub y: i32,
    pub color: Color,
}

impl Square {
    /// Create a square.
    #[must_use]
    pub const fn new(x: i32, y: i32, color: Color) -> Self {
        Self { x, y, color }
    }

    /// Create a square at a position.
    #[must_use]
    pub const fn at(position: Position, color: Color) -> Self {
        Self { x: position.x, y: position.y, color }
    }

    /// The square's position, without its color.
    #[must_use]
    pub const fn position(&self) -> Position {
        Position { x: self.x, y: self.y }
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X,Y={},{} {}", self.x, self.y, self.color)
    }
}
