//! Read-only board access for renderers.

use crate::board::{BoardState, ColorSet};
use crate::core::{BoardError, Color, Square};

/// Borrowed, read-only view of a board.
///
/// Forwards exactly the queries a renderer needs for full redraws and
/// end-of-game presentation. There is no way to write through it.
#[derive(Clone, Copy, Debug)]
pub struct BoardView<'a> {
    board: &'a BoardState,
}

impl<'a> BoardView<'a> {
    /// Wrap a board.
    #[must_use]
    pub fn new(board: &'a BoardState) -> Self {
        Self { board }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.board.width()
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.board.height()
    }

    /// Color at `(x, y)`.
    pub fn current_color(&self, x: i32, y: i32) -> Result<Color, BoardError> {
        self.board.current_color(x, y)
    }

    /// Cells holding `color`, row-major.
    #[must_use]
    pub fn squares_with_color(&self, color: Color) -> Vec<Square> {
        self.board.squares_with_color(color)
    }

    /// Colors tied for the most cells.
    #[must_use]
    pub fn colors_that_have_max_count(&self) -> ColorSet {
        self.board.colors_that_have_max_count()
    }

    /// True when no cell is empty.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.board.is_full()
    }
}

impl std::fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self.board, f)
    }
}
