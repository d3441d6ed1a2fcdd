//! Board state: a fixed grid of colors plus an empty-cell counter.
//!
//! ## Empty counter
//!
//! `empty_squares` is maintained incrementally by `set_color`, the single
//! write path. It changes only when a cell crosses between empty and
//! non-empty, and is never recomputed after construction.
//!
//! ## Ordering
//!
//! Rows are `y`. Every enumeration walks row-major: `y` outer, `x` inner.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::config::{MAX_BOARD_SIDE, MIN_BOARD_SIDE};
use crate::core::{BoardError, Color, Position, Square};
use crate::render::UpdateSink;

/// Colors tied for the highest count. Up to four players plus empty.
pub type ColorSet = SmallVec<[Color; 4]>;

/// Mutable grid of cell colors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard", into = "RawBoard")]
pub struct BoardState {
    width: usize,
    height: usize,
    /// Row-major cells, `y * width + x`.
    cells: Vec<Color>,
    empty_squares: usize,
}

/// Serialized form. The counter is derived, so it is not stored.
#[derive(Serialize, Deserialize)]
struct RawBoard {
    width: usize,
    height: usize,
    cells: Vec<Color>,
}

impl TryFrom<RawBoard> for BoardState {
    type Error = &'static str;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let sides = MIN_BOARD_SIDE..=MAX_BOARD_SIDE;
        if !sides.contains(&raw.width) || !sides.contains(&raw.height) {
            return Err("board side outside 4..=256");
        }
        if raw.width.checked_mul(raw.height) != Some(raw.cells.len()) {
            return Err("cell count does not match board dimensions");
        }
        let empty_squares = raw.cells.iter().filter(|c| c.is_empty()).count();
        Ok(Self {
            width: raw.width,
            height: raw.height,
            cells: raw.cells,
            empty_squares,
        })
    }
}

impl From<BoardState> for RawBoard {
    fn from(board: BoardState) -> Self {
        Self {
            width: board.width,
            height: board.height,
            cells: board.cells,
        }
    }
}

impl BoardState {
    /// Create an all-empty board.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        let cells = vec![Color::EMPTY; width * height];
        let empty_squares = cells.iter().filter(|c| c.is_empty()).count();
        Self {
            width,
            height,
            cells,
            empty_squares,
        }
    }

    /// Board width (`maxX`).
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Board height (`maxY`).
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells currently holding the empty color.
    #[must_use]
    pub fn empty_squares(&self) -> usize {
        self.empty_squares
    }

    /// True when no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.empty_squares == 0
    }

    /// Whether `(x, y)` lies on the board.
    #[must_use]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    fn index(&self, x: i32, y: i32) -> Result<usize, BoardError> {
        if self.in_bounds(x, y) {
            Ok(y as usize * self.width + x as usize)
        } else {
            Err(BoardError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    fn position_of(&self, index: usize) -> Position {
        Position::new((index % self.width) as i32, (index / self.width) as i32)
    }

    /// Color at `(x, y)`.
    pub fn current_color(&self, x: i32, y: i32) -> Result<Color, BoardError> {
        let i = self.index(x, y)?;
        Ok(self.cells[i])
    }

    /// Color at a position.
    pub fn color_at(&self, pos: Position) -> Result<Color, BoardError> {
        self.current_color(pos.x, pos.y)
    }

    /// Whether `(x, y)` currently holds `color`.
    pub fn square_is_color(&self, x: i32, y: i32, color: Color) -> Result<bool, BoardError> {
        Ok(self.current_color(x, y)? == color)
    }

    /// Overwrite a cell, keeping the empty counter in step.
    pub fn set_color(&mut self, x: i32, y: i32, color: Color) -> Result<(), BoardError> {
        let i = self.index(x, y)?;
        let old = self.cells[i];
        match (old.is_empty(), color.is_empty()) {
            (false, true) => self.empty_squares += 1,
            (true, false) => self.empty_squares -= 1,
            _ => {}
        }
        self.cells[i] = color;
        Ok(())
    }

    /// Advance a cell to the next color in cycling order.
    pub fn cycle_color(&mut self, x: i32, y: i32) -> Result<(), BoardError> {
        let next = self.current_color(x, y)?.next();
        self.set_color(x, y, next)
    }

    /// Reset a cell to empty.
    pub fn clear(&mut self, x: i32, y: i32) -> Result<(), BoardError> {
        self.set_color(x, y, Color::EMPTY)
    }

    /// Write one update.
    pub fn apply(&mut self, square: &Square) -> Result<(), BoardError> {
        self.set_color(square.x, square.y, square.color)
    }

    /// Write updates in order.
    ///
    /// Stops at the first out-of-bounds entry; earlier entries stay written.
    pub fn apply_all<'a>(&mut self, updates: impl IntoIterator<Item = &'a Square>) -> Result<(), BoardError> {
        for square in updates {
            self.apply(square)?;
        }
        Ok(())
    }

    /// Every cell, row-major, with its color.
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &color)| Square::at(self.position_of(i), color))
    }

    /// All cells currently equal to `color`, row-major.
    #[must_use]
    pub fn squares_with_color(&self, color: Color) -> Vec<Square> {
        self.squares().filter(|s| s.color == color).collect()
    }

    /// How many cells hold `color`.
    #[must_use]
    pub fn count_of(&self, color: Color) -> usize {
        self.cells.iter().filter(|&&c| c == color).count()
    }

    /// Each distinct color on the board, including empty, with its cell count.
    #[must_use]
    pub fn colors_with_counts(&self) -> FxHashMap<Color, usize> {
        let mut counts = FxHashMap::default();
        for &color in &self.cells {
            *counts.entry(color).or_insert(0) += 1;
        }
        counts
    }

    /// Colors whose count equals the maximum, in first-seen (row-major) order.
    ///
    /// The empty color takes part like any other.
    #[must_use]
    pub fn colors_that_have_max_count(&self) -> ColorSet {
        self.leaders(|_| true)
    }

    /// Like `colors_that_have_max_count`, but ignoring empty cells.
    ///
    /// Returns an empty set for an empty board.
    #[must_use]
    pub fn occupied_colors_that_have_max_count(&self) -> ColorSet {
        self.leaders(|c| !c.is_empty())
    }

    fn leaders(&self, include: impl Fn(Color) -> bool) -> ColorSet {
        let counts = self.colors_with_counts();
        let max = counts
            .iter()
            .filter(|(c, _)| include(**c))
            .map(|(_, &n)| n)
            .max();
        let Some(max) = max else {
            return ColorSet::new();
        };

        let mut leaders = ColorSet::new();
        for &color in &self.cells {
            if include(color) && counts[&color] == max && !leaders.contains(&color) {
                leaders.push(color);
            }
        }
        leaders
    }
}

impl UpdateSink for BoardState {
    fn apply_update(&mut self, update: &Square) -> Result<(), BoardError> {
        self.apply(update)
    }
}

impl std::fmt::Display for BoardState {
    /// One line per row, one glyph per cell.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.width == 0 {
            return Ok(());
        }
        for (y, row) in self.cells.chunks(self.width).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for color in row {
                write!(f, "{}", color.glyph())?;
            }
        }
        Ok(())
    }
}
