//! Error types.
//!
//! Only programming and configuration mistakes are errors. An illegal move is
//! a normal outcome and is reported as an empty update list instead.

use derive_more::{Display, Error, From};

use super::color::{Color, ColorError};

/// A coordinate fell outside the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    #[display("cell ({x}, {y}) is outside the {width}x{height} board")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },
}

/// Rejected game setup.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    /// Only 2 and 4 players have defined starting layouts.
    #[display("unsupported player count {_0} (expected 2 or 4)")]
    UnsupportedPlayerCount(#[error(not(source))] usize),

    /// A player was given the reserved empty color.
    #[display("player {_0} was assigned the empty color")]
    EmptyPlayerColor(#[error(not(source))] usize),

    /// Two players share a color.
    #[display("color {_0} is assigned to more than one player")]
    DuplicatePlayerColor(#[error(not(source))] Color),

    /// Corner footholds would overlap.
    #[display("board {width}x{height} is too small (minimum 4x4)")]
    BoardTooSmall { width: usize, height: usize },

    #[display("board {width}x{height} is too large (maximum 256x256)")]
    BoardTooLarge { width: usize, height: usize },

    /// A starting board does not match the configured size.
    #[display("board is {found_width}x{found_height} but the config says {width}x{height}")]
    BoardSizeMismatch {
        width: usize,
        height: usize,
        found_width: usize,
        found_height: usize,
    },
}

/// Any error raised by the crate.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error, From)]
pub enum Error {
    #[display("{_0}")]
    Board(BoardError),
    #[display("{_0}")]
    Config(ConfigError),
    #[display("{_0}")]
    Color(ColorError),
}
