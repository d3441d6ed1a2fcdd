//! Core value types: colors, squares, players, moves, configuration, errors.
//!
//! Everything here is a plain value with structural equality. Mutable game
//! state lives in `board` and `games`.

pub mod color;
pub mod square;
pub mod player;
pub mod config;
pub mod action;
pub mod error;

pub use color::{Color, ColorError};
pub use square::{Position, Square};
pub use player::{PlayerId, PlayerMap};
pub use config::GameConfig;
pub use action::{MoveKind, MoveRecord, MoveRequest, Origin, UpdateList};
pub use error::{BoardError, ConfigError, Error};
