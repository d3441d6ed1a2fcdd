//! # slime-wars
//!
//! Rules engine for a territory-capture game on a rectangular grid, for 2 or
//! 4 players.
//!
//! ## Design Principles
//!
//! 1. **Single Source of Truth**: The engine owns the board. Renderers get a
//!    read-only `BoardView` and the update list of each move.
//!
//! 2. **Illegal Is Not an Error**: An illegal move yields an empty update
//!    list and leaves the game untouched. Errors are reserved for
//!    coordinates off the board and bad configuration.
//!
//! 3. **No Time, No I/O**: Everything is synchronous and bounded. Input
//!    polling, animation and device output live outside the crate.
//!
//! ## Modules
//!
//! - `core`: Colors, squares, players, move requests, config, errors
//! - `board`: Board storage and Chebyshev neighborhoods
//! - `rules`: Move legality, captures, starting layout, `RulesEngine`
//! - `games`: The turn-sequencing `GameEngine`
//! - `render`: Boundary types for the presentation layer
//!
//! ## Example
//!
//! ```
//! use slime_wars::{GameConfig, GameEngine, MoveRequest, PlayerId};
//!
//! let mut game = GameEngine::new(GameConfig::four_player(6, 6)).unwrap();
//! let updates = game.play(MoveRequest::place(PlayerId::new(0), 1, 1)).unwrap();
//! assert_eq!(updates.len(), 1);
//! assert_eq!(game.current_player(), Some(PlayerId::new(1)));
//! ```

pub mod core;
pub mod board;
pub mod rules;
pub mod games;
pub mod render;

// Re-export commonly used types
pub use crate::core::{
    BoardError, Color, ColorError, ConfigError, Error, GameConfig, MoveKind, MoveRecord,
    MoveRequest, Origin, PlayerId, PlayerMap, Position, Square, UpdateList,
};

pub use crate::board::{BoardState, ColorSet};

pub use crate::rules::{GameResult, RulesEngine, SlimeWarsRules};

pub use crate::games::slime_wars::{CompletionReason, GameEngine, Phase, PressOutcome};

pub use crate::render::{BoardView, UpdateSink};
