//! Game rules: legality, captures, starting layout.
//!
//! `RulesEngine` is the seam between the turn sequencer in `games` and the
//! rule logic. `SlimeWarsRules` wires it to the free functions in
//! `validator`, `capture` and `setup`.

pub mod engine;
pub mod validator;
pub mod capture;
pub mod setup;

pub use engine::{GameResult, RulesEngine, SlimeWarsRules};
pub use validator::{has_any_valid_move, is_valid_move, MAX_MOVE_DISTANCE};
pub use capture::{captures, Captures};
pub use setup::{fill_init_corner, init_board_setup};
