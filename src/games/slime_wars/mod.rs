//! Slime Wars: a territory-capture game for 2 or 4 players.
//!
//! - Each player starts with an L-shaped foothold in a corner
//! - On your turn: fill an empty cell next to one of yours (clone), or
//!   move one of your cells two steps away (jump)
//! - Every enemy cell touching the filled cell becomes yours
//! - Players with nowhere to go are skipped
//! - The game ends when the board is full; most cells wins

mod game;
mod phase;

pub use game::GameEngine;
pub use phase::{CompletionReason, Phase, PressOutcome};
