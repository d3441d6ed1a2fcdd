//! Game phases and input outcomes.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, Position, UpdateList};

/// Why a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompletionReason {
    /// No empty cell remains.
    BoardFull,
    /// Empty cells remain but no player can reach one.
    Stalemate,
}

/// Where the game stands.
///
/// `Turn` repeats until the game reaches `Complete`, which is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for this player's move.
    Turn(PlayerId),
    /// Finished.
    Complete(CompletionReason),
}

impl Phase {
    /// The player to move, if the game is still running.
    #[must_use]
    pub const fn current_player(self) -> Option<PlayerId> {
        match self {
            Phase::Turn(player) => Some(player),
            Phase::Complete(_) => None,
        }
    }

    #[must_use]
    pub const fn is_complete(self) -> bool {
        matches!(self, Phase::Complete(_))
    }
}

/// Result of pressing a cell through the two-step input flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PressOutcome {
    /// The pressed cell is the mover's own; it is now the move origin.
    OriginSelected(Position),
    /// A move was applied; these are its writes.
    Applied(UpdateList),
    /// Nothing changed. The same player should press again.
    Rejected,
}
