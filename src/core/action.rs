//! Move requests and board updates.
//!
//! A move is a target cell plus an optional origin. Without an origin the
//! move clones from any adjacent cell of the mover's color. With an origin
//! the move is a clone (origin at distance 1, origin kept) or a jump (origin
//! at distance 2, origin emptied).
//!
//! Applying a move produces an `UpdateList`: the ordered cell writes that
//! turn the old board into the new one. The list is also the only thing a
//! renderer needs to stay in sync.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;
use super::square::{Position, Square};

/// Ordered cell writes produced by one move.
///
/// At most 1 target + 8 captures + 1 vacated origin, so ten fit inline.
pub type UpdateList = SmallVec<[Square; 10]>;

/// Where a move starts from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Origin {
    /// No origin chosen: the target must touch one of the mover's cells.
    #[default]
    Unselected,
    /// A cell of the mover's color chosen beforehand.
    Preselected(Position),
}

impl Origin {
    /// The preselected cell, if any.
    #[must_use]
    pub const fn position(self) -> Option<Position> {
        match self {
            Origin::Unselected => None,
            Origin::Preselected(pos) => Some(pos),
        }
    }
}

impl From<Option<Position>> for Origin {
    fn from(pos: Option<Position>) -> Self {
        pos.map_or(Origin::Unselected, Origin::Preselected)
    }
}

/// How a legal move treats its origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// Target is adjacent to the origin (or to any own cell); origin stays.
    Clone,
    /// Target is two cells from the origin; origin is vacated.
    Jump,
}

/// A player's request to place at `target`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRequest {
    pub player: PlayerId,
    pub target: Position,
    pub origin: Origin,
}

impl MoveRequest {
    /// A clone-from-adjacency request with no origin.
    #[must_use]
    pub const fn place(player: PlayerId, x: i32, y: i32) -> Self {
        Self {
            player,
            target: Position::new(x, y),
            origin: Origin::Unselected,
        }
    }

    /// A request from an explicit origin cell.
    #[must_use]
    pub const fn from_origin(player: PlayerId, x: i32, y: i32, origin_x: i32, origin_y: i32) -> Self {
        Self {
            player,
            target: Position::new(x, y),
            origin: Origin::Preselected(Position::new(origin_x, origin_y)),
        }
    }

    /// Clone or jump, judged by distance alone. Legality is not checked.
    #[must_use]
    pub const fn kind(&self) -> MoveKind {
        match self.origin {
            Origin::Preselected(origin) if origin.distance(self.target) == 2 => MoveKind::Jump,
            _ => MoveKind::Clone,
        }
    }
}

impl std::fmt::Display for MoveRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.origin {
            Origin::Unselected => write!(f, "{} -> {}", self.player, self.target),
            Origin::Preselected(origin) => {
                write!(f, "{} {} -> {}", self.player, origin, self.target)
            }
        }
    }
}

/// An applied move, kept in the game's history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The request as submitted.
    pub request: MoveRequest,

    /// The writes it produced, in application order.
    pub updates: UpdateList,

    /// 1-based move number within the game.
    pub turn: u32,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(request: MoveRequest, updates: UpdateList, turn: u32) -> Self {
        Self { request, updates, turn }
    }

    /// The player who moved.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.request.player
    }

    /// Number of cells converted from other players.
    #[must_use]
    pub fn capture_count(&self) -> usize {
        let vacated = usize::from(self.request.kind() == MoveKind::Jump);
        self.updates.len().saturating_sub(1 + vacated)
    }
}
