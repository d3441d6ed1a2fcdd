//! Rules engine trait and the standard rule set.
//!
//! A rule set answers four questions about a board:
//! - Is this placement legal?
//! - Does this color have any legal placement?
//! - Which neighbors does a placement convert?
//! - Where do players start?
//!
//! Update-list construction and move enumeration are provided on top of
//! those answers, so a rule variant only overrides what it changes.

use crate::board::{squares_within_distance, BoardState};
use crate::core::{
    BoardError, Color, ConfigError, GameConfig, Origin, PlayerId, Position, Square, UpdateList,
};

use super::capture::{self, Captures};
use super::setup;
use super::validator::{self, MAX_MOVE_DISTANCE};

/// Result of a finished game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single occupancy leader.
    Winner(PlayerId),
    /// Several players tied for the lead.
    Winners(Vec<PlayerId>),
    /// Nobody holds a cell.
    Draw,
}

impl GameResult {
    /// Build a result from the players tied for the lead.
    #[must_use]
    pub fn from_leaders(mut leaders: Vec<PlayerId>) -> Self {
        match leaders.len() {
            0 => GameResult::Draw,
            1 => GameResult::Winner(leaders.remove(0)),
            _ => GameResult::Winners(leaders),
        }
    }

    /// Check if a player won or shared the win.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
            GameResult::Draw => false,
        }
    }

    /// All winning players.
    #[must_use]
    pub fn winners(&self) -> Vec<PlayerId> {
        match self {
            GameResult::Winner(p) => vec![*p],
            GameResult::Winners(ps) => ps.clone(),
            GameResult::Draw => Vec::new(),
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - Illegal requests are `Ok(false)` / empty lists, never errors
/// - Errors are reserved for coordinates off the board
/// - Nothing here mutates the board
pub trait RulesEngine {
    /// Whether `player_color` may place at `target` from `origin`.
    fn is_valid_move(
        &self,
        board: &BoardState,
        player_color: Color,
        target: Position,
        origin: Origin,
    ) -> Result<bool, BoardError>;

    /// Whether `player_color` has at least one legal placement.
    fn has_any_valid_move(&self, board: &BoardState, player_color: Color) -> bool;

    /// Neighbor conversions caused by placing `player_color` at `target`.
    fn captures(
        &self,
        board: &BoardState,
        target: Position,
        player_color: Color,
    ) -> Result<Captures, BoardError>;

    /// Starting placements for a configuration.
    fn initial_placements(&self, config: &GameConfig) -> Result<Vec<Square>, ConfigError>;

    // === Provided Methods ===

    /// Ordered writes for a move, or an empty list if it is illegal.
    ///
    /// Target first, then captures, then (for a jump) the vacated origin.
    fn calculate_board_updates(
        &self,
        board: &BoardState,
        player_color: Color,
        target: Position,
        origin: Origin,
    ) -> Result<UpdateList, BoardError> {
        let mut updates = UpdateList::new();
        if !self.is_valid_move(board, player_color, target, origin)? {
            return Ok(updates);
        }

        updates.push(Square::at(target, player_color));
        updates.extend(self.captures(board, target, player_color)?);
        if let Origin::Preselected(from) = origin {
            if from.distance(target) == MAX_MOVE_DISTANCE {
                updates.push(Square::at(from, Color::EMPTY));
            }
        }
        Ok(updates)
    }

    /// Every distinct legal placement for `player_color`.
    ///
    /// Adjacency clones come first (one per empty target), then jumps (one
    /// per origin/target pair). A clone from an explicit origin has the same
    /// effect as the adjacency clone, so it is not listed separately.
    fn legal_placements(&self, board: &BoardState, player_color: Color) -> Vec<(Position, Origin)> {
        let mut placements = Vec::new();

        for empty in board.squares_with_color(Color::EMPTY) {
            let target = empty.position();
            if let Ok(true) = self.is_valid_move(board, player_color, target, Origin::Unselected) {
                placements.push((target, Origin::Unselected));
            }
        }

        for own in board.squares_with_color(player_color) {
            let from = own.position();
            let Ok(reach) = squares_within_distance(board, from.x, from.y, MAX_MOVE_DISTANCE) else {
                continue;
            };
            for cell in reach {
                let target = cell.position();
                if from.distance(target) != MAX_MOVE_DISTANCE {
                    continue;
                }
                let origin = Origin::Preselected(from);
                if let Ok(true) = self.is_valid_move(board, player_color, target, origin) {
                    placements.push((target, origin));
                }
            }
        }

        placements
    }
}

/// The standard rule set: clone or jump, convert all adjacent enemies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SlimeWarsRules;

impl RulesEngine for SlimeWarsRules {
    fn is_valid_move(
        &self,
        board: &BoardState,
        player_color: Color,
        target: Position,
        origin: Origin,
    ) -> Result<bool, BoardError> {
        validator::is_valid_move(board, player_color, target, origin)
    }

    fn has_any_valid_move(&self, board: &BoardState, player_color: Color) -> bool {
        validator::has_any_valid_move(board, player_color)
    }

    fn captures(
        &self,
        board: &BoardState,
        target: Position,
        player_color: Color,
    ) -> Result<Captures, BoardError> {
        capture::captures(board, target, player_color)
    }

    fn initial_placements(&self, config: &GameConfig) -> Result<Vec<Square>, ConfigError> {
        setup::init_board_setup(config)
    }
}
