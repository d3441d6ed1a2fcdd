//! Slime Wars game engine: board ownership and turn sequencing.

use im::Vector;
use tracing::{debug, info, instrument};

use crate::board::{BoardState, ColorSet};
use crate::core::{
    BoardError, Color, ConfigError, Error, GameConfig, MoveRecord, MoveRequest, Origin, PlayerId,
    PlayerMap, Position, UpdateList,
};
use crate::render::BoardView;
use crate::rules::{GameResult, RulesEngine, SlimeWarsRules};

use super::phase::{CompletionReason, Phase, PressOutcome};

/// A running game.
///
/// Owns the board, the seat-ordered player colors, whose turn it is, the
/// preselected origin of a two-step move, and the move history. The board
/// only changes through `play` (or `press`, which calls it).
#[derive(Clone, Debug)]
pub struct GameEngine<R: RulesEngine = SlimeWarsRules> {
    rules: R,
    config: GameConfig,
    board: BoardState,
    colors: PlayerMap<Color>,
    phase: Phase,
    origin: Origin,
    history: Vector<MoveRecord>,
}

impl GameEngine<SlimeWarsRules> {
    /// Start a game with the standard rules and starting layout.
    ///
    /// ```
    /// use slime_wars::core::{GameConfig, PlayerId};
    /// use slime_wars::games::slime_wars::GameEngine;
    ///
    /// let game = GameEngine::new(GameConfig::default()).unwrap();
    /// assert_eq!(game.current_player(), Some(PlayerId::new(0)));
    /// assert_eq!(game.board().empty_squares(), 36 - 12);
    /// ```
    pub fn new(config: GameConfig) -> Result<Self, Error> {
        Self::with_rules(config, SlimeWarsRules)
    }
}

impl<R: RulesEngine> GameEngine<R> {
    /// Start a game with custom rules, using their starting layout.
    #[instrument(skip(rules))]
    pub fn with_rules(config: GameConfig, rules: R) -> Result<Self, Error> {
        config.validate()?;

        let placements = rules.initial_placements(&config)?;
        let mut board = BoardState::new(config.width, config.height);
        board.apply_all(&placements)?;

        Ok(Self::start(config, rules, board))
    }

    /// Start from an arbitrary position instead of the standard layout.
    ///
    /// The board must have the configured dimensions.
    pub fn with_board(config: GameConfig, rules: R, board: BoardState) -> Result<Self, Error> {
        config.validate()?;
        if board.width() != config.width || board.height() != config.height {
            return Err(ConfigError::BoardSizeMismatch {
                width: config.width,
                height: config.height,
                found_width: board.width(),
                found_height: board.height(),
            }
            .into());
        }

        Ok(Self::start(config, rules, board))
    }

    fn start(config: GameConfig, rules: R, board: BoardState) -> Self {
        let colors = config.color_map();
        let mut game = Self {
            rules,
            config,
            board,
            colors,
            phase: Phase::Turn(PlayerId::new(0)),
            origin: Origin::Unselected,
            history: Vector::new(),
        };
        game.phase = game.settle(PlayerId::new(0));
        debug!(phase = ?game.phase, "game started");
        game
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// The board, read-only.
    #[must_use]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// Renderer-facing view of the board.
    #[must_use]
    pub fn view(&self) -> BoardView<'_> {
        BoardView::new(&self.board)
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.colors.player_count()
    }

    /// Player colors in seat order.
    #[must_use]
    pub fn player_colors(&self) -> &PlayerMap<Color> {
        &self.colors
    }

    /// A player's color, or `None` for an unknown seat.
    #[must_use]
    pub fn player_color(&self, player: PlayerId) -> Option<Color> {
        self.colors.try_get(player).copied()
    }

    /// The player to move, or `None` once the game is over.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.phase.current_player()
    }

    /// The origin chosen by the last `press` on an own cell.
    #[must_use]
    pub fn selected_origin(&self) -> Origin {
        self.origin
    }

    /// Drop a preselected origin.
    pub fn clear_selection(&mut self) {
        self.origin = Origin::Unselected;
    }

    /// Applied moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Cells held by each player.
    #[must_use]
    pub fn scores(&self) -> PlayerMap<usize> {
        let counts = self.board.colors_with_counts();
        PlayerMap::new(self.player_count(), |p| {
            counts.get(&self.colors[p]).copied().unwrap_or(0)
        })
    }

    // === Rule Queries ===

    /// Whether `request` is legal on the current board, ignoring whose turn it is.
    pub fn is_valid_move(&self, request: &MoveRequest) -> Result<bool, BoardError> {
        let Some(color) = self.player_color(request.player) else {
            return Ok(false);
        };
        self.rules
            .is_valid_move(&self.board, color, request.target, request.origin)
    }

    /// Whether `player` has any legal placement.
    #[must_use]
    pub fn has_any_valid_move(&self, player: PlayerId) -> bool {
        self.player_color(player)
            .is_some_and(|color| self.rules.has_any_valid_move(&self.board, color))
    }

    /// Every distinct legal move for `player`.
    #[must_use]
    pub fn legal_moves(&self, player: PlayerId) -> Vec<MoveRequest> {
        let Some(color) = self.player_color(player) else {
            return Vec::new();
        };
        self.rules
            .legal_placements(&self.board, color)
            .into_iter()
            .map(|(target, origin)| MoveRequest { player, target, origin })
            .collect()
    }

    /// The writes `request` would make, without making them.
    ///
    /// Empty when the move is illegal. Turn order is not checked here.
    pub fn calculate_board_updates(&self, request: &MoveRequest) -> Result<UpdateList, BoardError> {
        let Some(color) = self.player_color(request.player) else {
            return Ok(UpdateList::new());
        };
        self.rules
            .calculate_board_updates(&self.board, color, request.target, request.origin)
    }

    // === Completion ===

    /// True iff no empty cell remains.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.board.is_full()
    }

    /// True once the game has ended, by a full board or a stalemate.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase.is_complete()
    }

    /// Colors tied for the most cells on the board.
    #[must_use]
    pub fn colors_that_have_max_count(&self) -> ColorSet {
        self.board.colors_that_have_max_count()
    }

    /// Winners, once the game is over.
    ///
    /// Leaders are counted over occupied cells, so a stalemated board with
    /// many empty cells still names a player.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.is_over() {
            return None;
        }
        let mut leaders: Vec<PlayerId> = self
            .board
            .occupied_colors_that_have_max_count()
            .iter()
            .filter_map(|color| self.colors.find(color))
            .collect();
        leaders.sort_unstable();
        Some(GameResult::from_leaders(leaders))
    }

    // === Moves ===

    /// Validate and apply a move, then pass the turn.
    ///
    /// Returns the writes made, in order. An empty list means the request was
    /// rejected (illegal, out of turn, or after the game ended) and nothing
    /// changed.
    #[instrument(skip(self, request), fields(request = %request))]
    pub fn play(&mut self, request: MoveRequest) -> Result<UpdateList, BoardError> {
        if self.current_player() != Some(request.player) {
            debug!(phase = ?self.phase, "move out of turn");
            return Ok(UpdateList::new());
        }

        let updates = self.calculate_board_updates(&request)?;
        if updates.is_empty() {
            debug!("illegal move rejected");
            return Ok(updates);
        }

        self.board.apply_all(&updates)?;
        let turn = self.history.len() as u32 + 1;
        self.history
            .push_back(MoveRecord::new(request, updates.clone(), turn));
        self.origin = Origin::Unselected;
        debug!(turn, writes = updates.len(), "move applied");

        self.advance_turn();
        Ok(updates)
    }

    /// Handle a press on `(x, y)` for the current player.
    ///
    /// Pressing an own cell selects it as the origin of the next move.
    /// Pressing anything else submits a move from the selected origin (if
    /// any). A rejected move keeps the selection.
    #[instrument(skip(self))]
    pub fn press(&mut self, x: i32, y: i32) -> Result<PressOutcome, BoardError> {
        let Some(player) = self.current_player() else {
            return Ok(PressOutcome::Rejected);
        };

        let pressed = Position::new(x, y);
        if Some(self.board.color_at(pressed)?) == self.player_color(player) {
            self.origin = Origin::Preselected(pressed);
            debug!(%pressed, "origin selected");
            return Ok(PressOutcome::OriginSelected(pressed));
        }

        let request = MoveRequest {
            player,
            target: pressed,
            origin: self.origin,
        };
        let updates = self.play(request)?;
        if updates.is_empty() {
            Ok(PressOutcome::Rejected)
        } else {
            Ok(PressOutcome::Applied(updates))
        }
    }

    // === Turn Sequencing ===

    fn advance_turn(&mut self) {
        let Phase::Turn(mover) = self.phase else {
            return;
        };
        self.phase = self.settle(mover.next(self.player_count()));

        match self.phase {
            Phase::Turn(next) => debug!(%next, "turn passed"),
            Phase::Complete(reason) => {
                info!(?reason, leaders = ?self.colors_that_have_max_count(), "game complete");
            }
        }
    }

    /// First player from `start` (inclusive, wrapping once around) who can
    /// move, or the completed phase if the board is full or nobody can.
    fn settle(&self, start: PlayerId) -> Phase {
        if self.is_complete() {
            return Phase::Complete(CompletionReason::BoardFull);
        }

        let count = self.player_count();
        let mut candidate = start;
        for _ in 0..count {
            if self.has_any_valid_move(candidate) {
                return Phase::Turn(candidate);
            }
            debug!(skipped = %candidate, "no legal move");
            candidate = candidate.next(count);
        }
        Phase::Complete(CompletionReason::Stalemate)
    }
}
