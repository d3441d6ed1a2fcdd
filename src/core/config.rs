//! Game configuration.
//!
//! A `GameConfig` fixes everything that stays constant for the life of a
//! game: board dimensions and the seat-ordered player colors. It is
//! validated once, when the engine is built, and never changes afterwards.
//!
//! ```
//! use slime_wars::core::{Color, GameConfig};
//!
//! let config = GameConfig::new(8, 8).with_players([Color::RED, Color::GREEN]);
//! assert!(config.validate().is_ok());
//!
//! let bad = GameConfig::new(8, 8).with_players([Color::RED, Color::GREEN, Color::YELLOW]);
//! assert!(bad.validate().is_err());
//! ```

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::error::ConfigError;
use super::player::PlayerMap;

/// Smallest board side: four corner footholds need two cells per side each.
pub const MIN_BOARD_SIDE: usize = 4;

/// Largest board side.
pub const MAX_BOARD_SIDE: usize = 256;

/// Player counts with a defined starting layout.
pub const SUPPORTED_PLAYER_COUNTS: [usize; 2] = [2, 4];

/// Board dimensions and player colors for one game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board width (`maxX`).
    pub width: usize,

    /// Board height (`maxY`).
    pub height: usize,

    /// Player colors in seat order. Player 0 moves first.
    pub player_colors: Vec<Color>,
}

impl Default for GameConfig {
    /// 6x6 board, four players in the standard palette.
    fn default() -> Self {
        Self::four_player(6, 6)
    }
}

impl GameConfig {
    /// A board of the given size with no players yet.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            player_colors: Vec::new(),
        }
    }

    /// Two players (red and green) on opposite corners.
    pub fn two_player(width: usize, height: usize) -> Self {
        Self::new(width, height).with_players([Color::RED, Color::GREEN])
    }

    /// Four players in the standard palette, one per corner.
    pub fn four_player(width: usize, height: usize) -> Self {
        Self::new(width, height).with_players(Color::PALETTE)
    }

    /// Replace the player colors.
    #[must_use]
    pub fn with_players(mut self, colors: impl IntoIterator<Item = Color>) -> Self {
        self.player_colors = colors.into_iter().collect();
        self
    }

    /// Set the board size.
    #[must_use]
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_colors.len()
    }

    /// Check board size and player colors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_dimensions()?;

        let count = self.player_colors.len();
        if !SUPPORTED_PLAYER_COUNTS.contains(&count) {
            return Err(ConfigError::UnsupportedPlayerCount(count));
        }

        for (index, color) in self.player_colors.iter().enumerate() {
            if color.is_empty() {
                return Err(ConfigError::EmptyPlayerColor(index));
            }
            if self.player_colors[..index].contains(color) {
                return Err(ConfigError::DuplicatePlayerColor(*color));
            }
        }

        Ok(())
    }

    /// Check only the board size.
    pub fn validate_dimensions(&self) -> Result<(), ConfigError> {
        let (width, height) = (self.width, self.height);
        if width < MIN_BOARD_SIDE || height < MIN_BOARD_SIDE {
            return Err(ConfigError::BoardTooSmall { width, height });
        }
        if width > MAX_BOARD_SIDE || height > MAX_BOARD_SIDE {
            return Err(ConfigError::BoardTooLarge { width, height });
        }
        Ok(())
    }

    /// Player colors keyed by seat. Call after `validate`.
    pub(crate) fn color_map(&self) -> PlayerMap<Color> {
        PlayerMap::from_vec(self.player_colors.clone())
    }
}
