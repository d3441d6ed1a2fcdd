//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Seat index in turn order. Player 0 moves first.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by a `Vec`, indexed by `PlayerId`. The engine
//! keeps each player's color in a `PlayerMap<Color>`.

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Seat index of a player, 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat after this one, wrapping at `player_count`.
    ///
    /// ```
    /// use slime_wars::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(1).next(4), PlayerId::new(2));
    /// assert_eq!(PlayerId::new(3).next(4), PlayerId::new(0));
    /// ```
    #[must_use]
    pub const fn next(self, player_count: usize) -> Self {
        Self(((self.0 as usize + 1) % player_count) as u8)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data with O(1) access by `PlayerId`.
///
/// ```
/// use slime_wars::core::{Color, PlayerId, PlayerMap};
///
/// let colors = PlayerMap::from_vec(vec![Color::RED, Color::GREEN]);
/// assert_eq!(colors[PlayerId::new(1)], Color::GREEN);
/// assert_eq!(colors.find(&Color::RED), Some(PlayerId::new(0)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Create a map from values in seat order.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "Must have at least 1 player");
        assert!(data.len() <= 255, "At most 255 players supported");
        Self { data }
    }

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a player's entry.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a player's entry, or `None` for a seat past the end.
    #[must_use]
    pub fn try_get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// First player whose entry equals `value`.
    #[must_use]
    pub fn find(&self, value: &T) -> Option<PlayerId>
    where
        T: PartialEq,
    {
        self.data.iter().position(|v| v == value).map(|i| PlayerId(i as u8))
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Entries in seat order.
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.data
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}
