//! Cell colors.
//!
//! A `Color` is a pair of small intensity channels (red, green), each in
//! `0..=3`. The pair `(0, 0)` is reserved as the empty marker and is never a
//! player's identity.
//!
//! ```
//! use slime_wars::core::Color;
//!
//! let red = Color::new(3, 0).unwrap();
//! assert_eq!(red, Color::RED);
//! assert!(!red.is_empty());
//! assert!(Color::EMPTY.is_empty());
//! assert!(Color::new(4, 0).is_err());
//! ```

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Highest value a single color channel may take.
pub const MAX_CHANNEL: u8 = 3;

/// A two-channel cell color.
///
/// Structural value type: two colors are equal iff both channels are equal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct Color {
    red: u8,
    green: u8,
}

/// Error building a color from raw channel values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum ColorError {
    /// A channel was above `MAX_CHANNEL`.
    #[display("{channel} channel value {value} is outside 0..=3")]
    ChannelOutOfRange {
        /// Which channel ("red" or "green").
        channel: &'static str,
        /// The rejected value.
        value: u8,
    },
}

impl Color {
    /// The reserved empty color.
    pub const EMPTY: Color = Color { red: 0, green: 0 };
    /// Full red.
    pub const RED: Color = Color { red: 3, green: 0 };
    /// Full green.
    pub const GREEN: Color = Color { red: 0, green: 3 };
    /// Yellow (low red, medium green).
    pub const YELLOW: Color = Color { red: 1, green: 2 };
    /// Orange (both channels full).
    pub const ORANGE: Color = Color { red: 3, green: 3 };

    /// Default four-player palette, in seating order.
    pub const PALETTE: [Color; 4] = [Color::RED, Color::GREEN, Color::YELLOW, Color::ORANGE];

    /// Create a color, checking both channels are in `0..=3`.
    pub fn new(red: u8, green: u8) -> Result<Self, ColorError> {
        if red > MAX_CHANNEL {
            return Err(ColorError::ChannelOutOfRange { channel: "red", value: red });
        }
        if green > MAX_CHANNEL {
            return Err(ColorError::ChannelOutOfRange { channel: "green", value: green });
        }
        Ok(Self { red, green })
    }

    /// Red channel intensity.
    #[must_use]
    pub const fn red(self) -> u8 {
        self.red
    }

    /// Green channel intensity.
    #[must_use]
    pub const fn green(self) -> u8 {
        self.green
    }

    /// Whether this is the reserved empty marker.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.red == 0 && self.green == 0
    }

    /// The next color in cycling order.
    ///
    /// Red counts up first and carries into green; `(3, 3)` wraps to empty.
    #[must_use]
    pub const fn next(self) -> Self {
        if self.red < MAX_CHANNEL {
            Self { red: self.red + 1, green: self.green }
        } else if self.green < MAX_CHANNEL {
            Self { red: 0, green: self.green + 1 }
        } else {
            Self::EMPTY
        }
    }

    /// Single-glyph rendering used by board dumps: `.` for empty, otherwise
    /// the hex digit of `4 * green + red`.
    #[must_use]
    pub fn glyph(self) -> char {
        if self.is_empty() {
            '.'
        } else {
            char::from_digit(u32::from(self.green * 4 + self.red), 16).unwrap_or('?')
        }
    }
}

impl TryFrom<(u8, u8)> for Color {
    type Error = ColorError;

    fn try_from((red, green): (u8, u8)) -> Result<Self, Self::Error> {
        Self::new(red, green)
    }
}

impl From<Color> for (u8, u8) {
    fn from(color: Color) -> Self {
        (color.red, color.green)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RED({}), GREEN({})", self.red, self.green)
    }
}
