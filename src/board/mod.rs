//! The board: cell storage and neighborhood geometry.
//!
//! `BoardState` is the single source of truth for cell colors. Geometry
//! queries are free functions over a borrowed board.

pub mod state;
pub mod geometry;

pub use state::{BoardState, ColorSet};
pub use geometry::{
    chebyshev_distance, has_adjacent_color, has_color_within_distance, squares_adjacent_to,
    squares_within_distance, Neighborhood,
};
