//! Boundary types for the presentation layer.
//!
//! The engine owns the board. A renderer gets a `BoardView` for redraws and
//! consumes update lists through `UpdateSink`; it never holds a mutable
//! board reference.

pub mod sink;
pub mod view;

pub use sink::UpdateSink;
pub use view::BoardView;
