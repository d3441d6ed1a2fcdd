//! Concrete games built on the rules engine.

pub mod slime_wars;
