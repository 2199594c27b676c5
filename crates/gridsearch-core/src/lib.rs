//! **gridsearch-core**: the shared grid model for the gridsearch agents.
//!
//! This crate provides the value types every search strategy works with:
//! positions and cardinal directions, a static weighted grid with 4-connected
//! neighbour lookup, and the path type returned by a search.

pub mod error;
pub mod geom;
pub mod grid;
pub mod path;

pub use error::GridError;
pub use geom::{Direction, Position, Tile};
pub use grid::Grid;
pub use path::Path;
