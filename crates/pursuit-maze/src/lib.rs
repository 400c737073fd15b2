//! Mazes for the pursuit search: storage, the two text formats, rendering,
//! and a small catalogue of built-in puzzles.
//!
//! Everything here sits outside the search itself. A [`Maze`] implements
//! [`pursuit_paths::Walkable`] and a [`Puzzle`] bundles it with the start
//! joint state and the goal.

pub mod catalogue;
pub mod error;
pub mod maze;
pub mod numeric;
pub mod puzzle;
pub mod render;
pub mod symbol;

pub use catalogue::{Builtin, builtin, builtins};
pub use error::MazeError;
pub use maze::{Maze, Tile};
pub use puzzle::Puzzle;
pub use render::{render, render_trail};
