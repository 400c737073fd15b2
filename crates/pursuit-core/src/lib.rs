//! **pursuit-core** — geometry primitives shared by the pursuit crates.
//!
//! [`Point`] names a maze cell as a (column, row) pair and [`Range`] is the
//! half-open rectangle bounding a maze.

pub mod geom;

pub use geom::{Point, Range, RangeIter};
