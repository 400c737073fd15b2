//! Shortest escape routes for an evader chased by a deterministic pursuer.
//!
//! The search runs over *joint states* — the evader's and the pursuer's
//! positions together — so that a route may revisit a cell whenever the
//! pursuer has moved in between. Components, leaf first:
//!
//! - [`Walkable`]: the maze contract (bounds + open-cell predicate)
//! - [`PursuerPolicy`]: the pursuer's greedy, axis-aligned reply
//! - [`successors`]: legal evader moves with capture states filtered out
//! - [`Heuristic`]: admissible estimate of the evader's remaining distance
//! - [`JointSearch`] / [`search`]: best-first search with path reconstruction
//!
//! # Example
//!
//! ```
//! use pursuit_core::{Point, Range};
//! use pursuit_paths::{JointState, MoveSet, SearchOutcome, Walkable, search};
//!
//! struct Corridor;
//!
//! impl Walkable for Corridor {
//!     fn bounds(&self) -> Range {
//!         Range::new(0, 0, 7, 1)
//!     }
//!     fn is_open(&self, p: Point) -> bool {
//!         self.bounds().contains(p)
//!     }
//! }
//!
//! let start = JointState::new(Point::new(2, 0), Point::new(6, 0));
//! let outcome = search(&Corridor, start, Point::new(0, 0), MoveSet::FourDirectional).unwrap();
//! match outcome {
//!     SearchOutcome::PathFound(solution) => assert_eq!(solution.cost(), 2),
//!     SearchOutcome::Unreachable(_) => unreachable!(),
//! }
//! ```

mod distance;
mod error;
mod expand;
mod frontier;
mod heuristic;
mod moves;
mod pursuer;
mod search;
mod state;
mod traits;

pub use distance::manhattan;
pub use error::SearchError;
pub use expand::successors;
pub use heuristic::{DistanceMap, Heuristic, distance_map};
pub use moves::{Move, MoveSet};
pub use pursuer::{Heading, PursuerPolicy};
pub use search::{JointSearch, SearchOutcome, SearchStats, Solution, search};
pub use state::JointState;
pub use traits::Walkable;
