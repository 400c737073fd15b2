//! Lower bounds on the evader's remaining travel.
//!
//! Both estimates ignore the pursuer. The pursuer can only force detours,
//! so a bound on the evader's own distance stays admissible.

use std::collections::VecDeque;

use pursuit_core::{Point, Range};

use crate::distance::manhattan;
use crate::moves::MoveSet;
use crate::traits::Walkable;

/// Choice of admissible, consistent estimate for the search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    /// `|dx| + |dy|` to the goal.
    #[default]
    Manhattan,
    /// Exact wall-aware walking distance to the goal, precomputed by a
    /// breadth-first pass outward from the goal. Cells that cannot reach the
    /// goal have no estimate and are never enqueued.
    GridDistance,
}

/// Breadth-first walking distances from one cell over open cells.
#[derive(Clone, Debug)]
pub struct DistanceMap {
    rng: Range,
    dist: Vec<i32>,
}

const UNREACHABLE: i32 = i32::MAX;

impl DistanceMap {
    /// Distance from the source to `p`, or `None` if `p` is a wall, outside
    /// the maze, or cut off from the source.
    pub fn at(&self, p: Point) -> Option<i32> {
        let i = self.rng.index(p)?;
        let d = self.dist[i];
        (d != UNREACHABLE).then_some(d)
    }
}

/// Compute 4-directional walking distances from `source` to every open cell.
///
/// Moves are reversible, so this is also each cell's distance *to* `source`.
pub fn distance_map<W: Walkable + ?Sized>(grid: &W, source: Point) -> DistanceMap {
    let rng = grid.bounds();
    let mut dist = vec![UNREACHABLE; rng.len()];
    let mut queue: VecDeque<Point> = VecDeque::new();

    if let Some(si) = rng.index(source).filter(|_| grid.is_open(source)) {
        dist[si] = 0;
        queue.push_back(source);
    }

    while let Some(cp) = queue.pop_front() {
        let Some(ci) = rng.index(cp) else {
            continue;
        };
        let nd = dist[ci] + 1;
        for m in MoveSet::FourDirectional.candidates() {
            let np = m.apply(cp);
            if !grid.is_open(np) {
                continue;
            }
            let Some(ni) = rng.index(np) else {
                continue;
            };
            if dist[ni] != UNREACHABLE {
                continue;
            }
            dist[ni] = nd;
            queue.push_back(np);
        }
    }

    DistanceMap { rng, dist }
}

/// A heuristic prepared for one goal.
pub(crate) enum Estimator {
    Manhattan(Point),
    Grid(DistanceMap),
}

impl Estimator {
    pub(crate) fn new<W: Walkable + ?Sized>(h: Heuristic, grid: &W, goal: Point) -> Self {
        match h {
            Heuristic::Manhattan => Estimator::Manhattan(goal),
            Heuristic::GridDistance => Estimator::Grid(distance_map(grid, goal)),
        }
    }

    /// Estimated remaining cost, or `None` when the goal is provably out of
    /// reach from `p`.
    #[inline]
    pub(crate) fn estimate(&self, p: Point) -> Option<i32> {
        match self {
            Estimator::Manhattan(goal) => Some(manhattan(p, *goal)),
            Estimator::Grid(map) => map.at(p),
        }
    }
}
