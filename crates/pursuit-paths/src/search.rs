//! Best-first shortest-path search over joint states.

use std::collections::HashMap;

use log::{debug, trace};
use pursuit_core::Point;

use crate::error::SearchError;
use crate::expand::successors;
use crate::frontier::Frontier;
use crate::heuristic::{Estimator, Heuristic};
use crate::moves::{Move, MoveSet};
use crate::pursuer::PursuerPolicy;
use crate::state::JointState;
use crate::traits::Walkable;

/// Counters describing how much work one search did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// States popped from the frontier and expanded.
    pub expanded: usize,
    /// Successor states produced by expansion, capture-free.
    pub generated: usize,
    /// Outdated frontier entries skipped on pop.
    pub stale: usize,
    /// Largest frontier size observed.
    pub peak_frontier: usize,
}

/// An optimal escape route.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "SolutionRepr"))]
pub struct Solution {
    states: Vec<JointState>,
    stats: SearchStats,
}

/// Unchecked wire form of [`Solution`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct SolutionRepr {
    states: Vec<JointState>,
    stats: SearchStats,
}

#[cfg(feature = "serde")]
impl TryFrom<SolutionRepr> for Solution {
    type Error = &'static str;

    fn try_from(raw: SolutionRepr) -> Result<Self, Self::Error> {
        if raw.states.is_empty() {
            return Err("solution must contain at least the start state");
        }
        Ok(Self {
            states: raw.states,
            stats: raw.stats,
        })
    }
}

impl Solution {
    /// Joint states from the start to the first goal state, inclusive.
    pub fn states(&self) -> &[JointState] {
        &self.states
    }

    /// Number of moves, one less than the number of states.
    pub fn cost(&self) -> usize {
        self.states.len().saturating_sub(1)
    }

    pub fn start(&self) -> JointState {
        self.states[0]
    }

    /// The final state, whose evader stands on the goal.
    pub fn goal_state(&self) -> JointState {
        self.states[self.states.len() - 1]
    }

    pub fn evader_path(&self) -> Vec<Point> {
        self.states.iter().map(|s| s.evader).collect()
    }

    pub fn pursuer_path(&self) -> Vec<Point> {
        self.states.iter().map(|s| s.pursuer).collect()
    }

    /// The evader move made on each turn.
    pub fn moves(&self) -> Vec<Move> {
        self.states
            .windows(2)
            .filter_map(|w| Move::between(w[0].evader, w[1].evader))
            .collect()
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

/// Terminal result of a search. Both variants are normal outcomes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    PathFound(Solution),
    /// The frontier ran dry: no capture-free route reaches the goal.
    Unreachable(SearchStats),
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::PathFound(_))
    }

    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SearchOutcome::PathFound(s) => Some(s),
            SearchOutcome::Unreachable(_) => None,
        }
    }

    pub fn into_solution(self) -> Option<Solution> {
        match self {
            SearchOutcome::PathFound(s) => Some(s),
            SearchOutcome::Unreachable(_) => None,
        }
    }

    pub fn stats(&self) -> SearchStats {
        match self {
            SearchOutcome::PathFound(s) => s.stats,
            SearchOutcome::Unreachable(stats) => *stats,
        }
    }
}

/// Search configuration. Every call to [`JointSearch::search`] owns its own
/// cost table, parent table and frontier, so one value can drive any number
/// of independent searches.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JointSearch {
    pub move_set: MoveSet,
    pub heuristic: Heuristic,
    pub policy: PursuerPolicy,
}

impl JointSearch {
    /// Manhattan heuristic and the default two-step pursuer.
    pub fn new(move_set: MoveSet) -> Self {
        Self {
            move_set,
            ..Self::default()
        }
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_policy(mut self, policy: PursuerPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Check the preconditions of [`search`](Self::search).
    pub fn validate<W: Walkable + ?Sized>(
        &self,
        grid: &W,
        start: JointState,
        goal: Point,
    ) -> Result<(), SearchError> {
        if !grid.is_open(start.evader) {
            return Err(SearchError::EvaderBlocked(start.evader));
        }
        if !grid.is_open(start.pursuer) {
            return Err(SearchError::PursuerBlocked(start.pursuer));
        }
        if !grid.is_open(goal) {
            return Err(SearchError::GoalBlocked(goal));
        }
        if start.is_capture() {
            return Err(SearchError::Captured(start.evader));
        }
        Ok(())
    }

    /// Successors of `state` under this configuration.
    pub fn successors<'a, W: Walkable + ?Sized>(
        &self,
        grid: &'a W,
        state: JointState,
    ) -> impl Iterator<Item = (Move, JointState)> + 'a {
        successors(grid, state, self.move_set, self.policy)
    }

    /// Find a shortest capture-free move sequence taking the evader from
    /// `start` to `goal`.
    ///
    /// Ties between equally short routes are broken deterministically, so
    /// repeated calls return the same path.
    pub fn search<W: Walkable + ?Sized>(
        &self,
        grid: &W,
        start: JointState,
        goal: Point,
    ) -> Result<SearchOutcome, SearchError> {
        self.validate(grid, start, goal)?;
        debug!(
            "search from {start} to {goal} ({:?}, {:?}, {:?})",
            self.move_set, self.heuristic, self.policy.heading
        );

        let mut run = Run::new(self, grid, goal);
        let outcome = match run.explore(start) {
            Some(found) => SearchOutcome::PathFound(Solution {
                states: run.reconstruct(found),
                stats: run.stats,
            }),
            None => SearchOutcome::Unreachable(run.stats),
        };

        match &outcome {
            SearchOutcome::PathFound(s) => debug!("found path of {} moves, {:?}", s.cost(), s.stats),
            SearchOutcome::Unreachable(stats) => debug!("goal unreachable, {stats:?}"),
        }
        Ok(outcome)
    }
}

/// Search with the default heuristic and pursuer for the given move set.
pub fn search<W: Walkable + ?Sized>(
    grid: &W,
    start: JointState,
    goal: Point,
    move_set: MoveSet,
) -> Result<SearchOutcome, SearchError> {
    JointSearch::new(move_set).search(grid, start, goal)
}

// ---------------------------------------------------------------------------
// Run: state owned by a single search invocation
// ---------------------------------------------------------------------------

struct Run<'a, W: ?Sized> {
    config: JointSearch,
    grid: &'a W,
    goal: Point,
    estimator: Estimator,
    cost: HashMap<JointState, i32>,
    parent: HashMap<JointState, JointState>,
    frontier: Frontier,
    stats: SearchStats,
}

impl<'a, W: Walkable + ?Sized> Run<'a, W> {
    fn new(config: &JointSearch, grid: &'a W, goal: Point) -> Self {
        Self {
            config: *config,
            grid,
            goal,
            estimator: Estimator::new(config.heuristic, grid, goal),
            cost: HashMap::new(),
            parent: HashMap::new(),
            frontier: Frontier::default(),
            stats: SearchStats::default(),
        }
    }

    /// Seed the frontier and run the main loop; returns the first goal
    /// state popped.
    fn explore(&mut self, start: JointState) -> Option<JointState> {
        if !self.seed(start) {
            return None;
        }
        self.drain()
    }

    /// Push the start state. False when the start cannot reach the goal.
    fn seed(&mut self, start: JointState) -> bool {
        let Some(h) = self.estimator.estimate(start.evader) else {
            return false;
        };
        self.cost.insert(start, 0);
        self.frontier.push(start, 0, h);
        self.stats.peak_frontier = 1;
        true
    }

    /// Pop until a goal state comes up or the frontier runs dry.
    /// Entries whose recorded cost has since improved are skipped.
    fn drain(&mut self) -> Option<JointState> {
        while let Some(entry) = self.frontier.pop() {
            let current = entry.state;
            let g = self.cost[&current];
            if g < entry.g {
                self.stats.stale += 1;
                continue;
            }
            if current.evader == self.goal {
                return Some(current);
            }

            trace!("expand {current} g={g} f={}", entry.f);
            self.stats.expanded += 1;
            let tentative = g + 1;
            let grid = self.grid;
            for (_, next) in successors(grid, current, self.config.move_set, self.config.policy) {
                self.stats.generated += 1;
                if self.cost.get(&next).is_some_and(|&c| c <= tentative) {
                    continue;
                }
                let Some(h) = self.estimator.estimate(next.evader) else {
                    continue;
                };
                self.cost.insert(next, tentative);
                self.parent.insert(next, current);
                self.frontier.push(next, tentative, tentative + h);
            }
            self.stats.peak_frontier = self.stats.peak_frontier.max(self.frontier.len());
        }
        None
    }

    /// Follow parent links from `found` back to the start.
    fn reconstruct(&self, found: JointState) -> Vec<JointState> {
        let mut path = vec![found];
        let mut cur = found;
        while let Some(&prev) = self.parent.get(&cur) {
            path.push(prev);
            cur = prev;
        }
        path.reverse();
        path
    }
}
