use std::fmt;

use pursuit_core::Point;

/// Precondition violations detected before a search starts.
///
/// An unreachable goal is not an error; see
/// [`SearchOutcome::Unreachable`](crate::SearchOutcome::Unreachable).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The evader's start cell is a wall or outside the maze.
    EvaderBlocked(Point),
    /// The pursuer's start cell is a wall or outside the maze.
    PursuerBlocked(Point),
    /// The goal cell is a wall or outside the maze.
    GoalBlocked(Point),
    /// Both agents start on the same cell.
    Captured(Point),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EvaderBlocked(p) => write!(f, "evader start {p} is not an open cell"),
            Self::PursuerBlocked(p) => write!(f, "pursuer start {p} is not an open cell"),
            Self::GoalBlocked(p) => write!(f, "goal {p} is not an open cell"),
            Self::Captured(p) => write!(f, "evader and pursuer both start at {p}"),
        }
    }
}

impl std::error::Error for SearchError {}
