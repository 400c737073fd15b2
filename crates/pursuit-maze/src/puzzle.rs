//! A maze together with where the agents start and where the evader is
//! headed.

use std::fs;
use std::path::Path;

use pursuit_core::Point;
use pursuit_paths::{JointSearch, JointState, SearchError, SearchOutcome};

use crate::error::MazeError;
use crate::maze::Maze;
use crate::{numeric, symbol};

/// Everything a search needs: maze, start joint state and goal.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Puzzle {
    maze: Maze,
    start: JointState,
    goal: Point,
}

impl Puzzle {
    /// Bundle a maze with start and goal. Positions are checked when the
    /// puzzle is solved, see [`validate`](Self::validate).
    pub fn new(maze: Maze, start: JointState, goal: Point) -> Self {
        Self { maze, start, goal }
    }

    /// Parse a numeric grid; positions come from the caller.
    pub fn from_numeric(s: &str, start: JointState, goal: Point) -> Result<Self, MazeError> {
        Ok(Self::new(numeric::parse(s)?, start, goal))
    }

    /// Parse a symbol grid with `T`, `M` and `G`/`E` markers.
    pub fn from_symbols(s: &str) -> Result<Self, MazeError> {
        symbol::parse(s)
    }

    /// Read a numeric grid file.
    pub fn load_numeric(
        path: impl AsRef<Path>,
        start: JointState,
        goal: Point,
    ) -> Result<Self, MazeError> {
        Self::from_numeric(&fs::read_to_string(path)?, start, goal)
    }

    /// Read a symbol grid file.
    pub fn load_symbols(path: impl AsRef<Path>) -> Result<Self, MazeError> {
        Self::from_symbols(&fs::read_to_string(path)?)
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn start(&self) -> JointState {
        self.start
    }

    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Report the first configuration error, if any.
    pub fn validate(&self) -> Result<(), SearchError> {
        JointSearch::default().validate(&self.maze, self.start, self.goal)
    }

    /// Run `config` on this puzzle.
    pub fn solve(&self, config: &JointSearch) -> Result<SearchOutcome, SearchError> {
        config.search(&self.maze, self.start, self.goal)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn puzzle_round_trip() {
        let pz = Puzzle::from_symbols("#T.M#\n#...G").unwrap();
        let json = serde_json::to_string(&pz).unwrap();
        let back: Puzzle = serde_json::from_str(&json).unwrap();
        assert_eq!(pz, back);
    }
}
