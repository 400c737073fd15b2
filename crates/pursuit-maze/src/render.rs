//! Text rendering of mazes and escape routes, in the symbol format's
//! alphabet.

use std::collections::HashSet;

use pursuit_core::Point;
use pursuit_paths::{JointState, Solution};

use crate::maze::Maze;
use crate::symbol::{EVADER, GOAL, PURSUER, WALL};

const OPEN: char = ' ';
const TRAIL: char = '.';

fn draw(maze: &Maze, mut cell: impl FnMut(Point) -> Option<char>) -> String {
    let mut out = String::with_capacity(maze.bounds().len() + maze.height() as usize);
    for y in 0..maze.height() {
        if y > 0 {
            out.push('\n');
        }
        for x in 0..maze.width() {
            let p = Point::new(x, y);
            let ch = cell(p).unwrap_or(if maze.is_open(p) { OPEN } else { WALL });
            out.push(ch);
        }
    }
    out
}

/// Draw one moment of a chase. The evader is drawn over the goal, and the
/// pursuer over both.
pub fn render(maze: &Maze, state: JointState, goal: Point) -> String {
    draw(maze, |p| {
        if p == state.pursuer {
            Some(PURSUER)
        } else if p == state.evader {
            Some(EVADER)
        } else if p == goal {
            Some(GOAL)
        } else {
            None
        }
    })
}

/// Draw the whole route: the evader's start, every cell it crossed as
/// `'.'`, the goal, and the pursuer where it stood at the start.
pub fn render_trail(maze: &Maze, solution: &Solution) -> String {
    let start = solution.start();
    let goal = solution.goal_state().evader;
    let trail: HashSet<Point> = solution.evader_path().into_iter().collect();
    draw(maze, |p| {
        if p == start.pursuer {
            Some(PURSUER)
        } else if p == start.evader {
            Some(EVADER)
        } else if p == goal {
            Some(GOAL)
        } else if trail.contains(&p) {
            Some(TRAIL)
        } else {
            None
        }
    })
}
