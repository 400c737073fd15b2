//! Named built-in puzzles.

use pursuit_core::Point;
use pursuit_paths::JointState;

use crate::error::MazeError;
use crate::puzzle::Puzzle;

/// How a built-in puzzle's text is encoded.
#[derive(Debug, Clone, Copy)]
enum Source {
    /// Numeric grid plus evader, pursuer and goal positions.
    Numeric {
        grid: &'static str,
        evader: Point,
        pursuer: Point,
        goal: Point,
    },
    /// Symbol grid carrying its own markers.
    Symbol(&'static str),
}

/// A named puzzle shipped with the crate.
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    pub name: &'static str,
    pub description: &'static str,
    source: Source,
}

impl Builtin {
    /// Build the puzzle.
    pub fn puzzle(&self) -> Result<Puzzle, MazeError> {
        match self.source {
            Source::Numeric {
                grid,
                evader,
                pursuer,
                goal,
            } => Puzzle::from_numeric(grid, JointState::new(evader, pursuer), goal),
            Source::Symbol(text) => Puzzle::from_symbols(text),
        }
    }
}

const BUILTINS: &[Builtin] = &[
    Builtin {
        name: "field",
        description: "7x8 numeric field; the pursuer forces a long detour",
        source: Source::Numeric {
            grid: "
0 0 1 1 1 1 0 0
0 1 1 0 0 1 0 0
0 0 0 1 0 0 0 1
0 0 0 1 0 1 0 0
0 0 0 0 0 0 1 0
1 0 1 0 1 1 0 0
0 0 0 0 0 0 0 0
",
            evader: Point::new(1, 2),
            pursuer: Point::new(5, 2),
            goal: Point::new(7, 0),
        },
    },
    Builtin {
        name: "lure",
        description: "small room; the evader must draw the pursuer away first",
        source: Source::Symbol(
            "
#######
#     #
# ##  #
#G#   #
#  T# #
#    M#
#######
",
        ),
    },
    Builtin {
        name: "corridor",
        description: "single-width corridor held by the pursuer; no escape",
        source: Source::Symbol(
            "
#########
#T   ####
#   M   E
#########
",
        ),
    },
    Builtin {
        name: "walled",
        description: "goal sealed off from the evader by a wall",
        source: Source::Symbol(
            "
########
#T  # G#
#   #  #
#   # M#
########
",
        ),
    },
];

/// All built-in puzzles, in a fixed order.
pub fn builtins() -> &'static [Builtin] {
    BUILTINS
}

/// Look up a built-in puzzle by name.
pub fn builtin(name: &str) -> Option<&'static Builtin> {
    BUILTINS.iter().find(|b| b.name == name)
}
