//! Symbol maze format with the agents and the goal drawn in.
//!
//! | Char | Meaning |
//! |---|---|
//! | `' '`, `'.'` | open |
//! | `'#'` | wall |
//! | `'T'` | evader start (open) |
//! | `'M'` | pursuer start (open) |
//! | `'G'`, `'E'` | goal (open) |
//!
//! Blank lines before and after the grid are ignored. Rows shorter than
//! the widest row are padded on the right with open cells, since editors
//! commonly strip trailing spaces.

use pursuit_core::Point;
use pursuit_paths::JointState;

use crate::error::MazeError;
use crate::maze::{Maze, Tile};
use crate::puzzle::Puzzle;

pub const EVADER: char = 'T';
pub const PURSUER: char = 'M';
pub const GOAL: char = 'G';
pub const EXIT: char = 'E';
pub const WALL: char = '#';

#[derive(Default)]
struct Markers {
    evader: Option<Point>,
    pursuer: Option<Point>,
    goal: Option<(char, Point)>,
}

impl Markers {
    fn record(&mut self, ch: char, p: Point) -> Result<(), MazeError> {
        let slot = match ch {
            EVADER => &mut self.evader,
            PURSUER => &mut self.pursuer,
            _ => {
                if let Some((_, first)) = self.goal {
                    return Err(MazeError::DuplicateMarker {
                        ch,
                        first,
                        second: p,
                    });
                }
                self.goal = Some((ch, p));
                return Ok(());
            }
        };
        if let Some(first) = *slot {
            return Err(MazeError::DuplicateMarker {
                ch,
                first,
                second: p,
            });
        }
        *slot = Some(p);
        Ok(())
    }
}

/// Parse a symbol grid into a [`Puzzle`].
pub fn parse(s: &str) -> Result<Puzzle, MazeError> {
    let lines: Vec<&str> = s
        .trim_matches(|c| c == '\n' || c == '\r')
        .lines()
        .collect();
    let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    if width == 0 {
        return Err(MazeError::Empty);
    }

    let mut tiles = Vec::with_capacity(width * lines.len());
    let mut markers = Markers::default();
    for (y, line) in lines.iter().enumerate() {
        let mut n = 0;
        for (x, ch) in line.chars().enumerate() {
            let p = Point::new(x as i32, y as i32);
            let t = match ch {
                WALL => Tile::Wall,
                ' ' | '.' => Tile::Open,
                EVADER | PURSUER | GOAL | EXIT => {
                    markers.record(ch, p)?;
                    Tile::Open
                }
                _ => return Err(MazeError::InvalidCell { ch, pos: p }),
            };
            tiles.push(t);
            n += 1;
        }
        tiles.extend(std::iter::repeat_n(Tile::Open, width - n));
    }

    let maze = Maze::from_fn(width as i32, lines.len() as i32, |p| {
        tiles[p.y as usize * width + p.x as usize]
    });
    let evader = markers.evader.ok_or(MazeError::MissingMarker(EVADER))?;
    let pursuer = markers.pursuer.ok_or(MazeError::MissingMarker(PURSUER))?;
    let (_, goal) = markers.goal.ok_or(MazeError::MissingMarker(GOAL))?;
    Ok(Puzzle::new(maze, JointState::new(evader, pursuer), goal))
}
