//! The pursuer's deterministic reply to each evader move.

use pursuit_core::Point;

use crate::traits::Walkable;

/// How the pursuer picks its direction across the sub-steps of one turn.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heading {
    /// Each sub-step re-aims from the pursuer's already-updated position.
    #[default]
    Recomputed,
    /// The direction is fixed from the pursuer's position at the start of
    /// the turn; walls are still checked at every sub-step.
    Fixed,
}

/// Greedy, axis-aligned pursuit: horizontal first, vertical when the
/// horizontal step is unavailable, otherwise stand still.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PursuerPolicy {
    /// Discrete sub-steps per evader move.
    pub steps: u32,
    pub heading: Heading,
}

impl Default for PursuerPolicy {
    fn default() -> Self {
        Self {
            steps: 2,
            heading: Heading::Recomputed,
        }
    }
}

impl PursuerPolicy {
    /// Where the pursuer ends up after reacting to an evader standing at
    /// `evader`. The evader's position is fixed for the whole turn.
    pub fn next_position<W: Walkable + ?Sized>(
        &self,
        grid: &W,
        pursuer: Point,
        evader: Point,
    ) -> Point {
        let initial = (evader - pursuer).signum();
        let mut pos = pursuer;
        for _ in 0..self.steps {
            let dir = match self.heading {
                Heading::Recomputed => (evader - pos).signum(),
                Heading::Fixed => initial,
            };
            pos = Self::step(grid, pos, dir);
        }
        pos
    }

    fn step<W: Walkable + ?Sized>(grid: &W, pos: Point, dir: Point) -> Point {
        if dir.x != 0 {
            let h = pos.shift(dir.x, 0);
            if grid.is_open(h) {
                return h;
            }
        }
        if dir.y != 0 {
            let v = pos.shift(0, dir.y);
            if grid.is_open(v) {
                return v;
            }
        }
        pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::manhattan;
    use crate::testing::AsciiMaze;

    const OPEN: &str = "\
.....
.....
.....
.....
.....";

    #[test]
    fn horizontal_has_priority() {
        let g = AsciiMaze::new(OPEN);
        let p = PursuerPolicy::default();
        // Two horizontal steps even though a vertical gap exists too.
        assert_eq!(
            p.next_position(&g, Point::new(0, 0), Point::new(4, 4)),
            Point::new(2, 0)
        );
    }

    #[test]
    fn falls_back_to_vertical_when_blocked() {
        let g = AsciiMaze::new(
            "\
.#...
.....
.....",
        );
        let p = PursuerPolicy::default();
        assert_eq!(
            p.next_position(&g, Point::new(0, 0), Point::new(3, 2)),
            Point::new(1, 1)
        );
    }

    #[test]
    fn stays_when_boxed_in() {
        let g = AsciiMaze::new(
            "\
.#.
##.
...",
        );
        let p = PursuerPolicy::default();
        assert_eq!(
            p.next_position(&g, Point::new(0, 0), Point::new(2, 2)),
            Point::new(0, 0)
        );
    }

    #[test]
    fn never_steps_out_of_bounds() {
        let g = AsciiMaze::new("...");
        let p = PursuerPolicy::default();
        assert_eq!(
            p.next_position(&g, Point::new(0, 0), Point::new(-3, 0)),
            Point::new(0, 0)
        );
    }

    #[test]
    fn sub_steps_build_on_each_other() {
        let g = AsciiMaze::new(OPEN);
        let recomputed = PursuerPolicy::default();
        let fixed = PursuerPolicy {
            heading: Heading::Fixed,
            ..PursuerPolicy::default()
        };
        let pursuer = Point::new(0, 0);
        let evader = Point::new(1, 1);
        // Re-aiming after the first step turns the second step vertical.
        assert_eq!(recomputed.next_position(&g, pursuer, evader), evader);
        // A fixed heading keeps going right and overshoots the column.
        assert_eq!(
            fixed.next_position(&g, pursuer, evader),
            Point::new(2, 0)
        );
    }

    #[test]
    fn stops_on_evader_when_already_adjacent() {
        let g = AsciiMaze::new(OPEN);
        let p = PursuerPolicy::default();
        assert_eq!(
            p.next_position(&g, Point::new(1, 2), Point::new(2, 2)),
            Point::new(2, 2)
        );
    }

    #[test]
    fn single_axis_distance_strictly_decreases() {
        let g = AsciiMaze::new(OPEN);
        let p = PursuerPolicy::default();
        for a in g.bounds() {
            for b in g.bounds() {
                let aligned = (a.x == b.x) != (a.y == b.y);
                if !aligned || manhattan(a, b) <= 1 {
                    continue;
                }
                let next = p.next_position(&g, a, b);
                assert!(
                    manhattan(next, b) < manhattan(a, b),
                    "pursuer {a} toward {b} moved to {next}"
                );
            }
        }
    }

    #[test]
    fn zero_steps_is_inert() {
        let g = AsciiMaze::new(OPEN);
        let p = PursuerPolicy {
            steps: 0,
            ..PursuerPolicy::default()
        };
        assert_eq!(
            p.next_position(&g, Point::new(0, 0), Point::new(4, 0)),
            Point::new(0, 0)
        );
    }
}
