use std::fmt;

use pursuit_core::Point;

/// A single evader move. Each one changes at most one coordinate by one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Move {
    Left,
    Right,
    Up,
    Down,
    Stay,
}

impl Move {
    /// Offset applied to the evader's position.
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Move::Left => Point::new(-1, 0),
            Move::Right => Point::new(1, 0),
            Move::Up => Point::new(0, -1),
            Move::Down => Point::new(0, 1),
            Move::Stay => Point::ZERO,
        }
    }

    /// Position reached by making this move from `p`.
    #[inline]
    pub fn apply(self, p: Point) -> Point {
        p + self.delta()
    }

    /// The move leading from `from` to `to`, if they are at most one
    /// cardinal step apart.
    pub fn between(from: Point, to: Point) -> Option<Move> {
        match (to.x - from.x, to.y - from.y) {
            (-1, 0) => Some(Move::Left),
            (1, 0) => Some(Move::Right),
            (0, -1) => Some(Move::Up),
            (0, 1) => Some(Move::Down),
            (0, 0) => Some(Move::Stay),
            _ => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Move::Left => "left",
            Move::Right => "right",
            Move::Up => "up",
            Move::Down => "down",
            Move::Stay => "stay",
        };
        f.write_str(s)
    }
}

/// Which moves the evader may choose from on each turn.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveSet {
    /// Left, right, up, down.
    #[default]
    FourDirectional,
    /// The four cardinal moves plus waiting in place.
    FourDirectionalPlusStay,
}

impl MoveSet {
    /// Candidate moves in their fixed enumeration order.
    #[inline]
    pub fn candidates(self) -> &'static [Move] {
        const FOUR: [Move; 4] = [Move::Left, Move::Right, Move::Up, Move::Down];
        const FIVE: [Move; 5] = [Move::Left, Move::Right, Move::Up, Move::Down, Move::Stay];
        match self {
            MoveSet::FourDirectional => &FOUR,
            MoveSet::FourDirectionalPlusStay => &FIVE,
        }
    }
}
