use pursuit_core::{Point, Range};

/// A static, fully known maze.
pub trait Walkable {
    /// Rectangle covering every cell of the maze.
    fn bounds(&self) -> Range;

    /// Whether `p` lies inside [`bounds`](Self::bounds) and is not a wall.
    /// Out-of-bounds positions are never open.
    fn is_open(&self, p: Point) -> bool;
}

impl<W: Walkable + ?Sized> Walkable for &W {
    fn bounds(&self) -> Range {
        (**self).bounds()
    }

    fn is_open(&self, p: Point) -> bool {
        (**self).is_open(p)
    }
}
