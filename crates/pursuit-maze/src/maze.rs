//! A rectangular grid of open cells and walls.
//!
//! [`Maze`] is immutable once built: it is constructed from a closure or
//! one of the text formats and then only read.

use pursuit_core::{Point, Range};
use pursuit_paths::Walkable;

/// The kind of a single maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Open,
    Wall,
}

impl Tile {
    /// Whether agents may stand on this tile.
    #[inline]
    pub const fn is_open(self) -> bool {
        matches!(self, Tile::Open)
    }
}

/// A fixed-size 2D grid of [`Tile`]s, anchored at (0, 0).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "MazeRepr"))]
pub struct Maze {
    tiles: Vec<Tile>,
    bounds: Range,
}

/// Unchecked wire form of [`Maze`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct MazeRepr {
    tiles: Vec<Tile>,
    bounds: Range,
}

#[cfg(feature = "serde")]
impl TryFrom<MazeRepr> for Maze {
    type Error = String;

    fn try_from(raw: MazeRepr) -> Result<Self, Self::Error> {
        if raw.bounds.min != Point::ZERO {
            return Err(format!("maze bounds must start at (0, 0), not {}", raw.bounds.min));
        }
        if raw.tiles.len() != raw.bounds.len() {
            return Err(format!(
                "maze of {}x{} needs {} tiles, found {}",
                raw.bounds.width(),
                raw.bounds.height(),
                raw.bounds.len(),
                raw.tiles.len()
            ));
        }
        Ok(Self {
            tiles: raw.tiles,
            bounds: raw.bounds,
        })
    }
}

impl Maze {
    /// Create a maze with every cell open.
    pub fn new(width: i32, height: i32) -> Self {
        Self::from_fn(width, height, |_| Tile::Open)
    }

    /// Create a maze by asking `f` for the tile at every point, row by row.
    pub fn from_fn(width: i32, height: i32, mut f: impl FnMut(Point) -> Tile) -> Self {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        let tiles = bounds.iter().map(&mut f).collect();
        Self { tiles, bounds }
    }

    /// Returns the bounding range of the maze.
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Returns the size as a Point (width = x, height = y).
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Get the tile at a point, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<Tile> {
        self.bounds.index(p).and_then(|i| self.tiles.get(i).copied())
    }

    /// Whether `p` is inside the maze and not a wall.
    pub fn is_open(&self, p: Point) -> bool {
        self.at(p).is_some_and(Tile::is_open)
    }

    /// Count the open cells.
    pub fn open_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_open()).count()
    }

    /// Iterate over `(Point, Tile)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Tile)> + '_ {
        self.bounds.iter().zip(self.tiles.iter().copied())
    }
}

impl Walkable for Maze {
    fn bounds(&self) -> Range {
        self.bounds
    }

    fn is_open(&self, p: Point) -> bool {
        Maze::is_open(self, p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_size() {
        let m = Maze::new(8, 7);
        assert_eq!(m.size(), Point::new(8, 7));
        assert_eq!(m.width(), 8);
        assert_eq!(m.height(), 7);
        assert_eq!(m.open_count(), 56);
    }

    #[test]
    fn from_fn_and_at() {
        let m = Maze::from_fn(4, 3, |p| if p.x == p.y { Tile::Wall } else { Tile::Open });
        assert_eq!(m.at(Point::new(1, 1)), Some(Tile::Wall));
        assert_eq!(m.at(Point::new(2, 1)), Some(Tile::Open));
        assert_eq!(m.at(Point::new(4, 0)), None);
        assert_eq!(m.open_count(), 9);
    }

    #[test]
    fn out_of_bounds_is_never_open() {
        let m = Maze::new(3, 3);
        assert!(m.is_open(Point::new(2, 2)));
        assert!(!m.is_open(Point::new(-1, 0)));
        assert!(!m.is_open(Point::new(0, 3)));
        assert!(!Walkable::is_open(&m, Point::new(3, 0)));
    }

    #[test]
    fn iter_is_row_major() {
        let m = Maze::from_fn(3, 2, |p| if p == Point::new(1, 0) { Tile::Wall } else { Tile::Open });
        let items: Vec<_> = m.iter().collect();
        assert_eq!(items.len(), 6);
        assert_eq!(items[1], (Point::new(1, 0), Tile::Wall));
        assert_eq!(items[3], (Point::new(0, 1), Tile::Open));
    }

    #[test]
    fn negative_size_is_empty() {
        let m = Maze::new(-2, 4);
        assert_eq!(m.open_count(), 0);
        assert!(!m.is_open(Point::ZERO));
    }
}
