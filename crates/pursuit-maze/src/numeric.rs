//! Numeric maze format: `0` is open, `1` is a wall.
//!
//! One row per line. Cells are separated by whitespace or commas; a line
//! with no separators is read one character per cell. Start and goal
//! positions are not part of this format and are supplied separately.

use pursuit_core::Point;

use crate::error::MazeError;
use crate::maze::{Maze, Tile};

fn tile(value: &str, pos: Point) -> Result<Tile, MazeError> {
    match value {
        "0" => Ok(Tile::Open),
        "1" => Ok(Tile::Wall),
        _ => Err(MazeError::InvalidValue {
            value: value.to_string(),
            pos,
        }),
    }
}

fn build(rows: Vec<Vec<Tile>>) -> Result<Maze, MazeError> {
    let width = rows.first().map_or(0, Vec::len);
    if width == 0 {
        return Err(MazeError::Empty);
    }
    for (y, row) in rows.iter().enumerate() {
        if row.len() != width {
            return Err(MazeError::InconsistentSize {
                row: y as i32,
                expected: width as i32,
                found: row.len() as i32,
            });
        }
    }
    Ok(Maze::from_fn(width as i32, rows.len() as i32, |p| {
        rows[p.y as usize][p.x as usize]
    }))
}

/// Parse numeric text into a [`Maze`]. Blank lines are ignored.
pub fn parse(s: &str) -> Result<Maze, MazeError> {
    let mut rows = Vec::new();
    for line in s.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let y = rows.len() as i32;
        let separated = line.contains(|c: char| c == ',' || c.is_whitespace());
        let row = if separated {
            line.split(|c: char| c == ',' || c.is_whitespace())
                .filter(|t| !t.is_empty())
                .enumerate()
                .map(|(x, t)| tile(t, Point::new(x as i32, y)))
                .collect::<Result<Vec<_>, _>>()?
        } else {
            line.chars()
                .enumerate()
                .map(|(x, ch)| tile(&ch.to_string(), Point::new(x as i32, y)))
                .collect::<Result<Vec<_>, _>>()?
        };
        rows.push(row);
    }
    build(rows)
}

/// Build a [`Maze`] from rows of `0`/`1` values.
pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Maze, MazeError> {
    let rows = rows
        .iter()
        .enumerate()
        .map(|(y, row)| {
            row.as_ref()
                .iter()
                .enumerate()
                .map(|(x, &v)| match v {
                    0 => Ok(Tile::Open),
                    1 => Ok(Tile::Wall),
                    _ => Err(MazeError::InvalidValue {
                        value: v.to_string(),
                        pos: Point::new(x as i32, y as i32),
                    }),
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;
    build(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_spaced_and_compact() {
        let a = parse("0 1 0\n0 0 0").unwrap();
        let b = parse("010\n000\n").unwrap();
        let c = parse("0,1,0\n0, 0, 0").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(a.size(), Point::new(3, 2));
        assert_eq!(a.at(Point::new(1, 0)), Some(Tile::Wall));
        assert_eq!(a.open_count(), 5);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let m = parse("\n\n  0 0\n\n  1 0\n").unwrap();
        assert_eq!(m.size(), Point::new(2, 2));
        assert!(!m.is_open(Point::new(0, 1)));
    }

    #[test]
    fn rows_match_text() {
        let rows = [vec![0u8, 1, 0], vec![0, 0, 0]];
        assert_eq!(from_rows(&rows).unwrap(), parse("0 1 0\n0 0 0").unwrap());
    }

    #[test]
    fn invalid_value() {
        let err = parse("0 0\n0 2").unwrap_err();
        assert!(matches!(
            err,
            MazeError::InvalidValue { ref value, pos } if value == "2" && pos == Point::new(1, 1)
        ));
        let err = from_rows(&[[0u8, 7]]).unwrap_err();
        assert!(matches!(err, MazeError::InvalidValue { pos, .. } if pos == Point::new(1, 0)));
    }

    #[test]
    fn compact_row_reports_column_not_byte_offset() {
        let err = parse("0é1\n000").unwrap_err();
        assert!(matches!(
            err,
            MazeError::InvalidValue { ref value, pos } if value == "é" && pos == Point::new(1, 0)
        ));
        let err = parse("éé2").unwrap_err();
        assert!(matches!(err, MazeError::InvalidValue { pos, .. } if pos == Point::new(0, 0)));
        let err = parse("0é2").unwrap_err();
        assert!(matches!(err, MazeError::InvalidValue { pos, .. } if pos == Point::new(1, 0)));
    }

    #[test]
    fn inconsistent_rows() {
        let err = parse("0 0 0\n0 0").unwrap_err();
        assert!(matches!(
            err,
            MazeError::InconsistentSize {
                row: 1,
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn empty_input() {
        assert!(matches!(parse("   \n"), Err(MazeError::Empty)));
        let none: [Vec<u8>; 0] = [];
        assert!(matches!(from_rows(&none), Err(MazeError::Empty)));
    }
}
