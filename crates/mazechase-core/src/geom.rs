//! Geometry primitives: [`Point`] and [`Direction`].
//!
//! Coordinates are `(row, col)`: rows grow downwards, columns grow to the
//! right, matching the layout of a maze file read line by line.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A cell position on the maze or screen grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a point shifted by (drow, dcol). No wrapping is applied.
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Row-major order: smaller row first, then smaller column.
impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// A move command. `Nop` means "stay where you are".
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    #[default]
    Nop,
}

impl Direction {
    /// The four moves, in neighbor enumeration order.
    pub const CARDINALS: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit delta of this direction, before any wrapping.
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Direction::Up => Point::new(-1, 0),
            Direction::Down => Point::new(1, 0),
            Direction::Left => Point::new(0, -1),
            Direction::Right => Point::new(0, 1),
            Direction::Nop => Point::ZERO,
        }
    }

    /// Classify the step from `from` to the adjacent point `to` on a
    /// `rows` × `cols` torus.
    ///
    /// A delta of ±1 on one axis gives the plain direction. A delta of
    /// ∓(N−1) on an axis of length N is a step across the edge and gives the
    /// direction that wraps there (last column → column 0 is `Right`).
    /// Anything else, including `from == to`, is `Nop`.
    pub fn between(from: Point, to: Point, rows: i32, cols: i32) -> Direction {
        let d = to - from;
        match (d.row, d.col) {
            (0, 1) => Direction::Right,
            (0, -1) => Direction::Left,
            (1, 0) => Direction::Down,
            (-1, 0) => Direction::Up,
            (0, dc) if dc != 0 && dc == -(cols - 1) => Direction::Right,
            (0, dc) if dc != 0 && dc == cols - 1 => Direction::Left,
            (dr, 0) if dr != 0 && dr == -(rows - 1) => Direction::Down,
            (dr, 0) if dr != 0 && dr == rows - 1 => Direction::Up,
            _ => Direction::Nop,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
            Direction::Nop => "NOP",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1, 2);
        let b = Point::new(3, 4);
        assert_eq!(a + b, Point::new(4, 6));
        assert_eq!(b - a, Point::new(2, 2));
        assert_eq!(a.shift(-1, 1), Point::new(0, 3));
    }

    #[test]
    fn point_order_is_row_major() {
        let mut pts = vec![Point::new(2, 0), Point::new(1, 5), Point::new(1, 1)];
        pts.sort();
        assert_eq!(pts, vec![Point::new(1, 1), Point::new(1, 5), Point::new(2, 0)]);
    }

    #[test]
    fn point_equality_is_structural() {
        let mut set = HashSet::new();
        set.insert(Point::new(3, 3));
        assert!(set.contains(&Point::new(3, 3)));
        assert!(!set.contains(&Point::new(3, 4)));
    }

    #[test]
    fn direction_deltas() {
        let sum = Direction::CARDINALS
            .iter()
            .fold(Point::ZERO, |acc, d| acc + d.delta());
        assert_eq!(sum, Point::ZERO);
        assert_eq!(Direction::Up.delta(), Point::new(-1, 0));
        assert_eq!(Direction::Left.delta(), Point::new(0, -1));
        assert_eq!(Direction::Nop.delta(), Point::ZERO);
    }

    #[test]
    fn between_plain_steps() {
        let p = Point::new(2, 2);
        for d in Direction::CARDINALS {
            assert_eq!(Direction::between(p, p + d.delta(), 5, 5), d);
        }
    }

    #[test]
    fn between_wrapped_steps() {
        // 4 rows x 6 cols
        assert_eq!(
            Direction::between(Point::new(1, 5), Point::new(1, 0), 4, 6),
            Direction::Right
        );
        assert_eq!(
            Direction::between(Point::new(1, 0), Point::new(1, 5), 4, 6),
            Direction::Left
        );
        assert_eq!(
            Direction::between(Point::new(0, 2), Point::new(3, 2), 4, 6),
            Direction::Up
        );
        assert_eq!(
            Direction::between(Point::new(3, 2), Point::new(0, 2), 4, 6),
            Direction::Down
        );
    }

    #[test]
    fn between_non_adjacent_is_nop() {
        assert_eq!(
            Direction::between(Point::new(0, 0), Point::new(1, 1), 5, 5),
            Direction::Nop
        );
        assert_eq!(
            Direction::between(Point::new(0, 0), Point::new(0, 2), 5, 5),
            Direction::Nop
        );
        assert_eq!(
            Direction::between(Point::new(2, 2), Point::new(2, 2), 5, 5),
            Direction::Nop
        );
    }
}
