//! The maze: a rectangular grid of [`Tile`]s with toroidal movement.
//!
//! Moving off one edge wraps to the opposite edge. Only walls block
//! movement. The wall layout never changes after parsing, but dots and pills
//! are eaten, so bounds are read from the rows on every query.

use std::fmt;

use crate::geom::{Direction, Point};

/// Character used for walls in maze files.
pub const WALL_CHAR: char = '#';
/// Character used for dots in maze files.
pub const DOT_CHAR: char = '.';
/// Character used for power pills in maze files.
pub const PILL_CHAR: char = 'X';
/// Player spawn marker.
pub const PLAYER_CHAR: char = 'P';
/// Chaser spawn marker.
pub const CHASER_CHAR: char = 'G';

// ---------------------------------------------------------------------------
// Tile
// ---------------------------------------------------------------------------

/// Content of a single maze cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tile {
    Wall,
    Dot,
    Pill,
    #[default]
    Empty,
}

impl Tile {
    /// Map a maze file character to a tile. Unknown characters are floor.
    pub fn from_char(ch: char) -> Tile {
        match ch {
            WALL_CHAR => Tile::Wall,
            DOT_CHAR => Tile::Dot,
            PILL_CHAR => Tile::Pill,
            _ => Tile::Empty,
        }
    }

    /// Whether agents may stand on this tile.
    #[inline]
    pub fn passable(self) -> bool {
        self != Tile::Wall
    }
}

// ---------------------------------------------------------------------------
// Spawn
// ---------------------------------------------------------------------------

/// Who starts on a spawn marker.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SpawnKind {
    Player,
    Chaser,
}

/// A spawn marker found while parsing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Spawn {
    pub kind: SpawnKind,
    pub pos: Point,
}

// ---------------------------------------------------------------------------
// Maze
// ---------------------------------------------------------------------------

/// A rectangular maze.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    tiles: Vec<Vec<Tile>>,
    spawns: Vec<Spawn>,
}

impl Maze {
    /// Parse a maze from newline-separated text.
    pub fn parse(text: &str) -> Result<Self, MazeError> {
        Self::from_lines(text.lines())
    }

    /// Build a maze from its rows. Rows must be non-empty and all have the
    /// same number of characters.
    pub fn from_lines<I, S>(lines: I) -> Result<Self, MazeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tiles = Vec::new();
        let mut spawns = Vec::new();
        let mut width = None;

        for (row, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            let len = line.chars().count();
            match width {
                None => width = Some(len),
                Some(w) if w != len => {
                    return Err(MazeError::InconsistentSize {
                        row,
                        expected: w,
                        found: len,
                    });
                }
                Some(_) => {}
            }

            let mut cells = Vec::with_capacity(len);
            for (col, ch) in line.chars().enumerate() {
                let pos = Point::new(row as i32, col as i32);
                match ch {
                    PLAYER_CHAR => spawns.push(Spawn {
                        kind: SpawnKind::Player,
                        pos,
                    }),
                    CHASER_CHAR => spawns.push(Spawn {
                        kind: SpawnKind::Chaser,
                        pos,
                    }),
                    _ => {}
                }
                cells.push(Tile::from_char(ch));
            }
            tiles.push(cells);
        }

        if tiles.is_empty() || width == Some(0) {
            return Err(MazeError::Empty);
        }
        Ok(Self { tiles, spawns })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.tiles.len() as i32
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.tiles.first().map_or(0, |r| r.len() as i32)
    }

    /// Spawn markers in reading order.
    pub fn spawns(&self) -> &[Spawn] {
        &self.spawns
    }

    /// Whether `p` lies inside the maze.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.row >= 0 && p.row < self.rows() && p.col >= 0 && p.col < self.cols()
    }

    /// Tile at `p`, or `None` outside the maze.
    pub fn at(&self, p: Point) -> Option<Tile> {
        if !self.contains(p) {
            return None;
        }
        Some(self.tiles[p.row as usize][p.col as usize])
    }

    /// Whether `p` is inside the maze and not a wall.
    pub fn is_legal(&self, p: Point) -> bool {
        self.at(p).is_some_and(Tile::passable)
    }

    /// Step from `p` one cell in `dir`, wrapping around the edges.
    ///
    /// Returns `None` if the destination is a wall; the caller keeps `p`.
    /// `Nop` returns `p` itself when it is legal.
    pub fn step(&self, p: Point, dir: Direction) -> Option<Point> {
        let (rows, cols) = (self.rows(), self.cols());
        if rows == 0 || cols == 0 {
            return None;
        }
        let d = dir.delta();
        let next = Point::new(
            (p.row + d.row).rem_euclid(rows),
            (p.col + d.col).rem_euclid(cols),
        );
        self.is_legal(next).then_some(next)
    }

    /// Apply `dir` to `p`, staying in place if the move is illegal.
    pub fn make_move(&self, p: Point, dir: Direction) -> Point {
        self.step(p, dir).unwrap_or(p)
    }

    /// Legal cardinal neighbors of `p`, appended to `buf` in
    /// [`Direction::CARDINALS`] order.
    pub fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for d in Direction::CARDINALS {
            if let Some(n) = self.step(p, d) {
                buf.push(n);
            }
        }
    }

    /// Remove a dot or pill at `p`, returning what was there.
    ///
    /// Walls and empty cells are left untouched.
    pub fn take(&mut self, p: Point) -> Tile {
        if !self.contains(p) {
            return Tile::Empty;
        }
        let cell = &mut self.tiles[p.row as usize][p.col as usize];
        match *cell {
            Tile::Dot | Tile::Pill => std::mem::take(cell),
            other => other,
        }
    }

    /// Number of dots left.
    pub fn dots(&self) -> usize {
        self.tiles
            .iter()
            .flatten()
            .filter(|&&t| t == Tile::Dot)
            .count()
    }

    /// Row-major iterator over `(Point, Tile)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Tile)> + '_ {
        self.tiles.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, &t)| (Point::new(r as i32, c as i32), t))
        })
    }
}

// ---------------------------------------------------------------------------
// MazeError
// ---------------------------------------------------------------------------

/// Errors that can occur when parsing a maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// No rows, or rows without any cells.
    Empty,
    /// A row does not have the same width as the first one.
    InconsistentSize {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "maze: no cells"),
            Self::InconsistentSize {
                row,
                expected,
                found,
            } => write!(
                f,
                "maze: row {row} has {found} cells, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for MazeError {}
