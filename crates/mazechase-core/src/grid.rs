//! The screen buffer: a [`Grid`] of [`Cell`]s and the [`Frame`] diff sent to
//! drivers.

use crate::cell::{Cell, Style};
use crate::geom::Point;

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A fixed-size, row-major 2D buffer of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    rows: i32,
    cols: i32,
}

impl Grid {
    /// Create a grid of the given dimensions filled with blank cells.
    pub fn new(rows: i32, cols: i32) -> Self {
        let rows = rows.max(0);
        let cols = cols.max(0);
        Self {
            cells: vec![Cell::default(); (rows * cols) as usize],
            rows,
            cols,
        }
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.row >= 0 && p.row < self.rows && p.col >= 0 && p.col < self.cols
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        self.contains(p)
            .then(|| (p.row * self.cols + p.col) as usize)
    }

    /// Read the cell at `p`. Returns a blank cell outside the grid.
    pub fn at(&self, p: Point) -> Cell {
        self.index(p).map(|i| self.cells[i]).unwrap_or_default()
    }

    /// Set the cell at `p`. No-op outside the grid.
    pub fn set(&mut self, p: Point, cell: Cell) {
        if let Some(i) = self.index(p) {
            self.cells[i] = cell;
        }
    }

    /// Write `text` left to right starting at `p`, clipped to the grid.
    pub fn text(&mut self, p: Point, text: &str, style: Style) {
        for (i, ch) in text.chars().enumerate() {
            let q = p.shift(0, i as i32);
            if q.col >= self.cols {
                break;
            }
            self.set(q, Cell::default().with_char(ch).with_style(style));
        }
    }

    /// Fill every cell with `cell`.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Copy the contents of a same-sized grid into `self`.
    ///
    /// Grids of a different size are resized to match `src`.
    pub fn copy_from(&mut self, src: &Grid) {
        self.rows = src.rows;
        self.cols = src.cols;
        self.cells.clone_from(&src.cells);
    }

    /// Row-major iterator over `(Point, Cell)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        let cols = self.cols.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &c)| (Point::new(i as i32 / cols, i as i32 % cols), c))
    }
}

// ---------------------------------------------------------------------------
// Frame / FrameCell / compute_frame
// ---------------------------------------------------------------------------

/// A single cell that changed between frames.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameCell {
    pub cell: Cell,
    pub pos: Point,
}

/// A set of cell changes (a diff frame).
#[derive(Clone, Debug, Default)]
pub struct Frame {
    pub cells: Vec<FrameCell>,
}

/// Compute the cells of `curr` that differ from `prev`.
///
/// When the sizes differ every cell of `curr` is part of the frame.
pub fn compute_frame(prev: &Grid, curr: &Grid) -> Frame {
    let same_size = prev.rows == curr.rows && prev.cols == curr.cols;
    let cells = curr
        .iter()
        .filter(|&(p, c)| !same_size || prev.at(p) != c)
        .map(|(pos, cell)| FrameCell { cell, pos })
        .collect();
    Frame { cells }
}
