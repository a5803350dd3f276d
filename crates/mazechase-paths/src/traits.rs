use mazechase_core::{Maze, Point};

use crate::distance::toroidal_manhattan;

/// Minimal pathfinding interface: neighbor enumeration with unit step cost.
pub trait Pather {
    /// Append the legal neighbors of `p` into `buf`. The caller clears `buf`
    /// before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather with a heuristic for A*.
pub trait AstarPather: Pather {
    /// Estimate of the number of steps from `from` to `to`.
    /// Must never overestimate (admissible) and must change by at most one
    /// per step (consistent).
    fn estimate(&self, from: Point, to: Point) -> i32;
}

impl Pather for Maze {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        Maze::neighbors(self, p, buf);
    }
}

/// Walls only ever make paths longer, so the wraparound distance of the
/// empty torus is a lower bound.
impl AstarPather for Maze {
    fn estimate(&self, from: Point, to: Point) -> i32 {
        toroidal_manhattan(from, to, self.rows(), self.cols())
    }
}
