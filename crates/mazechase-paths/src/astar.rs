use std::collections::{BTreeSet, HashMap, HashSet};

use mazechase_core::{Maze, Point};

use crate::traits::AstarPather;

// ---------------------------------------------------------------------------
// Search node
// ---------------------------------------------------------------------------

/// Per-search bookkeeping for a discovered point.
#[derive(Clone, Copy, Debug)]
struct Node {
    /// Steps from the start.
    g: i32,
    /// Heuristic estimate to the target.
    h: i32,
    /// Predecessor on the best path found so far. `None` for the start.
    parent: Option<Point>,
}

impl Node {
    #[inline]
    fn f(&self) -> i32 {
        self.g + self.h
    }
}

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// A* search over unit-cost grids.
///
/// The frontier is ordered by `(f, point)`, so among nodes with equal total
/// cost the one with the smallest row, then smallest column, is expanded
/// first. Results are therefore fully deterministic.
///
/// The finder keeps its tables between calls only to reuse their
/// allocations: every search starts from empty tables.
#[derive(Debug, Default)]
pub struct PathFinder {
    nodes: HashMap<Point, Node>,
    open: BTreeSet<(i32, Point)>,
    closed: HashSet<Point>,
    nbuf: Vec<Point>,
}

impl PathFinder {
    /// Create a finder with empty tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute a shortest path from `start` to `target`.
    ///
    /// The returned path excludes `start` and ends with `target`. It is
    /// empty when `target` is unreachable or equal to `start`.
    pub fn find_path<P: AstarPather>(
        &mut self,
        pather: &P,
        start: Point,
        target: Point,
    ) -> Vec<Point> {
        self.nodes.clear();
        self.open.clear();
        self.closed.clear();

        if start == target {
            return Vec::new();
        }

        let h = pather.estimate(start, target);
        self.nodes.insert(
            start,
            Node {
                g: 0,
                h,
                parent: None,
            },
        );
        self.open.insert((h, start));

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut path = Vec::new();

        'search: while let Some((_, current)) = self.open.pop_first() {
            let current_g = self.nodes[&current].g;

            nbuf.clear();
            pather.neighbors(current, &mut nbuf);

            for &n in nbuf.iter() {
                if n == target {
                    path = self.reconstruct(current, target);
                    break 'search;
                }
                if self.closed.contains(&n) {
                    continue;
                }

                let g = current_g + 1;
                match self.nodes.get_mut(&n) {
                    // Discovered and not closed: it is on the frontier.
                    Some(node) => {
                        if g < node.g {
                            self.open.remove(&(node.f(), n));
                            node.g = g;
                            node.parent = Some(current);
                            self.open.insert((node.f(), n));
                        }
                    }
                    None => {
                        let h = pather.estimate(n, target);
                        self.nodes.insert(
                            n,
                            Node {
                                g,
                                h,
                                parent: Some(current),
                            },
                        );
                        self.open.insert((g + h, n));
                    }
                }
            }

            self.closed.insert(current);
        }

        self.nbuf = nbuf;

        log::trace!(
            "astar {start} -> {target}: {} steps, {} closed",
            path.len(),
            self.closed.len()
        );
        path
    }

    /// Follow parent links back from `last`, the point adjacent to `target`.
    fn reconstruct(&self, last: Point, target: Point) -> Vec<Point> {
        let mut path = vec![target];
        let mut cur = last;
        while let Some(parent) = self.nodes[&cur].parent {
            path.push(cur);
            cur = parent;
        }
        path.reverse();
        path
    }
}

/// One-shot A* search on a maze. See [`PathFinder::find_path`].
pub fn find_path(maze: &Maze, start: Point, target: Point) -> Vec<Point> {
    PathFinder::new().find_path(maze, start, target)
}
