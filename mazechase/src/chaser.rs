//! Pursuit agents.
//!
//! A [`Chaser`] caches a queue of moves towards its target and consumes one
//! per tick. When the queue is empty it plans a fresh A* path against the
//! target's current position. On capture the queue is dropped so the next
//! tick plans against wherever the target respawned.

use std::collections::VecDeque;

use mazechase_core::{Direction, Maze, Point};
use mazechase_paths::{PathFinder, to_directions};

/// Something a chaser can hunt.
pub trait Target {
    /// Current position, read fresh on every planning cycle.
    fn pos(&self) -> Point;

    /// Called when a chaser lands on the target. The target decides the
    /// consequences.
    fn captured(&mut self);
}

/// Planning state of a chaser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChaseState {
    /// No queued moves: the next tick searches.
    NoPath,
    /// Consuming a queued path, one move per tick.
    Following,
}

/// An A*-driven pursuer.
#[derive(Debug)]
pub struct Chaser {
    pos: Point,
    pending: VecDeque<Direction>,
    finder: PathFinder,
}

impl Chaser {
    /// Create a chaser at `pos` with nothing planned.
    pub fn new(pos: Point) -> Self {
        Self {
            pos,
            pending: VecDeque::new(),
            finder: PathFinder::new(),
        }
    }

    /// Current position.
    pub fn pos(&self) -> Point {
        self.pos
    }

    /// Queued moves, next first.
    pub fn pending(&self) -> &VecDeque<Direction> {
        &self.pending
    }

    /// `Following` while moves are queued, `NoPath` otherwise.
    pub fn state(&self) -> ChaseState {
        if self.pending.is_empty() {
            ChaseState::NoPath
        } else {
            ChaseState::Following
        }
    }

    /// Drop any queued moves, forcing a search on the next tick.
    pub fn reset_path(&mut self) {
        self.pending.clear();
    }

    /// Advance one tick: plan if needed, take one queued step, then check
    /// for capture. Returns whether the target was captured.
    ///
    /// An unreachable target leaves the chaser in place for this tick.
    pub fn tick<T: Target>(&mut self, maze: &Maze, target: &mut T) -> bool {
        if self.pending.is_empty() {
            self.plan(maze, target.pos());
        }
        if let Some(dir) = self.pending.pop_front() {
            self.pos = maze.make_move(self.pos, dir);
        }
        self.check_capture(target)
    }

    /// Capture `target` if it shares this chaser's cell.
    pub fn check_capture<T: Target>(&mut self, target: &mut T) -> bool {
        if self.pos != target.pos() {
            return false;
        }
        log::debug!("chaser at {} captured its target", self.pos);
        target.captured();
        self.reset_path();
        true
    }

    fn plan(&mut self, maze: &Maze, goal: Point) {
        let path = self.finder.find_path(maze, self.pos, goal);
        if path.is_empty() {
            log::debug!("chaser at {}: no path to {goal}", self.pos);
            return;
        }
        self.pending = to_directions(self.pos, &path, maze.rows(), maze.cols());
        log::debug!(
            "chaser at {} planned {} moves to {goal}",
            self.pos,
            self.pending.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A stationary target that counts captures.
    struct Dummy {
        pos: Point,
        captures: u32,
    }

    impl Dummy {
        fn at(row: i32, col: i32) -> Self {
            Self {
                pos: Point::new(row, col),
                captures: 0,
            }
        }
    }

    impl Target for Dummy {
        fn pos(&self) -> Point {
            self.pos
        }

        fn captured(&mut self) {
            self.captures += 1;
        }
    }

    fn small() -> Maze {
        Maze::parse("#####\n#P..#\n#.#.#\n#..X#\n#####").unwrap()
    }

    #[test]
    fn plans_then_follows() {
        let m = small();
        let mut c = Chaser::new(Point::new(3, 3));
        let mut t = Dummy::at(1, 1);
        assert_eq!(c.state(), ChaseState::NoPath);

        assert!(!c.tick(&m, &mut t));
        assert_eq!(c.state(), ChaseState::Following);
        assert_eq!(c.pending().len(), 3);
        assert!(c.pending().iter().all(|d| matches!(d, Direction::Up | Direction::Left)));
    }

    #[test]
    fn reaches_target_in_four_ticks_and_captures() {
        let m = small();
        let mut c = Chaser::new(Point::new(3, 3));
        let mut t = Dummy::at(1, 1);
        for _ in 0..3 {
            assert!(!c.tick(&m, &mut t));
        }
        assert!(c.tick(&m, &mut t));
        assert_eq!(c.pos(), Point::new(1, 1));
        assert_eq!(t.captures, 1);
        assert!(c.pending().is_empty());
        assert_eq!(c.state(), ChaseState::NoPath);
    }

    #[test]
    fn capture_resets_remaining_path() {
        let m = small();
        let mut c = Chaser::new(Point::new(3, 3));
        let mut t = Dummy::at(1, 1);
        c.tick(&m, &mut t);
        assert_eq!(c.pending().len(), 3);

        // The target walks into the chaser.
        t.pos = c.pos();
        assert!(c.check_capture(&mut t));
        assert!(c.pending().is_empty());
        assert_eq!(t.captures, 1);
    }

    #[test]
    fn capture_during_tick_drops_queued_moves() {
        let m = Maze::parse("#######\n#.....#\n#######").unwrap();
        let mut c = Chaser::new(Point::new(1, 1));
        let mut t = Dummy::at(1, 5);
        assert!(!c.tick(&m, &mut t));
        assert_eq!(c.pos(), Point::new(1, 2));
        assert_eq!(c.pending().len(), 3);

        // The target steps onto the chaser's next cell with moves to spare.
        t.pos = Point::new(1, 3);
        assert!(c.tick(&m, &mut t));
        assert_eq!(t.captures, 1);
        assert!(c.pending().is_empty());
        assert_eq!(c.state(), ChaseState::NoPath);

        // The next tick plans afresh against the target's new position.
        t.pos = Point::new(1, 1);
        assert!(!c.tick(&m, &mut t));
        assert_eq!(c.pos(), Point::new(1, 2));
        assert_eq!(c.pending().len(), 1);
    }

    #[test]
    fn stays_put_while_unreachable_then_replans() {
        let mut m = Maze::parse("#####\n#..##\n#####\n##..#\n#####").unwrap();
        let mut c = Chaser::new(Point::new(1, 1));
        let mut t = Dummy::at(3, 3);
        for _ in 0..3 {
            assert!(!c.tick(&m, &mut t));
            assert_eq!(c.pos(), Point::new(1, 1));
            assert_eq!(c.state(), ChaseState::NoPath);
        }

        // Target moves into the chaser's region.
        t.pos = Point::new(1, 2);
        assert!(c.tick(&m, &mut t));
        assert_eq!(t.captures, 1);

        // Unchanged maze, target elsewhere again: reachable no more.
        t.pos = Point::new(3, 2);
        assert!(!c.tick(&m, &mut t));
        assert_eq!(c.pos(), Point::new(1, 2));

        // Opening the maze is picked up on the next plan.
        m = Maze::parse("#####\n#..##\n#.###\n#...#\n#####").unwrap();
        assert!(!c.tick(&m, &mut t));
        assert_eq!(c.pos(), Point::new(1, 1));
        assert_eq!(c.state(), ChaseState::Following);
        assert_eq!(c.pending().len(), 3);
    }

    #[test]
    fn drained_path_replans_against_moved_target() {
        let m = Maze::parse("#######\n#.....#\n#######").unwrap();
        let mut c = Chaser::new(Point::new(1, 1));
        let mut t = Dummy::at(1, 3);
        c.tick(&m, &mut t);
        assert_eq!(c.pos(), Point::new(1, 2));
        assert_eq!(c.pending().len(), 1);

        // The queued move was planned against the old position and is still
        // consumed.
        t.pos = Point::new(1, 5);
        assert!(!c.tick(&m, &mut t));
        assert_eq!(c.pos(), Point::new(1, 3));
        assert_eq!(c.state(), ChaseState::NoPath);

        assert!(!c.tick(&m, &mut t));
        assert_eq!(c.pos(), Point::new(1, 4));
        assert!(c.tick(&m, &mut t));
        assert_eq!(c.pos(), Point::new(1, 5));
    }

    #[test]
    fn chases_across_the_edge() {
        let m = Maze::parse("#######\n.......\n#######").unwrap();
        let mut c = Chaser::new(Point::new(1, 1));
        let mut t = Dummy::at(1, 5);
        c.tick(&m, &mut t);
        assert_eq!(c.pos(), Point::new(1, 0));
        c.tick(&m, &mut t);
        assert_eq!(c.pos(), Point::new(1, 6));
        assert!(c.tick(&m, &mut t));
    }
}
