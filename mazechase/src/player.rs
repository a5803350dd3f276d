use mazechase_core::{Direction, Maze, Point, Tile};

use crate::chaser::Target;

/// What the player picked up on its last step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pickup {
    #[default]
    Nothing,
    Dot,
    Pill,
}

/// The player-controlled agent.
#[derive(Debug, Clone)]
pub struct Player {
    pos: Point,
    origin: Point,
    lives: u32,
}

impl Player {
    /// Create a player standing on its spawn point.
    pub fn new(origin: Point, lives: u32) -> Self {
        Self {
            pos: origin,
            origin,
            lives,
        }
    }

    /// Current position.
    pub fn pos(&self) -> Point {
        self.pos
    }

    /// Spawn point, where the player returns after losing a life.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Remaining lives.
    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Whether any life is left.
    pub fn is_alive(&self) -> bool {
        self.lives > 0
    }

    /// Move one step in `dir` (staying put against walls) and eat whatever
    /// lies on the destination.
    pub fn step(&mut self, maze: &mut Maze, dir: Direction) -> Pickup {
        self.pos = maze.make_move(self.pos, dir);
        match maze.take(self.pos) {
            Tile::Dot => Pickup::Dot,
            Tile::Pill => Pickup::Pill,
            _ => Pickup::Nothing,
        }
    }

    /// Lose a life. While lives remain the player respawns at its origin;
    /// the last life is lost where the player stands.
    pub fn kill(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        if self.lives > 0 {
            self.pos = self.origin;
        }
        log::debug!("player killed, {} lives left", self.lives);
    }
}

impl Target for Player {
    fn pos(&self) -> Point {
        self.pos
    }

    fn captured(&mut self) {
        self.kill();
    }
}
