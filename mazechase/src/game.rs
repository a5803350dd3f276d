//! World state and the per-tick update.

use mazechase_core::{Direction, Maze, SpawnKind};

use crate::chaser::Chaser;
use crate::config::ConfigError;
use crate::player::{Pickup, Player};

/// Points for eating a dot.
pub const DOT_POINTS: u32 = 1;
/// Points for eating a pill.
pub const PILL_POINTS: u32 = 10;

/// Score and remaining dots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scoreboard {
    pub score: u32,
    pub dots_left: usize,
}

impl Scoreboard {
    fn record(&mut self, pickup: Pickup) {
        match pickup {
            Pickup::Dot => {
                self.score += DOT_POINTS;
                self.dots_left = self.dots_left.saturating_sub(1);
            }
            Pickup::Pill => self.score += PILL_POINTS,
            Pickup::Nothing => {}
        }
    }
}

/// State of play after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Running,
    /// Every dot was eaten.
    Won,
    /// The player ran out of lives.
    Lost,
}

/// The maze, its agents and the score.
#[derive(Debug)]
pub struct Game {
    maze: Maze,
    player: Player,
    chasers: Vec<Chaser>,
    board: Scoreboard,
    outcome: Outcome,
    ticks: u64,
}

impl Game {
    /// Place the agents at the maze's spawn markers. The first `P` is the
    /// player; every `G` is a chaser, in reading order.
    pub fn new(maze: Maze, lives: u32) -> Result<Self, ConfigError> {
        let mut player = None;
        let mut chasers = Vec::new();
        for spawn in maze.spawns() {
            match spawn.kind {
                SpawnKind::Player if player.is_none() => {
                    player = Some(Player::new(spawn.pos, lives));
                }
                SpawnKind::Player => log::warn!("ignoring extra player spawn at {}", spawn.pos),
                SpawnKind::Chaser => chasers.push(Chaser::new(spawn.pos)),
            }
        }
        let player = player.ok_or(ConfigError::MissingPlayer)?;

        let board = Scoreboard {
            score: 0,
            dots_left: maze.dots(),
        };
        let mut game = Self {
            maze,
            player,
            chasers,
            board,
            outcome: Outcome::Running,
            ticks: 0,
        };
        game.update_outcome();
        log::info!(
            "new game: {} chasers, {} dots, {} lives",
            game.chasers.len(),
            game.board.dots_left,
            lives
        );
        Ok(game)
    }

    /// The maze, minus whatever has been eaten.
    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    /// The player agent.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Chasers in spawn order.
    pub fn chasers(&self) -> &[Chaser] {
        &self.chasers
    }

    /// Current score and remaining dots.
    pub fn scoreboard(&self) -> Scoreboard {
        self.board
    }

    /// Whether the game is still running.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Number of ticks simulated so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advance the world one tick.
    ///
    /// The player moves first and eats what it lands on; walking into a
    /// chaser counts as being caught by it. Then every chaser moves once, in
    /// spawn order. A finished game no longer changes.
    pub fn tick(&mut self, input: Direction) -> Outcome {
        if self.outcome != Outcome::Running {
            return self.outcome;
        }
        self.ticks += 1;

        let pickup = self.player.step(&mut self.maze, input);
        self.board.record(pickup);
        if self.update_outcome() != Outcome::Running {
            return self.outcome;
        }

        let ppos = self.player.pos();
        if let Some(c) = self.chasers.iter_mut().find(|c| c.pos() == ppos) {
            c.check_capture(&mut self.player);
        }

        for c in &mut self.chasers {
            if !self.player.is_alive() {
                break;
            }
            c.tick(&self.maze, &mut self.player);
        }

        self.update_outcome()
    }

    fn update_outcome(&mut self) -> Outcome {
        let outcome = if !self.player.is_alive() {
            Outcome::Lost
        } else if self.board.dots_left == 0 {
            Outcome::Won
        } else {
            Outcome::Running
        };
        if outcome != self.outcome {
            log::info!(
                "game over after {} ticks: {outcome:?}, score {}",
                self.ticks,
                self.board.score
            );
            self.outcome = outcome;
        }
        outcome
    }
}
