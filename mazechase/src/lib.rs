//! mazechase: a terminal maze game where A* chasers hunt the player across
//! a wrapping maze.

pub mod chaser;
pub mod colors;
pub mod config;
pub mod game;
pub mod model;
pub mod player;

pub use chaser::{ChaseState, Chaser, Target};
pub use config::{ConfigError, GameConfig, Glyph, GlyphError, load_maze};
pub use game::{Game, Outcome, Scoreboard};
pub use model::ChaseModel;
pub use player::{Pickup, Player};
