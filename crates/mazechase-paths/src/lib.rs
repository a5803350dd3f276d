//! Path search for the maze chase game.
//!
//! - **A\*** shortest-path search on a wrapping maze ([`PathFinder`],
//!   [`find_path`])
//! - translation of a point path into moves ([`to_directions`])
//!
//! Searches run through the [`AstarPather`] trait, which [`Maze`] implements
//! with a wraparound Manhattan heuristic.
//!
//! [`Maze`]: mazechase_core::Maze

mod astar;
mod directions;
mod distance;
mod traits;

pub use astar::{PathFinder, find_path};
pub use directions::to_directions;
pub use distance::{manhattan, toroidal_manhattan};
pub use traits::{AstarPather, Pather};
