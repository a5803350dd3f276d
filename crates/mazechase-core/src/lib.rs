//! **mazechase-core**: core types for the maze chase game.
//!
//! This crate provides the foundational types used across the *mazechase*
//! workspace: row/column geometry, the toroidal [`Maze`] grid model, styled
//! screen cells, input messages, and the Elm-architecture application loop.

pub mod app;
pub mod cell;
pub mod geom;
pub mod grid;
pub mod maze;
pub mod messages;

pub use app::{App, AppConfig, Context, Driver, Effect, Model};
pub use cell::{AttrMask, Cell, Color, Style};
pub use geom::{Direction, Point};
pub use grid::{Frame, FrameCell, Grid};
pub use maze::{Maze, MazeError, Spawn, SpawnKind, Tile};
pub use messages::{Key, Msg};
