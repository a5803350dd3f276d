//! Colour palette.

use mazechase_core::Color;

/// Wall foreground and background: the maze is drawn as solid magenta.
pub const WALL: Color = Color::from_rgb(170, 0, 170);
pub const DOT: Color = Color::from_rgb(220, 220, 200);
pub const PILL: Color = Color::from_rgb(255, 184, 82);
pub const PLAYER: Color = Color::from_rgb(255, 255, 0);
pub const CHASER: Color = Color::from_rgb(255, 85, 85);
pub const DEATH: Color = Color::from_rgb(255, 60, 60);
pub const STATUS: Color = Color::from_rgb(200, 200, 200);
pub const WIN: Color = Color::from_rgb(80, 200, 80);
