//! Elm-architecture Model implementation.

use std::mem;

use mazechase_core::{
    AttrMask, Cell, Direction, Point, Style, Tile,
    app::{Effect, Model},
    grid::Grid,
    messages::{Key, Msg},
};

use crate::colors;
use crate::config::{GameConfig, Glyph};
use crate::game::{Game, Outcome};

/// Minimum screen width, so the status line always fits.
const MIN_COLS: i32 = 40;

/// The chase game model.
pub struct ChaseModel {
    game: Game,
    cfg: GameConfig,
    /// Move applied on the next tick, then reset to `Nop`.
    next_move: Direction,
}

impl ChaseModel {
    /// Wrap a game with the glyphs and layout from `cfg`.
    pub fn new(game: Game, cfg: GameConfig) -> Self {
        Self {
            game,
            cfg,
            next_move: Direction::Nop,
        }
    }

    /// The simulated world.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Screen size needed to draw the maze and two status lines.
    pub fn screen_size(&self) -> (i32, i32) {
        let maze = self.game.maze();
        let rows = maze.rows() + 3;
        let cols = (maze.cols() * self.cfg.cell_width()).max(MIN_COLS);
        (rows, cols)
    }

    fn handle_key(&mut self, key: Key) -> Option<Effect> {
        if self.game.outcome() != Outcome::Running {
            return Some(Effect::End);
        }
        let dir = match key {
            Key::ArrowUp | Key::Char('k') => Direction::Up,
            Key::ArrowDown | Key::Char('j') => Direction::Down,
            Key::ArrowLeft | Key::Char('h') => Direction::Left,
            Key::ArrowRight | Key::Char('l') => Direction::Right,
            Key::Escape | Key::Char('q') => return Some(Effect::End),
            _ => return None,
        };
        self.next_move = dir;
        None
    }

    fn tick(&mut self) {
        let dir = mem::take(&mut self.next_move);
        self.game.tick(dir);
    }

    // -------------------------------------------------------------------
    // Draw
    // -------------------------------------------------------------------

    /// Screen position of maze cell `p`.
    fn screen_pos(&self, p: Point) -> Point {
        Point::new(p.row, p.col * self.cfg.cell_width())
    }

    fn put(&self, grid: &mut Grid, p: Point, glyph: Glyph, style: Style) {
        let sp = self.screen_pos(p);
        grid.set(sp, Cell::default().with_char(glyph.head()).with_style(style));
        if self.cfg.use_emoji {
            let tail = match glyph.tail() {
                Some(ch) => Cell::default().with_char(ch).with_style(style),
                None => Cell::WIDE_TAIL,
            };
            grid.set(sp.shift(0, 1), tail);
        }
    }

    fn draw_maze(&self, grid: &mut Grid) {
        let wall = Style::default()
            .with_fg(colors::WALL)
            .with_bg(colors::WALL)
            .with_attrs(AttrMask::BOLD);
        let dot = Style::default().with_fg(colors::DOT);
        let pill = Style::default()
            .with_fg(colors::PILL)
            .with_attrs(AttrMask::BOLD);

        for (p, tile) in self.game.maze().iter() {
            let (ch, style) = match tile {
                Tile::Wall => (self.cfg.wall, wall),
                Tile::Dot => (self.cfg.dot, dot),
                Tile::Pill => (self.cfg.pill, pill),
                Tile::Empty => (self.cfg.space, Style::default()),
            };
            self.put(grid, p, ch, style);
        }
    }

    fn draw_agents(&self, grid: &mut Grid) {
        let chaser = Style::default().with_fg(colors::CHASER);
        for c in self.game.chasers() {
            self.put(grid, c.pos(), self.cfg.chaser, chaser);
        }

        let player = self.game.player();
        if self.game.outcome() == Outcome::Lost {
            let death = Style::default()
                .with_fg(colors::DEATH)
                .with_attrs(AttrMask::BOLD);
            self.put(grid, player.pos(), self.cfg.death, death);
        } else {
            let style = Style::default()
                .with_fg(colors::PLAYER)
                .with_attrs(AttrMask::BOLD);
            self.put(grid, player.pos(), self.cfg.player, style);
        }
    }

    fn draw_status(&self, grid: &mut Grid) {
        let row = self.game.maze().rows() + 1;
        let board = self.game.scoreboard();
        let status = format!(
            "Score: {}  Lives: {}  Dots: {}",
            board.score,
            self.game.player().lives(),
            board.dots_left
        );
        grid.text(
            Point::new(row, 0),
            &status,
            Style::default().with_fg(colors::STATUS),
        );

        let (msg, fg) = match self.game.outcome() {
            Outcome::Running => return,
            Outcome::Won => ("You win! Press any key.", colors::WIN),
            Outcome::Lost => ("Game over. Press any key.", colors::DEATH),
        };
        grid.text(
            Point::new(row + 1, 0),
            msg,
            Style::default().with_fg(fg).with_attrs(AttrMask::BOLD),
        );
    }
}

impl Model for ChaseModel {
    fn update(&mut self, msg: Msg) -> Option<Effect> {
        match msg {
            Msg::KeyDown { key, .. } => self.handle_key(key),
            Msg::Tick => {
                self.tick();
                None
            }
            Msg::Quit => Some(Effect::End),
            Msg::Init | Msg::Screen { .. } => None,
        }
    }

    fn draw(&self, grid: &mut Grid) {
        grid.fill(Cell::default());
        self.draw_maze(grid);
        self.draw_agents(grid);
        self.draw_status(grid);
    }
}
