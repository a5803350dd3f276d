//! The Elm-architecture application loop: [`Model`], [`Driver`], [`Effect`],
//! [`App`].
//!
//! The loop is single threaded: the driver is polled for input with a short
//! timeout, queued messages are fed to the model, and the model is redrawn
//! and diffed against the previous frame. A [`Msg::Tick`] is queued every
//! [`AppConfig::tick`] interval.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::grid::{compute_frame, Frame, Grid};
use crate::messages::Msg;

/// Upper bound on how long a single driver poll may block.
pub const POLL_INTERVAL: Duration = Duration::from_millis(16);

// ---------------------------------------------------------------------------
// Context (cancellation token)
// ---------------------------------------------------------------------------

/// A cooperative-cancellation token backed by an [`AtomicBool`].
#[derive(Clone, Debug, Default)]
pub struct Context {
    done: Arc<AtomicBool>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether cancellation has been requested.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::Relaxed)
    }

    /// Request cancellation.
    #[inline]
    pub fn cancel(&self) {
        self.done.store(true, Ordering::Relaxed);
    }
}

// ---------------------------------------------------------------------------
// Effect
// ---------------------------------------------------------------------------

/// A side-effect returned by [`Model::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Stop the application loop.
    End,
}

// ---------------------------------------------------------------------------
// Model / Driver
// ---------------------------------------------------------------------------

/// The application model (Elm architecture).
pub trait Model {
    /// Process a message, optionally returning a side-effect.
    fn update(&mut self, msg: Msg) -> Option<Effect>;

    /// Render the current state into `grid`.
    fn draw(&self, grid: &mut Grid);
}

/// Back-end driver (e.g. a terminal).
pub trait Driver {
    /// Initialise the back-end.
    fn init(&mut self) -> Result<(), Box<dyn std::error::Error>>;

    /// Wait at most `timeout` for input and send any messages through `tx`.
    fn poll_msgs(
        &mut self,
        ctx: &Context,
        tx: &Sender<Msg>,
        timeout: Duration,
    ) -> Result<(), Box<dyn std::error::Error>>;

    /// Flush a computed frame to the screen.
    fn flush(&mut self, frame: Frame) -> Result<(), Box<dyn std::error::Error>>;

    /// Clean up / restore the back-end. Must be safe to call after a failed
    /// `init`.
    fn close(&mut self);
}

// ---------------------------------------------------------------------------
// AppConfig / App
// ---------------------------------------------------------------------------

/// Configuration for creating an [`App`].
pub struct AppConfig<M: Model, D: Driver> {
    pub model: M,
    pub driver: D,
    pub rows: i32,
    pub cols: i32,
    /// Interval between [`Msg::Tick`] messages. `None` disables ticking.
    pub tick: Option<Duration>,
}

/// The main application runner.
pub struct App<M: Model, D: Driver> {
    model: M,
    driver: D,
    rows: i32,
    cols: i32,
    tick: Option<Duration>,
}

impl<M: Model, D: Driver> App<M, D> {
    pub fn new(config: AppConfig<M, D>) -> Self {
        Self {
            model: config.model,
            driver: config.driver,
            rows: config.rows,
            cols: config.cols,
            tick: config.tick,
        }
    }

    /// The model, e.g. to inspect the final state after [`run`](App::run).
    pub fn model(&self) -> &M {
        &self.model
    }

    /// The driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Run the Model-View-Update loop until the model returns
    /// [`Effect::End`] or the driver fails.
    ///
    /// The driver is always closed before returning.
    pub fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        if let Err(e) = self.driver.init() {
            self.driver.close();
            return Err(e);
        }
        let result = self.run_loop();
        self.driver.close();
        result
    }

    fn run_loop(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let ctx = Context::new();
        let (tx, rx): (Sender<Msg>, Receiver<Msg>) = mpsc::channel();
        tx.send(Msg::Init).ok();

        let mut prev_grid = Grid::new(self.rows, self.cols);
        let mut curr_grid = Grid::new(self.rows, self.cols);
        let mut next_tick = self.tick.map(|t| Instant::now() + t);

        log::debug!("app loop started ({}x{})", self.rows, self.cols);

        self.process_pending(&rx, &ctx, &mut prev_grid, &mut curr_grid)?;

        while !ctx.is_done() {
            let timeout = match next_tick {
                Some(at) => at.saturating_duration_since(Instant::now()).min(POLL_INTERVAL),
                None => POLL_INTERVAL,
            };
            self.driver.poll_msgs(&ctx, &tx, timeout)?;

            if let (Some(at), Some(interval)) = (next_tick, self.tick) {
                let now = Instant::now();
                if now >= at {
                    tx.send(Msg::Tick).ok();
                    // Skip missed ticks instead of bursting to catch up.
                    next_tick = Some((at + interval).max(now));
                }
            }

            self.process_pending(&rx, &ctx, &mut prev_grid, &mut curr_grid)?;
        }

        log::debug!("app loop finished");
        Ok(())
    }

    /// Drain queued messages, update the model, draw, diff and flush.
    fn process_pending(
        &mut self,
        rx: &Receiver<Msg>,
        ctx: &Context,
        prev_grid: &mut Grid,
        curr_grid: &mut Grid,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut needs_draw = false;

        while let Ok(msg) = rx.try_recv() {
            if let Msg::Screen { rows, cols } = &msg {
                // Force a full redraw on the next flush.
                *prev_grid = Grid::new(0, 0);
                log::trace!("screen resized to {rows}x{cols}");
            }
            let effect = self.model.update(msg);
            needs_draw = true;
            if effect == Some(Effect::End) {
                ctx.cancel();
                return Ok(());
            }
        }

        if needs_draw {
            self.model.draw(curr_grid);
            let frame = compute_frame(prev_grid, curr_grid);
            if !frame.cells.is_empty() {
                self.driver.flush(frame)?;
            }
            prev_grid.copy_from(curr_grid);
        }

        Ok(())
    }
}
