//! Crossterm terminal driver for mazechase.
//!
//! Provides a [`CrosstermDriver`] that implements [`mazechase_core::Driver`],
//! putting the terminal in raw mode on an alternate screen and painting
//! frame diffs cell by cell.

use std::io::{self, Write};
use std::sync::mpsc::Sender;
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{self, Attribute, Color as CtColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use mazechase_core::{
    AttrMask, Color,
    app::{Context, Driver},
    grid::Frame,
    messages::{Key, Msg},
};

/// Maps a [`mazechase_core::Color`] to a [`crossterm::style::Color`].
fn to_ct_color(c: Color) -> CtColor {
    if c == Color::DEFAULT {
        CtColor::Reset
    } else {
        let (r, g, b) = (c.r(), c.g(), c.b());
        CtColor::Rgb { r, g, b }
    }
}

/// Maps a crossterm [`KeyCode`] to a [`Key`].
fn to_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Up => Some(Key::ArrowUp),
        KeyCode::Down => Some(Key::ArrowDown),
        KeyCode::Left => Some(Key::ArrowLeft),
        KeyCode::Right => Some(Key::ArrowRight),
        _ => None,
    }
}

/// Translate one terminal event. Ctrl+C becomes [`Msg::Quit`]; key
/// releases and unmapped keys are dropped.
fn to_msg(ev: Event) -> Option<Msg> {
    match ev {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            ..
        }) => {
            if kind == KeyEventKind::Release {
                return None;
            }
            if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
                return Some(Msg::Quit);
            }
            to_key(code).map(Msg::key)
        }
        Event::Resize(cols, rows) => Some(Msg::Screen {
            rows: rows as i32,
            cols: cols as i32,
        }),
        _ => None,
    }
}

/// A terminal back-end using crossterm.
#[derive(Debug, Default)]
pub struct CrosstermDriver {
    active: bool,
}

impl CrosstermDriver {
    /// Create a new driver. The terminal is untouched until
    /// [`Driver::init`].
    pub fn new() -> Self {
        Self::default()
    }
}

impl Driver for CrosstermDriver {
    fn init(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        terminal::enable_raw_mode()?;
        self.active = true;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        log::debug!("terminal initialised");
        Ok(())
    }

    fn poll_msgs(
        &mut self,
        ctx: &Context,
        tx: &Sender<Msg>,
        timeout: Duration,
    ) -> Result<(), Box<dyn std::error::Error>> {
        if !event::poll(timeout)? {
            return Ok(());
        }

        while event::poll(Duration::ZERO)? {
            if ctx.is_done() {
                return Ok(());
            }
            let ev = event::read()?;
            if matches!(ev, Event::Resize(..)) {
                // Old content would linger outside the redrawn area.
                execute!(io::stdout(), terminal::Clear(ClearType::All))?;
            }
            if let Some(msg) = to_msg(ev) {
                tx.send(msg).ok();
            }
        }

        Ok(())
    }

    fn flush(&mut self, frame: Frame) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = io::stdout().lock();

        for fc in frame.cells.iter().filter(|fc| !fc.cell.is_wide_tail()) {
            let p = fc.pos;
            let cell = &fc.cell;

            queue!(
                stdout,
                cursor::MoveTo(p.col as u16, p.row as u16),
                SetForegroundColor(to_ct_color(cell.style.fg)),
                SetBackgroundColor(to_ct_color(cell.style.bg))
            )?;

            let attrs = cell.style.attrs;
            if attrs.contains(AttrMask::BOLD) {
                queue!(stdout, style::SetAttribute(Attribute::Bold))?;
            }

            write!(stdout, "{}", cell.ch)?;

            if !attrs.is_empty() {
                queue!(stdout, style::SetAttribute(Attribute::Reset))?;
            }
        }

        queue!(stdout, style::ResetColor)?;
        stdout.flush()?;
        Ok(())
    }

    fn close(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        let mut stdout = io::stdout();
        let _ = execute!(stdout, style::ResetColor, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
        log::debug!("terminal restored");
    }
}
