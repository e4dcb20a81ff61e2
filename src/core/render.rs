//! Frame display and key polling

use std::io::{self, Stdout, Write};
use std::time::Duration;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute, queue,
    style::Print,
    terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use crate::QUIT_KEY;
use crate::core::capture::{Frame, TextOverlay};
use crate::types::Result;

/// Key pressed during the game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Escape,
    /// Ctrl-C, delivered as a key while the terminal is raw
    Interrupt,
}

impl Key {
    pub fn is_quit(&self) -> bool {
        match self {
            Key::Char(c) => c.eq_ignore_ascii_case(&QUIT_KEY),
            Key::Escape | Key::Interrupt => true,
        }
    }
}

pub trait Renderer {
    fn show(&mut self, frame: &Frame) -> Result<()>;
    /// Non-blocking; `None` if no key is waiting
    fn poll_key(&mut self) -> Result<Option<Key>>;
    /// Tear the display down. Called once, may be called again.
    fn close(&mut self);
}

/// Draws frame overlays in the terminal's alternate screen
pub struct TerminalRenderer {
    out: Stdout,
    /// Overlays on screen, redraw is skipped when unchanged
    last_shown: Option<Vec<TextOverlay>>,
    open: bool,
}

impl TerminalRenderer {
    pub fn open() -> Result<Self> {
        let mut out = io::stdout();
        enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, Hide)?;
        Ok(Self { out, last_shown: None, open: true })
    }
}

impl Renderer for TerminalRenderer {
    fn show(&mut self, frame: &Frame) -> Result<()> {
        if self.last_shown.as_deref() == Some(frame.overlays()) {
            return Ok(());
        }
        queue!(self.out, Clear(ClearType::All))?;
        for overlay in frame.overlays() {
            queue!(
                self.out,
                MoveTo(overlay.position.column, overlay.position.row),
                Print(&overlay.text)
            )?;
        }
        self.out.flush()?;
        self.last_shown = Some(frame.overlays().to_vec());
        Ok(())
    }

    fn poll_key(&mut self) -> Result<Option<Key>> {
        while event::poll(Duration::ZERO)? {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let pressed = match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Key::Interrupt,
                KeyCode::Char(c) => Key::Char(c),
                KeyCode::Esc => Key::Escape,
                _ => continue,
            };
            return Ok(Some(pressed));
        }
        Ok(None)
    }

    fn close(&mut self) {
        if !self.open {
            return;
        }
        self.open = false;
        // Best effort, the terminal may already be gone
        let _ = execute!(self.out, Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        self.close();
    }
}
