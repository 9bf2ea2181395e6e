//! Interactive terminal playback.
//!
//! Raw-mode, alternate-screen event loop: one tick every ~16 ms advances
//! the animation, renders the frame, and blits it as half-block text.
//! Key events are drained between frames and mapped to plane controls.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};

use crate::anim::{PlaneInput, SceneConfig, SceneState};
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::output::TerminalEncoder;
use crate::scene::{Scene, CANVAS_HEIGHT, CANVAS_WIDTH};

/// Timer cadence, matching the original 16 ms tick.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Action resulting from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Fly the plane higher.
    Climb,
    /// Fly the plane lower.
    Descend,
    /// Leave the viewer.
    Quit,
    /// No action.
    None,
}

/// Map a key code to a viewer action.
#[must_use]
pub fn map_key(code: KeyCode) -> Action {
    match code {
        KeyCode::Char('f' | 'F') => Action::Climb,
        KeyCode::Char('d' | 'D') => Action::Descend,
        KeyCode::Esc | KeyCode::Char('q') => Action::Quit,
        _ => Action::None,
    }
}

/// Terminal viewer for a scene variant.
pub struct Viewer {
    config: SceneConfig,
    columns: u32,
}

impl Viewer {
    /// Create a viewer with the default 100-column frame width.
    #[must_use]
    pub fn new(config: SceneConfig) -> Self {
        Self { config, columns: 100 }
    }

    /// Set the frame width in character columns.
    #[must_use]
    pub fn columns(mut self, columns: u32) -> Self {
        self.columns = columns.max(10);
        self
    }

    /// Run the playback loop until the user quits.
    pub fn run(&self) -> Result<()> {
        let fb = Framebuffer::new(CANVAS_WIDTH, CANVAS_HEIGHT)?;
        let encoder = TerminalEncoder::new().width(self.columns);

        let (cols, rows) = encoder.dimensions(&fb);
        let (term_cols, term_rows) = terminal::size()?;
        if u32::from(term_cols) < cols || u32::from(term_rows) < rows + 2 {
            return Err(Error::Terminal(format!(
                "terminal too small: need {}x{} cells, have {term_cols}x{term_rows}",
                cols,
                rows + 2
            )));
        }

        let mut stdout = io::stdout();
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, Hide)?;

        let result = self.play(&mut stdout, fb, &encoder, rows);

        // Restore the terminal even when playback failed
        let restore = execute!(stdout, LeaveAlternateScreen, Show)
            .map_err(Error::from)
            .and_then(|()| disable_raw_mode().map_err(Error::from));

        result.and(restore)
    }

    fn play(
        &self,
        out: &mut impl Write,
        mut fb: Framebuffer,
        encoder: &TerminalEncoder,
        rows: u32,
    ) -> Result<()> {
        let scene = Scene::airport();
        let mut state = SceneState::new(&self.config);
        let mut next_frame = Instant::now();

        loop {
            state.tick(&self.config);
            scene.render(&state, &mut fb);

            let frame = encoder.render(&fb);
            for (i, line) in frame.lines().enumerate() {
                queue!(out, MoveTo(0, i as u16))?;
                out.write_all(line.as_bytes())?;
            }
            queue!(out, MoveTo(0, rows as u16))?;
            write!(out, "{}", self.config.title)?;
            queue!(out, MoveTo(0, rows as u16 + 1))?;
            write!(out, "[F] climb  [D] descend  [Esc] quit")?;
            out.flush()?;

            next_frame += FRAME_INTERVAL;
            if self.drain_input(&mut state, next_frame)? {
                return Ok(());
            }
        }
    }

    /// Poll and apply key events until the next frame is due.
    ///
    /// Returns true when the user quit.
    fn drain_input(&self, state: &mut SceneState, deadline: Instant) -> Result<bool> {
        loop {
            let wait = deadline.saturating_duration_since(Instant::now());
            if !event::poll(wait)? {
                return Ok(false);
            }

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                match map_key(key.code) {
                    Action::Quit => return Ok(true),
                    Action::Climb => state.apply_input(PlaneInput::Climb, self.config.control),
                    Action::Descend => state.apply_input(PlaneInput::Descend, self.config.control),
                    Action::None => {}
                }
            }

            if Instant::now() >= deadline {
                return Ok(false);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_key_plane_controls() {
        assert_eq!(map_key(KeyCode::Char('f')), Action::Climb);
        assert_eq!(map_key(KeyCode::Char('F')), Action::Climb);
        assert_eq!(map_key(KeyCode::Char('d')), Action::Descend);
        assert_eq!(map_key(KeyCode::Char('D')), Action::Descend);
    }

    #[test]
    fn test_map_key_quit() {
        assert_eq!(map_key(KeyCode::Esc), Action::Quit);
        assert_eq!(map_key(KeyCode::Char('q')), Action::Quit);
    }

    #[test]
    fn test_map_key_ignores_other_keys() {
        assert_eq!(map_key(KeyCode::Char('x')), Action::None);
        assert_eq!(map_key(KeyCode::Enter), Action::None);
    }
}
