use crate::render::Canvas;
use crate::TermInt;
use std::{io::{Stdout, Write, stdout}, time::{Duration, Instant}};

use anyhow::{Context, Result};
use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, KeyEvent, read, poll};
use log::debug;

pub struct TermManager {
    width: TermInt,
    height: TermInt,
    stdout: Stdout,
    // What is currently on screen, so a frame only prints what changed
    screen: Vec<char>,
}

impl TermManager {
    pub fn new() -> Result<Self> {
        let (width, height) = terminal::size().context("Error reading terminal size")?;
        let screen = vec![' '; width as usize * height as usize];
        Ok(TermManager { width, height, stdout: stdout(), screen })
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen).context("Error entering alt screen")?;
        terminal::enable_raw_mode().context("Error enabling raw mode")?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)
            .context("Error hiding cursor")?;
        self.clear()
    }

    pub fn restore(&mut self) -> Result<()> {
        terminal::disable_raw_mode().context("Error disabling raw mode")?;
        execute!(self.stdout, cursor::Show, cursor::EnableBlinking)
            .context("Error showing cursor")?;
        execute!(self.stdout, LeaveAlternateScreen).context("Error leaving alt screen")?;
        Ok(())
    }

    pub fn get_terminal_size(&self) -> (TermInt, TermInt) {
        (self.width, self.height)
    }

    /// Collects key presses until `timeout` runs out. Returns early as soon as
    /// something arrived, so intents are applied without waiting for a tick.
    pub fn read_key_events(&mut self, timeout: Duration) -> Result<Vec<KeyEvent>> {
        let mut events = vec![];
        let deadline = Instant::now() + timeout;

        loop {
            let wait = deadline.saturating_duration_since(Instant::now());
            if !poll(wait).context("Error polling events")? {
                break;
            }

            match read().context("Error reading event")? {
                Event::Key(ev) => events.push(ev),
                Event::Resize(w, h) => self.resize(w, h)?,
                _ => {}
            }

            if !events.is_empty() && !poll(Duration::from_millis(0)).context("Error polling events")? {
                break;
            }
        }

        Ok(events)
    }

    pub fn present(&mut self, canvas: &Canvas) -> Result<()> {
        if (canvas.width(), canvas.height()) != (self.width, self.height) {
            self.resize(canvas.width(), canvas.height())?;
        }

        for y in 0..self.height {
            for x in 0..self.width {
                let ch = canvas.get(x, y).unwrap_or(' ');
                let idx = self.width as usize * y as usize + x as usize;
                if self.screen[idx] != ch {
                    queue!(self.stdout, cursor::MoveTo(x, y), style::Print(ch))
                        .context("Error queueing output")?;
                    self.screen[idx] = ch;
                }
            }
        }

        self.flush()
    }

    pub fn clear(&mut self) -> Result<()> {
        execute!(self.stdout, terminal::Clear(ClearType::All)).context("Error clearing")?;
        self.screen = vec![' '; self.width as usize * self.height as usize];
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.stdout.flush().context("Error flushing")
    }

    ///////////////////////////////////////////////////////////////////////////

    fn resize(&mut self, width: TermInt, height: TermInt) -> Result<()> {
        debug!("terminal resized to {}x{}", width, height);
        self.width = width;
        self.height = height;
        self.clear()
    }
}
