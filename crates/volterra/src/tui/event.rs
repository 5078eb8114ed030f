//! Event handling for the TUI

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use std::time::Duration;

/// Application events
#[derive(Debug)]
pub enum Event {
    /// Key press
    Key(KeyEvent),
    /// Periodic tick
    Tick,
    /// Terminal resize
    Resize(u16, u16),
}

/// Event handler
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Get next event, blocking at most one tick.
    pub fn next(&self) -> Event {
        if event::poll(self.tick_rate).unwrap_or(false) {
            match event::read() {
                Ok(CrosstermEvent::Key(key)) => Event::Key(key),
                Ok(CrosstermEvent::Resize(w, h)) => Event::Resize(w, h),
                _ => Event::Tick,
            }
        } else {
            Event::Tick
        }
    }
}
