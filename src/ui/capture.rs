//! # Pointer Capture
//!
//! The page listens to the pointer through terminal mouse capture. The
//! [`PointerCapture`] guard enables capture when created and disables it
//! exactly once: on [`PointerCapture::release`] or, failing that, on drop.
//! One guard is held for the whole session; nothing re-acquires it while
//! the page is running.

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};
use std::io::Write;

pub struct PointerCapture<W: Write> {
    writer: W,
    active: bool,
}

impl<W: Write> PointerCapture<W> {
    /// Enable mouse capture on `writer`.
    pub fn acquire(mut writer: W) -> Result<Self> {
        execute!(writer, EnableMouseCapture).context("Failed to enable mouse capture")?;
        tracing::debug!("pointer capture acquired");
        Ok(Self {
            writer,
            active: true,
        })
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Disable mouse capture. Calling this again is a no-op.
    pub fn release(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        execute!(self.writer, DisableMouseCapture).context("Failed to disable mouse capture")?;
        tracing::debug!("pointer capture released");
        Ok(())
    }
}

impl<W: Write> Drop for PointerCapture<W> {
    fn drop(&mut self) {
        let _ = self.release();
    }
}
