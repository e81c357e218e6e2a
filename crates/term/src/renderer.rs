//! TerminalRenderer: owns the raw-mode terminal session and writes frames.
//!
//! Entering the session switches the terminal to raw mode, hides the cursor
//! and clears the screen. The session is restored by [`TerminalRenderer::exit`]
//! or, failing that, when the renderer is dropped.

use std::io::{self, Write};
use std::panic;

use anyhow::{Context, Result};

use crossterm::{
    cursor,
    style::{Attribute, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
    active: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(256),
            active: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("enable raw mode")?;
        // From here on Drop restores the terminal, even if the rest fails.
        self.active = true;

        self.buf.clear();
        encode_enter_into(&mut self.buf)?;
        self.flush_buf()?;
        tracing::debug!("terminal session entered");
        Ok(())
    }

    /// Reset colors, clear the screen, home the cursor and leave raw mode.
    ///
    /// Calling it on an inactive session does nothing.
    pub fn exit(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        self.buf.clear();
        encode_exit_into(&mut self.buf)?;
        let flushed = self.flush_buf();
        terminal::disable_raw_mode().context("disable raw mode")?;
        tracing::debug!("terminal session restored");
        flushed
    }

    /// Write one pre-encoded frame with a single write and flush.
    pub fn draw(&mut self, frame: &[u8]) -> Result<()> {
        self.stdout.write_all(frame).context("write frame")?;
        self.stdout.flush().context("flush frame")?;
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        if let Err(err) = self.exit() {
            tracing::warn!(error = %err, "failed to restore terminal");
        }
    }
}

/// Standard 16-color cyan foreground.
pub const DEFAULT_FOREGROUND: &[u8] = b"\x1b[36m";

/// Session setup: hide the cursor, clear the screen, cyan default foreground.
pub fn encode_enter_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(cursor::Hide)?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.extend_from_slice(DEFAULT_FOREGROUND);
    Ok(())
}

/// Session teardown: reset colors, clear, home, show the cursor.
pub fn encode_exit_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(cursor::Show)?;
    Ok(())
}

/// Write the teardown sequence to `out` and leave raw mode.
///
/// Used where no [`TerminalRenderer`] is reachable, i.e. from a panic hook.
pub fn restore_terminal(out: &mut impl Write) -> Result<()> {
    let mut buf = Vec::with_capacity(64);
    encode_exit_into(&mut buf)?;
    out.write_all(&buf)?;
    out.flush()?;
    terminal::disable_raw_mode().context("disable raw mode")?;
    Ok(())
}

/// Restore the terminal before any panic is reported.
///
/// Release builds abort on panic, so `Drop` never runs there. The previous
/// hook still runs afterwards.
pub fn install_panic_hook() {
    chain_panic_hook(|| restore_terminal(&mut io::stdout()));
}

fn chain_panic_hook(restore: impl Fn() -> Result<()> + Send + Sync + 'static) {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore();
        previous(info);
    }));
}
