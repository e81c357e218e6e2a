//! Non-blocking key sources and the per-tick drain.

use std::time::Duration;

use anyhow::Result;
use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::map::handle_key_event;
use crate::types::ViewAction;

/// Upper bound on actions collected in one tick. Anything beyond stays
/// queued for the next tick.
pub const MAX_ACTIONS_PER_TICK: usize = 32;

/// Actions collected during one tick.
pub type ActionBatch = ArrayVec<ViewAction, MAX_ACTIONS_PER_TICK>;

/// A keyboard that can be polled without blocking.
pub trait KeySource {
    /// Next pending key press, or `None` if nothing is waiting.
    fn poll_key(&mut self) -> Result<Option<KeyEvent>>;
}

/// Reads key presses from the terminal through crossterm.
#[derive(Debug, Default)]
pub struct CrosstermKeys;

impl KeySource for CrosstermKeys {
    fn poll_key(&mut self) -> Result<Option<KeyEvent>> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                // Auto-repeat counts as another press; releases are dropped.
                if key.kind != KeyEventKind::Release {
                    return Ok(Some(key));
                }
            }
        }
        Ok(None)
    }
}

/// Drain pending keys from `source` into `out`, mapping them to actions.
///
/// Unmapped keys are discarded. Draining stops early after a `Quit` or once
/// `out` is full.
pub fn drain_actions<S: KeySource + ?Sized>(source: &mut S, out: &mut ActionBatch) -> Result<()> {
    while !out.is_full() {
        let Some(key) = source.poll_key()? else {
            break;
        };
        if let Some(action) = handle_key_event(key) {
            out.push(action);
            if action == ViewAction::Quit {
                break;
            }
        }
    }
    Ok(())
}
