//! Controller: one clear -> input -> rasterize -> emit -> advance cycle per tick.

use anyhow::Result;

use crate::core::Renderer;
use crate::input::{drain_actions, ActionBatch, KeySource};
use crate::pacer::FramePacer;
use crate::term::{encode_frame_into, frame_capacity};
use crate::types::ViewAction;

/// Drives the renderer one frame at a time.
///
/// The encoded frame lives in a buffer sized for the worst case up front, so
/// steady-state ticks do not allocate.
pub struct Controller {
    renderer: Renderer,
    frame: Vec<u8>,
    running: bool,
    frames: u64,
}

impl Controller {
    pub fn new(renderer: Renderer) -> Self {
        let frame = Vec::with_capacity(frame_capacity(renderer.width(), renderer.height()));
        Self {
            renderer,
            frame,
            running: true,
            frames: 0,
        }
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Number of frames emitted so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Bytes of the most recently encoded frame.
    pub fn last_frame(&self) -> &[u8] {
        &self.frame
    }

    /// Run one tick.
    ///
    /// Clears the buffers, applies `actions` in order, rasterizes, encodes the
    /// frame, hands it to `emit`, then advances the angles. A `Quit` action
    /// stops the controller before anything is drawn and `emit` is not called.
    ///
    /// Returns whether the loop should keep going.
    pub fn tick(
        &mut self,
        actions: &[ViewAction],
        emit: impl FnOnce(&[u8]) -> Result<()>,
    ) -> Result<bool> {
        if !self.running {
            return Ok(false);
        }

        self.renderer.clear();
        for &action in actions {
            if action == ViewAction::Quit {
                tracing::info!(frames = self.frames, "quit requested");
                self.running = false;
                return Ok(false);
            }
            self.renderer.apply(action);
        }

        self.renderer.rasterize();
        self.frame.clear();
        encode_frame_into(&self.renderer, &mut self.frame)?;
        emit(&self.frame)?;
        self.frames += 1;

        self.renderer.advance();
        Ok(true)
    }
}

/// Run the fixed-cadence frame loop until a quit key or an emit error.
pub fn run_loop<S: KeySource + ?Sized>(
    controller: &mut Controller,
    keys: &mut S,
    pacer: &mut FramePacer,
    mut emit: impl FnMut(&[u8]) -> Result<()>,
) -> Result<()> {
    let mut actions = ActionBatch::new();
    loop {
        actions.clear();
        drain_actions(keys, &mut actions)?;
        if !controller.tick(&actions, &mut emit)? {
            return Ok(());
        }
        pacer.wait();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RenderConfig, ANGLE_STEP_A, HORIZONTAL_STEP};

    fn controller() -> Controller {
        let renderer = Renderer::new(&RenderConfig {
            width: 40,
            height: 20,
            cube_width: 8.0,
            ..RenderConfig::default()
        })
        .unwrap();
        Controller::new(renderer)
    }

    #[test]
    fn tick_emits_one_frame_and_advances() {
        let mut c = controller();
        let mut emitted = Vec::new();
        assert!(c
            .tick(&[], |f| {
                emitted.push(f.to_vec());
                Ok(())
            })
            .unwrap());
        assert_eq!(emitted.len(), 1);
        assert_eq!(emitted[0], c.last_frame());
        assert_eq!(c.renderer().angles().a, ANGLE_STEP_A);
        assert_eq!(c.frames(), 1);
    }

    #[test]
    fn actions_apply_before_rasterizing() {
        let mut c = controller();
        c.tick(&[ViewAction::MoveRight, ViewAction::MoveRight], |_| Ok(()))
            .unwrap();
        assert_eq!(c.renderer().view().h_offset, 2.0 * HORIZONTAL_STEP);
        let text = String::from_utf8(c.last_frame().to_vec()).unwrap();
        assert!(text.contains("H=10.0:V=0.0:W=8.0"), "{text:?}");
    }

    #[test]
    fn quit_emits_nothing_and_stays_stopped() {
        let mut c = controller();
        let mut calls = 0;
        let keep_going = c
            .tick(&[ViewAction::MoveLeft, ViewAction::Quit], |_| {
                calls += 1;
                Ok(())
            })
            .unwrap();
        assert!(!keep_going);
        assert!(!c.is_running());
        assert_eq!(calls, 0);
        assert_eq!(c.renderer().angles().a, 0.0);

        assert!(!c.tick(&[], |_| Ok(())).unwrap());
    }

    #[test]
    fn emit_error_propagates() {
        let mut c = controller();
        let err = c
            .tick(&[], |_| Err(anyhow::anyhow!("broken pipe")))
            .unwrap_err();
        assert!(err.to_string().contains("broken pipe"));
    }
}
