//! The renderer aggregate: animation angles, view, and frame buffers.

use crate::buffers::FrameBuffers;
use crate::error::RenderError;
use crate::raster;
use crate::types::{Angles, RenderConfig, ViewAction, ViewState};

/// Owns everything one frame of the cube needs.
///
/// Screen dimensions are fixed at construction; the buffers are allocated
/// once and reused for every frame.
#[derive(Debug, Clone)]
pub struct Renderer {
    angles: Angles,
    view: ViewState,
    buffers: FrameBuffers,
    background: char,
}

impl Renderer {
    /// Validate `config` and allocate the frame buffers.
    ///
    /// The initial cube width is clamped into the configured limits.
    pub fn new(config: &RenderConfig) -> Result<Self, RenderError> {
        if !(config.step > 0.0 && config.step.is_finite()) {
            return Err(RenderError::InvalidStep(config.step));
        }
        let (min, max) = (config.min_cube_width, config.max_cube_width);
        if !(min.is_finite() && max.is_finite() && min <= max) {
            return Err(RenderError::InvalidCubeLimits { min, max });
        }
        for (field, value) in [
            ("cube_width", config.cube_width),
            ("distance", config.distance),
            ("k1", config.k1),
            ("h_offset", config.h_offset),
            ("v_offset", config.v_offset),
        ] {
            if !value.is_finite() {
                return Err(RenderError::NonFinite { field, value });
            }
        }
        // The sample grid starts at -w; the step must move it at the widest cube.
        if -max + config.step == -max {
            return Err(RenderError::StepTooSmall {
                step: config.step,
                cube_width: max,
            });
        }

        let buffers = FrameBuffers::try_new(config.width, config.height, config.background)?;

        let mut view = config.view_state();
        view.cube_width = view.cube_width.clamp(min, max);

        tracing::debug!(
            width = config.width,
            height = config.height,
            cube_width = view.cube_width,
            "renderer created"
        );

        Ok(Self {
            angles: Angles::default(),
            view,
            buffers,
            background: config.background,
        })
    }

    pub fn width(&self) -> u16 {
        self.buffers.width()
    }

    pub fn height(&self) -> u16 {
        self.buffers.height()
    }

    pub fn background(&self) -> char {
        self.background
    }

    pub fn angles(&self) -> Angles {
        self.angles
    }

    pub fn set_angles(&mut self, angles: Angles) {
        self.angles = angles;
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn buffers(&self) -> &FrameBuffers {
        &self.buffers
    }

    /// Apply a keyboard action to the view.
    pub fn apply(&mut self, action: ViewAction) {
        self.view.apply(action);
    }

    /// Reset all buffers to the background.
    pub fn clear(&mut self) {
        self.buffers.clear(self.background);
    }

    /// Draw the cube at the current angles into the (cleared) buffers.
    pub fn rasterize(&mut self) -> usize {
        raster::rasterize(self.angles, &self.view, &mut self.buffers)
    }

    /// Advance the animation by one frame.
    pub fn advance(&mut self) {
        self.angles.advance();
    }
}
