use std::collections::TryReserveError;

use thiserror::Error;

/// Failures raised while constructing a [`Renderer`](crate::Renderer).
///
/// Nothing in the per-frame pipeline fails; these are the only error paths.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("invalid screen dimensions {width}x{height}")]
    InvalidDimensions { width: u16, height: u16 },

    #[error("sample step must be positive and finite, got {0}")]
    InvalidStep(f32),

    #[error("sample step {step} does not advance across a cube of half-extent {cube_width}")]
    StepTooSmall { step: f32, cube_width: f32 },

    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },

    #[error("cube width limits are inverted or not finite: min={min} max={max}")]
    InvalidCubeLimits { min: f32, max: f32 },

    #[error("failed to allocate frame buffers for {len} pixels")]
    Allocation {
        len: usize,
        #[source]
        source: TryReserveError,
    },
}
