//! Perspective projection onto the character grid.

use crate::types::{Point3, ScreenSample, ViewState, CAMERA_EPSILON};

/// Project a rotated point onto a `width` x `height` screen.
///
/// Returns `None` when the point sits at or behind the camera plane
/// (`z + distance <= CAMERA_EPSILON`). Coordinates are truncated toward zero
/// and may fall outside the screen; bounds are the caller's business.
#[inline]
pub fn project(p: Point3, view: &ViewState, width: u16, height: u16) -> Option<ScreenSample> {
    let z = p.z + view.distance;
    if z <= CAMERA_EPSILON {
        return None;
    }

    let ooz = 1.0 / z;
    // Doubled horizontally: terminal cells are about twice as tall as wide.
    let sx = width as f32 / 2.0 + view.h_offset + view.k1 * ooz * p.x * 2.0;
    let sy = height as f32 / 2.0 + view.v_offset + view.k1 * ooz * p.y;

    Some(ScreenSample {
        x: sx as i32,
        y: sy as i32,
        ooz,
    })
}
