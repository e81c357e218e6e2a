//! Euler rotation of model-space points.
//!
//! No matrix is stored: the trig terms are recomputed from the base angles on
//! every call, so repeated frames never accumulate error.

use crate::types::{Angles, Point3};

/// Rotate `p` by `angles`, composing `Rz(C) * Ry(B) * Rx(A)`.
#[inline]
pub fn rotate(angles: Angles, p: Point3) -> Point3 {
    let (sa, ca) = angles.a.sin_cos();
    let (sb, cb) = angles.b.sin_cos();
    let (sc, cc) = angles.c.sin_cos();
    let (i, j, k) = (p.x, p.y, p.z);

    Point3 {
        x: j * sa * sb * cc - k * ca * sb * cc + j * ca * sc + k * sa * sc + i * cb * cc,
        y: j * ca * cc + k * sa * cc - j * sa * sb * sc + k * ca * sb * sc - i * cb * sc,
        z: k * ca * cb - j * sa * cb + i * sb,
    }
}
