//! Cube rasterizer.
//!
//! The cube is six analytic faces. Each face is swept on a 2D grid over
//! `[-w, w)` at the view's sample step, which yields a hollow shell of points.
//! Every point goes through [`rotate`] and [`project`], then a depth-tested
//! write into the frame buffers.

use crate::buffers::FrameBuffers;
use crate::projection::project;
use crate::transform::rotate;
use crate::types::{Angles, FaceColor, Point3, ViewState, FACE_CHAR};

/// The six cube faces, in draw order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Front,
    Right,
    Back,
    Left,
    Bottom,
    Top,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Right,
        Face::Back,
        Face::Left,
        Face::Bottom,
        Face::Top,
    ];

    pub const fn color(self) -> FaceColor {
        match self {
            Face::Front => FaceColor::Red,
            Face::Right => FaceColor::Green,
            Face::Back => FaceColor::Yellow,
            Face::Left => FaceColor::Blue,
            Face::Bottom => FaceColor::Magenta,
            Face::Top => FaceColor::Cyan,
        }
    }

    /// Model-space point for grid coordinate `(u, v)` on a cube of
    /// half-extent `w`.
    ///
    /// Components are truncated toward zero, so samples sit on the integer
    /// lattice.
    #[inline(always)]
    pub fn point(self, u: f32, v: f32, w: f32) -> Point3 {
        let p = match self {
            Face::Front => Point3::new(u, v, -w),
            Face::Right => Point3::new(w, v, u),
            Face::Back => Point3::new(-w, v, -u),
            Face::Left => Point3::new(-u, v, w),
            Face::Bottom => Point3::new(u, -w, -v),
            Face::Top => Point3::new(u, w, v),
        };
        Point3::new(p.x.trunc(), p.y.trunc(), p.z.trunc())
    }
}

/// Visit every model-space sample of the cube in draw order.
///
/// The grid accumulates the step in `f32`. A step that is not positive and
/// finite visits nothing, and a row stops early once adding the step no
/// longer moves the coordinate.
pub fn for_each_sample(view: &ViewState, mut f: impl FnMut(Face, Point3)) {
    let w = view.cube_width;
    let step = view.step;
    if !(step > 0.0 && step.is_finite() && w.is_finite()) {
        return;
    }

    for face in Face::ALL {
        let mut u = -w;
        while u < w {
            let mut v = -w;
            while v < w {
                f(face, face.point(u, v, w));
                let next = v + step;
                if next <= v {
                    break;
                }
                v = next;
            }
            let next = u + step;
            if next <= u {
                break;
            }
            u = next;
        }
    }
}

/// Rasterize the cube into `fb`.
///
/// `fb` is expected to be cleared already. Returns the number of depth-test
/// wins, which is handy for tracing and tests.
pub fn rasterize(angles: Angles, view: &ViewState, fb: &mut FrameBuffers) -> usize {
    let (width, height) = (fb.width(), fb.height());
    let mut written = 0;

    for_each_sample(view, |face, p| {
        let Some(s) = project(rotate(angles, p), view, width, height) else {
            return;
        };
        if let Some(idx) = fb.index(s.x, s.y) {
            if fb.write_if_nearer(idx, s.ooz, FACE_CHAR, face.color()) {
                written += 1;
            }
        }
    });

    written
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_view(cube_width: f32) -> ViewState {
        ViewState {
            cube_width,
            h_offset: 0.0,
            v_offset: 0.0,
            ..ViewState::default()
        }
    }

    #[test]
    fn faces_pin_one_axis_to_the_extent() {
        let w = 3.0;
        assert_eq!(Face::Front.point(1.5, -2.5, w), Point3::new(1.0, -2.0, -3.0));
        assert_eq!(Face::Right.point(1.5, -2.5, w), Point3::new(3.0, -2.0, 1.0));
        assert_eq!(Face::Back.point(1.5, -2.5, w), Point3::new(-3.0, -2.0, -1.0));
        assert_eq!(Face::Left.point(1.5, -2.5, w), Point3::new(-1.0, -2.0, 3.0));
        assert_eq!(Face::Bottom.point(1.5, -2.5, w), Point3::new(1.0, -3.0, 2.0));
        assert_eq!(Face::Top.point(1.5, -2.5, w), Point3::new(1.0, 3.0, -2.0));
    }

    #[test]
    fn every_face_is_visited_with_the_same_grid() {
        let view = ViewState {
            step: 0.5,
            ..small_view(1.0)
        };
        let mut per_face = [0usize; 6];
        for_each_sample(&view, |face, _| {
            let i = Face::ALL.iter().position(|&f| f == face).unwrap();
            per_face[i] += 1;
        });
        // u, v in {-1, -0.5, 0, 0.5} => 16 samples per face.
        assert_eq!(per_face, [16; 6]);
    }

    #[test]
    fn non_positive_step_visits_nothing() {
        for step in [0.0, -0.6, f32::NAN] {
            let view = ViewState {
                step,
                ..small_view(2.0)
            };
            let mut n = 0;
            for_each_sample(&view, |_, _| n += 1);
            assert_eq!(n, 0);
        }
    }

    #[test]
    fn step_lost_in_float_spacing_still_terminates() {
        let view = ViewState {
            step: 1e-7,
            ..small_view(10.0)
        };
        let mut n = 0;
        for_each_sample(&view, |_, _| n += 1);
        // -10.0 + 1e-7 rounds back to -10.0: one sample per face, then stop.
        assert_eq!(n, 6);
    }

    #[test]
    fn rasterized_pixels_satisfy_buffer_invariant() {
        let mut fb = FrameBuffers::try_new(40, 20, ' ').unwrap();
        let view = small_view(6.0);
        let written = rasterize(Angles::new(0.3, 1.1, 0.2), &view, &mut fb);
        assert!(written > 0);

        for i in 0..fb.len() {
            if fb.depth()[i] > 0.0 {
                assert_eq!(fb.chars()[i], FACE_CHAR);
                assert!(!fb.colors()[i].is_none());
            } else {
                assert_eq!(fb.chars()[i], ' ');
                assert!(fb.colors()[i].is_none());
            }
        }
    }

    #[test]
    fn cube_behind_camera_draws_nothing() {
        let mut fb = FrameBuffers::try_new(20, 10, ' ').unwrap();
        let view = ViewState {
            distance: -100.0,
            ..small_view(5.0)
        };
        assert_eq!(rasterize(Angles::default(), &view, &mut fb), 0);
        assert!(fb.depth().iter().all(|&d| d == 0.0));
    }

    #[test]
    fn far_off_screen_offsets_draw_nothing() {
        let mut fb = FrameBuffers::try_new(20, 10, ' ').unwrap();
        let view = ViewState {
            v_offset: 1000.0,
            ..small_view(5.0)
        };
        assert_eq!(rasterize(Angles::default(), &view, &mut fb), 0);
    }
}
