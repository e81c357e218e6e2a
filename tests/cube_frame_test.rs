//! End-to-end rasterization tests.
//!
//! Rasterized buffers are checked against an independent reference pass that
//! walks the same face samples through `rotate` and `project` and keeps the
//! nearest sample per pixel.

use tui_cube::core::{for_each_sample, project, rotate, Renderer};
use tui_cube::term::serialize;
use tui_cube::types::{Angles, FaceColor, RenderConfig, FACE_CHAR};

fn renderer(config: RenderConfig) -> Renderer {
    Renderer::new(&config).unwrap()
}

/// Nearest (ooz, color) per pixel; the first face to reach a depth wins ties.
fn reference(r: &Renderer) -> Vec<Option<(f32, FaceColor)>> {
    let (w, h) = (r.width() as i64, r.height() as i64);
    let mut best: Vec<Option<(f32, FaceColor)>> = vec![None; (w * h) as usize];

    for_each_sample(r.view(), |face, p| {
        let Some(s) = project(rotate(r.angles(), p), r.view(), r.width(), r.height()) else {
            return;
        };
        let idx = s.x as i64 + s.y as i64 * w;
        if idx < 0 || idx >= w * h {
            return;
        }
        let nearer = match best[idx as usize] {
            Some((ooz, _)) => s.ooz > ooz,
            None => true,
        };
        if nearer {
            best[idx as usize] = Some((s.ooz, face.color()));
        }
    });

    best
}

#[test]
fn four_by_four_cube_fills_the_center_block() {
    let mut r = renderer(RenderConfig {
        width: 4,
        height: 4,
        cube_width: 1.0,
        min_cube_width: 1.0,
        h_offset: 0.0,
        v_offset: 0.0,
        ..RenderConfig::default()
    });
    r.clear();
    r.rasterize();

    let fb = r.buffers();
    for i in 0..16 {
        if [5, 6, 9, 10].contains(&i) {
            // Front face at z = -1 is nearest: camera-space z = 99.
            assert_eq!(fb.depth()[i], 1.0 / 99.0, "pixel {i}");
            assert_eq!(fb.chars()[i], FACE_CHAR);
            assert_eq!(fb.colors()[i], FaceColor::Red);
        } else {
            assert_eq!(fb.depth()[i], 0.0, "pixel {i}");
            assert_eq!(fb.chars()[i], ' ');
            assert_eq!(fb.colors()[i], FaceColor::None);
        }
    }

    let red = "\x1b[91m#\x1b[0m";
    let expected = format!(
        "\x1b[H    \r\n {red}{red} \r\n {red}{red} \r\n    \x1b[0m\x1b[H\x1b[97mH=0.0:V=0.0:W=1.0\x1b[0m"
    );
    assert_eq!(String::from_utf8(serialize(&r).unwrap()).unwrap(), expected);
}

#[test]
fn four_by_four_cube_matches_reference_pass() {
    let mut r = renderer(RenderConfig {
        width: 4,
        height: 4,
        cube_width: 1.0,
        min_cube_width: 1.0,
        h_offset: 0.0,
        ..RenderConfig::default()
    });
    r.clear();
    r.rasterize();

    let fb = r.buffers();
    for (i, expected) in reference(&r).into_iter().enumerate() {
        match expected {
            Some((ooz, color)) => {
                assert_eq!(fb.depth()[i], ooz);
                assert_eq!(fb.colors()[i], color);
            }
            None => assert_eq!(fb.depth()[i], 0.0),
        }
    }
}

#[test]
fn depth_buffer_holds_nearest_sample_at_every_angle() {
    let mut r = renderer(RenderConfig {
        width: 80,
        height: 40,
        cube_width: 12.0,
        h_offset: 0.0,
        ..RenderConfig::default()
    });

    for n in 0..12 {
        let t = n as f32 * 0.41;
        r.set_angles(Angles::new(t, t * 0.7 + 0.2, t * 0.3));
        r.clear();
        r.rasterize();

        let fb = r.buffers();
        for (i, expected) in reference(&r).into_iter().enumerate() {
            match expected {
                Some((ooz, color)) => {
                    assert_eq!(fb.depth()[i], ooz, "angle step {n} pixel {i}");
                    assert_eq!(fb.colors()[i], color, "angle step {n} pixel {i}");
                    assert_eq!(fb.chars()[i], FACE_CHAR);
                }
                None => {
                    assert_eq!(fb.depth()[i], 0.0);
                    assert_eq!(fb.colors()[i], FaceColor::None);
                }
            }
        }
    }
}

#[test]
fn rasterizing_is_deterministic() {
    let config = RenderConfig {
        width: 60,
        height: 30,
        ..RenderConfig::default()
    };
    let mut a = renderer(config);
    let mut b = renderer(config);
    for _ in 0..5 {
        a.advance();
        b.advance();
    }
    a.clear();
    a.rasterize();
    b.clear();
    b.rasterize();
    assert_eq!(serialize(&a).unwrap(), serialize(&b).unwrap());
}

#[test]
fn offsets_move_the_silhouette() {
    let base = RenderConfig {
        width: 60,
        height: 30,
        cube_width: 6.0,
        h_offset: 0.0,
        ..RenderConfig::default()
    };
    let mut centered = renderer(base);
    let mut shifted = renderer(RenderConfig {
        h_offset: 10.0,
        ..base
    });
    centered.clear();
    centered.rasterize();
    shifted.clear();
    shifted.rasterize();

    let first_lit = |r: &Renderer| r.buffers().depth().iter().position(|&d| d > 0.0).unwrap();
    assert_eq!(first_lit(&shifted), first_lit(&centered) + 10);
}
