//! Frame serializer: turns the renderer's buffers into one escape-sequence blob.
//!
//! This module is pure (no I/O). The output is built in a caller-owned `Vec`
//! so the frame loop can reuse one allocation for the whole run.

use std::io::Write;

use anyhow::Result;

use crate::core::{FrameBuffers, Renderer};
use crate::types::{FaceColor, ViewState};

/// Move the cursor to the top-left cell.
pub const CURSOR_HOME: &[u8] = b"\x1b[H";

/// Reset all SGR attributes.
pub const RESET: &[u8] = b"\x1b[0m";

/// Bright white, used for the status line.
pub const STATUS_COLOR: &[u8] = b"\x1b[97m";

/// Row separator. Raw mode disables output post-processing, so a bare LF
/// would not return the carriage.
pub const LINE_BREAK: &[u8] = b"\r\n";

/// Escape sequence selecting `color`, empty for [`FaceColor::None`].
pub const fn color_escape(color: FaceColor) -> &'static [u8] {
    match color {
        FaceColor::None => b"",
        FaceColor::Red => b"\x1b[91m",
        FaceColor::Green => b"\x1b[92m",
        FaceColor::Yellow => b"\x1b[93m",
        FaceColor::Blue => b"\x1b[94m",
        FaceColor::Magenta => b"\x1b[95m",
        FaceColor::Cyan => b"\x1b[96m",
    }
}

/// Upper bound on the encoded size of a `width` x `height` frame.
///
/// Every pixel colored with a 4-byte UTF-8 glyph, plus line breaks, the
/// trailer, and room for a long status line.
pub fn frame_capacity(width: u16, height: u16) -> usize {
    let pixels = width as usize * height as usize;
    let per_pixel = 5 + 4 + RESET.len();
    CURSOR_HOME.len() * 2
        + pixels * per_pixel
        + (height as usize).saturating_sub(1) * LINE_BREAK.len()
        + RESET.len()
        + STATUS_COLOR.len()
        + 128
        + RESET.len()
}

/// Encode the renderer's current frame into `out` (appending).
pub fn encode_frame_into(renderer: &Renderer, out: &mut Vec<u8>) -> Result<()> {
    encode_buffers_into(renderer.buffers(), renderer.view(), out)
}

/// Encode the renderer's current frame into a fresh buffer.
pub fn serialize(renderer: &Renderer) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(frame_capacity(renderer.width(), renderer.height()));
    encode_frame_into(renderer, &mut out)?;
    Ok(out)
}

/// Encode `fb` plus the status line for `view` into `out` (appending).
///
/// Uncolored pixels are written bare; colored pixels are wrapped in their
/// color escape and a reset.
pub fn encode_buffers_into(fb: &FrameBuffers, view: &ViewState, out: &mut Vec<u8>) -> Result<()> {
    let width = fb.width() as usize;
    let mut utf8 = [0u8; 4];

    out.extend_from_slice(CURSOR_HOME);
    for (k, (&ch, &color)) in fb.chars().iter().zip(fb.colors()).enumerate() {
        if k > 0 && k % width == 0 {
            out.extend_from_slice(LINE_BREAK);
        }
        let glyph = ch.encode_utf8(&mut utf8).as_bytes();
        if color.is_none() {
            out.extend_from_slice(glyph);
        } else {
            out.extend_from_slice(color_escape(color));
            out.extend_from_slice(glyph);
            out.extend_from_slice(RESET);
        }
    }

    out.extend_from_slice(RESET);
    out.extend_from_slice(CURSOR_HOME);
    out.extend_from_slice(STATUS_COLOR);
    write!(
        out,
        "H={:.1}:V={:.1}:W={:.1}",
        view.h_offset, view.v_offset, view.cube_width
    )?;
    out.extend_from_slice(RESET);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RenderConfig;

    fn renderer(width: u16, height: u16) -> Renderer {
        Renderer::new(&RenderConfig {
            width,
            height,
            ..RenderConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn cleared_frame_is_byte_exact() {
        let r = renderer(3, 2);
        let out = serialize(&r).unwrap();
        let expected = b"\x1b[H   \r\n   \x1b[0m\x1b[H\x1b[97mH=0.0:V=0.0:W=20.0\x1b[0m";
        assert_eq!(out, expected.to_vec());
    }

    #[test]
    fn colored_pixels_are_wrapped_in_escape_and_reset() {
        let mut fb = FrameBuffers::try_new(2, 1, '.').unwrap();
        fb.write_if_nearer(1, 0.5, '#', FaceColor::Blue);
        let mut out = Vec::new();
        encode_buffers_into(&fb, &ViewState::default(), &mut out).unwrap();
        assert!(out.starts_with(b"\x1b[H.\x1b[94m#\x1b[0m\x1b[0m\x1b[H"));
    }

    #[test]
    fn status_line_uses_one_decimal() {
        let mut fb = FrameBuffers::try_new(1, 1, ' ').unwrap();
        fb.clear(' ');
        let view = ViewState {
            h_offset: -12.5,
            v_offset: 3.0,
            cube_width: 7.0,
            ..ViewState::default()
        };
        let mut out = Vec::new();
        encode_buffers_into(&fb, &view, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("\x1b[97mH=-12.5:V=3.0:W=7.0\x1b[0m"), "{text:?}");
    }

    #[test]
    fn non_ascii_background_is_utf8_encoded() {
        let r = Renderer::new(&RenderConfig {
            width: 2,
            height: 1,
            background: '·',
            ..RenderConfig::default()
        })
        .unwrap();
        let text = String::from_utf8(serialize(&r).unwrap()).unwrap();
        assert!(text.starts_with("\x1b[H··\x1b[0m"));
    }

    #[test]
    fn capacity_covers_a_fully_colored_frame() {
        let mut fb = FrameBuffers::try_new(16, 8, ' ').unwrap();
        for i in 0..fb.len() {
            fb.write_if_nearer(i, 1.0, '#', FaceColor::Magenta);
        }
        let mut out = Vec::new();
        encode_buffers_into(&fb, &ViewState::default(), &mut out).unwrap();
        assert!(out.len() <= frame_capacity(16, 8));
    }
}
