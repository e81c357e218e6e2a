//! Parallel per-pixel buffers for one frame.
//!
//! Depth, character and color are three co-indexed vectors addressed by
//! `y * width + x`. They are allocated once and overwritten in place every
//! frame.

use crate::error::RenderError;
use crate::types::FaceColor;

#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffers {
    width: u16,
    height: u16,
    depth: Vec<f32>,
    chars: Vec<char>,
    colors: Vec<FaceColor>,
}

impl FrameBuffers {
    /// Allocate cleared buffers for a `width` x `height` grid.
    ///
    /// Allocation failure is reported instead of aborting. Buffers that were
    /// already reserved are dropped on the error path.
    pub fn try_new(width: u16, height: u16, background: char) -> Result<Self, RenderError> {
        let len = (width as usize)
            .checked_mul(height as usize)
            .filter(|&n| n > 0)
            .ok_or(RenderError::InvalidDimensions { width, height })?;

        let mut fb = Self {
            width,
            height,
            depth: Vec::new(),
            chars: Vec::new(),
            colors: Vec::new(),
        };
        let alloc = |source| RenderError::Allocation { len, source };
        fb.depth.try_reserve_exact(len).map_err(alloc)?;
        fb.chars.try_reserve_exact(len).map_err(alloc)?;
        fb.colors.try_reserve_exact(len).map_err(alloc)?;

        fb.depth.resize(len, 0.0);
        fb.chars.resize(len, background);
        fb.colors.resize(len, FaceColor::None);
        Ok(fb)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Number of pixels.
    pub fn len(&self) -> usize {
        self.depth.len()
    }

    pub fn is_empty(&self) -> bool {
        self.depth.is_empty()
    }

    pub fn depth(&self) -> &[f32] {
        &self.depth
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn colors(&self) -> &[FaceColor] {
        &self.colors
    }

    /// Reset every pixel to depth 0, `background`, no color.
    pub fn clear(&mut self, background: char) {
        self.depth.fill(0.0);
        self.chars.fill(background);
        self.colors.fill(FaceColor::None);
    }

    /// Flat index of a screen coordinate.
    ///
    /// Mirrors the rasterizer's addressing: the row-major offset is computed
    /// first and only the result is range-checked, so a column past the right
    /// edge wraps onto the next row.
    #[inline(always)]
    pub fn index(&self, x: i32, y: i32) -> Option<usize> {
        let idx = x as i64 + y as i64 * self.width as i64;
        if idx < 0 || idx >= self.len() as i64 {
            return None;
        }
        Some(idx as usize)
    }

    /// Depth-tested write. Returns `true` when the pixel was overwritten.
    ///
    /// Only a strictly nearer sample (larger inverse depth) replaces the stored
    /// one; ties keep the existing pixel.
    #[inline(always)]
    pub fn write_if_nearer(&mut self, idx: usize, ooz: f32, ch: char, color: FaceColor) -> bool {
        match self.depth.get(idx) {
            Some(&stored) if ooz > stored => {
                self.depth[idx] = ooz;
                self.chars[idx] = ch;
                self.colors[idx] = color;
                true
            }
            _ => false,
        }
    }

    /// Pixel at `(x, y)` if it is on screen.
    pub fn get(&self, x: u16, y: u16) -> Option<(f32, char, FaceColor)> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize) * (self.width as usize) + (x as usize);
        Some((self.depth[i], self.chars[i], self.colors[i]))
    }
}
