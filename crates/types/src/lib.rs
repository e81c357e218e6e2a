//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the renderer.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (rasterizer, serializer, input mapping, frame loop).
//!
//! # Screen Dimensions
//!
//! The default character grid is 160 columns by 44 rows. Terminal cells are
//! roughly twice as tall as they are wide, so the projector doubles the
//! horizontal extent of every point to keep the cube square on screen.
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_CUBE_WIDTH` | 20.0 | Cube half-extent in model units |
//! | `DEFAULT_DISTANCE` | 100.0 | Camera distance added to rotated z |
//! | `DEFAULT_K1` | 40.0 | Perspective scale constant |
//! | `DEFAULT_INCREMENT` | 0.6 | Face sample grid step |
//! | `MIN_CUBE_WIDTH` | 5.0 | Lower clamp for the half-extent |
//! | `MAX_CUBE_WIDTH` | 50.0 | Upper clamp for the half-extent |
//! | `TICK_MS` | 16 | Fixed frame period (~60 FPS) |
//!
//! # Animation
//!
//! Every frame advances the Euler angles by a fixed increment:
//!
//! - `A` (x axis): +0.05 rad
//! - `B` (y axis): +0.05 rad
//! - `C` (z axis): +0.01 rad
//!
//! The angles grow without wraparound; the rotation recomputes its trig terms
//! from the base angles on every call, so nothing drifts.
//!
//! # Examples
//!
//! ```
//! use tui_cube_types::{Angles, RenderConfig, ViewAction, MAX_CUBE_WIDTH};
//!
//! let mut angles = Angles::default();
//! angles.advance();
//! assert_eq!(angles.c, 0.01);
//!
//! let mut view = RenderConfig::default().view_state();
//! for _ in 0..100 {
//!     view.apply(ViewAction::GrowCube);
//! }
//! assert_eq!(view.cube_width, MAX_CUBE_WIDTH);
//! ```

/// Default screen width in character columns
pub const DEFAULT_WIDTH: u16 = 160;

/// Default screen height in character rows
pub const DEFAULT_HEIGHT: u16 = 44;

/// Default cube half-extent
pub const DEFAULT_CUBE_WIDTH: f32 = 20.0;

/// Default distance between camera and cube center
pub const DEFAULT_DISTANCE: f32 = 100.0;

/// Default perspective scale constant
pub const DEFAULT_K1: f32 = 40.0;

/// Default step of the face sample grid
pub const DEFAULT_INCREMENT: f32 = 0.6;

/// Smallest cube half-extent reachable from the keyboard
pub const MIN_CUBE_WIDTH: f32 = 5.0;

/// Largest cube half-extent reachable from the keyboard
pub const MAX_CUBE_WIDTH: f32 = 50.0;

/// Cube half-extent used by the launcher at startup
pub const LAUNCH_CUBE_WIDTH: f32 = 10.0;

/// Camera-space z at or below which a sample is dropped
pub const CAMERA_EPSILON: f32 = 0.001;

/// Fixed frame period in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Per-frame increment of angle A
pub const ANGLE_STEP_A: f32 = 0.05;

/// Per-frame increment of angle B
pub const ANGLE_STEP_B: f32 = 0.05;

/// Per-frame increment of angle C
pub const ANGLE_STEP_C: f32 = 0.01;

/// Horizontal offset change per `h`/`l` key press
pub const HORIZONTAL_STEP: f32 = 5.0;

/// Vertical offset change per `k`/`j` key press
pub const VERTICAL_STEP: f32 = 1.0;

/// Cube half-extent change per `+`/`-` key press
pub const CUBE_WIDTH_STEP: f32 = 1.0;

/// Character written for every cube face sample
pub const FACE_CHAR: char = '#';


/// Euler rotation angles in radians, one per axis
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Angles {
    /// Rotation about the x axis
    pub a: f32,
    /// Rotation about the y axis
    pub b: f32,
    /// Rotation about the z axis
    pub c: f32,
}

impl Angles {
    pub const fn new(a: f32, b: f32, c: f32) -> Self {
        Self { a, b, c }
    }

    /// Advance one animation frame.
    pub fn advance(&mut self) {
        self.a += ANGLE_STEP_A;
        self.b += ANGLE_STEP_B;
        self.c += ANGLE_STEP_C;
    }
}

/// A point in model or camera space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// A projected sample: integer pixel coordinate plus inverse depth.
///
/// Coordinates are not bounds-checked; the rasterizer decides whether the
/// sample lands inside the buffers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenSample {
    pub x: i32,
    pub y: i32,
    /// One over camera-space z. Larger is nearer.
    pub ooz: f32,
}

/// Color tag stored per pixel.
///
/// `None` is a regular value meaning "emit no color escape"; cleared pixels
/// carry it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FaceColor {
    #[default]
    None,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
}

impl FaceColor {
    pub const fn is_none(self) -> bool {
        matches!(self, FaceColor::None)
    }
}

/// View actions produced by the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewAction {
    Quit,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    GrowCube,
    ShrinkCube,
}

/// Camera and placement parameters read by the rasterizer.
///
/// Only input handling mutates a `ViewState`; rasterization treats it as
/// read-only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    /// Cube half-extent, kept in `[min_cube_width, max_cube_width]`
    pub cube_width: f32,
    pub distance: f32,
    pub k1: f32,
    /// Face sample grid step
    pub step: f32,
    pub h_offset: f32,
    pub v_offset: f32,
    pub min_cube_width: f32,
    pub max_cube_width: f32,
}

impl Default for ViewState {
    fn default() -> Self {
        RenderConfig::default().view_state()
    }
}

impl ViewState {
    /// Apply a keyboard action. `Quit` is a no-op here; the controller owns
    /// the stop flag.
    pub fn apply(&mut self, action: ViewAction) {
        match action {
            ViewAction::Quit => {}
            ViewAction::MoveLeft => self.h_offset -= HORIZONTAL_STEP,
            ViewAction::MoveRight => self.h_offset += HORIZONTAL_STEP,
            ViewAction::MoveUp => self.v_offset -= VERTICAL_STEP,
            ViewAction::MoveDown => self.v_offset += VERTICAL_STEP,
            ViewAction::GrowCube => {
                self.cube_width = (self.cube_width + CUBE_WIDTH_STEP).min(self.max_cube_width);
            }
            ViewAction::ShrinkCube => {
                self.cube_width = (self.cube_width - CUBE_WIDTH_STEP).max(self.min_cube_width);
            }
        }
    }
}

/// Renderer construction parameters.
///
/// Defaults match the library defaults; the launcher overrides cube width and
/// horizontal offset before the loop starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    pub width: u16,
    pub height: u16,
    pub cube_width: f32,
    pub distance: f32,
    pub k1: f32,
    pub step: f32,
    pub background: char,
    pub h_offset: f32,
    pub v_offset: f32,
    pub min_cube_width: f32,
    pub max_cube_width: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cube_width: DEFAULT_CUBE_WIDTH,
            distance: DEFAULT_DISTANCE,
            k1: DEFAULT_K1,
            step: DEFAULT_INCREMENT,
            background: ' ',
            h_offset: 0.0,
            v_offset: 0.0,
            min_cube_width: MIN_CUBE_WIDTH,
            max_cube_width: MAX_CUBE_WIDTH,
        }
    }
}

impl RenderConfig {
    /// Initial view state described by this configuration.
    pub fn view_state(&self) -> ViewState {
        ViewState {
            cube_width: self.cube_width,
            distance: self.distance,
            k1: self.k1,
            step: self.step,
            h_offset: self.h_offset,
            v_offset: self.v_offset,
            min_cube_width: self.min_cube_width,
            max_cube_width: self.max_cube_width,
        }
    }
}
