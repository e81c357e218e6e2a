//! Frame loop module.
//!
//! The controller owns the renderer for the whole run and performs exactly one
//! clear -> input -> rasterize -> serialize -> emit -> advance cycle per tick.
//! The pacer keeps ticks a fixed period apart. Everything runs on one thread.

pub mod controller;
pub mod pacer;

pub use tui_cube_core as core;
pub use tui_cube_input as input;
pub use tui_cube_term as term;
pub use tui_cube_types as types;

pub use controller::{run_loop, Controller};
pub use pacer::FramePacer;
