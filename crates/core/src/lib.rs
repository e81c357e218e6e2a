//! Core rasterization module - pure, deterministic, and testable
//!
//! This module contains the software rasterization pipeline that turns the
//! rotating cube into per-pixel state. It has **zero dependencies** on the
//! terminal, input, or I/O, making it:
//!
//! - **Deterministic**: Same angles and view produce identical buffers
//! - **Testable**: Every stage is a plain function over plain data
//! - **Fast**: The per-frame path never allocates
//!
//! # Module Structure
//!
//! - [`transform`]: Euler rotation of model-space points
//! - [`projection`]: Perspective projection to integer pixel + inverse depth
//! - [`buffers`]: Parallel depth/character/color buffers with depth-tested writes
//! - [`raster`]: Face sampling and the depth-tested rasterization loop
//! - [`renderer`]: The aggregate owning angles, view, and buffers
//!
//! # Pipeline
//!
//! ```text
//! face grid sample -> rotate -> project -> index -> depth test -> buffers
//! ```
//!
//! # Example
//!
//! ```
//! use tui_cube_core::Renderer;
//! use tui_cube_types::RenderConfig;
//!
//! let mut renderer = Renderer::new(&RenderConfig::default()).unwrap();
//! renderer.clear();
//! assert!(renderer.rasterize() > 0);
//! renderer.advance();
//! ```

pub mod buffers;
pub mod error;
pub mod projection;
pub mod raster;
pub mod renderer;
pub mod transform;

pub use tui_cube_types as types;

// Re-export commonly used types for convenience
pub use buffers::FrameBuffers;
pub use error::RenderError;
pub use projection::project;
pub use raster::{for_each_sample, rasterize, Face};
pub use renderer::Renderer;
pub use transform::rotate;
