//! TUI Cube (workspace facade crate).
//!
//! This package exposes the `tui_cube::{core,engine,input,term,types}` public API while the
//! implementation lives in dedicated crates under `crates/`. The launcher's command-line
//! configuration lives in [`cli`].

pub mod cli;

pub use tui_cube_core as core;
pub use tui_cube_engine as engine;
pub use tui_cube_input as input;
pub use tui_cube_term as term;
pub use tui_cube_types as types;
