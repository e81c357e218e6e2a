//! Terminal input module (engine-facing).
//!
//! This module maps `crossterm` key events into [`crate::types::ViewAction`]
//! and drains pending key presses once per tick without ever blocking the
//! render path.

pub mod map;
pub mod source;

pub use tui_cube_types as types;

pub use map::{handle_key_event, should_quit};
pub use source::{drain_actions, ActionBatch, CrosstermKeys, KeySource, MAX_ACTIONS_PER_TICK};
