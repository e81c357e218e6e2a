//! Terminal output module.
//!
//! The frame serializer turns the renderer's parallel buffers into a single
//! ANSI escape-sequence blob, and the terminal renderer owns the raw-mode
//! session that blob is written into.
//!
//! Goals:
//! - Keep serialization pure so frames can be compared byte for byte in tests
//! - One write per frame, no partial frames on screen
//! - Restore the terminal on every exit path

pub mod renderer;
pub mod serializer;

pub use tui_cube_core as core;
pub use tui_cube_types as types;

pub use renderer::{
    encode_enter_into, encode_exit_into, install_panic_hook, restore_terminal, TerminalRenderer,
    DEFAULT_FOREGROUND,
};
pub use serializer::{
    color_escape, encode_buffers_into, encode_frame_into, frame_capacity, serialize, CURSOR_HOME,
    LINE_BREAK, RESET, STATUS_COLOR,
};
