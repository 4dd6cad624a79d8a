//! Terminal rendering harness for the Life engine.
//!
//! This crate renders the engine's exposed cell buffer into a framebuffer
//! and flushes it to a terminal. The view layer is pure and unit-testable;
//! all terminal I/O is confined to [`renderer`].
//!
//! Goals:
//! - Keep `core` deterministic and free of UI concerns
//! - Read the engine's buffer in place (no per-frame grid copies)
//! - Make the drawing layout and pointer hit-testing share one source of truth

pub mod fb;
pub mod renderer;
pub mod view;

pub use tui_life_core as core;
pub use tui_life_types as types;

pub use fb::{CellStyle, FrameBuffer, Rgb, TermCell};
pub use renderer::{encode_changed_rows_into, encode_full_into, TerminalRenderer};
pub use view::{GridLayout, HudState, LifeView, Viewport};
