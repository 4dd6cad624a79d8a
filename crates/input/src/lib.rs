//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`tui_life_types::LifeAction`] and provides a
//! toroidal cell cursor for keyboard-driven editing.

pub mod cursor;
pub mod map;

pub use tui_life_types as types;

pub use cursor::Cursor;
pub use map::{handle_key_event, should_quit};
