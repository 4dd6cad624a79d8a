//! Core simulation module - pure, deterministic, and testable
//!
//! This crate contains the cellular automaton engine and nothing else.
//! It has **zero dependencies** on UI, terminal, or I/O, making it:
//!
//! - **Deterministic**: same seed produces identical universes
//! - **Testable**: every rule and edge case is unit-tested
//! - **Portable**: can run headless, under a terminal harness, or in a bench
//! - **Fast**: the tick is allocation-free after construction
//!
//! # Module Structure
//!
//! - [`universe`]: toroidal grid storage, the Conway tick rule, toggle
//!   mutation, and the zero-copy cell buffer exposure
//! - [`patterns`]: classic named seed patterns (glider, blinker, ...)
//! - [`rng`]: seeded LCG for reproducible random fills
//! - [`error`]: typed engine errors
//!
//! # Example
//!
//! ```
//! use tui_life_core::Universe;
//!
//! let mut universe = Universe::randomized(64, 32, 12345).unwrap();
//! universe.tick();
//! universe.toggle(3, 7).unwrap();
//!
//! // Renderers read the grid in place, one byte per cell.
//! assert_eq!(universe.cells().len(), 64 * 32);
//! ```

pub mod error;
pub mod patterns;
pub mod rng;
pub mod universe;

pub use tui_life_types as types;

// Re-export commonly used types for convenience
pub use error::UniverseError;
pub use patterns::{Pattern, PATTERNS};
pub use rng::SimpleRng;
pub use universe::Universe;
