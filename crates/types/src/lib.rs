//! Shared types for the Life simulation
//! This crate contains pure data types with no external dependencies

/// Default grid dimensions used when the harness supplies none
pub const DEFAULT_WIDTH: u32 = 64;
pub const DEFAULT_HEIGHT: u32 = 32;

/// Frame pacing (in milliseconds)
pub const TICK_MS: u64 = 120;
pub const MIN_TICK_MS: u64 = 20;
pub const MAX_TICK_MS: u64 = 1000;
pub const TICK_STEP_MS: u64 = 20;

/// Probability that a cell starts alive in a randomized universe
pub const DEFAULT_FILL: f64 = 0.5;

/// State of a single grid cell.
///
/// The `u8` discriminants are a public contract: the engine exposes its
/// storage as a contiguous slice of these, and external readers may treat
/// the slice as raw bytes with `Dead == 0`.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Dead = 0,
    Alive = 1,
}

impl Cell {
    /// Flip the cell in place.
    pub fn toggle(&mut self) {
        *self = match *self {
            Cell::Dead => Cell::Alive,
            Cell::Alive => Cell::Dead,
        };
    }

    pub fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }
}

/// Harness-level actions driving the simulation loop.
///
/// Quitting is handled separately by the input layer so that Ctrl-C works
/// even while an action key is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeAction {
    TogglePause,
    Step,
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    ToggleCell,
    Randomize,
    Clear,
    SpeedUp,
    SlowDown,
}
