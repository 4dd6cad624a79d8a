//! Error types for the `tui-life-core` crate.
//!
//! All fallible engine operations return [`UniverseError`] through the
//! standard [`Result`] type alias.

/// Errors surfaced by the Universe engine.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UniverseError {
    /// Construction was attempted with a zero-sized dimension.
    #[error("grid dimensions must be nonzero, got {width}x{height}")]
    InvalidDimensions {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// A cell coordinate does not exist on this grid.
    #[error("cell ({row}, {col}) is outside the {width}x{height} grid")]
    OutOfBounds {
        /// Requested row.
        row: u32,
        /// Requested column.
        col: u32,
        /// Grid width.
        width: u32,
        /// Grid height.
        height: u32,
    },
}
