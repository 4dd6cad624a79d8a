//! Seed patterns - classic starting configurations
//!
//! Coordinates are (row, col) relative to the pattern's own top-left corner.
//! Stamping wraps toroidally, so any offset on any grid is valid.

use crate::error::UniverseError;
use crate::universe::Universe;

/// A named starting configuration.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(u32, u32)],
}

impl Pattern {
    /// Place the pattern onto a universe at the given offset.
    ///
    /// Offsets wrap modulo the grid dimensions, mirroring the engine's
    /// neighbor topology. Cells already alive stay alive.
    pub fn stamp(
        &self,
        universe: &mut Universe,
        row_offset: u32,
        col_offset: u32,
    ) -> Result<(), UniverseError> {
        let height = universe.height();
        let width = universe.width();
        let wrapped: Vec<(u32, u32)> = self
            .cells
            .iter()
            .map(|&(row, col)| {
                (
                    (row % height + row_offset % height) % height,
                    (col % width + col_offset % width) % width,
                )
            })
            .collect();
        universe.set_cells_alive(&wrapped)
    }
}

pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
};

pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 0), (0, 1), (0, 2)],
};

pub const TOAD: Pattern = Pattern {
    name: "Toad",
    cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
};

pub const BEACON: Pattern = Pattern {
    name: "Beacon",
    cells: &[
        (0, 0),
        (0, 1),
        (1, 0),
        (1, 1),
        (2, 2),
        (2, 3),
        (3, 2),
        (3, 3),
    ],
};

pub const R_PENTOMINO: Pattern = Pattern {
    name: "R-pentomino",
    cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
};

/// Every built-in pattern, for pattern-cycling UIs.
pub const PATTERNS: &[&Pattern] = &[&GLIDER, &BLINKER, &TOAD, &BEACON, &R_PENTOMINO];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stamp_places_all_cells() {
        let mut universe = Universe::new(10, 10).unwrap();
        GLIDER.stamp(&mut universe, 2, 3).unwrap();
        assert_eq!(universe.live_count(), GLIDER.cells.len());
    }

    #[test]
    fn test_stamp_wraps_at_edges() {
        let mut universe = Universe::new(5, 5).unwrap();
        // Offset pushes the glider across the bottom-right corner.
        GLIDER.stamp(&mut universe, 4, 4).unwrap();
        assert_eq!(universe.live_count(), GLIDER.cells.len());
        // (2, 2) relative lands at (1, 1) after wrapping.
        assert!(universe.get(1, 1).unwrap().is_alive());
    }

    #[test]
    fn test_blinker_oscillates_via_stamp() {
        let mut universe = Universe::new(5, 5).unwrap();
        BLINKER.stamp(&mut universe, 1, 1).unwrap();
        let start = universe.cells().to_vec();
        universe.tick();
        assert_ne!(universe.cells(), start.as_slice());
        universe.tick();
        assert_eq!(universe.cells(), start.as_slice());
    }

    #[test]
    fn test_all_patterns_have_cells() {
        for pattern in PATTERNS {
            assert!(!pattern.cells.is_empty(), "{} is empty", pattern.name);
        }
    }
}
