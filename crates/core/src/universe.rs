//! Universe module - the cellular automaton engine
//!
//! A fixed-size toroidal grid of binary cells advanced by the classic
//! Conway rule. Storage is a flat row-major array (index = row * width + col)
//! for cache locality and so the whole grid can be exposed to a renderer as
//! one contiguous slice without copying.
//!
//! The tick is double-buffered: next states are written into a scratch
//! buffer owned by the engine and swapped in at the end, so every cell's
//! next state is computed against the previous generation only.

use std::fmt;

use crate::error::UniverseError;
use crate::rng::SimpleRng;
use tui_life_types::{Cell, DEFAULT_FILL, DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// The simulation grid and its update rule.
///
/// Dimensions are fixed at construction; resizing is not supported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Universe {
    width: u32,
    height: u32,
    /// Current generation, row-major.
    cells: Vec<Cell>,
    /// Reused across ticks to keep the update allocation-free.
    scratch: Vec<Cell>,
    generation: u64,
}

impl Universe {
    /// Create a universe with every cell dead.
    ///
    /// Fails if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self, UniverseError> {
        let len = Self::checked_len(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; len],
            scratch: vec![Cell::Dead; len],
            generation: 0,
        })
    }

    /// Create a universe with a deterministic pseudo-random fill.
    ///
    /// Each cell starts alive with probability [`DEFAULT_FILL`], drawn from
    /// the crate's seeded LCG. Two calls with the same dimensions and seed
    /// produce identical grids.
    pub fn randomized(width: u32, height: u32, seed: u32) -> Result<Self, UniverseError> {
        let mut universe = Self::new(width, height)?;
        let mut rng = SimpleRng::new(seed);
        for cell in &mut universe.cells {
            if rng.next_unit() < DEFAULT_FILL {
                *cell = Cell::Alive;
            }
        }
        Ok(universe)
    }

    /// Create a dead universe with the compiled-in default dimensions.
    pub fn with_default_size() -> Self {
        let len = (DEFAULT_WIDTH as usize) * (DEFAULT_HEIGHT as usize);
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cells: vec![Cell::Dead; len],
            scratch: vec![Cell::Dead; len],
            generation: 0,
        }
    }

    fn checked_len(width: u32, height: u32) -> Result<usize, UniverseError> {
        if width == 0 || height == 0 {
            return Err(UniverseError::InvalidDimensions { width, height });
        }
        Ok((width as usize) * (height as usize))
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(&self, row: u32, col: u32) -> usize {
        (row as usize) * (self.width as usize) + (col as usize)
    }

    fn check_bounds(&self, row: u32, col: u32) -> Result<(), UniverseError> {
        if row >= self.height || col >= self.width {
            return Err(UniverseError::OutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Get width of the grid
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get height of the grid
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of ticks applied since construction (or the last [`clear`]).
    ///
    /// [`clear`]: Universe::clear
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Read-only view over the live grid storage.
    ///
    /// This is the zero-copy exposure contract: the slice borrows the
    /// engine's internal buffer directly, row-major, one `#[repr(u8)]` cell
    /// per byte with `Dead == 0`. It is valid until the next `&mut self`
    /// call; the borrow checker enforces that no reader holds it across a
    /// `tick` or `toggle`.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Get cell at (row, col), or `None` if out of bounds.
    pub fn get(&self, row: u32, col: u32) -> Option<Cell> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.cells[self.index(row, col)])
    }

    /// Count of live cells in the current generation.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Count live cells among the eight toroidal neighbors of (row, col).
    ///
    /// Row/column arithmetic wraps modulo the grid dimensions; the grid has
    /// no edges.
    fn live_neighbor_count(&self, row: u32, col: u32) -> u8 {
        let mut count = 0;
        for delta_row in [self.height - 1, 0, 1] {
            for delta_col in [self.width - 1, 0, 1] {
                if delta_row == 0 && delta_col == 0 {
                    continue;
                }
                let neighbor_row = (row + delta_row) % self.height;
                let neighbor_col = (col + delta_col) % self.width;
                count += self.cells[self.index(neighbor_row, neighbor_col)] as u8;
            }
        }
        count
    }

    /// Advance the simulation by exactly one generation.
    ///
    /// Standard Conway rule: a live cell survives with 2 or 3 live
    /// neighbors, a dead cell is born with exactly 3, everything else dies
    /// or stays dead. All next states are computed from the previous
    /// generation; the stored grid is replaced in one swap at the end.
    pub fn tick(&mut self) {
        let mut next = std::mem::take(&mut self.scratch);

        for row in 0..self.height {
            for col in 0..self.width {
                let idx = self.index(row, col);
                let live_neighbors = self.live_neighbor_count(row, col);

                next[idx] = match (self.cells[idx], live_neighbors) {
                    (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive,
                    (Cell::Dead, 3) => Cell::Alive,
                    _ => Cell::Dead,
                };
            }
        }

        // The previous generation becomes next tick's scratch buffer.
        self.scratch = std::mem::replace(&mut self.cells, next);
        self.generation += 1;
    }

    /// Flip a single cell without advancing the generation.
    ///
    /// On failure the grid is unchanged.
    pub fn toggle(&mut self, row: u32, col: u32) -> Result<(), UniverseError> {
        self.check_bounds(row, col)?;
        let idx = self.index(row, col);
        self.cells[idx].toggle();
        Ok(())
    }

    /// Set a batch of cells alive.
    ///
    /// All coordinates are validated before any cell is mutated, so a
    /// failed call leaves the grid untouched.
    pub fn set_cells_alive(&mut self, cells: &[(u32, u32)]) -> Result<(), UniverseError> {
        for &(row, col) in cells {
            self.check_bounds(row, col)?;
        }
        for &(row, col) in cells {
            let idx = self.index(row, col);
            self.cells[idx] = Cell::Alive;
        }
        Ok(())
    }

    /// Kill every cell and reset the generation counter.
    ///
    /// Keeps the existing allocations.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
        self.generation = 0;
    }
}

impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.cells.chunks(self.width as usize) {
            for &cell in line {
                let symbol = if cell.is_alive() { '#' } else { '.' };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
