//! RNG module - deterministic pseudo-random generation
//!
//! A simple LCG so that a randomized universe is reproducible from its seed.
//! Determinism under a caller-supplied seed is part of the engine contract;
//! no ambient randomness is used anywhere in this crate.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate a value in the half-open unit interval [0, 1)
    pub fn next_unit(&mut self) -> f64 {
        // Top 24 bits give enough resolution for a fill-density check.
        f64::from(self.next_u32() >> 8) / f64::from(1u32 << 24)
    }
}
