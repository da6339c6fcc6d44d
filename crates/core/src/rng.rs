//! RNG module - deterministic randomness for tile spawning
//!
//! Spawning needs two random choices: which empty cell, and which value. Both
//! go through the small [`TileRng`] trait so tests can inject a fixed sequence
//! and games can be replayed from a seed.
//!
//! [`TileDistribution`] is the weighted value table. The classic game draws
//! uniformly from `[2, 2, 2, 4]`, i.e. P(2)=0.75 and P(4)=0.25.

use arrayvec::ArrayVec;

use crate::types::SPAWN_VALUES;

/// Maximum number of distinct values a distribution can hold.
pub const MAX_DISTRIBUTION_ENTRIES: usize = 16;

/// Source of uniform random integers.
pub trait TileRng {
    /// Random value in range [0, max). `max` is never 0.
    fn next_range(&mut self, max: u32) -> u32;
}

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
}

impl TileRng for SimpleRng {
    fn next_range(&mut self, max: u32) -> u32 {
        // The high bits of an LCG are far better distributed than the low ones.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Weighted distribution over tile values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileDistribution {
    /// (value, weight) pairs; weights are positive.
    entries: ArrayVec<(u32, u32), MAX_DISTRIBUTION_ENTRIES>,
    total: u32,
}

impl TileDistribution {
    /// Build from explicit (value, weight) pairs.
    ///
    /// Zero weights are dropped. Returns `None` if nothing with a positive
    /// weight remains or there are more than [`MAX_DISTRIBUTION_ENTRIES`]
    /// entries.
    pub fn weighted(pairs: &[(u32, u32)]) -> Option<Self> {
        let mut entries = ArrayVec::new();
        let mut total = 0u32;
        for &(value, weight) in pairs.iter().filter(|(_, w)| *w > 0) {
            entries.try_push((value, weight)).ok()?;
            total = total.checked_add(weight)?;
        }
        if entries.is_empty() {
            return None;
        }
        Some(Self { entries, total })
    }

    /// Build from a list of values where every entry is equally likely.
    ///
    /// Repeated values accumulate weight, so `[2, 2, 2, 4]` gives 2 a weight
    /// of 3 and 4 a weight of 1.
    pub fn from_values(values: &[u32]) -> Option<Self> {
        Self::weighted(&tally(values)?)
    }

    /// Probability of drawing `value`.
    pub fn probability(&self, value: u32) -> f64 {
        let weight: u32 = self
            .entries
            .iter()
            .filter(|(v, _)| *v == value)
            .map(|(_, w)| *w)
            .sum();
        weight as f64 / self.total as f64
    }

    /// Draw one value.
    pub fn sample<R: TileRng + ?Sized>(&self, rng: &mut R) -> u32 {
        let mut roll = rng.next_range(self.total);
        for &(value, weight) in &self.entries {
            if roll < weight {
                return value;
            }
            roll -= weight;
        }
        // Unreachable while roll < total; keep the last entry as a fallback.
        self.entries.last().map(|(v, _)| *v).unwrap_or(0)
    }
}

/// Count repeats: `[2, 2, 2, 4]` becomes `[(2, 3), (4, 1)]`.
///
/// `None` if there are more distinct values than a distribution holds.
fn tally(values: &[u32]) -> Option<ArrayVec<(u32, u32), MAX_DISTRIBUTION_ENTRIES>> {
    let mut pairs: ArrayVec<(u32, u32), MAX_DISTRIBUTION_ENTRIES> = ArrayVec::new();
    for &value in values {
        match pairs.iter_mut().find(|(v, _)| *v == value) {
            Some((_, weight)) => *weight += 1,
            None => pairs.try_push((value, 1)).ok()?,
        }
    }
    Some(pairs)
}

const _: () = assert!(SPAWN_VALUES.len() > 0 && SPAWN_VALUES.len() <= MAX_DISTRIBUTION_ENTRIES);

impl Default for TileDistribution {
    /// Uniform over [`SPAWN_VALUES`].
    fn default() -> Self {
        let entries = tally(&SPAWN_VALUES).unwrap_or_default();
        let total = entries.iter().map(|(_, w)| w).sum();
        Self { entries, total }
    }
}
