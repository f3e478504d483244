//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct wraps a seedable `StdRng` from the `rand`
//! crate and exposes the handful of draws the genetic operators need. Every
//! draw is sequential, so two generators built from the same seed produce the
//! same generations.
//!
//! ## Example
//!
//! ```rust
//! use wayfinder::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(7);
//! let gene = rng.gen_gene();
//! assert!(gene < 6);
//! ```

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::genome::{Gene, GENE_ALPHABET_SIZE};

/// A wrapper around the `rand` crate's `StdRng` that provides the draws used
/// by the genome factory and the genetic operators.
#[derive(Debug, Clone)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws a gene uniformly from `[0, GENE_ALPHABET_SIZE)`.
    pub fn gen_gene(&mut self) -> Gene {
        self.rng.gen_range(0..GENE_ALPHABET_SIZE)
    }

    /// Draws an index uniformly from `[0, len)`.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero. Callers check for empty collections first.
    pub fn gen_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    /// Draws a count uniformly from the inclusive range `[0, max]`.
    pub fn gen_count_inclusive(&mut self, max: usize) -> usize {
        self.rng.gen_range(0..=max)
    }

    /// A fair coin flip.
    pub fn coin_flip(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
