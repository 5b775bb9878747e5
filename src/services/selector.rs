//! Uniform random selection over the catalog.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::errors::{CoreError, CoreResult};

/// Seeded pseudo-random source for picking catalog indices.
///
/// Selection is memoryless: every call advances the generator state and
/// immediate repeats are neither suppressed nor guaranteed. Reseeding
/// mid-run is not supported.
#[derive(Debug)]
pub struct Selector {
    rng: StdRng,
}

impl Selector {
    /// Entropy-seeded, so successive process runs diverge.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Fixed seed, for reproducible selection sequences.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniformly distributed index in `[0, population)`.
    pub fn next(&mut self, population: usize) -> CoreResult<usize> {
        if population == 0 {
            return Err(CoreError::EmptyPopulation);
        }
        Ok(self.rng.gen_range(0..population))
    }
}
