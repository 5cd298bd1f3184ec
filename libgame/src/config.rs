use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SeedConfig {
    /// The number of cell slots to seed. The grid side is the integer square root of this,
    /// any slots past the largest square are dropped.
    pub n_locations: usize,

    /// The share of seeded slots that start out alive, within [0, 1].
    pub live_fraction: f64,

    /// Seed for the placement shuffle. Without one the thread RNG is used.
    pub rng_seed: Option<u64>,

    /// Whether to compute each generation on the rayon pool.
    pub parallel: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            n_locations: 10_000,
            live_fraction: 0.8,
            rng_seed: None,
            parallel: false,
        }
    }
}

impl SeedConfig {
    pub fn validate(&self) -> Result<()> {
        validate_seed_params(self.n_locations, self.live_fraction)
    }
}

pub(crate) fn validate_seed_params(n_locations: usize, live_fraction: f64) -> Result<()> {
    if n_locations == 0 {
        return Err(GameError::InvalidLocationCount);
    }

    // NaN fails the range check too.
    if !(0.0..=1.0).contains(&live_fraction) {
        return Err(GameError::InvalidLiveFraction(live_fraction));
    }

    Ok(())
}
