//! Synthetic submission counts for demo and test data.
//!
//! Nothing real is ever submitted; these numbers only make the dashboard and
//! analytics views look populated. The generator is seedable so tests can
//! pin the draws.

use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Submissions given to stored forms that predate the counter.
pub const LEGACY_SUBMISSIONS: RangeInclusive<u32> = 10..=39;
/// Submissions added by one "generate test submissions" action.
pub const TEST_BATCH: RangeInclusive<u32> = 5..=14;

#[derive(Debug, Clone)]
pub struct DemoData {
    rng: StdRng,
}

impl DemoData {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }

    pub fn legacy_submissions(&mut self) -> u32 {
        self.rng.gen_range(LEGACY_SUBMISSIONS)
    }

    pub fn test_batch(&mut self) -> u32 {
        self.rng.gen_range(TEST_BATCH)
    }
}
