// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tie-break sources for batch allocation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks one of several equally good candidates.
pub trait TieBreaker {
    /// Returns an index in `0..len`. `len` is never zero.
    fn choose_index(&mut self, len: usize) -> usize;
}

/// Uniform random tie-break.
///
/// Spreads load across equally-loaded people instead of always favouring
/// the lowest identity.
#[derive(Debug, Clone)]
pub struct RandomTieBreaker {
    rng: StdRng,
}

impl RandomTieBreaker {
    /// Creates a tie-breaker seeded from the thread-local generator.
    #[must_use]
    pub fn new() -> Self {
        Self::seeded(rand::random())
    }

    /// Creates a tie-breaker that replays the same sequence for the same seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomTieBreaker {
    fn default() -> Self {
        Self::new()
    }
}

impl TieBreaker for RandomTieBreaker {
    fn choose_index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.rng.random_range(0..len)
    }
}
