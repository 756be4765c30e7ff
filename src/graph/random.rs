// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! A deterministic, per-request linear-congruential generator for random graph sampling.
//!
//! The reference service seeds a single process-wide `rand()` under a mutex. This
//! implementation instead constructs a fresh [`SeededRng`] from the request's seed value
//! each time a random graph is generated: since the generator owns its state exclusively
//! and is never shared across threads, no lock is needed, while `(V, E, seed)` still
//! deterministically reproduces the same graph (see `Graph::generate_random`).

/// Classical LCG with the constants used by glibc's `rand()` (via `random()`'s low bits
/// are not replicated; this is a minimal, self-contained generator, not a libc shim).
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Seeds a new generator. The all-zero state is avoided (it would stick at zero)
    /// by folding in a nonzero additive constant, matching common LCG seeding practice.
    pub fn new(seed: u32) -> Self {
        Self {
            state: (seed as u64) ^ 0x5DEECE66D,
        }
    }

    /// Advances the generator and returns the next pseudo-random `u32`.
    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG constants.
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.state >> 33) as u32
    }

    /// Returns a value uniformly distributed in `[0, bound)`. Panics if `bound == 0`.
    pub fn gen_range(&mut self, bound: u32) -> u32 {
        assert!(bound > 0, "gen_range bound must be positive");
        self.next_u32() % bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_produces_the_same_sequence() {
        let mut a = SeededRng::new(42);
        let mut b = SeededRng::new(42);
        let seq_a: Vec<u32> = (0..20).map(|_| a.gen_range(100)).collect();
        let seq_b: Vec<u32> = (0..20).map(|_| b.gen_range(100)).collect();
        assert_eq!(seq_a, seq_b);
    }

    #[test]
    fn different_seeds_usually_diverge() {
        let mut a = SeededRng::new(1);
        let mut b = SeededRng::new(2);
        let seq_a: Vec<u32> = (0..20).map(|_| a.gen_range(1_000_000)).collect();
        let seq_b: Vec<u32> = (0..20).map(|_| b.gen_range(1_000_000)).collect();
        assert_ne!(seq_a, seq_b);
    }

    #[test]
    fn gen_range_stays_in_bounds() {
        let mut rng = SeededRng::new(7);
        for _ in 0..1000 {
            let v = rng.gen_range(17);
            assert!(v < 17);
        }
    }
}
