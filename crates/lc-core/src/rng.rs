//! Deterministic per-citizen and simulation-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each citizen gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (citizen_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive citizen IDs uniformly across the seed space.
//! This means:
//!
//! - Citizens never share RNG state (no contention, no ordering dependency).
//! - Adding or removing citizens at the end of the store does not disturb the
//!   seeds of existing citizens — runs are reproducible even as populations
//!   grow.
//! - All draws are local to the owning thread; no synchronisation needed.
//!
//! This replaces the host's process-wide randomizer singleton: every decision
//! procedure takes the citizen's RNG as an explicit parameter.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::CitizenId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── CitizenRng ────────────────────────────────────────────────────────────────

/// Per-citizen deterministic RNG.
///
/// Create one per citizen at population-build time; store in a parallel
/// `Vec<CitizenRng>` alongside the population store.  The type is `!Sync` to
/// prevent accidental sharing across threads — each Rayon worker must hold its
/// own exclusive reference.
pub struct CitizenRng(SmallRng);

impl CitizenRng {
    /// Seed deterministically from the run's global seed and a citizen ID.
    pub fn new(global_seed: u64, citizen: CitizenId) -> Self {
        let seed = global_seed ^ (citizen.0 as u64).wrapping_mul(MIXING_CONSTANT);
        CitizenRng(SmallRng::seed_from_u64(seed))
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Uniform draw in `[0, max)` — the host randomizer's `Int32(max)` shape.
    #[inline]
    pub fn draw(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0, "draw upper bound must be positive");
        self.0.gen_range(0..max)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG for global operations (population seeding, incoming
/// household composition, etc.).
///
/// Used only in single-threaded or explicitly synchronised contexts.  If you
/// need parallel randomness, give each citizen its own `CitizenRng`.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
