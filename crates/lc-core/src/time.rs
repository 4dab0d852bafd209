//! Simulation time model.
//!
//! # Design
//!
//! Time is represented as a monotonically increasing `Tick` counter held in
//! `SimClock`.  One tick is one simulation step of the host; a citizen's age
//! is counted in the same unit, so all lifecycle arithmetic is exact integer
//! math.
//!
//! The clock also derives the **phase** used to stagger lifecycle processing:
//! with a life-span multiplier of N, only citizens whose ID is congruent to
//! `phase(N)` are processed on a given tick, so roughly 1/N of the population
//! ages per tick and the load spreads evenly.  The phase is an explicit
//! property of the clock passed into each tick call — there is no process-wide
//! tick counter.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
///
/// Stored as `u64` to avoid overflow: at one tick per simulated week of
/// citizen time, a u64 outlasts any conceivable run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The simulation clock: current tick plus phase derivation.
///
/// `SimClock` is cheap to copy and intentionally holds no heap data.  It is
/// passed into every tick entry point instead of living in global state, so
/// two simulations in one process never interfere.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// The current tick — advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    /// Create a clock starting at tick 0.
    pub fn new() -> Self {
        Self { current_tick: Tick::ZERO }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// The current processing phase for a life-span multiplier of
    /// `multiplier`: `current_tick mod multiplier`.
    ///
    /// A citizen is eligible for lifecycle processing this tick when
    /// `citizen_id % multiplier == phase(multiplier)`.
    #[inline]
    pub fn phase(&self, multiplier: u32) -> u32 {
        debug_assert!(multiplier >= 1, "life-span multiplier must be >= 1");
        (self.current_tick.0 % multiplier as u64) as u32
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.current_tick)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation run configuration.
///
/// Lifecycle tuning (age bands, probabilities, multipliers) lives in the
/// engine's own configuration snapshot; this struct only describes the run.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Total ticks to simulate.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Worker thread count passed to Rayon (with the `parallel` feature).
    /// `None` uses all logical cores.
    pub num_threads: Option<usize>,
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }
}
