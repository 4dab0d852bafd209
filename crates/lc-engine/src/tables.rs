//! Fixed-point probability tables.
//!
//! Raw per-decade probabilities come in as `f64`; the per-tick rolls want
//! integer thresholds so a decade's chance can be compared against a uniform
//! integer draw without touching floating point on the hot path.  Each raw
//! probability is converted once, at configuration-build time, to
//! `round(p * 100_000)` clamped into `[0, 100_000]`.
//!
//! Tables live inside `LifecycleRules` and are rebuilt whenever the
//! configuration is replaced — a stale table is a correctness bug, not a
//! cache-freshness issue, so there is no path that mutates a table in place.

use crate::config::LifecycleConfig;

/// Fixed-point scale: 100_000 represents probability 1.0.
pub const PROB_SCALE: i32 = 100_000;

/// Number of modeled life decades (0–9 plus a terminal bucket).
pub const DECADES: usize = 11;

/// Convert raw per-decade probabilities to fixed-point thresholds.
///
/// A raw value of 1.0 or above is a sentinel meaning "always" and saturates
/// at [`PROB_SCALE`]; negative inputs clamp to 0.
pub fn build_table(raw: &[f64; DECADES]) -> [i32; DECADES] {
    let mut table = [0i32; DECADES];
    for (slot, &p) in table.iter_mut().zip(raw.iter()) {
        let scaled = (p * PROB_SCALE as f64).round() as i64;
        *slot = scaled.clamp(0, PROB_SCALE as i64) as i32;
    }
    table
}

/// The three derived tables, read-only for the lifetime of their rules.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProbabilityTables {
    /// Death-roll thresholds per decade.  Derived from the complement of the
    /// configured survival probabilities: config data is survival-to-next-
    /// decade, the roll wants a death chance.
    pub survival: [i32; DECADES],
    /// Sickness-roll thresholds per decade.
    pub sickness: [i32; DECADES],
    /// Emigration thresholds per decade (exposed for host emigration logic;
    /// not consumed by the aging roll).
    pub emigration: [i32; DECADES],
}

impl ProbabilityTables {
    /// Derive all tables from a configuration snapshot.
    ///
    /// Assumes `config` has already passed validation; out-of-range inputs
    /// are clamped rather than rejected here.
    pub fn derive(config: &LifecycleConfig) -> Self {
        let death_raw = config.survival_raw.map(|p| 1.0 - p.clamp(0.0, 1.0));
        Self {
            survival: build_table(&death_raw),
            sickness: build_table(&config.sickness_raw),
            emigration: build_table(&config.emigration_raw),
        }
    }
}
