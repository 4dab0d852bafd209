//! The immutable lifecycle configuration snapshot.
//!
//! Built once from host settings at startup.  Replacing it means building a
//! fresh `LifecycleRules` (which re-derives the probability tables); a
//! snapshot that fails validation is rejected whole and the previous rules
//! stay in force.
//!
//! All numeric defaults are tuning data, not derived values.

use crate::error::ConfigError;
use crate::stage::AgeBands;
use crate::tables::DECADES;

/// Which mortality calculation the aging roll uses.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CalcMode {
    /// The host's stock age-window calculation.
    Vanilla,
    /// Decade-table calculation driven by health and wellbeing.
    #[default]
    Custom,
}

/// Immutable lifecycle tuning snapshot.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LifecycleConfig {
    /// Process each citizen every N ticks (staggered by citizen ID), so the
    /// population ages at 1/N of the tick rate.  Must be ≥ 1.
    pub life_span_multiplier: u32,

    pub calc_mode: CalcMode,

    /// Scales an age in ticks to a decade index (custom mode).  The host
    /// counts 35 age ticks per decade of life.
    pub decade_factor: f64,

    /// Age ticks per displayed year of citizen age.
    pub age_per_year: f64,

    pub bands: AgeBands,

    /// Percent chance (0–100) a teen attempts high school per eligible tick.
    pub edu_prob_teen: u32,
    /// Percent chance (0–100) a young adult attempts university per eligible tick.
    pub edu_prob_young: u32,
    /// Percent chance (0–100, per missing level) an unemployed adult returns
    /// to school.
    pub edu_prob_adult: u32,

    /// Percent multiplier applied to education attempts while the district's
    /// education-boost policy is active.
    pub factor_education_boost: u32,
    /// Percent multiplier applied while the schools-out policy is active.
    pub factor_schools_out: u32,

    /// Unemployment ticks after which an adult considers re-education.
    pub unemployment_threshold: u32,

    /// Percent chance (0–100) controlling corpse handling: a dead citizen's
    /// record is removed immediately with probability `(100 − chance)%`,
    /// otherwise the corpse awaits deathcare collection.
    pub auto_dead_removal_chance: u32,

    /// Age at which an original inhabitant counts a full lifespan.
    pub full_lifespan_age: u32,

    /// Hard maximum age (custom mode kills unconditionally beyond it).
    pub max_age: u32,

    /// Per-decade chance of surviving to the next decade (0–1 each).
    pub survival_raw: [f64; DECADES],
    /// Per-decade chance of falling sick; ≥ 1.0 means always.
    pub sickness_raw: [f64; DECADES],
    /// Per-decade chance of emigrating; ≥ 1.0 means always.
    pub emigration_raw: [f64; DECADES],
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            life_span_multiplier: 3,
            calc_mode: CalcMode::Custom,
            // 35 age ticks per decade (ages run at 3.5 ticks per year).
            decade_factor: 1.0 / 35.0,
            age_per_year: 3.5,
            bands: AgeBands {
                school_start: 15,
                teen_start: 45,
                work_start: 60,
                young_start: 90,
                adult_start: 120,
                retirement: 180,
            },
            edu_prob_teen: 60,
            edu_prob_young: 40,
            edu_prob_adult: 5,
            factor_education_boost: 125,
            factor_schools_out: 50,
            unemployment_threshold: 10,
            auto_dead_removal_chance: 50,
            full_lifespan_age: 240,
            max_age: 400,
            survival_raw: [
                0.99514, 0.99823, 0.99582, 0.99326, 0.98694, 0.97076, 0.93192,
                0.82096, 0.50858, 0.11799, 0.01764,
            ],
            sickness_raw: [
                0.0125, 0.0075, 0.01, 0.01, 0.015, 0.02, 0.03, 0.04, 0.05,
                0.075, 0.25,
            ],
            emigration_raw: [
                100.0, 100.0, 0.0075, 0.01, 0.0125, 0.015, 0.04, 0.1, 0.2,
                0.45, 0.75,
            ],
        }
    }
}

impl LifecycleConfig {
    /// Validate the snapshot.  Call sites build `LifecycleRules` instead of
    /// calling this directly; a failed validation must leave the previously
    /// valid rules untouched.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.life_span_multiplier < 1 {
            return Err(ConfigError::ZeroMultiplier);
        }
        if !self.decade_factor.is_finite() || self.decade_factor <= 0.0 {
            return Err(ConfigError::InvalidDecadeFactor(self.decade_factor));
        }
        if !self.age_per_year.is_finite() || self.age_per_year <= 0.0 {
            return Err(ConfigError::InvalidAgePerYear(self.age_per_year));
        }

        let b = &self.bands;
        let thresholds = [
            ("school_start", b.school_start),
            ("teen_start", b.teen_start),
            ("young_start", b.young_start),
            ("adult_start", b.adult_start),
            ("retirement", b.retirement),
        ];
        for pair in thresholds.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if lo.1 >= hi.1 {
                return Err(ConfigError::NonIncreasingAgeBands {
                    lower: lo.0,
                    upper: hi.0,
                });
            }
        }
        if b.work_start < b.school_start || b.work_start > b.adult_start {
            return Err(ConfigError::WorkStartOutOfRange {
                got: b.work_start,
                min: b.school_start,
                max: b.adult_start,
            });
        }

        for (name, value) in [
            ("edu_prob_teen", self.edu_prob_teen),
            ("edu_prob_young", self.edu_prob_young),
            ("edu_prob_adult", self.edu_prob_adult),
            ("auto_dead_removal_chance", self.auto_dead_removal_chance),
        ] {
            if value > 100 {
                return Err(ConfigError::PercentOutOfRange { name, value });
            }
        }

        for (i, &p) in self.survival_raw.iter().enumerate() {
            if !(0.0..=1.0).contains(&p) {
                return Err(ConfigError::RawProbabilityOutOfRange {
                    table: "survival",
                    index: i,
                    value: p,
                });
            }
        }
        for (table, raw) in [
            ("sickness", &self.sickness_raw),
            ("emigration", &self.emigration_raw),
        ] {
            for (i, &p) in raw.iter().enumerate() {
                if !p.is_finite() || p < 0.0 {
                    return Err(ConfigError::RawProbabilityOutOfRange {
                        table,
                        index: i,
                        value: p,
                    });
                }
            }
        }

        if self.full_lifespan_age > self.max_age {
            return Err(ConfigError::LifespanBeyondMaxAge {
                full: self.full_lifespan_age,
                max: self.max_age,
            });
        }

        Ok(())
    }

    /// Displayed years for an age in ticks.
    #[inline]
    pub fn age_in_years(&self, age: u32) -> u32 {
        (age as f64 / self.age_per_year) as u32
    }
}
