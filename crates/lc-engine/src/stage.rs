//! Life-stage classification and decade indexing.

use std::fmt;

use crate::tables::DECADES;

/// A citizen's life stage, driving education and work eligibility.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stage {
    Child,
    Teen,
    Young,
    Adult,
    Senior,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::Child => "child",
            Stage::Teen => "teen",
            Stage::Young => "young",
            Stage::Adult => "adult",
            Stage::Senior => "senior",
        };
        f.write_str(s)
    }
}

/// Configured age-band boundaries, in age ticks.
///
/// The classifier thresholds (`teen_start`, `young_start`, `adult_start`,
/// `retirement`) must be strictly increasing — validated when the
/// configuration snapshot is built, so `classify` is total over all ages.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgeBands {
    /// Youngest age at which a child may enter elementary school.
    pub school_start: u32,
    pub teen_start: u32,
    /// Youngest working age (teens below this never request jobs).
    pub work_start: u32,
    pub young_start: u32,
    pub adult_start: u32,
    /// First senior age; adults retire when they reach it.
    pub retirement: u32,
}

impl AgeBands {
    /// Map an age to its life stage.  Pure and total: every age lands in
    /// exactly one stage.
    pub fn classify(&self, age: u32) -> Stage {
        if age < self.teen_start {
            Stage::Child
        } else if age < self.young_start {
            Stage::Teen
        } else if age < self.adult_start {
            Stage::Young
        } else if age < self.retirement {
            Stage::Adult
        } else {
            Stage::Senior
        }
    }

    /// Expected length of one school tier for adult students: a third of the
    /// span from school start to adult start (three tiers).  The host keeps
    /// no record of when an adult enrolled, so the eviction failsafe rotates
    /// adult students out on multiples of this length.
    pub fn average_school_length(&self) -> u32 {
        (self.adult_start - self.school_start) / 3
    }
}

/// Bucket an age into a probability-table decade.
///
/// Clamped to the last slot so a citizen older than the oldest modeled decade
/// still uses valid data instead of indexing out of range.  Non-decreasing in
/// `age` and always in `[0, 10]`.
#[inline]
pub fn decade_index(age: u32, decade_factor: f64) -> usize {
    ((age as f64 * decade_factor) as usize).min(DECADES - 1)
}
