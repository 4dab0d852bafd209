//! Outgoing offers and the district-policy seam.
//!
//! An offer is a fire-and-forget "I am seeking X" event handed to the host's
//! allocation service.  The engine never tracks or retries an offer;
//! fulfilment (assigning a school seat or job and calling
//! `Citizen::enrol`/`Citizen::employ`) is entirely the allocator's business.

use std::fmt;

use lc_citizen::{EducationLevel, SchoolLevel};
use lc_core::{BuildingId, CitizenId, Position};

// ── OfferReason ───────────────────────────────────────────────────────────────

/// What the citizen is seeking, ranked by school tier / job tier.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OfferReason {
    /// A seat in elementary school.
    Student1,
    /// A seat in high school.
    Student2,
    /// A seat at university.
    Student3,
    /// An uneducated job.
    Worker0,
    /// A job requiring one completed school.
    Worker1,
    Worker2,
    Worker3,
}

impl OfferReason {
    pub fn is_education(self) -> bool {
        matches!(self, OfferReason::Student1 | OfferReason::Student2 | OfferReason::Student3)
    }

    /// The school tier a `StudentN` offer requests.
    pub fn school_level(self) -> Option<SchoolLevel> {
        match self {
            OfferReason::Student1 => Some(SchoolLevel::Elementary),
            OfferReason::Student2 => Some(SchoolLevel::HighSchool),
            OfferReason::Student3 => Some(SchoolLevel::University),
            _ => None,
        }
    }

    /// The `StudentN` offer requesting a seat in the given school tier.
    pub fn seeking(level: SchoolLevel) -> OfferReason {
        match level {
            SchoolLevel::Elementary => OfferReason::Student1,
            SchoolLevel::HighSchool => OfferReason::Student2,
            SchoolLevel::University => OfferReason::Student3,
        }
    }

    /// The job tier matching a completed education level.
    pub fn worker_for(education: EducationLevel) -> OfferReason {
        match education {
            EducationLevel::Uneducated => OfferReason::Worker0,
            EducationLevel::OneSchool => OfferReason::Worker1,
            EducationLevel::TwoSchools => OfferReason::Worker2,
            EducationLevel::ThreeSchools => OfferReason::Worker3,
        }
    }
}

impl fmt::Display for OfferReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OfferReason::Student1 => "student1",
            OfferReason::Student2 => "student2",
            OfferReason::Student3 => "student3",
            OfferReason::Worker0 => "worker0",
            OfferReason::Worker1 => "worker1",
            OfferReason::Worker2 => "worker2",
            OfferReason::Worker3 => "worker3",
        };
        f.write_str(s)
    }
}

// ── Offer ─────────────────────────────────────────────────────────────────────

/// A request for a school seat or job, emitted to the external allocator.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offer {
    pub reason: OfferReason,
    pub citizen: CitizenId,
    /// The requester's home position, for distance matching on the host side.
    pub position: Position,
    /// Matching priority, uniform in `0..8`.
    pub priority: u8,
    pub amount: u32,
}

// ── District policies ─────────────────────────────────────────────────────────

/// The active district policies at a citizen's home, as booleans.
///
/// Policy *computation* is the host's business; the engine only consumes the
/// flags and applies the configured percent multipliers.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistrictPolicies {
    pub education_boost: bool,
    pub schools_out: bool,
}

impl DistrictPolicies {
    pub const NONE: DistrictPolicies = DistrictPolicies {
        education_boost: false,
        schools_out: false,
    };
}

/// The building/district lookup seam.
///
/// Implemented by the host (or a test fixture) to answer two questions about
/// a citizen's home building: which district policies apply there, and where
/// it is.
pub trait PolicyProvider {
    fn policies(&self, home: BuildingId) -> DistrictPolicies;

    fn position(&self, home: BuildingId) -> Position;
}

/// A [`PolicyProvider`] with no active policies and every building at the
/// origin.  Use in tests or when district policy is out of play.
pub struct NoPolicies;

impl PolicyProvider for NoPolicies {
    fn policies(&self, _home: BuildingId) -> DistrictPolicies {
        DistrictPolicies::NONE
    }

    fn position(&self, _home: BuildingId) -> Position {
        Position::ORIGIN
    }
}
