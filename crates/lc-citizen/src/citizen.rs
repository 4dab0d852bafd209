//! The `Citizen` record and its enumerated state.

use lc_core::{BuildingId, UnitId};

// ── Education ─────────────────────────────────────────────────────────────────

/// Completed education, ordered by the number of school tiers finished.
///
/// Only ever advances — graduation takes the max of the current level and the
/// level just completed, so no sequence of lifecycle events can regress it.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EducationLevel {
    #[default]
    Uneducated,
    OneSchool,
    TwoSchools,
    ThreeSchools,
}

impl EducationLevel {
    /// The school tier that would raise this level by one, or `None` when
    /// fully educated.
    pub fn next_school(self) -> Option<SchoolLevel> {
        match self {
            EducationLevel::Uneducated => Some(SchoolLevel::Elementary),
            EducationLevel::OneSchool => Some(SchoolLevel::HighSchool),
            EducationLevel::TwoSchools => Some(SchoolLevel::University),
            EducationLevel::ThreeSchools => None,
        }
    }
}

/// A school tier a citizen can be enrolled in.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SchoolLevel {
    Elementary,
    HighSchool,
    University,
}

impl SchoolLevel {
    /// The education level granted on graduating this tier.
    pub fn grants(self) -> EducationLevel {
        match self {
            SchoolLevel::Elementary => EducationLevel::OneSchool,
            SchoolLevel::HighSchool => EducationLevel::TwoSchools,
            SchoolLevel::University => EducationLevel::ThreeSchools,
        }
    }
}

// ── Location ──────────────────────────────────────────────────────────────────

/// Where the citizen currently is, as maintained by the host.
///
/// `Moving` citizens (and citizens inside a vehicle) are protected from the
/// tick's mortality roll.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Location {
    #[default]
    Home,
    Work,
    Visit,
    Moving,
}

// ── Citizen ───────────────────────────────────────────────────────────────────

/// One citizen's lifecycle-relevant state.
///
/// `health` and `wellbeing` are externally maintained inputs in `[0, 100]`;
/// the lifecycle engine only reads them.  `age`, `sick`, `dead`, `education`,
/// `attending`, and `needs_goods` are mutated by the engine.
///
/// Invariants: `age` is never decremented; `education` never regresses; a
/// dead citizen receives no further lifecycle processing.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Citizen {
    /// Age in ticks, monotonically increasing while alive.
    pub age: u32,
    /// Health in `[0, 100]`; read-only input.
    pub health: u8,
    /// Wellbeing in `[0, 100]`; read-only input.
    pub wellbeing: u8,
    pub sick: bool,
    pub dead: bool,
    pub education: EducationLevel,
    /// School tier currently enrolled in; `None` when not a student.
    pub attending: Option<SchoolLevel>,
    /// Ticks spent without a workplace; reset on employment.
    pub unemployed_ticks: u32,
    /// Original inhabitant (counted for lifespan statistics).
    pub original: bool,
    /// Currently immigrating into the city.
    pub moving_in: bool,
    /// Wants to go shopping; suppressed for under-school-age children.
    pub needs_goods: bool,
    pub location: Location,
    pub in_vehicle: bool,
    pub home: Option<BuildingId>,
    pub workplace: Option<BuildingId>,
    /// Back-reference (non-owning) to the household unit.
    pub unit: UnitId,
}

impl Citizen {
    /// A healthy citizen of the given age with no placements.
    pub fn new(age: u32) -> Self {
        Self {
            age,
            health: 100,
            wellbeing: 100,
            sick: false,
            dead: false,
            education: EducationLevel::Uneducated,
            attending: None,
            unemployed_ticks: 0,
            original: false,
            moving_in: false,
            needs_goods: false,
            location: Location::Home,
            in_vehicle: false,
            home: None,
            workplace: None,
            unit: UnitId::INVALID,
        }
    }

    #[inline]
    pub fn is_student(&self) -> bool {
        self.attending.is_some()
    }

    #[inline]
    pub fn employed(&self) -> bool {
        self.workplace.is_some()
    }

    /// `true` while the citizen is between locations or inside a vehicle.
    #[inline]
    pub fn in_transit(&self) -> bool {
        self.location == Location::Moving || self.in_vehicle
    }

    /// Raise education to at least `level`.  Never regresses.
    #[inline]
    pub fn advance_education(&mut self, level: EducationLevel) {
        self.education = self.education.max(level);
    }

    /// Take a job: sets the workplace and resets the unemployment counter.
    pub fn employ(&mut self, workplace: BuildingId) {
        self.workplace = Some(workplace);
        self.unemployed_ticks = 0;
    }

    /// Enrol in a school tier.
    pub fn enrol(&mut self, level: SchoolLevel) {
        self.attending = Some(level);
    }
}
