//! Fluent builder for constructing `PopulationStore` + `CitizenRngs` in one
//! step.
//!
//! # Usage
//!
//! ```rust
//! use lc_citizen::{Citizen, PopulationBuilder};
//!
//! let mut builder = PopulationBuilder::new(/*seed=*/ 42);
//! builder
//!     .add_household(vec![Citizen::new(120), Citizen::new(125)], vec![Citizen::new(5)])
//!     .unwrap();
//! let (store, rngs) = builder.build();
//!
//! assert_eq!(store.citizen_count(), 3);
//! assert_eq!(rngs.len(), 3);
//! ```

use lc_core::{CitizenId, LcError, LcResult, UnitId};

use crate::citizen::Citizen;
use crate::household::{CitizenUnit, ADULT_SLOTS, CHILD_SLOTS};
use crate::store::{CitizenRngs, PopulationStore};

/// Fluent builder for [`PopulationStore`] + [`CitizenRngs`].
///
/// Citizens are added household-by-household so every record is born with a
/// valid unit back-reference; the store never contains a citizen whose unit
/// does not list them.
pub struct PopulationBuilder {
    seed: u64,
    citizens: Vec<Option<Citizen>>,
    units: Vec<CitizenUnit>,
}

impl PopulationBuilder {
    /// Create a builder using `seed` as the global RNG seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            citizens: Vec::new(),
            units: Vec::new(),
        }
    }

    /// Add one household.  `adults` fills slots 0–1, `children` slots 2–4.
    ///
    /// Errors with [`LcError::HouseholdFull`] when given more than 2 adults
    /// or 3 children; no partial state is left behind on error.
    pub fn add_household(
        &mut self,
        adults: Vec<Citizen>,
        children: Vec<Citizen>,
    ) -> LcResult<UnitId> {
        let unit_id = UnitId(self.units.len() as u32);
        if adults.len() > ADULT_SLOTS {
            return Err(LcError::HouseholdFull { unit: unit_id, kind: "adult" });
        }
        if children.len() > CHILD_SLOTS {
            return Err(LcError::HouseholdFull { unit: unit_id, kind: "child" });
        }

        let mut unit = CitizenUnit::empty();
        for adult in adults {
            let id = self.push_citizen(adult, unit_id);
            unit.add_adult(id);
        }
        for child in children {
            let id = self.push_citizen(child, unit_id);
            unit.add_child(id);
        }
        self.units.push(unit);
        Ok(unit_id)
    }

    fn push_citizen(&mut self, mut citizen: Citizen, unit: UnitId) -> CitizenId {
        let id = CitizenId(self.citizens.len() as u32);
        citizen.unit = unit;
        self.citizens.push(Some(citizen));
        id
    }

    /// Number of citizens added so far.
    pub fn citizen_count(&self) -> usize {
        self.citizens.len()
    }

    /// Construct `PopulationStore` and `CitizenRngs`.
    pub fn build(self) -> (PopulationStore, CitizenRngs) {
        let rngs = CitizenRngs::new(self.citizens.len(), self.seed);
        let store = PopulationStore::new(self.citizens, self.units);
        (store, rngs)
    }
}
