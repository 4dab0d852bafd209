//! `lc-citizen` — citizen records, household units, and population storage.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`citizen`]   | `Citizen` record, `EducationLevel`, `SchoolLevel`, `Location` |
//! | [`household`] | `CitizenUnit` — 5-slot household with adult/child convention |
//! | [`store`]     | `PopulationStore` (citizen arena + units), `CitizenRngs`   |
//! | [`builder`]   | `PopulationBuilder` — households in, store + RNGs out      |
//!
//! # Design notes
//!
//! The lifecycle engine borrows citizen and unit records from
//! `PopulationStore` for the duration of one tick's processing and never
//! retains references across ticks.  Records are stored whole (array-of-
//! structs) because the engine mutates several fields of one citizen at a
//! time and households are manipulated as a unit.
//!
//! Per-citizen RNG state lives in the separate [`store::CitizenRngs`] struct
//! so the parallel decide phase can hold `&mut CitizenRngs` alongside
//! `&PopulationStore` without fighting the borrow checker.

pub mod builder;
pub mod citizen;
pub mod household;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::PopulationBuilder;
pub use citizen::{Citizen, EducationLevel, Location, SchoolLevel};
pub use household::{CitizenUnit, ADULT_SLOTS, CHILD_SLOTS, UNIT_CAPACITY};
pub use store::{CitizenRngs, PopulationStore};
