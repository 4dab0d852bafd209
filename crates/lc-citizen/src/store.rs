//! Population storage: `PopulationStore` (citizen arena + units) and
//! `CitizenRngs` (per-citizen RNG).
//!
//! # Why two structs?
//!
//! The parallel decide phase needs `&mut CitizenRngs` (exclusive mutable
//! access to each citizen's RNG) and `&PopulationStore` (shared read access to
//! citizen records) simultaneously.  Rust's borrow checker forbids this if
//! both live inside a single struct.  Keeping RNGs in a separate
//! `CitizenRngs` struct resolves the conflict cleanly:
//!
//! ```ignore
//! // lc-sim decide phase (simplified):
//! let store: &PopulationStore = &sim.store;
//! let outcomes = rngs.get_many_mut(&eligible)
//!     .into_iter()
//!     .zip(&eligible)
//!     .map(|(rng, &id)| engine.decide_age(id, store.get(id)?, rng))
//!     .collect::<Vec<_>>();
//! ```
//!
//! Citizen slots are `Option<Citizen>` so releasing a record (vanishing
//! corpse, orphan release) leaves a hole instead of shifting IDs; IDs stay
//! stable for the lifetime of the run.

use lc_core::{CitizenId, CitizenRng, LcError, LcResult, UnitId};

use crate::citizen::Citizen;
use crate::household::CitizenUnit;

// ── CitizenRngs ───────────────────────────────────────────────────────────────

/// Per-citizen deterministic RNG state, separated from [`PopulationStore`] to
/// enable simultaneous `&mut CitizenRngs` + `&PopulationStore` borrows in the
/// parallel decide phase.
///
/// `CitizenRngs` is `Send` (the inner `SmallRng` is `Send`) but intentionally
/// not `Sync` — per-citizen RNG state must never be shared between threads.
/// Rayon's disjoint-borrow pattern handles exclusive per-thread access.
pub struct CitizenRngs {
    pub inner: Vec<CitizenRng>,
}

impl CitizenRngs {
    /// Allocate and seed `count` per-citizen RNGs from `global_seed`.
    pub fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| CitizenRng::new(global_seed, CitizenId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one citizen's RNG.
    #[inline]
    pub fn get_mut(&mut self, citizen: CitizenId) -> &mut CitizenRng {
        &mut self.inner[citizen.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Return mutable references to the RNGs for a set of citizens.
    ///
    /// Used by lc-sim's parallel decide phase: the eligible-citizen list is
    /// zipped with the returned refs and processed with Rayon.
    ///
    /// # Precondition (enforced by caller)
    ///
    /// `citizens` must contain no duplicate `CitizenId`s and all indices must
    /// be in-bounds.  Both invariants hold for the tick's eligibility list
    /// because it is produced by a single ascending scan of the store.
    pub fn get_many_mut(&mut self, citizens: &[CitizenId]) -> Vec<&mut CitizenRng> {
        let ptr = self.inner.as_mut_ptr();
        // SAFETY: Every `CitizenId` in `citizens` is unique (caller invariant)
        // and within bounds (store invariant).  Each pointer therefore aliases
        // a distinct element of `self.inner`, so no two references overlap.
        citizens
            .iter()
            .map(|c| unsafe { &mut *ptr.add(c.index()) })
            .collect()
    }
}

// ── PopulationStore ───────────────────────────────────────────────────────────

/// Owns every citizen record and household unit.
///
/// The lifecycle engine borrows records from here for the duration of one
/// tick's processing; nothing in this store is shared across ticks by
/// reference.
pub struct PopulationStore {
    citizens: Vec<Option<Citizen>>,
    units: Vec<CitizenUnit>,
}

impl PopulationStore {
    pub(crate) fn new(citizens: Vec<Option<Citizen>>, units: Vec<CitizenUnit>) -> Self {
        Self { citizens, units }
    }

    /// Number of citizen slots ever allocated (including released ones).
    /// Equals the length of the matching `CitizenRngs`.
    pub fn capacity(&self) -> usize {
        self.citizens.len()
    }

    /// Number of live (non-released) citizen records, dead or alive.
    pub fn citizen_count(&self) -> usize {
        self.citizens.iter().filter(|c| c.is_some()).count()
    }

    /// Citizens not yet dead.
    pub fn alive_count(&self) -> usize {
        self.citizens
            .iter()
            .filter(|c| c.as_ref().is_some_and(|c| !c.dead))
            .count()
    }

    /// IDs of all present citizen records in ascending order.
    pub fn citizen_ids(&self) -> impl Iterator<Item = CitizenId> + '_ {
        self.citizens
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_some())
            .map(|(i, _)| CitizenId(i as u32))
    }

    #[inline]
    pub fn get(&self, citizen: CitizenId) -> Option<&Citizen> {
        self.citizens.get(citizen.index())?.as_ref()
    }

    #[inline]
    pub fn get_mut(&mut self, citizen: CitizenId) -> Option<&mut Citizen> {
        self.citizens.get_mut(citizen.index())?.as_mut()
    }

    pub fn unit(&self, unit: UnitId) -> Option<&CitizenUnit> {
        self.units.get(unit.index())
    }

    pub fn unit_mut(&mut self, unit: UnitId) -> Option<&mut CitizenUnit> {
        self.units.get_mut(unit.index())
    }

    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    /// Remove a citizen record entirely, clearing its household slot.
    ///
    /// Used for vanishing corpses and orphan release.  Releasing an already-
    /// released citizen is an error (`CitizenNotFound`) — the exactly-once
    /// discipline is enforced by callers checking slot occupancy first.
    pub fn release_citizen(&mut self, citizen: CitizenId) -> LcResult<Citizen> {
        let record = self
            .citizens
            .get_mut(citizen.index())
            .and_then(|slot| slot.take())
            .ok_or(LcError::CitizenNotFound(citizen))?;
        if let Some(unit) = self.units.get_mut(record.unit.index()) {
            unit.remove(citizen);
        }
        Ok(record)
    }
}
