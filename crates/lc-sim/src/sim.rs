//! The `Sim` struct and its tick loop.

use lc_citizen::{CitizenRngs, PopulationStore};
use lc_core::{CitizenId, SimClock, SimConfig, Tick, UnitId};
use lc_engine::{AgeApplied, AgeOutcome, ExitCause, LifecycleEngine, PolicyProvider};

use crate::error::SimResult;
use crate::observer::{DeathEvent, EvictionEvent, LifecycleObserver, SicknessEvent};

/// The main simulation runner.
///
/// `Sim<P>` holds all simulation state and drives the four-phase tick loop:
///
/// 1. **Eligibility**: ascending scan for alive citizens whose ID matches
///    this tick's phase (`id % life_span_multiplier == phase`), so 1/N of
///    the population ages per tick with the load spread evenly.
/// 2. **Decide** (optionally parallel with the `parallel` feature):
///    [`LifecycleEngine::decide_age`] per eligible citizen — reads the
///    citizen record and its own RNG, mutates nothing.
/// 3. **Apply** (sequential, ascending `CitizenId` for determinism):
///    commit ages, graduations, sickness, deaths, orphan cleanup, corpse
///    removal; observer events fire here.
/// 4. **Placement** (sequential): unemployed, unenrolled citizens with a
///    home advance their unemployment counters and emit at most one offer.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: PolicyProvider> {
    /// Run configuration (total ticks, seed, thread count).
    pub config: SimConfig,

    /// Simulation clock — current tick plus phase derivation.
    pub clock: SimClock,

    /// The lifecycle decision engine (validated rules + derived tables).
    pub engine: LifecycleEngine,

    /// Citizen records and household units.
    pub store: PopulationStore,

    /// Per-citizen deterministic RNGs, separated for the split-borrow pattern.
    pub rngs: CitizenRngs,

    /// District policy / position lookup seam.
    pub policy: P,

    /// High-water mark of the oldest original inhabitant's age.
    pub oldest_original: u32,
}

impl<P: PolicyProvider> Sim<P> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: LifecycleObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        loop {
            let now = self.clock.current_tick;
            if now >= self.config.end_tick() {
                break;
            }
            observer.on_tick_start(now);
            let processed = self.process_tick(now, observer)?;
            observer.on_tick_end(now, processed);
            self.clock.advance();
        }
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: LifecycleObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            let now = self.clock.current_tick;
            observer.on_tick_start(now);
            let processed = self.process_tick(now, observer)?;
            observer.on_tick_end(now, processed);
            self.clock.advance();
        }
        Ok(())
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: LifecycleObserver>(
        &mut self,
        now: Tick,
        observer: &mut O,
    ) -> SimResult<usize> {
        let multiplier = self.engine.rules().config().life_span_multiplier;
        let phase = self.clock.phase(multiplier);

        // ── Phase 1: eligibility ──────────────────────────────────────────
        //
        // Ascending scan → unique, in-bounds IDs, which is exactly the
        // precondition `CitizenRngs::get_many_mut` needs.
        let eligible: Vec<CitizenId> = self
            .store
            .citizen_ids()
            .filter(|id| id.0 % multiplier == phase)
            .filter(|&id| self.store.get(id).is_some_and(|c| !c.dead))
            .collect();

        // ── Phase 2: decide ───────────────────────────────────────────────
        let outcomes = self.decide_phase(&eligible);

        // ── Phase 3: apply (sequential, ascending CitizenId) ──────────────
        //
        // Orphan cleanup is a read-modify-write on the household unit; two
        // members of one unit can die in the same tick, so application must
        // be serialized.
        let mut processed = 0usize;
        for (id, outcome) in eligible.iter().copied().zip(outcomes) {
            let Some(outcome) = outcome else { continue };
            // Orphan cleanup earlier in this loop may have released the
            // record; a decided-but-released citizen is simply dropped.
            let Some(citizen) = self.store.get(id) else { continue };
            let unit = citizen.unit;
            processed += 1;
            let applied = self.engine.apply_age(id, &outcome, &mut self.store)?;
            self.report(now, id, unit, &outcome, &applied, observer);
        }

        // ── Phase 4: placement ────────────────────────────────────────────
        let bands = *self.engine.rules().bands();
        for &id in &eligible {
            // The record may have vanished or died during apply.
            let Some(citizen) = self.store.get_mut(id) else { continue };
            if citizen.dead || citizen.employed() || citizen.is_student() {
                continue;
            }
            if citizen.age >= bands.work_start && citizen.age < bands.retirement {
                citizen.unemployed_ticks += 1;
            }
            if citizen.home.is_none() {
                continue;
            }
            let rng = self.rngs.get_mut(id);
            if let Some(offer) = self.engine.placement_tick(id, citizen, &self.policy, rng) {
                observer.on_offer(now, &offer);
            }
        }

        Ok(processed)
    }

    /// Run the decide step for all eligible citizens.
    ///
    /// With the `parallel` Cargo feature the decisions run on Rayon's thread
    /// pool; each worker holds the citizen's own `&mut CitizenRng` and a
    /// shared `&PopulationStore`, so ordering cannot influence results.
    fn decide_phase(&mut self, eligible: &[CitizenId]) -> Vec<Option<AgeOutcome>> {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let engine = &self.engine;
        let store = &self.store;
        let rng_refs = self.rngs.get_many_mut(eligible);

        #[cfg(not(feature = "parallel"))]
        {
            eligible
                .iter()
                .zip(rng_refs)
                .map(|(&id, rng)| store.get(id).and_then(|c| engine.decide_age(c, rng)))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            eligible
                .par_iter()
                .zip(rng_refs.into_par_iter())
                .map(|(&id, rng)| store.get(id).and_then(|c| engine.decide_age(c, rng)))
                .collect()
        }
    }

    /// Translate one applied outcome into observer events and statistics.
    fn report<O: LifecycleObserver>(
        &mut self,
        now: Tick,
        id: CitizenId,
        unit: UnitId,
        outcome: &AgeOutcome,
        applied: &AgeApplied,
        observer: &mut O,
    ) {
        if let Some(age) = outcome.original_age {
            if age > self.oldest_original {
                self.oldest_original = age;
            }
        }
        if outcome.full_lifespan {
            observer.on_full_lifespan(now, id);
        }
        if let Some(cause) = outcome.stage_exit {
            if matches!(cause, ExitCause::Overstay(_) | ExitCause::AdultRotation) {
                observer.on_eviction(
                    now,
                    &EvictionEvent { citizen: id, age: outcome.new_age, cause },
                );
            }
        }
        if let Some(chance_factor) = outcome.sickness {
            observer.on_sickness(
                now,
                &SicknessEvent { citizen: id, age: outcome.new_age, chance_factor },
            );
        }
        if outcome.death.is_some() {
            observer.on_death(
                now,
                &DeathEvent {
                    citizen: id,
                    age: outcome.new_age,
                    unit,
                    vanished: applied.removed,
                    orphans_released: applied.orphans.len(),
                },
            );
        }
    }
}
