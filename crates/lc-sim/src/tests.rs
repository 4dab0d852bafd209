//! Integration tests for lc-sim.

use lc_citizen::{Citizen, CitizenRngs, PopulationBuilder, PopulationStore};
use lc_core::{CitizenId, SimConfig, Tick};
use lc_engine::{LifecycleConfig, LifecycleRules, NoPolicies, OfferReason, DECADES};

use crate::{LifecycleStats, NoopObserver, SimBuilder};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config(total_ticks: u64) -> SimConfig {
    SimConfig {
        total_ticks,
        seed: 42,
        num_threads: Some(1),
    }
}

fn immortal_rules(multiplier: u32) -> LifecycleRules {
    LifecycleRules::new(LifecycleConfig {
        life_span_multiplier: multiplier,
        survival_raw: [1.0; DECADES],
        sickness_raw: [0.0; DECADES],
        ..LifecycleConfig::default()
    })
    .unwrap()
}

/// Every roll kills a zero-health citizen; corpse handling per `chance`.
fn lethal_rules(multiplier: u32, auto_dead_removal_chance: u32) -> LifecycleRules {
    LifecycleRules::new(LifecycleConfig {
        life_span_multiplier: multiplier,
        auto_dead_removal_chance,
        survival_raw: [0.0; DECADES],
        sickness_raw: [0.0; DECADES],
        ..LifecycleConfig::default()
    })
    .unwrap()
}

fn frail(age: u32) -> Citizen {
    let mut c = Citizen::new(age);
    c.health = 0;
    c.wellbeing = 0;
    c
}

fn solo_population(citizens: Vec<Citizen>, seed: u64) -> (PopulationStore, CitizenRngs) {
    let mut b = PopulationBuilder::new(seed);
    for c in citizens {
        b.add_household(vec![c], vec![]).unwrap();
    }
    b.build()
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;
    use crate::SimError;

    #[test]
    fn builds_successfully() {
        let (store, rngs) = solo_population(vec![Citizen::new(5); 3], 1);
        let sim = SimBuilder::new(test_config(10), immortal_rules(1), store, rngs, NoPolicies)
            .build()
            .unwrap();
        assert_eq!(sim.store.citizen_count(), 3);
        assert_eq!(sim.clock.current_tick, Tick::ZERO);
    }

    #[test]
    fn rng_count_mismatch_errors() {
        let (store, _rngs) = solo_population(vec![Citizen::new(5); 3], 1);
        let wrong = CitizenRngs::new(2, 42);
        let result =
            SimBuilder::new(test_config(10), immortal_rules(1), store, wrong, NoPolicies).build();
        assert!(matches!(result, Err(SimError::CitizenCountMismatch { .. })));
    }
}

// ── Basic run ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;
    use crate::{LifecycleObserver, Sim};

    #[test]
    fn noop_runs_to_end_tick() {
        let (store, rngs) = solo_population(vec![Citizen::new(5); 4], 7);
        let mut sim = SimBuilder::new(test_config(10), immortal_rules(3), store, rngs, NoPolicies)
            .build()
            .unwrap();
        sim.run(&mut NoopObserver).unwrap();
        assert_eq!(sim.clock.current_tick, Tick(10));
    }

    #[test]
    fn run_ticks_advances_clock() {
        let (store, rngs) = solo_population(vec![Citizen::new(5); 2], 7);
        let mut sim = SimBuilder::new(test_config(100), immortal_rules(3), store, rngs, NoPolicies)
            .build()
            .unwrap();
        sim.run_ticks(5, &mut NoopObserver).unwrap();
        assert_eq!(sim.clock.current_tick, Tick(5));
        sim.run_ticks(3, &mut NoopObserver).unwrap();
        assert_eq!(sim.clock.current_tick, Tick(8));
    }

    /// Observer that counts tick boundaries.
    struct TickCounter {
        starts: usize,
        ends: usize,
    }
    impl LifecycleObserver for TickCounter {
        fn on_tick_start(&mut self, _t: Tick) {
            self.starts += 1;
        }
        fn on_tick_end(&mut self, _t: Tick, _p: usize) {
            self.ends += 1;
        }
    }

    #[test]
    fn observer_called_once_per_tick() {
        let (store, rngs) = solo_population(vec![Citizen::new(5)], 7);
        let mut sim = SimBuilder::new(test_config(7), immortal_rules(1), store, rngs, NoPolicies)
            .build()
            .unwrap();
        let mut obs = TickCounter { starts: 0, ends: 0 };
        sim.run(&mut obs).unwrap();
        assert_eq!(obs.starts, 7);
        assert_eq!(obs.ends, 7);
    }

    fn ages(sim: &Sim<NoPolicies>, n: u32) -> Vec<u32> {
        (0..n)
            .map(|i| sim.store.get(CitizenId(i)).unwrap().age)
            .collect()
    }

    #[test]
    fn phase_gating_spreads_processing() {
        // Multiplier 3: tick 0 has phase 0 and processes IDs 0 and 3 only.
        let (store, rngs) = solo_population(vec![Citizen::new(5); 6], 7);
        let mut sim = SimBuilder::new(test_config(9), immortal_rules(3), store, rngs, NoPolicies)
            .build()
            .unwrap();

        sim.run_ticks(1, &mut NoopObserver).unwrap();
        assert_eq!(ages(&sim, 6), vec![6, 5, 5, 6, 5, 5]);

        sim.run_ticks(1, &mut NoopObserver).unwrap();
        assert_eq!(ages(&sim, 6), vec![6, 6, 5, 6, 6, 5]);

        // After a full cycle everyone aged exactly once.
        sim.run_ticks(1, &mut NoopObserver).unwrap();
        assert_eq!(ages(&sim, 6), vec![6, 6, 6, 6, 6, 6]);
    }

    #[test]
    fn multiplier_one_processes_everyone_every_tick() {
        let (store, rngs) = solo_population(vec![Citizen::new(5); 4], 7);
        let mut sim = SimBuilder::new(test_config(3), immortal_rules(1), store, rngs, NoPolicies)
            .build()
            .unwrap();
        sim.run(&mut NoopObserver).unwrap();
        assert_eq!(ages(&sim, 4), vec![8, 8, 8, 8]);
    }
}

// ── Deaths, cleanup, and statistics ───────────────────────────────────────────

#[cfg(test)]
mod death_tests {
    use super::*;

    #[test]
    fn kept_corpses_stop_receiving_ticks() {
        let (store, rngs) = solo_population(vec![frail(50); 4], 3);
        let mut sim =
            SimBuilder::new(test_config(3), lethal_rules(1, 100), store, rngs, NoPolicies)
                .build()
                .unwrap();
        let mut stats = LifecycleStats::new();
        sim.run(&mut stats).unwrap();

        // All four died on tick 0; the corpses received no further processing.
        assert_eq!(stats.deaths, 4);
        assert_eq!(stats.vanished_corpses, 0);
        assert_eq!(sim.store.citizen_count(), 4);
        assert_eq!(sim.store.alive_count(), 0);
        for i in 0..4 {
            let c = sim.store.get(CitizenId(i)).unwrap();
            assert!(c.dead);
            assert_eq!(c.age, 51, "dead citizens never age again");
        }
        assert_eq!(stats.processed, 4, "only the first tick processed anyone");
    }

    #[test]
    fn vanishing_corpses_leave_the_store() {
        let (store, rngs) = solo_population(vec![frail(50); 4], 3);
        let mut sim = SimBuilder::new(test_config(1), lethal_rules(1, 0), store, rngs, NoPolicies)
            .build()
            .unwrap();
        let mut stats = LifecycleStats::new();
        sim.run(&mut stats).unwrap();
        assert_eq!(stats.deaths, 4);
        assert_eq!(stats.vanished_corpses, 4);
        assert_eq!(sim.store.citizen_count(), 0);
    }

    #[test]
    fn both_parents_dying_same_tick_releases_children_once() {
        let mut b = PopulationBuilder::new(9);
        // Child rides along in a vehicle: protected from the roll, so only
        // the parents die this tick.
        let mut child = Citizen::new(5);
        child.in_vehicle = true;
        b.add_household(vec![frail(150), frail(155)], vec![child]).unwrap();
        let (store, rngs) = b.build();

        let mut sim = SimBuilder::new(test_config(1), lethal_rules(1, 0), store, rngs, NoPolicies)
            .build()
            .unwrap();
        let mut stats = LifecycleStats::new();
        sim.run(&mut stats).unwrap();

        // Parent 0 vanished first, freeing its slot; parent 1 then died as
        // the lone adult and the child was released exactly once.
        assert_eq!(stats.deaths, 2);
        assert_eq!(stats.orphans_released, 1);
        assert_eq!(sim.store.citizen_count(), 0);
    }

    #[test]
    fn deterministic_given_seed() {
        let run = || {
            let (store, rngs) = solo_population(vec![Citizen::new(300); 20], 1234);
            let rules = LifecycleRules::new(LifecycleConfig::default()).unwrap();
            let mut sim = SimBuilder::new(test_config(50), rules, store, rngs, NoPolicies)
                .build()
                .unwrap();
            let mut stats = LifecycleStats::new();
            sim.run(&mut stats).unwrap();
            (stats.deaths, stats.sicknesses, stats.vanished_corpses)
        };
        assert_eq!(run(), run());
    }
}

// ── Milestones, evictions, offers ─────────────────────────────────────────────

#[cfg(test)]
mod event_tests {
    use super::*;
    use lc_citizen::{EducationLevel, SchoolLevel};
    use lc_core::BuildingId;

    #[test]
    fn full_lifespan_and_oldest_original_tracked() {
        let mut original = Citizen::new(239);
        original.original = true;
        let (store, rngs) = solo_population(vec![original, Citizen::new(239)], 5);
        let mut sim = SimBuilder::new(test_config(1), immortal_rules(1), store, rngs, NoPolicies)
            .build()
            .unwrap();
        let mut stats = LifecycleStats::new();
        sim.run(&mut stats).unwrap();
        assert_eq!(stats.full_lifespans, 1, "only originals count");
        assert_eq!(sim.oldest_original, 240);
    }

    #[test]
    fn overstaying_student_evicted_and_graduated() {
        let mut student = Citizen::new(100);
        student.enrol(SchoolLevel::Elementary);
        let (store, rngs) = solo_population(vec![student], 5);
        let mut sim = SimBuilder::new(test_config(1), immortal_rules(1), store, rngs, NoPolicies)
            .build()
            .unwrap();
        let mut stats = LifecycleStats::new();
        sim.run(&mut stats).unwrap();
        assert_eq!(stats.evictions, 1);
        let c = sim.store.get(CitizenId(0)).unwrap();
        assert!(c.attending.is_none());
        assert_eq!(c.education, EducationLevel::OneSchool);
    }

    #[test]
    fn unemployed_adult_emits_offer_and_counts_idle_ticks() {
        let mut adult = Citizen::new(130);
        adult.home = Some(BuildingId(0));
        let (store, rngs) = solo_population(vec![adult], 5);
        let mut sim = SimBuilder::new(test_config(1), immortal_rules(1), store, rngs, NoPolicies)
            .build()
            .unwrap();
        let mut stats = LifecycleStats::new();
        sim.run(&mut stats).unwrap();
        assert_eq!(stats.total_offers(), 1);
        assert_eq!(stats.offers_for(OfferReason::Worker0), 1);
        assert_eq!(sim.store.get(CitizenId(0)).unwrap().unemployed_ticks, 1);
    }

    #[test]
    fn employed_citizens_emit_nothing() {
        let mut worker = Citizen::new(130);
        worker.home = Some(BuildingId(0));
        worker.employ(BuildingId(1));
        let (store, rngs) = solo_population(vec![worker], 5);
        let mut sim = SimBuilder::new(test_config(5), immortal_rules(1), store, rngs, NoPolicies)
            .build()
            .unwrap();
        let mut stats = LifecycleStats::new();
        sim.run(&mut stats).unwrap();
        assert_eq!(stats.total_offers(), 0);
        assert_eq!(sim.store.get(CitizenId(0)).unwrap().unemployed_ticks, 0);
    }

    #[test]
    fn homeless_citizens_emit_nothing_but_still_idle() {
        let adult = Citizen::new(130); // no home
        let (store, rngs) = solo_population(vec![adult], 5);
        let mut sim = SimBuilder::new(test_config(2), immortal_rules(1), store, rngs, NoPolicies)
            .build()
            .unwrap();
        let mut stats = LifecycleStats::new();
        sim.run(&mut stats).unwrap();
        assert_eq!(stats.total_offers(), 0);
        assert_eq!(sim.store.get(CitizenId(0)).unwrap().unemployed_ticks, 2);
    }
}
