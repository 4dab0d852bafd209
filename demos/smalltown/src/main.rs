//! smalltown — smallest end-to-end demo for the rust_lc lifecycle framework.
//!
//! Seeds a few hundred households, runs the lifecycle engine for a couple of
//! in-game generations, and prints the resulting statistics.  Swap the
//! constants for a real host population to run at city scale.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use lc_citizen::{Citizen, PopulationBuilder};
use lc_core::{BuildingId, Position, SimConfig, SimRng};
use lc_engine::{
    DistrictPolicies, LifecycleConfig, LifecycleRules, OfferReason, PolicyProvider,
};
use lc_output::{CsvEventLog, EventLogObserver, LogToggles};
use lc_sim::{LifecycleStats, SimBuilder};

// ── Constants ─────────────────────────────────────────────────────────────────

const HOUSEHOLDS: u32 = 150;
const SEED: u64 = 42;
const TOTAL_TICKS: u64 = 600;

// ── District policies ─────────────────────────────────────────────────────────

/// Deterministic toy districts: every third building enjoys the education
/// boost, every seventh suffers schools-out.  Positions fall on a street grid.
struct GridDistricts;

impl PolicyProvider for GridDistricts {
    fn policies(&self, home: BuildingId) -> DistrictPolicies {
        DistrictPolicies {
            education_boost: home.0 % 3 == 0,
            schools_out: home.0 % 7 == 0,
        }
    }

    fn position(&self, home: BuildingId) -> Position {
        Position::new((home.0 % 10) as f32 * 80.0, (home.0 / 10) as f32 * 80.0)
    }
}

// ── Population seeding ────────────────────────────────────────────────────────

fn seed_citizen(rng: &mut SimRng, age: u32, home: BuildingId) -> Citizen {
    let mut c = Citizen::new(age);
    c.health = rng.gen_range(60..=100);
    c.wellbeing = rng.gen_range(50..=100);
    c.original = true;
    c.home = Some(home);
    c
}

fn main() -> Result<()> {
    println!("smalltown — rust_lc demo\n");

    // 1. Lifecycle rules (default tuning, custom mortality mode).
    let lifecycle = LifecycleConfig::default();
    let bands = lifecycle.bands;
    let rules = LifecycleRules::new(lifecycle)?;

    // 2. Seed households: two adults plus 0–3 children each.
    let mut seeder = SimRng::new(SEED);
    let mut population = PopulationBuilder::new(SEED);
    for h in 0..HOUSEHOLDS {
        let home = BuildingId(h);
        let mut adults = Vec::with_capacity(2);
        for _ in 0..2 {
            let age = seeder.gen_range(bands.adult_start..240);
            adults.push(seed_citizen(&mut seeder, age, home));
        }
        let mut children = Vec::new();
        for _ in 0..seeder.gen_range(0..=3u32) {
            let age = seeder.gen_range(0..bands.teen_start);
            children.push(seed_citizen(&mut seeder, age, home));
        }
        population.add_household(adults, children)?;
    }
    let citizen_count = population.citizen_count();
    let (store, rngs) = population.build();
    println!("Seeded {citizen_count} citizens in {HOUSEHOLDS} households");

    // 3. Sim configuration.
    let config = SimConfig {
        total_ticks: TOTAL_TICKS,
        seed: SEED,
        num_threads: Some(1),
    };
    println!("Running {TOTAL_TICKS} ticks\n");

    // 4. Build sim.
    let mut sim = SimBuilder::new(config, rules, store, rngs, GridDistricts).build()?;

    // 5. Event logs + statistics.
    std::fs::create_dir_all("output/smalltown")?;
    let writer = CsvEventLog::new(Path::new("output/smalltown"))?;
    let lifecycle_config = sim.engine.rules().config().clone();
    let mut logs = EventLogObserver::new(writer, LogToggles::all(), &lifecycle_config);
    let mut stats = LifecycleStats::new();

    // 6. Run with statistics and event logs fanned out from one observer.
    let t0 = Instant::now();
    sim.run(&mut Tee(&mut stats, &mut logs))?;
    let elapsed = t0.elapsed();

    if let Some(e) = logs.take_error() {
        eprintln!("event log error: {e}");
    }

    // 7. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  citizens processed : {}", stats.processed);
    println!("  deaths             : {}", stats.deaths);
    println!("  vanished corpses   : {}", stats.vanished_corpses);
    println!("  orphans released   : {}", stats.orphans_released);
    println!("  sickness events    : {}", stats.sicknesses);
    println!("  student evictions  : {}", stats.evictions);
    println!("  full lifespans     : {}", stats.full_lifespans);
    println!("  oldest original    : {} ticks", sim.oldest_original);
    println!("  still alive        : {}", sim.store.alive_count());
    println!();

    // 8. Offers by reason.
    println!("{:<12} {:>8}", "Offer", "Count");
    println!("{}", "-".repeat(21));
    let reasons = [
        OfferReason::Student1,
        OfferReason::Student2,
        OfferReason::Student3,
        OfferReason::Worker0,
        OfferReason::Worker1,
        OfferReason::Worker2,
        OfferReason::Worker3,
    ];
    for reason in reasons {
        println!("{:<12} {:>8}", reason.to_string(), stats.offers_for(reason));
    }
    println!("{:<12} {:>8}", "total", stats.total_offers());

    Ok(())
}

// ── Observer fan-out ──────────────────────────────────────────────────────────

/// Forwards every observer callback to two observers.
struct Tee<'a, A, B>(&'a mut A, &'a mut B);

impl<A: lc_sim::LifecycleObserver, B: lc_sim::LifecycleObserver> lc_sim::LifecycleObserver
    for Tee<'_, A, B>
{
    fn on_tick_start(&mut self, tick: lc_core::Tick) {
        self.0.on_tick_start(tick);
        self.1.on_tick_start(tick);
    }
    fn on_tick_end(&mut self, tick: lc_core::Tick, processed: usize) {
        self.0.on_tick_end(tick, processed);
        self.1.on_tick_end(tick, processed);
    }
    fn on_death(&mut self, tick: lc_core::Tick, event: &lc_sim::DeathEvent) {
        self.0.on_death(tick, event);
        self.1.on_death(tick, event);
    }
    fn on_sickness(&mut self, tick: lc_core::Tick, event: &lc_sim::SicknessEvent) {
        self.0.on_sickness(tick, event);
        self.1.on_sickness(tick, event);
    }
    fn on_eviction(&mut self, tick: lc_core::Tick, event: &lc_sim::EvictionEvent) {
        self.0.on_eviction(tick, event);
        self.1.on_eviction(tick, event);
    }
    fn on_full_lifespan(&mut self, tick: lc_core::Tick, citizen: lc_core::CitizenId) {
        self.0.on_full_lifespan(tick, citizen);
        self.1.on_full_lifespan(tick, citizen);
    }
    fn on_offer(&mut self, tick: lc_core::Tick, offer: &lc_engine::Offer) {
        self.0.on_offer(tick, offer);
        self.1.on_offer(tick, offer);
    }
    fn on_sim_end(&mut self, final_tick: lc_core::Tick) {
        self.0.on_sim_end(final_tick);
        self.1.on_sim_end(final_tick);
    }
}
