//! Simulation observer trait for event reporting and data collection.
//!
//! The engine itself returns plain outcome values; the sim translates them
//! into observer callbacks so statistics, event logs, and host notifications
//! all hang off one seam.  Logging toggles live in the observer
//! implementations (see `lc-output`), not in the engine.

use lc_core::{CitizenId, Tick, UnitId};
use lc_engine::{ExitCause, Offer};

/// A citizen died this tick.
#[derive(Clone, Debug)]
pub struct DeathEvent {
    pub citizen: CitizenId,
    /// Age at death, in ticks.
    pub age: u32,
    pub unit: UnitId,
    /// The record was removed immediately (vanishing corpse).
    pub vanished: bool,
    /// Children released by orphan cleanup.
    pub orphans_released: usize,
}

/// A citizen fell sick this tick.
#[derive(Clone, Debug)]
pub struct SicknessEvent {
    pub citizen: CitizenId,
    pub age: u32,
    /// The fixed-point table threshold that fired.
    pub chance_factor: i32,
}

/// A student was force-evicted by the overstay failsafe.
#[derive(Clone, Debug)]
pub struct EvictionEvent {
    pub citizen: CitizenId,
    pub age: u32,
    pub cause: ExitCause,
}

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — death printer
///
/// ```rust,ignore
/// struct DeathPrinter;
///
/// impl LifecycleObserver for DeathPrinter {
///     fn on_death(&mut self, tick: Tick, event: &DeathEvent) {
///         println!("{tick}: citizen {} died at age {}", event.citizen, event.age);
///     }
/// }
/// ```
pub trait LifecycleObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick.  `processed` is the number of citizens
    /// that received an aging step.
    fn on_tick_end(&mut self, _tick: Tick, _processed: usize) {}

    fn on_death(&mut self, _tick: Tick, _event: &DeathEvent) {}

    fn on_sickness(&mut self, _tick: Tick, _event: &SicknessEvent) {}

    /// Failsafe eviction of an overstaying student (boundary-crossing
    /// graduations are not reported here).
    fn on_eviction(&mut self, _tick: Tick, _event: &EvictionEvent) {}

    /// An original inhabitant reached the configured full lifespan.
    fn on_full_lifespan(&mut self, _tick: Tick, _citizen: CitizenId) {}

    /// An offer was emitted towards the external allocator.
    fn on_offer(&mut self, _tick: Tick, _offer: &Offer) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`LifecycleObserver`] that does nothing.  Use when you need to call
/// `run` but don't want callbacks.
pub struct NoopObserver;

impl LifecycleObserver for NoopObserver {}
