//! `LifecycleStats` — an observer that tallies lifecycle events.

use lc_core::{CitizenId, Tick};
use lc_engine::{Offer, OfferReason};
use rustc_hash::FxHashMap;

use crate::observer::{DeathEvent, EvictionEvent, LifecycleObserver, SicknessEvent};

/// Running counters over a simulation, collected through the observer seam.
#[derive(Default, Debug)]
pub struct LifecycleStats {
    pub ticks: u64,
    pub processed: u64,
    pub deaths: u64,
    /// Deaths whose record vanished immediately.
    pub vanished_corpses: u64,
    pub orphans_released: u64,
    pub sicknesses: u64,
    pub evictions: u64,
    pub full_lifespans: u64,
    offers: FxHashMap<OfferReason, u64>,
}

impl LifecycleStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offers emitted for one reason.
    pub fn offers_for(&self, reason: OfferReason) -> u64 {
        self.offers.get(&reason).copied().unwrap_or(0)
    }

    /// Total offers emitted across all reasons.
    pub fn total_offers(&self) -> u64 {
        self.offers.values().sum()
    }
}

impl LifecycleObserver for LifecycleStats {
    fn on_tick_end(&mut self, _tick: Tick, processed: usize) {
        self.ticks += 1;
        self.processed += processed as u64;
    }

    fn on_death(&mut self, _tick: Tick, event: &DeathEvent) {
        self.deaths += 1;
        if event.vanished {
            self.vanished_corpses += 1;
        }
        self.orphans_released += event.orphans_released as u64;
    }

    fn on_sickness(&mut self, _tick: Tick, _event: &SicknessEvent) {
        self.sicknesses += 1;
    }

    fn on_eviction(&mut self, _tick: Tick, _event: &EvictionEvent) {
        self.evictions += 1;
    }

    fn on_full_lifespan(&mut self, _tick: Tick, _citizen: CitizenId) {
        self.full_lifespans += 1;
    }

    fn on_offer(&mut self, _tick: Tick, offer: &Offer) {
        *self.offers.entry(offer.reason).or_insert(0) += 1;
    }
}
