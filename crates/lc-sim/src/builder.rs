//! Fluent builder for constructing a [`Sim`].

use lc_citizen::{CitizenRngs, PopulationStore};
use lc_core::{SimClock, SimConfig};
use lc_engine::{LifecycleEngine, LifecycleRules, PolicyProvider};

use crate::{Sim, SimError, SimResult};

/// Builder for [`Sim<P>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — total ticks, seed, thread count
/// - [`LifecycleRules`] — validated lifecycle configuration + tables
/// - [`PopulationStore`] + [`CitizenRngs`] — from
///   [`lc_citizen::PopulationBuilder`]
/// - `P: PolicyProvider` — the district policy / position seam
///
/// # Example
///
/// ```rust,ignore
/// let (store, rngs) = population.build();
/// let mut sim = SimBuilder::new(config, rules, store, rngs, NoPolicies).build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<P: PolicyProvider> {
    config: SimConfig,
    rules:  LifecycleRules,
    store:  PopulationStore,
    rngs:   CitizenRngs,
    policy: P,
}

impl<P: PolicyProvider> SimBuilder<P> {
    pub fn new(
        config: SimConfig,
        rules:  LifecycleRules,
        store:  PopulationStore,
        rngs:   CitizenRngs,
        policy: P,
    ) -> Self {
        Self { config, rules, store, rngs, policy }
    }

    /// Validate counts and construct the [`Sim`].
    pub fn build(self) -> SimResult<Sim<P>> {
        if self.rngs.len() != self.store.capacity() {
            return Err(SimError::CitizenCountMismatch {
                expected: self.store.capacity(),
                got:      self.rngs.len(),
                what:     "citizen RNGs",
            });
        }

        Ok(Sim {
            config: self.config,
            clock: SimClock::new(),
            engine: LifecycleEngine::new(self.rules),
            store: self.store,
            rngs: self.rngs,
            policy: self.policy,
            oldest_original: 0,
        })
    }
}
