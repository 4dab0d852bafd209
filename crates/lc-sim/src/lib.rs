//! `lc-sim` — tick loop orchestrator for the rust_lc framework.
//!
//! # Two-phase tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Eligibility — ascending scan for alive citizens with
//!                    id % life_span_multiplier == clock.phase(multiplier).
//!   ② Decide      — LifecycleEngine::decide_age per eligible citizen
//!                    (parallel with the `parallel` feature).
//!   ③ Apply       — sequential, ascending CitizenId: commit ages, deaths,
//!                    orphan cleanup, corpse removal; observer events fire.
//!   ④ Placement   — sequential: unemployed, unenrolled citizens with a home
//!                    emit at most one school/job offer each.
//! ```
//!
//! Sequential application in ascending ID order makes results deterministic
//! even when the decide phase ran in parallel, and makes household mutation
//! an atomic read-modify-write per unit — two members of one household dying
//! in the same tick cannot double-release a child slot.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lc_citizen::PopulationBuilder;
//! use lc_engine::{LifecycleRules, NoPolicies};
//! use lc_sim::{NoopObserver, SimBuilder};
//!
//! let (store, rngs) = builder.build();
//! let mut sim = SimBuilder::new(config, LifecycleRules::default(), store, rngs, NoPolicies)
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod stats;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{DeathEvent, EvictionEvent, LifecycleObserver, NoopObserver, SicknessEvent};
pub use sim::Sim;
pub use stats::LifecycleStats;
