//! `lc-engine` — the citizen lifecycle decision engine.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`tables`]    | Fixed-point probability tables (survival/sickness/emigration) |
//! | [`stage`]     | `Stage` classifier, `AgeBands`, decade indexing               |
//! | [`config`]    | `LifecycleConfig` snapshot + validation                       |
//! | [`rules`]     | `LifecycleRules` — validated config + derived tables          |
//! | [`offer`]     | `Offer`/`OfferReason`, `PolicyProvider` seam                  |
//! | [`mortality`] | Per-tick aging/death/sickness decision (`AgeOutcome`)         |
//! | [`engine`]    | `LifecycleEngine` — decide/apply entry points                 |
//! | [`error`]     | `ConfigError`, `LifecycleError`                               |
//!
//! # Design notes
//!
//! The per-tick work is split into a **decide** step and an **apply** step:
//!
//! 1. **Decide** (parallel-safe): [`LifecycleEngine::decide_age`] reads one
//!    citizen record and its own RNG and produces an [`mortality::AgeOutcome`]
//!    — no mutation anywhere.
//! 2. **Apply** (sequential): [`LifecycleEngine::apply_age`] commits the
//!    outcome to the population store — age, sickness, graduation, death,
//!    orphan cleanup, corpse removal.
//!
//! This split lets the tick loop in `lc-sim` fan decisions out across threads
//! while household mutation stays an atomic read-modify-write per unit.
//! [`LifecycleEngine::process_aging`] runs both steps for one citizen — the
//! entry point for hosts that drive citizens one at a time.
//!
//! All entry points take explicit parameters (clockless, no globals): the
//! citizen's RNG, the policy seam, and the store are arguments, never ambient
//! state.

pub mod config;
pub mod engine;
pub mod error;
pub mod mortality;
pub mod offer;
pub mod rules;
pub mod stage;
pub mod tables;


#[cfg(test)]
mod property_tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{CalcMode, LifecycleConfig};
pub use engine::{AgeApplied, LifecycleEngine};
pub use error::{ConfigError, LifecycleError, LifecycleResult};
pub use mortality::{AgeOutcome, DeathOutcome, ExitCause, TickResult};
pub use offer::{DistrictPolicies, NoPolicies, Offer, OfferReason, PolicyProvider};
pub use rules::LifecycleRules;
pub use stage::{decade_index, AgeBands, Stage};
pub use tables::{build_table, ProbabilityTables, DECADES, PROB_SCALE};
