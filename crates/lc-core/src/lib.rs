//! `lc-core` — foundational types for the `rust_lc` citizen lifecycle framework.
//!
//! This crate is a dependency of every other `lc-*` crate.  It intentionally
//! has no `lc-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                         |
//! |--------------|--------------------------------------------------|
//! | [`ids`]      | `CitizenId`, `UnitId`, `BuildingId`              |
//! | [`time`]     | `Tick`, `SimClock`, `SimConfig`                  |
//! | [`rng`]      | `CitizenRng` (per-citizen), `SimRng` (global)    |
//! | [`position`] | `Position` — opaque world coordinates            |
//! | [`error`]    | `LcError`, `LcResult`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod ids;
pub mod position;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{LcError, LcResult};
pub use ids::{BuildingId, CitizenId, UnitId};
pub use position::Position;
pub use rng::{CitizenRng, SimRng};
pub use time::{SimClock, SimConfig, Tick};
