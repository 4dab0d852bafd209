//! Framework error type.
//!
//! Sub-crates may define their own error enums and convert them into `LcError`
//! via `From` impls, or keep them separate and wrap `LcError` as one variant.
//! Both patterns are acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

use crate::{CitizenId, UnitId};

/// The top-level error type for `lc-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum LcError {
    #[error("citizen {0} not found")]
    CitizenNotFound(CitizenId),

    #[error("household unit {unit} has no free {kind} slot")]
    HouseholdFull { unit: UnitId, kind: &'static str },
}

/// Shorthand result type for all `lc-*` crates.
pub type LcResult<T> = Result<T, LcError>;
