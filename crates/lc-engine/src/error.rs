//! Error types for the lifecycle engine.

use lc_core::{CitizenId, LcError};
use thiserror::Error;

/// Rejected configuration snapshots.  Raised when building `LifecycleRules`;
/// the caller keeps its previous rules on failure.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("life-span multiplier must be at least 1")]
    ZeroMultiplier,

    #[error("decade factor {0} must be finite and positive")]
    InvalidDecadeFactor(f64),

    #[error("age-per-year factor {0} must be finite and positive")]
    InvalidAgePerYear(f64),

    #[error("age bands must be strictly increasing: {lower} >= {upper}")]
    NonIncreasingAgeBands {
        lower: &'static str,
        upper: &'static str,
    },

    #[error("work start age {got} outside [{min}, {max}]")]
    WorkStartOutOfRange { got: u32, min: u32, max: u32 },

    #[error("{name} is {value}%, must be at most 100%")]
    PercentOutOfRange { name: &'static str, value: u32 },

    #[error("{table} probability at decade {index} is {value}, out of range")]
    RawProbabilityOutOfRange {
        table: &'static str,
        index: usize,
        value: f64,
    },

    #[error("full-lifespan age {full} exceeds maximum age {max}")]
    LifespanBeyondMaxAge { full: u32, max: u32 },
}

/// Errors surfaced by the per-citizen entry points.
#[derive(Debug, Error)]
pub enum LifecycleError {
    /// The given ID has no record in the population store — aborts that
    /// citizen's processing without touching shared state.
    #[error("citizen {0} not found in population store")]
    UnknownCitizen(CitizenId),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("population store error: {0}")]
    Store(#[from] LcError),
}

/// Shorthand result type for engine operations.
pub type LifecycleResult<T> = Result<T, LifecycleError>;
