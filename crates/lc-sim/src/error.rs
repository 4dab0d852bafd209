use lc_engine::LifecycleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("{what} length {got} does not match citizen capacity {expected}")]
    CitizenCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("lifecycle error: {0}")]
    Lifecycle(#[from] LifecycleError),
}

pub type SimResult<T> = Result<T, SimError>;
