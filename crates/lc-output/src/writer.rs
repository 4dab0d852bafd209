//! The `EventWriter` trait implemented by event-log backends.

use crate::{DeathRow, EvictionRow, OutputResult, SicknessRow};

/// Trait implemented by event-log backends (CSV today).
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`EventLogObserver::take_error`][crate::EventLogObserver::take_error].
pub trait EventWriter {
    fn write_death(&mut self, row: &DeathRow) -> OutputResult<()>;

    fn write_sickness(&mut self, row: &SicknessRow) -> OutputResult<()>;

    fn write_eviction(&mut self, row: &EvictionRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
