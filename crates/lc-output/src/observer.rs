//! `EventLogObserver<W>` — bridges `LifecycleObserver` to an `EventWriter`.

use lc_core::Tick;
use lc_engine::{ExitCause, LifecycleConfig};
use lc_citizen::SchoolLevel;
use lc_sim::{DeathEvent, EvictionEvent, LifecycleObserver, SicknessEvent};

use crate::row::{DeathRow, EvictionRow, SicknessRow};
use crate::writer::EventWriter;
use crate::OutputError;

/// Which event categories are written.  Mirrors the host's per-log switches.
#[derive(Copy, Clone, Debug, Default)]
pub struct LogToggles {
    pub deaths: bool,
    pub sickness: bool,
    pub evictions: bool,
}

impl LogToggles {
    pub fn all() -> Self {
        Self { deaths: true, sickness: true, evictions: true }
    }
}

/// A [`LifecycleObserver`] that writes lifecycle events to any
/// [`EventWriter`] backend.
///
/// Errors from the writer are stored internally because observer methods have
/// no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct EventLogObserver<W: EventWriter> {
    writer: W,
    toggles: LogToggles,
    age_per_year: f64,
    last_error: Option<OutputError>,
}

impl<W: EventWriter> EventLogObserver<W> {
    /// Create an observer backed by `writer`; `config` supplies the
    /// age-to-years conversion used in death rows.
    pub fn new(writer: W, toggles: LogToggles, config: &LifecycleConfig) -> Self {
        Self {
            writer,
            toggles,
            age_per_year: config.age_per_year,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn age_years(&self, age: u32) -> u32 {
        (age as f64 / self.age_per_year) as u32
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

/// Stable log label for an eviction cause.
fn cause_label(cause: ExitCause) -> &'static str {
    match cause {
        ExitCause::Boundary => "boundary",
        ExitCause::Overstay(SchoolLevel::Elementary) => "overstay-elementary",
        ExitCause::Overstay(SchoolLevel::HighSchool) => "overstay-high-school",
        ExitCause::Overstay(SchoolLevel::University) => "overstay-university",
        ExitCause::AdultRotation => "adult-rotation",
    }
}

impl<W: EventWriter> LifecycleObserver for EventLogObserver<W> {
    fn on_death(&mut self, tick: Tick, event: &DeathEvent) {
        if !self.toggles.deaths {
            return;
        }
        let row = DeathRow {
            tick: tick.0,
            citizen: event.citizen.0,
            age: event.age,
            age_years: self.age_years(event.age),
            unit: event.unit.0,
            vanished: event.vanished,
            orphans_released: event.orphans_released as u32,
        };
        let result = self.writer.write_death(&row);
        self.store_err(result);
    }

    fn on_sickness(&mut self, tick: Tick, event: &SicknessEvent) {
        if !self.toggles.sickness {
            return;
        }
        let row = SicknessRow {
            tick: tick.0,
            citizen: event.citizen.0,
            age: event.age,
            chance_factor: event.chance_factor,
        };
        let result = self.writer.write_sickness(&row);
        self.store_err(result);
    }

    fn on_eviction(&mut self, tick: Tick, event: &EvictionEvent) {
        if !self.toggles.evictions {
            return;
        }
        let row = EvictionRow {
            tick: tick.0,
            citizen: event.citizen.0,
            age: event.age,
            cause: cause_label(event.cause),
        };
        let result = self.writer.write_eviction(&row);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
