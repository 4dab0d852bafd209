//! `lc-output` — lifecycle event logs for the rust_lc framework.
//!
//! Deaths, sicknesses, and student evictions can each be logged to their own
//! CSV file, toggleable per category:
//!
//! | File            | Row type       |
//! |-----------------|----------------|
//! | `deaths.csv`    | [`DeathRow`]   |
//! | `sickness.csv`  | [`SicknessRow`]|
//! | `evictions.csv` | [`EvictionRow`]|
//!
//! The backend implements [`EventWriter`] and is driven by
//! [`EventLogObserver`], which implements `lc_sim::LifecycleObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lc_output::{CsvEventLog, EventLogObserver, LogToggles};
//!
//! let writer = CsvEventLog::new(Path::new("./output")).unwrap();
//! let mut obs = EventLogObserver::new(writer, LogToggles::all(), engine.rules().config());
//! sim.run(&mut obs).unwrap();
//! obs.take_error().map(|e| eprintln!("event log error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use crate::csv::CsvEventLog;
pub use error::{OutputError, OutputResult};
pub use observer::{EventLogObserver, LogToggles};
pub use row::{DeathRow, EvictionRow, SicknessRow};
pub use writer::EventWriter;
