//! CSV event-log backend.
//!
//! Creates three files in the configured output directory:
//! - `deaths.csv`
//! - `sickness.csv`
//! - `evictions.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::EventWriter;
use crate::{DeathRow, EvictionRow, OutputResult, SicknessRow};

/// Writes lifecycle events to three CSV files.
pub struct CsvEventLog {
    deaths: Writer<File>,
    sickness: Writer<File>,
    evictions: Writer<File>,
    finished: bool,
}

impl CsvEventLog {
    /// Open (or create) the three CSV files in `dir` and write header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut deaths = Writer::from_path(dir.join("deaths.csv"))?;
        deaths.write_record([
            "tick",
            "citizen",
            "age",
            "age_years",
            "unit",
            "vanished",
            "orphans_released",
        ])?;

        let mut sickness = Writer::from_path(dir.join("sickness.csv"))?;
        sickness.write_record(["tick", "citizen", "age", "chance_factor"])?;

        let mut evictions = Writer::from_path(dir.join("evictions.csv"))?;
        evictions.write_record(["tick", "citizen", "age", "cause"])?;

        Ok(Self {
            deaths,
            sickness,
            evictions,
            finished: false,
        })
    }
}

impl EventWriter for CsvEventLog {
    fn write_death(&mut self, row: &DeathRow) -> OutputResult<()> {
        self.deaths.write_record(&[
            row.tick.to_string(),
            row.citizen.to_string(),
            row.age.to_string(),
            row.age_years.to_string(),
            row.unit.to_string(),
            (row.vanished as u8).to_string(),
            row.orphans_released.to_string(),
        ])?;
        Ok(())
    }

    fn write_sickness(&mut self, row: &SicknessRow) -> OutputResult<()> {
        self.sickness.write_record(&[
            row.tick.to_string(),
            row.citizen.to_string(),
            row.age.to_string(),
            row.chance_factor.to_string(),
        ])?;
        Ok(())
    }

    fn write_eviction(&mut self, row: &EvictionRow) -> OutputResult<()> {
        self.evictions.write_record(&[
            row.tick.to_string(),
            row.citizen.to_string(),
            row.age.to_string(),
            row.cause.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.deaths.flush()?;
        self.sickness.flush()?;
        self.evictions.flush()?;
        Ok(())
    }
}
