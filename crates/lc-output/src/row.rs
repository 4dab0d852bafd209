//! Plain data row types written by event-log backends.

/// One citizen death.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeathRow {
    pub tick: u64,
    pub citizen: u32,
    /// Age at death, in ticks.
    pub age: u32,
    /// Age at death, in displayed years.
    pub age_years: u32,
    pub unit: u32,
    /// The record vanished immediately instead of awaiting deathcare.
    pub vanished: bool,
    /// Children released by orphan cleanup following this death.
    pub orphans_released: u32,
}

/// One citizen falling sick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SicknessRow {
    pub tick: u64,
    pub citizen: u32,
    pub age: u32,
    /// The fixed-point table threshold that fired.
    pub chance_factor: i32,
}

/// One student force-evicted by the overstay failsafe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvictionRow {
    pub tick: u64,
    pub citizen: u32,
    pub age: u32,
    /// Which failsafe fired, e.g. `overstay-elementary` or `adult-rotation`.
    pub cause: &'static str,
}
