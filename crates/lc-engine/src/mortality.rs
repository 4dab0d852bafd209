//! The per-tick aging decision: boundaries, eviction failsafe, milestones,
//! and the death/sickness rolls.
//!
//! Everything here is the **decide** half of the tick — pure over one citizen
//! record and its RNG, no mutation.  The resulting [`AgeOutcome`] is committed
//! by `LifecycleEngine::apply_age`.

use lc_citizen::{Citizen, SchoolLevel};
use lc_core::CitizenRng;

use crate::config::CalcMode;
use crate::rules::LifecycleRules;
use crate::stage::{decade_index, Stage};
use crate::tables::PROB_SCALE;

// ── Outcome types ─────────────────────────────────────────────────────────────

/// Why a citizen is leaving their current school/work placement this tick.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ExitCause {
    /// Crossed a configured age-band boundary (graduation or retirement).
    Boundary,
    /// Eviction failsafe: stayed enrolled past the band for this school tier.
    Overstay(SchoolLevel),
    /// Adult-student rotation: adults may enrol at any age and the host keeps
    /// no enrolment date, so they are rotated out on a fixed age cadence.
    AdultRotation,
}

/// Death resolution decided for this tick.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct DeathOutcome {
    /// `true`: the corpse vanishes and the record is removed immediately.
    /// `false`: the record stays, marked dead, for deathcare to collect.
    pub vanish: bool,
}

/// Everything `decide_age` concluded about one citizen's tick.
#[derive(Clone, Debug)]
pub struct AgeOutcome {
    pub new_age: u32,
    pub stage_exit: Option<ExitCause>,
    /// Original inhabitant reached the configured full lifespan this tick.
    pub full_lifespan: bool,
    /// `Some(new_age)` for original inhabitants — input to the
    /// oldest-original-resident high-water mark.
    pub original_age: Option<u32>,
    /// Sickness roll fired; carries the table threshold that fired (for
    /// event logs).  Applying it is idempotent — sickness does not compound.
    pub sickness: Option<i32>,
    pub death: Option<DeathOutcome>,
}

/// What `process_aging` reports back to the host scheduler.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct TickResult {
    /// The citizen record was removed this tick (vanishing corpse).
    pub removed: bool,
}

// ── Decision procedure ────────────────────────────────────────────────────────

/// Decide one citizen's aging tick.  Returns `None` for citizens already
/// dead — they never age and never roll again.
pub(crate) fn decide(
    rules: &LifecycleRules,
    citizen: &Citizen,
    rng: &mut CitizenRng,
) -> Option<AgeOutcome> {
    if citizen.dead {
        return None;
    }

    let cfg = rules.config();
    let bands = rules.bands();
    let new_age = citizen.age + 1;

    // ── Stage boundaries and the eviction failsafe ────────────────────────
    let mut stage_exit = None;
    if new_age <= bands.young_start {
        // Children and teenagers finish school at their band boundary.
        if new_age == bands.teen_start || new_age == bands.young_start {
            stage_exit = Some(ExitCause::Boundary);
        }
    } else if new_age == bands.adult_start || new_age >= bands.retirement {
        // Young adults finish university; adults retire.
        stage_exit = Some(ExitCause::Boundary);
    } else if let Some(level) = citizen.attending {
        // Failsafe: evict students who overstayed their tier for any reason.
        stage_exit = if bands.classify(citizen.age) == Stage::Adult {
            // Adults can enrol at any time and the enrolment tick is not
            // recorded, so give them at least one average tier length and
            // rotate them out on that cadence.
            let rotation = bands.average_school_length();
            (rotation > 0 && new_age % rotation == 0).then_some(ExitCause::AdultRotation)
        } else if new_age > bands.adult_start && level == SchoolLevel::University {
            Some(ExitCause::Overstay(level))
        } else if new_age > bands.young_start && level == SchoolLevel::HighSchool {
            Some(ExitCause::Overstay(level))
        } else if new_age > bands.teen_start && level == SchoolLevel::Elementary {
            Some(ExitCause::Overstay(level))
        } else {
            None
        };
    }

    // ── Milestones for original inhabitants ───────────────────────────────
    let original_age = citizen.original.then_some(new_age);
    let full_lifespan = citizen.original && new_age == cfg.full_lifespan_age;

    // ── Death and sickness rolls ──────────────────────────────────────────
    // Citizens currently between locations or inside a vehicle are protected
    // from this tick's roll.
    let (death, sickness) = if citizen.in_transit() {
        (None, None)
    } else {
        match cfg.calc_mode {
            CalcMode::Vanilla => (roll_vanilla(rules, citizen, new_age, rng), None),
            CalcMode::Custom => roll_custom(rules, citizen, new_age, rng),
        }
    };

    Some(AgeOutcome {
        new_age,
        stage_exit,
        full_lifespan,
        original_age,
        sickness,
        death,
    })
}

/// Stock age-window calculation: low health shifts the death window earlier;
/// inside the window, death when a uniform draw lands at or below the new
/// age, or with a flat 3-in-2000 surprise chance.
fn roll_vanilla(
    rules: &LifecycleRules,
    citizen: &Citizen,
    new_age: u32,
    rng: &mut CitizenRng,
) -> Option<DeathOutcome> {
    let mut window_start: i32 = 240;
    let mut window_end: i32 = 255;
    let shift = (145 - (100 - citizen.health as i32) * 3).max(0);
    if shift != 0 {
        window_start += shift / 3;
        window_end += shift;
    }

    if (new_age as i32) < window_start {
        return None;
    }

    let surprise = rng.gen_range(0..2000) < 3;
    let draw = rng.gen_range(window_start * 100..window_end * 100) / 100;
    let died = draw <= new_age as i32 || surprise;
    died.then(|| DeathOutcome { vanish: roll_vanish(rules, rng) })
}

/// Decade-table calculation: health and wellbeing widen the draw range
/// (90%–110% of scale), the decade's threshold stays fixed, so fit citizens
/// die less often.  An age beyond the hard cap dies unconditionally.
fn roll_custom(
    rules: &LifecycleRules,
    citizen: &Citizen,
    new_age: u32,
    rng: &mut CitizenRng,
) -> (Option<DeathOutcome>, Option<i32>) {
    let cfg = rules.config();
    let tables = rules.tables();
    let idx = decade_index(new_age, cfg.decade_factor);

    let modifier = (PROB_SCALE + 150 * citizen.health as i32 + 50 * citizen.wellbeing as i32
        - 10_000)
        .max(1);

    let died = rng.gen_range(0..modifier) < tables.survival[idx] || new_age > cfg.max_age;
    if died {
        return (Some(DeathOutcome { vanish: roll_vanish(rules, rng) }), None);
    }

    let threshold = tables.sickness[idx];
    let sickness = (rng.gen_range(0..modifier) < threshold).then_some(threshold);
    (None, sickness)
}

/// The corpse vanishes (record removed immediately) with probability
/// `(100 − auto_dead_removal_chance)%`; otherwise deathcare collects it.
fn roll_vanish(rules: &LifecycleRules, rng: &mut CitizenRng) -> bool {
    rng.draw(100) >= rules.config().auto_dead_removal_chance
}
