//! `LifecycleEngine` — the host-facing entry points.
//!
//! The engine owns nothing but the validated rules.  Citizen records, RNGs,
//! and the policy lookup are borrowed per call, never retained — two engines
//! over the same store are fine, and the engine is trivially `Send + Sync`.

use lc_citizen::{Citizen, EducationLevel, PopulationStore};
use lc_core::{CitizenId, CitizenRng};

use crate::config::LifecycleConfig;
use crate::error::{ConfigError, LifecycleError, LifecycleResult};
use crate::mortality::{self, AgeOutcome, TickResult};
use crate::offer::{DistrictPolicies, Offer, OfferReason, PolicyProvider};
use crate::rules::LifecycleRules;
use crate::stage::Stage;

/// What `apply_age` actually did to the store, for observers and statistics.
#[derive(Clone, Debug, Default)]
pub struct AgeApplied {
    /// The citizen record was removed (vanishing corpse).
    pub removed: bool,
    /// Children released by orphan cleanup, in slot order.
    pub orphans: Vec<CitizenId>,
}

/// The lifecycle decision engine: aging/mortality plus placement offers.
pub struct LifecycleEngine {
    rules: LifecycleRules,
}

impl LifecycleEngine {
    pub fn new(rules: LifecycleRules) -> Self {
        Self { rules }
    }

    #[inline]
    pub fn rules(&self) -> &LifecycleRules {
        &self.rules
    }

    /// Replace the configuration.  On validation failure the previous rules
    /// stay in force and the error is returned.
    ///
    /// Must not overlap tick processing — the `&mut self` receiver makes
    /// that unrepresentable within one simulation.
    pub fn reconfigure(&mut self, config: LifecycleConfig) -> Result<(), ConfigError> {
        self.rules = LifecycleRules::new(config)?;
        Ok(())
    }

    // ── Aging ─────────────────────────────────────────────────────────────

    /// Decide one citizen's aging tick.  Pure over the citizen record and its
    /// RNG — safe to run for many citizens in parallel.  Returns `None` for
    /// citizens already dead (they never age and never roll again).
    pub fn decide_age(&self, citizen: &Citizen, rng: &mut CitizenRng) -> Option<AgeOutcome> {
        mortality::decide(&self.rules, citizen, rng)
    }

    /// Commit a decided outcome: age, sickness, graduation/retirement, death,
    /// orphan cleanup, and corpse removal.
    ///
    /// Must run sequentially — household cleanup is a read-modify-write on
    /// the unit, and two members of one household can die in the same tick.
    pub fn apply_age(
        &self,
        id: CitizenId,
        outcome: &AgeOutcome,
        store: &mut PopulationStore,
    ) -> LifecycleResult<AgeApplied> {
        let citizen = store
            .get_mut(id)
            .ok_or(LifecycleError::UnknownCitizen(id))?;

        citizen.age = outcome.new_age;
        if outcome.stage_exit.is_some() {
            finish_placement(citizen);
        }
        if outcome.sickness.is_some() {
            citizen.sick = true;
        }

        let mut applied = AgeApplied::default();
        let Some(death) = outcome.death else {
            return Ok(applied);
        };

        citizen.dead = true;
        let unit_id = citizen.unit;

        // Orphan cleanup: if this was the last adult and children remain, the
        // household would end up in simulation purgatory — release every
        // occupied child slot exactly once.
        let orphans = match store.unit_mut(unit_id) {
            Some(unit) if unit.lone_adult(id) && unit.has_children() => unit.take_children(),
            _ => Vec::new(),
        };
        for &child in &orphans {
            store.release_citizen(child)?;
        }
        applied.orphans = orphans;

        if death.vanish {
            store.release_citizen(id)?;
            applied.removed = true;
        }

        Ok(applied)
    }

    /// Decide and apply one citizen's aging tick in a single call — the
    /// entry point for hosts that drive citizens one at a time.
    ///
    /// The caller gates invocation by phase:
    /// `id % life_span_multiplier == clock.phase(multiplier)`.
    pub fn process_aging(
        &self,
        id: CitizenId,
        store: &mut PopulationStore,
        rng: &mut CitizenRng,
    ) -> LifecycleResult<TickResult> {
        let citizen = store.get(id).ok_or(LifecycleError::UnknownCitizen(id))?;
        let Some(outcome) = self.decide_age(citizen, rng) else {
            // Already dead: idempotent no-op.
            return Ok(TickResult::default());
        };
        let applied = self.apply_age(id, &outcome, store)?;
        Ok(TickResult { removed: applied.removed })
    }

    // ── Placement ─────────────────────────────────────────────────────────

    /// Decide whether this citizen requests schooling or work this tick.
    ///
    /// Invoked for citizens that are unemployed, not enrolled, and have a
    /// home.  At most one offer per invocation; a successful education roll
    /// takes priority over work, and work additionally requires the minimum
    /// working age.  Mutates only the shopping-need suppression for young
    /// children.
    pub fn placement_tick(
        &self,
        id: CitizenId,
        citizen: &mut Citizen,
        policy: &impl PolicyProvider,
        rng: &mut CitizenRng,
    ) -> Option<Offer> {
        if citizen.dead || citizen.employed() || citizen.is_student() {
            return None;
        }
        let home = citizen.home?;

        let cfg = self.rules.config();
        let bands = self.rules.bands();
        let age = citizen.age;
        let policies = policy.policies(home);

        let mut education: Option<OfferReason> = None;
        let mut work: Option<OfferReason> = None;

        match bands.classify(age) {
            Stage::Child => {
                if age < bands.school_start {
                    // Below school age: never educated, and no shopping trips.
                    citizen.needs_goods = false;
                    return None;
                }
                if citizen.education == EducationLevel::Uneducated {
                    education = Some(OfferReason::Student1);
                }
            }

            Stage::Teen => {
                // Teens get 3 age ticks from the band start to land a high
                // school seat before falling through to entry-level work.
                let searching = age - bands.teen_start < 3;
                if searching && citizen.education == EducationLevel::OneSchool {
                    let prob = policy_adjusted(cfg.edu_prob_teen, policies, cfg);
                    if rng.draw(100) < prob {
                        education = Some(OfferReason::Student2);
                    }
                }
                if education.is_none() && !searching && age >= bands.work_start {
                    work = Some(OfferReason::Worker1);
                }
            }

            Stage::Young => {
                let searching = age - bands.young_start < 3;
                if searching && citizen.education == EducationLevel::TwoSchools {
                    let prob = policy_adjusted(cfg.edu_prob_young, policies, cfg);
                    if rng.draw(100) < prob {
                        education = Some(OfferReason::Student3);
                    }
                }
                if education.is_none() && !searching && age >= bands.work_start {
                    work = Some(OfferReason::Worker2);
                }
            }

            Stage::Adult => {
                work = Some(OfferReason::worker_for(citizen.education));

                // Long-unemployed adults try to raise their education, scaled
                // up by how much is missing.  Policies do not apply: adult
                // motivation is internal unemployment, not governance.
                if citizen.unemployed_ticks > cfg.unemployment_threshold {
                    if let Some(next) = citizen.education.next_school() {
                        let mut prob = cfg.edu_prob_adult;
                        match citizen.education {
                            EducationLevel::Uneducated => prob *= 4,
                            EducationLevel::OneSchool => prob *= 2,
                            _ => {}
                        }
                        if rng.draw(100) < prob {
                            education = Some(OfferReason::seeking(next));
                        }
                    }
                }
            }

            Stage::Senior => return None,
        }

        // Education wins; work needs the minimum working age (failsafe so
        // children never go to work).
        let reason = education.or(work.filter(|_| age >= bands.work_start))?;
        Some(Offer {
            reason,
            citizen: id,
            position: policy.position(home),
            priority: rng.draw(8) as u8,
            amount: 1,
        })
    }

    // ── Fertility ─────────────────────────────────────────────────────────

    /// Whether this citizen can currently have children: alive, female (the
    /// host derives gender from ID parity — even IDs are female), of adult
    /// stage, and not in the middle of moving in.  Exposed for the host's
    /// family-formation logic; not used by the tick loop.
    pub fn can_have_children(&self, id: CitizenId, citizen: &Citizen) -> bool {
        !citizen.dead
            && id.0 % 2 == 0
            && self.rules.bands().classify(citizen.age) == Stage::Adult
            && !citizen.moving_in
    }
}

/// Apply the active district policy multipliers to an education probability.
fn policy_adjusted(base: u32, policies: DistrictPolicies, cfg: &LifecycleConfig) -> u32 {
    let mut prob = base;
    if policies.education_boost {
        prob = prob * cfg.factor_education_boost / 100;
    }
    if policies.schools_out {
        prob = prob * cfg.factor_schools_out / 100;
    }
    prob
}

/// Leave the current placement: students graduate (education advances to the
/// tier just completed, monotonically), workers leave their job.
fn finish_placement(citizen: &mut Citizen) {
    if let Some(level) = citizen.attending.take() {
        citizen.advance_education(level.grants());
    } else {
        citizen.workplace = None;
    }
}
