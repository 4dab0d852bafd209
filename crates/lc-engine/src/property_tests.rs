//! Property tests for tables, classification, and configuration validation.

use proptest::prelude::*;

use crate::{build_table, decade_index, LifecycleConfig, LifecycleRules, DECADES, PROB_SCALE};

fn raw_table_strategy() -> impl Strategy<Value = [f64; DECADES]> {
    prop::array::uniform11(0.0f64..=1.0)
}

proptest! {
    #[test]
    fn build_table_stays_in_fixed_point_range(raw in raw_table_strategy()) {
        let table = build_table(&raw);
        for (i, &entry) in table.iter().enumerate() {
            prop_assert!((0..=PROB_SCALE).contains(&entry), "slot {i} = {entry}");
        }
    }

    #[test]
    fn build_table_rounds_each_slot(raw in raw_table_strategy()) {
        let table = build_table(&raw);
        for (i, (&entry, &p)) in table.iter().zip(raw.iter()).enumerate() {
            let expected = (p * PROB_SCALE as f64).round() as i32;
            prop_assert_eq!(entry, expected, "slot {}", i);
        }
    }

    #[test]
    fn build_table_monotone_in_probability(p1 in 0.0f64..=1.0, p2 in 0.0f64..=1.0) {
        let (lo, hi) = if p1 <= p2 { (p1, p2) } else { (p2, p1) };
        let t_lo = build_table(&[lo; DECADES]);
        let t_hi = build_table(&[hi; DECADES]);
        prop_assert!(t_lo[0] <= t_hi[0]);
    }

    #[test]
    fn sentinel_probabilities_saturate(p in 1.0f64..=1000.0) {
        let table = build_table(&[p; DECADES]);
        prop_assert_eq!(table[0], PROB_SCALE);
    }

    #[test]
    fn decade_index_bounded_and_monotone(age in 0u32..=10_000, factor in 0.001f64..=1.0) {
        let idx = decade_index(age, factor);
        prop_assert!(idx <= 10);
        let next = decade_index(age + 1, factor);
        prop_assert!(next >= idx);
    }

    #[test]
    fn every_age_classifies_to_exactly_one_stage(age in 0u32..=100_000) {
        let bands = LifecycleConfig::default().bands;
        // classify is total; consecutive ages never skip backwards.
        let here = bands.classify(age);
        let next = bands.classify(age + 1);
        prop_assert!(next >= here);
    }

    #[test]
    fn shuffled_age_bands_never_validate(shift in 1u32..=200) {
        let mut cfg = LifecycleConfig::default();
        // Push retirement below adult start: always invalid.
        cfg.bands.retirement = cfg.bands.adult_start.saturating_sub(shift);
        prop_assert!(LifecycleRules::new(cfg).is_err());
    }

    #[test]
    fn valid_configs_derive_consistent_tables(raw in raw_table_strategy()) {
        let cfg = LifecycleConfig { survival_raw: raw, ..LifecycleConfig::default() };
        let rules = LifecycleRules::new(cfg).unwrap();
        for (slot, &p) in rules.tables().survival.iter().zip(raw.iter()) {
            let expected = ((1.0 - p) * PROB_SCALE as f64).round() as i32;
            prop_assert_eq!(*slot, expected);
        }
    }
}
