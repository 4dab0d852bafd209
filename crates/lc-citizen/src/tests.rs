//! Unit tests for lc-citizen.

#[cfg(test)]
mod citizen {
    use crate::{Citizen, EducationLevel, Location, SchoolLevel};
    use lc_core::BuildingId;

    #[test]
    fn education_never_regresses() {
        let mut c = Citizen::new(100);
        c.advance_education(EducationLevel::TwoSchools);
        assert_eq!(c.education, EducationLevel::TwoSchools);
        c.advance_education(EducationLevel::OneSchool);
        assert_eq!(c.education, EducationLevel::TwoSchools, "must not regress");
        c.advance_education(EducationLevel::ThreeSchools);
        assert_eq!(c.education, EducationLevel::ThreeSchools);
    }

    #[test]
    fn next_school_chain() {
        assert_eq!(
            EducationLevel::Uneducated.next_school(),
            Some(SchoolLevel::Elementary)
        );
        assert_eq!(
            EducationLevel::TwoSchools.next_school(),
            Some(SchoolLevel::University)
        );
        assert_eq!(EducationLevel::ThreeSchools.next_school(), None);
    }

    #[test]
    fn school_grants_matching_level() {
        assert_eq!(SchoolLevel::Elementary.grants(), EducationLevel::OneSchool);
        assert_eq!(SchoolLevel::University.grants(), EducationLevel::ThreeSchools);
    }

    #[test]
    fn employ_resets_unemployment_counter() {
        let mut c = Citizen::new(120);
        c.unemployed_ticks = 40;
        c.employ(BuildingId(7));
        assert!(c.employed());
        assert_eq!(c.unemployed_ticks, 0);
    }

    #[test]
    fn in_transit_covers_moving_and_vehicle() {
        let mut c = Citizen::new(50);
        assert!(!c.in_transit());
        c.location = Location::Moving;
        assert!(c.in_transit());
        c.location = Location::Home;
        c.in_vehicle = true;
        assert!(c.in_transit());
    }
}

#[cfg(test)]
mod household {
    use crate::CitizenUnit;
    use lc_core::CitizenId;

    fn family() -> CitizenUnit {
        // 2 adults + 2 children.
        let mut unit = CitizenUnit::empty();
        unit.add_adult(CitizenId(0));
        unit.add_adult(CitizenId(1));
        unit.add_child(CitizenId(2));
        unit.add_child(CitizenId(3));
        unit
    }

    #[test]
    fn slot_convention() {
        let unit = family();
        assert_eq!(unit.adults().collect::<Vec<_>>(), vec![CitizenId(0), CitizenId(1)]);
        assert_eq!(unit.children().collect::<Vec<_>>(), vec![CitizenId(2), CitizenId(3)]);
        assert_eq!(unit.member_count(), 4);
    }

    #[test]
    fn lone_adult_detection() {
        let mut unit = family();
        assert!(!unit.lone_adult(CitizenId(0)), "two adults present");
        unit.remove(CitizenId(1));
        assert!(unit.lone_adult(CitizenId(0)));
        assert!(!unit.lone_adult(CitizenId(2)), "children are never lone adults");
    }

    #[test]
    fn take_children_drains_in_slot_order_exactly_once() {
        let mut unit = family();
        let taken = unit.take_children();
        assert_eq!(taken, vec![CitizenId(2), CitizenId(3)]);
        assert!(!unit.has_children());
        assert!(unit.take_children().is_empty(), "second drain finds nothing");
    }

    #[test]
    fn take_children_skips_empty_slots() {
        let mut unit = family();
        unit.remove(CitizenId(2));
        let taken = unit.take_children();
        assert_eq!(taken, vec![CitizenId(3)]);
    }

    #[test]
    fn adult_slots_cap_at_two() {
        let mut unit = family();
        assert_eq!(unit.add_adult(CitizenId(9)), None);
        assert_eq!(unit.add_child(CitizenId(9)), Some(4), "third child slot free");
        assert_eq!(unit.add_child(CitizenId(10)), None);
    }
}

#[cfg(test)]
mod store {
    use crate::{Citizen, PopulationBuilder};
    use lc_core::{CitizenId, LcError};

    fn two_households() -> (crate::PopulationStore, crate::CitizenRngs) {
        let mut b = PopulationBuilder::new(42);
        b.add_household(
            vec![Citizen::new(120), Citizen::new(130)],
            vec![Citizen::new(5)],
        )
        .unwrap();
        b.add_household(vec![Citizen::new(200)], vec![]).unwrap();
        b.build()
    }

    #[test]
    fn builder_wires_unit_backrefs() {
        let (store, rngs) = two_households();
        assert_eq!(store.citizen_count(), 4);
        assert_eq!(store.unit_count(), 2);
        assert_eq!(rngs.len(), 4);
        let child = store.get(CitizenId(2)).unwrap();
        assert!(store.unit(child.unit).unwrap().contains(CitizenId(2)));
    }

    #[test]
    fn household_overflow_rejected() {
        let mut b = PopulationBuilder::new(0);
        let result = b.add_household(
            vec![Citizen::new(100), Citizen::new(100), Citizen::new(100)],
            vec![],
        );
        assert!(matches!(result, Err(LcError::HouseholdFull { kind: "adult", .. })));
    }

    #[test]
    fn release_clears_record_and_unit_slot() {
        let (mut store, _rngs) = two_households();
        let unit_id = store.get(CitizenId(0)).unwrap().unit;
        let released = store.release_citizen(CitizenId(0)).unwrap();
        assert_eq!(released.age, 120);
        assert!(store.get(CitizenId(0)).is_none());
        assert!(!store.unit(unit_id).unwrap().contains(CitizenId(0)));
        assert_eq!(store.citizen_count(), 3);
    }

    #[test]
    fn double_release_is_an_error() {
        let (mut store, _rngs) = two_households();
        store.release_citizen(CitizenId(0)).unwrap();
        assert!(matches!(
            store.release_citizen(CitizenId(0)),
            Err(LcError::CitizenNotFound(_))
        ));
    }

    #[test]
    fn get_many_mut_returns_disjoint_refs() {
        let (_store, mut rngs) = two_households();
        let ids = [CitizenId(0), CitizenId(2), CitizenId(3)];
        let refs = rngs.get_many_mut(&ids);
        assert_eq!(refs.len(), 3);
        for rng in refs {
            let _: u64 = rng.random();
        }
    }
}
