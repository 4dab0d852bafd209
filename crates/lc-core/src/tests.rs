//! Unit tests for lc-core primitives.

#[cfg(test)]
mod ids {
    use crate::{BuildingId, CitizenId, UnitId};

    #[test]
    fn index_roundtrip() {
        let id = CitizenId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(CitizenId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(CitizenId(0) < CitizenId(1));
        assert!(UnitId(100) > UnitId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(CitizenId::INVALID.0, u32::MAX);
        assert_eq!(UnitId::INVALID.0, u32::MAX);
        assert_eq!(BuildingId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(CitizenId(7).to_string(), "CitizenId(7)");
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
    }

    #[test]
    fn clock_advances() {
        let mut clock = SimClock::new();
        assert_eq!(clock.current_tick, Tick::ZERO);
        clock.advance();
        clock.advance();
        assert_eq!(clock.current_tick, Tick(2));
    }

    #[test]
    fn phase_cycles_through_multiplier() {
        let mut clock = SimClock::new();
        let mut seen = Vec::new();
        for _ in 0..6 {
            seen.push(clock.phase(3));
            clock.advance();
        }
        assert_eq!(seen, vec![0, 1, 2, 0, 1, 2]);
    }

    #[test]
    fn phase_with_multiplier_one_is_always_zero() {
        let mut clock = SimClock::new();
        for _ in 0..10 {
            assert_eq!(clock.phase(1), 0);
            clock.advance();
        }
    }

    #[test]
    fn sim_config_end_tick() {
        let cfg = SimConfig {
            total_ticks: 480,
            seed: 42,
            num_threads: None,
        };
        assert_eq!(cfg.end_tick(), Tick(480));
    }
}

#[cfg(test)]
mod rng {
    use crate::{CitizenId, CitizenRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = CitizenRng::new(12345, CitizenId(0));
        let mut r2 = CitizenRng::new(12345, CitizenId(0));
        for _ in 0..100 {
            let a: f32 = r1.random();
            let b: f32 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_citizens_differ() {
        let mut r0 = CitizenRng::new(1, CitizenId(0));
        let mut r1 = CitizenRng::new(1, CitizenId(1));
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b, "seeds for adjacent citizens should diverge");
    }

    #[test]
    fn draw_in_bounds() {
        let mut rng = CitizenRng::new(0, CitizenId(0));
        for _ in 0..1000 {
            let v = rng.draw(8);
            assert!(v < 8);
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = CitizenRng::new(0, CitizenId(0));
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }

    #[test]
    fn sim_rng_reproducible() {
        use crate::SimRng;
        let mut a = SimRng::new(99);
        let mut b = SimRng::new(99);
        for _ in 0..50 {
            let x: u64 = a.random();
            let y: u64 = b.random();
            assert_eq!(x, y);
        }
        assert_eq!(a.gen_bool(1.0), b.gen_bool(1.0));
        assert_eq!(a.gen_range(0..100u32), b.gen_range(0..100u32));
    }
}

#[cfg(test)]
mod position {
    use crate::Position;

    #[test]
    fn origin_is_zero() {
        assert_eq!(Position::ORIGIN, Position::new(0.0, 0.0));
    }

    #[test]
    fn display() {
        assert_eq!(Position::new(1.2, -3.5).to_string(), "(1.2, -3.5)");
    }
}
