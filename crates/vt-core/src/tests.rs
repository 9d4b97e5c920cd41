//! Unit tests for vt-core.

use crate::{Point, SimConfig, Tick, VehicleId, VehicleRng, VehicleRngs};

// ── Geometry ──────────────────────────────────────────────────────────────────

mod geo {
    use super::*;

    #[test]
    fn distance_three_four_five() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn heading_cardinal_directions() {
        let o = Point::new(0.0, 0.0);
        assert_eq!(o.heading_deg_to(Point::new(1.0, 0.0)), 0.0);
        assert_eq!(o.heading_deg_to(Point::new(0.0, 1.0)), 90.0);
        assert_eq!(o.heading_deg_to(Point::new(-1.0, 0.0)), 180.0);
        assert_eq!(o.heading_deg_to(Point::new(0.0, -1.0)), 270.0);
    }

    #[test]
    fn heading_negative_angle_wraps_into_range() {
        // atan2 gives -45°; normalization must land in [0, 360).
        let h = Point::new(0.0, 0.0).heading_deg_to(Point::new(1.0, -1.0));
        assert!((h - 315.0).abs() < 1e-9);
        assert!((0.0..360.0).contains(&h));
    }

    #[test]
    fn advance_toward_partial_step() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        let p = a.advance_toward(b, 2.5); // halfway along the 5 m segment
        assert!((p.x - 1.5).abs() < 1e-12);
        assert!((p.y - 2.0).abs() < 1e-12);
    }

    #[test]
    fn advance_toward_coincident_points_snaps() {
        let a = Point::new(1.0, 1.0);
        assert_eq!(a.advance_toward(a, 3.0), a);
    }
}

// ── Clock ─────────────────────────────────────────────────────────────────────

mod clock {
    use super::*;

    #[test]
    fn unix_secs_track_ticks() {
        let mut clock = SimConfig::default().make_clock();
        assert_eq!(clock.current_unix_secs(), 0);
        clock.advance();
        clock.advance();
        assert_eq!(clock.current_tick, Tick(2));
        assert_eq!(clock.current_unix_secs(), 2);
        assert_eq!(clock.unix_secs_at(Tick(10)), 10);
    }

    #[test]
    fn tick_arithmetic() {
        assert_eq!(Tick(3) + 4, Tick(7));
        assert_eq!(Tick(7) - Tick(3), 4);
        assert_eq!(format!("{}", Tick(5)), "T5");
    }
}

// ── Config ────────────────────────────────────────────────────────────────────

mod config {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_probability_out_of_range() {
        let cfg = SimConfig { accel_probability: 1.5, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_inverted_speed_bounds() {
        let cfg = SimConfig { max_speed: 4.0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_initial_speed_outside_bounds() {
        let cfg = SimConfig {
            initial_speed_range: (5.0, 50.0),
            ..SimConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_empty_wait_range() {
        let cfg = SimConfig { wait_ticks_range: (3, 1), ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_zero_wait_floor() {
        let cfg = SimConfig { wait_ticks_range: (0, 3), ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }
}

// ── RNG ───────────────────────────────────────────────────────────────────────

mod rng {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = VehicleRng::new(7, VehicleId(3));
        let mut b = VehicleRng::new(7, VehicleId(3));
        for _ in 0..100 {
            assert_eq!(a.gen_range(0u32..1000), b.gen_range(0u32..1000));
        }
    }

    #[test]
    fn different_vehicles_different_streams() {
        let mut a = VehicleRng::new(7, VehicleId(0));
        let mut b = VehicleRng::new(7, VehicleId(1));
        let va: Vec<u32> = (0..16).map(|_| a.gen_range(0..u32::MAX)).collect();
        let vb: Vec<u32> = (0..16).map(|_| b.gen_range(0..u32::MAX)).collect();
        assert_ne!(va, vb);
    }

    #[test]
    fn rngs_collection_len_matches_population() {
        let rngs = VehicleRngs::new(5, 42);
        assert_eq!(rngs.len(), 5);
        assert!(!rngs.is_empty());
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = VehicleRng::new(0, VehicleId(0));
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }
}
