//! Unit tests for vt-output.

use std::fs;

use vt_core::{Point, SimConfig};
use vt_network::RoadNetworkBuilder;
use vt_sim::SimBuilder;

use crate::row::format_time;
use crate::{CsvWriter, OutputWriter, TrajectoryObserver, TrajectoryRow};

// ── Timestamp formatting ──────────────────────────────────────────────────────

mod time_format {
    use super::*;

    #[test]
    fn epoch_formats_as_midnight() {
        assert_eq!(format_time(0), "1970-01-01 00:00:00");
    }

    #[test]
    fn seconds_advance_the_clock() {
        assert_eq!(format_time(86_461), "1970-01-02 00:01:01");
    }

    #[test]
    fn out_of_range_falls_back_to_raw_seconds() {
        assert_eq!(format_time(i64::MAX), i64::MAX.to_string());
    }
}

// ── CSV backend ───────────────────────────────────────────────────────────────

mod csv_backend {
    use super::*;

    #[test]
    fn writes_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trajectories.csv");

        let mut writer = CsvWriter::new(&path).unwrap();
        writer
            .write_rows(&[TrajectoryRow {
                id:        3,
                time:      "1970-01-01 00:00:05".into(),
                x:         1.5,
                y:         -2.0,
                speed:     7.25,
                direction: 90.0,
                state:     "moving",
                download:  4.0,
                upload:    6.5,
            }])
            .unwrap();
        writer.finish().unwrap();
        writer.finish().unwrap(); // idempotent

        let text = fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "ID,Time,X,Y,Speed,Direction,State,Download,Upload"
        );
        assert_eq!(
            lines.next().unwrap(),
            "3,1970-01-01 00:00:05,1.5,-2,7.25,90,moving,4,6.5"
        );
        assert_eq!(lines.next(), None);
    }
}

// ── End-to-end recording ──────────────────────────────────────────────────────

mod recording {
    use super::*;

    #[test]
    fn one_row_per_vehicle_per_tick_streams_to_disk() {
        let mut b = RoadNetworkBuilder::new();
        b.add_edge(
            "a",
            "b",
            vec![Point::new(0.0, 0.0), Point::new(100.0, 0.0)],
        );
        b.add_edge(
            "b",
            "a",
            vec![Point::new(100.0, 0.0), Point::new(0.0, 0.0)],
        );
        let net = b.build();

        let cfg = SimConfig {
            vehicle_count:   4,
            total_ticks:     6,
            start_unix_secs: 60,
            ..SimConfig::default()
        };
        let mut sim = SimBuilder::new(cfg, &net).build().unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trajectories.csv");
        let mut obs =
            TrajectoryObserver::new(CsvWriter::new(&path).unwrap(), &sim.clock);
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 1 + 4 * 6);

        // First data row: vehicle 0 at tick 0 (start + 0 s).
        let first: Vec<&str> = lines[1].split(',').collect();
        assert_eq!(first[0], "0");
        assert_eq!(first[1], "1970-01-01 00:01:00");

        // Last data row: vehicle 3 at tick 5.
        let last: Vec<&str> = lines.last().unwrap().split(',').collect();
        assert_eq!(last[0], "3");
        assert_eq!(last[1], "1970-01-01 00:01:05");

        // Every row's state column is one of the two labels.
        for line in &lines[1..] {
            let state = line.split(',').nth(6).unwrap();
            assert!(state == "moving" || state == "waiting");
        }
    }
}
