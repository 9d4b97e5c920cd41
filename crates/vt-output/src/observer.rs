//! `TrajectoryObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use vt_core::{SimClock, Tick};
use vt_sim::{SimObserver, Vehicle};

use crate::row::{format_time, TrajectoryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that records every vehicle every tick through any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After `sim.run()` returns, check with
/// [`take_error`][Self::take_error] — only the first error is kept, and
/// writing stops once one occurs.
pub struct TrajectoryObserver<W: OutputWriter> {
    writer:             W,
    start_unix_secs:    i64,
    tick_duration_secs: u32,
    last_error:         Option<OutputError>,
}

impl<W: OutputWriter> TrajectoryObserver<W> {
    /// Create an observer backed by `writer`, using `clock` for wall-clock
    /// conversion of tick numbers.
    pub fn new(writer: W, clock: &SimClock) -> Self {
        Self {
            writer,
            start_unix_secs:    clock.start_unix_secs,
            tick_duration_secs: clock.tick_duration_secs,
            last_error:         None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn time_at(&self, tick: Tick) -> String {
        format_time(self.start_unix_secs + tick.0 as i64 * self.tick_duration_secs as i64)
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for TrajectoryObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, vehicles: &[Vehicle]) {
        if self.last_error.is_some() {
            return;
        }
        let time = self.time_at(tick);
        let rows: Vec<TrajectoryRow> = vehicles
            .iter()
            .map(|v| TrajectoryRow::from_vehicle(v, time.clone()))
            .collect();
        let result = self.writer.write_rows(&rows);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
