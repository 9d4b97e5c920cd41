//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, TrajectoryRow};

/// Trait implemented by trajectory sinks (CSV today; the seam exists so a
/// database or columnar backend can slot in without touching the simulator).
pub trait OutputWriter {
    /// Write one tick's batch of rows, in the order given.
    fn write_rows(&mut self, rows: &[TrajectoryRow]) -> OutputResult<()>;

    /// Flush and close the underlying sink.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
