//! `vt-output` — trajectory output for the rust_vt simulator.
//!
//! One row per vehicle per tick, streamed to the sink as each tick
//! completes — peak memory stays bounded no matter how large
//! `vehicles × ticks` grows.
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`row`]      | `TrajectoryRow` + timestamp formatting                 |
//! | [`writer`]   | the `OutputWriter` backend trait                       |
//! | [`csv`]      | `CsvWriter` — the shipped CSV backend                  |
//! | [`observer`] | `TrajectoryObserver<W>` bridging `SimObserver` to a writer |
//! | [`error`]    | `OutputError`, `OutputResult<T>`                       |
//!
//! # Usage
//!
//! ```rust,ignore
//! use vt_output::{CsvWriter, TrajectoryObserver};
//!
//! let writer = CsvWriter::new(Path::new("./out/trajectories.csv"))?;
//! let mut obs = TrajectoryObserver::new(writer, &sim.clock);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TrajectoryObserver;
pub use row::TrajectoryRow;
pub use writer::OutputWriter;
