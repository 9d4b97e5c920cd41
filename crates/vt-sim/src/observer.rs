//! Simulation observer trait for progress reporting and row recording.

use vt_core::Tick;

use crate::vehicle::Vehicle;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at tick boundaries.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  `on_tick_end` receives the full
/// post-transition population in stable vehicle order — the recorder hook
/// that produces one trajectory row per vehicle per tick.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, vehicles: &[Vehicle]) {
///         if tick.0 % self.interval == 0 {
///             println!("tick {tick}: {} vehicles", vehicles.len());
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any vehicle steps.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after every vehicle has stepped this tick.
    fn on_tick_end(&mut self, _tick: Tick, _vehicles: &[Vehicle]) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
