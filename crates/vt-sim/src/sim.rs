//! The `Sim` struct and its tick loop.

use vt_core::{SimClock, SimConfig, Tick, VehicleRngs};
use vt_network::RoadNetwork;

use crate::observer::SimObserver;
use crate::step::step_vehicle;
use crate::vehicle::Vehicle;
use crate::SimResult;

/// The main simulation runner.
///
/// Borrows the immutable road graph for its whole lifetime — the only shared
/// resource of the step phase, which is why that phase can run in parallel
/// without locking.  Vehicle state and RNG streams are per-vehicle exclusive.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
#[derive(Debug)]
pub struct Sim<'net> {
    /// Global configuration (population, tick budget, physical constants).
    pub config: SimConfig,

    /// Simulation clock — tracks the current tick and maps to wall time.
    pub clock: SimClock,

    /// Read-only road graph.
    pub network: &'net RoadNetwork,

    /// The population, indexed by `VehicleId`.  Order is fixed for the run;
    /// observer callbacks see vehicles in exactly this order every tick.
    pub vehicles: Vec<Vehicle>,

    /// Per-vehicle deterministic RNGs, separated for the split-borrow pattern.
    pub rngs: VehicleRngs,
}

impl<'net> Sim<'net> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Executes exactly the configured tick budget — there is no early
    /// termination and no per-vehicle end state.  Calls observer hooks at
    /// every tick boundary; use [`NoopObserver`][crate::NoopObserver] if you
    /// don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.clock.current_tick < self.config.end_tick() {
            let now = self.clock.current_tick;
            observer.on_tick_start(now);
            self.step_all();
            observer.on_tick_end(now, &self.vehicles);
            self.clock.advance();
        }
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            let now = self.clock.current_tick;
            observer.on_tick_start(now);
            self.step_all();
            observer.on_tick_end(now, &self.vehicles);
            self.clock.advance();
        }
        Ok(())
    }

    /// The tick the clock currently stands at.
    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }

    // ── Step phase ────────────────────────────────────────────────────────

    /// Advance every vehicle once.
    ///
    /// Vehicles never read each other's state, so the sequential and
    /// parallel versions produce identical results: each vehicle's draws
    /// come from its own RNG stream, and observer emission (which fixes the
    /// output order) happens after this returns.
    fn step_all(&mut self) {
        let network = self.network;
        let config  = &self.config;

        #[cfg(not(feature = "parallel"))]
        {
            for (vehicle, rng) in self.vehicles.iter_mut().zip(self.rngs.inner.iter_mut()) {
                step_vehicle(vehicle, network, config, rng);
            }
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            self.vehicles
                .par_iter_mut()
                .zip(self.rngs.inner.par_iter_mut())
                .for_each(|(vehicle, rng)| {
                    step_vehicle(vehicle, network, config, rng);
                });
        }
    }
}
