//! Fluent builder for constructing a ready-to-run [`Sim`].

use vt_core::{SimConfig, VehicleId, VehicleRngs};
use vt_network::RoadNetwork;

use crate::sim::Sim;
use crate::spawn::spawn;
use crate::SimResult;

/// Validates the configuration, spawns the fleet, and wires up the clock and
/// RNG streams.
///
/// Fail-fast: a rejected configuration or an empty edge pool aborts before
/// any vehicle exists, so a failed build never leaves partial output behind.
pub struct SimBuilder<'net> {
    config:  SimConfig,
    network: &'net RoadNetwork,
}

impl<'net> SimBuilder<'net> {
    pub fn new(config: SimConfig, network: &'net RoadNetwork) -> Self {
        Self { config, network }
    }

    /// Construct the simulation: validate, seed per-vehicle RNGs, spawn every
    /// vehicle on a random edge.
    pub fn build(self) -> SimResult<Sim<'net>> {
        self.config.validate()?;

        #[cfg(feature = "parallel")]
        if let Some(threads) = self.config.num_threads {
            // The global pool can only be installed once per process; later
            // sims silently reuse whatever pool is already in place.
            let _ = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global();
        }

        let mut rngs = VehicleRngs::new(self.config.vehicle_count, self.config.seed);

        let vehicles = (0..self.config.vehicle_count)
            .map(|i| {
                let id = VehicleId(i as u32);
                spawn(id, self.network, &self.config, rngs.get_mut(id))
            })
            .collect::<SimResult<Vec<_>>>()?;

        let clock = self.config.make_clock();

        Ok(Sim {
            config: self.config,
            clock,
            network: self.network,
            vehicles,
            rngs,
        })
    }
}
