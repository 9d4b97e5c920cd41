//! Run configuration.
//!
//! Every run parameter is explicit data here — population size, tick budget,
//! physical constants, and the bounds of every stochastic draw.  Nothing in
//! the simulator reads an embedded literal.

use thiserror::Error;

use crate::{SimClock, Tick};

/// Top-level simulation configuration.
///
/// Typically loaded from a JSON/TOML file by the application crate and passed
/// to `SimBuilder`.  `Default` carries the constants of the reference dataset
/// (urban speeds in m/s, 1 s ticks).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Number of vehicles spawned at tick 0.  The population is fixed for the
    /// run — vehicles are never created later or destroyed.
    pub vehicle_count: usize,

    /// Total ticks to simulate.  The run always executes exactly this many.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical output.
    pub seed: u64,

    /// Unix timestamp for tick 0.
    pub start_unix_secs: i64,

    /// Seconds per tick.  Default: 1.
    pub tick_duration_secs: u32,

    /// Speed ceiling in m/s.  Default: 33.3 (~120 km/h).
    pub max_speed: f64,

    /// Speed floor in m/s while moving.  Default: 5.0.
    pub min_speed: f64,

    /// Largest per-tick speed adjustment magnitude, m/s.  Default: 2.5.
    pub acceleration_limit: f64,

    /// Probability that a moving vehicle adjusts its speed this tick.
    /// Default: 0.2.
    pub accel_probability: f64,

    /// Bounds of the uniform initial-speed draw at spawn, m/s.
    /// Must lie within `[min_speed, max_speed]`.  Default: (5.0, 20.0).
    pub initial_speed_range: (f64, f64),

    /// Bounds of the uniform wait duration drawn at a dead end, in ticks.
    /// Default: (1, 3).
    pub wait_ticks_range: (u32, u32),

    /// Bounds of the uniform download-rate draw at spawn.  Default: (1, 10).
    pub download_range: (f64, f64),

    /// Bounds of the uniform upload-rate draw at spawn.  Default: (1, 10).
    pub upload_range: (f64, f64),

    /// Worker thread count for the `parallel` feature.  `None` uses all
    /// logical cores.  Ignored in the sequential build.
    pub num_threads: Option<usize>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            vehicle_count:       300,
            total_ticks:         300,
            seed:                42,
            start_unix_secs:     0,
            tick_duration_secs:  1,
            max_speed:           33.3,
            min_speed:           5.0,
            acceleration_limit:  2.5,
            accel_probability:   0.2,
            initial_speed_range: (5.0, 20.0),
            wait_ticks_range:    (1, 3),
            download_range:      (1.0, 10.0),
            upload_range:        (1.0, 10.0),
            num_threads:         None,
        }
    }
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.start_unix_secs, self.tick_duration_secs)
    }

    /// Fail-fast sanity check, run once before any vehicle is spawned.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_duration_secs == 0 {
            return Err(ConfigError::NonPositive { name: "tick_duration_secs" });
        }
        if self.min_speed <= 0.0 {
            return Err(ConfigError::NonPositive { name: "min_speed" });
        }
        if self.acceleration_limit < 0.0 {
            return Err(ConfigError::NonPositive { name: "acceleration_limit" });
        }
        if !(0.0..=1.0).contains(&self.accel_probability) {
            return Err(ConfigError::Probability(self.accel_probability));
        }
        if self.max_speed < self.min_speed {
            return Err(ConfigError::SpeedBounds {
                min: self.min_speed,
                max: self.max_speed,
            });
        }

        let (lo, hi) = self.initial_speed_range;
        if lo > hi {
            return Err(ConfigError::EmptyRange { name: "initial_speed_range", lo, hi });
        }
        if lo < self.min_speed || hi > self.max_speed {
            return Err(ConfigError::SpeedBounds {
                min: self.min_speed,
                max: self.max_speed,
            });
        }

        let (wlo, whi) = self.wait_ticks_range;
        if wlo == 0 {
            return Err(ConfigError::NonPositive { name: "wait_ticks_range.0" });
        }
        if wlo > whi {
            return Err(ConfigError::EmptyRange {
                name: "wait_ticks_range",
                lo:   wlo as f64,
                hi:   whi as f64,
            });
        }

        for (name, (rlo, rhi)) in [
            ("download_range", self.download_range),
            ("upload_range", self.upload_range),
        ] {
            if rlo > rhi {
                return Err(ConfigError::EmptyRange { name, lo: rlo, hi: rhi });
            }
        }

        Ok(())
    }
}

// ── ConfigError ───────────────────────────────────────────────────────────────

/// Rejected configuration — the run aborts before producing any output.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be positive")]
    NonPositive { name: &'static str },

    #[error("{name} is an empty range ({lo} > {hi})")]
    EmptyRange {
        name: &'static str,
        lo:   f64,
        hi:   f64,
    },

    #[error("accel_probability {0} is outside [0, 1]")]
    Probability(f64),

    #[error("speed bounds rejected: initial speeds must lie within [min_speed {min}, max_speed {max}]")]
    SpeedBounds { min: f64, max: f64 },
}
