//! Deterministic per-vehicle RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each vehicle gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (vehicle_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive vehicle IDs uniformly across the seed space.
//! This means:
//!
//! - Vehicles never share RNG state, so every stochastic draw (initial speed,
//!   acceleration jiggle, next-edge choice, wait duration) is independent of
//!   population size and tick iteration order.
//! - All RNG calls are local to the owning thread; the parallel step phase
//!   needs no synchronisation and reproduces the sequential results exactly.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::VehicleId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── VehicleRng ────────────────────────────────────────────────────────────────

/// Per-vehicle deterministic RNG.
///
/// Create one per vehicle at simulation init; store in a `VehicleRngs`
/// parallel to the vehicle vector.  Kept separate from the vehicle itself so
/// the step phase can borrow `&mut VehicleRngs` and `&[Vehicle]` disjointly.
#[derive(Debug)]
pub struct VehicleRng(SmallRng);

impl VehicleRng {
    /// Seed deterministically from the run's global seed and a vehicle ID.
    pub fn new(global_seed: u64, vehicle: VehicleId) -> Self {
        let seed = global_seed ^ (vehicle.0 as u64).wrapping_mul(MIXING_CONSTANT);
        VehicleRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}

// ── VehicleRngs ───────────────────────────────────────────────────────────────

/// Per-vehicle RNG state for the whole population, separated from the vehicle
/// vector to enable simultaneous `&mut VehicleRngs` + `&[Vehicle]` borrows.
///
/// `VehicleRngs` is `Send` but the inner streams must never be shared between
/// threads; Rayon's `par_iter_mut()` provides the exclusive-per-thread access
/// pattern in the parallel step phase.
#[derive(Debug)]
pub struct VehicleRngs {
    pub inner: Vec<VehicleRng>,
}

impl VehicleRngs {
    /// Allocate and seed `count` per-vehicle RNGs from `global_seed`.
    pub fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| VehicleRng::new(global_seed, VehicleId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one vehicle's RNG.
    #[inline]
    pub fn get_mut(&mut self, vehicle: VehicleId) -> &mut VehicleRng {
        &mut self.inner[vehicle.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
