//! Per-vehicle state.

use vt_core::{EdgeId, Point, VehicleId};

/// Lifecycle state of one vehicle.
///
/// A tagged variant instead of a sentinel wait counter: a vehicle cannot be
/// "moving with three ticks left to wait".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleState {
    /// Advancing along its current edge's polyline.
    Moving,
    /// Parked at a dead end; re-enters `Moving` when the counter expires.
    Waiting { remaining_ticks: u32 },
}

impl VehicleState {
    /// Output state label: `"moving"` or `"waiting"`.
    pub fn label(self) -> &'static str {
        match self {
            VehicleState::Moving => "moving",
            VehicleState::Waiting { .. } => "waiting",
        }
    }

    #[inline]
    pub fn is_moving(self) -> bool {
        matches!(self, VehicleState::Moving)
    }
}

/// One simulated vehicle.
///
/// Created once at simulation start and mutated every tick by the state
/// machine; never destroyed — the population is fixed for the run.
///
/// Invariants maintained by spawn and the state machine:
/// - `waypoint_index < waypoints(edge).len()`
/// - `speed ∈ [min_speed, max_speed]` while `Moving` (retained, but reported
///   as 0, while `Waiting`)
/// - `heading ∈ [0, 360)`
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    /// Stable identifier; equals the vehicle's index in the population.
    pub id: VehicleId,

    /// Current position in projected metres.
    pub position: Point,

    /// The edge the vehicle currently occupies.
    pub edge: EdgeId,

    /// 0-based index into the current edge's waypoint polyline.
    pub waypoint_index: usize,

    /// Current speed in m/s.  With 1 s ticks this doubles as the distance
    /// covered per tick.
    pub speed: f64,

    /// Direction of travel in degrees, `[0, 360)`.
    pub heading: f64,

    /// Connectivity-load payload, fixed at spawn.  No dynamics.
    pub download_rate: f64,
    pub upload_rate: f64,

    pub state: VehicleState,
}

impl Vehicle {
    /// Speed as reported in output rows: 0 while waiting.
    #[inline]
    pub fn reported_speed(&self) -> f64 {
        if self.state.is_moving() { self.speed } else { 0.0 }
    }
}
