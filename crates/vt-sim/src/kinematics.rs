//! One-tick advance along the current edge's polyline.

use vt_core::{Point, SimConfig, VehicleRng};

use crate::vehicle::Vehicle;

/// Advance a moving vehicle one tick toward its next waypoint.
///
/// Caller guarantees the vehicle is `Moving` and not at its edge's last
/// waypoint.
///
/// 1. With probability `accel_probability`, draw a uniform acceleration in
///    `±acceleration_limit` and clamp the adjusted speed to
///    `[min_speed, max_speed]`.  This is a per-tick stochastic speed
///    adjustment, not a continuous integration — the tick period is one
///    time unit, so speed doubles as the distance covered this tick.
/// 2. Refresh the heading toward the next waypoint (always, whether the
///    move snaps or partially advances).
/// 3. Snap to the next waypoint when it is within reach, incrementing
///    `waypoint_index`; otherwise move `speed` metres along the segment.
pub fn advance(
    vehicle:   &mut Vehicle,
    waypoints: &[Point],
    config:    &SimConfig,
    rng:       &mut VehicleRng,
) {
    debug_assert!(vehicle.waypoint_index < waypoints.len() - 1);

    if rng.gen_bool(config.accel_probability) {
        let accel = rng.gen_range(-config.acceleration_limit..=config.acceleration_limit);
        vehicle.speed = (vehicle.speed + accel).clamp(config.min_speed, config.max_speed);
    }

    let next = waypoints[vehicle.waypoint_index + 1];
    let dist = vehicle.position.distance(next);

    vehicle.heading = vehicle.position.heading_deg_to(next);

    if dist <= vehicle.speed {
        vehicle.position = next;
        vehicle.waypoint_index += 1;
    } else {
        vehicle.position = vehicle.position.advance_toward(next, vehicle.speed);
    }
}
