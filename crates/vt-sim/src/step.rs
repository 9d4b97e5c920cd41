//! The per-vehicle state machine, evaluated once per vehicle per tick.

use vt_core::{EdgeId, SimConfig, VehicleRng};
use vt_network::RoadNetwork;

use crate::vehicle::{Vehicle, VehicleState};
use crate::{kinematics, policy};

/// Advance one vehicle by one tick.
///
/// Transition table:
///
/// | State      | Condition                   | Effect                         |
/// |------------|-----------------------------|--------------------------------|
/// | Moving     | interior waypoint           | kinematics advance             |
/// | Moving     | last waypoint, outgoing > 0 | hop to a random outgoing edge  |
/// | Moving     | last waypoint, dead end     | `Waiting(U{wait_ticks_range})` |
/// | Waiting(r) | r − 1 > 0                   | `Waiting(r − 1)`               |
/// | Waiting(r) | r − 1 ≤ 0                   | `Moving`, same terminal edge   |
///
/// A vehicle leaving `Waiting` keeps its terminal edge and waypoint index,
/// so it re-evaluates the dead-end condition on the very next tick.  At a
/// persistent dead end this loops Waiting → Moving → Waiting indefinitely;
/// vehicles never teleport or despawn.
pub fn step_vehicle(
    vehicle: &mut Vehicle,
    network: &RoadNetwork,
    config:  &SimConfig,
    rng:     &mut VehicleRng,
) {
    match vehicle.state {
        VehicleState::Moving => {
            let waypoints = network.waypoints(vehicle.edge);
            if vehicle.waypoint_index < waypoints.len() - 1 {
                kinematics::advance(vehicle, waypoints, config, rng);
            } else {
                // End of the edge — pick a continuation or start waiting.
                let node = network.edge_to(vehicle.edge);
                match policy::choose_next_edge(network, node, rng) {
                    Some(next) => enter_edge(vehicle, network, next),
                    None => {
                        let (lo, hi) = config.wait_ticks_range;
                        vehicle.state = VehicleState::Waiting {
                            remaining_ticks: rng.gen_range(lo..=hi),
                        };
                    }
                }
            }
        }

        VehicleState::Waiting { remaining_ticks } => {
            vehicle.state = if remaining_ticks > 1 {
                VehicleState::Waiting { remaining_ticks: remaining_ticks - 1 }
            } else {
                VehicleState::Moving
            };
        }
    }
}

/// Move the vehicle onto `edge` at its first waypoint.
///
/// The heading is recomputed from the new edge's first segment; an edge with
/// a single waypoint leaves the previous heading untouched.
fn enter_edge(vehicle: &mut Vehicle, network: &RoadNetwork, edge: EdgeId) {
    let waypoints = network.waypoints(edge);
    vehicle.edge = edge;
    vehicle.waypoint_index = 0;
    vehicle.position = waypoints[0];
    if waypoints.len() > 1 {
        vehicle.heading = waypoints[0].heading_deg_to(waypoints[1]);
    }
}
