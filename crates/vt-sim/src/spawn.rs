//! Initial placement of the vehicle population.

use vt_core::{EdgeId, SimConfig, VehicleId, VehicleRng};
use vt_network::RoadNetwork;

use crate::vehicle::{Vehicle, VehicleState};
use crate::{SimError, SimResult};

/// Spawn one vehicle on a uniformly random edge of the graph.
///
/// The vehicle starts at the edge's first waypoint with `waypoint_index` 0,
/// a uniform initial speed, and a heading toward the second waypoint (or 0
/// when the edge has a single waypoint).  Download/upload rates are drawn
/// once here and never change.
///
/// Fails with [`SimError::NoValidEdges`] when the graph has no edges —
/// nothing can be placed, so the whole run aborts before any output.
pub fn spawn(
    id:      VehicleId,
    network: &RoadNetwork,
    config:  &SimConfig,
    rng:     &mut VehicleRng,
) -> SimResult<Vehicle> {
    if network.is_empty() {
        return Err(SimError::NoValidEdges);
    }

    let edge = EdgeId(rng.gen_range(0..network.edge_count() as u32));
    let waypoints = network.waypoints(edge);

    let position = waypoints[0];
    let heading = if waypoints.len() > 1 {
        position.heading_deg_to(waypoints[1])
    } else {
        0.0
    };

    let (speed_lo, speed_hi) = config.initial_speed_range;
    let (dl_lo, dl_hi) = config.download_range;
    let (ul_lo, ul_hi) = config.upload_range;

    Ok(Vehicle {
        id,
        position,
        edge,
        waypoint_index: 0,
        speed:          rng.gen_range(speed_lo..=speed_hi),
        heading,
        download_rate:  rng.gen_range(dl_lo..=dl_hi),
        upload_rate:    rng.gen_range(ul_lo..=ul_hi),
        state:          VehicleState::Moving,
    })
}
