//! Navigation policy: next-edge choice at an intersection.

use vt_core::{EdgeId, NodeId, VehicleRng};
use vt_network::RoadNetwork;

/// Uniformly sample one outgoing edge of `node`, or `None` at a dead end.
///
/// Every edge in the graph carries a non-empty polyline (degenerate edges
/// are excluded at build time), so any returned edge can be driven.
pub fn choose_next_edge(
    network: &RoadNetwork,
    node:    NodeId,
    rng:     &mut VehicleRng,
) -> Option<EdgeId> {
    let degree = network.out_degree(node);
    if degree == 0 {
        return None;
    }
    Some(network.out_edge(node, rng.gen_range(0..degree)))
}
