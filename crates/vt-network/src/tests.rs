//! Unit tests for vt-network.

use vt_core::{NodeId, Point};

use crate::tables::{self, EdgeRecord, JunctionRecord};
use crate::{parse_shape, NetworkError, RoadNetwork, RoadNetworkBuilder, SumoNet};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn seg(points: &[(f64, f64)]) -> Vec<Point> {
    points.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

/// Y-shaped graph: a → b, then b → c and b → d.  Node d is a dead end.
fn y_network() -> RoadNetwork {
    let mut b = RoadNetworkBuilder::new();
    b.add_edge("a", "b", seg(&[(0.0, 0.0), (10.0, 0.0)]));
    b.add_edge("b", "c", seg(&[(10.0, 0.0), (20.0, 5.0)]));
    b.add_edge("b", "d", seg(&[(10.0, 0.0), (20.0, -5.0)]));
    b.build()
}

// ── Shape parsing ─────────────────────────────────────────────────────────────

mod shape {
    use super::*;

    #[test]
    fn parses_pairs_in_order() {
        let pts = parse_shape("1.5,2.0 3.25,-4.0").unwrap();
        assert_eq!(pts, seg(&[(1.5, 2.0), (3.25, -4.0)]));
    }

    #[test]
    fn empty_string_yields_no_waypoints() {
        assert!(parse_shape("").unwrap().is_empty());
        assert!(parse_shape("   ").unwrap().is_empty());
    }

    #[test]
    fn rejects_non_numeric_coordinate() {
        let err = parse_shape("1.0,abc").unwrap_err();
        assert!(matches!(err, NetworkError::MalformedShape { .. }));
    }

    #[test]
    fn rejects_missing_separator() {
        assert!(parse_shape("1.0 2.0,3.0").is_err());
    }

    #[test]
    fn rejects_three_coordinates() {
        assert!(parse_shape("1.0,2.0,3.0").is_err());
    }
}

// ── SUMO extraction ───────────────────────────────────────────────────────────

mod sumo {
    use super::*;

    const NET_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<net version="1.16">
    <edge id="e1" from="a" to="b" shape="0.0,0.0 10.0,0.0">
        <lane id="e1_0" index="0" speed="13.89" length="10.0"/>
    </edge>
    <edge id=":a_0" function="internal"/>
    <edge id="e2" from="b" to="a"/>
    <junction id="a" type="priority" x="0.0" y="0.0"/>
    <junction id="b" type="priority" x="10.0" y="0.0"/>
</net>"#;

    #[test]
    fn extracts_edge_and_junction_attributes() {
        let net = SumoNet::from_str(NET_XML).unwrap();
        assert_eq!(net.edges.len(), 3);
        assert_eq!(net.junctions.len(), 2);

        let records = net.edge_records();
        assert_eq!(records[0].from, "a");
        assert_eq!(records[0].to, "b");
        assert_eq!(records[0].shape, "0.0,0.0 10.0,0.0");

        // Internal edge flattens to empty fields.
        assert_eq!(records[1].from, "");
        assert_eq!(records[1].shape, "");

        // Edge without a shape attribute flattens to an empty shape.
        assert_eq!(records[2].from, "b");
        assert_eq!(records[2].shape, "");

        let junctions = net.junction_records();
        assert_eq!(junctions[0].id, "a");
        assert_eq!(junctions[1].x, 10.0);
    }

    #[test]
    fn extraction_feeds_graph_build() {
        let net = SumoNet::from_str(NET_XML).unwrap();
        let graph =
            RoadNetworkBuilder::from_records(&net.edge_records(), &net.junction_records())
                .unwrap();
        // Only e1 survives: the internal edge has no endpoints, e2 no shape.
        assert_eq!(graph.edge_count(), 1);
        let a = graph.node_id("a").unwrap();
        assert_eq!(graph.node_pos[a.index()], Some(Point::new(0.0, 0.0)));
    }
}

// ── Flat tables ───────────────────────────────────────────────────────────────

mod csv_tables {
    use super::*;

    #[test]
    fn edges_roundtrip_preserves_empty_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("edges.csv");
        let rows = vec![
            EdgeRecord {
                from:  "a".into(),
                to:    "b".into(),
                shape: "0.0,0.0 1.0,1.0".into(),
            },
            EdgeRecord { from: "".into(), to: "".into(), shape: "".into() },
        ];
        tables::write_edges_csv(&path, &rows).unwrap();
        let back = tables::read_edges_csv(&path).unwrap();
        assert_eq!(back, rows);
    }

    #[test]
    fn junctions_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("junctions.csv");
        let rows = vec![
            JunctionRecord { id: "a".into(), x: 1.25, y: -3.5 },
            JunctionRecord { id: "b".into(), x: 0.0, y: 0.0 },
        ];
        tables::write_junctions_csv(&path, &rows).unwrap();
        let back = tables::read_junctions_csv(&path).unwrap();
        assert_eq!(back, rows);
    }
}

// ── Road graph ────────────────────────────────────────────────────────────────

mod graph {
    use super::*;

    #[test]
    fn csr_out_edges_are_contiguous_and_correct() {
        let net = y_network();
        let b = net.node_id("b").unwrap();
        let out: Vec<_> = net.out_edges(b).collect();
        assert_eq!(out.len(), 2);
        assert_eq!(net.out_degree(b), 2);
        for (k, &edge) in out.iter().enumerate() {
            assert_eq!(net.out_edge(b, k), edge);
            assert_eq!(net.edge_from(edge), b);
        }
        let dests: Vec<&str> =
            out.iter().map(|&e| net.node_name(net.edge_to(e))).collect();
        assert_eq!(dests, ["c", "d"]);
    }

    #[test]
    fn dead_end_has_zero_out_degree() {
        let net = y_network();
        let d = net.node_id("d").unwrap();
        assert_eq!(net.out_degree(d), 0);
        assert_eq!(net.out_edges(d).count(), 0);
    }

    #[test]
    fn empty_shape_and_missing_endpoints_are_dropped() {
        let mut b = RoadNetworkBuilder::new();
        assert!(!b.add_edge("a", "b", vec![]));
        assert!(!b.add_edge("", "b", seg(&[(0.0, 0.0)])));
        assert!(b.add_edge("a", "b", seg(&[(0.0, 0.0)])));
        let net = b.build();
        assert_eq!(net.edge_count(), 1);
        assert_eq!(net.waypoints(vt_core::EdgeId(0)).len(), 1);
    }

    #[test]
    fn empty_network_answers_empty_everything() {
        let net = RoadNetwork::empty();
        assert!(net.is_empty());
        assert_eq!(net.node_count(), 0);
        assert_eq!(net.node_id("anything"), None);
    }

    #[test]
    fn interning_is_stable_across_duplicates() {
        let mut b = RoadNetworkBuilder::new();
        b.add_edge("a", "b", seg(&[(0.0, 0.0)]));
        b.add_edge("a", "c", seg(&[(0.0, 0.0)]));
        let net = b.build();
        assert_eq!(net.node_id("a"), Some(NodeId(0)));
        assert_eq!(net.node_name(NodeId(0)), "a");
        assert_eq!(net.node_count(), 3);
    }

    #[test]
    fn build_is_deterministic_for_same_input() {
        let a = y_network();
        let b = y_network();
        assert_eq!(a.node_out_start, b.node_out_start);
        assert_eq!(a.edge_to, b.edge_to);
        assert_eq!(a.node_names, b.node_names);
    }
}
