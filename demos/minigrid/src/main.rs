//! minigrid — smallest end-to-end example for rust_vt.
//!
//! Runs the full pipeline on an embedded miniature network: SUMO-style XML
//! extraction → flat CSV tables → road graph → movement simulation →
//! trajectory CSV.  Swap `NET_XML` for a real `.net.xml` path (see
//! `SumoNet::from_file`) to generate a city-scale dataset.

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{anyhow, Result};

use vt_core::SimConfig;
use vt_network::{tables, RoadNetworkBuilder, SumoNet};
use vt_output::{CsvWriter, TrajectoryObserver};
use vt_sim::SimBuilder;

// ── Run parameters ────────────────────────────────────────────────────────────

const VEHICLE_COUNT: usize = 25;
const TOTAL_TICKS:   u64   = 120; // 2 simulated minutes at 1 s per tick
const SEED:          u64   = 42;
const OUT_DIR:       &str  = "./out";

// ── Embedded network ──────────────────────────────────────────────────────────

// A 2×2 block with a one-way spur to a dead-end cul-de-sac ("e"): four
// junctions in a loop, both directions on every loop segment, plus an
// internal edge and a shapeless edge that extraction must drop.
const NET_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<net version="1.16">
    <edge id="ab" from="a" to="b" shape="0.0,0.0 60.0,0.0 120.0,0.0"/>
    <edge id="ba" from="b" to="a" shape="120.0,0.0 60.0,0.0 0.0,0.0"/>
    <edge id="bc" from="b" to="c" shape="120.0,0.0 120.0,90.0"/>
    <edge id="cb" from="c" to="b" shape="120.0,90.0 120.0,0.0"/>
    <edge id="cd" from="c" to="d" shape="120.0,90.0 60.0,90.0 0.0,90.0"/>
    <edge id="dc" from="d" to="c" shape="0.0,90.0 60.0,90.0 120.0,90.0"/>
    <edge id="da" from="d" to="a" shape="0.0,90.0 0.0,0.0"/>
    <edge id="ad" from="a" to="d" shape="0.0,0.0 0.0,90.0"/>
    <edge id="be" from="b" to="e" shape="120.0,0.0 170.0,-20.0 210.0,-20.0"/>
    <edge id=":b_0" function="internal"/>
    <edge id="ae" from="a" to="e"/>
    <junction id="a" x="0.0" y="0.0"/>
    <junction id="b" x="120.0" y="0.0"/>
    <junction id="c" x="120.0" y="90.0"/>
    <junction id="d" x="0.0" y="90.0"/>
    <junction id="e" x="210.0" y="-20.0"/>
</net>"#;

fn main() -> Result<()> {
    println!("=== minigrid — rust_vt trajectory generator ===");
    println!("Vehicles: {VEHICLE_COUNT}  |  Ticks: {TOTAL_TICKS}  |  Seed: {SEED}");
    println!();

    let out_dir = Path::new(OUT_DIR);
    fs::create_dir_all(out_dir)?;

    // 1. Extract the network description into flat tables.
    let net = SumoNet::from_str(NET_XML)?;
    let edges = net.edge_records();
    let junctions = net.junction_records();
    tables::write_edges_csv(&out_dir.join("edges.csv"), &edges)?;
    tables::write_junctions_csv(&out_dir.join("junctions.csv"), &junctions)?;
    println!(
        "Extracted {} edge rows, {} junction rows -> {}",
        edges.len(),
        junctions.len(),
        out_dir.display()
    );

    // 2. Re-read the tables and build the road graph, as a consumer of the
    //    CSVs would.  Edges without a shape or endpoints drop out here.
    let edges = tables::read_edges_csv(&out_dir.join("edges.csv"))?;
    let junctions = tables::read_junctions_csv(&out_dir.join("junctions.csv"))?;
    let graph = RoadNetworkBuilder::from_records(&edges, &junctions)?;
    println!(
        "Road graph: {} nodes, {} drivable edges",
        graph.node_count(),
        graph.edge_count()
    );

    // 3. Simulate, streaming one row per vehicle per tick to CSV.
    let config = SimConfig {
        vehicle_count: VEHICLE_COUNT,
        total_ticks:   TOTAL_TICKS,
        seed:          SEED,
        ..SimConfig::default()
    };
    let mut sim = SimBuilder::new(config, &graph).build()?;

    let trajectory_path = out_dir.join("trajectories.csv");
    let writer = CsvWriter::new(&trajectory_path)?;
    let mut observer = TrajectoryObserver::new(writer, &sim.clock);

    let started = Instant::now();
    sim.run(&mut observer)?;
    if let Some(e) = observer.take_error() {
        return Err(anyhow!("trajectory write failed: {e}"));
    }

    println!(
        "Wrote {} rows to {} in {:.1?}",
        VEHICLE_COUNT as u64 * TOTAL_TICKS,
        trajectory_path.display(),
        started.elapsed()
    );
    Ok(())
}
