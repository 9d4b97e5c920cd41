//! Flat table rows and their CSV encoding.
//!
//! These are the external data contract between network extraction and the
//! movement core: an **edges table** (`From`, `To`, `Shape`) and a
//! **junctions table** (`Node`, `x`, `y`).  Junctions are descriptive node
//! metadata only — the graph derives connectivity purely from `From`/`To`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::NetworkResult;

/// One directed edge as extracted from the network description.
///
/// `from`/`to` may be empty (SUMO internal edges carry no endpoints) and
/// `shape` may be empty; both cases drop the edge from the simulation graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    #[serde(rename = "From")]
    pub from: String,
    #[serde(rename = "To")]
    pub to: String,
    #[serde(rename = "Shape")]
    pub shape: String,
}

/// One intersection with its position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JunctionRecord {
    #[serde(rename = "Node")]
    pub id: String,
    #[serde(rename = "x")]
    pub x: f64,
    #[serde(rename = "y")]
    pub y: f64,
}

// ── CSV read/write ────────────────────────────────────────────────────────────

/// Write the edges table to `path` with a `From,To,Shape` header.
pub fn write_edges_csv(path: &Path, edges: &[EdgeRecord]) -> NetworkResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for edge in edges {
        wtr.serialize(edge)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Read an edges table produced by [`write_edges_csv`] (or any CSV with the
/// same header).
pub fn read_edges_csv(path: &Path) -> NetworkResult<Vec<EdgeRecord>> {
    let mut rdr = csv::Reader::from_path(path)?;
    rdr.deserialize()
        .map(|row| row.map_err(Into::into))
        .collect()
}

/// Write the junctions table to `path` with a `Node,x,y` header.
pub fn write_junctions_csv(path: &Path, junctions: &[JunctionRecord]) -> NetworkResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for junction in junctions {
        wtr.serialize(junction)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Read a junctions table produced by [`write_junctions_csv`].
pub fn read_junctions_csv(path: &Path) -> NetworkResult<Vec<JunctionRecord>> {
    let mut rdr = csv::Reader::from_path(path)?;
    rdr.deserialize()
        .map(|row| row.map_err(Into::into))
        .collect()
}
