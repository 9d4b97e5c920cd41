//! SUMO `.net.xml` extraction.
//!
//! Pulls the three edge attributes (`from`, `to`, `shape`) and the three
//! junction attributes (`id`, `x`, `y`) the pipeline needs, ignoring
//! everything else in the document (lanes, connections, traffic-light
//! programs).  Deserialization is serde-driven via quick-xml; attributes map
//! through the `@`-prefixed renames.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::tables::{EdgeRecord, JunctionRecord};
use crate::NetworkResult;

/// The subset of a SUMO network document this tool consumes.
#[derive(Debug, Deserialize)]
pub struct SumoNet {
    #[serde(rename = "edge", default)]
    pub edges: Vec<SumoEdge>,
    #[serde(rename = "junction", default)]
    pub junctions: Vec<SumoJunction>,
}

/// One `<edge>` element.  Internal edges carry no `from`/`to`, and many
/// edges carry no `shape` attribute at all; all three are optional here and
/// flatten to empty strings in the edge table.
#[derive(Debug, Deserialize)]
pub struct SumoEdge {
    #[serde(rename = "@from", default)]
    pub from: Option<String>,
    #[serde(rename = "@to", default)]
    pub to: Option<String>,
    #[serde(rename = "@shape", default)]
    pub shape: Option<String>,
}

/// One `<junction>` element.
#[derive(Debug, Deserialize)]
pub struct SumoJunction {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@x")]
    pub x: f64,
    #[serde(rename = "@y")]
    pub y: f64,
}

impl SumoNet {
    /// Parse a network document from an in-memory XML string.
    pub fn from_str(xml: &str) -> NetworkResult<SumoNet> {
        Ok(quick_xml::de::from_str(xml)?)
    }

    /// Parse a network document from a `.net.xml` file on disk.
    pub fn from_file(path: &Path) -> NetworkResult<SumoNet> {
        let xml = fs::read_to_string(path)?;
        Self::from_str(&xml)
    }

    /// Flatten the edge elements into table rows (missing attributes become
    /// empty fields, matching the CSV the extraction stage writes).
    pub fn edge_records(&self) -> Vec<EdgeRecord> {
        self.edges
            .iter()
            .map(|e| EdgeRecord {
                from:  e.from.clone().unwrap_or_default(),
                to:    e.to.clone().unwrap_or_default(),
                shape: e.shape.clone().unwrap_or_default(),
            })
            .collect()
    }

    /// Flatten the junction elements into table rows.
    pub fn junction_records(&self) -> Vec<JunctionRecord> {
        self.junctions
            .iter()
            .map(|j| JunctionRecord {
                id: j.id.clone(),
                x:  j.x,
                y:  j.y,
            })
            .collect()
    }
}
