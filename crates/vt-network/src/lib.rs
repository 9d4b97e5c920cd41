//! `vt-network` — road-network extraction and the simulation road graph.
//!
//! The pipeline this crate covers, left to right:
//!
//! ```text
//! .net.xml ──sumo──▶ EdgeRecord / JunctionRecord ──tables──▶ CSV
//!                                 │
//!                                 ▼ shape parse + node interning
//!                           RoadNetwork (CSR adjacency, read-only)
//! ```
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`sumo`]    | quick-xml extraction of `<edge>`/`<junction>` attributes  |
//! | [`tables`]  | flat `EdgeRecord`/`JunctionRecord` rows + CSV read/write  |
//! | [`shape`]   | `"x,y x,y …"` polyline parsing                            |
//! | [`network`] | `RoadNetwork` + `RoadNetworkBuilder`                      |
//! | [`error`]   | `NetworkError`, `NetworkResult<T>`                        |
//!
//! Only edges with a non-empty waypoint polyline and known endpoints enter
//! the graph; everything else is dropped at build time.  The built
//! `RoadNetwork` is immutable for the simulation's lifetime.

pub mod error;
pub mod network;
pub mod shape;
pub mod sumo;
pub mod tables;

#[cfg(test)]
mod tests;

pub use error::{NetworkError, NetworkResult};
pub use network::{RoadNetwork, RoadNetworkBuilder};
pub use shape::parse_shape;
pub use sumo::SumoNet;
pub use tables::{EdgeRecord, JunctionRecord};
