//! `vt-core` — foundational types for the `rust_vt` trajectory generator.
//!
//! This crate is a dependency of every other `vt-*` crate.  It intentionally
//! has no `vt-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`ids`]      | `VehicleId`, `NodeId`, `EdgeId`                       |
//! | [`geo`]      | `Point`, Euclidean distance, heading                  |
//! | [`time`]     | `Tick`, `SimClock`                                    |
//! | [`config`]   | `SimConfig`, `ConfigError`                            |
//! | [`rng`]      | `VehicleRng` (per-vehicle), `VehicleRngs`             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{ConfigError, SimConfig};
pub use geo::Point;
pub use ids::{EdgeId, NodeId, VehicleId};
pub use rng::{VehicleRng, VehicleRngs};
pub use time::{SimClock, Tick};
