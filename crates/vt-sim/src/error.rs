//! Error types for vt-sim.

use thiserror::Error;

use vt_core::ConfigError;

#[derive(Debug, Error)]
pub enum SimError {
    /// The road graph has no usable edges — no vehicle can be spawned.
    #[error("no valid edges in the road network; cannot spawn vehicles")]
    NoValidEdges,

    #[error("simulation configuration rejected: {0}")]
    Config(#[from] ConfigError),
}

/// Alias for `Result<T, SimError>`.
pub type SimResult<T> = Result<T, SimError>;
