//! Error types for vt-network.

use thiserror::Error;

/// Errors raised while extracting, flattening, or building the road graph.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// A shape token was not a parseable `"x,y"` coordinate pair.
    ///
    /// The upstream extraction should reject such edges before they reach the
    /// graph builder; once built, all waypoints are valid floats.
    #[error("malformed shape point {token:?}: {reason}")]
    MalformedShape { token: String, reason: String },

    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::DeError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, NetworkError>`.
pub type NetworkResult<T> = Result<T, NetworkError>;
