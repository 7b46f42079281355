//! Network error type.

use thiserror::Error;

/// Errors produced by `rd-network`.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("node {0:?} not found in network")]
    NodeNotFound(String),

    #[error(
        "invalid travel time {minutes} on road {from:?} - {to:?}: must be between 0 and 1e9 minutes"
    )]
    InvalidWeight { from: String, to: String, minutes: f64 },

    #[error("network too large for u32 ids: {nodes} nodes, {roads} roads")]
    TooLarge { nodes: usize, roads: usize },
}

pub type NetworkResult<T> = Result<T, NetworkError>;
