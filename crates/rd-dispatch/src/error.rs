use rd_core::CoreError;
use rd_hospital::HospitalError;
use rd_network::NetworkError;
use thiserror::Error;

use crate::ProviderError;

/// Everything that can stop a dispatch decision or a snapshot refresh.
///
/// A hospital that cannot be reached is not an error; it is skipped.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("invalid start location {location:?}")]
    InvalidInput { location: String },

    #[error("could not find a route from {location:?} to any available hospital")]
    NoRouteFound { location: String },

    #[error(transparent)]
    Hospital(#[from] HospitalError),

    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error("hospital {0:?} has no node in the road network")]
    HospitalNodeMissing(String),

    #[error("hospital {0:?} is listed more than once")]
    DuplicateHospital(String),

    #[error("data source unavailable: {0}")]
    DataSourceUnavailable(#[from] ProviderError),

    #[error(transparent)]
    Config(#[from] CoreError),
}
