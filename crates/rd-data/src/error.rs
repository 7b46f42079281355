//! Error types for rd-data.

use rd_dispatch::ProviderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type DataResult<T> = Result<T, DataError>;

/// I/O failures mean the source is unreachable; anything the CSV parser
/// rejects is malformed data.
impl From<DataError> for ProviderError {
    fn from(e: DataError) -> Self {
        match e {
            DataError::Io(io) => ProviderError::Unavailable(io.to_string()),
            DataError::Csv(csv) if csv.is_io_error() => ProviderError::Unavailable(csv.to_string()),
            DataError::Csv(csv) => ProviderError::Malformed(csv.to_string()),
        }
    }
}
