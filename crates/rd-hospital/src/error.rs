use thiserror::Error;

#[derive(Debug, Error)]
pub enum HospitalError {
    #[error("invalid data for hospital {id:?}: {reason}")]
    InvalidHospitalData { id: String, reason: String },
}

pub type HospitalResult<T> = Result<T, HospitalError>;
