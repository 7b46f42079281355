//! `rd-hospital` — hospital records and their expected-wait cost model.
//!
//! A [`Hospital`] is validated once, at construction, and is immutable
//! afterwards; occupancy changes produce a new value via
//! [`Hospital::with_occupancy`].  The wait-time model is linear in the
//! occupancy ratio and infinite once the hospital is at or over capacity.

pub mod error;
pub mod hospital;


pub use error::{HospitalError, HospitalResult};
pub use hospital::{Hospital, HospitalSummary};
