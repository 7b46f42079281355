//! The hospital record and its wait-time model.

use rd_core::{DEFAULT_WAIT_ALPHA, round_to};

use crate::{HospitalError, HospitalResult};

// ── Hospital ──────────────────────────────────────────────────────────────────

/// A hospital reachable on the road network.
///
/// `id` doubles as the hospital's road-network node id.  Occupancy above
/// capacity is a legal overflow state, not an error.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Hospital {
    id:                String,
    name:              String,
    capacity:          u32,
    current_occupancy: u32,
}

impl Hospital {
    /// Validate and construct a hospital.
    ///
    /// Fails with [`HospitalError::InvalidHospitalData`] if `capacity <= 0`,
    /// `current_occupancy < 0`, or either does not fit in a `u32`.
    pub fn new(
        id:                impl Into<String>,
        name:              impl Into<String>,
        capacity:          i64,
        current_occupancy: i64,
    ) -> HospitalResult<Self> {
        let id = id.into();
        let capacity = match u32::try_from(capacity) {
            Ok(c) if c > 0 => c,
            _ => {
                let reason = format!("capacity must be greater than 0 (got {capacity})");
                return Err(invalid(&id, reason));
            }
        };
        let current_occupancy = checked_occupancy(&id, current_occupancy)?;
        Ok(Self { id, name: name.into(), capacity, current_occupancy })
    }

    /// Copy of `self` with a new occupancy, validated like [`new`](Self::new).
    pub fn with_occupancy(&self, current_occupancy: i64) -> HospitalResult<Self> {
        let current_occupancy = checked_occupancy(&self.id, current_occupancy)?;
        Ok(Self { current_occupancy, ..self.clone() })
    }

    pub fn id(&self) -> &str { &self.id }
    pub fn name(&self) -> &str { &self.name }
    pub fn capacity(&self) -> u32 { self.capacity }
    pub fn current_occupancy(&self) -> u32 { self.current_occupancy }

    /// `current_occupancy / capacity`.  May exceed 1.0.
    #[inline]
    pub fn occupancy_ratio(&self) -> f64 {
        self.current_occupancy as f64 / self.capacity as f64
    }

    /// `true` once occupancy has reached capacity.
    #[inline]
    pub fn is_overflowing(&self) -> bool {
        self.current_occupancy >= self.capacity
    }

    /// Expected wait in minutes: `alpha * occupancy_ratio`, or
    /// `f64::INFINITY` when the hospital is overflowing.
    pub fn wait_time(&self, alpha: f64) -> f64 {
        if self.is_overflowing() {
            return f64::INFINITY;
        }
        // alpha * (occ / cap), multiplied first so integral results stay exact.
        alpha * self.current_occupancy as f64 / self.capacity as f64
    }

    /// [`wait_time`](Self::wait_time) with [`DEFAULT_WAIT_ALPHA`].
    pub fn expected_wait(&self) -> f64 {
        self.wait_time(DEFAULT_WAIT_ALPHA)
    }

    /// Presentation view with the wait time rounded to `decimals` places.
    pub fn summary(&self, alpha: f64, decimals: u32) -> HospitalSummary {
        HospitalSummary {
            id:                self.id.clone(),
            name:              self.name.clone(),
            capacity:          self.capacity,
            current_occupancy: self.current_occupancy,
            waiting_time_mins: round_to(self.wait_time(alpha), decimals),
        }
    }
}

fn checked_occupancy(id: &str, occupancy: i64) -> HospitalResult<u32> {
    u32::try_from(occupancy).map_err(|_| {
        invalid(id, format!("occupancy must be between 0 and {} (got {occupancy})", u32::MAX))
    })
}

fn invalid(id: &str, reason: String) -> HospitalError {
    HospitalError::InvalidHospitalData { id: id.to_owned(), reason }
}

// ── HospitalSummary ───────────────────────────────────────────────────────────

/// Point-in-time view of a hospital as reported in a dispatch decision.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HospitalSummary {
    pub id:                String,
    pub name:              String,
    pub capacity:          u32,
    pub current_occupancy: u32,
    /// `f64::INFINITY` for an overflowing hospital.
    pub waiting_time_mins: f64,
}
