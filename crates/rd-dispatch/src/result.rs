//! The dispatch decision returned to callers.

use rd_hospital::HospitalSummary;

/// Timing breakdown, rounded for presentation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DispatchMetrics {
    pub travel_time_mins:         f64,
    pub waiting_time_mins:        f64,
    pub total_response_time_mins: f64,
}

/// The chosen hospital, the route to it, and how long it is expected to take.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DispatchResult {
    /// Start node the route begins at (after normalization).
    pub start_node: String,
    /// The hospital as it was in the snapshot the decision was made on.
    pub hospital: HospitalSummary,
    /// Node ids from `start_node` to the hospital, both inclusive.
    pub route: Vec<String>,
    pub metrics: DispatchMetrics,
    /// Version of the snapshot the decision was computed against.
    pub snapshot_version: u64,
}
