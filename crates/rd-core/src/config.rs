//! Engine configuration.

use crate::{CoreError, CoreResult, DEFAULT_WAIT_ALPHA};

/// Tunables for the dispatch engine.
///
/// Typically loaded from a JSON file by the application crate (with the
/// `serde` feature, missing fields take their defaults) and handed to
/// `DispatchService::new`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DispatchConfig {
    /// Wait-time scale: a hospital at occupancy ratio `r < 1` costs
    /// `wait_alpha * r` minutes.  Default: 10.0.
    pub wait_alpha: f64,

    /// Decimal places kept in the metrics of a `DispatchResult`.  Default: 2.
    pub metric_decimals: u32,

    /// Trim and upper-case incoming location ids before lookup.
    pub normalize_locations: bool,

    /// Minimum hospital count before the per-hospital evaluation runs on
    /// Rayon's pool.  Only consulted with the `parallel` feature of
    /// `rd-dispatch`.
    pub parallel_threshold: usize,
}

impl DispatchConfig {
    /// Largest accepted `metric_decimals`.
    pub const MAX_DECIMALS: u32 = 6;

    pub fn validate(&self) -> CoreResult<()> {
        if !self.wait_alpha.is_finite() || self.wait_alpha < 0.0 {
            return Err(CoreError::Config(format!(
                "wait_alpha must be a finite, non-negative number of minutes (got {})",
                self.wait_alpha
            )));
        }
        if self.metric_decimals > Self::MAX_DECIMALS {
            return Err(CoreError::Config(format!(
                "metric_decimals must be at most {} (got {})",
                Self::MAX_DECIMALS,
                self.metric_decimals
            )));
        }
        Ok(())
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            wait_alpha:          DEFAULT_WAIT_ALPHA,
            metric_decimals:     2,
            normalize_locations: true,
            parallel_threshold:  64,
        }
    }
}
