//! Total-response-time minimization over a snapshot.

use std::cmp::Ordering;

use log::debug;

use rd_core::{CoreResult, DispatchConfig, round_to};
use rd_hospital::Hospital;
use rd_network::{NetworkError, ShortestPathTree};

use crate::{DispatchError, DispatchMetrics, DispatchResult, DispatchSnapshot};

/// Chooses the hospital minimizing `travel + wait` from a start node.
///
/// Stateless apart from its configuration: [`find_optimal`](Self::find_optimal)
/// is a pure function of the snapshot and the start location.
#[derive(Debug, Clone)]
pub struct DispatchOptimizer {
    wait_alpha:         f64,
    metric_decimals:    u32,
    #[cfg_attr(not(feature = "parallel"), allow(dead_code))]
    parallel_threshold: usize,
}

/// A hospital that can be reached and has room.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Candidate<'a> {
    pub(crate) hospital: &'a Hospital,
    pub(crate) travel:   f64,
    pub(crate) wait:     f64,
    pub(crate) total:    f64,
}

impl DispatchOptimizer {
    /// Fails with [`CoreError::Config`](rd_core::CoreError::Config) if
    /// `config` does not pass [`DispatchConfig::validate`].
    pub fn new(config: &DispatchConfig) -> CoreResult<Self> {
        config.validate()?;
        Ok(Self {
            wait_alpha:         config.wait_alpha,
            metric_decimals:    config.metric_decimals,
            parallel_threshold: config.parallel_threshold,
        })
    }

    /// Pick the hospital with the lowest total response time from `start`.
    ///
    /// Hospitals that are unreachable or overflowing are skipped.  Equal
    /// totals go to the lowest hospital id.
    ///
    /// # Errors
    /// - [`DispatchError::InvalidInput`] if `start` is not a network node.
    /// - [`DispatchError::NoRouteFound`] if no hospital has a finite total.
    pub fn find_optimal(
        &self,
        snapshot: &DispatchSnapshot,
        start:    &str,
    ) -> Result<DispatchResult, DispatchError> {
        let tree = snapshot
            .network()
            .shortest_paths_from(start)
            .map_err(|e| match e {
                NetworkError::NodeNotFound(_) => {
                    DispatchError::InvalidInput { location: start.to_owned() }
                }
                other => DispatchError::Network(other),
            })?;

        let best = self
            .best_candidate(&tree, snapshot)
            .ok_or_else(|| DispatchError::NoRouteFound { location: start.to_owned() })?;

        let decimals = self.metric_decimals;
        debug!(
            "dispatch from {start}: {} (travel {:.2} + wait {:.2} = {:.2} min, snapshot v{})",
            best.hospital.id(),
            best.travel,
            best.wait,
            best.total,
            snapshot.version()
        );

        Ok(DispatchResult {
            start_node: start.to_owned(),
            hospital:   best.hospital.summary(self.wait_alpha, decimals),
            route:      tree.path_to(best.hospital.id()),
            metrics:    DispatchMetrics {
                travel_time_mins:         round_to(best.travel, decimals),
                waiting_time_mins:        round_to(best.wait, decimals),
                total_response_time_mins: round_to(best.total, decimals),
            },
            snapshot_version: snapshot.version(),
        })
    }

    /// Serial reduction, or Rayon's once the snapshot holds at least
    /// `parallel_threshold` hospitals.  Both reduce with [`prefer`], so they
    /// pick the same winner.
    fn best_candidate<'a>(
        &self,
        tree:     &ShortestPathTree<'_>,
        snapshot: &'a DispatchSnapshot,
    ) -> Option<Candidate<'a>> {
        #[cfg(feature = "parallel")]
        if snapshot.hospitals().len() >= self.parallel_threshold {
            return self.best_parallel(tree, snapshot);
        }
        self.best_serial(tree, snapshot)
    }

    pub(crate) fn best_serial<'a>(
        &self,
        tree:     &ShortestPathTree<'_>,
        snapshot: &'a DispatchSnapshot,
    ) -> Option<Candidate<'a>> {
        snapshot
            .hospitals()
            .values()
            .filter_map(|h| self.evaluate(tree, h))
            .reduce(prefer)
    }

    #[cfg(feature = "parallel")]
    pub(crate) fn best_parallel<'a>(
        &self,
        tree:     &ShortestPathTree<'_>,
        snapshot: &'a DispatchSnapshot,
    ) -> Option<Candidate<'a>> {
        use rayon::prelude::*;

        let list: Vec<&'a Hospital> = snapshot.hospitals().values().collect();
        list.par_iter()
            .filter_map(|&h| self.evaluate(tree, h))
            .reduce_with(prefer)
    }

    fn evaluate<'a>(
        &self,
        tree:     &ShortestPathTree<'_>,
        hospital: &'a Hospital,
    ) -> Option<Candidate<'a>> {
        let travel = tree.time_to(hospital.id()).unwrap_or(f64::INFINITY);
        if !travel.is_finite() {
            debug!("skipping {}: unreachable from {}", hospital.id(), tree.source());
            return None;
        }
        let wait = hospital.wait_time(self.wait_alpha);
        let total = travel + wait;
        if !total.is_finite() {
            debug!("skipping {}: at capacity", hospital.id());
            return None;
        }
        Some(Candidate { hospital, travel, wait, total })
    }
}

/// Lower total wins; equal totals go to the lower hospital id.  Associative
/// and commutative, so any reduction order yields the same winner.
pub(crate) fn prefer<'a>(a: Candidate<'a>, b: Candidate<'a>) -> Candidate<'a> {
    let order = a
        .total
        .total_cmp(&b.total)
        .then_with(|| a.hospital.id().cmp(b.hospital.id()));
    match order {
        Ordering::Greater => b,
        _ => a,
    }
}
