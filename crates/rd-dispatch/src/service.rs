//! The entry point the serving layer talks to.

use std::sync::Arc;

use rd_core::DispatchConfig;

use crate::{
    DataProvider, DispatchError, DispatchOptimizer, DispatchResult, DispatchSnapshot, SnapshotStore,
};

/// Dispatch decisions, start-location listing, and occupancy updates over a
/// single [`DataProvider`].
///
/// # Example
///
/// ```rust,ignore
/// let service = DispatchService::new(rd_data::sample_city(), DispatchConfig::default())?;
/// let decision = service.find_optimal_hospital("a")?; // normalized to "A"
/// println!("{} via {:?}", decision.hospital.name, decision.route);
/// ```
pub struct DispatchService<P: DataProvider> {
    config:    DispatchConfig,
    optimizer: DispatchOptimizer,
    store:     SnapshotStore<P>,
}

impl<P: DataProvider> DispatchService<P> {
    /// Validate `config` and load the first snapshot from `provider`.
    pub fn new(provider: P, config: DispatchConfig) -> Result<Self, DispatchError> {
        Ok(Self {
            optimizer: DispatchOptimizer::new(&config)?,
            store:     SnapshotStore::open(provider)?,
            config,
        })
    }

    /// Best hospital for an ambulance at `location`, computed against the
    /// snapshot current at the time of the call.
    pub fn find_optimal_hospital(&self, location: &str) -> Result<DispatchResult, DispatchError> {
        let start = self.normalize(location)?;
        let snapshot = self.store.current();
        self.optimizer.find_optimal(&snapshot, &start)
    }

    /// Non-hospital node ids, ascending.
    pub fn list_locations(&self) -> Vec<String> {
        self.store.current().locations()
    }

    /// See [`SnapshotStore::apply_occupancy_update`].
    pub fn update_occupancy(
        &self,
        hospital_id:   &str,
        new_occupancy: i64,
    ) -> Result<bool, DispatchError> {
        self.store.apply_occupancy_update(hospital_id, new_occupancy)
    }

    /// Reload everything from the provider.  On failure the previous
    /// snapshot keeps serving.
    pub fn refresh(&self) -> Result<u64, DispatchError> {
        self.store.refresh()
    }

    pub fn snapshot(&self) -> Arc<DispatchSnapshot> {
        self.store.current()
    }

    pub fn store(&self) -> &SnapshotStore<P> {
        &self.store
    }

    pub fn optimizer(&self) -> &DispatchOptimizer {
        &self.optimizer
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    fn normalize(&self, location: &str) -> Result<String, DispatchError> {
        let trimmed = location.trim();
        if trimmed.is_empty() {
            return Err(DispatchError::InvalidInput { location: location.to_owned() });
        }
        Ok(if self.config.normalize_locations {
            trimmed.to_uppercase()
        } else {
            trimmed.to_owned()
        })
    }
}
