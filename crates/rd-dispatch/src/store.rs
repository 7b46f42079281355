//! Holder of the current snapshot and the refresh boundary.

use std::sync::Arc;

use log::{info, warn};
use parking_lot::{Mutex, RwLock};

use rd_hospital::HospitalError;

use crate::{DataProvider, DispatchError, DispatchSnapshot};

/// Publishes [`DispatchSnapshot`]s built from a [`DataProvider`].
///
/// Readers clone the current `Arc` under a brief read lock and then work
/// lock-free.  Refreshes are serialized by `refresh_lock`, build the next
/// snapshot without blocking readers, and swap it in under a brief write
/// lock.  A failed refresh leaves the previous snapshot in place.
pub struct SnapshotStore<P: DataProvider> {
    provider:     P,
    current:      RwLock<Arc<DispatchSnapshot>>,
    refresh_lock: Mutex<()>,
}

impl<P: DataProvider> SnapshotStore<P> {
    /// Load the first snapshot (version 1).  Fails if the provider is
    /// unavailable or its data is invalid, since there is nothing stale to
    /// fall back to.
    pub fn open(provider: P) -> Result<Self, DispatchError> {
        let first = DispatchSnapshot::load(&provider, 1)?;
        info!(
            "loaded snapshot v1: {} nodes, {} hospitals",
            first.network().node_count(),
            first.hospitals().len()
        );
        Ok(Self {
            provider,
            current:      RwLock::new(Arc::new(first)),
            refresh_lock: Mutex::new(()),
        })
    }

    /// The snapshot new computations should use.
    pub fn current(&self) -> Arc<DispatchSnapshot> {
        Arc::clone(&self.current.read())
    }

    pub fn version(&self) -> u64 {
        self.current.read().version()
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Reload network and hospitals.  Returns the new version.
    pub fn refresh(&self) -> Result<u64, DispatchError> {
        self.publish("full", |base| DispatchSnapshot::load(&self.provider, base.version() + 1))
    }

    /// Reload hospitals only, keeping the current network.
    pub fn refresh_hospitals(&self) -> Result<u64, DispatchError> {
        self.publish("hospital", |base| base.with_reloaded_hospitals(&self.provider))
    }

    /// Validate and persist a new occupancy, then publish a snapshot that
    /// reflects it.
    ///
    /// Returns `Ok(false)` when the provider reports the hospital unknown or
    /// the value unchanged; no new snapshot is published in that case.
    pub fn apply_occupancy_update(
        &self,
        hospital_id:   &str,
        new_occupancy: i64,
    ) -> Result<bool, DispatchError> {
        match self.current().hospital(hospital_id) {
            Some(h) => {
                h.with_occupancy(new_occupancy)?;
            }
            None if new_occupancy < 0 => {
                return Err(HospitalError::InvalidHospitalData {
                    id:     hospital_id.to_owned(),
                    reason: format!("occupancy cannot be negative (got {new_occupancy})"),
                }
                .into());
            }
            None => {}
        }

        if !self.provider.apply_occupancy_update(hospital_id, new_occupancy)? {
            return Ok(false);
        }
        info!("occupancy of {hospital_id} set to {new_occupancy}");
        self.refresh_hospitals()?;
        Ok(true)
    }

    fn publish<F>(&self, kind: &str, build: F) -> Result<u64, DispatchError>
    where
        F: FnOnce(&DispatchSnapshot) -> Result<DispatchSnapshot, DispatchError>,
    {
        let _guard = self.refresh_lock.lock();
        let base = self.current();
        match build(&base) {
            Ok(next) => {
                let version = next.version();
                *self.current.write() = Arc::new(next);
                info!("published snapshot v{version} ({kind} refresh)");
                Ok(version)
            }
            Err(e) => {
                warn!("{kind} refresh failed, still serving snapshot v{}: {e}", base.version());
                Err(e)
            }
        }
    }
}
