//! The data-source seam.
//!
//! The engine never talks to a database or file directly: it pulls plain
//! records through [`DataProvider`] whenever it builds a snapshot.  Records
//! are unvalidated; validation happens while the snapshot is assembled.

use std::sync::Arc;

use parking_lot::RwLock;
use thiserror::Error;

// ── Records ───────────────────────────────────────────────────────────────────

/// One undirected road as stored by a data source.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeRecord {
    pub source: String,
    pub target: String,
    /// Travel time in minutes.
    pub weight: f64,
}

impl EdgeRecord {
    pub fn new(source: &str, target: &str, weight: f64) -> Self {
        Self { source: source.to_owned(), target: target.to_owned(), weight }
    }
}

/// One hospital as stored by a data source.  Signed integers so that bad
/// source data reaches validation instead of failing to parse.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HospitalRecord {
    pub hospital_id:       String,
    pub name:              String,
    pub capacity:          i64,
    pub current_occupancy: i64,
}

impl HospitalRecord {
    pub fn new(hospital_id: &str, name: &str, capacity: i64, current_occupancy: i64) -> Self {
        Self {
            hospital_id: hospital_id.to_owned(),
            name: name.to_owned(),
            capacity,
            current_occupancy,
        }
    }
}

// ── Errors ────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("{0}")]
    Unavailable(String),

    #[error("malformed record: {0}")]
    Malformed(String),
}

pub type ProviderResult<T> = Result<T, ProviderError>;

// ── DataProvider ──────────────────────────────────────────────────────────────

/// Supplies the road network and hospital records, and persists occupancy
/// changes.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`: a `SnapshotStore` may refresh from
/// one thread while others read through the same service.
pub trait DataProvider: Send + Sync {
    fn list_nodes(&self) -> ProviderResult<Vec<String>>;

    fn list_edges(&self) -> ProviderResult<Vec<EdgeRecord>>;

    fn list_hospitals(&self) -> ProviderResult<Vec<HospitalRecord>>;

    /// Persist a new occupancy value.
    ///
    /// Returns `Ok(false)` if the hospital is unknown or already has that
    /// occupancy, `Ok(true)` if the stored value changed.
    fn apply_occupancy_update(&self, hospital_id: &str, new_occupancy: i64) -> ProviderResult<bool>;
}

impl<P: DataProvider + ?Sized> DataProvider for Arc<P> {
    fn list_nodes(&self) -> ProviderResult<Vec<String>> {
        (**self).list_nodes()
    }

    fn list_edges(&self) -> ProviderResult<Vec<EdgeRecord>> {
        (**self).list_edges()
    }

    fn list_hospitals(&self) -> ProviderResult<Vec<HospitalRecord>> {
        (**self).list_hospitals()
    }

    fn apply_occupancy_update(
        &self,
        hospital_id:   &str,
        new_occupancy: i64,
    ) -> ProviderResult<bool> {
        (**self).apply_occupancy_update(hospital_id, new_occupancy)
    }
}

// ── InMemoryProvider ──────────────────────────────────────────────────────────

/// A [`DataProvider`] backed by in-process collections.
///
/// The network is fixed at construction; hospital occupancy is mutable
/// through [`DataProvider::apply_occupancy_update`].  Records are served
/// back exactly as given, duplicates included, so snapshot assembly sees
/// the same data a real source would return.
#[derive(Debug, Default)]
pub struct InMemoryProvider {
    nodes:     Vec<String>,
    edges:     Vec<EdgeRecord>,
    hospitals: RwLock<Vec<HospitalRecord>>,
}

impl InMemoryProvider {
    pub fn new(
        nodes:     Vec<String>,
        edges:     Vec<EdgeRecord>,
        hospitals: Vec<HospitalRecord>,
    ) -> Self {
        Self { nodes, edges, hospitals: RwLock::new(hospitals) }
    }

    /// First record with `hospital_id`.
    pub fn hospital(&self, hospital_id: &str) -> Option<HospitalRecord> {
        self.hospitals
            .read()
            .iter()
            .find(|h| h.hospital_id == hospital_id)
            .cloned()
    }
}

impl DataProvider for InMemoryProvider {
    fn list_nodes(&self) -> ProviderResult<Vec<String>> {
        Ok(self.nodes.clone())
    }

    fn list_edges(&self) -> ProviderResult<Vec<EdgeRecord>> {
        Ok(self.edges.clone())
    }

    fn list_hospitals(&self) -> ProviderResult<Vec<HospitalRecord>> {
        Ok(self.hospitals.read().clone())
    }

    /// Updates every record with `hospital_id`; `true` if any changed.
    fn apply_occupancy_update(
        &self,
        hospital_id:   &str,
        new_occupancy: i64,
    ) -> ProviderResult<bool> {
        let mut changed = false;
        for record in self.hospitals.write().iter_mut() {
            if record.hospital_id == hospital_id && record.current_occupancy != new_occupancy {
                record.current_occupancy = new_occupancy;
                changed = true;
            }
        }
        Ok(changed)
    }
}
