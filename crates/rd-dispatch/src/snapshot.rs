//! Immutable, versioned view of the network and hospitals.

use std::collections::BTreeMap;
use std::sync::Arc;

use log::debug;

use rd_hospital::Hospital;
use rd_network::{RoadNetwork, RoadNetworkBuilder};

use crate::{DataProvider, DispatchError};

/// Everything one optimization pass reads, frozen at a point in time.
///
/// Cloning is cheap (two `Arc`s).  The network `Arc` is shared between
/// consecutive snapshots when only hospital data was refreshed.
#[derive(Debug, Clone)]
pub struct DispatchSnapshot {
    version:   u64,
    network:   Arc<RoadNetwork>,
    hospitals: Arc<BTreeMap<String, Hospital>>,
}

impl DispatchSnapshot {
    /// Assemble a snapshot, checking that every hospital has a network node
    /// and that no hospital id repeats.
    pub fn new(
        version:   u64,
        network:   Arc<RoadNetwork>,
        hospitals: impl IntoIterator<Item = Hospital>,
    ) -> Result<Self, DispatchError> {
        let mut by_id = BTreeMap::new();
        for hospital in hospitals {
            if !network.contains(hospital.id()) {
                return Err(DispatchError::HospitalNodeMissing(hospital.id().to_owned()));
            }
            let id = hospital.id().to_owned();
            if by_id.insert(id.clone(), hospital).is_some() {
                return Err(DispatchError::DuplicateHospital(id));
            }
        }
        Ok(Self { version, network, hospitals: Arc::new(by_id) })
    }

    /// Build network and hospitals from scratch.
    pub fn load<P>(provider: &P, version: u64) -> Result<Self, DispatchError>
    where
        P: DataProvider + ?Sized,
    {
        let network = Arc::new(build_network(provider)?);
        let hospitals = load_hospitals(provider)?;
        Self::new(version, network, hospitals)
    }

    /// Successor snapshot with freshly loaded hospitals and this snapshot's
    /// network.
    pub fn with_reloaded_hospitals<P: DataProvider + ?Sized>(
        &self,
        provider: &P,
    ) -> Result<Self, DispatchError> {
        let hospitals = load_hospitals(provider)?;
        Self::new(self.version + 1, Arc::clone(&self.network), hospitals)
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn network(&self) -> &RoadNetwork {
        &self.network
    }

    /// Hospitals keyed (and iterated) by id.
    pub fn hospitals(&self) -> &BTreeMap<String, Hospital> {
        &self.hospitals
    }

    pub fn hospital(&self, id: &str) -> Option<&Hospital> {
        self.hospitals.get(id)
    }

    pub fn is_hospital(&self, node: &str) -> bool {
        self.hospitals.contains_key(node)
    }

    /// Valid ambulance start locations: every non-hospital node, ascending.
    pub fn locations(&self) -> Vec<String> {
        self.network
            .node_names()
            .filter(|n| !self.is_hospital(n))
            .map(str::to_owned)
            .collect()
    }

    /// `true` if both snapshots share the same network allocation.
    pub fn shares_network_with(&self, other: &DispatchSnapshot) -> bool {
        Arc::ptr_eq(&self.network, &other.network)
    }
}

// ── Loading helpers ───────────────────────────────────────────────────────────

/// Build a [`RoadNetwork`] from the provider's node and edge lists.
pub fn build_network<P: DataProvider + ?Sized>(provider: &P) -> Result<RoadNetwork, DispatchError> {
    let nodes = provider.list_nodes()?;
    let edges = provider.list_edges()?;

    let mut builder = RoadNetworkBuilder::new();
    builder.add_nodes(nodes.iter().map(String::as_str));
    for edge in &edges {
        builder.add_edge(&edge.source, &edge.target, edge.weight)?;
    }
    debug!(
        "built road network: {} nodes, {} roads",
        builder.node_count(),
        builder.road_count()
    );
    Ok(builder.build()?)
}

/// Validate every hospital record from the provider.
pub fn load_hospitals<P>(provider: &P) -> Result<Vec<Hospital>, DispatchError>
where
    P: DataProvider + ?Sized,
{
    provider
        .list_hospitals()?
        .into_iter()
        .map(|r| Hospital::new(r.hospital_id, r.name, r.capacity, r.current_occupancy))
        .map(|h| h.map_err(DispatchError::from))
        .collect()
}
