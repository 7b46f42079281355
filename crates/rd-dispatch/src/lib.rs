//! `rd-dispatch` — picks the hospital with the lowest expected response time.
//!
//! # Flow
//!
//! ```text
//! DataProvider ──load──▶ DispatchSnapshot (Arc, versioned) ──▶ SnapshotStore
//!                                                               │ current()
//! DispatchService::find_optimal_hospital(location) ─────────────┘
//!   └─ DispatchOptimizer::find_optimal(&snapshot, location)
//!        ① one Dijkstra search from `location`
//!        ② per hospital: travel + wait   (Rayon with `parallel`)
//!        ③ argmin on (total, hospital id)
//! ```
//!
//! Snapshots are immutable.  An occupancy update or refresh builds a new
//! snapshot and swaps it in; a dispatch already running keeps the `Arc` it
//! started with.  The optimizer never locks and never mutates.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Evaluates hospitals on Rayon's thread pool.            |
//! | `serde`    | Derives serde traits on records, results, and config.  |

pub mod error;
pub mod optimizer;
pub mod provider;
pub mod result;
pub mod service;
pub mod snapshot;
pub mod store;


pub use error::DispatchError;
pub use optimizer::DispatchOptimizer;
pub use provider::{
    DataProvider, EdgeRecord, HospitalRecord, InMemoryProvider, ProviderError, ProviderResult,
};
pub use result::{DispatchMetrics, DispatchResult};
pub use service::DispatchService;
pub use snapshot::DispatchSnapshot;
pub use store::SnapshotStore;
