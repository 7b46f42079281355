//! `rd-network` — weighted road network and shortest-path routing.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`network`] | `RoadNetwork` (CSR), `RoadNetworkBuilder`                   |
//! | [`router`]  | Dijkstra queries, `ShortestPathTree`                        |
//! | [`error`]   | `NetworkError`, `NetworkResult<T>`                          |
//!
//! # Unreachable vs. unknown
//!
//! An unreachable destination is a normal outcome: `shortest_time` returns
//! `f64::INFINITY` and `shortest_path` an empty `Vec`.  Asking about a node
//! that is not in the network is an error ([`NetworkError::NodeNotFound`]),
//! except for `shortest_path`, which folds it into the empty result.

pub mod error;
pub mod network;
pub mod router;


pub use error::{NetworkError, NetworkResult};
pub use network::{MAX_ROAD_MINUTES, RoadNetwork, RoadNetworkBuilder};
pub use router::ShortestPathTree;
