//! `rd-core` — foundational types for the `rapid_dispatch` decision engine.
//!
//! This crate is a dependency of every other `rd-*` crate.  It has no `rd-*`
//! dependencies and only `thiserror` (plus optional `serde`) from outside.
//!
//! # What lives here
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`ids`]      | `NodeId`, `EdgeId`                                     |
//! | [`config`]   | `DispatchConfig`                                       |
//! | [`minutes`]  | `DEFAULT_WAIT_ALPHA`, `round_to`                       |
//! | [`error`]    | `CoreError`, `CoreResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod minutes;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::DispatchConfig;
pub use error::{CoreError, CoreResult};
pub use ids::{EdgeId, NodeId};
pub use minutes::{DEFAULT_WAIT_ALPHA, round_to};
