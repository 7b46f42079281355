//! Core error type.
//!
//! Sub-crates define their own error enums; `rd-dispatch` folds them all into
//! `DispatchError` via `From` impls.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `rd-core`.
pub type CoreResult<T> = Result<T, CoreError>;
