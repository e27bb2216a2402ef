//! Error types for the case store.
//!
//! Lookup misses are not errors; they are `None` / `Ok(None)` at the
//! repository surface. Corrupt storage on load is logged and degraded to an
//! empty collection by the adapters, so only validation failures and write
//! failures reach callers.

use thiserror::Error;

/// Errors surfaced by the case repository.
#[derive(Debug, Error)]
pub enum CaseError {
    /// A required creation field was missing or empty. Carries the wire
    /// name of the first offender.
    #[error("Campo requerido faltante: {0}")]
    MissingField(String),

    /// The backing store rejected a write.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors from the persistence adapters.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot write case store: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot serialize case collection: {0}")]
    Serialize(#[from] serde_json::Error),
}
