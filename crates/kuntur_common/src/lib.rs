//! Kuntur Common - Shared case model, repository, and persistence adapters
//!
//! One logical component, two deployments: the kunturd file-backed store and
//! the kunturctl local mirror are both built from these types, each with its
//! own injected storage adapter.

pub mod case;
pub mod config;
pub mod error;
pub mod repository;
pub mod store;

pub use case::{Case, CaseFilter, CaseStatus, CaseUpdate, NewCase};
pub use config::KunturConfig;
pub use error::{CaseError, StoreError};
pub use repository::CaseRepository;
pub use store::{CaseStore, JsonFileStore, SlotStore};
