//! Persistence adapters for the case collection.
//!
//! Both adapters persist the whole collection as one pretty-printed JSON
//! document, replaced on every save. A missing or unreadable backing store
//! degrades to an empty collection on load; it never takes the service down.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::warn;

use crate::case::Case;
use crate::error::StoreError;

/// Slot key used by the kunturctl mirror.
pub const MIRROR_SLOT: &str = "kuntur_casos";

/// Durable storage for the full case collection.
///
/// `save` is called after every mutation with the complete collection;
/// `load` is called once when a repository opens. `load` never fails.
pub trait CaseStore {
    fn load(&self) -> Vec<Case>;
    fn save(&self, cases: &[Case]) -> Result<(), StoreError>;
}

/// Server-side adapter: one JSON file holding the case array.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CaseStore for JsonFileStore {
    fn load(&self) -> Vec<Case> {
        if !self.path.exists() {
            return Vec::new();
        }

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Cannot read case file {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(cases) => cases,
            Err(e) => {
                warn!(
                    "Corrupt case file {}, starting empty: {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    fn save(&self, cases: &[Case]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(cases)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Client-side adapter: a named slot inside a single JSON document, the
/// shape the web client keeps in browser local storage. Slots other than
/// ours are preserved across saves.
#[derive(Debug, Clone)]
pub struct SlotStore {
    path: PathBuf,
    slot: String,
}

impl SlotStore {
    pub fn new(path: impl Into<PathBuf>, slot: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            slot: slot.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_slots(&self) -> BTreeMap<String, Value> {
        if !self.path.exists() {
            return BTreeMap::new();
        }

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Cannot read mirror {}: {}", self.path.display(), e);
                return BTreeMap::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(slots) => slots,
            Err(e) => {
                warn!(
                    "Corrupt mirror {}, starting empty: {}",
                    self.path.display(),
                    e
                );
                BTreeMap::new()
            }
        }
    }
}

impl CaseStore for SlotStore {
    fn load(&self) -> Vec<Case> {
        let mut slots = self.read_slots();
        let Some(value) = slots.remove(&self.slot) else {
            return Vec::new();
        };

        match serde_json::from_value(value) {
            Ok(cases) => cases,
            Err(e) => {
                warn!(
                    "Corrupt slot '{}' in {}, starting empty: {}",
                    self.slot,
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    fn save(&self, cases: &[Case]) -> Result<(), StoreError> {
        let mut slots = self.read_slots();
        slots.insert(self.slot.clone(), serde_json::to_value(cases)?);

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&slots)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
