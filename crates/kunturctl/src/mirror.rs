//! Local offline mirror of the case store.
//!
//! A single JSON document in the user data directory with the collection
//! under one named slot, the same shape the web client keeps in browser
//! local storage. Independent of any running daemon.

use std::path::PathBuf;

use anyhow::{Context, Result};
use kuntur_common::store::MIRROR_SLOT;
use kuntur_common::{CaseRepository, SlotStore};

/// Environment variable overriding the mirror document location
pub const MIRROR_ENV: &str = "KUNTUR_MIRROR";

/// Resolve the mirror document path ($KUNTUR_MIRROR or the user data dir).
pub fn mirror_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var(MIRROR_ENV) {
        return Ok(PathBuf::from(path));
    }

    let base = dirs::data_dir().context("cannot resolve the user data directory")?;
    Ok(base.join("kuntur").join("mirror.json"))
}

/// Open the mirror repository, creating an empty collection on first use.
pub fn open_repository() -> Result<CaseRepository<SlotStore>> {
    let path = mirror_path()?;
    Ok(CaseRepository::open(SlotStore::new(path, MIRROR_SLOT)))
}
