//! In-memory case repository with write-through persistence.
//!
//! The repository exclusively owns the collection; durability goes through
//! the injected [`CaseStore`]. Every mutation persists the full collection
//! before returning, so callers observe a linear history. If the store
//! rejects a write the in-memory mutation is rolled back, keeping memory in
//! step with the last good document on disk.

use chrono::Utc;
use tracing::info;

use crate::case::{Case, CaseFilter, CaseUpdate, NewCase};
use crate::error::CaseError;
use crate::store::CaseStore;

pub struct CaseRepository<S: CaseStore> {
    store: S,
    cases: Vec<Case>,
    next_id: u32,
}

impl<S: CaseStore> CaseRepository<S> {
    /// Load the stored collection and derive the identifier counter.
    ///
    /// The counter is max-of-suffixes + 1, not a record count, so gaps in
    /// the stored collection can never cause a collision. Records with a
    /// malformed identifier are kept but ignored for the counter.
    pub fn open(store: S) -> Self {
        let cases = store.load();
        let next_id = cases
            .iter()
            .filter_map(|case| Case::id_suffix(&case.case_id))
            .max()
            .map_or(1, |max| max + 1);

        info!(
            "Case repository ready: {} cases, next id {}",
            cases.len(),
            Case::format_id(next_id)
        );

        Self {
            store,
            cases,
            next_id,
        }
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Validate, assign the next `CASO-NNNN` identifier, append and persist.
    ///
    /// Validation failures leave the collection untouched. The counter only
    /// advances once the write has landed.
    pub fn add_case(&mut self, draft: NewCase) -> Result<Case, CaseError> {
        draft.validate()?;

        let case = draft.into_case(Case::format_id(self.next_id), Utc::now());
        self.cases.push(case.clone());
        if let Err(e) = self.store.save(&self.cases) {
            self.cases.pop();
            return Err(e.into());
        }
        self.next_id += 1;

        info!("Case {} opened for alarm {}", case.case_id, case.alarm_id);
        Ok(case)
    }

    /// Snapshot of the collection in insertion order, optionally narrowed
    /// by exact-match filters. No match is an empty list, not an error.
    pub fn all_cases(&self, filter: &CaseFilter) -> Vec<Case> {
        self.cases
            .iter()
            .filter(|case| filter.matches(case))
            .cloned()
            .collect()
    }

    /// Exact lookup by identifier. Misses are `None`, never an error.
    pub fn case_by_id(&self, case_id: &str) -> Option<Case> {
        self.cases.iter().find(|case| case.case_id == case_id).cloned()
    }

    /// Merge a partial update over an existing case and persist.
    ///
    /// `id_caso` and `fecha_creacion` cannot be carried by [`CaseUpdate`],
    /// so they stay untouched no matter what the caller sent. Returns
    /// `Ok(None)` for an unknown identifier.
    pub fn update_case(
        &mut self,
        case_id: &str,
        update: &CaseUpdate,
    ) -> Result<Option<Case>, CaseError> {
        let Some(index) = self.cases.iter().position(|case| case.case_id == case_id) else {
            return Ok(None);
        };

        let previous = self.cases[index].clone();
        update.apply(&mut self.cases[index]);
        self.cases[index].updated_at = Some(Utc::now());

        if let Err(e) = self.store.save(&self.cases) {
            self.cases[index] = previous;
            return Err(e.into());
        }

        Ok(Some(self.cases[index].clone()))
    }
}

// =============================================================================
// Tests
// =============================================================================
