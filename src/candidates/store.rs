use tracing::{info, warn};

use super::domain::{Candidate, CandidateDraft, CandidateId, FilterSelection, FilterState};
use super::seed;
use super::storage::{BlobStorage, StorageError};
use super::validation::{CandidateValidator, ValidationError};

/// Blob key the collection is persisted under.
pub const DEFAULT_STORAGE_KEY: &str = "candidates_data";

/// Records shown per page of the derived view.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Error raised by candidate store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("no candidate with id `{0}`")]
    NotFound(CandidateId),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// The derived (searched, filtered, paginated) projection of the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateView {
    pub records: Vec<Candidate>,
    pub current_page: usize,
    pub total_pages: usize,
    pub filtered_total: usize,
    pub page_size: usize,
}

/// Owns the canonical candidate collection, keeps the persisted mirror
/// current on every mutation, and computes the derived view on demand.
///
/// The in-memory collection is the single source of truth once hydrated;
/// storage is only ever a write-through projection of it and is never
/// re-read mid-operation.
pub struct CandidateStore<S> {
    storage: S,
    storage_key: String,
    page_size: usize,
    hydrated: bool,
    candidates: Vec<Candidate>,
    search_term: String,
    filters: FilterState,
    page: usize,
}

impl<S: BlobStorage> CandidateStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_settings(storage, DEFAULT_STORAGE_KEY, DEFAULT_PAGE_SIZE)
    }

    pub fn with_config(storage: S, config: &crate::config::StoreConfig) -> Self {
        Self::with_settings(storage, config.storage_key.clone(), config.page_size)
    }

    pub fn with_settings(storage: S, storage_key: impl Into<String>, page_size: usize) -> Self {
        Self {
            storage,
            storage_key: storage_key.into(),
            page_size: page_size.max(1),
            hydrated: false,
            candidates: Vec::new(),
            search_term: String::new(),
            filters: FilterState::default(),
            page: 1,
        }
    }

    /// Every record in the canonical collection, insertion order.
    pub fn list_all(&mut self) -> Vec<Candidate> {
        self.ensure_hydrated();
        self.candidates.clone()
    }

    pub fn get(&mut self, id: &CandidateId) -> Option<Candidate> {
        self.ensure_hydrated();
        self.candidates
            .iter()
            .find(|candidate| &candidate.id == id)
            .cloned()
    }

    /// Validate the draft, append it under a fresh identifier, and persist.
    /// No mutation occurs on validation failure.
    pub fn create(&mut self, draft: CandidateDraft) -> Result<Candidate, StoreError> {
        self.ensure_hydrated();

        let draft = draft.normalized();
        CandidateValidator::for_create().check(&draft)?;

        let candidate = draft.into_candidate(CandidateId::generate());
        self.candidates.push(candidate.clone());
        info!(id = %candidate.id, name = %candidate.name, "candidate created");

        self.persist()?;
        Ok(candidate)
    }

    /// Replace the record's fields wholesale, identifier preserved, and
    /// persist. Skills may be empty here, unlike `create`.
    pub fn update(
        &mut self,
        id: &CandidateId,
        draft: CandidateDraft,
    ) -> Result<Candidate, StoreError> {
        self.ensure_hydrated();

        let index = self
            .position_of(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;

        let draft = draft.normalized();
        CandidateValidator::for_update().check(&draft)?;

        let updated = draft.into_candidate(id.clone());
        self.candidates[index] = updated.clone();
        info!(id = %id, "candidate updated");

        self.persist()?;
        Ok(updated)
    }

    pub fn remove(&mut self, id: &CandidateId) -> Result<(), StoreError> {
        self.ensure_hydrated();

        let index = self
            .position_of(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;

        self.candidates.remove(index);
        info!(id = %id, "candidate removed");

        self.persist()
    }

    /// Replace the search term and reset the page cursor.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.page = 1;
    }

    /// Replace one facet's active values and reset the page cursor.
    pub fn set_filter(&mut self, selection: FilterSelection) {
        self.filters.apply(selection);
        self.page = 1;
    }

    /// Clear all facets and the search term, and reset the page cursor.
    pub fn reset_filters(&mut self) {
        self.filters.clear();
        self.search_term.clear();
        self.page = 1;
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Move the cursor, clamping into `[1, total_pages]` for the current
    /// filtered set.
    pub fn go_to_page(&mut self, page: usize) {
        self.ensure_hydrated();
        let total = total_pages(self.filtered().len(), self.page_size);
        self.page = page.clamp(1, total);
    }

    /// Compute the derived view. Pure with respect to the store's state:
    /// repeated calls without intervening mutation return identical views.
    /// A cursor stranded past the last page (for example after removals)
    /// is clamped in the result rather than reported as an error.
    pub fn derive_view(&mut self) -> CandidateView {
        self.ensure_hydrated();

        let filtered = self.filtered();
        let filtered_total = filtered.len();
        let pages = total_pages(filtered_total, self.page_size);
        let current_page = self.page.clamp(1, pages);

        let records = filtered
            .into_iter()
            .skip((current_page - 1) * self.page_size)
            .take(self.page_size)
            .cloned()
            .collect();

        CandidateView {
            records,
            current_page,
            total_pages: pages,
            filtered_total,
            page_size: self.page_size,
        }
    }

    fn position_of(&self, id: &CandidateId) -> Option<usize> {
        self.candidates.iter().position(|candidate| &candidate.id == id)
    }

    fn filtered(&self) -> Vec<&Candidate> {
        let term = self.search_term.to_lowercase();
        self.candidates
            .iter()
            .filter(|candidate| {
                (term.is_empty() || candidate.matches_search(&term))
                    && self.filters.matches(candidate)
            })
            .collect()
    }

    /// Transition from uninitialized to ready, exactly once per store.
    fn ensure_hydrated(&mut self) {
        if self.hydrated {
            return;
        }
        self.candidates = self.load_or_seed();
        self.hydrated = true;
    }

    /// Read the persisted collection, falling back to the built-in sample
    /// set on an absent key, an unreadable backend, or an unparsable blob.
    /// Read failures at startup are recovered here, never surfaced.
    fn load_or_seed(&self) -> Vec<Candidate> {
        match self.storage.get(&self.storage_key) {
            Ok(Some(blob)) => match serde_json::from_str::<Vec<Candidate>>(&blob) {
                Ok(candidates) => return candidates,
                Err(error) => {
                    warn!(%error, key = %self.storage_key, "persisted collection unreadable, reseeding");
                }
            },
            Ok(None) => {}
            Err(error) => {
                warn!(%error, key = %self.storage_key, "storage read failed at startup, reseeding");
            }
        }

        let seeded = seed::sample_candidates();
        match serde_json::to_string(&seeded) {
            Ok(blob) => {
                if let Err(error) = self.storage.set(&self.storage_key, &blob) {
                    warn!(%error, "could not write seed collection through to storage");
                }
            }
            Err(error) => {
                warn!(%error, "could not serialize seed collection");
            }
        }
        info!(count = seeded.len(), "collection seeded from built-in sample set");
        seeded
    }

    /// Write the whole collection through to storage. A write failure is
    /// surfaced but the in-memory mutation is kept; storage catches up on
    /// the next successful write.
    fn persist(&self) -> Result<(), StoreError> {
        let blob = serde_json::to_string(&self.candidates).map_err(StorageError::from)?;
        if let Err(error) = self.storage.set(&self.storage_key, &blob) {
            warn!(%error, key = %self.storage_key, "write-through persistence failed after mutation");
            return Err(error.into());
        }
        Ok(())
    }
}

fn total_pages(filtered_total: usize, page_size: usize) -> usize {
    filtered_total.div_ceil(page_size).max(1)
}
