//! Candidate collection management.
//!
//! The [`CandidateStore`] owns the canonical list of candidate records,
//! mirrors it into a named-blob storage backend on every mutation, and
//! derives the searched/filtered/paginated view that presentation layers
//! render. Storage is pluggable through [`BlobStorage`].

pub mod domain;
pub mod seed;
pub mod storage;
pub mod store;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    Candidate, CandidateDraft, CandidateId, Experience, FilterSelection, FilterState, Gender,
    SKILL_CATALOG,
};
pub use seed::sample_candidates;
pub use storage::{BlobStorage, FileStorage, MemoryStorage, StorageError};
pub use store::{
    CandidateStore, CandidateView, StoreError, DEFAULT_PAGE_SIZE, DEFAULT_STORAGE_KEY,
};
pub use validation::{CandidateField, CandidateValidator, FieldError, ValidationError};
