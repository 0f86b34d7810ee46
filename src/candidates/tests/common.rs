use std::sync::Arc;

use crate::candidates::domain::{Candidate, CandidateDraft, CandidateId, Experience, Gender};
use crate::candidates::storage::{BlobStorage, MemoryStorage, StorageError};
use crate::candidates::store::{CandidateStore, DEFAULT_STORAGE_KEY};

pub(super) fn draft(name: &str) -> CandidateDraft {
    CandidateDraft {
        name: name.to_string(),
        phone: "+1 (555) 000-1111".to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        gender: Gender::Male,
        experience: Experience::ThreeYears,
        qualification: Some("Bachelor of Science (BS)".to_string()),
        skills: vec!["Rust".to_string()],
    }
}

pub(super) fn candidate(
    name: &str,
    gender: Gender,
    experience: Experience,
    skills: &[&str],
) -> Candidate {
    Candidate {
        id: CandidateId::generate(),
        name: name.to_string(),
        phone: "+1 (555) 222-3333".to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        gender,
        experience,
        qualification: None,
        skills: skills.iter().map(|skill| skill.to_string()).collect(),
    }
}

pub(super) fn storage_with(candidates: &[Candidate]) -> Arc<MemoryStorage> {
    let storage = Arc::new(MemoryStorage::new());
    let blob = serde_json::to_string(candidates).expect("fixture serializes");
    storage
        .set(DEFAULT_STORAGE_KEY, &blob)
        .expect("memory storage accepts writes");
    storage
}

/// Store hydrating from the given records, plus a handle onto its storage
/// so tests can inspect the persisted mirror directly.
pub(super) fn store_over(
    candidates: &[Candidate],
) -> (CandidateStore<Arc<MemoryStorage>>, Arc<MemoryStorage>) {
    let storage = storage_with(candidates);
    (CandidateStore::new(storage.clone()), storage)
}

pub(super) fn persisted(storage: &MemoryStorage) -> Vec<Candidate> {
    let blob = storage
        .get(DEFAULT_STORAGE_KEY)
        .expect("memory storage readable")
        .expect("collection blob present");
    serde_json::from_str(&blob).expect("persisted collection is valid JSON")
}

/// Backend whose reads work but whose writes always fail, for exercising
/// the best-effort write-through contract.
pub(super) struct FailingWrites {
    pub(super) inner: MemoryStorage,
}

impl BlobStorage for FailingWrites {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("writes disabled".to_string()))
    }
}
