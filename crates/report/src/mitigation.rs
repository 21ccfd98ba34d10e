//! Mitigation catalog collaborator.
//!
//! Looked up only for techniques that reached `used` status. Every technique
//! capable of reaching that status is expected to have a mitigation record;
//! a miss is a data-integrity error, not an empty result.

use crate::error::SourceError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Mitigation record for one technique, as stored in mitigation documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MitigationSet {
    pub technique_id: String,
    pub mitigations: Vec<String>,
}

/// Read-side contract of the mitigation catalog.
pub trait MitigationCatalog {
    /// Mitigation text for a technique. `Ok(None)` means no record exists.
    fn get(&self, technique_id: &str) -> Result<Option<Vec<String>>, SourceError>;
}

/// Mitigation catalog held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMitigations {
    by_technique: HashMap<String, Vec<String>>,
}

impl InMemoryMitigations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_sets(sets: Vec<MitigationSet>) -> Self {
        let by_technique = sets
            .into_iter()
            .map(|s| (s.technique_id, s.mitigations))
            .collect();
        InMemoryMitigations { by_technique }
    }

    pub fn insert(&mut self, technique_id: impl Into<String>, mitigations: Vec<String>) {
        self.by_technique.insert(technique_id.into(), mitigations);
    }
}

impl MitigationCatalog for InMemoryMitigations {
    fn get(&self, technique_id: &str) -> Result<Option<Vec<String>>, SourceError> {
        Ok(self.by_technique.get(technique_id).cloned())
    }
}
