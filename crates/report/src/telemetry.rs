//! Observation log collaborator: append-only record of what the simulation
//! agents reported back.
//!
//! The report core only ever asks existence questions; counts and recency
//! never matter. `InMemoryObservationLog` backs tests and single-process
//! embeddings.

use crate::error::SourceError;
use bas_core::ScanLevel;
use serde::{Deserialize, Serialize};
use std::sync::RwLock;

/// Telemetry category agents tag attack observations with.
pub const ATTACK_TELEMETRY: &str = "attack";

/// One recorded observation event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservationEvent {
    /// Telemetry category, e.g. "attack"
    pub category: String,

    /// Evidence level this event carries
    pub status: ScanLevel,

    /// Technique the event belongs to, e.g. "T1110"
    pub technique: String,

    /// Machine the event originated from, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub machine: Option<String>,
}

impl ObservationEvent {
    /// Attack-telemetry event without machine attribution.
    pub fn attack(status: ScanLevel, technique: impl Into<String>) -> Self {
        ObservationEvent {
            category: ATTACK_TELEMETRY.to_string(),
            status,
            technique: technique.into(),
            machine: None,
        }
    }
}

/// Point-lookup query against the observation log.
#[derive(Debug, Clone, Copy)]
pub struct ObservationQuery<'a> {
    /// Restrict to one telemetry category; `None` spans all categories.
    pub category: Option<&'a str>,
    pub status: ScanLevel,
    pub technique: &'a str,
}

/// Read-side contract of the observation log.
pub trait ObservationLog {
    /// Whether at least one matching event exists.
    fn exists(&self, query: &ObservationQuery<'_>) -> Result<bool, SourceError>;
}

/// Observation log held in memory.
#[derive(Debug, Default)]
pub struct InMemoryObservationLog {
    events: RwLock<Vec<ObservationEvent>>,
}

impl InMemoryObservationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, event: ObservationEvent) {
        self.events
            .write()
            .expect("observation log lock poisoned")
            .push(event);
    }

    pub fn record_attack(&self, status: ScanLevel, technique: &str) {
        self.record(ObservationEvent::attack(status, technique));
    }
}

impl ObservationLog for InMemoryObservationLog {
    fn exists(&self, query: &ObservationQuery<'_>) -> Result<bool, SourceError> {
        let events = self
            .events
            .read()
            .map_err(|_| SourceError::new("observation log lock poisoned"))?;
        Ok(events.iter().any(|e| {
            query.category.map_or(true, |c| e.category == c)
                && e.status == query.status
                && e.technique == query.technique
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exists_is_a_point_lookup() {
        let log = InMemoryObservationLog::new();
        log.record_attack(ScanLevel::Scanned, "T1110");
        log.record_attack(ScanLevel::Scanned, "T1110");

        let q = ObservationQuery {
            category: Some(ATTACK_TELEMETRY),
            status: ScanLevel::Scanned,
            technique: "T1110",
        };
        assert!(log.exists(&q).unwrap());

        let miss = ObservationQuery {
            status: ScanLevel::Used,
            ..q
        };
        assert!(!log.exists(&miss).unwrap());
    }

    #[test]
    fn test_category_filter() {
        let log = InMemoryObservationLog::new();
        log.record(ObservationEvent {
            category: "system_info".to_string(),
            status: ScanLevel::Used,
            technique: "T1016".to_string(),
            machine: None,
        });

        let attack_only = ObservationQuery {
            category: Some(ATTACK_TELEMETRY),
            status: ScanLevel::Used,
            technique: "T1016",
        };
        assert!(!log.exists(&attack_only).unwrap());

        let any_category = ObservationQuery {
            category: None,
            ..attack_only
        };
        assert!(log.exists(&any_category).unwrap());
    }
}
