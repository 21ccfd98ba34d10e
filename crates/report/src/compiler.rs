//! Report compilation: one pass over every known technique.
//!
//! The compiler owns the four collaborators and produces a serializable
//! `TechniqueReport`. The gate index is recomputed at the start of every
//! compile and passed down by reference, so concurrent report requests can
//! never observe each other's configuration snapshot.

use crate::builder::{build_entry, build_entry_with_status};
use crate::catalog::TechniqueCatalog;
use crate::error::ReportError;
use crate::gate::ConfigGate;
use crate::mitigation::MitigationCatalog;
use crate::telemetry::ObservationLog;
use bas_core::{EntryFailure, ReportEntry, ScanLevel};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Compiled technique report for one request.
///
/// Entries that failed are reported alongside the ones that succeeded; a
/// single unreachable collaborator never takes down the whole report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechniqueReport {
    pub report_id: String,
    pub generated_at: DateTime<Utc>,
    pub entries: Vec<ReportEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<EntryFailure>,
}

/// Compiles technique report entries from the four external collaborators.
#[derive(Clone)]
pub struct ReportCompiler {
    catalog: Arc<dyn TechniqueCatalog + Send + Sync>,
    gate: Arc<dyn ConfigGate + Send + Sync>,
    log: Arc<dyn ObservationLog + Send + Sync>,
    mitigations: Arc<dyn MitigationCatalog + Send + Sync>,
}

impl ReportCompiler {
    pub fn new(
        catalog: Arc<dyn TechniqueCatalog + Send + Sync>,
        gate: Arc<dyn ConfigGate + Send + Sync>,
        log: Arc<dyn ObservationLog + Send + Sync>,
        mitigations: Arc<dyn MitigationCatalog + Send + Sync>,
    ) -> Self {
        ReportCompiler {
            catalog,
            gate,
            log,
            mitigations,
        }
    }

    /// Compile a report over every technique the catalog knows.
    pub fn compile(&self) -> Result<TechniqueReport, ReportError> {
        self.compile_with_overrides(&HashMap::new())
    }

    /// Compile with caller-supplied explicit statuses for some techniques
    /// (e.g. gated off by a prerequisite capability check). Overridden
    /// techniques skip resolution but keep the disabled short-circuit.
    pub fn compile_with_overrides(
        &self,
        overrides: &HashMap<String, ScanLevel>,
    ) -> Result<TechniqueReport, ReportError> {
        // Request-scoped: configuration may have changed since the last
        // compile, so the index is never reused across requests.
        let gate_index = self.gate.gate_index()?;

        let mut ids = self.catalog.technique_ids()?;
        ids.sort();

        let mut entries = Vec::with_capacity(ids.len());
        let mut failures = Vec::new();

        for id in &ids {
            let result = match overrides.get(id) {
                Some(status) => build_entry_with_status(
                    self.catalog.as_ref(),
                    self.gate.as_ref(),
                    self.mitigations.as_ref(),
                    &gate_index,
                    id,
                    *status,
                ),
                None => build_entry(
                    self.catalog.as_ref(),
                    self.gate.as_ref(),
                    self.log.as_ref(),
                    self.mitigations.as_ref(),
                    &gate_index,
                    id,
                ),
            };

            match result {
                Ok(entry) => entries.push(entry),
                Err(err) => {
                    tracing::warn!(technique = %id, error = %err, "technique entry failed");
                    failures.push(EntryFailure {
                        technique: id.clone(),
                        code: err.failure_code(),
                        message: err.to_string(),
                    });
                }
            }
        }

        tracing::debug!(
            entries = entries.len(),
            failures = failures.len(),
            "technique report compiled"
        );

        Ok(TechniqueReport {
            report_id: Uuid::new_v4().to_string(),
            generated_at: Utc::now(),
            entries,
            failures,
        })
    }

    /// Build a single technique's entry, computing a fresh gate index for it.
    pub fn compile_entry(&self, technique_id: &str) -> Result<ReportEntry, ReportError> {
        let gate_index = self.gate.gate_index()?;
        build_entry(
            self.catalog.as_ref(),
            self.gate.as_ref(),
            self.log.as_ref(),
            self.mitigations.as_ref(),
            &gate_index,
            technique_id,
        )
    }
}
