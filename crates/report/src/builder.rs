//! Report entry assembly.
//!
//! Bridges the resolver and composer into the uniform `ReportEntry` record:
//! title from the catalog, status from the resolver (or the caller), message
//! from the composer, mitigations from the mitigation catalog when the
//! technique was used.

use crate::catalog::TechniqueCatalog;
use crate::composer::compose_message;
use crate::error::ReportError;
use crate::gate::{ConfigGate, GateIndex};
use crate::mitigation::MitigationCatalog;
use crate::resolver::resolve_status;
use crate::telemetry::ObservationLog;
use bas_core::{ReportEntry, ScanLevel};

/// Build the report entry for one technique, resolving its status first.
pub fn build_entry(
    catalog: &dyn TechniqueCatalog,
    gate: &dyn ConfigGate,
    log: &dyn ObservationLog,
    mitigations: &dyn MitigationCatalog,
    gate_index: &GateIndex,
    technique_id: &str,
) -> Result<ReportEntry, ReportError> {
    let status = resolve_status(gate, log, technique_id)?;
    finish_entry(catalog, mitigations, gate_index, technique_id, status)
}

/// Build a report entry with a caller-supplied status, skipping resolution.
///
/// Used when the caller has already determined the technique is gated off
/// for a reason other than configuration (e.g. a prerequisite capability
/// check). Disabled-in-config still wins over the supplied status.
pub fn build_entry_with_status(
    catalog: &dyn TechniqueCatalog,
    gate: &dyn ConfigGate,
    mitigations: &dyn MitigationCatalog,
    gate_index: &GateIndex,
    technique_id: &str,
    status: ScanLevel,
) -> Result<ReportEntry, ReportError> {
    let status = if gate.is_enabled(technique_id)? {
        status
    } else {
        ScanLevel::Disabled
    };
    finish_entry(catalog, mitigations, gate_index, technique_id, status)
}

fn finish_entry(
    catalog: &dyn TechniqueCatalog,
    mitigations: &dyn MitigationCatalog,
    gate_index: &GateIndex,
    technique_id: &str,
    status: ScanLevel,
) -> Result<ReportEntry, ReportError> {
    let def = catalog
        .get(technique_id)?
        .ok_or_else(|| ReportError::UnknownTechnique(technique_id.to_string()))?;

    let message = compose_message(&def, status, gate_index);

    let mitigations = match status {
        ScanLevel::Used => Some(
            mitigations
                .get(technique_id)?
                .ok_or_else(|| ReportError::MitigationMissing(technique_id.to_string()))?,
        ),
        _ => None,
    };

    Ok(ReportEntry {
        title: def.title,
        status,
        message,
        mitigations,
    })
}
