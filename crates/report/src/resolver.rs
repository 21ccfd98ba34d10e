//! Technique status resolution.
//!
//! A small precedence machine over the configuration gate and the
//! observation log. Resolution is per technique and independent; no ordering
//! is guaranteed or required across techniques.

use crate::error::ReportError;
use crate::gate::ConfigGate;
use crate::telemetry::{ObservationLog, ObservationQuery, ATTACK_TELEMETRY};
use bas_core::ScanLevel;

/// Resolve the observed status of a single technique.
///
/// Strict precedence, short-circuiting:
/// 1. not enabled in config -> `Disabled`, bypassing all log lookups
/// 2. any `used` event in the attack telemetry category -> `Used`
/// 3. any `scanned` event in any category -> `Scanned`
/// 4. otherwise `Unscanned`
///
/// Because `used` is checked before `scanned`, a technique's status never
/// regresses as further events arrive. A gate or log failure propagates as
/// `DataSourceUnavailable`; defaulting to `Unscanned` would mis-report a
/// technique as unused when it is actually unknown.
pub fn resolve_status(
    gate: &dyn ConfigGate,
    log: &dyn ObservationLog,
    technique_id: &str,
) -> Result<ScanLevel, ReportError> {
    if !gate.is_enabled(technique_id)? {
        return Ok(ScanLevel::Disabled);
    }

    let used = ObservationQuery {
        category: Some(ATTACK_TELEMETRY),
        status: ScanLevel::Used,
        technique: technique_id,
    };
    if log.exists(&used)? {
        return Ok(ScanLevel::Used);
    }

    // The scanned probe deliberately spans all telemetry categories.
    let scanned = ObservationQuery {
        category: None,
        status: ScanLevel::Scanned,
        technique: technique_id,
    };
    if log.exists(&scanned)? {
        return Ok(ScanLevel::Scanned);
    }

    Ok(ScanLevel::Unscanned)
}
