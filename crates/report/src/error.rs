//! Error taxonomy for report computation.
//!
//! Collaborator failures are opaque (`SourceError`); the resolver and entry
//! builder convert them to `ReportError::DataSourceUnavailable` so a missing
//! data source is never mistaken for a technique that was not observed.

use bas_core::FailureCode;
use thiserror::Error;

/// Errors surfaced while computing a single technique's report entry.
#[derive(Debug, Clone, Error)]
pub enum ReportError {
    /// Configuration gate or observation log could not be reached.
    #[error("data source unavailable: {0}")]
    DataSourceUnavailable(String),

    /// Technique catalog has no entry for the requested identifier.
    #[error("unknown technique: {0}")]
    UnknownTechnique(String),

    /// Technique reached `used` status but no mitigation record exists.
    /// Indicates a data-integrity gap between the technique and mitigation
    /// catalogs; surfaced, never suppressed.
    #[error("no mitigations recorded for technique {0}")]
    MitigationMissing(String),
}

impl ReportError {
    /// Failure code for the serialized per-technique failure record.
    pub fn failure_code(&self) -> FailureCode {
        match self {
            ReportError::DataSourceUnavailable(_) => FailureCode::DataSourceUnavailable,
            ReportError::UnknownTechnique(_) => FailureCode::UnknownTechnique,
            ReportError::MitigationMissing(_) => FailureCode::MitigationMissing,
        }
    }
}

/// Opaque failure reported by an external collaborator.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct SourceError(pub String);

impl SourceError {
    pub fn new(message: impl Into<String>) -> Self {
        SourceError(message.into())
    }
}

impl From<SourceError> for ReportError {
    fn from(err: SourceError) -> Self {
        ReportError::DataSourceUnavailable(err.0)
    }
}
