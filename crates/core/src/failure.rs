/// Per-technique failure records for partial report compilation.
/// A failed entry is reported alongside the entries that succeeded.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FailureCode {
    DataSourceUnavailable,
    UnknownTechnique,
    MitigationMissing,
}

impl FailureCode {
    pub fn as_str(&self) -> &str {
        match self {
            FailureCode::DataSourceUnavailable => "data_source_unavailable",
            FailureCode::UnknownTechnique => "unknown_technique",
            FailureCode::MitigationMissing => "mitigation_missing",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryFailure {
    pub technique: String,
    pub code: FailureCode,
    pub message: String,
}
