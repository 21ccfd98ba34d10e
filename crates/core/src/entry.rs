use crate::ScanLevel;
use serde::{Deserialize, Serialize};

/// One rendered line of the technique report.
///
/// Produced fresh for every report request; never persisted by this core.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportEntry {
    /// Technique display title
    pub title: String,

    /// Derived observation level
    pub status: ScanLevel,

    /// Human-readable explanation of the status
    pub message: String,

    /// Mitigation guidance, present only when the technique was used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mitigations: Option<Vec<String>>,
}
