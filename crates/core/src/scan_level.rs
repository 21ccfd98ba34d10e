use serde::{Deserialize, Serialize};

/// Observation level derived for an attack technique.
///
/// The derived ordering (`Disabled < Unscanned < Scanned < Used`) is for
/// display and sorting only. Status resolution never compares levels; it
/// checks them in explicit query order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ScanLevel {
    /// Technique is gated off in the simulation configuration.
    Disabled,
    /// Technique is enabled but no observation events were recorded.
    Unscanned,
    /// Reconnaissance-level evidence was recorded.
    Scanned,
    /// Exploitation-level evidence was recorded.
    Used,
}

impl ScanLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanLevel::Disabled => "disabled",
            ScanLevel::Unscanned => "unscanned",
            ScanLevel::Scanned => "scanned",
            ScanLevel::Used => "used",
        }
    }
}
