use serde::{Deserialize, Serialize};

/// Static definition of an attack technique tracked by the report pipeline.
///
/// One record per technique, loaded once per report computation. The message
/// templates are the per-status display strings the explanation composer
/// starts from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TechniqueDef {
    /// Technique identifier, e.g. "T1003"
    pub tech_id: String,

    /// Display title, e.g. "T1003 OS credential dumping"
    pub title: String,

    /// Operating system families the technique applies to. Never empty.
    pub relevant_systems: Vec<String>,

    /// Message shown when the technique was never attempted.
    pub unscanned_msg: String,

    /// Message shown when only reconnaissance-level evidence exists.
    pub scanned_msg: String,

    /// Message shown when the technique was used successfully.
    pub used_msg: String,
}
