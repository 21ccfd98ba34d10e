//! Explanation composition.
//!
//! Picks the display message for a technique's status. For `Unscanned` the
//! base template is extended with the reasons the technique could not have
//! been observed: the single relevant OS family the agents may never have
//! reached, and the configuration fields currently gating the technique off.
//! Reason generation is read-only over the gate index.

use crate::gate::GateIndex;
use bas_core::{ScanLevel, TechniqueDef};

/// Message shown for techniques disabled in the configuration.
pub const DISABLED_MSG: &str = "This technique has been disabled. \
     You can enable it from the [configuration page](../../configure).";

/// Compose the display message for a technique at the given status.
/// Pure over its inputs: identical inputs yield the identical string.
pub fn compose_message(def: &TechniqueDef, status: ScanLevel, gate_index: &GateIndex) -> String {
    match status {
        ScanLevel::Disabled => DISABLED_MSG.to_string(),
        ScanLevel::Used => def.used_msg.clone(),
        ScanLevel::Scanned => def.scanned_msg.clone(),
        ScanLevel::Unscanned => unscanned_with_reasons(def, gate_index),
    }
}

fn unscanned_with_reasons(def: &TechniqueDef, gate_index: &GateIndex) -> String {
    let mut reasons = Vec::new();

    // Only the single-OS case produces an availability reason; a technique
    // relevant to several families stays silent even when none were reached.
    if def.relevant_systems.len() == 1 {
        reasons.push(format!(
            "- Simulation agents did not run on any {} systems.",
            def.relevant_systems[0]
        ));
    }

    if let Some(entry) = gate_index.get(&def.tech_id) {
        for category in &entry.categories {
            reasons.push(format!(
                "- Disabled or empty \"{}\" configuration options: {}",
                category.name,
                category.fields.join(", ")
            ));
        }
    }

    if reasons.is_empty() {
        return def.unscanned_msg.clone();
    }

    format!(
        "{} due to one of the following reasons:\n{}",
        def.unscanned_msg.trim_end_matches('.'),
        reasons.join("\n")
    )
}
