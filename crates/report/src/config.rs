//! Simulation configuration documents, as the report core sees them.
//!
//! Two serde documents feed the report pipeline:
//! - `AttackConfig`: which techniques are enabled, grouped by tactic category
//! - `ConfigSchema`: the tool's configuration fields, each tagged with the
//!   techniques it gates and carrying its currently configured value
//!
//! Persistence and mutation of the configuration store live outside this
//! core; both documents are read-only snapshots taken per report request.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

// ============================================================================
// Attack configuration (technique enablement)
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttackConfig {
    pub categories: Vec<AttackCategory>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttackCategory {
    /// Tactic category label, e.g. "Credential Access"
    pub name: String,
    pub techniques: Vec<TechniqueToggle>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechniqueToggle {
    /// Technique identifier, e.g. "T1110"
    pub id: String,
    pub enabled: bool,
}

/// Technique selection summary row, for the configuration view of the report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TechniqueSelection {
    pub technique_id: String,
    pub selected: bool,
    pub category: String,
}

impl AttackConfig {
    /// Flatten the config into technique id -> enabled flag.
    pub fn technique_values(&self) -> HashMap<String, bool> {
        let mut values = HashMap::new();
        for category in &self.categories {
            for toggle in &category.techniques {
                values.insert(toggle.id.clone(), toggle.enabled);
            }
        }
        values
    }

    /// Enabled flag for one technique. `None` when the config does not
    /// mention the technique at all.
    pub fn is_enabled(&self, technique_id: &str) -> Option<bool> {
        self.categories
            .iter()
            .flat_map(|c| &c.techniques)
            .find(|t| t.id == technique_id)
            .map(|t| t.enabled)
    }

    /// Selection rows in config order, one per technique.
    pub fn techniques_for_report(&self) -> Vec<TechniqueSelection> {
        let mut rows = Vec::new();
        for category in &self.categories {
            for toggle in &category.techniques {
                rows.push(TechniqueSelection {
                    technique_id: toggle.id.clone(),
                    selected: toggle.enabled,
                    category: category.name.clone(),
                });
            }
        }
        rows
    }
}

// ============================================================================
// Configuration schema (fields that gate technique detection)
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigSchema {
    pub categories: Vec<SchemaCategory>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaCategory {
    /// Configuration section label, e.g. "Brute force"
    pub name: String,
    pub fields: Vec<SchemaField>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaField {
    /// Field name as shown on the configuration page, e.g. "threads_count"
    pub name: String,

    /// Techniques whose detection this field gates when disabled or empty.
    #[serde(default)]
    pub related_techniques: Vec<String>,

    /// Currently configured value.
    pub value: Value,
}

impl SchemaField {
    /// A field suppresses detection when its value is null, `false`, an empty
    /// string/array/object, or numeric zero (a zero count disables whatever
    /// behavior the field drives).
    pub fn is_disabled_or_empty(&self) -> bool {
        match &self.value {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::String(s) => s.is_empty(),
            Value::Array(a) => a.is_empty(),
            Value::Object(o) => o.is_empty(),
            Value::Number(n) => n.as_f64() == Some(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_config() -> AttackConfig {
        serde_json::from_value(json!({
            "categories": [
                {
                    "name": "Credential Access",
                    "techniques": [
                        {"id": "T1003", "enabled": true},
                        {"id": "T1110", "enabled": true}
                    ]
                },
                {
                    "name": "Post Breach Actions",
                    "techniques": [
                        {"id": "T1154", "enabled": false}
                    ]
                }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_technique_values_flattened() {
        let values = sample_config().technique_values();
        assert_eq!(values["T1003"], true);
        assert_eq!(values["T1154"], false);
        assert_eq!(values.len(), 3);
    }

    #[test]
    fn test_is_enabled_missing_technique() {
        assert_eq!(sample_config().is_enabled("T1110"), Some(true));
        assert_eq!(sample_config().is_enabled("T9999"), None);
    }

    #[test]
    fn test_techniques_for_report_keeps_config_order() {
        let rows = sample_config().techniques_for_report();
        assert_eq!(rows[0].technique_id, "T1003");
        assert_eq!(rows[0].category, "Credential Access");
        assert_eq!(rows[2].technique_id, "T1154");
        assert!(!rows[2].selected);
    }

    #[test]
    fn test_field_emptiness_rules() {
        let field = |value: Value| SchemaField {
            name: "f".to_string(),
            related_techniques: vec![],
            value,
        };
        assert!(field(json!(null)).is_disabled_or_empty());
        assert!(field(json!(false)).is_disabled_or_empty());
        assert!(field(json!("")).is_disabled_or_empty());
        assert!(field(json!([])).is_disabled_or_empty());
        assert!(field(json!({})).is_disabled_or_empty());
        assert!(field(json!(0)).is_disabled_or_empty());

        assert!(!field(json!(true)).is_disabled_or_empty());
        assert!(!field(json!("sshd")).is_disabled_or_empty());
        assert!(!field(json!(["10.0.0.1"])).is_disabled_or_empty());
        assert!(!field(json!(4)).is_disabled_or_empty());
    }
}
