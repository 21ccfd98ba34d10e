//! Configuration gate: technique enablement plus the gate index.
//!
//! The gate index maps a technique back to the configuration fields that,
//! being disabled or empty, would explain why the technique was never
//! observed. It is computed from the full configuration schema once per
//! report request and passed down explicitly; there is no process-global
//! cache to go stale between requests.

use crate::config::{AttackConfig, ConfigSchema};
use crate::error::SourceError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Disabled/empty fields for one technique, grouped by configuration
/// category. Category and field order follow the schema document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GateEntry {
    pub categories: Vec<GateCategory>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GateCategory {
    pub name: String,
    pub fields: Vec<String>,
}

/// Technique id -> disabled-field listing, for every technique at least one
/// disabled/empty field gates. Techniques with nothing gating them are
/// absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GateIndex {
    per_technique: HashMap<String, GateEntry>,
}

impl GateIndex {
    /// Walk the schema and reverse-map every disabled/empty field onto the
    /// techniques it gates.
    pub fn from_schema(schema: &ConfigSchema) -> Self {
        let mut per_technique: HashMap<String, GateEntry> = HashMap::new();

        for category in &schema.categories {
            for field in &category.fields {
                if !field.is_disabled_or_empty() {
                    continue;
                }
                for technique in &field.related_techniques {
                    let entry = per_technique.entry(technique.clone()).or_default();
                    match entry.categories.iter_mut().find(|c| c.name == category.name) {
                        Some(c) => c.fields.push(field.name.clone()),
                        None => entry.categories.push(GateCategory {
                            name: category.name.clone(),
                            fields: vec![field.name.clone()],
                        }),
                    }
                }
            }
        }

        GateIndex { per_technique }
    }

    pub fn get(&self, technique_id: &str) -> Option<&GateEntry> {
        self.per_technique.get(technique_id)
    }

    pub fn contains(&self, technique_id: &str) -> bool {
        self.per_technique.contains_key(technique_id)
    }

    pub fn len(&self) -> usize {
        self.per_technique.len()
    }

    pub fn is_empty(&self) -> bool {
        self.per_technique.is_empty()
    }
}

/// Configuration-side collaborator of the report pipeline.
pub trait ConfigGate {
    /// Whether the technique is enabled. Absent techniques are not enabled.
    fn is_enabled(&self, technique_id: &str) -> Result<bool, SourceError>;

    /// Gate index over the full configuration schema. Called once at the
    /// start of every report request; the caller keeps the result for the
    /// duration of that request only.
    fn gate_index(&self) -> Result<GateIndex, SourceError>;
}

/// `ConfigGate` over in-memory configuration snapshots.
#[derive(Debug, Clone)]
pub struct SchemaConfigGate {
    config: AttackConfig,
    schema: ConfigSchema,
}

impl SchemaConfigGate {
    pub fn new(config: AttackConfig, schema: ConfigSchema) -> Self {
        SchemaConfigGate { config, schema }
    }

    pub fn config(&self) -> &AttackConfig {
        &self.config
    }
}

impl ConfigGate for SchemaConfigGate {
    fn is_enabled(&self, technique_id: &str) -> Result<bool, SourceError> {
        Ok(self.config.is_enabled(technique_id).unwrap_or(false))
    }

    fn gate_index(&self) -> Result<GateIndex, SourceError> {
        Ok(GateIndex::from_schema(&self.schema))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_schema() -> ConfigSchema {
        serde_json::from_value(json!({
            "categories": [
                {
                    "name": "Brute force",
                    "fields": [
                        {"name": "threads_count", "related_techniques": ["T1110"], "value": 0},
                        {"name": "password_list", "related_techniques": ["T1110", "T1003"], "value": []},
                        {"name": "target_services", "related_techniques": ["T1110"], "value": ["ssh"]}
                    ]
                },
                {
                    "name": "Lateral movement",
                    "fields": [
                        {"name": "hash_propagation", "related_techniques": ["T1075"], "value": false},
                        {"name": "subnet_scan", "related_techniques": ["T1110"], "value": false}
                    ]
                }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_index_preserves_schema_order() {
        let index = GateIndex::from_schema(&sample_schema());
        let entry = index.get("T1110").unwrap();
        assert_eq!(entry.categories.len(), 2);
        assert_eq!(entry.categories[0].name, "Brute force");
        assert_eq!(
            entry.categories[0].fields,
            vec!["threads_count".to_string(), "password_list".to_string()]
        );
        assert_eq!(entry.categories[1].name, "Lateral movement");
        assert_eq!(entry.categories[1].fields, vec!["subnet_scan".to_string()]);
    }

    #[test]
    fn test_enabled_fields_do_not_index() {
        let index = GateIndex::from_schema(&sample_schema());
        let entry = index.get("T1110").unwrap();
        let all_fields: Vec<_> = entry
            .categories
            .iter()
            .flat_map(|c| c.fields.iter())
            .collect();
        assert!(!all_fields.contains(&&"target_services".to_string()));
    }

    #[test]
    fn test_ungated_technique_absent() {
        let index = GateIndex::from_schema(&sample_schema());
        assert!(index.contains("T1003"));
        assert!(index.contains("T1075"));
        assert!(!index.contains("T1210"));
    }

    #[test]
    fn test_gate_treats_unknown_technique_as_disabled() {
        let config: AttackConfig = serde_json::from_value(json!({
            "categories": [
                {"name": "Credential Access", "techniques": [{"id": "T1003", "enabled": true}]}
            ]
        }))
        .unwrap();
        let gate = SchemaConfigGate::new(config, sample_schema());
        assert!(gate.is_enabled("T1003").unwrap());
        assert!(!gate.is_enabled("T9999").unwrap());
    }
}
