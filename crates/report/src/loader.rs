// report/loader.rs
// JSON document loading for the report pipeline's configuration inputs

use crate::config::{AttackConfig, ConfigSchema};
use crate::mitigation::{InMemoryMitigations, MitigationSet};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load the attack configuration document (technique enablement).
pub fn load_attack_config(path: &Path) -> Result<AttackConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading attack config {:?}", path))?;
    let config = serde_json::from_str(&raw)
        .with_context(|| format!("parsing attack config {:?}", path))?;
    Ok(config)
}

/// Load the configuration schema document (fields gating techniques).
pub fn load_config_schema(path: &Path) -> Result<ConfigSchema> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading config schema {:?}", path))?;
    let schema = serde_json::from_str(&raw)
        .with_context(|| format!("parsing config schema {:?}", path))?;
    Ok(schema)
}

/// Load a mitigation document: a JSON array of per-technique records.
pub fn load_mitigations(path: &Path) -> Result<InMemoryMitigations> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading mitigations {:?}", path))?;
    let sets: Vec<MitigationSet> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing mitigations {:?}", path))?;
    Ok(InMemoryMitigations::from_sets(sets))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mitigation::MitigationCatalog;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_attack_config() {
        let file = write_temp(
            r#"{"categories": [{"name": "Credential Access",
                "techniques": [{"id": "T1110", "enabled": true}]}]}"#,
        );
        let config = load_attack_config(file.path()).unwrap();
        assert_eq!(config.is_enabled("T1110"), Some(true));
    }

    #[test]
    fn test_load_config_schema() {
        let file = write_temp(
            r#"{"categories": [{"name": "Brute force",
                "fields": [{"name": "threads_count",
                            "related_techniques": ["T1110"], "value": 0}]}]}"#,
        );
        let schema = load_config_schema(file.path()).unwrap();
        assert_eq!(schema.categories[0].fields[0].name, "threads_count");
        assert!(schema.categories[0].fields[0].is_disabled_or_empty());
    }

    #[test]
    fn test_load_mitigations() {
        let file = write_temp(
            r#"[{"technique_id": "T1110",
                 "mitigations": ["Use multi-factor authentication."]}]"#,
        );
        let catalog = load_mitigations(file.path()).unwrap();
        assert_eq!(catalog.get("T1110").unwrap().unwrap().len(), 1);
    }

    #[test]
    fn test_parse_error_carries_path_context() {
        let file = write_temp("not json");
        let err = load_attack_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("parsing attack config"));
    }
}
