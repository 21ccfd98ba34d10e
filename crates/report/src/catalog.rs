//! Technique catalog: static lookup of technique definitions.
//!
//! The catalog is a read-only collaborator. `BuiltinCatalog` ships the
//! data-driven technique table the simulation exercises; embedders with their
//! own metadata source implement `TechniqueCatalog` instead.

use crate::error::SourceError;
use bas_core::TechniqueDef;
use std::collections::HashMap;

/// Read-only technique metadata source.
pub trait TechniqueCatalog {
    /// Look up a technique definition. `Ok(None)` means the catalog is
    /// reachable but has no such technique.
    fn get(&self, technique_id: &str) -> Result<Option<TechniqueDef>, SourceError>;

    /// All technique identifiers the catalog knows about.
    fn technique_ids(&self) -> Result<Vec<String>, SourceError>;
}

/// In-process catalog holding the built-in technique table.
#[derive(Debug, Clone)]
pub struct BuiltinCatalog {
    defs: HashMap<String, TechniqueDef>,
}

fn def(
    tech_id: &str,
    title: &str,
    relevant_systems: &[&str],
    unscanned_msg: &str,
    scanned_msg: &str,
    used_msg: &str,
) -> TechniqueDef {
    TechniqueDef {
        tech_id: tech_id.to_string(),
        title: title.to_string(),
        relevant_systems: relevant_systems.iter().map(|s| s.to_string()).collect(),
        unscanned_msg: unscanned_msg.to_string(),
        scanned_msg: scanned_msg.to_string(),
        used_msg: used_msg.to_string(),
    }
}

impl BuiltinCatalog {
    pub fn new() -> Self {
        let table = vec![
            def(
                "T1003",
                "T1003 OS credential dumping",
                &["Linux", "Windows"],
                "Simulation agents did not try to dump credentials.",
                "Simulation agents tried to dump credentials but failed.",
                "Simulation agents dumped credentials from machines in the network.",
            ),
            def(
                "T1016",
                "T1016 System network configuration discovery",
                &["Linux", "Windows"],
                "Simulation agents did not gather network configuration info.",
                "Simulation agents tried to gather network configuration info but failed.",
                "Simulation agents gathered network configuration details from compromised machines.",
            ),
            def(
                "T1059",
                "T1059 Command-line interface",
                &["Linux", "Windows"],
                "Simulation agents did not run commands through a command-line interface.",
                "Simulation agents tried to run commands through a command-line interface but failed.",
                "Simulation agents ran commands through a command-line interface on compromised machines.",
            ),
            def(
                "T1075",
                "T1075 Pass the hash",
                &["Windows"],
                "Simulation agents did not try to propagate using stolen password hashes.",
                "Simulation agents tried to propagate using stolen password hashes but failed.",
                "Simulation agents moved laterally using stolen password hashes.",
            ),
            def(
                "T1086",
                "T1086 PowerShell",
                &["Windows"],
                "Simulation agents did not try to use PowerShell.",
                "Simulation agents tried to use PowerShell but failed.",
                "Simulation agents used PowerShell to run commands on compromised machines.",
            ),
            def(
                "T1090",
                "T1090 Connection proxy",
                &["Linux", "Windows"],
                "Simulation agents did not try to tunnel traffic through other machines.",
                "Simulation agents tried to tunnel traffic through other machines but failed.",
                "Simulation agents tunneled traffic through compromised machines.",
            ),
            def(
                "T1110",
                "T1110 Brute force",
                &["Linux", "Windows"],
                "Simulation agents did not try to brute-force any services.",
                "Simulation agents tried to brute-force services but no credentials worked.",
                "Simulation agents broke into services by brute-forcing credentials.",
            ),
            def(
                "T1145",
                "T1145 Private keys",
                &["Linux", "Windows"],
                "Simulation agents did not search for private keys.",
                "Simulation agents searched for private keys but found none.",
                "Simulation agents stole private keys from compromised machines.",
            ),
            def(
                "T1154",
                "T1154 Trap",
                &["Linux"],
                "Simulation agents did not use the trap command.",
                "Simulation agents tried to use the trap command but failed.",
                "Simulation agents used the trap command to register interrupt hooks.",
            ),
            def(
                "T1210",
                "T1210 Exploitation of remote services",
                &["Linux", "Windows"],
                "Simulation agents did not try to exploit remote services.",
                "Simulation agents scanned for vulnerable remote services but did not exploit any.",
                "Simulation agents exploited remote services to gain access to machines.",
            ),
            def(
                "T1222",
                "T1222 File permissions modification",
                &["Linux"],
                "Simulation agents did not try to change file permissions.",
                "Simulation agents tried to change file permissions but failed.",
                "Simulation agents changed file permissions on compromised machines.",
            ),
        ];

        let defs = table
            .into_iter()
            .map(|d| (d.tech_id.clone(), d))
            .collect();
        BuiltinCatalog { defs }
    }
}

impl Default for BuiltinCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl TechniqueCatalog for BuiltinCatalog {
    fn get(&self, technique_id: &str) -> Result<Option<TechniqueDef>, SourceError> {
        Ok(self.defs.get(technique_id).cloned())
    }

    fn technique_ids(&self) -> Result<Vec<String>, SourceError> {
        Ok(self.defs.keys().cloned().collect())
    }
}
