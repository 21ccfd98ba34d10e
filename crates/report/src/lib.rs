//! Technique status resolution and report compilation.
//!
//! This crate is the computation core behind the island service's ATT&CK
//! report view. For each technique the simulation can exercise it derives a
//! status from three external sources and renders it into a uniform entry:
//!
//! ```text
//!   config gate ──┐
//!                 ├──▶ resolver ──▶ composer ──▶ entry builder ──▶ report
//!   observation ──┘                   ▲
//!   log                               │
//!   config schema ──▶ gate index ─────┘      mitigations (used only)
//! ```
//!
//! The gate index is recomputed at the start of every report request; there
//! is no process-global cache. Collaborators are trait objects so the
//! embedding service decides where the data actually lives.
//!
//! ## Usage
//!
//! ```ignore
//! use bas_report::{BuiltinCatalog, InMemoryMitigations, InMemoryObservationLog,
//!                  ReportCompiler, SchemaConfigGate};
//! use std::sync::Arc;
//!
//! let compiler = ReportCompiler::new(
//!     Arc::new(BuiltinCatalog::new()),
//!     Arc::new(SchemaConfigGate::new(attack_config, config_schema)),
//!     Arc::new(log),
//!     Arc::new(mitigations),
//! );
//! let report = compiler.compile()?;
//! ```

pub mod builder;
pub mod catalog;
pub mod compiler;
pub mod composer;
pub mod config;
pub mod error;
pub mod gate;
pub mod loader;
pub mod mitigation;
pub mod resolver;
pub mod telemetry;

pub use builder::{build_entry, build_entry_with_status};
pub use catalog::{BuiltinCatalog, TechniqueCatalog};
pub use compiler::{ReportCompiler, TechniqueReport};
pub use composer::{compose_message, DISABLED_MSG};
pub use config::{AttackConfig, ConfigSchema, TechniqueSelection};
pub use error::{ReportError, SourceError};
pub use gate::{ConfigGate, GateCategory, GateEntry, GateIndex, SchemaConfigGate};
pub use loader::{load_attack_config, load_config_schema, load_mitigations};
pub use mitigation::{InMemoryMitigations, MitigationCatalog, MitigationSet};
pub use resolver::resolve_status;
pub use telemetry::{
    InMemoryObservationLog, ObservationEvent, ObservationLog, ObservationQuery, ATTACK_TELEMETRY,
};

// Re-export the shared data model at the crate root.
pub use bas_core::{EntryFailure, FailureCode, ReportEntry, ScanLevel, TechniqueDef};
