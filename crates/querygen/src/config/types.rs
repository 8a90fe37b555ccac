//! Settings type definitions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::types::Engine;

/// Root settings structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Database engine (default: "postgresql").
    #[serde(default)]
    pub engine: Engine,

    /// Preferred identifiers keyed by (schema-prefixed) object name.
    /// A non-empty entry replaces the derived data-class name.
    #[serde(default)]
    pub rename: BTreeMap<String, String>,

    /// Target-specific options.
    #[serde(default)]
    pub kotlin: KotlinSettings,
}

impl Settings {
    /// Settings for an engine with every other option at its default.
    pub fn for_engine(engine: impl Into<Engine>) -> Self {
        Self {
            engine: engine.into(),
            ..Self::default()
        }
    }
}

/// Options consumed by the Kotlin emitter and the struct builder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KotlinSettings {
    /// Package generated files are placed in.
    #[serde(default)]
    pub package: String,

    /// Use table names verbatim instead of singularizing them (default: false).
    #[serde(default)]
    pub emit_exact_table_names: bool,

    /// Struct names that singularization must leave alone (case-insensitive).
    #[serde(default)]
    pub inflection_exclude_table_names: Vec<String>,
}
