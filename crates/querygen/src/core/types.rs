//! Resolved type descriptors.
//!
//! A [`TypeDescriptor`] is the target-side view of a column type. Equality is
//! structural over every attribute: two descriptors built from the same
//! engine, raw type, nullability and array flag always compare equal, which
//! is what struct deduplication relies on.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Scalar name used when a raw type has no mapping.
pub const FALLBACK_TYPE: &str = "Any";

/// Database engine the catalog and queries were written for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Engine {
    /// PostgreSQL.
    #[default]
    Postgresql,
    /// MySQL / MariaDB.
    Mysql,
    /// Any engine without a dedicated type mapping.
    Other(String),
}

impl Engine {
    /// Canonical engine name.
    pub fn as_str(&self) -> &str {
        match self {
            Engine::Postgresql => "postgresql",
            Engine::Mysql => "mysql",
            Engine::Other(name) => name,
        }
    }
}

impl From<&str> for Engine {
    fn from(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "postgresql" | "postgres" | "pg" => Engine::Postgresql,
            "mysql" | "mariadb" => Engine::Mysql,
            _ => Engine::Other(name.to_string()),
        }
    }
}

impl From<String> for Engine {
    fn from(name: String) -> Self {
        Engine::from(name.as_str())
    }
}

impl From<Engine> for String {
    fn from(engine: Engine) -> Self {
        engine.as_str().to_string()
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an emitter binds or reads a value of a given descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindKind {
    /// Array binding.
    Array,
    /// Generic object binding (enums and date/time values).
    Object,
    /// Timestamp binding (instants).
    Timestamp,
    /// Typed scalar binding named after the scalar type.
    Scalar(String),
}

/// A resolved target type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Target scalar type name (e.g. `Long`, `UUID`, an enum class name).
    pub name: String,

    /// Whether the scalar is a generated enum.
    pub is_enum: bool,

    /// Whether the value is a list of `name`.
    pub is_array: bool,

    /// Whether the value may be null.
    pub is_null: bool,

    /// Raw engine type the descriptor was resolved from.
    pub data_type: String,

    /// Engine the descriptor was resolved for.
    pub engine: Engine,
}

impl TypeDescriptor {
    /// Whether this is a date/time value without an instant semantic.
    pub fn is_time(&self) -> bool {
        matches!(
            self.name.as_str(),
            "LocalDate" | "LocalDateTime" | "LocalTime" | "OffsetDateTime"
        )
    }

    /// Whether this is an instant.
    pub fn is_instant(&self) -> bool {
        self.name == "Instant"
    }

    /// Whether this is a UUID.
    pub fn is_uuid(&self) -> bool {
        self.name == "UUID"
    }

    /// Whether the resolver fell back to the generic type.
    pub fn is_fallback(&self) -> bool {
        self.name == FALLBACK_TYPE && !self.is_enum
    }

    /// Binding category for this descriptor.
    pub fn bind_kind(&self) -> BindKind {
        if self.is_array {
            BindKind::Array
        } else if self.is_enum || self.is_time() {
            BindKind::Object
        } else if self.is_instant() {
            BindKind::Timestamp
        } else {
            BindKind::Scalar(self.name.clone())
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_array {
            write!(f, "List<{}>", self.name)
        } else if self.is_null {
            write!(f, "{}?", self.name)
        } else {
            f.write_str(&self.name)
        }
    }
}
