//! PostgreSQL type resolver.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

use super::EnumIndex;
use crate::core::schema::Column;
use crate::core::traits::TypeResolver;
use crate::core::types::{Engine, FALLBACK_TYPE};

/// Numbered placeholder token (`$1`, `$22`) not glued to a preceding word.
static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\B\$\d+\b").unwrap());

/// Resolves PostgreSQL column types.
#[derive(Debug, Clone, Default)]
pub struct PostgresResolver {
    enums: EnumIndex,
}

impl PostgresResolver {
    /// Create a resolver that knows about the given user enums.
    pub fn new(enums: EnumIndex) -> Self {
        Self { enums }
    }

    /// Map a built-in type name. `None` means "not a built-in".
    fn builtin(type_name: &str) -> Option<&'static str> {
        let lower = type_name.to_lowercase();
        let name = lower.strip_prefix("pg_catalog.").unwrap_or(&lower);

        let mapped = match name {
            "serial" | "serial4" => "Int",
            "bigserial" | "serial8" => "Long",
            "smallserial" | "serial2" => "Short",
            "integer" | "int" | "int4" => "Int",
            "bigint" | "int8" => "Long",
            "smallint" | "int2" => "Short",
            "float" | "double precision" | "float8" => "Double",
            "real" | "float4" => "Float",
            "numeric" | "decimal" => "java.math.BigDecimal",
            "bool" | "boolean" => "Boolean",
            "json" | "jsonb" => "String",
            "bytea" | "blob" => "ByteArray",
            "date" => "LocalDate",
            "time" | "timetz" => "LocalTime",
            "timestamp" => "LocalDateTime",
            "timestamptz" => "OffsetDateTime",
            "text" | "varchar" | "bpchar" | "char" | "string" | "citext" => "String",
            "uuid" => "UUID",
            "any" => FALLBACK_TYPE,
            _ => return None,
        };
        Some(mapped)
    }
}

impl TypeResolver for PostgresResolver {
    fn engine(&self) -> Engine {
        Engine::Postgresql
    }

    fn scalar_type(&self, column: &Column) -> (String, bool) {
        let data_type = column.data_type.data_type();
        if let Some(name) = Self::builtin(&data_type) {
            return (name.to_string(), false);
        }

        if let Some(entry) = self.enums.by_type(&column.data_type) {
            return (entry.class_name.clone(), true);
        }

        tracing::debug!(
            "Unknown PostgreSQL type '{}' for column '{}', using {}",
            data_type,
            column.name,
            FALLBACK_TYPE
        );
        (FALLBACK_TYPE.to_string(), false)
    }

    /// Replace every `$n` token with `?`.
    ///
    /// This is a plain text substitution over the compiled SQL, not a walk of
    /// the parse tree: a `$1` inside a string literal is rewritten too.
    fn rewrite_placeholders<'a>(&self, sql: &'a str) -> Cow<'a, str> {
        PLACEHOLDER.replace_all(sql, "?")
    }
}
