//! MySQL type resolver.

use super::EnumIndex;
use crate::core::schema::Column;
use crate::core::traits::TypeResolver;
use crate::core::types::{Engine, FALLBACK_TYPE};

/// Resolves MySQL column types.
///
/// MySQL enum columns that report the raw type `enum` resolve to `String`.
/// A raw type naming a catalog enum resolves to that enum; failing that, a
/// catalog enum named `<table>_<column>` is tried.
#[derive(Debug, Clone, Default)]
pub struct MysqlResolver {
    enums: EnumIndex,
}

impl MysqlResolver {
    /// Create a resolver that knows about the given user enums.
    pub fn new(enums: EnumIndex) -> Self {
        Self { enums }
    }

    fn builtin(type_name: &str) -> Option<&'static str> {
        let mapped = match type_name.to_lowercase().as_str() {
            "varchar" | "text" | "char" | "tinytext" | "mediumtext" | "longtext" => "String",
            "int" | "integer" | "smallint" | "mediumint" | "year" => "Int",
            "bigint" => "Long",
            "blob" | "binary" | "varbinary" | "tinyblob" | "mediumblob" | "longblob" => "String",
            "double" | "double precision" | "real" => "Double",
            "decimal" | "dec" | "fixed" => "String",
            "enum" => "String",
            "date" | "datetime" | "time" => "LocalDateTime",
            "timestamp" => "Instant",
            "boolean" | "bool" | "tinyint" => "Boolean",
            "json" => "String",
            "any" => FALLBACK_TYPE,
            _ => return None,
        };
        Some(mapped)
    }
}

impl TypeResolver for MysqlResolver {
    fn engine(&self) -> Engine {
        Engine::Mysql
    }

    fn scalar_type(&self, column: &Column) -> (String, bool) {
        let data_type = column.data_type.data_type();
        if let Some(name) = Self::builtin(&data_type) {
            return (name.to_string(), false);
        }

        if let Some(entry) = self.enums.by_type(&column.data_type) {
            return (entry.class_name.clone(), true);
        }

        if let Some(table) = &column.table {
            let enum_name = format!("{}_{}", table.name, column.name);
            if let Some(entry) = self.enums.by_name(&enum_name) {
                return (entry.class_name.clone(), true);
            }
        }

        tracing::debug!(
            "Unknown MySQL type '{}' for column '{}', using {}",
            data_type,
            column.name,
            FALLBACK_TYPE
        );
        (FALLBACK_TYPE.to_string(), false)
    }
}
