//! Catalog metadata types: schemas, tables, columns, and enum types.
//!
//! These types describe the already-parsed database catalog handed to the
//! compiler. They are read-only for the whole compilation run.

use serde::{Deserialize, Serialize};

/// Schemas that hold engine internals and never produce models.
pub const SYSTEM_SCHEMAS: &[&str] = &["pg_catalog", "information_schema"];

/// Check whether a schema name is one of the reserved system schemas.
pub fn is_system_schema(name: &str) -> bool {
    SYSTEM_SCHEMAS.contains(&name)
}

/// A possibly schema-qualified name (tables, types).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identifier {
    /// Catalog (database) name, usually empty.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub catalog: String,

    /// Schema name, empty when unqualified.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub schema: String,

    /// Object name.
    pub name: String,
}

impl Identifier {
    /// Create an unqualified identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Create a schema-qualified identifier.
    pub fn qualified(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            catalog: String::new(),
            schema: schema.into(),
            name: name.into(),
        }
    }

    /// Render as a type name: `schema.name`, or `name` when unqualified.
    pub fn data_type(&self) -> String {
        if self.schema.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.schema, self.name)
        }
    }
}

/// Column metadata, used both for table columns and for query
/// parameters/result columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column name, empty for anonymous expressions.
    #[serde(default)]
    pub name: String,

    /// Raw engine type.
    #[serde(rename = "type")]
    pub data_type: Identifier,

    /// Whether the column is declared NOT NULL.
    #[serde(default)]
    pub not_null: bool,

    /// Whether the column is an array.
    #[serde(default)]
    pub is_array: bool,

    /// Table that owns the column, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<Identifier>,

    /// Column comment.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

impl Column {
    /// Create a column with the given name and unqualified type.
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: Identifier::new(data_type),
            ..Self::default()
        }
    }

    /// Mark the column NOT NULL.
    pub fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    /// Mark the column as an array.
    pub fn array(mut self) -> Self {
        self.is_array = true;
        self
    }

    /// Attach the owning table.
    pub fn in_table(mut self, table: Identifier) -> Self {
        self.table = Some(table);
        self
    }
}

/// Table metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Table identifier.
    pub rel: Identifier,

    /// Column definitions in declaration order.
    #[serde(default)]
    pub columns: Vec<Column>,

    /// Table comment.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

/// Enum type metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumType {
    /// Enum type name (unqualified).
    pub name: String,

    /// Raw values in declaration order.
    #[serde(default)]
    pub vals: Vec<String>,

    /// Enum comment.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

/// A schema and the objects it contains.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Schema name.
    pub name: String,

    /// Tables in declaration order.
    #[serde(default)]
    pub tables: Vec<Table>,

    /// Enum types in declaration order.
    #[serde(default)]
    pub enums: Vec<EnumType>,

    /// Schema comment.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

impl Schema {
    /// Whether this is a reserved system schema.
    pub fn is_system(&self) -> bool {
        is_system_schema(&self.name)
    }
}

/// The full catalog: all schemas plus the default schema name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Schema that unqualified names resolve against.
    pub default_schema: String,

    /// Schemas in declaration order.
    #[serde(default)]
    pub schemas: Vec<Schema>,
}

impl Catalog {
    /// Iterate over non-system schemas in declaration order.
    pub fn user_schemas(&self) -> impl Iterator<Item = &Schema> {
        self.schemas.iter().filter(|s| !s.is_system())
    }

    /// Name used for an object in `schema`: the bare name in the default
    /// schema, `schema_name` everywhere else.
    pub fn qualified_object_name(&self, schema: &str, name: &str) -> String {
        if schema == self.default_schema {
            name.to_string()
        } else {
            format!("{}_{}", schema, name)
        }
    }
}
