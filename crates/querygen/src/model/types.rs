//! Output descriptors handed to the emitter.

use serde::{Deserialize, Serialize};

use crate::core::schema::Identifier;
use crate::core::types::TypeDescriptor;

/// Command kind string of the bulk-copy command, which cannot be generated.
pub const CMD_COPY_FROM: &str = ":copyfrom";

/// A resolved field of a struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Identifier, unique within the owning struct.
    pub name: String,

    /// Resolved type.
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,

    /// Documentation text.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

/// A data class: a table shape, a query result row, or a query's arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Struct {
    /// Class name.
    pub name: String,

    /// Fields in source column order.
    pub fields: Vec<Field>,

    /// Table the struct was derived from, for canonical structs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<Identifier>,

    /// Documentation text.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

impl Struct {
    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A named enum constant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constant {
    /// Derived identifier.
    pub name: String,

    /// Raw database value, used for persistence and lookups.
    pub value: String,
}

/// An enum class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enum {
    /// Class name.
    pub name: String,

    /// Constants in declaration order.
    pub constants: Vec<Constant>,

    /// Documentation text.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

impl Enum {
    /// Find the constant that stores `value`.
    pub fn lookup(&self, value: &str) -> Option<&Constant> {
        self.constants.iter().find(|c| c.value == value)
    }
}

/// The command kinds a query can be compiled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandKind {
    /// Returns at most one row.
    #[serde(rename = ":one")]
    One,
    /// Returns any number of rows.
    #[serde(rename = ":many")]
    Many,
    /// Returns nothing.
    #[serde(rename = ":exec")]
    Exec,
    /// Returns the affected row count.
    #[serde(rename = ":execrows")]
    ExecRows,
    /// Returns the generated key.
    #[serde(rename = ":execresult")]
    ExecResult,
}

impl CommandKind {
    /// Parse a command string; `None` for anything this generator does not
    /// know.
    pub fn parse(cmd: &str) -> Option<Self> {
        match cmd {
            ":one" => Some(CommandKind::One),
            ":many" => Some(CommandKind::Many),
            ":exec" => Some(CommandKind::Exec),
            ":execrows" => Some(CommandKind::ExecRows),
            ":execresult" => Some(CommandKind::ExecResult),
            _ => None,
        }
    }

    /// Command string as written in query annotations.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandKind::One => ":one",
            CommandKind::Many => ":many",
            CommandKind::Exec => ":exec",
            CommandKind::ExecRows => ":execrows",
            CommandKind::ExecResult => ":execresult",
        }
    }

    /// Whether the command reads a result set.
    pub fn returns_rows(&self) -> bool {
        matches!(self, CommandKind::One | CommandKind::Many)
    }
}

/// One bind call: the `index`-th placeholder occurrence takes the value of
/// argument field `field`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamBinding {
    /// 1-based bind position.
    pub index: usize,

    /// Placeholder number in the source SQL.
    pub number: u32,

    /// Index into the argument struct's fields.
    pub field: usize,
}

/// Arguments of a query: the distinct parameters plus one binding per usage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    /// Argument struct; holds the first occurrence of each parameter number.
    #[serde(rename = "struct")]
    pub model: Struct,

    /// Bindings in placeholder order.
    pub bindings: Vec<ParamBinding>,
}

impl Params {
    /// Whether the query takes no arguments.
    pub fn is_empty(&self) -> bool {
        self.model.fields.is_empty()
    }

    /// Fields in bind order, repeating fields bound more than once.
    ///
    /// Bindings that point past the argument fields are skipped.
    pub fn binding_fields(&self) -> impl Iterator<Item = &Field> + '_ {
        self.bindings.iter().filter_map(|b| self.model.fields.get(b.field))
    }
}

/// What a query returns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QueryReturn {
    /// No result columns.
    #[default]
    None,

    /// A single result column, returned without a wrapper.
    Scalar(Field),

    /// Several result columns.
    Struct {
        /// Row shape.
        model: Struct,
        /// `true` when the shape was synthesized for this query and must be
        /// rendered alongside it; `false` when it reuses a canonical struct.
        emit: bool,
    },
}

impl QueryReturn {
    /// Whether nothing is returned.
    pub fn is_empty(&self) -> bool {
        matches!(self, QueryReturn::None)
    }

    /// Whether the return value is a struct.
    pub fn is_struct(&self) -> bool {
        matches!(self, QueryReturn::Struct { .. })
    }

    /// Whether the row struct must be emitted with the query.
    pub fn emit_struct(&self) -> bool {
        matches!(self, QueryReturn::Struct { emit: true, .. })
    }

    /// Row struct, if any.
    pub fn model(&self) -> Option<&Struct> {
        match self {
            QueryReturn::Struct { model, .. } => Some(model),
            _ => None,
        }
    }

    /// Rendered return type name.
    pub fn type_name(&self) -> Option<String> {
        match self {
            QueryReturn::None => None,
            QueryReturn::Scalar(field) => Some(field.ty.to_string()),
            QueryReturn::Struct { model, .. } => Some(model.name.clone()),
        }
    }
}

/// A compiled query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// Command kind.
    pub cmd: CommandKind,

    /// Title-cased query name; prefix of generated class names.
    pub class_name: String,

    /// Accessor method name.
    pub method_name: String,

    /// Name of the prepared-statement field.
    pub field_name: String,

    /// Name of the SQL text constant.
    pub constant_name: String,

    /// SQL text after placeholder rewriting.
    pub sql: String,

    /// File the query came from.
    pub source_name: String,

    /// Comment lines.
    pub comments: Vec<String>,

    /// Arguments and bindings.
    pub arg: Params,

    /// Return value.
    pub ret: QueryReturn,
}
