//! Annotated queries and the top-level compilation request.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::{self, Settings};
use crate::error::Result;

use super::schema::{Catalog, Column};

/// A positional parameter usage in a query.
///
/// A query lists one parameter per placeholder occurrence, so the same
/// `number` may appear several times.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Placeholder number (`$1` is 1).
    pub number: u32,

    /// Column the parameter is compared to or assigned into.
    pub column: Column,
}

impl Parameter {
    /// Create a parameter usage.
    pub fn new(number: u32, column: Column) -> Self {
        Self { number, column }
    }
}

/// A named, annotated SQL query with inferred types.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// Query name from the `-- name:` annotation.
    #[serde(default)]
    pub name: String,

    /// Command kind string, e.g. `:one`.
    #[serde(default)]
    pub cmd: String,

    /// SQL text.
    #[serde(default)]
    pub text: String,

    /// Parameter usages in placeholder order.
    #[serde(default)]
    pub params: Vec<Parameter>,

    /// Result columns.
    #[serde(default)]
    pub columns: Vec<Column>,

    /// Free-form comment lines preceding the query.
    #[serde(default)]
    pub comments: Vec<String>,

    /// File the query was read from.
    #[serde(default)]
    pub filename: String,
}

/// Everything a compilation run consumes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodeGenRequest {
    /// Generation settings.
    #[serde(default)]
    pub settings: Settings,

    /// Database catalog.
    pub catalog: Catalog,

    /// Queries in source order.
    #[serde(default)]
    pub queries: Vec<Query>,

    /// Version of the tool that produced the request, echoed in headers.
    #[serde(default)]
    pub sqlc_version: String,
}

impl CodeGenRequest {
    /// Load a request from a JSON or YAML file (chosen by extension).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        config::read_document(path.as_ref())
    }

    /// Parse a request from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
