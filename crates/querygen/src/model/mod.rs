//! Descriptor model handed to the emitter, and the builders that produce it.
//!
//! - [`structs`]: one canonical struct per table
//! - [`enums`]: one enum per catalog enum type
//! - [`dedup`]: reuse of canonical structs for query result shapes
//! - [`queries`]: argument, return and binding descriptors per query
//! - [`inflection`]: singular struct names for plural table names

pub mod dedup;
pub mod enums;
pub mod inflection;
pub mod queries;
pub mod structs;
pub mod types;

pub use dedup::StructIndex;
pub use types::{
    CommandKind, Constant, Enum, Field, ParamBinding, Params, Query, QueryReturn, Struct,
    CMD_COPY_FROM,
};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::config::Settings;
use crate::core::schema::Catalog;
use crate::dialect::ResolverImpl;
use crate::error::Result;

/// Read-only inputs shared by the builders of one compilation run.
#[derive(Debug, Clone, Copy)]
pub struct BuildContext<'a> {
    pub catalog: &'a Catalog,
    pub settings: &'a Settings,
    pub resolver: &'a ResolverImpl,
}

/// Complete output of a compilation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    /// Enums sorted by name.
    pub enums: Vec<Enum>,

    /// Canonical structs sorted by name.
    pub structs: Vec<Struct>,

    /// Queries sorted by method name.
    pub queries: Vec<Query>,
}

impl Model {
    /// Hex SHA-256 of the model's JSON form.
    ///
    /// Compilation is deterministic, so equal inputs give equal fingerprints.
    pub fn fingerprint(&self) -> Result<String> {
        let json = serde_json::to_vec(self)?;
        let mut hasher = Sha256::new();
        hasher.update(&json);
        Ok(format!("{:x}", hasher.finalize()))
    }

    /// Row structs that must be emitted next to their queries.
    pub fn emitted_rows(&self) -> impl Iterator<Item = &Struct> + '_ {
        self.queries
            .iter()
            .filter(|q| q.ret.emit_struct())
            .filter_map(|q| q.ret.model())
    }
}
