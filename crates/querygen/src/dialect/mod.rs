//! Engine-specific type resolvers.
//!
//! - [`postgres`]: PostgreSQL type mapping and placeholder rewriting
//! - [`mysql`]: MySQL type mapping
//! - [`generic`]: fallback for engines without a mapping
//!
//! # Static dispatch
//!
//! [`ResolverImpl`] wraps the concrete resolvers in an enum so that the
//! engine is picked once per compilation run and every column afterwards
//! goes through a `match` instead of a name lookup.
//!
//! # Adding New Engines
//!
//! 1. Create a module under `dialect/` implementing [`TypeResolver`]
//! 2. Add a variant to [`Engine`] and to [`ResolverImpl`]
//! 3. Map the engine name in [`ResolverImpl::for_engine`]

pub mod generic;
pub mod mysql;
pub mod postgres;

pub use generic::GenericResolver;
pub use mysql::MysqlResolver;
pub use postgres::PostgresResolver;

use std::borrow::Cow;

use crate::config::Settings;
use crate::core::identifier::data_class_name;
use crate::core::schema::{Catalog, Column, Identifier};
use crate::core::traits::TypeResolver;
use crate::core::types::Engine;

/// A user-defined enum type as seen by the resolvers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumEntry {
    /// Schema the enum lives in.
    pub schema: String,
    /// Enum type name.
    pub name: String,
    /// Generated class name.
    pub class_name: String,
}

/// Lookup table of the catalog's user enums, in declaration order.
///
/// System schemas are never indexed.
#[derive(Debug, Clone, Default)]
pub struct EnumIndex {
    entries: Vec<EnumEntry>,
}

impl EnumIndex {
    /// Index every enum outside the system schemas.
    pub fn from_catalog(catalog: &Catalog, settings: &Settings) -> Self {
        let entries = catalog
            .user_schemas()
            .flat_map(|schema| {
                schema.enums.iter().map(move |e| EnumEntry {
                    schema: schema.name.clone(),
                    name: e.name.clone(),
                    class_name: data_class_name(
                        &catalog.qualified_object_name(&schema.name, &e.name),
                        &settings.rename,
                    ),
                })
            })
            .collect();
        Self { entries }
    }

    /// Find the enum a column type refers to.
    ///
    /// An unqualified type matches the first enum with that name in
    /// declaration order; a qualified type must also match the schema.
    pub fn by_type(&self, data_type: &Identifier) -> Option<&EnumEntry> {
        self.entries.iter().find(|e| {
            e.name == data_type.name
                && (data_type.schema.is_empty() || data_type.schema == e.schema)
        })
    }

    /// Find an enum by its bare name in any schema.
    pub fn by_name(&self, name: &str) -> Option<&EnumEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Number of indexed enums.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no enums are indexed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Enum-based static dispatch over the engine resolvers.
#[derive(Debug, Clone)]
pub enum ResolverImpl {
    Postgres(PostgresResolver),
    Mysql(MysqlResolver),
    Generic(GenericResolver),
}

impl ResolverImpl {
    /// Build the resolver for `settings.engine` over `catalog`.
    ///
    /// Never fails: engines without a mapping get [`GenericResolver`].
    pub fn for_engine(catalog: &Catalog, settings: &Settings) -> Self {
        let enums = EnumIndex::from_catalog(catalog, settings);
        match &settings.engine {
            Engine::Postgresql => ResolverImpl::Postgres(PostgresResolver::new(enums)),
            Engine::Mysql => ResolverImpl::Mysql(MysqlResolver::new(enums)),
            Engine::Other(name) => {
                tracing::warn!(
                    "No type mapping for engine '{}'; every column resolves to the fallback type",
                    name
                );
                ResolverImpl::Generic(GenericResolver::new(settings.engine.clone()))
            }
        }
    }
}

impl TypeResolver for ResolverImpl {
    fn engine(&self) -> Engine {
        match self {
            ResolverImpl::Postgres(r) => r.engine(),
            ResolverImpl::Mysql(r) => r.engine(),
            ResolverImpl::Generic(r) => r.engine(),
        }
    }

    fn scalar_type(&self, column: &Column) -> (String, bool) {
        match self {
            ResolverImpl::Postgres(r) => r.scalar_type(column),
            ResolverImpl::Mysql(r) => r.scalar_type(column),
            ResolverImpl::Generic(r) => r.scalar_type(column),
        }
    }

    fn rewrite_placeholders<'a>(&self, sql: &'a str) -> Cow<'a, str> {
        match self {
            ResolverImpl::Postgres(r) => r.rewrite_placeholders(sql),
            ResolverImpl::Mysql(r) => r.rewrite_placeholders(sql),
            ResolverImpl::Generic(r) => r.rewrite_placeholders(sql),
        }
    }
}
