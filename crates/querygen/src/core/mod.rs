//! Core abstractions for model compilation.
//!
//! - [`schema`]: catalog metadata (schemas, tables, columns, enum types)
//! - [`request`]: annotated queries and the compilation request
//! - [`types`]: resolved type descriptors
//! - [`traits`]: the per-engine [`TypeResolver`] strategy
//! - [`identifier`]: pure naming and sanitization helpers
//!
//! Engine-specific resolvers live in [`crate::dialect`].

pub mod identifier;
pub mod request;
pub mod schema;
pub mod traits;
pub mod types;

pub use request::{CodeGenRequest, Parameter, Query};
pub use schema::{Catalog, Column, EnumType, Identifier, Schema, Table};
pub use traits::TypeResolver;
pub use types::{BindKind, Engine, TypeDescriptor, FALLBACK_TYPE};
