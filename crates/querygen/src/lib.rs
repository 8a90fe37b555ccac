//! # querygen
//!
//! Builds the typed descriptor model a code emitter needs to turn annotated
//! SQL queries into a typed data-access layer.
//!
//! Given a database catalog, a list of analyzed queries and generation
//! settings, the library produces:
//!
//! - **Enums** for every user-defined enum type
//! - **Structs** for every table, with singularized names
//! - **Queries** with argument structs, return descriptors and positional
//!   parameter bindings, reusing table structs where a result matches one
//!
//! Column types are resolved per database engine (PostgreSQL, MySQL, or a
//! fallback for anything else).
//!
//! ## Example
//!
//! ```rust,no_run
//! use querygen::{generate, CodeGenRequest};
//!
//! fn main() -> querygen::Result<()> {
//!     let request = CodeGenRequest::load("request.json")?;
//!     let model = generate(&request)?;
//!     println!("{} queries, fingerprint {}", model.queries.len(), model.fingerprint()?);
//!     Ok(())
//! }
//! ```

pub mod compiler;
pub mod config;
pub mod core;
pub mod dialect;
pub mod emit;
pub mod error;
pub mod model;

// Re-exports for convenient access
pub use crate::core::{
    Catalog, CodeGenRequest, Column, Engine, Identifier, TypeDescriptor, TypeResolver,
};
pub use compiler::{generate, Compiler};
pub use config::{KotlinSettings, Settings};
pub use dialect::ResolverImpl;
pub use error::{ModelError, Result};
pub use model::{CommandKind, Enum, Field, Model, Query, QueryReturn, Struct};
