//! Core traits for engine-specific type resolution.
//!
//! - [`TypeResolver`]: maps raw column types of one engine to
//!   [`TypeDescriptor`]s and rewrites query text for the target binding
//!   protocol.
//!
//! # Design Patterns
//!
//! - **Strategy**: each engine provides an interchangeable resolver
//! - **Template Method**: `resolve` is built on the engine-specific
//!   `scalar_type`

use std::borrow::Cow;

use super::schema::Column;
use super::types::{Engine, TypeDescriptor};

/// Resolves column types for a single database engine.
///
/// Resolution is total: raw types with no mapping produce the generic
/// fallback type instead of an error.
pub trait TypeResolver {
    /// Engine this resolver serves.
    fn engine(&self) -> Engine;

    /// Map a column's raw type to a scalar type name.
    ///
    /// Returns the scalar name and whether it names a generated enum.
    fn scalar_type(&self, column: &Column) -> (String, bool);

    /// Resolve a column into a full descriptor.
    fn resolve(&self, column: &Column) -> TypeDescriptor {
        let (name, is_enum) = self.scalar_type(column);
        TypeDescriptor {
            name,
            is_enum,
            is_array: column.is_array,
            is_null: !column.not_null,
            data_type: column.data_type.data_type(),
            engine: self.engine(),
        }
    }

    /// Rewrite numbered placeholders for a binding protocol that only
    /// understands unnumbered ones.
    ///
    /// The default leaves the text untouched.
    fn rewrite_placeholders<'a>(&self, sql: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(sql)
    }
}
