//! Fallback resolver for engines without a type mapping.

use crate::core::schema::Column;
use crate::core::traits::TypeResolver;
use crate::core::types::{Engine, FALLBACK_TYPE};

/// Resolves every column to the fallback type.
#[derive(Debug, Clone)]
pub struct GenericResolver {
    engine: Engine,
}

impl GenericResolver {
    /// Create a fallback resolver tagged with `engine`.
    pub fn new(engine: Engine) -> Self {
        Self { engine }
    }
}

impl TypeResolver for GenericResolver {
    fn engine(&self) -> Engine {
        self.engine.clone()
    }

    fn scalar_type(&self, _column: &Column) -> (String, bool) {
        (FALLBACK_TYPE.to_string(), false)
    }
}
