//! Enum classes from catalog enum types.

use std::collections::HashSet;
use tracing::warn;

use super::types::{Constant, Enum};
use super::BuildContext;
use crate::core::identifier::{data_class_name, enum_value_name};

/// Build one enum per catalog enum type outside the system schemas, sorted
/// by name.
///
/// Constants whose derived identifiers collide are kept as they are; each
/// collision is logged.
pub fn build_enums(ctx: &BuildContext<'_>) -> Vec<Enum> {
    let mut enums = Vec::new();

    for schema in ctx.catalog.user_schemas() {
        for enum_type in &schema.enums {
            let enum_name = ctx
                .catalog
                .qualified_object_name(&schema.name, &enum_type.name);
            let name = data_class_name(&enum_name, &ctx.settings.rename);

            let mut seen = HashSet::new();
            let constants = enum_type
                .vals
                .iter()
                .map(|value| {
                    let ident = enum_value_name(value);
                    if !seen.insert(ident.clone()) {
                        warn!(
                            "Enum {}: value '{}' derives duplicate constant {}",
                            name, value, ident
                        );
                    }
                    Constant {
                        name: ident,
                        value: value.clone(),
                    }
                })
                .collect();

            enums.push(Enum {
                name,
                constants,
                comment: enum_type.comment.clone(),
            });
        }
    }

    enums.sort_by(|a, b| a.name.cmp(&b.name));
    enums
}
