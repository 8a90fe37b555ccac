//! Reuse of canonical structs for query result shapes.

use std::collections::HashMap;

use super::types::Struct;
use super::BuildContext;
use crate::core::identifier::{column_name, member_name, same_table_name};
use crate::core::schema::Column;
use crate::core::traits::TypeResolver;
use crate::core::types::TypeDescriptor;

/// Canonical structs bucketed by field count and positional type signature.
///
/// Buckets keep catalog declaration order, so when several tables share a
/// shape the first declared one is returned.
#[derive(Debug, Default)]
pub struct StructIndex {
    structs: Vec<Struct>,
    buckets: HashMap<Vec<TypeDescriptor>, Vec<usize>>,
}

impl StructIndex {
    /// Index `structs`, which must be in catalog declaration order.
    pub fn new(structs: Vec<Struct>) -> Self {
        let mut buckets: HashMap<Vec<TypeDescriptor>, Vec<usize>> = HashMap::new();
        for (i, s) in structs.iter().enumerate() {
            buckets.entry(signature(s)).or_default().push(i);
        }
        Self { structs, buckets }
    }

    /// Indexed structs in declaration order.
    pub fn structs(&self) -> &[Struct] {
        &self.structs
    }

    /// Give back the indexed structs.
    pub fn into_structs(self) -> Vec<Struct> {
        self.structs
    }

    /// Find a canonical struct that `columns` reproduce exactly: same field
    /// names, types and owning table, position by position.
    pub fn find_match(&self, columns: &[Column], ctx: &BuildContext<'_>) -> Option<&Struct> {
        let types: Vec<TypeDescriptor> = columns.iter().map(|c| ctx.resolver.resolve(c)).collect();
        let candidates = self.buckets.get(&types)?;

        candidates
            .iter()
            .map(|&i| &self.structs[i])
            .find(|s| matches_columns(s, columns, &types, ctx))
    }
}

fn signature(s: &Struct) -> Vec<TypeDescriptor> {
    s.fields.iter().map(|f| f.ty.clone()).collect()
}

fn matches_columns(
    s: &Struct,
    columns: &[Column],
    types: &[TypeDescriptor],
    ctx: &BuildContext<'_>,
) -> bool {
    let Some(table) = s.table.as_ref() else {
        return false;
    };
    if s.fields.len() != columns.len() {
        return false;
    }

    s.fields
        .iter()
        .zip(columns.iter().zip(types))
        .enumerate()
        .all(|(i, (field, (column, ty)))| {
            field.name == member_name(&column_name(column, i), &ctx.settings.rename)
                && field.ty == *ty
                && same_table_name(
                    column.table.as_ref(),
                    table,
                    &ctx.catalog.default_schema,
                )
        })
}
