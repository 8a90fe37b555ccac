//! Canonical table structs.

use tracing::debug;

use super::inflection;
use super::types::{Field, Struct};
use super::BuildContext;
use crate::core::identifier::{data_class_name, member_name, FieldNamer};
use crate::core::schema::Identifier;
use crate::core::traits::TypeResolver;

/// Build one struct per table outside the system schemas.
///
/// Structs are returned in catalog declaration order; the caller sorts them
/// once deduplication no longer needs that order.
pub fn build_structs(ctx: &BuildContext<'_>) -> Vec<Struct> {
    let mut structs = Vec::new();

    for schema in ctx.catalog.user_schemas() {
        for table in &schema.tables {
            let table_name = ctx
                .catalog
                .qualified_object_name(&schema.name, &table.rel.name);
            let mut name = data_class_name(&table_name, &ctx.settings.rename);
            if !ctx.settings.kotlin.emit_exact_table_names {
                name = inflection::singular(
                    &name,
                    &ctx.settings.kotlin.inflection_exclude_table_names,
                );
            }

            let mut namer = FieldNamer::new();
            let fields = table
                .columns
                .iter()
                .map(|column| Field {
                    name: namer.allocate(member_name(&column.name, &ctx.settings.rename)),
                    ty: ctx.resolver.resolve(column),
                    comment: column.comment.clone(),
                })
                .collect();

            debug!("Table {}.{} -> struct {}", schema.name, table.rel.name, name);

            structs.push(Struct {
                name,
                fields,
                table: Some(Identifier::qualified(&schema.name, &table.rel.name)),
                comment: table.comment.clone(),
            });
        }
    }

    structs
}

/// Sort structs by name. Stable, so equal names keep declaration order.
pub fn sort_structs(structs: &mut [Struct]) {
    structs.sort_by(|a, b| a.name.cmp(&b.name));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::core::schema::{Catalog, Column, Schema, Table};
    use crate::dialect::ResolverImpl;

    fn catalog() -> Catalog {
        Catalog {
            default_schema: "public".to_string(),
            schemas: vec![
                Schema {
                    name: "information_schema".to_string(),
                    tables: vec![Table {
                        rel: Identifier::new("tables"),
                        columns: vec![Column::new("table_name", "text")],
                        ..Table::default()
                    }],
                    ..Schema::default()
                },
                Schema {
                    name: "public".to_string(),
                    tables: vec![
                        Table {
                            rel: Identifier::new("users"),
                            columns: vec![
                                Column::new("id", "uuid").not_null(),
                                Column::new("created_at", "timestamptz").not_null(),
                            ],
                            comment: "Registered users".to_string(),
                        },
                        Table {
                            rel: Identifier::new("categories"),
                            columns: vec![
                                Column::new("id", "int4").not_null(),
                                Column::new("ID", "int4"),
                            ],
                            ..Table::default()
                        },
                    ],
                    ..Schema::default()
                },
                Schema {
                    name: "audit".to_string(),
                    tables: vec![Table {
                        rel: Identifier::new("events"),
                        columns: vec![Column::new("payload", "jsonb")],
                        ..Table::default()
                    }],
                    ..Schema::default()
                },
            ],
        }
    }

    fn build(settings: &Settings) -> Vec<Struct> {
        let catalog = catalog();
        let resolver = ResolverImpl::for_engine(&catalog, settings);
        let ctx = BuildContext {
            catalog: &catalog,
            settings,
            resolver: &resolver,
        };
        build_structs(&ctx)
    }

    fn names(structs: &[Struct]) -> Vec<&str> {
        structs.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn test_declaration_order_and_system_schema_skip() {
        let structs = build(&Settings::default());
        assert_eq!(names(&structs), vec!["User", "Category", "AuditEvent"]);
    }

    #[test]
    fn test_sorted_output() {
        let mut structs = build(&Settings::default());
        sort_structs(&mut structs);
        assert_eq!(names(&structs), vec!["AuditEvent", "Category", "User"]);
    }

    #[test]
    fn test_exact_table_names() {
        let mut settings = Settings::default();
        settings.kotlin.emit_exact_table_names = true;
        let structs = build(&settings);
        assert_eq!(names(&structs), vec!["Users", "Categories", "AuditEvents"]);
    }

    #[test]
    fn test_rename_then_singularize() {
        let mut settings = Settings::default();
        settings
            .rename
            .insert("users".to_string(), "Accounts".to_string());
        settings
            .kotlin
            .inflection_exclude_table_names
            .push("accounts".to_string());
        let structs = build(&settings);
        assert_eq!(structs[0].name, "Accounts");
    }

    #[test]
    fn test_fields_and_table_identity() {
        let structs = build(&Settings::default());
        let user = &structs[0];
        assert_eq!(user.table, Some(Identifier::qualified("public", "users")));
        assert_eq!(user.comment, "Registered users");
        assert_eq!(user.fields[0].name, "id");
        assert_eq!(user.fields[0].ty.name, "UUID");
        assert_eq!(user.fields[1].name, "createdAt");
        assert_eq!(user.fields[1].ty.name, "OffsetDateTime");
    }

    #[test]
    fn test_field_name_collisions_are_suffixed() {
        let structs = build(&Settings::default());
        let category = &structs[1];
        assert_eq!(category.fields[0].name, "id");
        assert_eq!(category.fields[1].name, "iD");

        let mut settings = Settings::default();
        settings.rename.insert("ID".to_string(), "Id".to_string());
        let structs = build(&settings);
        assert_eq!(structs[1].fields[0].name, "id");
        assert_eq!(structs[1].fields[1].name, "id_2");
    }
}
