//! Per-query argument, return and binding descriptors.

use std::collections::HashMap;
use tracing::{debug, warn};

use super::dedup::StructIndex;
use super::types::{
    CommandKind, Field, ParamBinding, Params, Query, QueryReturn, Struct, CMD_COPY_FROM,
};
use super::BuildContext;
use crate::core::identifier::{
    column_name, lower_title, member_name, param_name, title, FieldNamer,
};
use crate::core::request;
use crate::core::schema::Column;
use crate::core::traits::TypeResolver;
use crate::error::{ModelError, Result};

/// Name of the field that carries a single-column result.
pub const SCALAR_RESULT_FIELD: &str = "results";

/// Compile every query of the request, sorted by method name.
///
/// Queries without a name or command are skipped, as are command kinds this
/// generator does not know. A bulk-copy query fails the whole run.
pub fn build_queries(
    ctx: &BuildContext<'_>,
    queries: &[request::Query],
    index: &StructIndex,
) -> Result<Vec<Query>> {
    let mut compiled = Vec::with_capacity(queries.len());

    for query in queries {
        if query.name.is_empty() || query.cmd.is_empty() {
            debug!("Skipping unnamed query in {}", query.filename);
            continue;
        }
        if query.cmd == CMD_COPY_FROM {
            return Err(ModelError::unsupported_command(&query.name, &query.cmd));
        }
        let Some(cmd) = CommandKind::parse(&query.cmd) else {
            warn!(
                "Skipping query {}: unknown command kind {}",
                query.name, query.cmd
            );
            continue;
        };

        compiled.push(compile_query(ctx, query, cmd, index));
    }

    compiled.sort_by(|a, b| a.method_name.cmp(&b.method_name));
    Ok(compiled)
}

fn compile_query(
    ctx: &BuildContext<'_>,
    query: &request::Query,
    cmd: CommandKind,
    index: &StructIndex,
) -> Query {
    let class_name = title(&query.name);
    let method_name = lower_title(&query.name);

    let usages: Vec<(u32, &Column)> = query
        .params
        .iter()
        .map(|p| (p.number, &p.column))
        .collect();
    let arg = columns_to_params(
        ctx,
        format!("{}Bindings", class_name),
        &usages,
        |column, number| param_name(column, number),
    );

    let ret = match query.columns.as_slice() {
        [] => QueryReturn::None,
        [column] => QueryReturn::Scalar(Field {
            name: SCALAR_RESULT_FIELD.to_string(),
            ty: ctx.resolver.resolve(column),
            comment: column.comment.clone(),
        }),
        columns => match index.find_match(columns, ctx) {
            Some(existing) => {
                debug!("Query {} returns existing struct {}", query.name, existing.name);
                QueryReturn::Struct {
                    model: existing.clone(),
                    emit: false,
                }
            }
            None => {
                let row_name = format!("{}Row", class_name);
                debug!("Query {} returns new struct {}", query.name, row_name);
                let positions: Vec<(u32, &Column)> = columns
                    .iter()
                    .enumerate()
                    .map(|(i, c)| (i as u32, c))
                    .collect();
                let params = columns_to_params(ctx, row_name, &positions, |column, pos| {
                    column_name(column, pos as usize)
                });
                QueryReturn::Struct {
                    model: params.model,
                    emit: true,
                }
            }
        },
    };

    Query {
        cmd,
        field_name: format!("{}Stmt", method_name),
        constant_name: method_name.clone(),
        method_name,
        class_name,
        sql: ctx.resolver.rewrite_placeholders(&query.text).into_owned(),
        source_name: query.filename.clone(),
        comments: query.comments.clone(),
        arg,
        ret,
    }
}

/// Build a struct from keyed column usages.
///
/// The first usage of a key creates a field named by `namer`; every usage
/// appends a binding to the field created for its key.
fn columns_to_params<F>(
    ctx: &BuildContext<'_>,
    name: String,
    usages: &[(u32, &Column)],
    namer: F,
) -> Params
where
    F: Fn(&Column, u32) -> String,
{
    let mut fields = Vec::new();
    let mut bindings = Vec::with_capacity(usages.len());
    let mut by_key: HashMap<u32, usize> = HashMap::new();
    let mut names = FieldNamer::new();

    for (i, &(key, column)) in usages.iter().enumerate() {
        let field = *by_key.entry(key).or_insert_with(|| {
            fields.push(Field {
                name: names.allocate(member_name(&namer(column, key), &ctx.settings.rename)),
                ty: ctx.resolver.resolve(column),
                comment: column.comment.clone(),
            });
            fields.len() - 1
        });
        bindings.push(ParamBinding {
            index: i + 1,
            number: key,
            field,
        });
    }

    Params {
        model: Struct {
            name,
            fields,
            ..Struct::default()
        },
        bindings,
    }
}
