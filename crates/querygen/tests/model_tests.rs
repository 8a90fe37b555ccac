//! End-to-end compilation tests over complete requests.

use querygen::core::request::{Parameter, Query as SourceQuery};
use querygen::core::schema::{Catalog, EnumType, Schema, Table};
use querygen::{generate, CodeGenRequest, Column, Identifier, ModelError, QueryReturn, Settings};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn users_request() -> CodeGenRequest {
    CodeGenRequest::load(fixture("users.json")).unwrap()
}

fn source_query(name: &str, cmd: &str, text: &str) -> SourceQuery {
    SourceQuery {
        name: name.to_string(),
        cmd: cmd.to_string(),
        text: text.to_string(),
        filename: "query.sql".to_string(),
        ..SourceQuery::default()
    }
}

// =============================================================================
// Users fixture
// =============================================================================

#[test]
fn test_users_enum_and_struct() {
    let model = generate(&users_request()).unwrap();

    assert_eq!(model.enums.len(), 1);
    let status = &model.enums[0];
    assert_eq!(status.name, "UserStatus");
    let constants: Vec<(&str, &str)> = status
        .constants
        .iter()
        .map(|c| (c.name.as_str(), c.value.as_str()))
        .collect();
    assert_eq!(constants, vec![("ACTIVE", "active"), ("INACTIVE", "inactive")]);

    assert_eq!(model.structs.len(), 1);
    let user = &model.structs[0];
    assert_eq!(user.name, "User");
    assert_eq!(user.comment, "Registered users");
    let fields: Vec<(&str, String)> = user
        .fields
        .iter()
        .map(|f| (f.name.as_str(), f.ty.to_string()))
        .collect();
    assert_eq!(
        fields,
        vec![
            ("id", "UUID".to_string()),
            ("email", "String?".to_string()),
            ("status", "UserStatus".to_string()),
        ]
    );
    assert!(user.fields[2].ty.is_enum);
}

#[test]
fn test_users_queries() {
    let model = generate(&users_request()).unwrap();
    let methods: Vec<&str> = model.queries.iter().map(|q| q.method_name.as_str()).collect();
    assert_eq!(methods, vec!["countUsers", "listUsers", "userEmails"]);

    let count = &model.queries[0];
    assert!(matches!(&count.ret, QueryReturn::Scalar(f) if f.name == "results" && f.ty.name == "Long"));
    assert!(count.arg.is_empty());

    let list = &model.queries[1];
    assert_eq!(list.ret.type_name().as_deref(), Some("User"));
    assert!(!list.ret.emit_struct());
    assert_eq!(list.ret.model(), Some(&model.structs[0]));
    assert_eq!(list.arg.model.fields.len(), 1);
    assert_eq!(list.arg.bindings.len(), 2);
    assert_eq!(
        list.sql,
        "SELECT id, email, status FROM users WHERE status = ? OR status = ?"
    );

    let emails = &model.queries[2];
    assert!(emails.ret.emit_struct());
    let row = emails.ret.model().unwrap();
    assert_eq!(row.name, "UserEmailsRow");
    let names: Vec<&str> = row.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["id", "column2"]);
    assert_eq!(model.emitted_rows().count(), 1);
}

#[test]
fn test_compilation_is_deterministic() {
    let request = users_request();
    let first = generate(&request).unwrap();
    let second = generate(&request).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.fingerprint().unwrap(), second.fingerprint().unwrap());
}

#[test]
fn test_model_json_roundtrip() {
    let model = generate(&users_request()).unwrap();
    let json = serde_json::to_string(&model).unwrap();
    let back: querygen::Model = serde_json::from_str(&json).unwrap();
    assert_eq!(back, model);
}

// =============================================================================
// Failure and engine behaviour
// =============================================================================

#[test]
fn test_copyfrom_aborts_whole_run() {
    let mut request = users_request();
    request
        .queries
        .push(source_query("ImportUsers", ":copyfrom", "COPY users FROM STDIN"));

    let err = generate(&request).unwrap_err();
    assert!(err.to_string().contains("ImportUsers"));
    assert!(matches!(err, ModelError::UnsupportedCommand { .. }));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_mysql_placeholders_untouched() {
    let request = CodeGenRequest {
        settings: Settings::for_engine("mysql"),
        catalog: Catalog {
            default_schema: "app".to_string(),
            schemas: vec![Schema {
                name: "app".to_string(),
                enums: vec![EnumType {
                    name: "orders_state".to_string(),
                    vals: vec!["open".to_string(), "closed".to_string()],
                    ..EnumType::default()
                }],
                tables: vec![Table {
                    rel: Identifier::new("orders"),
                    columns: vec![
                        Column::new("id", "bigint").not_null(),
                        Column::new("state", "enum").not_null(),
                    ],
                    ..Table::default()
                }],
                ..Schema::default()
            }],
        },
        queries: vec![{
            let mut q = source_query("GetOrder", ":one", "SELECT id, state FROM orders WHERE id = ?");
            q.params = vec![Parameter::new(1, Column::new("id", "bigint").not_null())];
            q
        }],
        sqlc_version: String::new(),
    };

    let model = generate(&request).unwrap();
    assert_eq!(model.structs[0].name, "Order");
    assert_eq!(model.structs[0].fields[1].ty.name, "String");
    assert!(!model.structs[0].fields[1].ty.is_enum);
    assert_eq!(model.enums[0].name, "OrdersState");
    assert_eq!(model.queries[0].sql, "SELECT id, state FROM orders WHERE id = ?");
}

#[test]
fn test_unknown_engine_falls_back() {
    let mut request = users_request();
    request.settings = Settings::for_engine("sqlite");
    let model = generate(&request).unwrap();
    assert!(model.structs[0].fields.iter().all(|f| f.ty.is_fallback()));
    assert!(model.queries[1].sql.contains("$1"));
}
