//! SQLite-flavoured behaviour, including the column-option conflict-clause
//! hook.

mod common;

use common::*;
use pretty_assertions::assert_eq;
use squill_lib::SQLiteDialect;
use squill_lib::ast::*;

#[test]
fn column_on_conflict_via_the_option_hook() {
    let Statement::CreateTable(create) = one_statement_with(
        &SQLiteDialect,
        "CREATE TABLE t (id INTEGER PRIMARY KEY ASC AUTOINCREMENT, v TEXT UNIQUE ON CONFLICT REPLACE)",
    ) else {
        panic!("expected CREATE TABLE");
    };
    let id_options: Vec<&ColumnOption> =
        create.columns[0].options.iter().map(|o| &o.option).collect();
    assert!(matches!(
        id_options[0],
        ColumnOption::Unique {
            is_primary: true,
            ..
        }
    ));
    assert_eq!(*id_options[1], ColumnOption::Sort(SortDirection::Asc));
    assert_eq!(*id_options[2], ColumnOption::AutoIncrement);
    let v_options: Vec<&ColumnOption> =
        create.columns[1].options.iter().map(|o| &o.option).collect();
    assert_eq!(
        *v_options[1],
        ColumnOption::OnConflict(ConflictResolution::Replace)
    );
}

#[test]
fn untyped_columns_and_without_rowid() {
    let Statement::CreateTable(create) =
        one_statement_with(&SQLiteDialect, "CREATE TABLE t (a, b, c INTEGER) WITHOUT ROWID")
    else {
        panic!("expected CREATE TABLE");
    };
    assert_eq!(create.columns[0].data_type, DataType::Unspecified);
    assert_eq!(create.columns[2].data_type, DataType::Integer(None));
    assert!(create.without_rowid);
}

#[test]
fn begin_with_transaction_modifier() {
    assert!(matches!(
        one_statement_with(&SQLiteDialect, "BEGIN DEFERRED TRANSACTION"),
        Statement::StartTransaction {
            begin: true,
            modifier: Some(TransactionModifier::Deferred),
            ..
        }
    ));
    // the modifier is dialect-gated
    assert!(squill_lib::parse_sql_with("BEGIN DEFERRED", &squill_lib::PostgresDialect).is_err());
}

#[test]
fn insert_or_variants() {
    let Statement::Insert(insert) =
        one_statement_with(&SQLiteDialect, "INSERT OR IGNORE INTO t VALUES (1)")
    else {
        panic!("expected an insert");
    };
    assert_eq!(insert.or, Some(SqliteOnConflict::Ignore));
}

#[test]
fn pragma_forms() {
    assert_eq!(
        one_statement_with(&SQLiteDialect, "PRAGMA cache_size = 1000"),
        Statement::Pragma {
            name: object_name(&["cache_size"]),
            value: Some(Value::Number("1000".to_string(), false)),
            is_eq: true,
        }
    );
    assert_eq!(
        one_statement_with(&SQLiteDialect, "PRAGMA schema.cache_size(500)"),
        Statement::Pragma {
            name: ObjectName(vec![Ident::new("schema"), Ident::new("cache_size")]),
            value: Some(Value::Number("500".to_string(), false)),
            is_eq: false,
        }
    );
    assert_eq!(
        one_statement_with(&SQLiteDialect, "PRAGMA optimize"),
        Statement::Pragma {
            name: object_name(&["optimize"]),
            value: None,
            is_eq: false,
        }
    );
}

#[test]
fn attach_database() {
    assert_eq!(
        one_statement_with(&SQLiteDialect, "ATTACH DATABASE 'other.db' AS other"),
        Statement::AttachDatabase {
            schema_name: Ident::new("other"),
            database_file_name: string("other.db"),
            database: true,
        }
    );
}

#[test]
fn create_virtual_table() {
    assert_eq!(
        one_statement_with(
            &SQLiteDialect,
            "CREATE VIRTUAL TABLE IF NOT EXISTS fts USING fts5(title, body)",
        ),
        Statement::CreateVirtualTable {
            name: object_name(&["fts"]),
            if_not_exists: true,
            module_name: Ident::new("fts5"),
            module_args: vec![Ident::new("title"), Ident::new("body")],
        }
    );
}

#[test]
fn in_empty_list() {
    assert!(matches!(
        expr_with(&SQLiteDialect, "a IN ()"),
        Expr::InList { ref list, .. } if list.is_empty()
    ));
}
