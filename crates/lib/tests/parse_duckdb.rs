//! DuckDb-flavoured behaviour, including the ATTACH/DETACH statement hook
//! and the dictionary prefix hook.

mod common;

use common::*;
use pretty_assertions::assert_eq;
use squill_lib::DuckDbDialect;
use squill_lib::ast::*;

fn duck_expr(sql: &str) -> Expr {
    expr_with(&DuckDbDialect, sql)
}

#[test]
fn attach_and_detach_database() {
    let Statement::AttachDuckDbDatabase {
        if_not_exists,
        database,
        database_path,
        database_alias,
        attach_options,
    } = one_statement_with(
        &DuckDbDialect,
        "ATTACH DATABASE IF NOT EXISTS 'other.db' AS other (READ_ONLY, BLOCK_SIZE 16384)",
    )
    else {
        panic!("expected ATTACH");
    };
    assert!(if_not_exists);
    assert!(database);
    assert_eq!(database_path, Ident::with_quote('\'', "other.db"));
    assert_eq!(database_alias, Some(Ident::new("other")));
    assert_eq!(
        attach_options,
        vec![
            AttachOption {
                key: Ident::new("READ_ONLY"),
                value: None,
            },
            AttachOption {
                key: Ident::new("BLOCK_SIZE"),
                value: Some(number("16384")),
            },
        ]
    );

    assert_eq!(
        one_statement_with(&DuckDbDialect, "DETACH other"),
        Statement::DetachDuckDbDatabase {
            if_exists: false,
            database: false,
            database_alias: Ident::new("other"),
        }
    );
}

#[test]
fn detach_is_unsupported_elsewhere() {
    let err = parse_err("DETACH other");
    assert!(err.to_string().contains("Unsupported statement DETACH"), "{err}");
}

#[test]
fn install_and_load() {
    assert_eq!(
        one_statement_with(&DuckDbDialect, "INSTALL httpfs"),
        Statement::Install {
            extension_name: Ident::new("httpfs"),
        }
    );
    assert_eq!(
        one_statement_with(&DuckDbDialect, "LOAD httpfs"),
        Statement::Load {
            extension_name: Ident::new("httpfs"),
        }
    );
}

#[test]
fn dictionary_literal_via_the_prefix_hook() {
    assert_eq!(
        duck_expr("{'a': 1, 'b': x}"),
        Expr::Dictionary(vec![
            DictionaryField {
                key: Ident::with_quote('\'', "a"),
                value: Box::new(number("1")),
            },
            DictionaryField {
                key: Ident::with_quote('\'', "b"),
                value: Box::new(ident("x")),
            },
        ])
    );
}

#[test]
fn map_literal() {
    assert_eq!(
        duck_expr("MAP {'k': 10}"),
        Expr::Map(Map {
            entries: vec![MapEntry {
                key: Box::new(string("k")),
                value: Box::new(number("10")),
            }],
        })
    );
}

#[test]
fn integer_division_operator() {
    assert_eq!(
        duck_expr("7 // 2"),
        binop(number("7"), BinaryOperator::DuckIntegerDivide, number("2"))
    );
}

#[test]
fn lambda_with_arrow() {
    assert!(matches!(duck_expr("x -> x + 1"), Expr::Lambda(_)));
}

#[test]
fn create_macro() {
    let Statement::CreateMacro {
        name,
        args,
        definition,
        ..
    } = one_statement_with(&DuckDbDialect, "CREATE MACRO add(a, b := 5) AS a + b")
    else {
        panic!("expected CREATE MACRO");
    };
    assert_eq!(name, object_name(&["add"]));
    let args = args.unwrap();
    assert_eq!(args[0].name, Ident::new("a"));
    assert_eq!(args[1].default_expr, Some(number("5")));
    assert!(matches!(definition, MacroDefinition::Expr(_)));

    assert!(matches!(
        one_statement_with(
            &DuckDbDialect,
            "CREATE OR REPLACE TEMPORARY MACRO t() AS TABLE SELECT 1",
        ),
        Statement::CreateMacro {
            or_replace: true,
            temporary: true,
            definition: MacroDefinition::Table(_),
            ..
        }
    ));
}

#[test]
fn create_secret() {
    let Statement::CreateSecret {
        temporary,
        name,
        secret_type,
        options,
        ..
    } = one_statement_with(
        &DuckDbDialect,
        "CREATE PERSISTENT SECRET s3_secret (TYPE S3, KEY_ID abc, REGION east)",
    )
    else {
        panic!("expected CREATE SECRET");
    };
    assert_eq!(temporary, Some(false));
    assert_eq!(name, Some(Ident::new("s3_secret")));
    assert_eq!(secret_type, Ident::new("S3"));
    assert_eq!(options.len(), 2);

    assert!(matches!(
        one_statement_with(&DuckDbDialect, "DROP PERSISTENT SECRET IF EXISTS s3_secret"),
        Statement::DropSecret {
            if_exists: true,
            temporary: Some(false),
            ..
        }
    ));
}

#[test]
fn union_data_type() {
    let Statement::CreateTable(create) =
        one_statement_with(&DuckDbDialect, "CREATE TABLE t (u UNION(num INT, str TEXT))")
    else {
        panic!("expected CREATE TABLE");
    };
    let DataType::Union(fields) = &create.columns[0].data_type else {
        panic!("expected a union type");
    };
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0].field_name, Ident::new("num"));
}

#[test]
fn trailing_commas_everywhere() {
    let select = select_with(&DuckDbDialect, "SELECT a, b, FROM t WHERE a IN (1, 2,)");
    assert_eq!(select.projection.len(), 2);
}
