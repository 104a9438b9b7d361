//! SQL Server-flavoured behaviour.

mod common;

use common::*;
use pretty_assertions::assert_eq;
use squill_lib::MsSqlDialect;
use squill_lib::ast::*;

#[test]
fn equals_alias_assignment() {
    let select = select_with(&MsSqlDialect, "SELECT total = a + b FROM t");
    assert_eq!(
        select.projection[0],
        SelectItem::ExprWithAlias {
            expr: binop(ident("a"), BinaryOperator::Plus, ident("b")),
            alias: Ident::new("total"),
        }
    );
}

#[test]
fn convert_takes_the_type_first() {
    assert_eq!(
        expr_with(&MsSqlDialect, "CONVERT(INT, '42')"),
        Expr::Convert {
            expr: Box::new(string("42")),
            data_type: Some(DataType::Int(None)),
            charset: None,
            target_before_value: true,
        }
    );
}

#[test]
fn top_with_ties_and_percent() {
    let select = select_with(&MsSqlDialect, "SELECT TOP (5) PERCENT WITH TIES a FROM t");
    assert_eq!(
        select.top,
        Some(Top {
            with_ties: true,
            percent: true,
            quantity: Some(TopQuantity::Expr(number("5"))),
        })
    );
    assert!(!select.top_before_distinct);
}

#[test]
fn bracket_quoted_identifiers() {
    assert_eq!(
        expr_with(&MsSqlDialect, "[order].[select]"),
        Expr::CompoundIdentifier(vec![
            Ident::with_quote('[', "order"),
            Ident::with_quote('[', "select"),
        ])
    );
}

#[test]
fn substring_requires_the_comma_form() {
    assert_eq!(
        expr_with(&MsSqlDialect, "SUBSTRING(s, 1, 3)"),
        Expr::Substring {
            expr: Box::new(ident("s")),
            substring_from: Some(Box::new(number("1"))),
            substring_for: Some(Box::new(number("3"))),
            special: true,
        }
    );
    assert!(
        squill_lib::parse_sql_with("SELECT SUBSTRING(s FROM 1 FOR 3)", &MsSqlDialect).is_err()
    );
}

#[test]
fn outer_join_marker() {
    assert!(matches!(
        expr_with(&MsSqlDialect, "a (+)"),
        Expr::OuterJoin(_)
    ));
}

#[test]
fn cross_and_outer_apply() {
    let select = select_with(
        &MsSqlDialect,
        "SELECT * FROM t CROSS APPLY fn(t.id) f OUTER APPLY (SELECT 1) o",
    );
    assert!(matches!(
        select.from[0].joins[0].join_operator,
        JoinOperator::CrossApply
    ));
    assert!(matches!(
        select.from[0].joins[1].join_operator,
        JoinOperator::OuterApply
    ));
}

#[test]
fn identity_column_and_create_procedure() {
    let Statement::CreateTable(create) = one_statement_with(
        &MsSqlDialect,
        "CREATE TABLE t (id INT IDENTITY(1, 1), v NVARCHAR(MAX))",
    ) else {
        panic!("expected CREATE TABLE");
    };
    assert_eq!(
        create.columns[0].options[0].option,
        ColumnOption::Identity(Some(IdentityProperty {
            seed: number("1"),
            increment: number("1"),
        }))
    );
    assert_eq!(
        create.columns[1].data_type,
        DataType::Nvarchar(Some(CharacterLength::Max))
    );

    let Statement::CreateProcedure { or_alter, body, .. } = one_statement_with(
        &MsSqlDialect,
        "CREATE OR ALTER PROCEDURE p (a INT) AS BEGIN SELECT a; SELECT a + 1 END",
    ) else {
        panic!("expected CREATE PROCEDURE");
    };
    assert!(or_alter);
    assert_eq!(body.len(), 2);
}

#[test]
fn table_hints() {
    let select = select_with(&MsSqlDialect, "SELECT * FROM t WITH (NOLOCK)");
    let TableFactor::Table { with_hints, .. } = &select.from[0].relation else {
        panic!("expected a plain table");
    };
    assert_eq!(with_hints.len(), 1);
}

#[test]
fn for_system_time_as_of() {
    let select = select_with(
        &MsSqlDialect,
        "SELECT * FROM t FOR SYSTEM_TIME AS OF '2024-01-01'",
    );
    let TableFactor::Table { version, .. } = &select.from[0].relation else {
        panic!("expected a plain table");
    };
    assert_eq!(
        *version,
        Some(TableVersion::ForSystemTimeAsOf(string("2024-01-01")))
    );
}
