//! Databricks-flavoured behaviour.

mod common;

use common::*;
use pretty_assertions::assert_eq;
use squill_lib::DatabricksDialect;
use squill_lib::ast::*;

#[test]
fn lambda_functions() {
    assert!(matches!(
        expr_with(&DatabricksDialect, "x -> upper(x)"),
        Expr::Lambda(_)
    ));
    // the same spelling is a JSON arrow under PostgreSQL
    assert!(matches!(
        expr_with(&squill_lib::PostgresDialect, "x -> y"),
        Expr::BinaryOp {
            op: BinaryOperator::Arrow,
            ..
        }
    ));
}

#[test]
fn wildcard_except() {
    let mut select = select_with(&DatabricksDialect, "SELECT * EXCEPT (meta) FROM t");
    let SelectItem::Wildcard(options) = select.projection.remove(0) else {
        panic!("expected a wildcard");
    };
    assert_eq!(
        options.opt_except,
        Some(ExceptSelectItem {
            first_element: Ident::new("meta"),
            additional_elements: vec![],
        })
    );
}

#[test]
fn values_without_parentheses_around_the_keyword() {
    let select = select_with(&DatabricksDialect, "SELECT * FROM VALUES (1), (2) AS v (n)");
    let TableFactor::Derived {
        subquery,
        alias: Some(alias),
        ..
    } = &select.from[0].relation
    else {
        panic!("expected a derived VALUES table");
    };
    assert!(matches!(*subquery.body, SetExpr::Values(_)));
    assert_eq!(alias.name, Ident::new("v"));
}

#[test]
fn backslash_escapes_in_strings() {
    assert_eq!(
        expr_with(&DatabricksDialect, r"'it\'s'"),
        string("it's")
    );
}

#[test]
fn group_by_all() {
    let select = select_with(&DatabricksDialect, "SELECT dept, sum(x) FROM t GROUP BY ALL");
    assert_eq!(select.group_by, GroupByExpr::All);
}
