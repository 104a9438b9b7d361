//! Redshift-flavoured behaviour.

mod common;

use common::*;
use pretty_assertions::assert_eq;
use squill_lib::RedshiftDialect;
use squill_lib::ast::*;

#[test]
fn top_comes_before_distinct() {
    let select = select_with(&RedshiftDialect, "SELECT TOP 5 DISTINCT a FROM t");
    assert_eq!(
        select.top,
        Some(Top {
            with_ties: false,
            percent: false,
            quantity: Some(TopQuantity::Constant(5)),
        })
    );
    assert!(select.top_before_distinct);
    assert_eq!(select.distinct, Some(Distinct::Distinct));
}

#[test]
fn connect_by_hierarchy() {
    let select = select_with(
        &RedshiftDialect,
        "SELECT id FROM org CONNECT BY PRIOR id = parent_id START WITH parent_id IS NULL",
    );
    let connect_by = select.connect_by.unwrap();
    assert!(connect_by.start_with.is_some());
    assert_eq!(connect_by.relationships.len(), 1);
}

#[test]
fn unload_query() {
    let Statement::Unload { to, with, .. } = one_statement_with(
        &RedshiftDialect,
        "UNLOAD (SELECT * FROM t) TO 's3://bucket/prefix' WITH (region = 'us-east-1')",
    ) else {
        panic!("expected UNLOAD");
    };
    assert_eq!(to, Ident::with_quote('\'', "s3://bucket/prefix"));
    assert_eq!(with.len(), 1);
}

#[test]
fn sharp_identifiers_for_temp_tables() {
    assert_eq!(
        expr_with(&RedshiftDialect, "#temp"),
        Expr::Identifier(Ident::new("#temp"))
    );
}
