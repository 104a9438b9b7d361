//! Shared helpers for the integration suites.

#![allow(dead_code)]

use squill_lib::ast::*;
use squill_lib::{Dialect, GenericDialect, ParserError};

pub fn parse(sql: &str) -> Vec<Statement> {
    squill_lib::parse_sql(sql).unwrap_or_else(|e| panic!("could not parse {sql:?}: {e}"))
}

pub fn parse_with(dialect: &dyn Dialect, sql: &str) -> Vec<Statement> {
    squill_lib::parse_sql_with(sql, dialect)
        .unwrap_or_else(|e| panic!("could not parse {sql:?}: {e}"))
}

pub fn one_statement(sql: &str) -> Statement {
    one_statement_with(&GenericDialect, sql)
}

pub fn one_statement_with(dialect: &dyn Dialect, sql: &str) -> Statement {
    let mut statements = parse_with(dialect, sql);
    assert_eq!(statements.len(), 1, "expected one statement from {sql:?}");
    statements.remove(0)
}

pub fn parse_err(sql: &str) -> ParserError {
    parse_err_with(&GenericDialect, sql)
}

pub fn parse_err_with(dialect: &dyn Dialect, sql: &str) -> ParserError {
    squill_lib::parse_sql_with(sql, dialect)
        .err()
        .unwrap_or_else(|| panic!("{sql:?} parsed but should not have"))
}

pub fn query(stmt: Statement) -> Query {
    match stmt {
        Statement::Query(query) => *query,
        other => panic!("expected a query, got {other:?}"),
    }
}

pub fn select(stmt: Statement) -> Select {
    match *query(stmt).body {
        SetExpr::Select(select) => *select,
        other => panic!("expected a SELECT body, got {other:?}"),
    }
}

pub fn select_with(dialect: &dyn Dialect, sql: &str) -> Select {
    select(one_statement_with(dialect, sql))
}

/// The single projected expression of `SELECT <expr>`.
pub fn expr_with(dialect: &dyn Dialect, sql_expr: &str) -> Expr {
    let mut select = select_with(dialect, &format!("SELECT {sql_expr}"));
    assert_eq!(select.projection.len(), 1);
    match select.projection.remove(0) {
        SelectItem::UnnamedExpr(expr) => expr,
        other => panic!("expected a bare projection, got {other:?}"),
    }
}

pub fn expr(sql_expr: &str) -> Expr {
    expr_with(&GenericDialect, sql_expr)
}

pub fn number(n: &str) -> Expr {
    Expr::Value(Value::Number(n.to_string(), false))
}

pub fn string(s: &str) -> Expr {
    Expr::Value(Value::SingleQuotedString(s.to_string()))
}

pub fn ident(name: &str) -> Expr {
    Expr::Identifier(Ident::new(name))
}

pub fn binop(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
    Expr::BinaryOp {
        left: Box::new(left),
        op,
        right: Box::new(right),
    }
}

pub fn object_name(parts: &[&str]) -> ObjectName {
    ObjectName(parts.iter().map(|p| Ident::new(*p)).collect())
}
