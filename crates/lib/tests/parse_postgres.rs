//! PostgreSQL-flavoured behaviour.

mod common;

use common::*;
use pretty_assertions::assert_eq;
use squill_lib::PostgresDialect;
use squill_lib::ast::*;

fn pg_expr(sql: &str) -> Expr {
    expr_with(&PostgresDialect, sql)
}

#[test]
fn dollar_quoted_strings_and_placeholders() {
    assert_eq!(
        pg_expr("$tag$some body$tag$"),
        Expr::Value(Value::DollarQuotedString(
            squill_lib::tokens::DollarQuotedString {
                value: "some body".to_string(),
                tag: Some("tag".to_string()),
            }
        ))
    );
    assert_eq!(
        pg_expr("$1"),
        Expr::Value(Value::Placeholder("$1".to_string()))
    );
}

#[test]
fn prefix_and_postfix_operators() {
    assert_eq!(
        pg_expr("|/ 25"),
        Expr::UnaryOp {
            op: UnaryOperator::PGSquareRoot,
            expr: Box::new(number("25")),
        }
    );
    assert_eq!(
        pg_expr("@ -5"),
        Expr::UnaryOp {
            op: UnaryOperator::PGAbs,
            expr: Box::new(Expr::UnaryOp {
                op: UnaryOperator::Minus,
                expr: Box::new(number("5")),
            }),
        }
    );
    assert_eq!(
        pg_expr("n !"),
        Expr::UnaryOp {
            op: UnaryOperator::PGPostfixFactorial,
            expr: Box::new(ident("n")),
        }
    );
}

#[test]
fn regex_operators() {
    assert!(matches!(
        pg_expr("name ~* 'a.*'"),
        Expr::BinaryOp {
            op: BinaryOperator::PGRegexIMatch,
            ..
        }
    ));
    assert!(matches!(
        pg_expr("name !~ 'a.*'"),
        Expr::BinaryOp {
            op: BinaryOperator::PGRegexNotMatch,
            ..
        }
    ));
}

#[test]
fn custom_operator_call() {
    let Expr::BinaryOp { op, .. } = pg_expr("a OPERATOR(pg_catalog.+) b") else {
        panic!("expected a binary op");
    };
    assert_eq!(
        op,
        BinaryOperator::PGCustomBinaryOperator(ObjectName(vec![
            Ident::new("pg_catalog"),
            Ident::new("+"),
        ]))
    );
}

#[test]
fn similar_to_with_escape() {
    assert!(matches!(
        pg_expr("a NOT SIMILAR TO 'b%' ESCAPE 'x'"),
        Expr::SimilarTo {
            negated: true,
            escape_char: Some(_),
            ..
        }
    ));
}

#[test]
fn create_function_with_dollar_body() {
    let Statement::CreateFunction(f) = one_statement_with(
        &PostgresDialect,
        "CREATE OR REPLACE FUNCTION add(a INTEGER, b INTEGER) \
         RETURNS INTEGER LANGUAGE sql IMMUTABLE STRICT AS $$ SELECT a + b $$",
    ) else {
        panic!("expected CREATE FUNCTION");
    };
    assert!(f.or_replace);
    assert_eq!(f.args.as_ref().map(Vec::len), Some(2));
    assert_eq!(f.return_type, Some(DataType::Integer(None)));
    assert_eq!(f.language, Some(Ident::new("sql")));
    assert_eq!(f.behavior, Some(FunctionBehavior::Immutable));
    assert_eq!(f.called_on_null, Some(FunctionCalledOnNull::Strict));
    assert!(matches!(
        f.function_body,
        Some(CreateFunctionBody::AsBeforeOptions(_))
    ));
}

#[test]
fn create_index_with_storage_parameters() {
    let Statement::CreateIndex(index) = one_statement_with(
        &PostgresDialect,
        "CREATE INDEX CONCURRENTLY idx ON t USING btree (a) INCLUDE (b) WITH (fillfactor = 70)",
    ) else {
        panic!("expected CREATE INDEX");
    };
    assert!(index.concurrently);
    assert_eq!(index.using, Some(Ident::new("btree")));
    assert_eq!(index.include, vec![Ident::new("b")]);
    assert_eq!(index.with.len(), 1);
}

#[test]
fn alter_table_row_level_security() {
    let Statement::AlterTable { operations, .. } =
        one_statement_with(&PostgresDialect, "ALTER TABLE t ENABLE ROW LEVEL SECURITY")
    else {
        panic!("expected ALTER TABLE");
    };
    assert_eq!(
        operations,
        vec![AlterTableOperation::EnableRowLevelSecurity]
    );
}

#[test]
fn composite_access() {
    assert_eq!(
        pg_expr("(item).name"),
        Expr::CompositeAccess {
            expr: Box::new(Expr::Nested(Box::new(ident("item")))),
            key: Ident::new("name"),
        }
    );
}
