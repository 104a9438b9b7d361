//! Snowflake-flavoured behaviour.

mod common;

use common::*;
use pretty_assertions::assert_eq;
use squill_lib::SnowflakeDialect;
use squill_lib::ast::*;

fn sf_expr(sql: &str) -> Expr {
    expr_with(&SnowflakeDialect, sql)
}

#[test]
fn connect_by_with_prior() {
    let select = select_with(
        &SnowflakeDialect,
        "SELECT employee_id FROM employees \
         START WITH manager_id IS NULL CONNECT BY manager_id = PRIOR employee_id",
    );
    let connect_by = select.connect_by.unwrap();
    assert!(connect_by.start_with.is_some());
    assert_eq!(
        connect_by.relationships,
        vec![binop(
            ident("manager_id"),
            BinaryOperator::Eq,
            Expr::Prior(Box::new(ident("employee_id"))),
        )]
    );
}

#[test]
fn prior_is_rejected_outside_connect_by() {
    // outside the CONNECT BY scope PRIOR is a plain identifier
    assert_eq!(
        expr_with(&SnowflakeDialect, "prior"),
        Expr::Identifier(Ident::new("prior"))
    );
}

#[test]
fn outer_join_marker() {
    assert_eq!(
        sf_expr("t.a (+)"),
        Expr::OuterJoin(Box::new(Expr::CompoundIdentifier(vec![
            Ident::new("t"),
            Ident::new("a"),
        ])))
    );
}

#[test]
fn wildcard_exclude_and_rename() {
    let mut select = select_with(
        &SnowflakeDialect,
        "SELECT * EXCLUDE (a, b) RENAME (c AS d) FROM t",
    );
    let SelectItem::Wildcard(options) = select.projection.remove(0) else {
        panic!("expected a wildcard");
    };
    assert_eq!(
        options.opt_exclude,
        Some(ExcludeSelectItem::Multiple(vec![
            Ident::new("a"),
            Ident::new("b"),
        ]))
    );
    assert_eq!(
        options.opt_rename,
        Some(RenameSelectItem::Multiple(vec![IdentWithAlias {
            ident: Ident::new("c"),
            alias: Ident::new("d"),
        }]))
    );
}

#[test]
fn json_path_access() {
    let Expr::JsonAccess { value, path } = sf_expr("payload:store.book[0]") else {
        panic!("expected json access");
    };
    assert_eq!(*value, ident("payload"));
    assert_eq!(
        path.path,
        vec![
            JsonPathElem::Dot {
                key: "store".to_string(),
                quoted: false,
            },
            JsonPathElem::Dot {
                key: "book".to_string(),
                quoted: false,
            },
            JsonPathElem::Bracket { key: number("0") },
        ]
    );
}

#[test]
fn extract_accepts_quoted_field() {
    assert_eq!(
        sf_expr("EXTRACT('year' FROM d)"),
        Expr::Extract {
            field: DateTimeField::Year,
            expr: Box::new(ident("d")),
        }
    );
}

#[test]
fn match_recognize_full_clause() {
    let select = select_with(
        &SnowflakeDialect,
        "SELECT * FROM trades MATCH_RECOGNIZE (\
           PARTITION BY symbol ORDER BY ts \
           MEASURES first(price) AS start_price, last(price) AS end_price \
           ALL ROWS PER MATCH OMIT EMPTY MATCHES \
           AFTER MATCH SKIP TO LAST up \
           PATTERN (^ down{2,} up+ $) \
           DEFINE down AS price < PREV(price), up AS price > PREV(price)\
         ) AS m",
    );
    let TableFactor::MatchRecognize {
        partition_by,
        order_by,
        measures,
        rows_per_match,
        after_match_skip,
        pattern,
        symbols,
        alias,
        ..
    } = &select.from[0].relation
    else {
        panic!("expected MATCH_RECOGNIZE");
    };
    assert_eq!(partition_by.len(), 1);
    assert_eq!(order_by.len(), 1);
    assert_eq!(measures.len(), 2);
    assert_eq!(
        *rows_per_match,
        Some(RowsPerMatch::AllRows(Some(EmptyMatchesMode::Omit)))
    );
    assert_eq!(
        *after_match_skip,
        Some(AfterMatchSkip::ToLast(Ident::new("up")))
    );
    let MatchRecognizePattern::Concat(parts) = pattern else {
        panic!("expected a concatenation, got {pattern:?}");
    };
    assert_eq!(parts.len(), 4);
    assert_eq!(
        parts[0],
        MatchRecognizePattern::Symbol(MatchRecognizeSymbol::Start)
    );
    assert_eq!(
        parts[1],
        MatchRecognizePattern::Repetition(
            Box::new(MatchRecognizePattern::Symbol(MatchRecognizeSymbol::Named(
                Ident::new("down")
            ))),
            RepetitionQuantifier::AtLeast(2),
        )
    );
    assert_eq!(
        parts[3],
        MatchRecognizePattern::Symbol(MatchRecognizeSymbol::End)
    );
    assert_eq!(symbols.len(), 2);
    assert_eq!(alias.as_ref().unwrap().name, Ident::new("m"));
}

#[test]
fn match_recognize_is_rejected_elsewhere() {
    // under a dialect without the capability the clause reads as an alias
    // and the parenthesised body is a syntax error
    assert!(
        squill_lib::parse_sql_with(
            "SELECT * FROM t MATCH_RECOGNIZE (PATTERN (a) DEFINE a AS TRUE)",
            &squill_lib::PostgresDialect,
        )
        .is_err()
    );
}

#[test]
fn lambda_in_higher_order_function() {
    let Expr::Function(f) = sf_expr("filter(arr, x -> x > 0)") else {
        panic!("expected a function");
    };
    let FunctionArguments::List(list) = f.args else {
        panic!("expected an argument list");
    };
    assert!(matches!(
        list.args[1],
        FunctionArg::Unnamed(FunctionArgExpr::Expr(Expr::Lambda(_)))
    ));
}

#[test]
fn parenthesized_set_variables() {
    assert!(matches!(
        one_statement_with(&SnowflakeDialect, "SET (a, b) = (1, 2)"),
        Statement::SetVariable {
            variables: OneOrManyWithParens::Many(_),
            ..
        }
    ));
}

#[test]
fn redundantly_parenthesized_table() {
    let select = select_with(&SnowflakeDialect, "SELECT * FROM (t) AS u");
    let TableFactor::Table { name, alias, .. } = &select.from[0].relation else {
        panic!("expected a plain table");
    };
    assert_eq!(*name, object_name(&["t"]));
    assert_eq!(alias.as_ref().unwrap().name, Ident::new("u"));
}
