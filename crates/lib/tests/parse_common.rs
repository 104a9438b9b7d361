//! The dialect-independent suite: expressions, precedence, queries, DML,
//! DDL, errors and the recursion bound.

mod common;

use common::*;
use expect_test::expect;
use pretty_assertions::assert_eq;
use squill_lib::ast::*;
use squill_lib::{GenericDialect, Parser, ParserError, ParserOptions};

// ----------------------------------------------------------------------
// statements & driver
// ----------------------------------------------------------------------

#[test]
fn statement_count_matches_semicolons() {
    assert_eq!(parse("SELECT 1; SELECT 2").len(), 2);
    assert_eq!(parse("SELECT 1; SELECT 2;").len(), 2);
    assert_eq!(parse(";;SELECT 1;;").len(), 1);
    assert_eq!(parse("").len(), 0);
    assert_eq!(parse(";").len(), 0);
}

#[test]
fn missing_semicolon_between_statements_errors() {
    let err = parse_err("SELECT 1 SELECT 2");
    assert!(err.to_string().contains("Expected end of statement"), "{err}");
}

#[test]
fn fragment_parsing_via_parser() {
    let mut parser = Parser::new(&GenericDialect)
        .try_with_sql("1 + 2, 3")
        .unwrap();
    let first = parser.parse_expr().unwrap();
    assert_eq!(
        first,
        binop(number("1"), BinaryOperator::Plus, number("2"))
    );
    // the cursor sits on the comma, ready for more fragments
    let data_type = Parser::new(&GenericDialect)
        .try_with_sql("ARRAY<BIGINT>")
        .unwrap()
        .parse_data_type()
        .unwrap();
    assert_eq!(
        data_type,
        DataType::Array(ArrayElemTypeDef::AngleBracket(Box::new(DataType::BigInt(
            None
        ))))
    );
}

// ----------------------------------------------------------------------
// precedence & associativity
// ----------------------------------------------------------------------

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(
        expr("1 + 2 * 3"),
        binop(
            number("1"),
            BinaryOperator::Plus,
            binop(number("2"), BinaryOperator::Multiply, number("3")),
        )
    );
}

#[test]
fn and_binds_tighter_than_or() {
    assert_eq!(
        expr("a OR b AND c"),
        binop(
            ident("a"),
            BinaryOperator::Or,
            binop(ident("b"), BinaryOperator::And, ident("c")),
        )
    );
}

#[test]
fn comparison_binds_tighter_than_and() {
    assert_eq!(
        expr("a AND b = c"),
        binop(
            ident("a"),
            BinaryOperator::And,
            binop(ident("b"), BinaryOperator::Eq, ident("c")),
        )
    );
}

#[test]
fn between_binds_tighter_than_or() {
    assert_eq!(
        expr("a BETWEEN b AND c OR d"),
        binop(
            Expr::Between {
                expr: Box::new(ident("a")),
                negated: false,
                low: Box::new(ident("b")),
                high: Box::new(ident("c")),
            },
            BinaryOperator::Or,
            ident("d"),
        )
    );
}

#[test]
fn not_borrows_the_precedence_of_in() {
    assert_eq!(
        expr("NOT a IN (1, 2)"),
        Expr::UnaryOp {
            op: UnaryOperator::Not,
            expr: Box::new(Expr::InList {
                expr: Box::new(ident("a")),
                list: vec![number("1"), number("2")],
                negated: false,
            }),
        }
    );
}

#[test]
fn set_operations_are_left_associative() {
    let query = query(one_statement("SELECT 1 UNION SELECT 2 UNION SELECT 3"));
    let SetExpr::SetOperation { op, left, .. } = *query.body else {
        panic!("expected a set operation");
    };
    assert_eq!(op, SetOperator::Union);
    assert!(matches!(*left, SetExpr::SetOperation { .. }));
}

#[test]
fn intersect_binds_tighter_than_union() {
    let query = query(one_statement("SELECT 1 UNION SELECT 2 INTERSECT SELECT 3"));
    let SetExpr::SetOperation { op, right, .. } = *query.body else {
        panic!("expected a set operation");
    };
    assert_eq!(op, SetOperator::Union);
    assert!(matches!(
        *right,
        SetExpr::SetOperation {
            op: SetOperator::Intersect,
            ..
        }
    ));
}

#[test]
fn union_quantifiers() {
    for (sql, quantifier) in [
        ("SELECT 1 UNION ALL SELECT 2", SetQuantifier::All),
        ("SELECT 1 UNION DISTINCT SELECT 2", SetQuantifier::Distinct),
        ("SELECT 1 UNION BY NAME SELECT 2", SetQuantifier::ByName),
        (
            "SELECT 1 UNION ALL BY NAME SELECT 2",
            SetQuantifier::AllByName,
        ),
        (
            "SELECT 1 UNION DISTINCT BY NAME SELECT 2",
            SetQuantifier::DistinctByName,
        ),
    ] {
        let query = query(one_statement(sql));
        let SetExpr::SetOperation { set_quantifier, .. } = *query.body else {
            panic!("expected a set operation for {sql}");
        };
        assert_eq!(set_quantifier, quantifier, "{sql}");
    }
}

// ----------------------------------------------------------------------
// expressions
// ----------------------------------------------------------------------

#[test]
fn snapshot_of_a_simple_binary_expression() {
    expect![[r#"
        BinaryOp {
            left: Identifier(
                Ident {
                    value: "a",
                    quote_style: None,
                },
            ),
            op: Plus,
            right: Value(
                Number(
                    "1",
                    false,
                ),
            ),
        }"#]]
    .assert_eq(&format!("{:#?}", expr("a + 1")));
}

#[test]
fn cast_operator_and_cast_call_agree() {
    let Expr::Cast {
        kind: CastKind::Cast,
        expr: left,
        data_type: left_type,
        format: None,
    } = expr("CAST(x AS BIGINT)")
    else {
        panic!("expected a cast");
    };
    let Expr::Cast {
        kind: CastKind::Cast,
        expr: right,
        data_type: right_type,
        format: None,
    } = expr("x::BIGINT")
    else {
        panic!("expected a cast");
    };
    assert_eq!(left, right);
    assert_eq!(left_type, right_type);
}

#[test]
fn cast_to_array_type() {
    let Expr::Cast { data_type, .. } = expr("a::INT[]") else {
        panic!("expected a cast");
    };
    assert_eq!(
        data_type,
        DataType::Array(ArrayElemTypeDef::SquareBracket(
            Box::new(DataType::Int(None)),
            None
        ))
    );
}

#[test]
fn try_and_safe_cast_kinds() {
    assert!(matches!(
        expr("TRY_CAST(x AS INT)"),
        Expr::Cast {
            kind: CastKind::TryCast,
            ..
        }
    ));
    assert!(matches!(
        expr("SAFE_CAST(x AS INT)"),
        Expr::Cast {
            kind: CastKind::SafeCast,
            ..
        }
    ));
}

#[test]
fn extract_substring_trim() {
    assert_eq!(
        expr("EXTRACT(YEAR FROM d)"),
        Expr::Extract {
            field: DateTimeField::Year,
            expr: Box::new(ident("d")),
        }
    );
    assert_eq!(
        expr("SUBSTRING(s FROM 1 FOR 3)"),
        Expr::Substring {
            expr: Box::new(ident("s")),
            substring_from: Some(Box::new(number("1"))),
            substring_for: Some(Box::new(number("3"))),
            special: false,
        }
    );
    assert_eq!(
        expr("TRIM(BOTH ' ' FROM s)"),
        Expr::Trim {
            expr: Box::new(ident("s")),
            trim_where: Some(TrimWhereField::Both),
            trim_what: Some(Box::new(string(" "))),
        }
    );
}

#[test]
fn position_and_overlay() {
    assert_eq!(
        expr("POSITION('x' IN s)"),
        Expr::Position {
            expr: Box::new(string("x")),
            within: Box::new(ident("s")),
        }
    );
    assert_eq!(
        expr("OVERLAY(s PLACING 'ab' FROM 2 FOR 1)"),
        Expr::Overlay {
            expr: Box::new(ident("s")),
            overlay_what: Box::new(string("ab")),
            overlay_from: Box::new(number("2")),
            overlay_for: Some(Box::new(number("1"))),
        }
    );
}

#[test]
fn is_family() {
    assert_eq!(expr("a IS NULL"), Expr::IsNull(Box::new(ident("a"))));
    assert_eq!(expr("a IS NOT NULL"), Expr::IsNotNull(Box::new(ident("a"))));
    assert_eq!(expr("a IS TRUE"), Expr::IsTrue(Box::new(ident("a"))));
    assert_eq!(
        expr("a IS NOT UNKNOWN"),
        Expr::IsNotUnknown(Box::new(ident("a")))
    );
    assert_eq!(
        expr("a IS DISTINCT FROM b"),
        Expr::IsDistinctFrom(Box::new(ident("a")), Box::new(ident("b")))
    );
}

#[test]
fn like_with_escape() {
    assert_eq!(
        expr("a NOT LIKE 'x%' ESCAPE '\\'"),
        Expr::Like {
            negated: true,
            expr: Box::new(ident("a")),
            pattern: Box::new(string("x%")),
            escape_char: Some("\\".to_string()),
        }
    );
}

#[test]
fn in_subquery_and_unnest() {
    assert!(matches!(
        expr("a IN (SELECT b FROM t)"),
        Expr::InSubquery { negated: false, .. }
    ));
    assert!(matches!(
        expr("a NOT IN UNNEST(arr)"),
        Expr::InUnnest { negated: true, .. }
    ));
}

#[test]
fn quantified_comparison() {
    assert!(matches!(
        expr("a > ANY (SELECT b FROM t)"),
        Expr::AnyOp {
            compare_op: BinaryOperator::Gt,
            ..
        }
    ));
    assert!(matches!(
        expr("a = ALL (SELECT b FROM t)"),
        Expr::AllOp {
            compare_op: BinaryOperator::Eq,
            ..
        }
    ));
}

#[test]
fn case_with_operand_and_else() {
    let Expr::Case {
        operand: Some(operand),
        conditions,
        results,
        else_result: Some(_),
    } = expr("CASE x WHEN 1 THEN 'a' WHEN 2 THEN 'b' ELSE 'c' END")
    else {
        panic!("expected a case expression");
    };
    assert_eq!(*operand, ident("x"));
    assert_eq!(conditions, vec![number("1"), number("2")]);
    assert_eq!(results, vec![string("a"), string("b")]);
}

#[test]
fn at_time_zone() {
    assert_eq!(
        expr("ts AT TIME ZONE 'UTC'"),
        Expr::AtTimeZone {
            timestamp: Box::new(ident("ts")),
            time_zone: Box::new(string("UTC")),
        }
    );
}

#[test]
fn interval_with_fields() {
    let Expr::Interval(interval) = expr("INTERVAL '1' YEAR TO MONTH") else {
        panic!("expected an interval");
    };
    assert_eq!(*interval.value, string("1"));
    assert_eq!(interval.leading_field, Some(DateTimeField::Year));
    assert_eq!(interval.last_field, Some(DateTimeField::Month));
}

#[test]
fn typed_string_literal() {
    assert_eq!(
        expr("DATE '2020-01-01'"),
        Expr::TypedString {
            data_type: DataType::Date,
            value: "2020-01-01".to_string(),
        }
    );
}

#[test]
fn subscript_index_and_slice() {
    assert_eq!(
        expr("arr[2]"),
        Expr::Subscript {
            expr: Box::new(ident("arr")),
            subscript: Box::new(Subscript::Index { index: number("2") }),
        }
    );
    assert_eq!(
        expr("arr[1:3:2]"),
        Expr::Subscript {
            expr: Box::new(ident("arr")),
            subscript: Box::new(Subscript::Slice {
                lower_bound: Some(number("1")),
                upper_bound: Some(number("3")),
                stride: Some(number("2")),
            }),
        }
    );
    assert_eq!(
        expr("arr[:3]"),
        Expr::Subscript {
            expr: Box::new(ident("arr")),
            subscript: Box::new(Subscript::Slice {
                lower_bound: None,
                upper_bound: Some(number("3")),
                stride: None,
            }),
        }
    );
}

#[test]
fn pg_json_operators() {
    assert_eq!(
        expr("payload -> 'a' ->> 'b'"),
        binop(
            binop(ident("payload"), BinaryOperator::Arrow, string("a")),
            BinaryOperator::LongArrow,
            string("b"),
        )
    );
    assert!(matches!(
        expr("tags @> ARRAY['x']"),
        Expr::BinaryOp {
            op: BinaryOperator::AtArrow,
            ..
        }
    ));
}

#[test]
fn nested_and_tuple() {
    assert_eq!(expr("(a)"), Expr::Nested(Box::new(ident("a"))));
    assert_eq!(expr("(a, b)"), Expr::Tuple(vec![ident("a"), ident("b")]));
}

#[test]
fn unary_operators() {
    assert_eq!(
        expr("-x"),
        Expr::UnaryOp {
            op: UnaryOperator::Minus,
            expr: Box::new(ident("x")),
        }
    );
    assert_eq!(
        expr("NOT a AND b"),
        binop(
            Expr::UnaryOp {
                op: UnaryOperator::Not,
                expr: Box::new(ident("a")),
            },
            BinaryOperator::And,
            ident("b"),
        )
    );
}

#[test]
fn exists_and_not_exists() {
    assert!(matches!(
        expr("EXISTS (SELECT 1)"),
        Expr::Exists { negated: false, .. }
    ));
    assert!(matches!(
        expr("NOT EXISTS (SELECT 1)"),
        Expr::Exists { negated: true, .. }
    ));
}

#[test]
fn collate() {
    assert_eq!(
        expr("name COLLATE \"de_DE\""),
        Expr::Collate {
            expr: Box::new(ident("name")),
            collation: ObjectName(vec![Ident::with_quote('"', "de_DE")]),
        }
    );
}

#[test]
fn compound_identifiers_and_wildcards() {
    assert_eq!(
        expr("a.b.c"),
        Expr::CompoundIdentifier(vec![Ident::new("a"), Ident::new("b"), Ident::new("c")])
    );
    let mut select = select(one_statement("SELECT t.* FROM t"));
    assert!(matches!(
        select.projection.remove(0),
        SelectItem::QualifiedWildcard(..)
    ));
}

#[test]
fn function_calls() {
    let Expr::Function(f) = expr("count(DISTINCT a)") else {
        panic!("expected a function");
    };
    assert_eq!(f.name, object_name(&["count"]));
    let FunctionArguments::List(list) = f.args else {
        panic!("expected an argument list");
    };
    assert_eq!(list.duplicate_treatment, Some(DuplicateTreatment::Distinct));
    assert_eq!(list.args.len(), 1);

    let Expr::Function(f) = expr("f(a, b => 1)") else {
        panic!("expected a function");
    };
    let FunctionArguments::List(list) = f.args else {
        panic!("expected an argument list");
    };
    assert!(matches!(
        list.args[1],
        FunctionArg::Named {
            operator: FunctionArgOperator::RightArrow,
            ..
        }
    ));
}

#[test]
fn window_functions() {
    let Expr::Function(f) =
        expr("row_number() OVER (PARTITION BY a ORDER BY b DESC ROWS UNBOUNDED PRECEDING)")
    else {
        panic!("expected a function");
    };
    let Some(WindowType::WindowSpec(spec)) = f.over else {
        panic!("expected a window spec");
    };
    assert_eq!(spec.partition_by, vec![ident("a")]);
    assert_eq!(spec.order_by[0].asc, Some(false));
    assert_eq!(
        spec.window_frame,
        Some(WindowFrame {
            units: WindowFrameUnits::Rows,
            start_bound: WindowFrameBound::Preceding(None),
            end_bound: None,
        })
    );
}

#[test]
fn aggregate_with_filter_and_within_group() {
    let Expr::Function(f) = expr("sum(a) FILTER (WHERE a > 0)") else {
        panic!("expected a function");
    };
    assert!(f.filter.is_some());

    let Expr::Function(f) = expr("percentile_cont(0.5) WITHIN GROUP (ORDER BY a)") else {
        panic!("expected a function");
    };
    assert_eq!(f.within_group.len(), 1);
}

#[test]
fn current_timestamp_without_parens() {
    let Expr::Function(f) = expr("CURRENT_TIMESTAMP") else {
        panic!("expected a function");
    };
    assert_eq!(f.args, FunctionArguments::None);
}

// ----------------------------------------------------------------------
// queries
// ----------------------------------------------------------------------

#[test]
fn recursive_cte() {
    let q = query(one_statement(
        "WITH RECURSIVE c(n) AS (SELECT 1 UNION ALL SELECT n + 1 FROM c WHERE n < 5) \
         SELECT * FROM c",
    ));
    let with = q.with.unwrap();
    assert!(with.recursive);
    assert_eq!(with.cte_tables.len(), 1);
    let cte = &with.cte_tables[0];
    assert_eq!(cte.alias.name, Ident::new("c"));
    assert_eq!(cte.alias.columns, vec![Ident::new("n")]);
    assert!(matches!(*cte.query.body, SetExpr::SetOperation { .. }));
    let SetExpr::Select(select) = *q.body else {
        panic!("expected a SELECT body");
    };
    let TableFactor::Table { ref name, .. } = select.from[0].relation else {
        panic!("expected a plain table");
    };
    assert_eq!(*name, object_name(&["c"]));
}

#[test]
fn cte_over_dml_bodies() {
    let q = query(one_statement(
        "WITH new_rows AS (SELECT 1) INSERT INTO t SELECT * FROM new_rows",
    ));
    assert!(q.with.is_some());
    assert!(matches!(*q.body, SetExpr::Insert(_)));

    let q = query(one_statement(
        "WITH limits AS (SELECT 10 AS cap) UPDATE t SET a = 0 WHERE a > 10",
    ));
    assert!(q.with.is_some());
    assert!(matches!(*q.body, SetExpr::Update(_)));
}

#[test]
fn materialized_cte() {
    let q = query(one_statement(
        "WITH c AS MATERIALIZED (SELECT 1) SELECT * FROM c",
    ));
    assert_eq!(
        q.with.unwrap().cte_tables[0].materialized,
        Some(CteAsMaterialized::Materialized)
    );
}

#[test]
fn order_by_nulls_and_limits() {
    let q = query(one_statement(
        "SELECT a FROM t ORDER BY a DESC NULLS FIRST LIMIT 10 OFFSET 5",
    ));
    let order_by = q.order_by.unwrap();
    assert_eq!(order_by.exprs[0].asc, Some(false));
    assert_eq!(order_by.exprs[0].nulls_first, Some(true));
    assert_eq!(q.limit, Some(number("10")));
    assert_eq!(q.offset.unwrap().value, number("5"));
}

#[test]
fn mysql_limit_comma_is_normalised() {
    let q = query(one_statement("SELECT a FROM t LIMIT 5, 10"));
    assert_eq!(
        q.offset,
        Some(Offset {
            value: number("5"),
            rows: OffsetRows::None,
        })
    );
    assert_eq!(q.limit, Some(number("10")));
}

#[test]
fn fetch_first_with_ties() {
    let q = query(one_statement(
        "SELECT a FROM t FETCH FIRST 3 ROWS WITH TIES",
    ));
    assert_eq!(
        q.fetch,
        Some(Fetch {
            with_ties: true,
            percent: false,
            quantity: Some(number("3")),
        })
    );
}

#[test]
fn locking_clauses() {
    let q = query(one_statement(
        "SELECT a FROM t FOR UPDATE OF t NOWAIT FOR SHARE SKIP LOCKED",
    ));
    assert_eq!(q.locks.len(), 2);
    assert_eq!(q.locks[0].lock_type, LockType::Update);
    assert_eq!(q.locks[0].nonblock, Some(NonBlock::Nowait));
    assert_eq!(q.locks[1].lock_type, LockType::Share);
    assert_eq!(q.locks[1].nonblock, Some(NonBlock::SkipLocked));
}

#[test]
fn select_into() {
    let select = select(one_statement("SELECT a INTO TEMPORARY TABLE u FROM t"));
    assert_eq!(
        select.into,
        Some(SelectInto {
            temporary: true,
            unlogged: false,
            table: true,
            name: object_name(&["u"]),
        })
    );
}

#[test]
fn joins() {
    let select = select(one_statement(
        "SELECT * FROM a \
         JOIN b ON a.id = b.id \
         LEFT JOIN c USING (id) \
         NATURAL RIGHT OUTER JOIN d \
         CROSS JOIN e \
         LEFT SEMI JOIN f ON a.id = f.id \
         FULL JOIN g ON TRUE",
    ));
    let joins = &select.from[0].joins;
    assert!(matches!(
        joins[0].join_operator,
        JoinOperator::Inner(JoinConstraint::On(_))
    ));
    assert_eq!(
        joins[1].join_operator,
        JoinOperator::LeftOuter(JoinConstraint::Using(vec![Ident::new("id")]))
    );
    assert!(matches!(
        joins[2].join_operator,
        JoinOperator::RightOuter(JoinConstraint::Natural)
    ));
    assert!(matches!(joins[3].join_operator, JoinOperator::CrossJoin));
    assert!(matches!(
        joins[4].join_operator,
        JoinOperator::LeftSemi(JoinConstraint::On(_))
    ));
    assert!(matches!(
        joins[5].join_operator,
        JoinOperator::FullOuter(JoinConstraint::On(_))
    ));
}

#[test]
fn nested_join_in_parens() {
    let select = select(one_statement("SELECT * FROM (a JOIN b ON TRUE) c"));
    assert!(matches!(
        select.from[0].relation,
        TableFactor::NestedJoin { .. }
    ));
}

#[test]
fn derived_table_with_column_aliases() {
    let select = select(one_statement("SELECT * FROM (SELECT 1, 2) AS t(a, b)"));
    let TableFactor::Derived {
        alias: Some(alias), ..
    } = &select.from[0].relation
    else {
        panic!("expected a derived table");
    };
    assert_eq!(alias.name, Ident::new("t"));
    assert_eq!(alias.columns, vec![Ident::new("a"), Ident::new("b")]);
}

#[test]
fn unnest_table_factor() {
    let select = select(one_statement(
        "SELECT * FROM UNNEST(a, b) WITH ORDINALITY AS u (x, y)",
    ));
    let TableFactor::UnNest {
        array_exprs,
        with_ordinality,
        alias: Some(alias),
        ..
    } = &select.from[0].relation
    else {
        panic!("expected UNNEST");
    };
    assert_eq!(array_exprs.len(), 2);
    assert!(with_ordinality);
    assert_eq!(alias.columns.len(), 2);
}

#[test]
fn table_valued_function_and_lateral() {
    let select = select(one_statement("SELECT * FROM generate_series(1, 10) g"));
    assert!(matches!(
        select.from[0].relation,
        TableFactor::Table { args: Some(_), .. }
    ));

    let select = common::select(one_statement("SELECT * FROM t, LATERAL (SELECT * FROM u) l"));
    assert!(matches!(
        select.from[1].relation,
        TableFactor::Derived { lateral: true, .. }
    ));
}

#[test]
fn group_by_with_modifiers_and_rollup() {
    let select = select(one_statement("SELECT a FROM t GROUP BY a WITH ROLLUP"));
    assert_eq!(
        select.group_by,
        GroupByExpr::Expressions(vec![ident("a")], vec![GroupByWithModifier::Rollup])
    );

    let select = common::select(one_statement("SELECT a FROM t GROUP BY ROLLUP (a, (b, c))"));
    let GroupByExpr::Expressions(exprs, _) = select.group_by else {
        panic!("expected expressions");
    };
    assert_eq!(
        exprs[0],
        Expr::Rollup(vec![vec![ident("a")], vec![ident("b"), ident("c")]])
    );

    let select = common::select(one_statement("SELECT a FROM t GROUP BY ALL"));
    assert_eq!(select.group_by, GroupByExpr::All);
}

#[test]
fn distinct_on() {
    let select = select(one_statement("SELECT DISTINCT ON (a) a, b FROM t"));
    assert_eq!(select.distinct, Some(Distinct::On(vec![ident("a")])));
}

#[test]
fn named_windows_and_qualify_order_is_recorded() {
    let select = select(one_statement(
        "SELECT a FROM t WINDOW w AS (PARTITION BY a) QUALIFY x = 1",
    ));
    assert_eq!(select.named_window.len(), 1);
    assert!(select.qualify.is_some());
    assert!(select.window_before_qualify);

    let select = common::select(one_statement("SELECT a FROM t QUALIFY x = 1 WINDOW w AS ()"));
    assert!(!select.window_before_qualify);
}

#[test]
fn pivot_and_unpivot() {
    let select = select(one_statement(
        "SELECT * FROM sales PIVOT (sum(amount) AS total FOR quarter IN ('Q1', 'Q2')) AS p",
    ));
    let TableFactor::Pivot {
        aggregate_functions,
        value_column,
        value_source,
        alias,
        ..
    } = &select.from[0].relation
    else {
        panic!("expected PIVOT");
    };
    assert_eq!(aggregate_functions.len(), 1);
    assert_eq!(aggregate_functions[0].alias, Some(Ident::new("total")));
    assert_eq!(*value_column, vec![Ident::new("quarter")]);
    let PivotValueSource::List(values) = value_source else {
        panic!("expected a value list");
    };
    assert_eq!(values.len(), 2);
    assert_eq!(alias.as_ref().unwrap().name, Ident::new("p"));

    let select = common::select(one_statement(
        "SELECT * FROM quarterly UNPIVOT (amount FOR quarter IN (q1, q2, q3)) u",
    ));
    let TableFactor::Unpivot {
        value,
        name,
        columns,
        ..
    } = &select.from[0].relation
    else {
        panic!("expected UNPIVOT");
    };
    assert_eq!(*value, Ident::new("amount"));
    assert_eq!(*name, Ident::new("quarter"));
    assert_eq!(columns.len(), 3);
}

#[test]
fn json_table() {
    let select = select(one_statement(
        "SELECT * FROM JSON_TABLE('[1,2]', '$[*]' COLUMNS (n INT PATH '$' DEFAULT '0' ON EMPTY)) AS jt",
    ));
    let TableFactor::JsonTable { columns, alias, .. } = &select.from[0].relation else {
        panic!("expected JSON_TABLE");
    };
    let JsonTableColumn::Named(column) = &columns[0] else {
        panic!("expected a named column");
    };
    assert_eq!(column.name, Ident::new("n"));
    assert_eq!(
        column.on_empty,
        Some(JsonTableColumnErrorHandling::Default(
            Value::SingleQuotedString("0".to_string())
        ))
    );
    assert_eq!(alias.as_ref().unwrap().name, Ident::new("jt"));
}

#[test]
fn values_and_table_bodies() {
    let q = query(one_statement("VALUES (1, 2), (3, 4)"));
    let SetExpr::Values(values) = *q.body else {
        panic!("expected VALUES");
    };
    assert_eq!(values.rows.len(), 2);

    let q = query(one_statement("TABLE t"));
    assert_eq!(*q.body, SetExpr::Table(object_name(&["t"])));
}

// ----------------------------------------------------------------------
// DML
// ----------------------------------------------------------------------

#[test]
fn insert_values_on_conflict() {
    let Statement::Insert(insert) = one_statement(
        "INSERT INTO t (a, b) VALUES (1, 2), (3, 4) \
         ON CONFLICT (a) DO UPDATE SET b = EXCLUDED.b",
    ) else {
        panic!("expected an insert");
    };
    assert_eq!(insert.table_name, object_name(&["t"]));
    assert_eq!(insert.columns, vec![Ident::new("a"), Ident::new("b")]);
    let SetExpr::Values(values) = *insert.source.unwrap().body else {
        panic!("expected VALUES");
    };
    assert_eq!(values.rows.len(), 2);
    let Some(OnInsert::OnConflict(on_conflict)) = insert.on else {
        panic!("expected ON CONFLICT");
    };
    assert_eq!(
        on_conflict.conflict_target,
        Some(ConflictTarget::Columns(vec![Ident::new("a")]))
    );
    let OnConflictAction::DoUpdate(do_update) = on_conflict.action else {
        panic!("expected DO UPDATE");
    };
    assert_eq!(
        do_update.assignments,
        vec![Assignment {
            target: AssignmentTarget::ColumnName(object_name(&["b"])),
            value: Expr::CompoundIdentifier(vec![Ident::new("EXCLUDED"), Ident::new("b")]),
        }]
    );
}

#[test]
fn insert_default_values_and_returning() {
    let Statement::Insert(insert) = one_statement("INSERT INTO t DEFAULT VALUES RETURNING id")
    else {
        panic!("expected an insert");
    };
    assert!(insert.source.is_none());
    assert_eq!(insert.returning.map(|r| r.len()), Some(1));
}

#[test]
fn update_with_from_and_where() {
    let Statement::Update {
        assignments,
        from,
        selection,
        ..
    } = one_statement("UPDATE t SET a = 1, b = b + 1 FROM u WHERE t.id = u.id")
    else {
        panic!("expected an update");
    };
    assert_eq!(assignments.len(), 2);
    assert!(from.is_some());
    assert!(selection.is_some());
}

#[test]
fn delete_with_using_and_limit() {
    let Statement::Delete(delete) =
        one_statement("DELETE FROM t USING u WHERE t.id = u.id ORDER BY t.id LIMIT 5")
    else {
        panic!("expected a delete");
    };
    assert!(matches!(delete.from, FromTable::WithFromKeyword(_)));
    assert!(delete.using.is_some());
    assert_eq!(delete.order_by.len(), 1);
    assert_eq!(delete.limit, Some(number("5")));
}

#[test]
fn merge_matched_and_not_matched() {
    let Statement::Merge {
        into,
        on,
        clauses,
        ..
    } = one_statement(
        "MERGE INTO t USING s ON t.k = s.k \
         WHEN MATCHED THEN UPDATE SET t.v = s.v \
         WHEN NOT MATCHED THEN INSERT (k, v) VALUES (s.k, s.v)",
    )
    else {
        panic!("expected a merge");
    };
    assert!(into);
    assert!(matches!(
        *on,
        Expr::BinaryOp {
            op: BinaryOperator::Eq,
            ..
        }
    ));
    assert_eq!(clauses.len(), 2);
    assert_eq!(clauses[0].clause_kind, MergeClauseKind::Matched);
    assert!(matches!(clauses[0].action, MergeAction::Update { .. }));
    assert_eq!(clauses[1].clause_kind, MergeClauseKind::NotMatched);
    let MergeAction::Insert(ref insert) = clauses[1].action else {
        panic!("expected INSERT");
    };
    assert_eq!(insert.columns, vec![Ident::new("k"), Ident::new("v")]);
    assert!(matches!(insert.kind, MergeInsertKind::Values(_)));
}

#[test]
fn merge_rejects_update_in_not_matched() {
    let err = parse_err("MERGE INTO t USING s ON t.k = s.k WHEN NOT MATCHED THEN UPDATE SET v = 1");
    assert!(
        err.to_string()
            .contains("UPDATE is not allowed in a NOT MATCHED"),
        "{err}"
    );
}

#[test]
fn copy_statement() {
    let Statement::Copy {
        source,
        to,
        target,
        options,
    } = one_statement("COPY t (a, b) FROM STDIN (FORMAT csv, DELIMITER '|', HEADER true)")
    else {
        panic!("expected COPY");
    };
    assert!(matches!(source, CopySource::Table { .. }));
    assert!(!to);
    assert_eq!(target, CopyTarget::Stdin);
    assert_eq!(
        options,
        vec![
            CopyOption::Format(Ident::new("csv")),
            CopyOption::Delimiter('|'),
            CopyOption::Header(true),
        ]
    );
}

// ----------------------------------------------------------------------
// DDL
// ----------------------------------------------------------------------

#[test]
fn create_table_with_constraints() {
    let Statement::CreateTable(create) = one_statement(
        "CREATE TABLE IF NOT EXISTS t (\
           id INT PRIMARY KEY, \
           name VARCHAR(20) NOT NULL DEFAULT 'x', \
           ref_id INT REFERENCES other (id) ON DELETE CASCADE, \
           CONSTRAINT uq UNIQUE (name), \
           FOREIGN KEY (ref_id) REFERENCES other (id), \
           CHECK (id > 0)\
         )",
    ) else {
        panic!("expected CREATE TABLE");
    };
    assert!(create.if_not_exists);
    assert_eq!(create.columns.len(), 3);
    assert_eq!(
        create.columns[0].options[0].option,
        ColumnOption::Unique {
            is_primary: true,
            characteristics: None,
        }
    );
    assert_eq!(
        create.columns[1].data_type,
        DataType::Varchar(Some(CharacterLength::IntegerLength {
            length: 20,
            unit: None,
        }))
    );
    assert_eq!(create.constraints.len(), 3);
    assert!(matches!(
        create.constraints[0],
        TableConstraint::Unique { .. }
    ));
    assert!(matches!(
        create.constraints[1],
        TableConstraint::ForeignKey { .. }
    ));
    assert!(matches!(create.constraints[2], TableConstraint::Check { .. }));
}

#[test]
fn create_table_as_select() {
    let Statement::CreateTable(create) = one_statement("CREATE TABLE t AS SELECT * FROM u")
    else {
        panic!("expected CREATE TABLE");
    };
    assert!(create.columns.is_empty());
    assert!(create.query.is_some());
}

#[test]
fn create_view_and_index() {
    let Statement::CreateView {
        or_replace,
        materialized,
        columns,
        ..
    } = one_statement("CREATE OR REPLACE MATERIALIZED VIEW v (a, b) AS SELECT 1, 2")
    else {
        panic!("expected CREATE VIEW");
    };
    assert!(or_replace);
    assert!(materialized);
    assert_eq!(columns.len(), 2);

    let Statement::CreateIndex(index) =
        one_statement("CREATE UNIQUE INDEX idx ON t (a DESC, b) WHERE a > 0")
    else {
        panic!("expected CREATE INDEX");
    };
    assert!(index.unique);
    assert_eq!(index.columns.len(), 2);
    assert_eq!(index.columns[0].asc, Some(false));
    assert!(index.predicate.is_some());
}

#[test]
fn generated_columns() {
    let Statement::CreateTable(create) = one_statement(
        "CREATE TABLE t (\
           id INT GENERATED ALWAYS AS IDENTITY, \
           total INT GENERATED ALWAYS AS (a + b) STORED\
         )",
    ) else {
        panic!("expected CREATE TABLE");
    };
    assert!(matches!(
        create.columns[0].options[0].option,
        ColumnOption::Generated {
            generated_as: GeneratedAs::Always,
            generation_expr: None,
            ..
        }
    ));
    assert!(matches!(
        create.columns[1].options[0].option,
        ColumnOption::Generated {
            generation_expr: Some(_),
            generation_expr_mode: Some(GeneratedExpressionMode::Stored),
            ..
        }
    ));
}

#[test]
fn alter_table_operations() {
    let Statement::AlterTable { operations, .. } = one_statement(
        "ALTER TABLE t \
         ADD COLUMN c INT, \
         DROP COLUMN IF EXISTS d CASCADE, \
         RENAME COLUMN a TO b, \
         ALTER COLUMN e SET DATA TYPE BIGINT USING e::BIGINT, \
         OWNER TO CURRENT_USER",
    ) else {
        panic!("expected ALTER TABLE");
    };
    assert_eq!(operations.len(), 5);
    assert!(matches!(
        operations[0],
        AlterTableOperation::AddColumn {
            column_keyword: true,
            ..
        }
    ));
    assert!(matches!(
        operations[1],
        AlterTableOperation::DropColumn {
            if_exists: true,
            cascade: true,
            ..
        }
    ));
    assert!(matches!(
        operations[3],
        AlterTableOperation::AlterColumn {
            op: AlterColumnOperation::SetDataType { using: Some(_), .. },
            ..
        }
    ));
    assert_eq!(
        operations[4],
        AlterTableOperation::OwnerTo(Owner::CurrentUser)
    );
}

#[test]
fn drop_objects() {
    let Statement::Drop {
        object_type,
        if_exists,
        names,
        cascade,
        ..
    } = one_statement("DROP TABLE IF EXISTS a, b CASCADE")
    else {
        panic!("expected DROP");
    };
    assert_eq!(object_type, ObjectType::Table);
    assert!(if_exists);
    assert_eq!(names.len(), 2);
    assert!(cascade);

    assert!(matches!(
        one_statement("DROP FUNCTION f(INT, TEXT)"),
        Statement::DropFunction { .. }
    ));
}

#[test]
fn create_function_set_once_is_enforced() {
    let err = parse_err("CREATE FUNCTION f() LANGUAGE sql LANGUAGE sql AS 'SELECT 1'");
    assert!(
        err.to_string().contains("LANGUAGE specified more than once"),
        "{err}"
    );
}

#[test]
fn create_sequence_and_trigger() {
    let Statement::CreateSequence {
        sequence_options, ..
    } = one_statement("CREATE SEQUENCE seq INCREMENT BY 2 MINVALUE 1 NO MAXVALUE START WITH 10")
    else {
        panic!("expected CREATE SEQUENCE");
    };
    assert_eq!(
        sequence_options,
        vec![
            SequenceOptions::IncrementBy(number("2")),
            SequenceOptions::MinValue(number("1")),
            SequenceOptions::NoMaxValue,
            SequenceOptions::StartWith(number("10")),
        ]
    );

    let Statement::CreateTrigger { period, events, .. } = one_statement(
        "CREATE TRIGGER trg BEFORE INSERT OR UPDATE OF a ON t \
         FOR EACH ROW EXECUTE FUNCTION audit()",
    ) else {
        panic!("expected CREATE TRIGGER");
    };
    assert_eq!(period, TriggerPeriod::Before);
    assert_eq!(
        events,
        vec![
            TriggerEvent::Insert,
            TriggerEvent::Update(vec![Ident::new("a")]),
        ]
    );
}

// ----------------------------------------------------------------------
// session & misc statements
// ----------------------------------------------------------------------

#[test]
fn transaction_statements() {
    assert!(matches!(
        one_statement("START TRANSACTION READ ONLY, ISOLATION LEVEL SERIALIZABLE"),
        Statement::StartTransaction { begin: false, .. }
    ));
    assert!(matches!(
        one_statement("BEGIN"),
        Statement::StartTransaction { begin: true, .. }
    ));
    assert_eq!(
        one_statement("COMMIT AND CHAIN"),
        Statement::Commit { chain: true }
    );
    assert_eq!(
        one_statement("ROLLBACK TO SAVEPOINT sp"),
        Statement::Rollback {
            chain: false,
            savepoint: Some(Ident::new("sp")),
        }
    );
}

#[test]
fn set_statements() {
    assert!(matches!(
        one_statement("SET search_path TO public"),
        Statement::SetVariable { .. }
    ));
    assert!(matches!(
        one_statement("SET TIME ZONE 'UTC'"),
        Statement::SetTimeZone { local: false, .. }
    ));
    assert_eq!(
        one_statement("SET NAMES 'utf8' COLLATE 'utf8_bin'"),
        Statement::SetNames {
            charset_name: "utf8".to_string(),
            collation_name: Some("utf8_bin".to_string()),
        }
    );
    assert!(matches!(
        one_statement("SET TRANSACTION ISOLATION LEVEL READ COMMITTED"),
        Statement::SetTransaction { .. }
    ));
}

#[test]
fn cursor_statements() {
    assert!(matches!(
        one_statement("DECLARE c SCROLL CURSOR WITH HOLD FOR SELECT * FROM t"),
        Statement::Declare {
            scroll: Some(true),
            hold: Some(true),
            ..
        }
    ));
    assert!(matches!(
        one_statement("FETCH FORWARD 5 FROM c"),
        Statement::Fetch {
            direction: FetchDirection::Forward { limit: Some(_) },
            ..
        }
    ));
    assert!(matches!(
        one_statement("CLOSE c"),
        Statement::Close {
            cursor: CloseCursor::Specific { .. }
        }
    ));
}

#[test]
fn grant_and_revoke() {
    let Statement::Grant {
        privileges,
        objects,
        grantees,
        with_grant_option,
        ..
    } = one_statement("GRANT SELECT (a, b), INSERT ON t TO u WITH GRANT OPTION")
    else {
        panic!("expected GRANT");
    };
    let Privileges::Actions(actions) = privileges else {
        panic!("expected actions");
    };
    assert_eq!(
        actions[0],
        Action::Select {
            columns: Some(vec![Ident::new("a"), Ident::new("b")]),
        }
    );
    assert!(matches!(objects, GrantObjects::Tables(_)));
    assert_eq!(grantees, vec![Ident::new("u")]);
    assert!(with_grant_option);

    assert!(matches!(
        one_statement("REVOKE ALL PRIVILEGES ON SCHEMA s FROM u CASCADE"),
        Statement::Revoke { cascade: true, .. }
    ));
}

#[test]
fn explain_statement_and_table() {
    let Statement::Explain {
        analyze,
        verbose,
        statement,
        ..
    } = one_statement("EXPLAIN ANALYZE VERBOSE SELECT 1")
    else {
        panic!("expected EXPLAIN");
    };
    assert!(analyze);
    assert!(verbose);
    assert!(matches!(*statement, Statement::Query(_)));

    assert!(matches!(
        one_statement("DESCRIBE t"),
        Statement::ExplainTable {
            describe_alias: DescribeAlias::Describe,
            ..
        }
    ));
}

#[test]
fn prepared_statements() {
    assert!(matches!(
        one_statement("PREPARE p (INT, TEXT) AS SELECT $1, $2"),
        Statement::Prepare { .. }
    ));
    assert!(matches!(
        one_statement("EXECUTE p (1, 'x')"),
        Statement::Execute { .. }
    ));
    assert_eq!(
        one_statement("DEALLOCATE PREPARE p"),
        Statement::Deallocate {
            name: Ident::new("p"),
            prepare: true,
        }
    );
}

#[test]
fn misc_statements() {
    assert_eq!(
        one_statement("USE db"),
        Statement::Use {
            db_name: Ident::new("db"),
        }
    );
    assert_eq!(
        one_statement("KILL QUERY 42"),
        Statement::Kill {
            modifier: Some(KillType::Query),
            id: 42,
        }
    );
    assert_eq!(
        one_statement("DISCARD PLANS"),
        Statement::Discard {
            object_type: DiscardObject::Plans,
        }
    );
    assert!(matches!(
        one_statement("SHOW TABLES FROM db LIKE '%x%'"),
        Statement::ShowTables {
            db_name: Some(_),
            filter: Some(ShowStatementFilter::Like(_)),
            ..
        }
    ));
    assert!(matches!(one_statement("CALL proc(1)"), Statement::Call(_)));
    assert!(matches!(
        one_statement("TRUNCATE TABLE t"),
        Statement::Truncate { table: true, .. }
    ));
    assert!(matches!(
        one_statement("SAVEPOINT sp"),
        Statement::Savepoint { .. }
    ));
}

#[test]
fn create_schema_database_type_extension_role() {
    assert_eq!(
        one_statement("CREATE SCHEMA s AUTHORIZATION owner_role"),
        Statement::CreateSchema {
            schema_name: SchemaName::NamedAuthorization(
                object_name(&["s"]),
                Ident::new("owner_role"),
            ),
            if_not_exists: false,
        }
    );
    assert!(matches!(
        one_statement("CREATE DATABASE IF NOT EXISTS db LOCATION '/data'"),
        Statement::CreateDatabase {
            if_not_exists: true,
            location: Some(_),
            ..
        }
    ));
    assert!(matches!(
        one_statement("CREATE TYPE mood AS ENUM ('sad', 'ok', 'happy')"),
        Statement::CreateType {
            representation: UserDefinedTypeRepresentation::Enum { .. },
            ..
        }
    ));
    assert!(matches!(
        one_statement("CREATE EXTENSION IF NOT EXISTS hstore WITH SCHEMA public"),
        Statement::CreateExtension {
            if_not_exists: true,
            schema: Some(_),
            ..
        }
    ));
    assert!(matches!(
        one_statement("CREATE ROLE reporting WITH LOGIN PASSWORD 'x'"),
        Statement::CreateRole { ref options, .. } if options.len() == 2
    ));
}

#[test]
fn drop_function_trigger_policy() {
    assert!(matches!(
        one_statement("DROP PROCEDURE IF EXISTS p(INT)"),
        Statement::DropProcedure {
            if_exists: true,
            ..
        }
    ));
    assert!(matches!(
        one_statement("DROP TRIGGER trg ON t CASCADE"),
        Statement::DropTrigger {
            table_name: Some(_),
            option: Some(ReferentialAction::Cascade),
            ..
        }
    ));
    assert!(matches!(
        one_statement("DROP POLICY IF EXISTS pol ON t"),
        Statement::DropPolicy {
            if_exists: true,
            ..
        }
    ));
}

#[test]
fn flush_assert_and_free_form_show() {
    assert_eq!(
        one_statement("FLUSH TABLES t1, t2"),
        Statement::Flush {
            object_type: FlushType::Tables,
            tables: vec![object_name(&["t1"]), object_name(&["t2"])],
        }
    );
    assert!(matches!(
        one_statement("ASSERT x > 0 AS 'x must be positive'"),
        Statement::Assert {
            message: Some(_),
            ..
        }
    ));
    assert_eq!(
        one_statement("SHOW TIME ZONE"),
        Statement::ShowVariable {
            variable: vec![Ident::new("TIME"), Ident::new("ZONE")],
        }
    );
}

// ----------------------------------------------------------------------
// errors & limits
// ----------------------------------------------------------------------

#[test]
fn unmatched_paren_reports_expectation_and_location() {
    let err = parse_err("SELECT (1 + 2");
    let message = err.to_string();
    assert!(message.contains("Expected )"), "{message}");
    assert!(message.contains("Line: 1"), "{message}");
}

#[test]
fn distinct_all_conflict() {
    for sql in ["SELECT ALL DISTINCT x FROM t", "SELECT DISTINCT ALL x FROM t"] {
        let err = parse_err(sql);
        assert!(
            err.to_string()
                .contains("Cannot specify both ALL and DISTINCT"),
            "{sql}: {err}"
        );
    }
}

#[test]
fn in_empty_list_is_capability_gated() {
    // Generic allows it
    assert!(matches!(
        expr("a IN ()"),
        Expr::InList { ref list, .. } if list.is_empty()
    ));
    // PostgreSQL does not
    let err = parse_err_with(&squill_lib::PostgresDialect, "SELECT a IN () FROM t");
    assert!(err.to_string().contains("Expected an expression"), "{err}");
}

#[test]
fn recursion_limit_is_sharp() {
    fn parses(depth: usize, limit: usize) -> Result<Vec<Statement>, ParserError> {
        let sql = format!(
            "SELECT {}1{}",
            "(".repeat(depth),
            ")".repeat(depth)
        );
        squill_lib::parse_sql_with_options(
            &sql,
            &GenericDialect,
            ParserOptions::new().with_recursion_limit(limit),
        )
    }
    let limit = 12;
    // find the deepest nesting the budget accepts, then prove the edge
    let mut deepest = None;
    for depth in 1..limit + 4 {
        if parses(depth, limit).is_ok() {
            deepest = Some(depth);
        }
    }
    let deepest = deepest.expect("some nesting must parse");
    assert_eq!(
        parses(deepest + 1, limit),
        Err(ParserError::RecursionLimit)
    );
    // a larger budget accepts the rejected depth: no hidden state leaked
    assert!(parses(deepest + 1, limit + 1).is_ok());
}

#[test]
fn trailing_comma_option() {
    let err = parse_err("SELECT a, FROM t");
    assert!(err.to_string().contains("Expected"), "{err}");
    let statements = squill_lib::parse_sql_with_options(
        "SELECT a, FROM t",
        &GenericDialect,
        ParserOptions::new().with_trailing_commas(true),
    )
    .unwrap();
    assert_eq!(statements.len(), 1);
}
