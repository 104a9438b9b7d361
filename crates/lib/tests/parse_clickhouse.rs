//! ClickHouse-flavoured behaviour.

mod common;

use common::*;
use pretty_assertions::assert_eq;
use squill_lib::ClickHouseDialect;
use squill_lib::ast::*;

fn ch_expr(sql: &str) -> Expr {
    expr_with(&ClickHouseDialect, sql)
}

#[test]
fn create_table_with_engine_and_order_by() {
    let Statement::CreateTable(create) = one_statement_with(
        &ClickHouseDialect,
        "CREATE TABLE t (a INT) ENGINE = MergeTree ORDER BY a",
    ) else {
        panic!("expected CREATE TABLE");
    };
    assert_eq!(
        create.engine,
        Some(TableEngine {
            name: "MergeTree".to_string(),
            parameters: None,
        })
    );
    assert_eq!(create.order_by, Some(OneOrManyWithParens::One(ident("a"))));

    let Statement::CreateTable(create) = one_statement_with(
        &ClickHouseDialect,
        "CREATE TABLE t (a INT, b INT) ENGINE = ReplicatedMergeTree(shard, replica) \
         PRIMARY KEY a ORDER BY (a, b)",
    ) else {
        panic!("expected CREATE TABLE");
    };
    assert_eq!(create.engine.unwrap().parameters.map(|p| p.len()), Some(2));
    assert!(create.primary_key.is_some());
    assert_eq!(
        create.order_by,
        Some(OneOrManyWithParens::Many(vec![ident("a"), ident("b")]))
    );
}

#[test]
fn parametric_types() {
    let Statement::CreateTable(create) = one_statement_with(
        &ClickHouseDialect,
        "CREATE TABLE t (\
           a Nullable(String), \
           b FixedString(16), \
           c DateTime64(3, 'UTC'), \
           d LowCardinality(String), \
           e Map(String, UInt64), \
           f Array(Int64), \
           g Tuple(x Int64, y Float64)\
         ) ENGINE = Memory",
    ) else {
        panic!("expected CREATE TABLE");
    };
    let types: Vec<&DataType> = create.columns.iter().map(|c| &c.data_type).collect();
    assert_eq!(
        *types[0],
        DataType::Nullable(Box::new(DataType::String(None)))
    );
    assert_eq!(*types[1], DataType::FixedString(16));
    assert_eq!(
        *types[2],
        DataType::Datetime64(3, Some("UTC".to_string()))
    );
    assert_eq!(
        *types[3],
        DataType::LowCardinality(Box::new(DataType::String(None)))
    );
    assert_eq!(
        *types[4],
        DataType::Map(Box::new(DataType::String(None)), Box::new(DataType::UInt64))
    );
    assert_eq!(
        *types[5],
        DataType::Array(ArrayElemTypeDef::Parenthesis(Box::new(DataType::Int64)))
    );
    assert!(matches!(*types[6], DataType::Tuple(ref fields) if fields.len() == 2));
}

#[test]
fn map_access_via_the_infix_hook() {
    assert_eq!(
        ch_expr("m['k1']['k2']"),
        Expr::MapAccess {
            column: Box::new(ident("m")),
            keys: vec![string("k1"), string("k2")],
        }
    );
}

#[test]
fn lambda_functions() {
    let Expr::Function(f) = ch_expr("arrayMap(x -> x + 1, arr)") else {
        panic!("expected a function");
    };
    let FunctionArguments::List(list) = f.args else {
        panic!("expected an argument list");
    };
    let FunctionArg::Unnamed(FunctionArgExpr::Expr(Expr::Lambda(lambda))) = &list.args[0] else {
        panic!("expected a lambda, got {:?}", list.args[0]);
    };
    assert_eq!(lambda.params, OneOrManyWithParens::One(Ident::new("x")));

    let Expr::Lambda(lambda) = ch_expr("(x, y) -> x > y") else {
        panic!("expected a lambda");
    };
    assert_eq!(
        lambda.params,
        OneOrManyWithParens::Many(vec![Ident::new("x"), Ident::new("y")])
    );
}

#[test]
fn prewhere_and_limit_by() {
    let stmt = one_statement_with(
        &ClickHouseDialect,
        "SELECT a FROM t PREWHERE b > 0 WHERE c > 0 LIMIT 3 BY a",
    );
    let q = query(stmt);
    assert_eq!(q.limit, Some(number("3")));
    assert_eq!(q.limit_by, vec![ident("a")]);
    let SetExpr::Select(select) = *q.body else {
        panic!("expected SELECT");
    };
    assert!(select.prewhere.is_some());
    assert!(select.selection.is_some());
}

#[test]
fn order_by_with_fill_and_interpolate() {
    let q = query(one_statement_with(
        &ClickHouseDialect,
        "SELECT d FROM t ORDER BY d WITH FILL FROM 1 TO 10 STEP 2 INTERPOLATE (v AS v + 1)",
    ));
    let order_by = q.order_by.unwrap();
    assert_eq!(
        order_by.exprs[0].with_fill,
        Some(WithFill {
            from: Some(number("1")),
            to: Some(number("10")),
            step: Some(number("2")),
        })
    );
    let interpolate = order_by.interpolate.unwrap();
    assert_eq!(interpolate.exprs.unwrap().len(), 1);
}

#[test]
fn group_by_with_totals() {
    let select = select_with(
        &ClickHouseDialect,
        "SELECT a FROM t GROUP BY a WITH TOTALS",
    );
    assert_eq!(
        select.group_by,
        GroupByExpr::Expressions(vec![ident("a")], vec![GroupByWithModifier::Totals])
    );
}

#[test]
fn parametric_function_call() {
    let Expr::Function(f) = ch_expr("quantile(0.5)(x)") else {
        panic!("expected a function");
    };
    assert!(matches!(f.parameters, FunctionArguments::List(_)));
    assert!(matches!(f.args, FunctionArguments::List(_)));
}

#[test]
fn named_args_with_equals() {
    let Expr::Function(f) = ch_expr("f(a = 1)") else {
        panic!("expected a function");
    };
    let FunctionArguments::List(list) = f.args else {
        panic!("expected an argument list");
    };
    assert!(matches!(
        list.args[0],
        FunctionArg::Named {
            operator: FunctionArgOperator::Equals,
            ..
        }
    ));
}

#[test]
fn optimize_table() {
    let Statement::OptimizeTable {
        include_final,
        deduplicate,
        ..
    } = one_statement_with(
        &ClickHouseDialect,
        "OPTIMIZE TABLE t PARTITION p FINAL DEDUPLICATE BY a",
    )
    else {
        panic!("expected OPTIMIZE TABLE");
    };
    assert!(include_final);
    assert_eq!(deduplicate, Some(Deduplicate::ByExpression(ident("a"))));
}

#[test]
fn alter_table_partitions_and_projections() {
    let Statement::AlterTable { operations, .. } = one_statement_with(
        &ClickHouseDialect,
        "ALTER TABLE t DETACH PARTITION '2024', FREEZE PARTITION '2024' WITH NAME backup",
    ) else {
        panic!("expected ALTER TABLE");
    };
    assert!(matches!(
        operations[0],
        AlterTableOperation::DetachPartition { .. }
    ));
    assert!(matches!(
        operations[1],
        AlterTableOperation::FreezePartition {
            with_name: Some(_),
            ..
        }
    ));

    let Statement::AlterTable { operations, .. } = one_statement_with(
        &ClickHouseDialect,
        "ALTER TABLE t ADD PROJECTION p (SELECT a ORDER BY b)",
    ) else {
        panic!("expected ALTER TABLE");
    };
    assert!(matches!(
        operations[0],
        AlterTableOperation::AddProjection { .. }
    ));
}

#[test]
fn column_defaults_materialized_and_ephemeral() {
    let Statement::CreateTable(create) = one_statement_with(
        &ClickHouseDialect,
        "CREATE TABLE t (a INT, b INT MATERIALIZED a + 1, c INT ALIAS a + 2, d INT EPHEMERAL) \
         ENGINE = Memory",
    ) else {
        panic!("expected CREATE TABLE");
    };
    assert!(matches!(
        create.columns[1].options[0].option,
        ColumnOption::Materialized(_)
    ));
    assert!(matches!(
        create.columns[2].options[0].option,
        ColumnOption::Alias(_)
    ));
    assert!(matches!(
        create.columns[3].options[0].option,
        ColumnOption::Ephemeral(None)
    ));
}
