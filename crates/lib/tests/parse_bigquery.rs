//! BigQuery-flavoured behaviour.

mod common;

use common::*;
use pretty_assertions::assert_eq;
use squill_lib::BigQueryDialect;
use squill_lib::ast::*;

fn bq_expr(sql: &str) -> Expr {
    expr_with(&BigQueryDialect, sql)
}

#[test]
fn select_as_struct_and_value() {
    let select = select_with(&BigQueryDialect, "SELECT AS STRUCT 1 AS a, 2 AS b");
    assert_eq!(select.value_table_mode, Some(ValueTableMode::AsStruct));
    let select = select_with(&BigQueryDialect, "SELECT AS VALUE s");
    assert_eq!(select.value_table_mode, Some(ValueTableMode::AsValue));
}

#[test]
fn struct_literals() {
    let Expr::Struct { values, fields } = bq_expr("STRUCT<a INT64, b STRING>(1, 'x')") else {
        panic!("expected a struct");
    };
    assert_eq!(values, vec![number("1"), string("x")]);
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0].field_name, Some(Ident::new("a")));

    let Expr::Struct { values, fields } = bq_expr("STRUCT(1 AS n)") else {
        panic!("expected a struct");
    };
    assert!(fields.is_empty());
    assert_eq!(
        values[0],
        Expr::Named {
            expr: Box::new(number("1")),
            name: Ident::new("n"),
        }
    );
}

#[test]
fn wildcard_except() {
    let mut select = select_with(&BigQueryDialect, "SELECT * EXCEPT (a, b) FROM t");
    let SelectItem::Wildcard(options) = select.projection.remove(0) else {
        panic!("expected a wildcard");
    };
    assert_eq!(
        options.opt_except,
        Some(ExceptSelectItem {
            first_element: Ident::new("a"),
            additional_elements: vec![Ident::new("b")],
        })
    );
}

#[test]
fn wildcard_replace() {
    let mut select = select_with(
        &BigQueryDialect,
        "SELECT * REPLACE (a + 1 AS a) FROM t",
    );
    let SelectItem::Wildcard(options) = select.projection.remove(0) else {
        panic!("expected a wildcard");
    };
    let replace = options.opt_replace.unwrap();
    assert_eq!(replace.items[0].column_name, Ident::new("a"));
    assert!(replace.items[0].as_keyword);
}

#[test]
fn trailing_commas_in_projection() {
    let select = select_with(&BigQueryDialect, "SELECT a, b, FROM t");
    assert_eq!(select.projection.len(), 2);
}

#[test]
fn string_families() {
    assert_eq!(
        bq_expr("'''multi\nline'''"),
        Expr::Value(Value::TripleSingleQuotedString("multi\nline".to_string()))
    );
    assert_eq!(
        bq_expr("R'raw\\d+'"),
        Expr::Value(Value::SingleQuotedRawStringLiteral("raw\\d+".to_string()))
    );
    assert_eq!(
        bq_expr("B\"bytes\""),
        Expr::Value(Value::DoubleQuotedByteStringLiteral("bytes".to_string()))
    );
    assert_eq!(
        bq_expr("B'''raw bytes'''"),
        Expr::Value(Value::TripleSingleQuotedByteStringLiteral(
            "raw bytes".to_string()
        ))
    );
}

#[test]
fn angle_bracket_types() {
    let Statement::CreateTable(create) = one_statement_with(
        &BigQueryDialect,
        "CREATE TABLE t (a ARRAY<INT64>, b STRUCT<x STRING, y ARRAY<STRUCT<z INT64>>>)",
    ) else {
        panic!("expected CREATE TABLE");
    };
    assert_eq!(
        create.columns[0].data_type,
        DataType::Array(ArrayElemTypeDef::AngleBracket(Box::new(DataType::Int64)))
    );
    // the nested `>>` closes two lists
    assert!(matches!(
        create.columns[1].data_type,
        DataType::Struct(ref fields, StructBracketKind::AngleBrackets) if fields.len() == 2
    ));
}

#[test]
fn safe_cast_and_extract_with_quotes_rejected() {
    assert!(matches!(
        bq_expr("SAFE_CAST(x AS INT64)"),
        Expr::Cast {
            kind: CastKind::SafeCast,
            ..
        }
    ));
    // quoted extract fields are a Snowflake-style extension
    let err = parse_err_with(&BigQueryDialect, "SELECT EXTRACT('year' FROM d)");
    assert!(err.to_string().contains("Expected date/time field"), "{err}");
}

#[test]
fn create_table_partition_and_cluster() {
    let Statement::CreateTable(create) = one_statement_with(
        &BigQueryDialect,
        "CREATE TABLE t (a INT64, d DATE) PARTITION BY d CLUSTER BY a OPTIONS (description = 'x')",
    ) else {
        panic!("expected CREATE TABLE");
    };
    assert_eq!(create.partition_by, Some(Box::new(ident("d"))));
    assert_eq!(create.cluster_by, Some(vec![Ident::new("a")]));
    assert_eq!(create.options.map(|o| o.len()), Some(1));
}

#[test]
fn window_function_null_treatment_inside_args() {
    let Expr::Function(f) = bq_expr("last_value(x IGNORE NULLS) OVER (ORDER BY y)") else {
        panic!("expected a function");
    };
    let FunctionArguments::List(list) = f.args else {
        panic!("expected an argument list");
    };
    assert_eq!(
        list.clauses,
        vec![FunctionArgumentClause::IgnoreOrRespectNulls(
            NullTreatment::IgnoreNulls
        )]
    );
}
