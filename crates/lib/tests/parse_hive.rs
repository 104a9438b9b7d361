//! Hive-flavoured behaviour.

mod common;

use common::*;
use pretty_assertions::assert_eq;
use squill_lib::HiveDialect;
use squill_lib::ast::*;

#[test]
fn create_external_table_with_hive_layout() {
    let Statement::CreateTable(create) = one_statement_with(
        &HiveDialect,
        "CREATE EXTERNAL TABLE logs (id INT, msg STRING) \
         PARTITIONED BY (dt STRING) \
         ROW FORMAT DELIMITED FIELDS TERMINATED BY ',' LINES TERMINATED BY '\\n' \
         STORED AS ORC \
         LOCATION '/warehouse/logs' \
         TBLPROPERTIES (retention = 30)",
    ) else {
        panic!("expected CREATE TABLE");
    };
    assert!(create.external);
    let HiveDistributionStyle::Partitioned { columns } = create.hive_distribution else {
        panic!("expected PARTITIONED BY");
    };
    assert_eq!(columns[0].name, Ident::new("dt"));
    let hive_formats = create.hive_formats.unwrap();
    let Some(HiveRowFormat::Delimited { delimiters }) = hive_formats.row_format else {
        panic!("expected DELIMITED");
    };
    assert_eq!(delimiters.len(), 2);
    assert_eq!(delimiters[0].delimiter, HiveDelimiter::FieldsTerminatedBy);
    assert_eq!(
        hive_formats.storage,
        Some(HiveIOFormat::FileFormat {
            format: FileFormat::Orc,
        })
    );
    assert_eq!(hive_formats.location.as_deref(), Some("/warehouse/logs"));
    assert_eq!(create.table_properties.len(), 1);
}

#[test]
fn clustered_by_into_buckets() {
    let Statement::CreateTable(create) = one_statement_with(
        &HiveDialect,
        "CREATE TABLE t (a INT) CLUSTERED BY (a) SORTED BY (a ASC) INTO 32 BUCKETS",
    ) else {
        panic!("expected CREATE TABLE");
    };
    assert_eq!(
        create.hive_distribution,
        HiveDistributionStyle::Clustered {
            columns: vec![Ident::new("a")],
            sorted_by: vec![OrderByExpr {
                expr: ident("a"),
                asc: Some(true),
                nulls_first: None,
                with_fill: None,
            }],
            num_buckets: 32,
        }
    );
}

#[test]
fn lateral_view_explode() {
    let select = select_with(
        &HiveDialect,
        "SELECT c FROM t LATERAL VIEW OUTER explode(items) x AS item, pos",
    );
    assert_eq!(select.lateral_views.len(), 1);
    let view = &select.lateral_views[0];
    assert!(view.outer);
    assert_eq!(view.lateral_view_name, object_name(&["x"]));
    assert_eq!(
        view.lateral_col_alias,
        vec![Ident::new("item"), Ident::new("pos")]
    );
}

#[test]
fn cluster_distribute_sort_by() {
    let select = select_with(
        &HiveDialect,
        "SELECT a FROM t CLUSTER BY a DISTRIBUTE BY b SORT BY c",
    );
    assert_eq!(select.cluster_by, vec![ident("a")]);
    assert_eq!(select.distribute_by, vec![ident("b")]);
    assert_eq!(select.sort_by, vec![ident("c")]);
}

#[test]
fn insert_overwrite_directory() {
    let Statement::Directory {
        overwrite,
        local,
        path,
        file_format,
        ..
    } = one_statement_with(
        &HiveDialect,
        "INSERT OVERWRITE LOCAL DIRECTORY '/tmp/out' STORED AS PARQUET SELECT * FROM t",
    )
    else {
        panic!("expected INSERT OVERWRITE DIRECTORY");
    };
    assert!(overwrite);
    assert!(local);
    assert_eq!(path, "/tmp/out");
    assert_eq!(file_format, Some(FileFormat::Parquet));
}

#[test]
fn insert_into_table_with_partition() {
    let Statement::Insert(insert) = one_statement_with(
        &HiveDialect,
        "INSERT OVERWRITE TABLE t PARTITION (dt = '2024-01-01') SELECT * FROM u",
    ) else {
        panic!("expected an insert");
    };
    assert!(insert.overwrite);
    assert_eq!(insert.partitioned.map(|p| p.len()), Some(1));
}

#[test]
fn msck_repair() {
    assert_eq!(
        one_statement_with(&HiveDialect, "MSCK REPAIR TABLE t SYNC PARTITIONS"),
        Statement::Msck {
            table_name: object_name(&["t"]),
            repair: true,
            partition_action: Some(AddDropSync::Sync),
        }
    );
}

#[test]
fn analyze_table() {
    let Statement::Analyze {
        partitions,
        compute_statistics,
        noscan,
        ..
    } = one_statement_with(
        &HiveDialect,
        "ANALYZE TABLE t PARTITION (dt = '2024-01-01') COMPUTE STATISTICS NOSCAN",
    )
    else {
        panic!("expected ANALYZE");
    };
    assert_eq!(partitions.map(|p| p.len()), Some(1));
    assert!(compute_statistics);
    assert!(noscan);
}

#[test]
fn create_function_using_jar() {
    let Statement::CreateFunction(f) = one_statement_with(
        &HiveDialect,
        "CREATE TEMPORARY FUNCTION udf AS 'com.example.UDF' USING JAR 'ivy://group:module:version'",
    ) else {
        panic!("expected CREATE FUNCTION");
    };
    assert!(f.temporary);
    assert!(matches!(
        f.function_body,
        Some(CreateFunctionBody::AsBeforeOptions(_))
    ));
    assert_eq!(
        f.using,
        Some(CreateFunctionUsing::Jar(
            "ivy://group:module:version".to_string()
        ))
    );
}

#[test]
fn cache_and_uncache_table() {
    let Statement::Cache {
        table_flag,
        options,
        query,
        ..
    } = one_statement_with(
        &HiveDialect,
        "CACHE LAZY TABLE t OPTIONS (storageLevel = 'DISK_ONLY') AS SELECT * FROM u",
    )
    else {
        panic!("expected CACHE TABLE");
    };
    assert_eq!(table_flag, Some(object_name(&["LAZY"])));
    assert_eq!(options.len(), 1);
    assert!(query.is_some());

    assert_eq!(
        one_statement_with(&HiveDialect, "UNCACHE TABLE IF EXISTS t"),
        Statement::UNCache {
            table_name: object_name(&["t"]),
            if_exists: true,
        }
    );
}
