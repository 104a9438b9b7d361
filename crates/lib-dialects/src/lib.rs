//! The concrete SQL dialects for squill.
//!
//! Each dialect is a zero-sized unit struct implementing
//! [`squill_lib_core::dialects::Dialect`]: a static capability descriptor
//! plus, where the vendor grammar cannot be expressed by capabilities
//! alone, one of the parse hooks.

pub mod generic;

#[cfg(feature = "bigquery")]
pub mod bigquery;
#[cfg(feature = "clickhouse")]
pub mod clickhouse;
#[cfg(feature = "databricks")]
pub mod databricks;
#[cfg(feature = "duckdb")]
pub mod duckdb;
#[cfg(feature = "hive")]
pub mod hive;
#[cfg(feature = "mssql")]
pub mod mssql;
#[cfg(feature = "mysql")]
pub mod mysql;
#[cfg(feature = "postgres")]
pub mod postgres;
#[cfg(feature = "redshift")]
pub mod redshift;
#[cfg(feature = "snowflake")]
pub mod snowflake;
#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use generic::GenericDialect;

#[cfg(feature = "bigquery")]
pub use bigquery::BigQueryDialect;
#[cfg(feature = "clickhouse")]
pub use clickhouse::ClickHouseDialect;
#[cfg(feature = "databricks")]
pub use databricks::DatabricksDialect;
#[cfg(feature = "duckdb")]
pub use duckdb::DuckDbDialect;
#[cfg(feature = "hive")]
pub use hive::HiveDialect;
#[cfg(feature = "mssql")]
pub use mssql::MsSqlDialect;
#[cfg(feature = "mysql")]
pub use mysql::MySqlDialect;
#[cfg(feature = "postgres")]
pub use postgres::PostgresDialect;
#[cfg(feature = "redshift")]
pub use redshift::RedshiftDialect;
#[cfg(feature = "snowflake")]
pub use snowflake::SnowflakeDialect;
#[cfg(feature = "sqlite")]
pub use sqlite::SQLiteDialect;
