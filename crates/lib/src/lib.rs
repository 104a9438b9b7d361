//! squill: a dialect-aware SQL parser producing a strongly-typed syntax
//! tree.
//!
//! ```no_run
//! let statements = squill_lib::parse_sql("SELECT a, b FROM t WHERE a > 1").unwrap();
//! println!("{statements:?}");
//! ```
//!
//! The same engine accepts PostgreSQL, MySQL, SQLite, SQL Server,
//! Snowflake, BigQuery, ClickHouse, Databricks, Hive, Redshift, DuckDb and
//! a permissive generic dialect; pick one with [`parse_sql_with`] or drive
//! fragment parsing through [`Parser`] directly.

pub use squill_lib_core::ast;
pub use squill_lib_core::dialects::{Dialect, DialectCapabilities};
pub use squill_lib_core::errors::ParserError;
pub use squill_lib_core::keywords;
pub use squill_lib_core::lexer;
pub use squill_lib_core::parser::{Parser, ParserOptions};
pub use squill_lib_core::tokens;
pub use squill_lib_dialects::*;

use squill_lib_core::ast::Statement;

/// Parses `sql` under the permissive [`GenericDialect`].
pub fn parse_sql(sql: &str) -> Result<Vec<Statement>, ParserError> {
    parse_sql_with(sql, &GenericDialect)
}

/// Parses `sql` under `dialect`.
pub fn parse_sql_with(sql: &str, dialect: &dyn Dialect) -> Result<Vec<Statement>, ParserError> {
    Parser::parse_sql(dialect, sql)
}

/// Parses `sql` under `dialect` with explicit [`ParserOptions`].
pub fn parse_sql_with_options(
    sql: &str,
    dialect: &dyn Dialect,
    options: ParserOptions,
) -> Result<Vec<Statement>, ParserError> {
    Parser::new(dialect)
        .with_options(options)
        .try_with_sql(sql)?
        .parse_statements()
}
