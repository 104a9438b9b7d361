use squill_lib_core::dialects::{Dialect, DialectCapabilities};

/// [PostgreSQL](https://www.postgresql.org/)
#[derive(Debug, Default)]
pub struct PostgresDialect;

static CAPS: DialectCapabilities = DialectCapabilities {
    supports_filter_during_aggregation: true,
    supports_create_index_with_clause: true,
    supports_dollar_quoted_string: true,
    ..DialectCapabilities::ansi()
};

impl Dialect for PostgresDialect {
    fn capabilities(&self) -> &'static DialectCapabilities {
        &CAPS
    }

    // See https://www.postgresql.org/docs/current/sql-syntax-lexical.html
    fn is_identifier_start(&self, ch: char) -> bool {
        ch.is_alphabetic() || ch == '_'
    }

    fn is_identifier_part(&self, ch: char) -> bool {
        ch.is_alphanumeric() || ch == '_' || ch == '$'
    }
}
