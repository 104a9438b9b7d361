use squill_lib_core::dialects::{Dialect, DialectCapabilities};

/// [Amazon Redshift](https://aws.amazon.com/redshift/)
#[derive(Debug, Default)]
pub struct RedshiftDialect;

static CAPS: DialectCapabilities = DialectCapabilities {
    supports_top_before_distinct: true,
    supports_connect_by: true,
    supports_filter_during_aggregation: true,
    ..DialectCapabilities::ansi()
};

impl Dialect for RedshiftDialect {
    fn capabilities(&self) -> &'static DialectCapabilities {
        &CAPS
    }

    // `#` starts temp-table names, as on SQL Server.
    fn is_identifier_start(&self, ch: char) -> bool {
        ch.is_alphabetic() || ch == '_' || ch == '#'
    }

    fn is_identifier_part(&self, ch: char) -> bool {
        ch.is_alphanumeric() || ch == '_' || ch == '$' || ch == '#'
    }
}
