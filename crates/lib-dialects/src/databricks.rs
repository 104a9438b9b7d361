use squill_lib_core::dialects::{Dialect, DialectCapabilities};

/// [Databricks](https://www.databricks.com/) SQL
#[derive(Debug, Default)]
pub struct DatabricksDialect;

static CAPS: DialectCapabilities = DialectCapabilities {
    supports_filter_during_aggregation: true,
    supports_lambda_functions: true,
    supports_select_wildcard_except: true,
    supports_string_literal_backslash_escape: true,
    allow_extract_single_quotes: true,
    ..DialectCapabilities::ansi()
};

impl Dialect for DatabricksDialect {
    fn capabilities(&self) -> &'static DialectCapabilities {
        &CAPS
    }

    fn is_delimited_identifier_start(&self, ch: char) -> bool {
        ch == '`'
    }
}
