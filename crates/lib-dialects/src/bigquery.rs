use squill_lib_core::dialects::{Dialect, DialectCapabilities};

/// [Google BigQuery](https://cloud.google.com/bigquery/)
#[derive(Debug, Default)]
pub struct BigQueryDialect;

static CAPS: DialectCapabilities = DialectCapabilities {
    supports_trailing_commas: true,
    supports_projection_trailing_commas: true,
    supports_window_function_null_treatment_arg: true,
    supports_select_wildcard_except: true,
    supports_triple_quoted_string: true,
    supports_string_literal_backslash_escape: true,
    ..DialectCapabilities::ansi()
};

impl Dialect for BigQueryDialect {
    fn capabilities(&self) -> &'static DialectCapabilities {
        &CAPS
    }

    // See https://cloud.google.com/bigquery/docs/reference/standard-sql/lexical
    fn is_delimited_identifier_start(&self, ch: char) -> bool {
        ch == '`'
    }

    fn is_identifier_start(&self, ch: char) -> bool {
        ch.is_alphabetic() || ch == '_'
    }

    fn is_identifier_part(&self, ch: char) -> bool {
        ch.is_alphanumeric() || ch == '_'
    }
}
