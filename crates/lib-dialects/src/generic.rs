use squill_lib_core::dialects::{Dialect, DialectCapabilities};

/// The permissive fallback dialect: accepts a superset of the vendor
/// grammars wherever that does not create ambiguity.
#[derive(Debug, Default)]
pub struct GenericDialect;

static CAPS: DialectCapabilities = DialectCapabilities {
    supports_filter_during_aggregation: true,
    supports_window_function_null_treatment_arg: true,
    supports_connect_by: true,
    supports_match_recognize: true,
    supports_in_empty_list: true,
    supports_start_transaction_modifier: true,
    supports_dollar_quoted_string: true,
    ..DialectCapabilities::ansi()
};

impl Dialect for GenericDialect {
    fn capabilities(&self) -> &'static DialectCapabilities {
        &CAPS
    }

    fn is_delimited_identifier_start(&self, ch: char) -> bool {
        ch == '"' || ch == '`'
    }
}
