use squill_lib_core::dialects::{Dialect, DialectCapabilities};

/// [Apache Hive](https://hive.apache.org/)
#[derive(Debug, Default)]
pub struct HiveDialect;

static CAPS: DialectCapabilities = DialectCapabilities {
    supports_filter_during_aggregation: true,
    supports_projection_trailing_commas: true,
    supports_string_literal_backslash_escape: true,
    ..DialectCapabilities::ansi()
};

impl Dialect for HiveDialect {
    fn capabilities(&self) -> &'static DialectCapabilities {
        &CAPS
    }

    fn is_delimited_identifier_start(&self, ch: char) -> bool {
        ch == '`'
    }

    fn is_identifier_start(&self, ch: char) -> bool {
        ch.is_alphabetic() || ch == '_' || ch == '$'
    }

    fn is_identifier_part(&self, ch: char) -> bool {
        ch.is_alphanumeric() || ch == '_' || ch == '$' || ch == '{' || ch == '}'
    }
}
