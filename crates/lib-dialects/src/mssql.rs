use squill_lib_core::dialects::{Dialect, DialectCapabilities};

/// [Microsoft SQL Server](https://www.microsoft.com/sql-server/)
#[derive(Debug, Default)]
pub struct MsSqlDialect;

static CAPS: DialectCapabilities = DialectCapabilities {
    convert_type_before_value: true,
    supports_equal_alias_assignment: true,
    supports_outer_join_operator: true,
    // only the comma form of SUBSTRING is accepted
    supports_substring_from_for_expression: false,
    supports_group_by_expression: false,
    ..DialectCapabilities::ansi()
};

impl Dialect for MsSqlDialect {
    fn capabilities(&self) -> &'static DialectCapabilities {
        &CAPS
    }

    fn is_delimited_identifier_start(&self, ch: char) -> bool {
        ch == '"' || ch == '['
    }

    // Temp-table and variable sigils are part of the name.
    fn is_identifier_start(&self, ch: char) -> bool {
        ch.is_alphabetic() || ch == '_' || ch == '#'
    }

    fn is_identifier_part(&self, ch: char) -> bool {
        ch.is_alphanumeric() || ch == '_' || ch == '#' || ch == '$'
    }
}
