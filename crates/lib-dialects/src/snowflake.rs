use squill_lib_core::dialects::{Dialect, DialectCapabilities};
use squill_lib_core::errors::ParserError;
use squill_lib_core::parser::{Parser, precedence};
use squill_lib_core::tokens::Token;

/// [Snowflake](https://www.snowflake.com/)
#[derive(Debug, Default)]
pub struct SnowflakeDialect;

static CAPS: DialectCapabilities = DialectCapabilities {
    supports_filter_during_aggregation: true,
    supports_connect_by: true,
    supports_match_recognize: true,
    supports_outer_join_operator: true,
    supports_lambda_functions: true,
    supports_parenthesized_set_variables: true,
    allow_extract_single_quotes: true,
    ..DialectCapabilities::ansi()
};

impl Dialect for SnowflakeDialect {
    fn capabilities(&self) -> &'static DialectCapabilities {
        &CAPS
    }

    // See https://docs.snowflake.com/en/sql-reference/identifiers-syntax
    fn is_identifier_start(&self, ch: char) -> bool {
        ch.is_alphabetic() || ch == '_'
    }

    fn is_identifier_part(&self, ch: char) -> bool {
        ch.is_alphanumeric() || ch == '_' || ch == '$'
    }

    /// `:` is the semi-structured path operator here; giving it a
    /// precedence routes it into the core's json-access production.
    fn get_next_precedence(&self, parser: &Parser) -> Option<Result<u8, ParserError>> {
        match parser.peek_token().token {
            Token::Colon => Some(Ok(precedence::SUBSCRIPT)),
            _ => None,
        }
    }
}
