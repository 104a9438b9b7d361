use squill_lib_core::ast::Expr;
use squill_lib_core::dialects::{Dialect, DialectCapabilities};
use squill_lib_core::errors::ParserError;
use squill_lib_core::parser::Parser;
use squill_lib_core::tokens::Token;

/// [ClickHouse](https://clickhouse.com/)
#[derive(Debug, Default)]
pub struct ClickHouseDialect;

static CAPS: DialectCapabilities = DialectCapabilities {
    supports_lambda_functions: true,
    supports_named_function_args_with_eq_operator: true,
    supports_in_empty_list: true,
    supports_window_clause_named_window_reference: true,
    supports_string_literal_backslash_escape: true,
    ..DialectCapabilities::ansi()
};

impl Dialect for ClickHouseDialect {
    fn capabilities(&self) -> &'static DialectCapabilities {
        &CAPS
    }

    fn is_delimited_identifier_start(&self, ch: char) -> bool {
        ch == '"' || ch == '`'
    }

    /// `map['key']` renders as a map access rather than a subscript here.
    fn parse_infix(
        &self,
        parser: &mut Parser,
        expr: &Expr,
        _precedence: u8,
    ) -> Option<Result<Expr, ParserError>> {
        if parser.peek_token() != Token::LeftBracket {
            return None;
        }
        let mut keys = Vec::new();
        while parser.consume_token(&Token::LeftBracket) {
            let key = match parser.parse_expr() {
                Ok(key) => key,
                Err(e) => return Some(Err(e)),
            };
            if let Err(e) = parser.expect_token(&Token::RightBracket) {
                return Some(Err(e));
            }
            keys.push(key);
        }
        Some(Ok(Expr::MapAccess {
            column: Box::new(expr.clone()),
            keys,
        }))
    }
}
