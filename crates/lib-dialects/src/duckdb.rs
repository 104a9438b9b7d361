use squill_lib_core::ast::{AttachOption, Expr, Statement};
use squill_lib_core::dialects::{Dialect, DialectCapabilities};
use squill_lib_core::errors::ParserError;
use squill_lib_core::keywords::Keyword;
use squill_lib_core::parser::Parser;
use squill_lib_core::tokens::Token;

/// [DuckDb](https://duckdb.org/)
#[derive(Debug, Default)]
pub struct DuckDbDialect;

static CAPS: DialectCapabilities = DialectCapabilities {
    supports_trailing_commas: true,
    supports_map_literal_syntax: true,
    supports_dictionary_syntax: true,
    supports_lambda_functions: true,
    supports_filter_during_aggregation: true,
    supports_dollar_quoted_string: true,
    ..DialectCapabilities::ansi()
};

impl Dialect for DuckDbDialect {
    fn capabilities(&self) -> &'static DialectCapabilities {
        &CAPS
    }

    /// `{'key': value}` struct literals.
    fn parse_prefix(&self, parser: &mut Parser) -> Option<Result<Expr, ParserError>> {
        if parser.consume_token(&Token::LeftBrace) {
            Some(parser.parse_dictionary_expr())
        } else {
            None
        }
    }

    /// `ATTACH`/`DETACH` take this dialect's database form.
    fn parse_statement(&self, parser: &mut Parser) -> Option<Result<Statement, ParserError>> {
        if parser.parse_keyword(Keyword::Attach) {
            Some(parse_attach_database(parser))
        } else if parser.parse_keyword(Keyword::Detach) {
            Some(parse_detach_database(parser))
        } else {
            None
        }
    }
}

/// `ATTACH [DATABASE] [IF NOT EXISTS] 'path' [AS alias] [(options)]`
/// <https://duckdb.org/docs/sql/statements/attach>
fn parse_attach_database(parser: &mut Parser) -> Result<Statement, ParserError> {
    let database = parser.parse_keyword(Keyword::Database);
    let if_not_exists = parser.parse_keywords(&[Keyword::If, Keyword::Not, Keyword::Exists]);
    let database_path = parser.parse_identifier()?;
    let database_alias = if parser.parse_keyword(Keyword::As) {
        Some(parser.parse_identifier()?)
    } else {
        None
    };
    let attach_options = if parser.consume_token(&Token::LeftParen) {
        let options = parser.parse_comma_separated(|p| {
            let key = p.parse_identifier()?;
            let value = match p.peek_token().token {
                Token::Comma | Token::RightParen => None,
                _ => Some(p.parse_expr()?),
            };
            Ok(AttachOption { key, value })
        })?;
        parser.expect_token(&Token::RightParen)?;
        options
    } else {
        Vec::new()
    };
    Ok(Statement::AttachDuckDbDatabase {
        if_not_exists,
        database,
        database_path,
        database_alias,
        attach_options,
    })
}

/// `DETACH [DATABASE] [IF EXISTS] alias`
fn parse_detach_database(parser: &mut Parser) -> Result<Statement, ParserError> {
    let database = parser.parse_keyword(Keyword::Database);
    let if_exists = parser.parse_keywords(&[Keyword::If, Keyword::Exists]);
    let database_alias = parser.parse_identifier()?;
    Ok(Statement::DetachDuckDbDatabase {
        if_exists,
        database,
        database_alias,
    })
}
