use squill_lib_core::ast::{
    BinaryOperator, Expr, LockTable, LockTableType, Statement,
};
use squill_lib_core::dialects::{Dialect, DialectCapabilities};
use squill_lib_core::errors::ParserError;
use squill_lib_core::keywords::Keyword;
use squill_lib_core::parser::{Parser, precedence};
use squill_lib_core::tokens::Token;

/// [MySQL](https://www.mysql.com/)
#[derive(Debug, Default)]
pub struct MySqlDialect;

static CAPS: DialectCapabilities = DialectCapabilities {
    supports_string_literal_backslash_escape: true,
    supports_group_by_expression: true,
    ..DialectCapabilities::ansi()
};

impl Dialect for MySqlDialect {
    fn capabilities(&self) -> &'static DialectCapabilities {
        &CAPS
    }

    // See https://dev.mysql.com/doc/refman/8.0/en/identifiers.html.
    // Identifiers which begin with a digit are recognized while tokenizing
    // numbers, so they can be distinguished from exponent numeric literals.
    fn is_identifier_start(&self, ch: char) -> bool {
        ch.is_alphabetic()
            || ch == '_'
            || ch == '$'
            || ('\u{0080}'..='\u{ffff}').contains(&ch)
    }

    fn is_identifier_part(&self, ch: char) -> bool {
        self.is_identifier_start(ch) || ch.is_ascii_digit()
    }

    fn is_delimited_identifier_start(&self, ch: char) -> bool {
        ch == '`'
    }

    fn get_next_precedence(&self, parser: &Parser) -> Option<Result<u8, ParserError>> {
        // `DIV` is an operator here and nowhere else
        match parser.peek_token().token {
            Token::Word(w) if w.keyword == Keyword::Div => Some(Ok(precedence::MUL_DIV_MOD)),
            _ => None,
        }
    }

    fn parse_infix(
        &self,
        parser: &mut Parser,
        expr: &Expr,
        _precedence: u8,
    ) -> Option<Result<Expr, ParserError>> {
        if parser.parse_keyword(Keyword::Div) {
            Some(
                parser
                    .parse_sub_expression(precedence::MUL_DIV_MOD)
                    .map(|right| Expr::BinaryOp {
                        left: Box::new(expr.clone()),
                        op: BinaryOperator::MyIntegerDivide,
                        right: Box::new(right),
                    }),
            )
        } else {
            None
        }
    }

    fn parse_statement(&self, parser: &mut Parser) -> Option<Result<Statement, ParserError>> {
        if parser.parse_keywords(&[Keyword::Lock, Keyword::Tables]) {
            Some(parse_lock_tables(parser))
        } else if parser.parse_keywords(&[Keyword::Unlock, Keyword::Tables]) {
            Some(Ok(Statement::UnlockTables))
        } else {
            None
        }
    }
}

/// `LOCK TABLES`
/// <https://dev.mysql.com/doc/refman/8.0/en/lock-tables.html>
fn parse_lock_tables(parser: &mut Parser) -> Result<Statement, ParserError> {
    let tables = parser.parse_comma_separated(parse_lock_table)?;
    Ok(Statement::LockTables { tables })
}

// tbl_name [[AS] alias] lock_type
fn parse_lock_table(parser: &mut Parser) -> Result<LockTable, ParserError> {
    let table = parser.parse_identifier()?;
    let alias =
        parser.parse_optional_alias(&[Keyword::Read, Keyword::Write, Keyword::LowPriority])?;
    let lock_type = parse_lock_tables_type(parser)?;
    Ok(LockTable {
        table,
        alias,
        lock_type,
    })
}

// READ [LOCAL] | [LOW_PRIORITY] WRITE
fn parse_lock_tables_type(parser: &mut Parser) -> Result<LockTableType, ParserError> {
    if parser.parse_keyword(Keyword::Read) {
        Ok(LockTableType::Read {
            local: parser.parse_keyword(Keyword::Local),
        })
    } else if parser.parse_keyword(Keyword::Write) {
        Ok(LockTableType::Write {
            low_priority: false,
        })
    } else if parser.parse_keywords(&[Keyword::LowPriority, Keyword::Write]) {
        Ok(LockTableType::Write { low_priority: true })
    } else {
        parser.expected("a lock type in LOCK TABLES", parser.peek_token())
    }
}
