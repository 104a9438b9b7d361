//! The parser: a stateful cursor over one token stream, one routine per
//! grammar production.
//!
//! Submodules split the grammar by concern; they all extend the same
//! [`Parser`] type with further `impl` blocks.

mod ddl;
mod dml;
mod expressions;
mod query;
mod statements;
mod types;

use std::cell::Cell;
use std::rc::Rc;

use itertools::Itertools;

pub use expressions::precedence;

use crate::ast::*;
use crate::dialects::{Dialect, DialectCapabilities};
use crate::errors::ParserError;
use crate::keywords::{self, Keyword};
use crate::lexer::Lexer;
use crate::parser_err;
use crate::tokens::{Location, Token, TokenWithLocation, Word};

/// Caller-tunable knobs. Borrowed for the duration of one parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Allow trailing commas in comma-separated lists.
    pub trailing_commas: bool,
    /// Resolve quote escapes inside string literals while lexing.
    pub unescape: bool,
    /// Maximum nesting depth before the depth guard trips.
    pub recursion_limit: Option<usize>,
}

impl Default for ParserOptions {
    fn default() -> Self {
        ParserOptions {
            trailing_commas: false,
            unescape: true,
            recursion_limit: None,
        }
    }
}

impl ParserOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trailing_commas(mut self, trailing_commas: bool) -> Self {
        self.trailing_commas = trailing_commas;
        self
    }

    pub fn with_unescape(mut self, unescape: bool) -> Self {
        self.unescape = unescape;
        self
    }

    pub fn with_recursion_limit(mut self, recursion_limit: usize) -> Self {
        self.recursion_limit = Some(recursion_limit);
        self
    }
}

/// Default nesting budget shared by `parse_statement`, `parse_expr` and
/// `parse_query`.
pub const DEFAULT_RECURSION_LIMIT: usize = 50;

/// A counted budget of remaining recursion depth.
///
/// Acquiring a scope decrements the budget and hands back a guard whose
/// `Drop` restores it, so the count survives every exit path including `?`.
#[derive(Debug)]
struct RecursionCounter {
    remaining_depth: Rc<Cell<usize>>,
}

impl RecursionCounter {
    fn new(limit: usize) -> Self {
        RecursionCounter {
            remaining_depth: Rc::new(Cell::new(limit)),
        }
    }

    fn try_decrease(&self) -> Result<DepthGuard, ParserError> {
        let old = self.remaining_depth.get();
        if old == 0 {
            return Err(ParserError::RecursionLimit);
        }
        self.remaining_depth.set(old - 1);
        Ok(DepthGuard {
            remaining_depth: Rc::clone(&self.remaining_depth),
        })
    }
}

#[must_use]
struct DepthGuard {
    remaining_depth: Rc<Cell<usize>>,
}

impl Drop for DepthGuard {
    fn drop(&mut self) {
        let depth = self.remaining_depth.get();
        self.remaining_depth.set(depth + 1);
    }
}

/// Mode switches that change what an identifier means mid-grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParserState {
    #[default]
    Normal,
    /// Inside `CONNECT BY`: `PRIOR expr` becomes a unary prefix.
    ConnectBy,
}

/// Whether a parenthesised list may be omitted entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IsOptional {
    Optional,
    Mandatory,
}

pub struct Parser<'a> {
    tokens: Vec<TokenWithLocation>,
    /// Index of the first token yet to be consumed.
    index: usize,
    /// Where the EOF sentinel points when the input runs out.
    eof_location: Location,
    pub(crate) state: ParserState,
    dialect: &'a dyn Dialect,
    options: ParserOptions,
    recursion: RecursionCounter,
}

impl<'a> Parser<'a> {
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Parser {
            tokens: Vec::new(),
            index: 0,
            eof_location: Location::default(),
            state: ParserState::default(),
            dialect,
            options: ParserOptions::default(),
            recursion: RecursionCounter::new(DEFAULT_RECURSION_LIMIT),
        }
    }

    pub fn with_options(mut self, options: ParserOptions) -> Self {
        self.options = options;
        self.recursion = RecursionCounter::new(
            options.recursion_limit.unwrap_or(DEFAULT_RECURSION_LIMIT),
        );
        self
    }

    /// Installs an already-lexed token stream and rewinds to its start.
    pub fn with_tokens(mut self, tokens: Vec<TokenWithLocation>) -> Self {
        self.eof_location = tokens
            .last()
            .map(|t| t.location)
            .unwrap_or_default();
        self.tokens = tokens;
        self.index = 0;
        self
    }

    /// Lexes `sql` and positions the parser at the first token. Any of the
    /// public `parse_*` routines can then be used for fragment parsing.
    pub fn try_with_sql(self, sql: &str) -> Result<Self, ParserError> {
        log::debug!("parsing as '{:?}': {sql}", self.dialect);
        let tokens = Lexer::new(sql, self.dialect)
            .with_unescape(self.options.unescape)
            .tokenize()?;
        Ok(self.with_tokens(tokens))
    }

    /// Parses `sql` into its statement list under `dialect`.
    pub fn parse_sql(dialect: &dyn Dialect, sql: &str) -> Result<Vec<Statement>, ParserError> {
        Parser::new(dialect).try_with_sql(sql)?.parse_statements()
    }

    pub fn dialect(&self) -> &dyn Dialect {
        self.dialect
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    pub(crate) fn caps(&self) -> &'static DialectCapabilities {
        self.dialect.capabilities()
    }

    // ------------------------------------------------------------------
    // driver
    // ------------------------------------------------------------------

    /// Parses `;`-separated statements until EOF. Stops at the first error;
    /// no partial list is returned.
    pub fn parse_statements(&mut self) -> Result<Vec<Statement>, ParserError> {
        let mut statements = Vec::new();
        let mut expecting_delimiter = false;
        loop {
            while self.consume_token(&Token::SemiColon) {
                expecting_delimiter = false;
            }
            match self.peek_token().token {
                Token::EndOfFile => break,
                // The END of a procedure body terminates the inner list.
                Token::Word(ref w) if expecting_delimiter && w.keyword == Keyword::End => break,
                _ => {}
            }
            if expecting_delimiter {
                return self.expected("end of statement", self.peek_token());
            }
            statements.push(self.parse_statement()?);
            expecting_delimiter = true;
        }
        Ok(statements)
    }

    /// Dispatches on the leading keyword to the statement routine.
    pub fn parse_statement(&mut self) -> Result<Statement, ParserError> {
        let _guard = self.recursion.try_decrease()?;

        if let Some(statement) = self.dialect.parse_statement(self) {
            return statement;
        }

        let next_token = self.next_token();
        match &next_token.token {
            Token::Word(w) => match w.keyword {
                Keyword::Select | Keyword::With | Keyword::Values | Keyword::Table => {
                    self.prev_token();
                    self.parse_query().map(Statement::Query)
                }
                Keyword::Explain | Keyword::Describe | Keyword::Desc => {
                    let alias = match w.keyword {
                        Keyword::Describe => DescribeAlias::Describe,
                        Keyword::Desc => DescribeAlias::Desc,
                        _ => DescribeAlias::Explain,
                    };
                    self.parse_explain(alias)
                }
                Keyword::Analyze => self.parse_analyze(),
                Keyword::Insert => self.parse_insert(false),
                Keyword::Replace => self.parse_insert(true),
                Keyword::Update => self.parse_update(),
                Keyword::Delete => self.parse_delete(),
                Keyword::Merge => self.parse_merge(),
                Keyword::Create => self.parse_create(),
                Keyword::Drop => self.parse_drop(),
                Keyword::Alter => self.parse_alter(),
                Keyword::Truncate => self.parse_truncate(),
                Keyword::Msck => self.parse_msck(),
                Keyword::Cache => self.parse_cache_table(),
                Keyword::Uncache => self.parse_uncache_table(),
                Keyword::Copy => self.parse_copy(),
                Keyword::Declare => self.parse_declare(),
                Keyword::Fetch => self.parse_fetch_statement(),
                Keyword::Close => self.parse_close(),
                Keyword::Discard => self.parse_discard(),
                Keyword::Grant => self.parse_grant(),
                Keyword::Revoke => self.parse_revoke(),
                Keyword::Commit => self.parse_commit(),
                Keyword::Rollback => self.parse_rollback(),
                Keyword::Begin => self.parse_begin(),
                Keyword::Start => self.parse_start_transaction(),
                Keyword::Savepoint => self.parse_savepoint(),
                Keyword::Release => self.parse_release(),
                Keyword::Set => self.parse_set(),
                Keyword::Show => self.parse_show(),
                Keyword::Use => self.parse_use(),
                Keyword::Kill => self.parse_kill(),
                Keyword::Flush => self.parse_flush(),
                Keyword::Pragma => self.parse_pragma(),
                Keyword::Prepare => self.parse_prepare(),
                Keyword::Execute => self.parse_execute(),
                Keyword::Deallocate => self.parse_deallocate(),
                Keyword::Install => self.parse_install(),
                Keyword::Load => self.parse_load(),
                Keyword::Optimize => self.parse_optimize_table(),
                Keyword::Attach => self.parse_attach(),
                Keyword::Detach => self.parse_detach(),
                Keyword::Call => self.parse_call(),
                Keyword::Assert => self.parse_assert(),
                Keyword::Unload => self.parse_unload(),
                _ => self.expected("an SQL statement", next_token),
            },
            Token::LeftParen => {
                self.prev_token();
                self.parse_query().map(Statement::Query)
            }
            _ => self.expected("an SQL statement", next_token),
        }
    }

    // ------------------------------------------------------------------
    // token cursor
    // ------------------------------------------------------------------

    fn eof_token(&self) -> TokenWithLocation {
        TokenWithLocation::new(Token::EndOfFile, self.eof_location)
    }

    /// The next non-whitespace token, without consuming it.
    pub fn peek_token(&self) -> TokenWithLocation {
        self.peek_nth_token(0)
    }

    /// The `n`th upcoming non-whitespace token.
    pub fn peek_nth_token(&self, mut n: usize) -> TokenWithLocation {
        let mut index = self.index;
        loop {
            let token = self.tokens.get(index);
            index += 1;
            match token {
                Some(t) if t.token.is_whitespace() => continue,
                Some(t) => {
                    if n == 0 {
                        return t.clone();
                    }
                    n -= 1;
                }
                None => return self.eof_token(),
            }
        }
    }

    /// The immediately next token, whitespace included.
    pub fn peek_token_no_skip(&self) -> TokenWithLocation {
        self.tokens
            .get(self.index)
            .cloned()
            .unwrap_or_else(|| self.eof_token())
    }

    /// Consumes and returns the next non-whitespace token.
    pub fn next_token(&mut self) -> TokenWithLocation {
        loop {
            self.index += 1;
            match self.tokens.get(self.index - 1) {
                Some(t) if t.token.is_whitespace() => continue,
                Some(t) => return t.clone(),
                None => return self.eof_token(),
            }
        }
    }

    /// Consumes and returns the next token, whitespace included.
    pub fn next_token_no_skip(&mut self) -> Option<&TokenWithLocation> {
        self.index += 1;
        self.tokens.get(self.index - 1)
    }

    /// Rewinds to the previous non-whitespace token. A no-op at the origin.
    pub fn prev_token(&mut self) {
        loop {
            if self.index == 0 {
                return;
            }
            self.index -= 1;
            if let Some(t) = self.tokens.get(self.index) {
                if t.token.is_whitespace() {
                    continue;
                }
            }
            return;
        }
    }

    /// Consumes the next token iff it equals `expected`.
    #[must_use]
    pub fn consume_token(&mut self, expected: &Token) -> bool {
        if self.peek_token() == *expected {
            self.next_token();
            true
        } else {
            false
        }
    }

    pub fn expect_token(&mut self, expected: &Token) -> Result<TokenWithLocation, ParserError> {
        if self.peek_token() == *expected {
            Ok(self.next_token())
        } else {
            self.expected(&expected.to_string(), self.peek_token())
        }
    }

    /// The standard parse failure: names what was wanted and what was found.
    pub fn expected<T>(
        &self,
        expected: &str,
        found: TokenWithLocation,
    ) -> Result<T, ParserError> {
        parser_err!("Expected {expected}, found {found} at {}", found.location)
    }

    // ------------------------------------------------------------------
    // keyword helpers
    // ------------------------------------------------------------------

    /// Consumes the next token iff it is the keyword `expected`.
    #[must_use]
    pub fn parse_keyword(&mut self, expected: Keyword) -> bool {
        match self.peek_token().token {
            Token::Word(w) if w.keyword == expected => {
                self.next_token();
                true
            }
            _ => false,
        }
    }

    /// Atomically consumes the whole keyword sequence or nothing.
    #[must_use]
    pub fn parse_keywords(&mut self, keywords: &[Keyword]) -> bool {
        let start = self.index;
        for &keyword in keywords {
            if !self.parse_keyword(keyword) {
                self.index = start;
                return false;
            }
        }
        true
    }

    /// Consumes and returns whichever of `keywords` comes next, if any.
    #[must_use]
    pub fn parse_one_of_keywords(&mut self, keywords: &[Keyword]) -> Option<Keyword> {
        match self.peek_token().token {
            Token::Word(w) => keywords.iter().find(|&&k| k == w.keyword).map(|&k| {
                self.next_token();
                k
            }),
            _ => None,
        }
    }

    pub fn expect_keyword(&mut self, expected: Keyword) -> Result<(), ParserError> {
        if self.parse_keyword(expected) {
            Ok(())
        } else {
            self.expected(expected.as_ref(), self.peek_token())
        }
    }

    pub fn expect_keywords(&mut self, expected: &[Keyword]) -> Result<(), ParserError> {
        for &keyword in expected {
            self.expect_keyword(keyword)?;
        }
        Ok(())
    }

    pub fn expect_one_of_keywords(&mut self, keywords: &[Keyword]) -> Result<Keyword, ParserError> {
        if let Some(keyword) = self.parse_one_of_keywords(keywords) {
            Ok(keyword)
        } else {
            let names = keywords.iter().map(AsRef::as_ref).join(" or ");
            self.expected(&format!("one of {names}"), self.peek_token())
        }
    }

    // ------------------------------------------------------------------
    // backtracking
    // ------------------------------------------------------------------

    /// Runs `f` speculatively: on failure the cursor is restored and `None`
    /// is returned. A tripped depth guard is never swallowed.
    pub fn maybe_parse<T, F>(&mut self, f: F) -> Result<Option<T>, ParserError>
    where
        F: FnOnce(&mut Parser<'a>) -> Result<T, ParserError>,
    {
        let start = self.index;
        match f(self) {
            Ok(value) => Ok(Some(value)),
            Err(ParserError::RecursionLimit) => Err(ParserError::RecursionLimit),
            Err(_) => {
                log::trace!("backtracking to token {start}");
                self.index = start;
                Ok(None)
            }
        }
    }

    // ------------------------------------------------------------------
    // list plumbing
    // ------------------------------------------------------------------

    pub fn parse_comma_separated<T, F>(&mut self, mut f: F) -> Result<Vec<T>, ParserError>
    where
        F: FnMut(&mut Parser<'a>) -> Result<T, ParserError>,
    {
        let mut values = Vec::new();
        loop {
            values.push(f(self)?);
            if !self.consume_token(&Token::Comma) {
                break;
            }
            if self.options.trailing_commas || self.caps().supports_trailing_commas {
                match self.peek_token().token {
                    Token::Word(w) if keywords::RESERVED_FOR_COLUMN_ALIAS.contains(&w.keyword) => {
                        break;
                    }
                    Token::RightParen
                    | Token::RightBracket
                    | Token::RightBrace
                    | Token::SemiColon
                    | Token::EndOfFile => break,
                    _ => continue,
                }
            }
        }
        Ok(values)
    }

    /// `( f )`
    pub fn parse_parenthesized<T, F>(&mut self, f: F) -> Result<T, ParserError>
    where
        F: FnOnce(&mut Parser<'a>) -> Result<T, ParserError>,
    {
        self.expect_token(&Token::LeftParen)?;
        let value = f(self)?;
        self.expect_token(&Token::RightParen)?;
        Ok(value)
    }

    /// `(col, ..)`, possibly absent or empty depending on the flags.
    pub fn parse_parenthesized_column_list(
        &mut self,
        optional: IsOptional,
        allow_empty: bool,
    ) -> Result<Vec<Ident>, ParserError> {
        if self.consume_token(&Token::LeftParen) {
            if allow_empty && self.peek_token() == Token::RightParen {
                self.next_token();
                return Ok(Vec::new());
            }
            let cols = self.parse_comma_separated(Parser::parse_identifier)?;
            self.expect_token(&Token::RightParen)?;
            Ok(cols)
        } else if optional == IsOptional::Optional {
            Ok(Vec::new())
        } else {
            self.expected("a list of columns in parentheses", self.peek_token())
        }
    }

    // ------------------------------------------------------------------
    // identifiers & names
    // ------------------------------------------------------------------

    /// A single identifier. Quoted strings are accepted and keep their
    /// quote style; keywords are accepted verbatim (the caller restricts
    /// them where the grammar requires it).
    pub fn parse_identifier(&mut self) -> Result<Ident, ParserError> {
        let next_token = self.next_token();
        match next_token.token {
            Token::Word(w) => Ok(ident_of(w)),
            Token::SingleQuotedString(s) => Ok(Ident::with_quote('\'', s)),
            Token::DoubleQuotedString(s) => Ok(Ident::with_quote('"', s)),
            _ => self.expected("identifier", next_token),
        }
    }

    /// A `.`-separated object name.
    pub fn parse_object_name(&mut self) -> Result<ObjectName, ParserError> {
        let mut idents = vec![self.parse_identifier()?];
        while self.consume_token(&Token::Period) {
            idents.push(self.parse_identifier()?);
        }
        Ok(ObjectName(idents))
    }

    pub fn parse_identifiers(&mut self) -> Result<Vec<Ident>, ParserError> {
        self.parse_comma_separated(Parser::parse_identifier)
    }

    /// An alias position: `AS name`, a bare non-reserved word, or nothing.
    pub fn parse_optional_alias(
        &mut self,
        reserved: &[Keyword],
    ) -> Result<Option<Ident>, ParserError> {
        let after_as = self.parse_keyword(Keyword::As);
        let next_token = self.next_token();
        match next_token.token {
            Token::Word(w) if after_as || !reserved.contains(&w.keyword) => Ok(Some(ident_of(w))),
            Token::SingleQuotedString(s) => Ok(Some(Ident::with_quote('\'', s))),
            Token::DoubleQuotedString(s) => Ok(Some(Ident::with_quote('"', s))),
            _ => {
                if after_as {
                    return self.expected("an identifier after AS", next_token);
                }
                self.prev_token();
                Ok(None)
            }
        }
    }

    /// A table alias with its optional column rename list.
    pub fn parse_optional_table_alias(
        &mut self,
        reserved: &[Keyword],
    ) -> Result<Option<TableAlias>, ParserError> {
        match self.parse_optional_alias(reserved)? {
            Some(name) => {
                let columns = self.parse_parenthesized_column_list(IsOptional::Optional, false)?;
                Ok(Some(TableAlias { name, columns }))
            }
            None => Ok(None),
        }
    }

    // ------------------------------------------------------------------
    // literals
    // ------------------------------------------------------------------

    pub fn parse_value(&mut self) -> Result<Value, ParserError> {
        let next_token = self.next_token();
        match next_token.token {
            Token::Word(w) => match w.keyword {
                Keyword::True => Ok(Value::Boolean(true)),
                Keyword::False => Ok(Value::Boolean(false)),
                Keyword::Null => Ok(Value::Null),
                _ => self.expected("a value", TokenWithLocation::new(Token::Word(w), next_token.location)),
            },
            Token::Number(n, l) => Ok(Value::Number(n, l)),
            Token::SingleQuotedString(s) => Ok(Value::SingleQuotedString(s)),
            Token::DoubleQuotedString(s) => Ok(Value::DoubleQuotedString(s)),
            Token::TripleSingleQuotedString(s) => Ok(Value::TripleSingleQuotedString(s)),
            Token::TripleDoubleQuotedString(s) => Ok(Value::TripleDoubleQuotedString(s)),
            Token::DollarQuotedString(s) => Ok(Value::DollarQuotedString(s)),
            Token::SingleQuotedByteStringLiteral(s) => Ok(Value::SingleQuotedByteStringLiteral(s)),
            Token::DoubleQuotedByteStringLiteral(s) => Ok(Value::DoubleQuotedByteStringLiteral(s)),
            Token::TripleSingleQuotedByteStringLiteral(s) => {
                Ok(Value::TripleSingleQuotedByteStringLiteral(s))
            }
            Token::TripleDoubleQuotedByteStringLiteral(s) => {
                Ok(Value::TripleDoubleQuotedByteStringLiteral(s))
            }
            Token::SingleQuotedRawStringLiteral(s) => Ok(Value::SingleQuotedRawStringLiteral(s)),
            Token::DoubleQuotedRawStringLiteral(s) => Ok(Value::DoubleQuotedRawStringLiteral(s)),
            Token::TripleSingleQuotedRawStringLiteral(s) => {
                Ok(Value::TripleSingleQuotedRawStringLiteral(s))
            }
            Token::TripleDoubleQuotedRawStringLiteral(s) => {
                Ok(Value::TripleDoubleQuotedRawStringLiteral(s))
            }
            Token::NationalStringLiteral(s) => Ok(Value::NationalStringLiteral(s)),
            Token::EscapedStringLiteral(s) => Ok(Value::EscapedStringLiteral(s)),
            Token::UnicodeStringLiteral(s) => Ok(Value::UnicodeStringLiteral(s)),
            Token::HexStringLiteral(s) => Ok(Value::HexStringLiteral(s)),
            Token::Placeholder(p) => Ok(Value::Placeholder(p)),
            _ => self.expected("a value", next_token),
        }
    }

    pub fn parse_number_value(&mut self) -> Result<Value, ParserError> {
        match self.parse_value()? {
            v @ Value::Number(..) | v @ Value::Placeholder(_) => Ok(v),
            _ => {
                self.prev_token();
                self.expected("literal number", self.peek_token())
            }
        }
    }

    pub fn parse_literal_uint(&mut self) -> Result<u64, ParserError> {
        let next_token = self.next_token();
        match next_token.token {
            Token::Number(s, _) => s
                .parse()
                .map_err(|e| ParserError::Syntax(format!("Could not parse '{s}' as u64: {e}"))),
            _ => self.expected("literal int", next_token),
        }
    }

    /// A quoted string, or an unquoted word where a dialect is lax.
    pub fn parse_literal_string(&mut self) -> Result<String, ParserError> {
        let next_token = self.next_token();
        match next_token.token {
            Token::Word(Word {
                value,
                keyword: Keyword::Undefined,
                ..
            }) => Ok(value),
            Token::SingleQuotedString(s)
            | Token::DoubleQuotedString(s)
            | Token::EscapedStringLiteral(s)
            | Token::UnicodeStringLiteral(s) => Ok(s),
            _ => self.expected("literal string", next_token),
        }
    }

    // ------------------------------------------------------------------
    // shared option plumbing
    // ------------------------------------------------------------------

    /// `keyword (name = value, ..)`, or nothing.
    pub fn parse_options(&mut self, keyword: Keyword) -> Result<Vec<SqlOption>, ParserError> {
        if self.parse_keyword(keyword) {
            self.expect_token(&Token::LeftParen)?;
            let options = self.parse_comma_separated(Parser::parse_sql_option)?;
            self.expect_token(&Token::RightParen)?;
            Ok(options)
        } else {
            Ok(Vec::new())
        }
    }

    pub fn parse_sql_option(&mut self) -> Result<SqlOption, ParserError> {
        let name = self.parse_identifier()?;
        self.expect_token(&Token::Eq)?;
        let value = self.parse_expr()?;
        Ok(SqlOption { name, value })
    }
}

pub(crate) fn ident_of(w: Word) -> Ident {
    Ident {
        value: w.value,
        quote_style: w.quote_style,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Debug)]
    struct Bare;

    impl Dialect for Bare {
        fn capabilities(&self) -> &'static DialectCapabilities {
            const CAPS: DialectCapabilities = DialectCapabilities::ansi();
            &CAPS
        }
    }

    fn parser(sql: &str) -> Parser<'_> {
        Parser::new(&Bare).try_with_sql(sql).unwrap()
    }

    #[test]
    fn cursor_skips_whitespace_and_rewinds() {
        let mut p = parser("a  /* c */ b");
        assert_eq!(p.next_token(), Token::make_word("a", None));
        assert_eq!(p.peek_token(), Token::make_word("b", None));
        assert_eq!(p.next_token(), Token::make_word("b", None));
        assert_eq!(p.next_token(), Token::EndOfFile);
        p.prev_token();
        assert_eq!(p.next_token(), Token::make_word("b", None));
    }

    #[test]
    fn prev_token_at_origin_is_a_noop() {
        let mut p = parser("x");
        p.prev_token();
        p.prev_token();
        assert_eq!(p.next_token(), Token::make_word("x", None));
    }

    #[test]
    fn keyword_sequences_are_atomic() {
        let mut p = parser("GROUP BY x");
        assert!(!p.parse_keywords(&[Keyword::Group, Keyword::Having]));
        // the failed match must not have moved the cursor
        assert!(p.parse_keywords(&[Keyword::Group, Keyword::By]));
    }

    #[test]
    fn maybe_parse_restores_cursor() {
        let mut p = parser("1 + 2");
        let missed: Option<Ident> = p.maybe_parse(|p| p.parse_identifier()).unwrap();
        assert_eq!(missed, None);
        assert_eq!(p.next_token(), Token::Number("1".into(), false));
    }

    #[test]
    fn depth_guard_restores_budget_on_error() {
        let counter = RecursionCounter::new(1);
        {
            let _scope = counter.try_decrease().unwrap();
            assert!(matches!(
                counter.try_decrease().map(|_| ()),
                Err(ParserError::RecursionLimit)
            ));
        }
        // the failed acquisition must not have leaked budget
        assert!(counter.try_decrease().is_ok());
    }
}
