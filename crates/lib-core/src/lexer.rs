//! The lexer: SQL text plus a dialect in, classified tokens with source
//! locations out.
//!
//! The parser only ever sees the token stream this module produces. All
//! dialect variation at this level goes through the dialect's character
//! class hooks and the lexing capability flags.

use crate::dialects::Dialect;
use crate::errors::ParserError;
use crate::tokens::{
    DollarQuotedString, Location, Token, TokenWithLocation, Whitespace, Word,
};

/// A character cursor over the source text that tracks line and column.
struct Cursor<'a> {
    chars: std::str::Chars<'a>,
    line: u64,
    column: u64,
}

const EOF_CHAR: char = '\0';

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Cursor {
            chars: text.chars(),
            line: 1,
            column: 1,
        }
    }

    fn peek(&self) -> char {
        self.chars.clone().next().unwrap_or(EOF_CHAR)
    }

    fn peek_nth(&self, n: usize) -> char {
        self.chars.clone().nth(n).unwrap_or(EOF_CHAR)
    }

    fn is_eof(&self) -> bool {
        self.chars.as_str().is_empty()
    }

    /// True if the remaining input starts with `prefix`.
    fn matches(&self, prefix: &str) -> bool {
        self.chars.as_str().starts_with(prefix)
    }

    fn shift(&mut self) -> char {
        let ch = self.chars.next().unwrap_or(EOF_CHAR);
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else if ch != EOF_CHAR {
            self.column += 1;
        }
        ch
    }

    fn shift_n(&mut self, n: usize) {
        for _ in 0..n {
            self.shift();
        }
    }

    fn shift_while(&mut self, f: impl Fn(char) -> bool + Copy) -> String {
        let mut out = String::new();
        while !self.is_eof() && f(self.peek()) {
            out.push(self.shift());
        }
        out
    }

    fn location(&self) -> Location {
        Location::new(self.line, self.column)
    }
}

/// Lexes one SQL string for one dialect.
pub struct Lexer<'a> {
    dialect: &'a dyn Dialect,
    cursor: Cursor<'a>,
    /// Resolve quote escapes inside string literals. When off, literal
    /// bodies are preserved exactly as written.
    unescape: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(sql: &'a str, dialect: &'a dyn Dialect) -> Self {
        Lexer {
            dialect,
            cursor: Cursor::new(sql),
            unescape: true,
        }
    }

    pub fn with_unescape(mut self, unescape: bool) -> Self {
        self.unescape = unescape;
        self
    }

    /// Lexes the whole input. Fails on the first malformed token.
    pub fn tokenize(mut self) -> Result<Vec<TokenWithLocation>, ParserError> {
        let mut tokens = Vec::new();
        loop {
            let location = self.cursor.location();
            match self.next_token()? {
                Some(token) => tokens.push(TokenWithLocation::new(token, location)),
                None => break,
            }
        }
        Ok(tokens)
    }

    fn error<T>(&self, message: impl Into<String>) -> Result<T, ParserError> {
        Err(ParserError::Lexer {
            message: message.into(),
            location: self.cursor.location(),
        })
    }

    fn next_token(&mut self) -> Result<Option<Token>, ParserError> {
        if self.cursor.is_eof() {
            return Ok(None);
        }
        let caps = self.dialect.capabilities();
        let ch = self.cursor.peek();
        let token = match ch {
            ' ' => self.consume(Token::Whitespace(Whitespace::Space)),
            '\t' => self.consume(Token::Whitespace(Whitespace::Tab)),
            '\n' => self.consume(Token::Whitespace(Whitespace::Newline)),
            '\r' => {
                self.cursor.shift();
                if self.cursor.peek() == '\n' {
                    self.cursor.shift();
                }
                Token::Whitespace(Whitespace::Newline)
            }
            'N' | 'n' if self.quote_follows(1) => {
                self.cursor.shift();
                let quote = self.cursor.shift();
                Token::NationalStringLiteral(self.tokenize_quoted_string(quote, false)?)
            }
            'E' | 'e' if self.quote_follows(1) => {
                self.cursor.shift();
                let quote = self.cursor.shift();
                Token::EscapedStringLiteral(self.tokenize_quoted_string(quote, true)?)
            }
            'X' | 'x' if self.quote_follows(1) => {
                self.cursor.shift();
                let quote = self.cursor.shift();
                Token::HexStringLiteral(self.tokenize_quoted_string(quote, false)?)
            }
            'U' | 'u' if self.cursor.peek_nth(1) == '&' && self.quote_follows(2) => {
                self.cursor.shift();
                self.cursor.shift();
                let quote = self.cursor.shift();
                Token::UnicodeStringLiteral(self.tokenize_quoted_string(quote, false)?)
            }
            'B' | 'b' if self.quote_follows(1) => return self.tokenize_prefixed_string(true).map(Some),
            'R' | 'r' if self.quote_follows(1) => return self.tokenize_prefixed_string(false).map(Some),
            '\'' if caps.supports_triple_quoted_string && self.cursor.matches("'''") => {
                Token::TripleSingleQuotedString(self.tokenize_triple_quoted_string('\'')?)
            }
            '\'' => {
                self.cursor.shift();
                let backslash = caps.supports_string_literal_backslash_escape;
                Token::SingleQuotedString(self.tokenize_quoted_string('\'', backslash)?)
            }
            '"' if caps.supports_triple_quoted_string
                && !self.dialect.is_delimited_identifier_start('"')
                && self.cursor.matches("\"\"\"") =>
            {
                Token::TripleDoubleQuotedString(self.tokenize_triple_quoted_string('"')?)
            }
            quote if self.dialect.is_delimited_identifier_start(quote) => {
                self.cursor.shift();
                let end = self.dialect.delimited_identifier_end(quote);
                let value = self.tokenize_delimited_identifier(end)?;
                Token::Word(Word {
                    value,
                    quote_style: Some(quote),
                    keyword: crate::keywords::Keyword::Undefined,
                })
            }
            '"' => {
                self.cursor.shift();
                let backslash = caps.supports_string_literal_backslash_escape;
                Token::DoubleQuotedString(self.tokenize_quoted_string('"', backslash)?)
            }
            '$' => return self.tokenize_dollar_token().map(Some),
            '0'..='9' | '.' => return self.tokenize_number().map(Some),
            '-' if self.cursor.peek_nth(1) == '-' => {
                self.cursor.shift_n(2);
                self.tokenize_single_line_comment("--")
            }
            '-' if self.cursor.matches("->>") => self.consume_n(3, Token::LongArrow),
            '-' if self.cursor.matches("->") => self.consume_n(2, Token::Arrow),
            '-' => self.consume(Token::Minus),
            '/' if self.cursor.matches("/*") => return self.tokenize_multiline_comment().map(Some),
            '/' if self.cursor.matches("//") => self.consume_n(2, Token::DuckIntDiv),
            '/' => self.consume(Token::Div),
            '+' => self.consume(Token::Plus),
            '*' => self.consume(Token::Mul),
            '%' => self.consume(Token::Mod),
            '(' => self.consume(Token::LeftParen),
            ')' => self.consume(Token::RightParen),
            '[' => self.consume(Token::LeftBracket),
            ']' => self.consume(Token::RightBracket),
            '{' => self.consume(Token::LeftBrace),
            '}' => self.consume(Token::RightBrace),
            ',' => self.consume(Token::Comma),
            ';' => self.consume(Token::SemiColon),
            '\\' => self.consume(Token::Backslash),
            '=' if self.cursor.matches("=>") => self.consume_n(2, Token::RightArrow),
            '=' if self.cursor.matches("==") => self.consume_n(2, Token::DoubleEq),
            '=' => self.consume(Token::Eq),
            '!' if self.cursor.matches("!=") => self.consume_n(2, Token::Neq),
            '!' if self.cursor.matches("!~*") => self.consume_n(3, Token::ExclamationMarkTildeAsterisk),
            '!' if self.cursor.matches("!~") => self.consume_n(2, Token::ExclamationMarkTilde),
            '!' if self.cursor.matches("!!") => self.consume_n(2, Token::DoubleExclamationMark),
            '!' => self.consume(Token::ExclamationMark),
            '<' if self.cursor.matches("<=>") => self.consume_n(3, Token::Spaceship),
            '<' if self.cursor.matches("<=") => self.consume_n(2, Token::LtEq),
            '<' if self.cursor.matches("<>") => self.consume_n(2, Token::Neq),
            '<' if self.cursor.matches("<<") => self.consume_n(2, Token::ShiftLeft),
            '<' if self.cursor.matches("<@") => self.consume_n(2, Token::ArrowAt),
            '<' => self.consume(Token::Lt),
            '>' if self.cursor.matches(">=") => self.consume_n(2, Token::GtEq),
            '>' if self.cursor.matches(">>") => self.consume_n(2, Token::ShiftRight),
            '>' => self.consume(Token::Gt),
            ':' if self.cursor.matches("::") => self.consume_n(2, Token::DoubleColon),
            ':' if self.cursor.matches(":=") => self.consume_n(2, Token::Assignment),
            // a bare colon: `:name` placeholders are assembled by the
            // parser, since `a:b` is also the semi-structured path operator
            ':' => self.consume(Token::Colon),
            '&' if self.cursor.matches("&&") => self.consume_n(2, Token::Overlap),
            '&' => self.consume(Token::Ampersand),
            '|' if self.cursor.matches("||/") => self.consume_n(3, Token::PGCubeRoot),
            '|' if self.cursor.matches("||") => self.consume_n(2, Token::StringConcat),
            '|' if self.cursor.matches("|/") => self.consume_n(2, Token::PGSquareRoot),
            '|' => self.consume(Token::Pipe),
            '^' => self.consume(Token::Caret),
            '~' if self.cursor.matches("~*") => self.consume_n(2, Token::TildeAsterisk),
            '~' => self.consume(Token::Tilde),
            // a leading `#` can open a temp-table name on some engines
            '#' if self.dialect.is_identifier_start('#') => {
                let value = self.tokenize_word_value();
                Token::make_word(&value, None)
            }
            '#' if self.cursor.matches("#>>") => self.consume_n(3, Token::HashLongArrow),
            '#' if self.cursor.matches("#>") => self.consume_n(2, Token::HashArrow),
            '#' if self.cursor.matches("#-") => self.consume_n(2, Token::HashMinus),
            '#' => self.consume(Token::Sharp),
            '@' if self.cursor.matches("@>") => self.consume_n(2, Token::AtArrow),
            '@' if self.cursor.matches("@?") => self.consume_n(2, Token::AtQuestion),
            '@' if self.cursor.matches("@@") => self.consume_n(2, Token::AtAt),
            '@' if self.dialect.is_identifier_start(self.cursor.peek_nth(1)) => {
                self.cursor.shift();
                let name = self.tokenize_word_value();
                Token::Placeholder(format!("@{name}"))
            }
            '@' => self.consume(Token::AtSign),
            '?' => {
                self.cursor.shift();
                let suffix = self.cursor.shift_while(|c| c.is_ascii_digit());
                Token::Placeholder(format!("?{suffix}"))
            }
            ch if self.dialect.is_identifier_start(ch) => {
                let value = self.tokenize_word_value();
                Token::make_word(&value, None)
            }
            other => return self.error(format!("unexpected character '{other}'")),
        };
        Ok(Some(token))
    }

    fn consume(&mut self, token: Token) -> Token {
        self.cursor.shift();
        token
    }

    fn consume_n(&mut self, n: usize, token: Token) -> Token {
        self.cursor.shift_n(n);
        token
    }

    /// Whether a string quote sits `n` chars ahead, i.e. the current word
    /// prefix introduces a string literal rather than an identifier.
    fn quote_follows(&self, n: usize) -> bool {
        matches!(self.cursor.peek_nth(n), '\'' | '"')
    }

    fn tokenize_word_value(&mut self) -> String {
        let mut value = String::new();
        value.push(self.cursor.shift());
        value.push_str(&self.cursor.shift_while(|c| self.dialect.is_identifier_part(c)));
        value
    }

    /// Byte (`B`) and raw (`R`) string families, including the triple-quoted
    /// forms where the dialect has them.
    fn tokenize_prefixed_string(&mut self, byte: bool) -> Result<Token, ParserError> {
        let triple = self.dialect.capabilities().supports_triple_quoted_string;
        self.cursor.shift();
        if triple && self.cursor.matches("'''") {
            let value = self.tokenize_triple_quoted_string('\'')?;
            return Ok(if byte {
                Token::TripleSingleQuotedByteStringLiteral(value)
            } else {
                Token::TripleSingleQuotedRawStringLiteral(value)
            });
        }
        if triple && self.cursor.matches("\"\"\"") {
            let value = self.tokenize_triple_quoted_string('"')?;
            return Ok(if byte {
                Token::TripleDoubleQuotedByteStringLiteral(value)
            } else {
                Token::TripleDoubleQuotedRawStringLiteral(value)
            });
        }
        let quote = self.cursor.shift();
        let value = self.tokenize_quoted_string(quote, false)?;
        Ok(match (byte, quote) {
            (true, '\'') => Token::SingleQuotedByteStringLiteral(value),
            (true, _) => Token::DoubleQuotedByteStringLiteral(value),
            (false, '\'') => Token::SingleQuotedRawStringLiteral(value),
            (false, _) => Token::DoubleQuotedRawStringLiteral(value),
        })
    }

    /// Body of a quoted string; the opening quote is already consumed.
    /// Doubling the quote escapes it; backslash escapes are resolved only
    /// when the dialect supports them and `unescape` is on.
    fn tokenize_quoted_string(
        &mut self,
        quote: char,
        backslash_escapes: bool,
    ) -> Result<String, ParserError> {
        let mut value = String::new();
        loop {
            if self.cursor.is_eof() {
                return self.error(format!("unterminated string literal (expected {quote})"));
            }
            let ch = self.cursor.shift();
            if ch == quote {
                if self.cursor.peek() == quote {
                    self.cursor.shift();
                    value.push(quote);
                    if !self.unescape {
                        value.push(quote);
                    }
                    continue;
                }
                return Ok(value);
            }
            if ch == '\\' && backslash_escapes {
                let escaped = self.cursor.shift();
                if escaped == EOF_CHAR {
                    return self.error("unterminated string literal after backslash");
                }
                if self.unescape {
                    value.push(match escaped {
                        'n' => '\n',
                        't' => '\t',
                        'r' => '\r',
                        '0' => '\0',
                        other => other,
                    });
                } else {
                    value.push('\\');
                    value.push(escaped);
                }
                continue;
            }
            value.push(ch);
        }
    }

    fn tokenize_triple_quoted_string(&mut self, quote: char) -> Result<String, ParserError> {
        self.cursor.shift_n(3);
        let closing: String = std::iter::repeat_n(quote, 3).collect();
        let mut value = String::new();
        loop {
            if self.cursor.is_eof() {
                return self.error(format!("unterminated string literal (expected {closing})"));
            }
            if self.cursor.matches(&closing) {
                self.cursor.shift_n(3);
                return Ok(value);
            }
            value.push(self.cursor.shift());
        }
    }

    fn tokenize_delimited_identifier(&mut self, end: char) -> Result<String, ParserError> {
        let mut value = String::new();
        loop {
            if self.cursor.is_eof() {
                return self.error(format!(
                    "expected close delimiter '{end}' before end of input"
                ));
            }
            let ch = self.cursor.shift();
            if ch == end {
                // A doubled closing quote stays part of the name.
                if self.cursor.peek() == end {
                    self.cursor.shift();
                    value.push(end);
                    continue;
                }
                return Ok(value);
            }
            value.push(ch);
        }
    }

    /// `$n` / `$name` placeholders and `$tag$..$tag$` strings.
    fn tokenize_dollar_token(&mut self) -> Result<Token, ParserError> {
        self.cursor.shift();
        if self.dialect.capabilities().supports_dollar_quoted_string {
            if self.cursor.peek() == '$' {
                self.cursor.shift();
                let value = self.tokenize_dollar_body("$$")?;
                return Ok(Token::DollarQuotedString(DollarQuotedString {
                    value,
                    tag: None,
                }));
            }
            if self.dialect.is_identifier_start(self.cursor.peek()) {
                // Could still be a `$name` placeholder: only a `$` right
                // after the tag makes it a dollar-quoted string.
                let tag = self.cursor.shift_while(|c| c.is_alphanumeric() || c == '_');
                if self.cursor.peek() == '$' {
                    self.cursor.shift();
                    let closing = format!("${tag}$");
                    let value = self.tokenize_dollar_body(&closing)?;
                    return Ok(Token::DollarQuotedString(DollarQuotedString {
                        value,
                        tag: Some(tag),
                    }));
                }
                return Ok(Token::Placeholder(format!("${tag}")));
            }
        }
        let suffix = self.cursor.shift_while(|c| c.is_alphanumeric() || c == '_');
        Ok(Token::Placeholder(format!("${suffix}")))
    }

    fn tokenize_dollar_body(&mut self, closing: &str) -> Result<String, ParserError> {
        let mut value = String::new();
        loop {
            if self.cursor.is_eof() {
                return self.error(format!("unterminated dollar-quoted string (expected {closing})"));
            }
            if self.cursor.matches(closing) {
                self.cursor.shift_n(closing.len());
                return Ok(value);
            }
            value.push(self.cursor.shift());
        }
    }

    /// Numbers: integer, fraction, exponent, and the `L` big-number suffix.
    /// A lone `.` falls back to the period token.
    fn tokenize_number(&mut self) -> Result<Token, ParserError> {
        let mut value = self.cursor.shift_while(|c| c.is_ascii_digit());
        if self.cursor.peek() == '.' && self.cursor.peek_nth(1) != '.' {
            // Not part of a compound identifier: a digit before or after the
            // dot makes this a numeric literal.
            if !value.is_empty() || self.cursor.peek_nth(1).is_ascii_digit() {
                value.push(self.cursor.shift());
                value.push_str(&self.cursor.shift_while(|c| c.is_ascii_digit()));
            }
        }
        if value.is_empty() {
            self.cursor.shift();
            return Ok(Token::Period);
        }
        if value == "." {
            return Ok(Token::Period);
        }
        if matches!(self.cursor.peek(), 'e' | 'E') {
            let mut lookahead = 1;
            if matches!(self.cursor.peek_nth(1), '+' | '-') {
                lookahead = 2;
            }
            if self.cursor.peek_nth(lookahead).is_ascii_digit() {
                value.push(self.cursor.shift().to_ascii_lowercase());
                if lookahead == 2 {
                    value.push(self.cursor.shift());
                }
                value.push_str(&self.cursor.shift_while(|c| c.is_ascii_digit()));
            }
        }
        let long = matches!(self.cursor.peek(), 'L' | 'l');
        if long {
            self.cursor.shift();
        }
        Ok(Token::Number(value, long))
    }

    fn tokenize_single_line_comment(&mut self, prefix: &str) -> Token {
        let mut comment = self.cursor.shift_while(|c| c != '\n');
        if self.cursor.peek() == '\n' {
            comment.push(self.cursor.shift());
        }
        Token::Whitespace(Whitespace::SingleLineComment {
            comment,
            prefix: prefix.to_string(),
        })
    }

    /// `/* .. */` comments nest.
    fn tokenize_multiline_comment(&mut self) -> Result<Token, ParserError> {
        self.cursor.shift_n(2);
        let mut body = String::new();
        let mut depth = 1usize;
        loop {
            if self.cursor.is_eof() {
                return self.error("unterminated multi-line comment");
            }
            if self.cursor.matches("*/") {
                self.cursor.shift_n(2);
                depth -= 1;
                if depth == 0 {
                    return Ok(Token::Whitespace(Whitespace::MultiLineComment(body)));
                }
                body.push_str("*/");
                continue;
            }
            if self.cursor.matches("/*") {
                self.cursor.shift_n(2);
                depth += 1;
                body.push_str("/*");
                continue;
            }
            body.push(self.cursor.shift());
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::dialects::DialectCapabilities;
    use crate::keywords::Keyword;

    #[derive(Debug)]
    struct Vanilla;

    impl Dialect for Vanilla {
        fn capabilities(&self) -> &'static DialectCapabilities {
            const CAPS: DialectCapabilities = DialectCapabilities::ansi();
            &CAPS
        }
    }

    #[derive(Debug)]
    struct Escaping;

    impl Dialect for Escaping {
        fn capabilities(&self) -> &'static DialectCapabilities {
            const CAPS: DialectCapabilities = DialectCapabilities {
                supports_string_literal_backslash_escape: true,
                supports_dollar_quoted_string: true,
                supports_triple_quoted_string: true,
                ..DialectCapabilities::ansi()
            };
            &CAPS
        }
    }

    fn lex(sql: &str) -> Vec<Token> {
        Lexer::new(sql, &Vanilla)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| t.token)
            .collect()
    }

    #[test]
    fn select_one_plus_two() {
        assert_eq!(
            lex("SELECT 1+2"),
            vec![
                Token::make_keyword("SELECT"),
                Token::Whitespace(Whitespace::Space),
                Token::Number("1".into(), false),
                Token::Plus,
                Token::Number("2".into(), false),
            ]
        );
    }

    #[test]
    fn keywords_are_resolved() {
        let Token::Word(w) = &lex("select")[0] else {
            panic!("expected a word")
        };
        assert_eq!(w.keyword, Keyword::Select);
        assert_eq!(w.value, "select");
    }

    #[test]
    fn numbers() {
        assert_eq!(lex("1.5"), vec![Token::Number("1.5".into(), false)]);
        assert_eq!(lex(".5"), vec![Token::Number(".5".into(), false)]);
        assert_eq!(lex("1e10"), vec![Token::Number("1e10".into(), false)]);
        assert_eq!(lex("1E-3"), vec![Token::Number("1e-3".into(), false)]);
        assert_eq!(lex("42L"), vec![Token::Number("42".into(), true)]);
        // `a.b` stays a compound identifier
        assert_eq!(
            lex("a.b"),
            vec![
                Token::make_word("a", None),
                Token::Period,
                Token::make_word("b", None),
            ]
        );
    }

    #[test]
    fn string_escapes() {
        assert_eq!(
            lex("'it''s'"),
            vec![Token::SingleQuotedString("it's".into())]
        );
        let escaped: Vec<Token> = Lexer::new(r"'a\nb'", &Escaping)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| t.token)
            .collect();
        assert_eq!(escaped, vec![Token::SingleQuotedString("a\nb".into())]);
        let raw: Vec<Token> = Lexer::new(r"'a\nb'", &Escaping)
            .with_unescape(false)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| t.token)
            .collect();
        assert_eq!(raw, vec![Token::SingleQuotedString(r"a\nb".into())]);
    }

    #[test]
    fn dollar_quoting() {
        let tokens: Vec<Token> = Lexer::new("$tag$body$tag$ $$x$$", &Escaping)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| t.token)
            .collect();
        assert_eq!(
            tokens,
            vec![
                Token::DollarQuotedString(DollarQuotedString {
                    value: "body".into(),
                    tag: Some("tag".into()),
                }),
                Token::Whitespace(Whitespace::Space),
                Token::DollarQuotedString(DollarQuotedString {
                    value: "x".into(),
                    tag: None,
                }),
            ]
        );
    }

    #[test]
    fn comments_and_operators() {
        assert_eq!(
            lex("a->b->>c"),
            vec![
                Token::make_word("a", None),
                Token::Arrow,
                Token::make_word("b", None),
                Token::LongArrow,
                Token::make_word("c", None),
            ]
        );
        assert_eq!(
            lex("/* outer /* inner */ still */"),
            vec![Token::Whitespace(Whitespace::MultiLineComment(
                " outer /* inner */ still ".into()
            ))]
        );
        let Token::Whitespace(Whitespace::SingleLineComment { prefix, .. }) = &lex("-- note")[0]
        else {
            panic!("expected a comment")
        };
        assert_eq!(prefix, "--");
    }

    #[test]
    fn locations_are_tracked() {
        let tokens = Lexer::new("SELECT\n  x", &Vanilla).tokenize().unwrap();
        let x = tokens.last().unwrap();
        assert_eq!(x.location, Location::new(2, 3));
    }

    #[test]
    fn unterminated_string_errors() {
        let err = Lexer::new("'open", &Vanilla).tokenize().unwrap_err();
        assert!(matches!(err, ParserError::Lexer { .. }));
    }
}
