//! The token model: the closed set of token variants the lexer produces and
//! the parser consumes, each carrying a source location.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::keywords::Keyword;

/// A lexical token together with everything the parser needs to classify it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Token {
    /// End of input. Synthesised by the cursor when reading past the last
    /// real token.
    EndOfFile,
    /// A keyword (like SELECT) or an optionally quoted identifier.
    Word(Word),
    /// An unsigned numeric literal; the flag marks a trailing `L` suffix.
    Number(String, bool),
    /// `'...'`
    SingleQuotedString(String),
    /// `"..."`, in dialects where double quotes delimit strings rather than
    /// identifiers.
    DoubleQuotedString(String),
    /// `'''...'''`
    TripleSingleQuotedString(String),
    /// `"""..."""`
    TripleDoubleQuotedString(String),
    /// `B'...'`
    SingleQuotedByteStringLiteral(String),
    /// `B"..."`
    DoubleQuotedByteStringLiteral(String),
    /// `B'''...'''`
    TripleSingleQuotedByteStringLiteral(String),
    /// `B"""..."""`
    TripleDoubleQuotedByteStringLiteral(String),
    /// `R'...'`
    SingleQuotedRawStringLiteral(String),
    /// `R"..."`
    DoubleQuotedRawStringLiteral(String),
    /// `R'''...'''`
    TripleSingleQuotedRawStringLiteral(String),
    /// `R"""..."""`
    TripleDoubleQuotedRawStringLiteral(String),
    /// `$tag$ ... $tag$`
    DollarQuotedString(DollarQuotedString),
    /// `N'...'`
    NationalStringLiteral(String),
    /// `E'...'` with C-style escapes
    EscapedStringLiteral(String),
    /// `U&'...'`
    UnicodeStringLiteral(String),
    /// `X'...'`
    HexStringLiteral(String),
    /// `?`, `:name`, `$1`, `@name`
    Placeholder(String),
    /// Whitespace or a comment; transparent to the skipping cursor
    /// primitives.
    Whitespace(Whitespace),
    Comma,
    Period,
    SemiColon,
    Colon,
    /// `::`
    DoubleColon,
    /// `:=`
    Assignment,
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    LeftBrace,
    RightBrace,
    /// `=`
    Eq,
    /// `==`
    DoubleEq,
    /// `<>` or `!=`
    Neq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    /// `<=>`
    Spaceship,
    Plus,
    Minus,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `//`, DuckDb integer division
    DuckIntDiv,
    /// `%`
    Mod,
    /// `||`
    StringConcat,
    /// `^`
    Caret,
    Ampersand,
    Pipe,
    /// `&&`
    Overlap,
    /// `<<`
    ShiftLeft,
    /// `>>`
    ShiftRight,
    /// `~`
    Tilde,
    /// `~*`
    TildeAsterisk,
    /// `!~`
    ExclamationMarkTilde,
    /// `!~*`
    ExclamationMarkTildeAsterisk,
    /// `!`
    ExclamationMark,
    /// `!!`
    DoubleExclamationMark,
    /// `@`
    AtSign,
    /// `|/`
    PGSquareRoot,
    /// `||/`
    PGCubeRoot,
    /// `#`
    Sharp,
    /// `\`. Lexed for completeness; never accepted as an operator.
    Backslash,
    /// `->`
    Arrow,
    /// `->>`
    LongArrow,
    /// `=>`
    RightArrow,
    /// `#>`
    HashArrow,
    /// `#>>`
    HashLongArrow,
    /// `#-`
    HashMinus,
    /// `@>`
    AtArrow,
    /// `<@`
    ArrowAt,
    /// `@?`
    AtQuestion,
    /// `@@`
    AtAt,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::EndOfFile => f.write_str("EOF"),
            Token::Word(w) => write!(f, "{w}"),
            Token::Number(n, long) => write!(f, "{n}{}", if *long { "L" } else { "" }),
            Token::SingleQuotedString(s) => write!(f, "'{s}'"),
            Token::DoubleQuotedString(s) => write!(f, "\"{s}\""),
            Token::TripleSingleQuotedString(s) => write!(f, "'''{s}'''"),
            Token::TripleDoubleQuotedString(s) => write!(f, "\"\"\"{s}\"\"\""),
            Token::SingleQuotedByteStringLiteral(s) => write!(f, "B'{s}'"),
            Token::DoubleQuotedByteStringLiteral(s) => write!(f, "B\"{s}\""),
            Token::TripleSingleQuotedByteStringLiteral(s) => write!(f, "B'''{s}'''"),
            Token::TripleDoubleQuotedByteStringLiteral(s) => write!(f, "B\"\"\"{s}\"\"\""),
            Token::SingleQuotedRawStringLiteral(s) => write!(f, "R'{s}'"),
            Token::DoubleQuotedRawStringLiteral(s) => write!(f, "R\"{s}\""),
            Token::TripleSingleQuotedRawStringLiteral(s) => write!(f, "R'''{s}'''"),
            Token::TripleDoubleQuotedRawStringLiteral(s) => write!(f, "R\"\"\"{s}\"\"\""),
            Token::DollarQuotedString(s) => write!(f, "{s}"),
            Token::NationalStringLiteral(s) => write!(f, "N'{s}'"),
            Token::EscapedStringLiteral(s) => write!(f, "E'{s}'"),
            Token::UnicodeStringLiteral(s) => write!(f, "U&'{s}'"),
            Token::HexStringLiteral(s) => write!(f, "X'{s}'"),
            Token::Placeholder(s) => f.write_str(s),
            Token::Whitespace(ws) => write!(f, "{ws}"),
            Token::Comma => f.write_str(","),
            Token::Period => f.write_str("."),
            Token::SemiColon => f.write_str(";"),
            Token::Colon => f.write_str(":"),
            Token::DoubleColon => f.write_str("::"),
            Token::Assignment => f.write_str(":="),
            Token::LeftParen => f.write_str("("),
            Token::RightParen => f.write_str(")"),
            Token::LeftBracket => f.write_str("["),
            Token::RightBracket => f.write_str("]"),
            Token::LeftBrace => f.write_str("{"),
            Token::RightBrace => f.write_str("}"),
            Token::Eq => f.write_str("="),
            Token::DoubleEq => f.write_str("=="),
            Token::Neq => f.write_str("<>"),
            Token::Lt => f.write_str("<"),
            Token::Gt => f.write_str(">"),
            Token::LtEq => f.write_str("<="),
            Token::GtEq => f.write_str(">="),
            Token::Spaceship => f.write_str("<=>"),
            Token::Plus => f.write_str("+"),
            Token::Minus => f.write_str("-"),
            Token::Mul => f.write_str("*"),
            Token::Div => f.write_str("/"),
            Token::DuckIntDiv => f.write_str("//"),
            Token::Mod => f.write_str("%"),
            Token::StringConcat => f.write_str("||"),
            Token::Caret => f.write_str("^"),
            Token::Ampersand => f.write_str("&"),
            Token::Pipe => f.write_str("|"),
            Token::Overlap => f.write_str("&&"),
            Token::ShiftLeft => f.write_str("<<"),
            Token::ShiftRight => f.write_str(">>"),
            Token::Tilde => f.write_str("~"),
            Token::TildeAsterisk => f.write_str("~*"),
            Token::ExclamationMarkTilde => f.write_str("!~"),
            Token::ExclamationMarkTildeAsterisk => f.write_str("!~*"),
            Token::ExclamationMark => f.write_str("!"),
            Token::DoubleExclamationMark => f.write_str("!!"),
            Token::AtSign => f.write_str("@"),
            Token::PGSquareRoot => f.write_str("|/"),
            Token::PGCubeRoot => f.write_str("||/"),
            Token::Sharp => f.write_str("#"),
            Token::Backslash => f.write_str("\\"),
            Token::Arrow => f.write_str("->"),
            Token::LongArrow => f.write_str("->>"),
            Token::RightArrow => f.write_str("=>"),
            Token::HashArrow => f.write_str("#>"),
            Token::HashLongArrow => f.write_str("#>>"),
            Token::HashMinus => f.write_str("#-"),
            Token::AtArrow => f.write_str("@>"),
            Token::ArrowAt => f.write_str("<@"),
            Token::AtQuestion => f.write_str("@?"),
            Token::AtAt => f.write_str("@@"),
        }
    }
}

impl Token {
    pub fn make_keyword(keyword: &str) -> Self {
        Token::make_word(keyword, None)
    }

    pub fn make_word(word: &str, quote_style: Option<char>) -> Self {
        Token::Word(Word {
            keyword: if quote_style.is_none() {
                Keyword::lookup(&word.to_uppercase())
            } else {
                Keyword::Undefined
            },
            value: word.to_string(),
            quote_style,
        })
    }

    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Whitespace(_))
    }
}

/// A keyword or identifier token payload.
///
/// The lexer resolves `keyword` eagerly for unquoted words; quoted words are
/// always `Keyword::Undefined` so that `"select"` stays usable as a name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Word {
    /// The string value, unquoted and with quote escapes resolved.
    pub value: String,
    /// The starting quote character, if the word was quoted.
    pub quote_style: Option<char>,
    /// The keyword the value matches, or `Keyword::Undefined`.
    pub keyword: Keyword,
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.quote_style {
            Some(s) if s == '"' || s == '[' || s == '`' => {
                write!(f, "{}{}{}", s, self.value, Word::matching_end_quote(s))
            }
            None => f.write_str(&self.value),
            _ => panic!("Unexpected quote_style!"),
        }
    }
}

impl Word {
    fn matching_end_quote(ch: char) -> char {
        match ch {
            '"' => '"',
            '[' => ']',
            '`' => '`',
            _ => panic!("unexpected quoting style!"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Whitespace {
    Space,
    Newline,
    Tab,
    SingleLineComment { comment: String, prefix: String },
    MultiLineComment(String),
}

impl fmt::Display for Whitespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Whitespace::Space => f.write_str(" "),
            Whitespace::Newline => f.write_str("\n"),
            Whitespace::Tab => f.write_str("\t"),
            Whitespace::SingleLineComment { prefix, comment } => {
                write!(f, "{prefix}{comment}")
            }
            Whitespace::MultiLineComment(s) => write!(f, "/*{s}*/"),
        }
    }
}

/// The body and tag of a `$tag$ ... $tag$` string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DollarQuotedString {
    pub value: String,
    pub tag: Option<String>,
}

impl fmt::Display for DollarQuotedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tag {
            Some(tag) => write!(f, "${tag}${}${tag}$", self.value),
            None => write!(f, "$${}$$", self.value),
        }
    }
}

/// A 1-based line/column pair. `0,0` marks a synthesised token with no
/// source position (e.g. the EOF sentinel of an empty input).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Location {
    pub line: u64,
    pub column: u64,
}

impl Location {
    pub fn new(line: u64, column: u64) -> Self {
        Location { line, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line: {}, Column: {}", self.line, self.column)
    }
}

/// A token plus where it started in the source text.
///
/// Equality deliberately ignores the location so parser code and tests can
/// compare against bare [`Token`]s.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TokenWithLocation {
    pub token: Token,
    pub location: Location,
}

impl TokenWithLocation {
    pub fn new(token: Token, location: Location) -> Self {
        TokenWithLocation { token, location }
    }

    pub fn wrap(token: Token) -> Self {
        TokenWithLocation::new(token, Location::default())
    }
}

impl PartialEq for TokenWithLocation {
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token
    }
}

impl Eq for TokenWithLocation {}

impl PartialEq<Token> for TokenWithLocation {
    fn eq(&self, other: &Token) -> bool {
        &self.token == other
    }
}

impl PartialEq<TokenWithLocation> for Token {
    fn eq(&self, other: &TokenWithLocation) -> bool {
        self == &other.token
    }
}

impl fmt::Display for TokenWithLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.token.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_is_ignored_by_equality() {
        let with_loc = TokenWithLocation::new(Token::Comma, Location::new(3, 7));
        assert_eq!(with_loc, Token::Comma);
        assert_eq!(with_loc, TokenWithLocation::wrap(Token::Comma));
        assert_ne!(with_loc, Token::SemiColon);
    }

    #[test]
    fn words_resolve_keywords_only_when_unquoted() {
        let Token::Word(w) = Token::make_keyword("SELECT") else {
            panic!("expected a word");
        };
        assert_eq!(w.keyword, Keyword::Select);

        let Token::Word(q) = Token::make_word("select", Some('"')) else {
            panic!("expected a word");
        };
        assert_eq!(q.keyword, Keyword::Undefined);
    }
}
