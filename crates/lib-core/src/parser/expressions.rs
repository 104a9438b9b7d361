//! The Pratt expression engine: prefix dispatch, precedence lookup and the
//! infix loop.

use std::sync::LazyLock;

use ahash::AHashSet;

use crate::ast::*;
use crate::errors::ParserError;
use crate::keywords::{Keyword, RESERVED_FOR_COLUMN_ALIAS};
use crate::parser::{Parser, ParserState, ident_of};
use crate::parser_err;
use crate::tokens::{Token, TokenWithLocation};

/// Clause keywords that can never begin an expression; checked on every
/// prefix parse, so membership is a hashed lookup rather than a slice scan.
static CANNOT_START_EXPR: LazyLock<AHashSet<Keyword>> =
    LazyLock::new(|| RESERVED_FOR_COLUMN_ALIAS.iter().copied().collect());

/// The canonical precedence rungs. Higher binds tighter. Dialects may
/// override the lookup wholesale via `Dialect::get_next_precedence`.
pub mod precedence {
    pub const OR: u8 = 5;
    pub const AND: u8 = 10;
    pub const UNARY_NOT: u8 = 15;
    pub const PG_OTHER: u8 = 16;
    pub const IS: u8 = 17;
    pub const LIKE: u8 = 19;
    pub const BETWEEN: u8 = 20;
    pub const COMPARISON: u8 = 20;
    pub const PIPE: u8 = 21;
    pub const CARET: u8 = 22;
    pub const AMPERSAND: u8 = 23;
    pub const XOR: u8 = 24;
    pub const PLUS_MINUS: u8 = 30;
    pub const MUL_DIV_MOD: u8 = 40;
    pub const AT_TIME_ZONE: u8 = 41;
    pub const SUBSCRIPT: u8 = 50;
}

impl<'a> Parser<'a> {
    /// Parses a full expression under a fresh depth-guard scope.
    pub fn parse_expr(&mut self) -> Result<Expr, ParserError> {
        let _guard = self.recursion.try_decrease()?;
        self.parse_sub_expression(0)
    }

    /// The Pratt loop: a prefix, then infixes while they bind tighter than
    /// `min_precedence`.
    pub fn parse_sub_expression(&mut self, min_precedence: u8) -> Result<Expr, ParserError> {
        let mut expr = self.parse_prefix()?;
        loop {
            let next_precedence = self.get_next_precedence()?;
            if min_precedence >= next_precedence {
                break;
            }
            expr = self.parse_infix(expr, next_precedence)?;
        }
        Ok(expr)
    }

    /// An expression, or `*` / `qualified.*`.
    pub fn parse_wildcard_expr(&mut self) -> Result<Expr, ParserError> {
        let start = self.index;
        match self.next_token().token {
            Token::Word(w) if self.peek_token() == Token::Period => {
                let mut id_parts = vec![ident_of(w)];
                while self.consume_token(&Token::Period) {
                    let next_token = self.next_token();
                    match next_token.token {
                        Token::Word(w) => id_parts.push(ident_of(w)),
                        Token::Mul => {
                            return Ok(Expr::QualifiedWildcard(ObjectName(id_parts)));
                        }
                        _ => break,
                    }
                }
                self.index = start;
            }
            Token::Mul => return Ok(Expr::Wildcard),
            _ => self.index = start,
        }
        self.parse_expr()
    }

    // ------------------------------------------------------------------
    // prefix
    // ------------------------------------------------------------------

    pub fn parse_prefix(&mut self) -> Result<Expr, ParserError> {
        if let Some(prefix) = self.dialect.parse_prefix(self) {
            return prefix;
        }

        // A data type name followed by a string literal is a type-prefixed
        // literal (`DATE '2020-01-01'`); `INTERVAL` opens the interval
        // grammar. Anything else rewinds and takes the normal path.
        let typed_string = self.maybe_parse(|p| match p.parse_data_type()? {
            DataType::Interval => p.parse_interval(),
            // a bare identifier would otherwise match as a custom type
            DataType::Custom(..) | DataType::Unspecified => parser_err!("not a typed string"),
            data_type => Ok(Expr::TypedString {
                data_type,
                value: p.parse_literal_string()?,
            }),
        })?;
        if let Some(expr) = typed_string {
            return Ok(expr);
        }

        let next_token = self.next_token();
        match next_token.token {
            Token::Word(w) => self.parse_prefix_word(w),
            Token::Number(..)
            | Token::SingleQuotedString(_)
            | Token::DoubleQuotedString(_)
            | Token::TripleSingleQuotedString(_)
            | Token::TripleDoubleQuotedString(_)
            | Token::DollarQuotedString(_)
            | Token::SingleQuotedByteStringLiteral(_)
            | Token::DoubleQuotedByteStringLiteral(_)
            | Token::TripleSingleQuotedByteStringLiteral(_)
            | Token::TripleDoubleQuotedByteStringLiteral(_)
            | Token::SingleQuotedRawStringLiteral(_)
            | Token::DoubleQuotedRawStringLiteral(_)
            | Token::TripleSingleQuotedRawStringLiteral(_)
            | Token::TripleDoubleQuotedRawStringLiteral(_)
            | Token::NationalStringLiteral(_)
            | Token::EscapedStringLiteral(_)
            | Token::UnicodeStringLiteral(_)
            | Token::HexStringLiteral(_)
            | Token::Placeholder(_) => {
                self.prev_token();
                Ok(Expr::Value(self.parse_value()?))
            }
            Token::LeftParen => self.parse_parenthesized_expr(),
            Token::LeftBracket => self.parse_array_expr(false),
            // `:name` bind parameter
            Token::Colon => match self.peek_token_no_skip().token {
                Token::Word(w) if w.quote_style.is_none() => {
                    self.next_token();
                    Ok(Expr::Value(Value::Placeholder(format!(":{}", w.value))))
                }
                _ => self.expected("an expression", next_token),
            },
            Token::Plus => Ok(Expr::UnaryOp {
                op: UnaryOperator::Plus,
                expr: Box::new(self.parse_sub_expression(precedence::PLUS_MINUS)?),
            }),
            Token::Minus => Ok(Expr::UnaryOp {
                op: UnaryOperator::Minus,
                expr: Box::new(self.parse_sub_expression(precedence::PLUS_MINUS)?),
            }),
            Token::ExclamationMark => Ok(Expr::UnaryOp {
                op: UnaryOperator::Not,
                expr: Box::new(self.parse_sub_expression(precedence::UNARY_NOT)?),
            }),
            Token::DoubleExclamationMark => Ok(Expr::UnaryOp {
                op: UnaryOperator::PGPrefixFactorial,
                expr: Box::new(self.parse_sub_expression(precedence::MUL_DIV_MOD)?),
            }),
            Token::Tilde => Ok(Expr::UnaryOp {
                op: UnaryOperator::PGBitwiseNot,
                expr: Box::new(self.parse_sub_expression(precedence::MUL_DIV_MOD)?),
            }),
            Token::PGSquareRoot => Ok(Expr::UnaryOp {
                op: UnaryOperator::PGSquareRoot,
                expr: Box::new(self.parse_sub_expression(precedence::MUL_DIV_MOD)?),
            }),
            Token::PGCubeRoot => Ok(Expr::UnaryOp {
                op: UnaryOperator::PGCubeRoot,
                expr: Box::new(self.parse_sub_expression(precedence::MUL_DIV_MOD)?),
            }),
            Token::AtSign => Ok(Expr::UnaryOp {
                op: UnaryOperator::PGAbs,
                expr: Box::new(self.parse_sub_expression(precedence::MUL_DIV_MOD)?),
            }),
            Token::Mul => Ok(Expr::Wildcard),
            _ => self.expected("an expression", next_token),
        }
    }

    fn parse_prefix_word(&mut self, w: crate::tokens::Word) -> Result<Expr, ParserError> {
        match w.keyword {
            Keyword::True | Keyword::False | Keyword::Null => {
                self.prev_token();
                Ok(Expr::Value(self.parse_value()?))
            }
            Keyword::CurrentCatalog | Keyword::CurrentUser | Keyword::SessionUser => {
                Ok(Expr::Function(Function {
                    name: ObjectName(vec![ident_of(w)]),
                    parameters: FunctionArguments::None,
                    args: FunctionArguments::None,
                    filter: None,
                    null_treatment: None,
                    over: None,
                    within_group: Vec::new(),
                }))
            }
            Keyword::CurrentTimestamp
            | Keyword::CurrentTime
            | Keyword::CurrentDate
            | Keyword::Localtime
            | Keyword::Localtimestamp => self.parse_time_function(ObjectName(vec![ident_of(w)])),
            Keyword::Case => self.parse_case_expr(),
            Keyword::Cast => self.parse_cast_expr(CastKind::Cast),
            Keyword::TryCast => self.parse_cast_expr(CastKind::TryCast),
            Keyword::SafeCast => self.parse_cast_expr(CastKind::SafeCast),
            Keyword::Convert => self.parse_convert_expr(),
            Keyword::Exists => self.parse_exists_expr(false),
            Keyword::Extract => self.parse_extract_expr(),
            Keyword::Ceil => self.parse_ceil_floor_expr(true),
            Keyword::Floor => self.parse_ceil_floor_expr(false),
            Keyword::Position if self.peek_token() == Token::LeftParen => {
                self.parse_position_expr()
            }
            Keyword::Substring => self.parse_substring_expr(),
            Keyword::Overlay => self.parse_overlay_expr(),
            Keyword::Trim => self.parse_trim_expr(),
            Keyword::Interval => self.parse_interval(),
            Keyword::Not => self.parse_not(),
            Keyword::Array if self.peek_token() == Token::LeftBracket => {
                self.expect_token(&Token::LeftBracket)?;
                self.parse_array_expr(true)
            }
            Keyword::Array if self.peek_token() == Token::LeftParen => {
                self.expect_token(&Token::LeftParen)?;
                let query = self.parse_query()?;
                self.expect_token(&Token::RightParen)?;
                Ok(Expr::Function(Function {
                    name: ObjectName(vec![ident_of(w)]),
                    parameters: FunctionArguments::None,
                    args: FunctionArguments::Subquery(query),
                    filter: None,
                    null_treatment: None,
                    over: None,
                    within_group: Vec::new(),
                }))
            }
            Keyword::Match if self.peek_token() == Token::LeftParen => {
                match self.maybe_parse(|p| p.parse_match_against())? {
                    Some(expr) => Ok(expr),
                    None => self.parse_identifier_prefix(w),
                }
            }
            Keyword::Struct if matches!(self.peek_token().token, Token::Lt | Token::LeftParen) => {
                self.parse_struct_expr()
            }
            Keyword::Map
                if self.peek_token() == Token::LeftBrace
                    && self.caps().supports_map_literal_syntax =>
            {
                self.parse_map_literal()
            }
            Keyword::Prior if self.state == ParserState::ConnectBy => {
                let expr = self.parse_sub_expression(precedence::PLUS_MINUS)?;
                Ok(Expr::Prior(Box::new(expr)))
            }
            // A clause keyword can never begin an expression; rejecting it
            // here is what turns `SELECT a, FROM t` into a syntax error.
            kw if w.quote_style.is_none() && CANNOT_START_EXPR.contains(&kw) => {
                self.prev_token();
                self.expected("an expression", self.peek_token())
            }
            _ => self.parse_identifier_prefix(w),
        }
    }

    /// A word that begins a column reference, compound name, qualified
    /// wildcard, function call, outer-join marker, lambda or introduced
    /// string.
    fn parse_identifier_prefix(&mut self, w: crate::tokens::Word) -> Result<Expr, ParserError> {
        // `_utf8'..'`: whitespace between introducer and literal matters
        if w.quote_style.is_none() && w.value.starts_with('_') {
            if let Token::SingleQuotedString(_) | Token::DoubleQuotedString(_) =
                self.peek_token_no_skip().token
            {
                return Ok(Expr::IntroducedString {
                    introducer: w.value,
                    value: self.parse_value()?,
                });
            }
        }

        if self.caps().supports_lambda_functions
            && w.quote_style.is_none()
            && self.peek_token() == Token::Arrow
        {
            self.expect_token(&Token::Arrow)?;
            return Ok(Expr::Lambda(LambdaFunction {
                params: OneOrManyWithParens::One(ident_of(w)),
                body: Box::new(self.parse_expr()?),
            }));
        }

        let mut id_parts = vec![ident_of(w)];
        while self.consume_token(&Token::Period) {
            let next_token = self.next_token();
            match next_token.token {
                Token::Word(w) => id_parts.push(ident_of(w)),
                Token::Mul => return Ok(Expr::QualifiedWildcard(ObjectName(id_parts))),
                Token::SingleQuotedString(s) => id_parts.push(Ident::with_quote('\'', s)),
                _ => return self.expected("an identifier or a '*' after '.'", next_token),
            }
        }

        if self.peek_token() == Token::LeftParen {
            if self.caps().supports_outer_join_operator
                && self.peek_nth_token(1) == Token::Plus
                && self.peek_nth_token(2) == Token::RightParen
            {
                self.expect_token(&Token::LeftParen)?;
                self.expect_token(&Token::Plus)?;
                self.expect_token(&Token::RightParen)?;
                return Ok(Expr::OuterJoin(Box::new(root_of(id_parts))));
            }
            return self.parse_function(ObjectName(id_parts));
        }

        Ok(root_of(id_parts))
    }

    /// Inside `(..)`: a subquery, a lambda parameter list, or a nested
    /// expression / tuple. The opening paren is already consumed.
    fn parse_parenthesized_expr(&mut self) -> Result<Expr, ParserError> {
        if matches!(
            self.peek_token().token,
            Token::Word(crate::tokens::Word {
                keyword: Keyword::Select | Keyword::With,
                ..
            })
        ) {
            let subquery = self.parse_query()?;
            self.expect_token(&Token::RightParen)?;
            return Ok(Expr::Subquery(subquery));
        }

        if self.caps().supports_lambda_functions {
            let lambda = self.maybe_parse(|p| {
                let params = p.parse_comma_separated(Parser::parse_identifier)?;
                p.expect_token(&Token::RightParen)?;
                p.expect_token(&Token::Arrow)?;
                Ok(Expr::Lambda(LambdaFunction {
                    params: OneOrManyWithParens::Many(params),
                    body: Box::new(p.parse_expr()?),
                }))
            })?;
            if let Some(lambda) = lambda {
                return Ok(lambda);
            }
        }

        let mut exprs = self.parse_comma_separated(Parser::parse_expr)?;
        self.expect_token(&Token::RightParen)?;
        let expr = if exprs.len() == 1 {
            Expr::Nested(Box::new(exprs.remove(0)))
        } else {
            Expr::Tuple(exprs)
        };

        // `(struct_expr).key`
        if self.consume_token(&Token::Period) {
            let key = self.parse_identifier()?;
            return Ok(Expr::CompositeAccess {
                expr: Box::new(expr),
                key,
            });
        }
        Ok(expr)
    }

    fn parse_not(&mut self) -> Result<Expr, ParserError> {
        match self.peek_token().token {
            Token::Word(w) if w.keyword == Keyword::Exists => {
                self.expect_keyword(Keyword::Exists)?;
                self.parse_exists_expr(true)
            }
            _ => Ok(Expr::UnaryOp {
                op: UnaryOperator::Not,
                expr: Box::new(self.parse_sub_expression(precedence::UNARY_NOT)?),
            }),
        }
    }

    fn parse_time_function(&mut self, name: ObjectName) -> Result<Expr, ParserError> {
        let args = if self.consume_token(&Token::LeftParen) {
            FunctionArguments::List(self.parse_function_argument_list()?)
        } else {
            FunctionArguments::None
        };
        Ok(Expr::Function(Function {
            name,
            parameters: FunctionArguments::None,
            args,
            filter: None,
            null_treatment: None,
            over: None,
            within_group: Vec::new(),
        }))
    }

    fn parse_case_expr(&mut self) -> Result<Expr, ParserError> {
        let mut operand = None;
        if !self.parse_keyword(Keyword::When) {
            operand = Some(Box::new(self.parse_expr()?));
            self.expect_keyword(Keyword::When)?;
        }
        let mut conditions = Vec::new();
        let mut results = Vec::new();
        loop {
            conditions.push(self.parse_expr()?);
            self.expect_keyword(Keyword::Then)?;
            results.push(self.parse_expr()?);
            if !self.parse_keyword(Keyword::When) {
                break;
            }
        }
        let else_result = if self.parse_keyword(Keyword::Else) {
            Some(Box::new(self.parse_expr()?))
        } else {
            None
        };
        self.expect_keyword(Keyword::End)?;
        Ok(Expr::Case {
            operand,
            conditions,
            results,
            else_result,
        })
    }

    fn parse_cast_expr(&mut self, kind: CastKind) -> Result<Expr, ParserError> {
        self.expect_token(&Token::LeftParen)?;
        let expr = self.parse_expr()?;
        self.expect_keyword(Keyword::As)?;
        let data_type = self.parse_data_type()?;
        let format = self.parse_optional_cast_format()?;
        self.expect_token(&Token::RightParen)?;
        Ok(Expr::Cast {
            kind,
            expr: Box::new(expr),
            data_type,
            format,
        })
    }

    fn parse_optional_cast_format(&mut self) -> Result<Option<CastFormat>, ParserError> {
        if self.parse_keyword(Keyword::Format) {
            let value = self.parse_value()?;
            if self.parse_keywords(&[Keyword::At, Keyword::Time, Keyword::Zone]) {
                Ok(Some(CastFormat::ValueAtTimeZone(value, self.parse_value()?)))
            } else {
                Ok(Some(CastFormat::Value(value)))
            }
        } else {
            Ok(None)
        }
    }

    /// `CONVERT(type, value)` or `CONVERT(value, type)` or
    /// `CONVERT(value USING charset)`, by dialect.
    fn parse_convert_expr(&mut self) -> Result<Expr, ParserError> {
        self.expect_token(&Token::LeftParen)?;
        if self.caps().convert_type_before_value {
            let data_type = self.parse_data_type()?;
            self.expect_token(&Token::Comma)?;
            let expr = self.parse_expr()?;
            self.expect_token(&Token::RightParen)?;
            return Ok(Expr::Convert {
                expr: Box::new(expr),
                data_type: Some(data_type),
                charset: None,
                target_before_value: true,
            });
        }
        let expr = self.parse_expr()?;
        if self.parse_keyword(Keyword::Using) {
            let charset = self.parse_object_name()?;
            self.expect_token(&Token::RightParen)?;
            return Ok(Expr::Convert {
                expr: Box::new(expr),
                data_type: None,
                charset: Some(charset),
                target_before_value: false,
            });
        }
        self.expect_token(&Token::Comma)?;
        let data_type = self.parse_data_type()?;
        self.expect_token(&Token::RightParen)?;
        Ok(Expr::Convert {
            expr: Box::new(expr),
            data_type: Some(data_type),
            charset: None,
            target_before_value: false,
        })
    }

    fn parse_exists_expr(&mut self, negated: bool) -> Result<Expr, ParserError> {
        self.expect_token(&Token::LeftParen)?;
        let subquery = self.parse_query()?;
        self.expect_token(&Token::RightParen)?;
        Ok(Expr::Exists { subquery, negated })
    }

    fn parse_extract_expr(&mut self) -> Result<Expr, ParserError> {
        self.expect_token(&Token::LeftParen)?;
        let field = self.parse_date_time_field()?;
        self.expect_keyword(Keyword::From)?;
        let expr = self.parse_expr()?;
        self.expect_token(&Token::RightParen)?;
        Ok(Expr::Extract {
            field,
            expr: Box::new(expr),
        })
    }

    fn parse_ceil_floor_expr(&mut self, is_ceil: bool) -> Result<Expr, ParserError> {
        self.expect_token(&Token::LeftParen)?;
        let expr = Box::new(self.parse_expr()?);
        let field = if self.parse_keyword(Keyword::To) {
            self.parse_date_time_field()?
        } else {
            DateTimeField::NoDateTime
        };
        self.expect_token(&Token::RightParen)?;
        Ok(if is_ceil {
            Expr::Ceil { expr, field }
        } else {
            Expr::Floor { expr, field }
        })
    }

    fn parse_position_expr(&mut self) -> Result<Expr, ParserError> {
        self.expect_token(&Token::LeftParen)?;
        // stop before IN, which would otherwise read as membership
        let expr = self.parse_sub_expression(precedence::BETWEEN)?;
        self.expect_keyword(Keyword::In)?;
        let within = self.parse_expr()?;
        self.expect_token(&Token::RightParen)?;
        Ok(Expr::Position {
            expr: Box::new(expr),
            within: Box::new(within),
        })
    }

    fn parse_substring_expr(&mut self) -> Result<Expr, ParserError> {
        self.expect_token(&Token::LeftParen)?;
        let expr = self.parse_expr()?;
        let mut substring_from = None;
        let mut substring_for = None;
        let mut special = false;
        if self.consume_token(&Token::Comma) {
            special = true;
            substring_from = Some(Box::new(self.parse_expr()?));
        } else if self.caps().supports_substring_from_for_expression
            && self.parse_keyword(Keyword::From)
        {
            substring_from = Some(Box::new(self.parse_expr()?));
        }
        if self.consume_token(&Token::Comma) {
            special = true;
            substring_for = Some(Box::new(self.parse_expr()?));
        } else if self.caps().supports_substring_from_for_expression
            && self.parse_keyword(Keyword::For)
        {
            substring_for = Some(Box::new(self.parse_expr()?));
        }
        self.expect_token(&Token::RightParen)?;
        Ok(Expr::Substring {
            expr: Box::new(expr),
            substring_from,
            substring_for,
            special,
        })
    }

    fn parse_overlay_expr(&mut self) -> Result<Expr, ParserError> {
        self.expect_token(&Token::LeftParen)?;
        let expr = self.parse_expr()?;
        self.expect_keyword(Keyword::Placing)?;
        let overlay_what = self.parse_expr()?;
        self.expect_keyword(Keyword::From)?;
        let overlay_from = self.parse_expr()?;
        let overlay_for = if self.parse_keyword(Keyword::For) {
            Some(Box::new(self.parse_expr()?))
        } else {
            None
        };
        self.expect_token(&Token::RightParen)?;
        Ok(Expr::Overlay {
            expr: Box::new(expr),
            overlay_what: Box::new(overlay_what),
            overlay_from: Box::new(overlay_from),
            overlay_for,
        })
    }

    fn parse_trim_expr(&mut self) -> Result<Expr, ParserError> {
        self.expect_token(&Token::LeftParen)?;
        let mut trim_where = None;
        if let Token::Word(word) = self.peek_token().token {
            if let Some(field) = match word.keyword {
                Keyword::Both => Some(TrimWhereField::Both),
                Keyword::Leading => Some(TrimWhereField::Leading),
                Keyword::Trailing => Some(TrimWhereField::Trailing),
                _ => None,
            } {
                self.next_token();
                trim_where = Some(field);
            }
        }
        let expr = self.parse_expr()?;
        if self.parse_keyword(Keyword::From) {
            let trim_what = Box::new(expr);
            let expr = self.parse_expr()?;
            self.expect_token(&Token::RightParen)?;
            return Ok(Expr::Trim {
                expr: Box::new(expr),
                trim_where,
                trim_what: Some(trim_what),
            });
        }
        self.expect_token(&Token::RightParen)?;
        Ok(Expr::Trim {
            expr: Box::new(expr),
            trim_where,
            trim_what: None,
        })
    }

    /// `INTERVAL` is already consumed.
    pub fn parse_interval(&mut self) -> Result<Expr, ParserError> {
        let value = self.parse_expr()?;
        let leading_field = self.maybe_parse_date_time_field()?;
        let mut leading_precision = None;
        let mut last_field = None;
        let mut fractional_seconds_precision = None;
        if leading_field.is_some() {
            leading_precision = self.parse_optional_precision()?;
            if self.parse_keyword(Keyword::To) {
                last_field = Some(self.parse_date_time_field()?);
                fractional_seconds_precision = self.parse_optional_precision()?;
            }
        }
        Ok(Expr::Interval(Interval {
            value: Box::new(value),
            leading_field,
            leading_precision,
            last_field,
            fractional_seconds_precision,
        }))
    }

    fn maybe_parse_date_time_field(&mut self) -> Result<Option<DateTimeField>, ParserError> {
        match self.peek_token().token {
            Token::Word(_) => self.maybe_parse(|p| p.parse_date_time_field()),
            _ => Ok(None),
        }
    }

    pub fn parse_date_time_field(&mut self) -> Result<DateTimeField, ParserError> {
        let next_token = self.next_token();
        let field = match &next_token.token {
            Token::Word(w) if w.quote_style.is_none() => keyword_to_field(w.keyword),
            Token::SingleQuotedString(s) if self.caps().allow_extract_single_quotes => {
                keyword_to_field(Keyword::lookup(&s.to_uppercase()))
            }
            _ => None,
        };
        match field {
            Some(field) => Ok(field),
            None => self.expected("date/time field", next_token),
        }
    }

    fn parse_match_against(&mut self) -> Result<Expr, ParserError> {
        self.expect_token(&Token::LeftParen)?;
        let columns = self.parse_comma_separated(Parser::parse_identifier)?;
        self.expect_token(&Token::RightParen)?;
        self.expect_keyword(Keyword::Against)?;
        self.expect_token(&Token::LeftParen)?;
        let match_value = self.parse_value()?;
        let opt_search_modifier = if self.parse_keywords(&[
            Keyword::In,
            Keyword::Natural,
            Keyword::Language,
            Keyword::Mode,
        ]) {
            if self.parse_keywords(&[Keyword::With, Keyword::Query, Keyword::Expansion]) {
                Some(SearchModifier::InNaturalLanguageModeWithQueryExpansion)
            } else {
                Some(SearchModifier::InNaturalLanguageMode)
            }
        } else if self.parse_keywords(&[Keyword::In, Keyword::Boolean, Keyword::Mode]) {
            Some(SearchModifier::InBooleanMode)
        } else if self.parse_keywords(&[Keyword::With, Keyword::Query, Keyword::Expansion]) {
            Some(SearchModifier::WithQueryExpansion)
        } else {
            None
        };
        self.expect_token(&Token::RightParen)?;
        Ok(Expr::MatchAgainst {
            columns,
            match_value,
            opt_search_modifier,
        })
    }

    /// `[..]`-style array literal; the opening bracket is consumed. `named`
    /// records a leading `ARRAY` keyword.
    fn parse_array_expr(&mut self, named: bool) -> Result<Expr, ParserError> {
        if self.consume_token(&Token::RightBracket) {
            return Ok(Expr::Array(Array {
                elem: Vec::new(),
                named,
            }));
        }
        let elem = self.parse_comma_separated(Parser::parse_expr)?;
        self.expect_token(&Token::RightBracket)?;
        Ok(Expr::Array(Array { elem, named }))
    }

    /// BigQuery `STRUCT<..>(..)` / `STRUCT(expr AS name, ..)`.
    fn parse_struct_expr(&mut self) -> Result<Expr, ParserError> {
        let fields = if self.peek_token() == Token::Lt {
            self.expect_token(&Token::Lt)?;
            let fields = self.parse_comma_separated(Parser::parse_struct_field)?;
            self.expect_token(&Token::Gt)?;
            fields
        } else {
            Vec::new()
        };
        self.expect_token(&Token::LeftParen)?;
        let values = self.parse_comma_separated(|p| {
            let expr = p.parse_expr()?;
            if p.parse_keyword(Keyword::As) {
                let name = p.parse_identifier()?;
                Ok(Expr::Named {
                    expr: Box::new(expr),
                    name,
                })
            } else {
                Ok(expr)
            }
        })?;
        self.expect_token(&Token::RightParen)?;
        Ok(Expr::Struct { values, fields })
    }

    /// DuckDb `MAP {k: v, ..}`; the `MAP` keyword is consumed.
    fn parse_map_literal(&mut self) -> Result<Expr, ParserError> {
        self.expect_token(&Token::LeftBrace)?;
        if self.consume_token(&Token::RightBrace) {
            return Ok(Expr::Map(Map {
                entries: Vec::new(),
            }));
        }
        let entries = self.parse_comma_separated(|p| {
            let key = p.parse_expr()?;
            p.expect_token(&Token::Colon)?;
            let value = p.parse_expr()?;
            Ok(MapEntry {
                key: Box::new(key),
                value: Box::new(value),
            })
        })?;
        self.expect_token(&Token::RightBrace)?;
        Ok(Expr::Map(Map { entries }))
    }

    /// DuckDb `{'k': v, ..}`; the opening brace is consumed.
    pub fn parse_dictionary_expr(&mut self) -> Result<Expr, ParserError> {
        if self.consume_token(&Token::RightBrace) {
            return Ok(Expr::Dictionary(Vec::new()));
        }
        let fields = self.parse_comma_separated(|p| {
            let key = p.parse_identifier()?;
            p.expect_token(&Token::Colon)?;
            let value = p.parse_expr()?;
            Ok(DictionaryField {
                key,
                value: Box::new(value),
            })
        })?;
        self.expect_token(&Token::RightBrace)?;
        Ok(Expr::Dictionary(fields))
    }

    // ------------------------------------------------------------------
    // function calls
    // ------------------------------------------------------------------

    /// A call whose name is already consumed; the cursor sits on `(`.
    pub fn parse_function(&mut self, name: ObjectName) -> Result<Expr, ParserError> {
        self.expect_token(&Token::LeftParen)?;

        if matches!(
            self.peek_token().token,
            Token::Word(crate::tokens::Word {
                keyword: Keyword::Select | Keyword::With,
                ..
            })
        ) {
            let subquery = self.parse_query()?;
            self.expect_token(&Token::RightParen)?;
            return Ok(Expr::Function(Function {
                name,
                parameters: FunctionArguments::None,
                args: FunctionArguments::Subquery(subquery),
                filter: None,
                null_treatment: None,
                over: None,
                within_group: Vec::new(),
            }));
        }

        let mut parameters = FunctionArguments::None;
        let mut args = FunctionArguments::List(self.parse_function_argument_list()?);
        // ClickHouse `quantile(0.5)(x)`: the first list was parameters
        if self.peek_token() == Token::LeftParen {
            self.expect_token(&Token::LeftParen)?;
            parameters = args;
            args = FunctionArguments::List(self.parse_function_argument_list()?);
        }

        let within_group = if self.parse_keywords(&[Keyword::Within, Keyword::Group]) {
            self.expect_token(&Token::LeftParen)?;
            self.expect_keywords(&[Keyword::Order, Keyword::By])?;
            let order_by = self.parse_comma_separated(Parser::parse_order_by_expr)?;
            self.expect_token(&Token::RightParen)?;
            order_by
        } else {
            Vec::new()
        };

        let filter = if self.caps().supports_filter_during_aggregation
            && self.parse_keyword(Keyword::Filter)
            && self.consume_token(&Token::LeftParen)
            && self.parse_keyword(Keyword::Where)
        {
            let filter = self.parse_expr()?;
            self.expect_token(&Token::RightParen)?;
            Some(Box::new(filter))
        } else {
            None
        };

        // `IGNORE/RESPECT NULLS` outside the argument list
        let null_treatment = self.parse_optional_null_treatment()?;

        let over = if self.parse_keyword(Keyword::Over) {
            if self.consume_token(&Token::LeftParen) {
                let window_spec = self.parse_window_spec()?;
                Some(WindowType::WindowSpec(window_spec))
            } else {
                Some(WindowType::NamedWindow(self.parse_identifier()?))
            }
        } else {
            None
        };

        Ok(Expr::Function(Function {
            name,
            parameters,
            args,
            filter,
            null_treatment,
            over,
            within_group,
        }))
    }

    fn parse_optional_null_treatment(&mut self) -> Result<Option<NullTreatment>, ParserError> {
        if self.parse_keywords(&[Keyword::Ignore, Keyword::Nulls]) {
            Ok(Some(NullTreatment::IgnoreNulls))
        } else if self.parse_keywords(&[Keyword::Respect, Keyword::Nulls]) {
            Ok(Some(NullTreatment::RespectNulls))
        } else {
            Ok(None)
        }
    }

    /// The contents of an argument list up to and including the closing
    /// paren.
    pub fn parse_function_argument_list(&mut self) -> Result<FunctionArgumentList, ParserError> {
        if self.consume_token(&Token::RightParen) {
            return Ok(FunctionArgumentList::empty());
        }

        let duplicate_treatment = self.parse_duplicate_treatment()?;
        let args = self.parse_comma_separated(Parser::parse_function_arg)?;

        let mut clauses = Vec::new();
        loop {
            if self.caps().supports_window_function_null_treatment_arg {
                if let Some(null_treatment) = self.parse_optional_null_treatment()? {
                    clauses.push(FunctionArgumentClause::IgnoreOrRespectNulls(null_treatment));
                    continue;
                }
            }
            if self.parse_keywords(&[Keyword::Order, Keyword::By]) {
                clauses.push(FunctionArgumentClause::OrderBy(
                    self.parse_comma_separated(Parser::parse_order_by_expr)?,
                ));
                continue;
            }
            if self.parse_keyword(Keyword::Limit) {
                clauses.push(FunctionArgumentClause::Limit(self.parse_expr()?));
                continue;
            }
            if self.parse_keywords(&[Keyword::On, Keyword::Overflow]) {
                clauses.push(FunctionArgumentClause::OnOverflow(
                    self.parse_listagg_on_overflow()?,
                ));
                continue;
            }
            if self.parse_keyword(Keyword::Having) {
                let kind = match self.expect_one_of_keywords(&[Keyword::Min, Keyword::Max])? {
                    Keyword::Min => HavingBoundKind::Min,
                    _ => HavingBoundKind::Max,
                };
                clauses.push(FunctionArgumentClause::Having(HavingBound(
                    kind,
                    self.parse_expr()?,
                )));
                continue;
            }
            if self.parse_keyword(Keyword::Separator) {
                clauses.push(FunctionArgumentClause::Separator(self.parse_value()?));
                continue;
            }
            break;
        }

        self.expect_token(&Token::RightParen)?;
        Ok(FunctionArgumentList {
            duplicate_treatment,
            args,
            clauses,
        })
    }

    fn parse_duplicate_treatment(&mut self) -> Result<Option<DuplicateTreatment>, ParserError> {
        match (
            self.parse_keyword(Keyword::All),
            self.parse_keyword(Keyword::Distinct),
        ) {
            (true, false) => Ok(Some(DuplicateTreatment::All)),
            (false, true) => Ok(Some(DuplicateTreatment::Distinct)),
            (false, false) => Ok(None),
            (true, true) => parser_err!("Cannot specify both ALL and DISTINCT"),
        }
    }

    fn parse_listagg_on_overflow(&mut self) -> Result<ListAggOnOverflow, ParserError> {
        if self.parse_keyword(Keyword::Error) {
            return Ok(ListAggOnOverflow::Error);
        }
        self.expect_keyword(Keyword::Truncate)?;
        let filler = match self.peek_token().token {
            Token::Word(w) if w.keyword == Keyword::With || w.keyword == Keyword::Without => None,
            _ => Some(Box::new(self.parse_expr()?)),
        };
        let with_count = self.parse_keyword(Keyword::With);
        if !with_count {
            self.expect_keyword(Keyword::Without)?;
        }
        self.expect_keyword(Keyword::Count)?;
        Ok(ListAggOnOverflow::Truncate { filler, with_count })
    }

    pub fn parse_function_arg(&mut self) -> Result<FunctionArg, ParserError> {
        if let Token::Word(_) = self.peek_token().token {
            let operator = match self.peek_nth_token(1).token {
                Token::RightArrow => Some(FunctionArgOperator::RightArrow),
                Token::Assignment => Some(FunctionArgOperator::Assignment),
                Token::Eq if self.caps().supports_named_function_args_with_eq_operator => {
                    Some(FunctionArgOperator::Equals)
                }
                _ => None,
            };
            if let Some(operator) = operator {
                let name = self.parse_identifier()?;
                self.next_token();
                let arg = self.parse_wildcard_expr()?.into();
                return Ok(FunctionArg::Named {
                    name,
                    arg,
                    operator,
                });
            }
        }
        Ok(FunctionArg::Unnamed(self.parse_wildcard_expr()?.into()))
    }

    /// The body of an `OVER (..)` or `WINDOW name AS (..)` clause, up to
    /// and including the closing paren.
    pub fn parse_window_spec(&mut self) -> Result<WindowSpec, ParserError> {
        let window_name = match self.peek_token().token {
            Token::Word(word) if word.keyword == Keyword::Undefined => {
                self.maybe_parse(|p| p.parse_identifier())?
            }
            _ => None,
        };
        let partition_by = if self.parse_keywords(&[Keyword::Partition, Keyword::By]) {
            self.parse_comma_separated(Parser::parse_expr)?
        } else {
            Vec::new()
        };
        let order_by = if self.parse_keywords(&[Keyword::Order, Keyword::By]) {
            self.parse_comma_separated(Parser::parse_order_by_expr)?
        } else {
            Vec::new()
        };
        let window_frame = if !self.consume_token(&Token::RightParen) {
            let window_frame = self.parse_window_frame()?;
            self.expect_token(&Token::RightParen)?;
            Some(window_frame)
        } else {
            None
        };
        Ok(WindowSpec {
            window_name,
            partition_by,
            order_by,
            window_frame,
        })
    }

    pub fn parse_window_frame(&mut self) -> Result<WindowFrame, ParserError> {
        let units = match self.expect_one_of_keywords(&[
            Keyword::Rows,
            Keyword::Range,
            Keyword::Groups,
        ])? {
            Keyword::Rows => WindowFrameUnits::Rows,
            Keyword::Range => WindowFrameUnits::Range,
            _ => WindowFrameUnits::Groups,
        };
        let (start_bound, end_bound) = if self.parse_keyword(Keyword::Between) {
            let start = self.parse_window_frame_bound()?;
            self.expect_keyword(Keyword::And)?;
            (start, Some(self.parse_window_frame_bound()?))
        } else {
            (self.parse_window_frame_bound()?, None)
        };
        Ok(WindowFrame {
            units,
            start_bound,
            end_bound,
        })
    }

    fn parse_window_frame_bound(&mut self) -> Result<WindowFrameBound, ParserError> {
        if self.parse_keywords(&[Keyword::Current, Keyword::Row]) {
            return Ok(WindowFrameBound::CurrentRow);
        }
        let rows = if self.parse_keyword(Keyword::Unbounded) {
            None
        } else {
            Some(Box::new(self.parse_expr()?))
        };
        if self.parse_keyword(Keyword::Preceding) {
            Ok(WindowFrameBound::Preceding(rows))
        } else if self.parse_keyword(Keyword::Following) {
            Ok(WindowFrameBound::Following(rows))
        } else {
            self.expected("PRECEDING or FOLLOWING", self.peek_token())
        }
    }

    // ------------------------------------------------------------------
    // precedence
    // ------------------------------------------------------------------

    /// Binding power of the operator at the cursor, `0` for non-operators.
    pub fn get_next_precedence(&self) -> Result<u8, ParserError> {
        if let Some(precedence) = self.dialect.get_next_precedence(self) {
            return precedence;
        }
        let token = self.peek_token();
        let precedence = match token.token {
            Token::Word(w) => match w.keyword {
                Keyword::Or => precedence::OR,
                Keyword::And => precedence::AND,
                Keyword::Xor => precedence::XOR,
                Keyword::Is => precedence::IS,
                Keyword::In | Keyword::Between => precedence::BETWEEN,
                Keyword::Like | Keyword::Ilike | Keyword::Similar | Keyword::Regexp
                | Keyword::Rlike => precedence::LIKE,
                Keyword::Operator => precedence::PG_OTHER,
                Keyword::At => match (
                    self.peek_nth_token(1).token,
                    self.peek_nth_token(2).token,
                ) {
                    (Token::Word(a), Token::Word(b))
                        if a.keyword == Keyword::Time && b.keyword == Keyword::Zone =>
                    {
                        precedence::AT_TIME_ZONE
                    }
                    _ => 0,
                },
                // NOT borrows the precedence of the negatable infix that
                // follows it; bare NOT never binds as an infix.
                Keyword::Not => match self.peek_nth_token(1).token {
                    Token::Word(w) => match w.keyword {
                        Keyword::In | Keyword::Between => precedence::BETWEEN,
                        Keyword::Like
                        | Keyword::Ilike
                        | Keyword::Similar
                        | Keyword::Regexp
                        | Keyword::Rlike => precedence::LIKE,
                        _ => 0,
                    },
                    _ => 0,
                },
                _ => 0,
            },
            Token::Eq
            | Token::DoubleEq
            | Token::Neq
            | Token::Lt
            | Token::LtEq
            | Token::Gt
            | Token::GtEq
            | Token::Spaceship
            | Token::Tilde
            | Token::TildeAsterisk
            | Token::ExclamationMarkTilde
            | Token::ExclamationMarkTildeAsterisk => precedence::COMPARISON,
            Token::Overlap => precedence::PG_OTHER,
            Token::Pipe => precedence::PIPE,
            Token::Caret | Token::Sharp | Token::ShiftLeft | Token::ShiftRight => {
                precedence::CARET
            }
            Token::Ampersand => precedence::AMPERSAND,
            Token::Plus | Token::Minus => precedence::PLUS_MINUS,
            Token::Mul | Token::Div | Token::DuckIntDiv | Token::Mod | Token::StringConcat => {
                precedence::MUL_DIV_MOD
            }
            // `:` path access binds here too, but only dialects with
            // semi-structured access give it a precedence (via the hook);
            // everywhere else a bare colon is the slice separator
            Token::DoubleColon
            | Token::ExclamationMark
            | Token::LeftBracket
            | Token::Arrow
            | Token::LongArrow
            | Token::HashArrow
            | Token::HashLongArrow
            | Token::HashMinus
            | Token::AtArrow
            | Token::ArrowAt
            | Token::AtQuestion
            | Token::AtAt => precedence::SUBSCRIPT,
            _ => 0,
        };
        Ok(precedence)
    }

    // ------------------------------------------------------------------
    // infix
    // ------------------------------------------------------------------

    pub fn parse_infix(&mut self, expr: Expr, precedence: u8) -> Result<Expr, ParserError> {
        if let Some(infix) = self.dialect.parse_infix(self, &expr, precedence) {
            return infix;
        }

        let token = self.next_token();
        let regular_binary_operator = match &token.token {
            Token::Spaceship => Some(BinaryOperator::Spaceship),
            Token::DoubleEq => Some(BinaryOperator::Eq),
            Token::Eq => Some(BinaryOperator::Eq),
            Token::Neq => Some(BinaryOperator::NotEq),
            Token::Gt => Some(BinaryOperator::Gt),
            Token::GtEq => Some(BinaryOperator::GtEq),
            Token::Lt => Some(BinaryOperator::Lt),
            Token::LtEq => Some(BinaryOperator::LtEq),
            Token::Plus => Some(BinaryOperator::Plus),
            Token::Minus => Some(BinaryOperator::Minus),
            Token::Mul => Some(BinaryOperator::Multiply),
            Token::Mod => Some(BinaryOperator::Modulo),
            Token::StringConcat => Some(BinaryOperator::StringConcat),
            Token::Pipe => Some(BinaryOperator::BitwiseOr),
            Token::Caret => Some(BinaryOperator::BitwiseXor),
            Token::Ampersand => Some(BinaryOperator::BitwiseAnd),
            Token::Div => Some(BinaryOperator::Divide),
            Token::DuckIntDiv => Some(BinaryOperator::DuckIntegerDivide),
            Token::ShiftLeft => Some(BinaryOperator::PGBitwiseShiftLeft),
            Token::ShiftRight => Some(BinaryOperator::PGBitwiseShiftRight),
            Token::Sharp => Some(BinaryOperator::PGBitwiseXor),
            Token::Overlap => Some(BinaryOperator::PGOverlap),
            Token::Tilde => Some(BinaryOperator::PGRegexMatch),
            Token::TildeAsterisk => Some(BinaryOperator::PGRegexIMatch),
            Token::ExclamationMarkTilde => Some(BinaryOperator::PGRegexNotMatch),
            Token::ExclamationMarkTildeAsterisk => Some(BinaryOperator::PGRegexNotIMatch),
            Token::Arrow => Some(BinaryOperator::Arrow),
            Token::LongArrow => Some(BinaryOperator::LongArrow),
            Token::HashArrow => Some(BinaryOperator::HashArrow),
            Token::HashLongArrow => Some(BinaryOperator::HashLongArrow),
            Token::HashMinus => Some(BinaryOperator::HashMinus),
            Token::AtArrow => Some(BinaryOperator::AtArrow),
            Token::ArrowAt => Some(BinaryOperator::ArrowAt),
            Token::AtQuestion => Some(BinaryOperator::AtQuestion),
            Token::AtAt => Some(BinaryOperator::AtAt),
            Token::Word(w) => match w.keyword {
                Keyword::And => Some(BinaryOperator::And),
                Keyword::Or => Some(BinaryOperator::Or),
                Keyword::Xor => Some(BinaryOperator::Xor),
                Keyword::Operator if self.peek_token() == Token::LeftParen => {
                    Some(self.parse_pg_custom_operator()?)
                }
                _ => None,
            },
            _ => None,
        };

        if let Some(op) = regular_binary_operator {
            // comparison with a quantified subquery or list
            if let Some(keyword) =
                self.parse_one_of_keywords(&[Keyword::Any, Keyword::All, Keyword::Some])
            {
                if !is_comparison(&op) {
                    return parser_err!("{op:?} is not a comparison operator");
                }
                self.expect_token(&Token::LeftParen)?;
                let right = self.parse_sub_expression(precedence)?;
                self.expect_token(&Token::RightParen)?;
                let (left, right) = (Box::new(expr), Box::new(right));
                return Ok(match keyword {
                    Keyword::All => Expr::AllOp {
                        left,
                        compare_op: op,
                        right,
                    },
                    _ => Expr::AnyOp {
                        left,
                        compare_op: op,
                        right,
                    },
                });
            }
            return Ok(Expr::BinaryOp {
                left: Box::new(expr),
                op,
                right: Box::new(self.parse_sub_expression(precedence)?),
            });
        }

        match token.token {
            Token::Word(w) => match w.keyword {
                Keyword::Is => self.parse_is(expr),
                Keyword::At => {
                    self.expect_keywords(&[Keyword::Time, Keyword::Zone])?;
                    Ok(Expr::AtTimeZone {
                        timestamp: Box::new(expr),
                        time_zone: Box::new(self.parse_sub_expression(precedence)?),
                    })
                }
                Keyword::Not
                | Keyword::In
                | Keyword::Between
                | Keyword::Like
                | Keyword::Ilike
                | Keyword::Similar
                | Keyword::Regexp
                | Keyword::Rlike => {
                    self.prev_token();
                    let negated = self.parse_keyword(Keyword::Not);
                    if self.parse_keyword(Keyword::In) {
                        self.parse_in(expr, negated)
                    } else if self.parse_keyword(Keyword::Between) {
                        self.parse_between(expr, negated)
                    } else if self.parse_keyword(Keyword::Like) {
                        Ok(Expr::Like {
                            negated,
                            expr: Box::new(expr),
                            pattern: Box::new(self.parse_sub_expression(precedence::LIKE)?),
                            escape_char: self.parse_optional_escape_char()?,
                        })
                    } else if self.parse_keyword(Keyword::Ilike) {
                        Ok(Expr::ILike {
                            negated,
                            expr: Box::new(expr),
                            pattern: Box::new(self.parse_sub_expression(precedence::LIKE)?),
                            escape_char: self.parse_optional_escape_char()?,
                        })
                    } else if self.parse_keywords(&[Keyword::Similar, Keyword::To]) {
                        Ok(Expr::SimilarTo {
                            negated,
                            expr: Box::new(expr),
                            pattern: Box::new(self.parse_sub_expression(precedence::LIKE)?),
                            escape_char: self.parse_optional_escape_char()?,
                        })
                    } else if let Some(keyword) =
                        self.parse_one_of_keywords(&[Keyword::Regexp, Keyword::Rlike])
                    {
                        Ok(Expr::RLike {
                            negated,
                            expr: Box::new(expr),
                            pattern: Box::new(self.parse_sub_expression(precedence::LIKE)?),
                            regexp: keyword == Keyword::Regexp,
                        })
                    } else {
                        self.expected("IN, BETWEEN or a pattern operator", self.peek_token())
                    }
                }
                _ => self.expected("an infix operator", TokenWithLocation::new(Token::Word(w), token.location)),
            },
            Token::DoubleColon => Ok(Expr::Cast {
                kind: CastKind::Cast,
                expr: Box::new(expr),
                data_type: self.parse_data_type()?,
                format: None,
            }),
            Token::ExclamationMark => Ok(Expr::UnaryOp {
                op: UnaryOperator::PGPostfixFactorial,
                expr: Box::new(expr),
            }),
            Token::LeftBracket => self.parse_subscript(expr),
            Token::Colon => self.parse_json_access(expr),
            _ => self.expected("an infix operator", token),
        }
    }

    /// `OPERATOR(schema.op)`; `OPERATOR` is consumed and `(` is next.
    fn parse_pg_custom_operator(&mut self) -> Result<BinaryOperator, ParserError> {
        self.expect_token(&Token::LeftParen)?;
        let mut idents = Vec::new();
        loop {
            let next_token = self.next_token();
            match next_token.token {
                Token::Word(w) => idents.push(ident_of(w)),
                other => {
                    // the final path element is the operator's spelling
                    idents.push(Ident::new(other.to_string()));
                }
            }
            if !self.consume_token(&Token::Period) {
                break;
            }
        }
        self.expect_token(&Token::RightParen)?;
        Ok(BinaryOperator::PGCustomBinaryOperator(ObjectName(idents)))
    }

    fn parse_is(&mut self, expr: Expr) -> Result<Expr, ParserError> {
        let expr = Box::new(expr);
        if self.parse_keyword(Keyword::Null) {
            return Ok(Expr::IsNull(expr));
        }
        if self.parse_keywords(&[Keyword::Not, Keyword::Null]) {
            return Ok(Expr::IsNotNull(expr));
        }
        if self.parse_keyword(Keyword::True) {
            return Ok(Expr::IsTrue(expr));
        }
        if self.parse_keywords(&[Keyword::Not, Keyword::True]) {
            return Ok(Expr::IsNotTrue(expr));
        }
        if self.parse_keyword(Keyword::False) {
            return Ok(Expr::IsFalse(expr));
        }
        if self.parse_keywords(&[Keyword::Not, Keyword::False]) {
            return Ok(Expr::IsNotFalse(expr));
        }
        if self.parse_keyword(Keyword::Unknown) {
            return Ok(Expr::IsUnknown(expr));
        }
        if self.parse_keywords(&[Keyword::Not, Keyword::Unknown]) {
            return Ok(Expr::IsNotUnknown(expr));
        }
        if self.parse_keywords(&[Keyword::Distinct, Keyword::From]) {
            let other = self.parse_expr()?;
            return Ok(Expr::IsDistinctFrom(expr, Box::new(other)));
        }
        if self.parse_keywords(&[Keyword::Not, Keyword::Distinct, Keyword::From]) {
            let other = self.parse_expr()?;
            return Ok(Expr::IsNotDistinctFrom(expr, Box::new(other)));
        }
        self.expected(
            "[NOT] NULL, TRUE, FALSE, UNKNOWN or [NOT] DISTINCT FROM after IS",
            self.peek_token(),
        )
    }

    fn parse_in(&mut self, expr: Expr, negated: bool) -> Result<Expr, ParserError> {
        if self.parse_keyword(Keyword::Unnest) {
            self.expect_token(&Token::LeftParen)?;
            let array_expr = self.parse_expr()?;
            self.expect_token(&Token::RightParen)?;
            return Ok(Expr::InUnnest {
                expr: Box::new(expr),
                array_expr: Box::new(array_expr),
                negated,
            });
        }
        self.expect_token(&Token::LeftParen)?;
        if matches!(
            self.peek_token().token,
            Token::Word(crate::tokens::Word {
                keyword: Keyword::Select | Keyword::With,
                ..
            })
        ) {
            let subquery = self.parse_query()?;
            self.expect_token(&Token::RightParen)?;
            return Ok(Expr::InSubquery {
                expr: Box::new(expr),
                subquery,
                negated,
            });
        }
        if self.peek_token() == Token::RightParen {
            if !self.caps().supports_in_empty_list {
                return self.expected("an expression", self.peek_token());
            }
            self.next_token();
            return Ok(Expr::InList {
                expr: Box::new(expr),
                list: Vec::new(),
                negated,
            });
        }
        let list = self.parse_comma_separated(Parser::parse_expr)?;
        self.expect_token(&Token::RightParen)?;
        Ok(Expr::InList {
            expr: Box::new(expr),
            list,
            negated,
        })
    }

    fn parse_between(&mut self, expr: Expr, negated: bool) -> Result<Expr, ParserError> {
        let low = self.parse_sub_expression(precedence::BETWEEN)?;
        self.expect_keyword(Keyword::And)?;
        let high = self.parse_sub_expression(precedence::BETWEEN)?;
        Ok(Expr::Between {
            expr: Box::new(expr),
            negated,
            low: Box::new(low),
            high: Box::new(high),
        })
    }

    fn parse_optional_escape_char(&mut self) -> Result<Option<String>, ParserError> {
        if self.parse_keyword(Keyword::Escape) {
            Ok(Some(self.parse_literal_string()?))
        } else {
            Ok(None)
        }
    }

    /// `[..]` after an expression: one index, or a `lo:hi:stride` slice with
    /// every field optional. The opening bracket is consumed.
    pub fn parse_subscript(&mut self, expr: Expr) -> Result<Expr, ParserError> {
        let lower_bound = if matches!(
            self.peek_token().token,
            Token::Colon | Token::RightBracket
        ) {
            None
        } else {
            Some(self.parse_expr()?)
        };
        let subscript = if self.consume_token(&Token::Colon) {
            let upper_bound = if matches!(
                self.peek_token().token,
                Token::Colon | Token::RightBracket
            ) {
                None
            } else {
                Some(self.parse_expr()?)
            };
            let stride = if self.consume_token(&Token::Colon) {
                if self.peek_token() == Token::RightBracket {
                    None
                } else {
                    Some(self.parse_expr()?)
                }
            } else {
                None
            };
            Subscript::Slice {
                lower_bound,
                upper_bound,
                stride,
            }
        } else {
            match lower_bound {
                Some(index) => Subscript::Index { index },
                None => return self.expected("an array subscript", self.peek_token()),
            }
        };
        self.expect_token(&Token::RightBracket)?;
        Ok(Expr::Subscript {
            expr: Box::new(expr),
            subscript: Box::new(subscript),
        })
    }

    /// Path elements after a `:` following an expression; stops at the
    /// first token that cannot extend the path.
    fn parse_json_access(&mut self, expr: Expr) -> Result<Expr, ParserError> {
        let mut path = Vec::new();
        loop {
            let next_token = self.next_token();
            match next_token.token {
                Token::Word(w) => path.push(JsonPathElem::Dot {
                    key: w.value,
                    quoted: w.quote_style.is_some(),
                }),
                Token::DoubleQuotedString(s) => path.push(JsonPathElem::Dot {
                    key: s,
                    quoted: true,
                }),
                Token::Number(n, _) => path.push(JsonPathElem::Dot {
                    key: n,
                    quoted: false,
                }),
                _ => return self.expected("a json path element", next_token),
            }
            if self.consume_token(&Token::LeftBracket) {
                let key = self.parse_expr()?;
                self.expect_token(&Token::RightBracket)?;
                path.push(JsonPathElem::Bracket { key });
            }
            if !self.consume_token(&Token::Period) && !self.consume_token(&Token::Colon) {
                break;
            }
        }
        Ok(Expr::JsonAccess {
            value: Box::new(expr),
            path: JsonPath { path },
        })
    }

    /// `ALL`/`DISTINCT [ON (..)]` at the head of a SELECT.
    pub fn parse_all_or_distinct(&mut self) -> Result<Option<Distinct>, ParserError> {
        let all = self.parse_keyword(Keyword::All);
        let distinct = self.parse_keyword(Keyword::Distinct);
        if all && distinct {
            return parser_err!("Cannot specify both ALL and DISTINCT");
        }
        if !distinct {
            return Ok(None);
        }
        if self.parse_keyword(Keyword::All) {
            return parser_err!("Cannot specify both ALL and DISTINCT");
        }
        if self.parse_keyword(Keyword::On) {
            self.expect_token(&Token::LeftParen)?;
            let on = self.parse_comma_separated(Parser::parse_expr)?;
            self.expect_token(&Token::RightParen)?;
            return Ok(Some(Distinct::On(on)));
        }
        Ok(Some(Distinct::Distinct))
    }
}

fn keyword_to_field(keyword: Keyword) -> Option<DateTimeField> {
    let field = match keyword {
        Keyword::Year => DateTimeField::Year,
        Keyword::Month => DateTimeField::Month,
        Keyword::Week => DateTimeField::Week,
        Keyword::Day => DateTimeField::Day,
        Keyword::Date => DateTimeField::Date,
        Keyword::Dayofweek => DateTimeField::DayOfWeek,
        Keyword::Dayofyear => DateTimeField::DayOfYear,
        Keyword::Dow => DateTimeField::Dow,
        Keyword::Doy => DateTimeField::Doy,
        Keyword::Hour => DateTimeField::Hour,
        Keyword::Minute => DateTimeField::Minute,
        Keyword::Second => DateTimeField::Second,
        Keyword::Century => DateTimeField::Century,
        Keyword::Decade => DateTimeField::Decade,
        Keyword::Epoch => DateTimeField::Epoch,
        Keyword::Isodow => DateTimeField::Isodow,
        Keyword::Isoyear => DateTimeField::Isoyear,
        Keyword::Julian => DateTimeField::Julian,
        Keyword::Microsecond => DateTimeField::Microsecond,
        Keyword::Microseconds => DateTimeField::Microseconds,
        Keyword::Millenium => DateTimeField::Millenium,
        Keyword::Millennium => DateTimeField::Millennium,
        Keyword::Millisecond => DateTimeField::Millisecond,
        Keyword::Milliseconds => DateTimeField::Milliseconds,
        Keyword::Nanosecond => DateTimeField::Nanosecond,
        Keyword::Nanoseconds => DateTimeField::Nanoseconds,
        Keyword::Quarter => DateTimeField::Quarter,
        Keyword::Timezone => DateTimeField::Timezone,
        Keyword::TimezoneHour => DateTimeField::TimezoneHour,
        Keyword::TimezoneMinute => DateTimeField::TimezoneMinute,
        _ => return None,
    };
    Some(field)
}

fn root_of(mut id_parts: Vec<Ident>) -> Expr {
    if id_parts.len() == 1 {
        Expr::Identifier(id_parts.remove(0))
    } else {
        Expr::CompoundIdentifier(id_parts)
    }
}

fn is_comparison(op: &BinaryOperator) -> bool {
    matches!(
        op,
        BinaryOperator::Gt
            | BinaryOperator::Lt
            | BinaryOperator::GtEq
            | BinaryOperator::LtEq
            | BinaryOperator::Eq
            | BinaryOperator::NotEq
    )
}

impl From<Expr> for FunctionArgExpr {
    fn from(expr: Expr) -> Self {
        match expr {
            Expr::Wildcard => FunctionArgExpr::Wildcard,
            Expr::QualifiedWildcard(name) => FunctionArgExpr::QualifiedWildcard(name),
            expr => FunctionArgExpr::Expr(expr),
        }
    }
}
