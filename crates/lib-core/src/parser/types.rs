//! The SQL type grammar, dialect-parametric types included.

use crate::ast::*;
use crate::errors::ParserError;
use crate::keywords::Keyword;
use crate::parser::Parser;
use crate::tokens::Token;

impl<'a> Parser<'a> {
    pub fn parse_data_type(&mut self) -> Result<DataType, ParserError> {
        let next_token = self.next_token();
        let mut data_type = match next_token.token {
            Token::Word(w) if w.quote_style.is_none() => match w.keyword {
                Keyword::Boolean => DataType::Boolean,
                Keyword::Bool => DataType::Bool,
                Keyword::Float => DataType::Float(self.parse_optional_precision()?),
                Keyword::Real => DataType::Real,
                Keyword::Float4 => DataType::Float4,
                Keyword::Float8 => DataType::Float8,
                Keyword::Float32 => DataType::Float32,
                Keyword::Float64 => DataType::Float64,
                Keyword::Double => {
                    if self.parse_keyword(Keyword::Precision) {
                        DataType::DoublePrecision
                    } else {
                        DataType::Double
                    }
                }
                Keyword::Tinyint => {
                    let precision = self.parse_optional_precision()?;
                    if self.parse_keyword(Keyword::Unsigned) {
                        DataType::TinyIntUnsigned(precision)
                    } else {
                        DataType::TinyInt(precision)
                    }
                }
                Keyword::Smallint => {
                    let precision = self.parse_optional_precision()?;
                    if self.parse_keyword(Keyword::Unsigned) {
                        DataType::SmallIntUnsigned(precision)
                    } else {
                        DataType::SmallInt(precision)
                    }
                }
                Keyword::Mediumint => {
                    let precision = self.parse_optional_precision()?;
                    if self.parse_keyword(Keyword::Unsigned) {
                        DataType::MediumIntUnsigned(precision)
                    } else {
                        DataType::MediumInt(precision)
                    }
                }
                Keyword::Int => {
                    let precision = self.parse_optional_precision()?;
                    if self.parse_keyword(Keyword::Unsigned) {
                        DataType::IntUnsigned(precision)
                    } else {
                        DataType::Int(precision)
                    }
                }
                Keyword::Integer => {
                    let precision = self.parse_optional_precision()?;
                    if self.parse_keyword(Keyword::Unsigned) {
                        DataType::IntegerUnsigned(precision)
                    } else {
                        DataType::Integer(precision)
                    }
                }
                Keyword::Bigint => {
                    let precision = self.parse_optional_precision()?;
                    if self.parse_keyword(Keyword::Unsigned) {
                        DataType::BigIntUnsigned(precision)
                    } else {
                        DataType::BigInt(precision)
                    }
                }
                Keyword::Int2 => DataType::Int2(self.parse_optional_precision()?),
                Keyword::Int4 => DataType::Int4(self.parse_optional_precision()?),
                Keyword::Int8 => DataType::Int8(self.parse_optional_precision()?),
                Keyword::Int16 => DataType::Int16,
                Keyword::Int32 => DataType::Int32,
                Keyword::Int64 => DataType::Int64,
                Keyword::Int128 => DataType::Int128,
                Keyword::Int256 => DataType::Int256,
                Keyword::Uint8 => DataType::UInt8,
                Keyword::Uint16 => DataType::UInt16,
                Keyword::Uint32 => DataType::UInt32,
                Keyword::Uint64 => DataType::UInt64,
                Keyword::Uint128 => DataType::UInt128,
                Keyword::Uint256 => DataType::UInt256,
                Keyword::Varchar => DataType::Varchar(self.parse_optional_character_length()?),
                Keyword::Nvarchar => DataType::Nvarchar(self.parse_optional_character_length()?),
                Keyword::Character => {
                    if self.parse_keyword(Keyword::Varying) {
                        DataType::CharacterVarying(self.parse_optional_character_length()?)
                    } else if self.parse_keywords(&[Keyword::Large, Keyword::Object]) {
                        DataType::CharacterLargeObject(self.parse_optional_precision()?)
                    } else {
                        DataType::Character(self.parse_optional_character_length()?)
                    }
                }
                Keyword::Char => {
                    if self.parse_keyword(Keyword::Varying) {
                        DataType::CharVarying(self.parse_optional_character_length()?)
                    } else if self.parse_keywords(&[Keyword::Large, Keyword::Object]) {
                        DataType::CharLargeObject(self.parse_optional_precision()?)
                    } else {
                        DataType::Char(self.parse_optional_character_length()?)
                    }
                }
                Keyword::Clob => DataType::Clob(self.parse_optional_precision()?),
                Keyword::Binary => DataType::Binary(self.parse_optional_precision()?),
                Keyword::Varbinary => DataType::Varbinary(self.parse_optional_precision()?),
                Keyword::Blob => DataType::Blob(self.parse_optional_precision()?),
                Keyword::Bytes => DataType::Bytes(self.parse_optional_precision()?),
                Keyword::Bytea => DataType::Bytea,
                Keyword::Uuid => DataType::Uuid,
                Keyword::Date => DataType::Date,
                Keyword::Date32 => DataType::Date32,
                Keyword::Datetime => DataType::Datetime(self.parse_optional_precision()?),
                Keyword::Datetime64 => {
                    self.expect_token(&Token::LeftParen)?;
                    let precision = self.parse_literal_uint()?;
                    let time_zone = if self.consume_token(&Token::Comma) {
                        Some(self.parse_literal_string()?)
                    } else {
                        None
                    };
                    self.expect_token(&Token::RightParen)?;
                    DataType::Datetime64(precision, time_zone)
                }
                Keyword::Time => {
                    let precision = self.parse_optional_precision()?;
                    DataType::Time(precision, self.parse_timezone_info()?)
                }
                Keyword::Timetz => {
                    DataType::Time(self.parse_optional_precision()?, TimezoneInfo::Tz)
                }
                Keyword::Timestamp => {
                    let precision = self.parse_optional_precision()?;
                    DataType::Timestamp(precision, self.parse_timezone_info()?)
                }
                Keyword::Timestamptz => {
                    DataType::Timestamp(self.parse_optional_precision()?, TimezoneInfo::Tz)
                }
                Keyword::Interval => DataType::Interval,
                Keyword::Json => DataType::Json,
                Keyword::Jsonb => DataType::Jsonb,
                Keyword::Regclass => DataType::Regclass,
                Keyword::Text => DataType::Text,
                Keyword::String => DataType::String(self.parse_optional_precision()?),
                Keyword::Fixedstring => {
                    self.expect_token(&Token::LeftParen)?;
                    let length = self.parse_literal_uint()?;
                    self.expect_token(&Token::RightParen)?;
                    DataType::FixedString(length)
                }
                Keyword::Numeric => {
                    DataType::Numeric(self.parse_exact_number_optional_precision_scale()?)
                }
                Keyword::Decimal => {
                    DataType::Decimal(self.parse_exact_number_optional_precision_scale()?)
                }
                Keyword::Dec => DataType::Dec(self.parse_exact_number_optional_precision_scale()?),
                Keyword::Bignumeric => {
                    DataType::BigNumeric(self.parse_exact_number_optional_precision_scale()?)
                }
                Keyword::Bigdecimal => {
                    DataType::BigDecimal(self.parse_exact_number_optional_precision_scale()?)
                }
                Keyword::Enum => DataType::Enum(self.parse_string_values()?),
                Keyword::Set => DataType::Set(self.parse_string_values()?),
                Keyword::Array => {
                    if self.consume_token(&Token::Lt) {
                        let inner = self.parse_data_type()?;
                        self.expect_closing_angle_bracket()?;
                        DataType::Array(ArrayElemTypeDef::AngleBracket(Box::new(inner)))
                    } else if self.consume_token(&Token::LeftParen) {
                        let inner = self.parse_data_type()?;
                        self.expect_token(&Token::RightParen)?;
                        DataType::Array(ArrayElemTypeDef::Parenthesis(Box::new(inner)))
                    } else {
                        DataType::Array(ArrayElemTypeDef::None)
                    }
                }
                Keyword::Map => {
                    if self.consume_token(&Token::Lt) {
                        let key = self.parse_data_type()?;
                        self.expect_token(&Token::Comma)?;
                        let value = self.parse_data_type()?;
                        self.expect_closing_angle_bracket()?;
                        DataType::Map(Box::new(key), Box::new(value))
                    } else {
                        self.expect_token(&Token::LeftParen)?;
                        let key = self.parse_data_type()?;
                        self.expect_token(&Token::Comma)?;
                        let value = self.parse_data_type()?;
                        self.expect_token(&Token::RightParen)?;
                        DataType::Map(Box::new(key), Box::new(value))
                    }
                }
                Keyword::Tuple => {
                    self.expect_token(&Token::LeftParen)?;
                    let fields = self.parse_comma_separated(Parser::parse_struct_field)?;
                    self.expect_token(&Token::RightParen)?;
                    DataType::Tuple(fields)
                }
                Keyword::Nullable => {
                    self.expect_token(&Token::LeftParen)?;
                    let inner = self.parse_data_type()?;
                    self.expect_token(&Token::RightParen)?;
                    DataType::Nullable(Box::new(inner))
                }
                Keyword::Lowcardinality => {
                    self.expect_token(&Token::LeftParen)?;
                    let inner = self.parse_data_type()?;
                    self.expect_token(&Token::RightParen)?;
                    DataType::LowCardinality(Box::new(inner))
                }
                Keyword::Struct => {
                    if self.consume_token(&Token::Lt) {
                        let fields = self.parse_comma_separated(Parser::parse_struct_field)?;
                        self.expect_closing_angle_bracket()?;
                        DataType::Struct(fields, StructBracketKind::AngleBrackets)
                    } else {
                        self.expect_token(&Token::LeftParen)?;
                        let fields = self.parse_comma_separated(Parser::parse_struct_field)?;
                        self.expect_token(&Token::RightParen)?;
                        DataType::Struct(fields, StructBracketKind::Parentheses)
                    }
                }
                Keyword::Union => {
                    self.expect_token(&Token::LeftParen)?;
                    let fields = self.parse_comma_separated(|p| {
                        let field_name = p.parse_identifier()?;
                        let field_type = Box::new(p.parse_data_type()?);
                        Ok(UnionField {
                            field_name,
                            field_type,
                        })
                    })?;
                    self.expect_token(&Token::RightParen)?;
                    DataType::Union(fields)
                }
                _ => {
                    self.prev_token();
                    let name = self.parse_object_name()?;
                    let modifiers = self.parse_optional_type_modifiers()?;
                    DataType::Custom(name, modifiers)
                }
            },
            _ => return self.expected("a data type name", next_token),
        };

        // postfix array notation: `INT[]`, `INT[3]`, `INT[][]`
        while self.consume_token(&Token::LeftBracket) {
            let size = match self.peek_token().token {
                Token::Number(..) => Some(self.parse_literal_uint()?),
                _ => None,
            };
            self.expect_token(&Token::RightBracket)?;
            data_type = DataType::Array(ArrayElemTypeDef::SquareBracket(Box::new(data_type), size));
        }
        Ok(data_type)
    }

    /// One field of a struct/tuple type: `name type` or a bare type.
    pub fn parse_struct_field(&mut self) -> Result<StructField, ParserError> {
        let named = self.maybe_parse(|p| {
            let name = p.parse_identifier()?;
            let field_type = Box::new(p.parse_data_type()?);
            Ok(StructField {
                field_name: Some(name),
                field_type,
            })
        })?;
        match named {
            Some(field) => Ok(field),
            None => Ok(StructField {
                field_name: None,
                field_type: Box::new(self.parse_data_type()?),
            }),
        }
    }

    /// `WITH TIME ZONE` / `WITHOUT TIME ZONE`, if present.
    fn parse_timezone_info(&mut self) -> Result<TimezoneInfo, ParserError> {
        if self.parse_keywords(&[Keyword::With, Keyword::Time, Keyword::Zone]) {
            Ok(TimezoneInfo::WithTimeZone)
        } else if self.parse_keywords(&[Keyword::Without, Keyword::Time, Keyword::Zone]) {
            Ok(TimezoneInfo::WithoutTimeZone)
        } else {
            Ok(TimezoneInfo::None)
        }
    }

    pub fn parse_optional_precision(&mut self) -> Result<Option<u64>, ParserError> {
        if self.consume_token(&Token::LeftParen) {
            let precision = self.parse_literal_uint()?;
            self.expect_token(&Token::RightParen)?;
            Ok(Some(precision))
        } else {
            Ok(None)
        }
    }

    pub fn parse_optional_character_length(
        &mut self,
    ) -> Result<Option<CharacterLength>, ParserError> {
        if !self.consume_token(&Token::LeftParen) {
            return Ok(None);
        }
        let length = if self.parse_keyword(Keyword::Max) {
            CharacterLength::Max
        } else {
            let length = self.parse_literal_uint()?;
            let unit = if self.parse_keyword(Keyword::Characters) {
                Some(CharLengthUnits::Characters)
            } else if self.parse_keyword(Keyword::Octets) {
                Some(CharLengthUnits::Octets)
            } else {
                None
            };
            CharacterLength::IntegerLength { length, unit }
        };
        self.expect_token(&Token::RightParen)?;
        Ok(Some(length))
    }

    pub fn parse_exact_number_optional_precision_scale(
        &mut self,
    ) -> Result<ExactNumberInfo, ParserError> {
        if !self.consume_token(&Token::LeftParen) {
            return Ok(ExactNumberInfo::None);
        }
        let precision = self.parse_literal_uint()?;
        let info = if self.consume_token(&Token::Comma) {
            ExactNumberInfo::PrecisionAndScale(precision, self.parse_literal_uint()?)
        } else {
            ExactNumberInfo::Precision(precision)
        };
        self.expect_token(&Token::RightParen)?;
        Ok(info)
    }

    fn parse_string_values(&mut self) -> Result<Vec<String>, ParserError> {
        self.expect_token(&Token::LeftParen)?;
        let mut values = Vec::new();
        loop {
            let next_token = self.next_token();
            match next_token.token {
                Token::SingleQuotedString(value) => values.push(value),
                _ => return self.expected("a string", next_token),
            }
            let next_token = self.next_token();
            match next_token.token {
                Token::Comma => (),
                Token::RightParen => break,
                _ => return self.expected(", or )", next_token),
            }
        }
        Ok(values)
    }

    fn parse_optional_type_modifiers(&mut self) -> Result<Vec<String>, ParserError> {
        if !self.consume_token(&Token::LeftParen) {
            return Ok(Vec::new());
        }
        let mut modifiers = Vec::new();
        loop {
            let next_token = self.next_token();
            match next_token.token {
                Token::Word(w) => modifiers.push(w.value),
                Token::Number(n, _) => modifiers.push(n),
                Token::SingleQuotedString(s) => modifiers.push(s),
                _ => return self.expected("a type modifier", next_token),
            }
            let next_token = self.next_token();
            match next_token.token {
                Token::Comma => (),
                Token::RightParen => break,
                _ => return self.expected(", or )", next_token),
            }
        }
        Ok(modifiers)
    }

    /// Closes a `<..>` type argument list. `>>` counts as two closers, so
    /// nested generics like `ARRAY<STRUCT<INT64>>` terminate correctly.
    fn expect_closing_angle_bracket(&mut self) -> Result<(), ParserError> {
        let mut index = self.index;
        while self
            .tokens
            .get(index)
            .is_some_and(|t| t.token.is_whitespace())
        {
            index += 1;
        }
        match self.tokens.get(index).map(|t| &t.token) {
            Some(Token::Gt) => {
                self.next_token();
                Ok(())
            }
            Some(Token::ShiftRight) => {
                self.tokens[index].token = Token::Gt;
                Ok(())
            }
            _ => self.expected(">", self.peek_token()),
        }
    }
}
