//! The SQL type grammar's value model, dialect-parametric types included.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Ident, ObjectName};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DataType {
    /// `CHARACTER [(n [CHARACTERS|OCTETS])]`
    Character(Option<CharacterLength>),
    Char(Option<CharacterLength>),
    CharacterVarying(Option<CharacterLength>),
    CharVarying(Option<CharacterLength>),
    Varchar(Option<CharacterLength>),
    Nvarchar(Option<CharacterLength>),
    CharacterLargeObject(Option<u64>),
    CharLargeObject(Option<u64>),
    Clob(Option<u64>),
    Uuid,
    Binary(Option<u64>),
    Varbinary(Option<u64>),
    Blob(Option<u64>),
    Bytes(Option<u64>),
    Bytea,
    Numeric(ExactNumberInfo),
    Decimal(ExactNumberInfo),
    Dec(ExactNumberInfo),
    BigNumeric(ExactNumberInfo),
    BigDecimal(ExactNumberInfo),
    Float(Option<u64>),
    TinyInt(Option<u64>),
    TinyIntUnsigned(Option<u64>),
    SmallInt(Option<u64>),
    SmallIntUnsigned(Option<u64>),
    MediumInt(Option<u64>),
    MediumIntUnsigned(Option<u64>),
    Int(Option<u64>),
    IntUnsigned(Option<u64>),
    Integer(Option<u64>),
    IntegerUnsigned(Option<u64>),
    BigInt(Option<u64>),
    BigIntUnsigned(Option<u64>),
    Int2(Option<u64>),
    Int4(Option<u64>),
    Int8(Option<u64>),
    Int16,
    Int32,
    Int64,
    Int128,
    Int256,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    UInt128,
    UInt256,
    Float4,
    Float8,
    Float32,
    Float64,
    Real,
    Double,
    DoublePrecision,
    Bool,
    Boolean,
    Date,
    Date32,
    Time(Option<u64>, TimezoneInfo),
    Datetime(Option<u64>),
    /// `DATETIME64(precision[, 'tz'])`
    Datetime64(u64, Option<String>),
    Timestamp(Option<u64>, TimezoneInfo),
    Interval,
    Json,
    Jsonb,
    Regclass,
    Text,
    /// ClickHouse `String`, optionally `String(n)` on other engines.
    String(Option<u64>),
    /// `FIXEDSTRING(n)`
    FixedString(u64),
    /// `ARRAY<T>`, `T[]`, `T[n]` or `Array(T)`.
    Array(ArrayElemTypeDef),
    /// `MAP<K, V>` / `Map(K, V)`
    Map(Box<DataType>, Box<DataType>),
    /// `TUPLE(a T1, b T2, ..)`
    Tuple(Vec<StructField>),
    /// `NULLABLE(T)`
    Nullable(Box<DataType>),
    /// `LOWCARDINALITY(T)`
    LowCardinality(Box<DataType>),
    /// `STRUCT<a T1, b T2>` / `STRUCT(a T1)`
    Struct(Vec<StructField>, StructBracketKind),
    /// DuckDb `UNION(a T1, b T2)`
    Union(Vec<UnionField>),
    Enum(Vec<String>),
    Set(Vec<String>),
    /// Anything else: `name` or `name(modifier, ..)`.
    Custom(ObjectName, Vec<String>),
    /// No type given where one may be elided (e.g. `CREATE TABLE t (a)` in
    /// SQLite).
    Unspecified,
}

/// How a struct type was bracketed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StructBracketKind {
    Parentheses,
    AngleBrackets,
}

/// The element spelling of an array type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ArrayElemTypeDef {
    /// `ARRAY`
    None,
    /// `ARRAY<INT>`
    AngleBracket(Box<DataType>),
    /// `INT[]` or `INT[3]`
    SquareBracket(Box<DataType>, Option<u64>),
    /// `Array(Int64)`
    Parenthesis(Box<DataType>),
}

/// Precision/scale of an exact number type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ExactNumberInfo {
    None,
    Precision(u64),
    PrecisionAndScale(u64, u64),
}

/// The `WITH/WITHOUT TIME ZONE` suffix (or `TZ` spelling) of a time type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TimezoneInfo {
    None,
    WithTimeZone,
    WithoutTimeZone,
    Tz,
}

/// `CHAR(10)` / `CHAR(10 CHARACTERS)` / `VARCHAR(MAX)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CharacterLength {
    IntegerLength {
        length: u64,
        unit: Option<CharLengthUnits>,
    },
    Max,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CharLengthUnits {
    Characters,
    Octets,
}

/// One field of a struct or tuple type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StructField {
    pub field_name: Option<Ident>,
    pub field_type: Box<DataType>,
}

/// One alternative of a DuckDb union type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnionField {
    pub field_name: Ident,
    pub field_type: Box<DataType>,
}
