//! Unary and binary operators.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::ObjectName;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnaryOperator {
    Plus,
    Minus,
    Not,
    /// `~` (PostgreSQL bitwise not)
    PGBitwiseNot,
    /// `|/`
    PGSquareRoot,
    /// `||/`
    PGCubeRoot,
    /// postfix `!`
    PGPostfixFactorial,
    /// prefix `!!`
    PGPrefixFactorial,
    /// `@`
    PGAbs,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinaryOperator {
    Plus,
    Minus,
    Multiply,
    Divide,
    Modulo,
    StringConcat,
    Gt,
    Lt,
    GtEq,
    LtEq,
    /// `<=>`
    Spaceship,
    Eq,
    NotEq,
    And,
    Or,
    Xor,
    BitwiseOr,
    BitwiseAnd,
    BitwiseXor,
    /// `//`
    DuckIntegerDivide,
    /// MySQL `DIV`
    MyIntegerDivide,
    /// `#` (PostgreSQL xor)
    PGBitwiseXor,
    /// `<<`
    PGBitwiseShiftLeft,
    /// `>>`
    PGBitwiseShiftRight,
    /// `&&`
    PGOverlap,
    /// `~`
    PGRegexMatch,
    /// `~*`
    PGRegexIMatch,
    /// `!~`
    PGRegexNotMatch,
    /// `!~*`
    PGRegexNotIMatch,
    /// `->`
    Arrow,
    /// `->>`
    LongArrow,
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
    /// `OPERATOR(schema.op)`
    PGCustomBinaryOperator(ObjectName),
}
