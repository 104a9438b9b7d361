//! Core engine of the squill SQL parser: token model, lexer, keyword table,
//! dialect interface, AST and the hand-written Pratt parser.
//!
//! Most users want the `squill-lib` facade crate instead; this crate is the
//! machinery it is built from.

pub mod ast;
pub mod dialects;
pub mod errors;
pub mod keywords;
pub mod lexer;
pub mod parser;
pub mod tokens;
