//! The dialect interface: a descriptor of capability flags consulted by the
//! core grammar, plus a handful of override hooks dispatched virtually.
//!
//! Capability queries never go through the vtable: each dialect hands out a
//! `&'static DialectCapabilities` once and the parser reads plain bools.
//! Virtual dispatch is reserved for the hooks that genuinely replace a
//! production.

use std::fmt::Debug;

use crate::ast::ddl::ColumnOption;
use crate::ast::{Expr, Statement};
use crate::errors::ParserError;
use crate::parser::Parser;

/// Grammar toggles. One instance per dialect, with `'static` lifetime so the
/// parser can hold on to it for the whole parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialectCapabilities {
    /// Trailing commas in expression lists (`FROM t WHERE a IN (1, 2,)`).
    pub supports_trailing_commas: bool,
    /// Trailing comma after the last projection item.
    pub supports_projection_trailing_commas: bool,
    /// `agg(..) FILTER (WHERE ..)` after aggregate calls.
    pub supports_filter_during_aggregation: bool,
    /// `agg(x IGNORE NULLS)` inside the argument list.
    pub supports_window_function_null_treatment_arg: bool,
    /// Arbitrary expressions in `GROUP BY` (otherwise column references
    /// only).
    pub supports_group_by_expression: bool,
    /// `SUBSTRING(x FROM 1 FOR 2)` (otherwise the comma form only).
    pub supports_substring_from_for_expression: bool,
    /// `MAP {k: v}` literals.
    pub supports_map_literal_syntax: bool,
    /// `{'k': v}` dictionary literals.
    pub supports_dictionary_syntax: bool,
    /// `x -> x + 1` lambda expressions.
    pub supports_lambda_functions: bool,
    /// `fn(name = value)` named arguments.
    pub supports_named_function_args_with_eq_operator: bool,
    /// `SELECT * EXCEPT (..)` projection modifiers.
    pub supports_select_wildcard_except: bool,
    /// `WINDOW w AS other_window` (a bare name instead of a spec).
    pub supports_window_clause_named_window_reference: bool,
    /// `CONNECT BY` hierarchical queries, and `PRIOR` inside them.
    pub supports_connect_by: bool,
    /// `MATCH_RECOGNIZE` table factors.
    pub supports_match_recognize: bool,
    /// `x IN ()` with no list elements.
    pub supports_in_empty_list: bool,
    /// `SET (a, b) = (1, 2)`.
    pub supports_parenthesized_set_variables: bool,
    /// A modifier keyword after `BEGIN`/`START TRANSACTION`
    /// (`BEGIN DEFERRED`, ...).
    pub supports_start_transaction_modifier: bool,
    /// `SELECT alias = expr` projection aliasing.
    pub supports_equal_alias_assignment: bool,
    /// `TOP` before `DISTINCT`/`ALL` rather than after.
    pub supports_top_before_distinct: bool,
    /// `CREATE INDEX .. WITH (..)` storage parameters.
    pub supports_create_index_with_clause: bool,
    /// `ASC`/`DESC` directly inside a column definition.
    pub supports_ascdesc_in_column_definition: bool,
    /// `CONVERT(type, value)` rather than `CONVERT(value, type)`.
    pub convert_type_before_value: bool,
    /// `EXTRACT('year' FROM ..)` with a quoted field name.
    pub allow_extract_single_quotes: bool,
    /// Backslash escapes inside quoted strings.
    pub supports_string_literal_backslash_escape: bool,
    /// `'''..'''` and `"""..."""` strings (and their byte/raw forms).
    pub supports_triple_quoted_string: bool,
    /// `$tag$..$tag$` strings.
    pub supports_dollar_quoted_string: bool,
    /// The `col (+)` outer-join marker.
    pub supports_outer_join_operator: bool,
}

impl DialectCapabilities {
    /// The permissive ANSI-ish baseline every dialect starts from.
    pub const fn ansi() -> Self {
        DialectCapabilities {
            supports_trailing_commas: false,
            supports_projection_trailing_commas: false,
            supports_filter_during_aggregation: false,
            supports_window_function_null_treatment_arg: false,
            supports_group_by_expression: true,
            supports_substring_from_for_expression: true,
            supports_map_literal_syntax: false,
            supports_dictionary_syntax: false,
            supports_lambda_functions: false,
            supports_named_function_args_with_eq_operator: false,
            supports_select_wildcard_except: false,
            supports_window_clause_named_window_reference: false,
            supports_connect_by: false,
            supports_match_recognize: false,
            supports_in_empty_list: false,
            supports_parenthesized_set_variables: false,
            supports_start_transaction_modifier: false,
            supports_equal_alias_assignment: false,
            supports_top_before_distinct: false,
            supports_create_index_with_clause: false,
            supports_ascdesc_in_column_definition: false,
            convert_type_before_value: false,
            allow_extract_single_quotes: false,
            supports_string_literal_backslash_escape: false,
            supports_triple_quoted_string: false,
            supports_dollar_quoted_string: false,
            supports_outer_join_operator: false,
        }
    }
}

/// A SQL dialect.
///
/// Concrete dialects are zero-sized unit structs; the parser borrows one as
/// `&dyn Dialect` for the duration of a parse. Every hook has a `None`
/// default meaning "no override, use the core grammar".
pub trait Dialect: Debug {
    fn capabilities(&self) -> &'static DialectCapabilities;

    /// Whether `ch` can start an unquoted identifier.
    fn is_identifier_start(&self, ch: char) -> bool {
        ch.is_alphabetic() || ch == '_'
    }

    /// Whether `ch` can continue an unquoted identifier.
    fn is_identifier_part(&self, ch: char) -> bool {
        ch.is_alphanumeric() || ch == '_' || ch == '$'
    }

    /// Whether `ch` opens a quoted identifier (`"` by default).
    fn is_delimited_identifier_start(&self, ch: char) -> bool {
        ch == '"'
    }

    /// The closing quote matching an opening identifier quote.
    fn delimited_identifier_end(&self, open: char) -> char {
        match open {
            '[' => ']',
            other => other,
        }
    }

    /// Statement-level override, consulted before the core dispatch.
    fn parse_statement(&self, _parser: &mut Parser) -> Option<Result<Statement, ParserError>> {
        None
    }

    /// Prefix-expression override, consulted before the core `parse_prefix`.
    fn parse_prefix(&self, _parser: &mut Parser) -> Option<Result<Expr, ParserError>> {
        None
    }

    /// Infix-expression override, consulted before the core `parse_infix`.
    fn parse_infix(
        &self,
        _parser: &mut Parser,
        _expr: &Expr,
        _precedence: u8,
    ) -> Option<Result<Expr, ParserError>> {
        None
    }

    /// Column-option override inside column definitions.
    fn parse_column_option(
        &self,
        _parser: &mut Parser,
    ) -> Option<Result<ColumnOption, ParserError>> {
        None
    }

    /// Precedence override for the token at the cursor.
    fn get_next_precedence(&self, _parser: &Parser) -> Option<Result<u8, ParserError>> {
        None
    }
}
