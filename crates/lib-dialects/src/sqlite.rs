use squill_lib_core::ast::ddl::{ColumnOption, ConflictResolution};
use squill_lib_core::dialects::{Dialect, DialectCapabilities};
use squill_lib_core::errors::ParserError;
use squill_lib_core::keywords::Keyword;
use squill_lib_core::parser::Parser;

/// [SQLite](https://www.sqlite.org/)
#[derive(Debug, Default)]
pub struct SQLiteDialect;

static CAPS: DialectCapabilities = DialectCapabilities {
    supports_in_empty_list: true,
    supports_start_transaction_modifier: true,
    supports_ascdesc_in_column_definition: true,
    ..DialectCapabilities::ansi()
};

impl Dialect for SQLiteDialect {
    fn capabilities(&self) -> &'static DialectCapabilities {
        &CAPS
    }

    // See https://www.sqlite.org/lang_keywords.html
    fn is_delimited_identifier_start(&self, ch: char) -> bool {
        ch == '"' || ch == '`' || ch == '['
    }

    fn is_identifier_start(&self, ch: char) -> bool {
        ch.is_alphabetic() || ch == '_' || ch == '$'
    }

    /// The conflict clause on column constraints:
    /// `.. ON CONFLICT {ROLLBACK|ABORT|FAIL|IGNORE|REPLACE}`.
    fn parse_column_option(
        &self,
        parser: &mut Parser,
    ) -> Option<Result<ColumnOption, ParserError>> {
        if !parser.parse_keywords(&[Keyword::On, Keyword::Conflict]) {
            return None;
        }
        let resolution = parser
            .expect_one_of_keywords(&[
                Keyword::Rollback,
                Keyword::Abort,
                Keyword::Fail,
                Keyword::Ignore,
                Keyword::Replace,
            ])
            .map(|keyword| match keyword {
                Keyword::Rollback => ConflictResolution::Rollback,
                Keyword::Abort => ConflictResolution::Abort,
                Keyword::Fail => ConflictResolution::Fail,
                Keyword::Ignore => ConflictResolution::Ignore,
                _ => ConflictResolution::Replace,
            })
            .map(ColumnOption::OnConflict);
        Some(resolution)
    }
}
