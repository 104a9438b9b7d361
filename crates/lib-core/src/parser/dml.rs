//! `INSERT`, `UPDATE`, `DELETE`, `MERGE` and `COPY`.

use crate::ast::*;
use crate::errors::ParserError;
use crate::keywords::Keyword;
use crate::parser::{IsOptional, Parser};
use crate::parser_err;
use crate::tokens::Token;

impl<'a> Parser<'a> {
    /// `INSERT`/`REPLACE` is already consumed; MySQL `REPLACE INTO` re-uses
    /// this with `replace_into` set.
    pub fn parse_insert(&mut self, replace_into: bool) -> Result<Statement, ParserError> {
        let or = if replace_into {
            None
        } else if self.parse_keyword(Keyword::Or) {
            Some(
                match self.expect_one_of_keywords(&[
                    Keyword::Replace,
                    Keyword::Rollback,
                    Keyword::Abort,
                    Keyword::Fail,
                    Keyword::Ignore,
                ])? {
                    Keyword::Replace => SqliteOnConflict::Replace,
                    Keyword::Rollback => SqliteOnConflict::Rollback,
                    Keyword::Abort => SqliteOnConflict::Abort,
                    Keyword::Fail => SqliteOnConflict::Fail,
                    _ => SqliteOnConflict::Ignore,
                },
            )
        } else {
            None
        };

        let priority = self
            .parse_one_of_keywords(&[
                Keyword::LowPriority,
                Keyword::Delayed,
                Keyword::HighPriority,
            ])
            .map(|keyword| match keyword {
                Keyword::LowPriority => MysqlInsertPriority::LowPriority,
                Keyword::Delayed => MysqlInsertPriority::Delayed,
                _ => MysqlInsertPriority::HighPriority,
            });

        let ignore = self.parse_keyword(Keyword::Ignore);
        let into = self.parse_keyword(Keyword::Into);
        let overwrite = self.parse_keyword(Keyword::Overwrite);

        // Hive `INSERT OVERWRITE [LOCAL] DIRECTORY '..' .. query`; the
        // two-keyword form is matched atomically so a table named `local`
        // stays reachable
        let local_directory = self.parse_keywords(&[Keyword::Local, Keyword::Directory]);
        if local_directory || self.parse_keyword(Keyword::Directory) {
            let path = self.parse_literal_string()?;
            let file_format = if self.parse_keywords(&[Keyword::Stored, Keyword::As]) {
                Some(self.parse_file_format()?)
            } else {
                None
            };
            let source = self.parse_query()?;
            return Ok(Statement::Directory {
                overwrite,
                local: local_directory,
                path,
                file_format,
                source,
            });
        }

        let _ = self.parse_keyword(Keyword::Table);
        let table_name = self.parse_object_name()?;

        let insert_alias = if self.parse_keyword(Keyword::As) {
            let row_alias = self.parse_object_name()?;
            let col_aliases = if self.peek_token() == Token::LeftParen {
                Some(self.parse_parenthesized_column_list(IsOptional::Mandatory, false)?)
            } else {
                None
            };
            Some(InsertAliases {
                row_alias,
                col_aliases,
            })
        } else {
            None
        };

        if self.parse_keywords(&[Keyword::Default, Keyword::Values]) {
            return Ok(Statement::Insert(Insert {
                or,
                ignore,
                into,
                table_name,
                insert_alias,
                columns: Vec::new(),
                overwrite,
                source: None,
                partitioned: None,
                after_columns: Vec::new(),
                on: None,
                returning: None,
                replace_into,
                priority,
            }));
        }

        let columns = self.parse_parenthesized_column_list(IsOptional::Optional, false)?;
        let partitioned = if self.parse_keyword(Keyword::Partition) {
            self.expect_token(&Token::LeftParen)?;
            let partitioned = self.parse_comma_separated(Parser::parse_expr)?;
            self.expect_token(&Token::RightParen)?;
            Some(partitioned)
        } else {
            None
        };
        // Hive allows a second column list after PARTITION
        let after_columns = self.parse_parenthesized_column_list(IsOptional::Optional, false)?;

        let source = Some(self.parse_query()?);

        let on = if self.parse_keyword(Keyword::On) {
            if self.parse_keyword(Keyword::Conflict) {
                let conflict_target =
                    if self.parse_keywords(&[Keyword::On, Keyword::Constraint]) {
                        Some(ConflictTarget::OnConstraint(self.parse_object_name()?))
                    } else if self.peek_token() == Token::LeftParen {
                        Some(ConflictTarget::Columns(
                            self.parse_parenthesized_column_list(IsOptional::Mandatory, false)?,
                        ))
                    } else {
                        None
                    };
                self.expect_keyword(Keyword::Do)?;
                let action = if self.parse_keyword(Keyword::Nothing) {
                    OnConflictAction::DoNothing
                } else {
                    self.expect_keyword(Keyword::Update)?;
                    self.expect_keyword(Keyword::Set)?;
                    let assignments = self.parse_comma_separated(Parser::parse_assignment)?;
                    let selection = if self.parse_keyword(Keyword::Where) {
                        Some(self.parse_expr()?)
                    } else {
                        None
                    };
                    OnConflictAction::DoUpdate(DoUpdate {
                        assignments,
                        selection,
                    })
                };
                Some(OnInsert::OnConflict(OnConflict {
                    conflict_target,
                    action,
                }))
            } else {
                self.expect_keywords(&[Keyword::Duplicate, Keyword::Key, Keyword::Update])?;
                Some(OnInsert::DuplicateKeyUpdate(
                    self.parse_comma_separated(Parser::parse_assignment)?,
                ))
            }
        } else {
            None
        };

        let returning = if self.parse_keyword(Keyword::Returning) {
            Some(self.parse_projection()?)
        } else {
            None
        };

        Ok(Statement::Insert(Insert {
            or,
            ignore,
            into,
            table_name,
            insert_alias,
            columns,
            overwrite,
            source,
            partitioned,
            after_columns,
            on,
            returning,
            replace_into,
            priority,
        }))
    }

    pub fn parse_update(&mut self) -> Result<Statement, ParserError> {
        let table = self.parse_table_and_joins()?;
        self.expect_keyword(Keyword::Set)?;
        let assignments = self.parse_comma_separated(Parser::parse_assignment)?;
        let from = if self.parse_keyword(Keyword::From) {
            Some(self.parse_table_and_joins()?)
        } else {
            None
        };
        let selection = if self.parse_keyword(Keyword::Where) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        let returning = if self.parse_keyword(Keyword::Returning) {
            Some(self.parse_projection()?)
        } else {
            None
        };
        Ok(Statement::Update {
            table,
            assignments,
            from,
            selection,
            returning,
        })
    }

    /// One `target = value` of a SET list; the target may be a
    /// parenthesised column tuple.
    pub fn parse_assignment(&mut self) -> Result<Assignment, ParserError> {
        let target = if self.peek_token() == Token::LeftParen {
            let names =
                self.parse_parenthesized(|p| p.parse_comma_separated(Parser::parse_object_name))?;
            AssignmentTarget::Tuple(names)
        } else {
            AssignmentTarget::ColumnName(self.parse_object_name()?)
        };
        self.expect_token(&Token::Eq)?;
        let value = self.parse_expr()?;
        Ok(Assignment { target, value })
    }

    pub fn parse_delete(&mut self) -> Result<Statement, ParserError> {
        let (tables, from) = if self.parse_keyword(Keyword::From) {
            (
                Vec::new(),
                FromTable::WithFromKeyword(
                    self.parse_comma_separated(Parser::parse_table_and_joins)?,
                ),
            )
        } else {
            // `DELETE t1, t2 FROM ..`, or `DELETE t WHERE ..` with the FROM
            // keyword elided
            let relations = self.parse_comma_separated(Parser::parse_table_and_joins)?;
            if self.parse_keyword(Keyword::From) {
                let mut tables = Vec::new();
                for relation in relations {
                    match relation {
                        TableWithJoins {
                            relation: TableFactor::Table { name, .. },
                            joins,
                        } if joins.is_empty() => tables.push(name),
                        _ => {
                            return parser_err!(
                                "Expected table names before FROM in a multi-table DELETE"
                            );
                        }
                    }
                }
                (
                    tables,
                    FromTable::WithFromKeyword(
                        self.parse_comma_separated(Parser::parse_table_and_joins)?,
                    ),
                )
            } else {
                (Vec::new(), FromTable::WithoutKeyword(relations))
            }
        };

        let using = if self.parse_keyword(Keyword::Using) {
            Some(self.parse_comma_separated(Parser::parse_table_and_joins)?)
        } else {
            None
        };
        let selection = if self.parse_keyword(Keyword::Where) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        let returning = if self.parse_keyword(Keyword::Returning) {
            Some(self.parse_projection()?)
        } else {
            None
        };
        let order_by = if self.parse_keywords(&[Keyword::Order, Keyword::By]) {
            self.parse_comma_separated(Parser::parse_order_by_expr)?
        } else {
            Vec::new()
        };
        let limit = if self.parse_keyword(Keyword::Limit) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        Ok(Statement::Delete(Delete {
            tables,
            from,
            using,
            selection,
            returning,
            order_by,
            limit,
        }))
    }

    pub fn parse_merge(&mut self) -> Result<Statement, ParserError> {
        let into = self.parse_keyword(Keyword::Into);
        let table = self.parse_table_factor()?;
        self.expect_keyword(Keyword::Using)?;
        let source = self.parse_table_factor()?;
        self.expect_keyword(Keyword::On)?;
        let on = self.parse_expr()?;
        let clauses = self.parse_merge_clauses()?;
        Ok(Statement::Merge {
            into,
            table,
            source,
            on: Box::new(on),
            clauses,
        })
    }

    fn parse_merge_clauses(&mut self) -> Result<Vec<MergeClause>, ParserError> {
        let mut clauses = Vec::new();
        loop {
            if !self.parse_keyword(Keyword::When) {
                break;
            }
            let not_matched = self.parse_keyword(Keyword::Not);
            self.expect_keyword(Keyword::Matched)?;
            let clause_kind = if not_matched {
                if self.parse_keywords(&[Keyword::By, Keyword::Source]) {
                    MergeClauseKind::NotMatchedBySource
                } else if self.parse_keywords(&[Keyword::By, Keyword::Target]) {
                    MergeClauseKind::NotMatchedByTarget
                } else {
                    MergeClauseKind::NotMatched
                }
            } else {
                MergeClauseKind::Matched
            };
            let predicate = if self.parse_keyword(Keyword::And) {
                Some(self.parse_expr()?)
            } else {
                None
            };
            self.expect_keyword(Keyword::Then)?;

            // clauses matching on the absence of a target row can only
            // insert; the others can only update or delete
            let inserting = matches!(
                clause_kind,
                MergeClauseKind::NotMatched | MergeClauseKind::NotMatchedByTarget
            );
            let action = match self.expect_one_of_keywords(&[
                Keyword::Update,
                Keyword::Delete,
                Keyword::Insert,
            ])? {
                Keyword::Update => {
                    if inserting {
                        return parser_err!(
                            "UPDATE is not allowed in a NOT MATCHED merge clause"
                        );
                    }
                    self.expect_keyword(Keyword::Set)?;
                    MergeAction::Update {
                        assignments: self.parse_comma_separated(Parser::parse_assignment)?,
                    }
                }
                Keyword::Delete => {
                    if inserting {
                        return parser_err!(
                            "DELETE is not allowed in a NOT MATCHED merge clause"
                        );
                    }
                    MergeAction::Delete
                }
                _ => {
                    if !inserting {
                        return parser_err!("INSERT is not allowed in a MATCHED merge clause");
                    }
                    let columns =
                        self.parse_parenthesized_column_list(IsOptional::Optional, false)?;
                    let kind = if self.parse_keyword(Keyword::Row) {
                        MergeInsertKind::Row
                    } else {
                        self.expect_keyword(Keyword::Values)?;
                        MergeInsertKind::Values(self.parse_values()?)
                    };
                    MergeAction::Insert(MergeInsertExpr { columns, kind })
                }
            };
            clauses.push(MergeClause {
                clause_kind,
                predicate,
                action,
            });
        }
        if clauses.is_empty() {
            return self.expected("WHEN in a MERGE statement", self.peek_token());
        }
        Ok(clauses)
    }

    // ------------------------------------------------------------------
    // COPY
    // ------------------------------------------------------------------

    pub fn parse_copy(&mut self) -> Result<Statement, ParserError> {
        let source = if self.consume_token(&Token::LeftParen) {
            let query = self.parse_query()?;
            self.expect_token(&Token::RightParen)?;
            CopySource::Query(query)
        } else {
            let table_name = self.parse_object_name()?;
            let columns = self.parse_parenthesized_column_list(IsOptional::Optional, false)?;
            CopySource::Table {
                table_name,
                columns,
            }
        };
        let to = match self.expect_one_of_keywords(&[Keyword::To, Keyword::From])? {
            Keyword::To => true,
            _ => false,
        };
        let target = if self.parse_keyword(Keyword::Stdin) {
            CopyTarget::Stdin
        } else if self.parse_keyword(Keyword::Stdout) {
            CopyTarget::Stdout
        } else if self.parse_keyword(Keyword::Program) {
            CopyTarget::Program {
                command: self.parse_literal_string()?,
            }
        } else {
            CopyTarget::File {
                filename: self.parse_literal_string()?,
            }
        };
        let _ = self.parse_keyword(Keyword::With);
        let options = if self.consume_token(&Token::LeftParen) {
            let options = self.parse_comma_separated(Parser::parse_copy_option)?;
            self.expect_token(&Token::RightParen)?;
            options
        } else {
            Vec::new()
        };
        Ok(Statement::Copy {
            source,
            to,
            target,
            options,
        })
    }

    fn parse_copy_option(&mut self) -> Result<CopyOption, ParserError> {
        let option = match self.expect_one_of_keywords(&[
            Keyword::Format,
            Keyword::Delimiter,
            Keyword::Null,
            Keyword::Header,
            Keyword::Quote,
            Keyword::Escape,
            Keyword::Freeze,
        ])? {
            Keyword::Format => CopyOption::Format(self.parse_identifier()?),
            Keyword::Delimiter => CopyOption::Delimiter(self.parse_literal_char()?),
            Keyword::Null => CopyOption::Null(self.parse_literal_string()?),
            Keyword::Header => CopyOption::Header(self.parse_optional_boolean(true)?),
            Keyword::Quote => CopyOption::Quote(self.parse_literal_char()?),
            Keyword::Escape => CopyOption::Escape(self.parse_literal_char()?),
            _ => CopyOption::Freeze(self.parse_optional_boolean(true)?),
        };
        Ok(option)
    }

    fn parse_literal_char(&mut self) -> Result<char, ParserError> {
        let s = self.parse_literal_string()?;
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Ok(ch),
            _ => parser_err!("Expected a single character, found '{s}'"),
        }
    }

    /// `TRUE`/`FALSE`, or `default` when neither is written.
    pub(crate) fn parse_optional_boolean(&mut self, default: bool) -> Result<bool, ParserError> {
        if self.parse_keyword(Keyword::True) {
            Ok(true)
        } else if self.parse_keyword(Keyword::False) {
            Ok(false)
        } else {
            Ok(default)
        }
    }
}
