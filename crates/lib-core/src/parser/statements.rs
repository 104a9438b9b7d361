//! Everything outside queries, DML and DDL: session control, transactions,
//! cursors, access control, diagnostics and the odd vendor statement the
//! grammar treats as first-class.

use crate::ast::*;
use crate::errors::ParserError;
use crate::keywords::Keyword;
use crate::parser::{IsOptional, Parser};
use crate::parser_err;
use crate::tokens::Token;

impl<'a> Parser<'a> {
    // ------------------------------------------------------------------
    // EXPLAIN / ANALYZE
    // ------------------------------------------------------------------

    pub fn parse_explain(
        &mut self,
        describe_alias: DescribeAlias,
    ) -> Result<Statement, ParserError> {
        let analyze = self.parse_keyword(Keyword::Analyze);
        let verbose = self.parse_keyword(Keyword::Verbose);
        let format = if self.parse_keyword(Keyword::Format) {
            Some(
                match self.expect_one_of_keywords(&[
                    Keyword::Text,
                    Keyword::Graphviz,
                    Keyword::Json,
                ])? {
                    Keyword::Text => AnalyzeFormat::Text,
                    Keyword::Graphviz => AnalyzeFormat::Graphviz,
                    _ => AnalyzeFormat::Json,
                },
            )
        } else {
            None
        };

        match self.maybe_parse(|p| p.parse_statement())? {
            Some(Statement::Explain { .. }) | Some(Statement::ExplainTable { .. }) => {
                parser_err!("EXPLAIN nested inside EXPLAIN is not supported")
            }
            Some(statement) => Ok(Statement::Explain {
                describe_alias,
                analyze,
                verbose,
                statement: Box::new(statement),
                format,
            }),
            None => {
                let hive_format =
                    match self.parse_one_of_keywords(&[Keyword::Extended, Keyword::Formatted]) {
                        Some(Keyword::Extended) => Some(HiveDescribeFormat::Extended),
                        Some(_) => Some(HiveDescribeFormat::Formatted),
                        None => None,
                    };
                let table_name = self.parse_object_name()?;
                Ok(Statement::ExplainTable {
                    describe_alias,
                    hive_format,
                    table_name,
                })
            }
        }
    }

    pub fn parse_analyze(&mut self) -> Result<Statement, ParserError> {
        self.expect_keyword(Keyword::Table)?;
        let table_name = self.parse_object_name()?;
        let partitions = if self.parse_keyword(Keyword::Partition) {
            self.expect_token(&Token::LeftParen)?;
            let partitions = self.parse_comma_separated(Parser::parse_expr)?;
            self.expect_token(&Token::RightParen)?;
            Some(partitions)
        } else {
            None
        };
        let mut for_columns = false;
        let mut columns = Vec::new();
        let mut cache_metadata = false;
        let mut noscan = false;
        let mut compute_statistics = false;
        loop {
            if self.parse_keywords(&[Keyword::Compute, Keyword::Statistics]) {
                compute_statistics = true;
            } else if self.parse_keyword(Keyword::Noscan) {
                noscan = true;
            } else if self.parse_keywords(&[Keyword::Cache, Keyword::Metadata]) {
                cache_metadata = true;
            } else if self.parse_keywords(&[Keyword::For, Keyword::Columns]) {
                for_columns = true;
                while let Token::Word(_) = self.peek_token().token {
                    columns.push(self.parse_identifier()?);
                    if !self.consume_token(&Token::Comma) {
                        break;
                    }
                }
            } else {
                break;
            }
        }
        Ok(Statement::Analyze {
            table_name,
            partitions,
            for_columns,
            columns,
            cache_metadata,
            noscan,
            compute_statistics,
        })
    }

    // ------------------------------------------------------------------
    // SHOW
    // ------------------------------------------------------------------

    pub fn parse_show(&mut self) -> Result<Statement, ParserError> {
        let extended = self.parse_keyword(Keyword::Extended);
        let full = self.parse_keyword(Keyword::Full);
        let session = self.parse_keyword(Keyword::Session);
        let global = self.parse_keyword(Keyword::Global);

        if self
            .parse_one_of_keywords(&[Keyword::Columns, Keyword::Fields])
            .is_some()
        {
            self.expect_one_of_keywords(&[Keyword::From, Keyword::In])?;
            let table_name = self.parse_object_name()?;
            let filter = self.parse_show_statement_filter()?;
            return Ok(Statement::ShowColumns {
                extended,
                full,
                table_name,
                filter,
            });
        }
        if self.parse_keyword(Keyword::Tables) {
            let db_name = if self
                .parse_one_of_keywords(&[Keyword::From, Keyword::In])
                .is_some()
            {
                Some(self.parse_identifier()?)
            } else {
                None
            };
            let filter = self.parse_show_statement_filter()?;
            return Ok(Statement::ShowTables {
                extended,
                full,
                db_name,
                filter,
            });
        }
        if self.parse_keyword(Keyword::Functions) {
            return Ok(Statement::ShowFunctions {
                filter: self.parse_show_statement_filter()?,
            });
        }
        if self.parse_keyword(Keyword::Collation) {
            return Ok(Statement::ShowCollation {
                filter: self.parse_show_statement_filter()?,
            });
        }
        if self.parse_keyword(Keyword::Databases) {
            return Ok(Statement::ShowDatabases {
                filter: self.parse_show_statement_filter()?,
            });
        }
        if self.parse_keyword(Keyword::Variables) {
            return Ok(Statement::ShowVariables {
                filter: self.parse_show_statement_filter()?,
                global,
                session,
            });
        }
        if self.parse_keyword(Keyword::Create) {
            let obj_type = match self.expect_one_of_keywords(&[
                Keyword::Table,
                Keyword::View,
                Keyword::Trigger,
                Keyword::Procedure,
                Keyword::Function,
                Keyword::Event,
            ])? {
                Keyword::Table => ShowCreateObject::Table,
                Keyword::View => ShowCreateObject::View,
                Keyword::Trigger => ShowCreateObject::Trigger,
                Keyword::Procedure => ShowCreateObject::Procedure,
                Keyword::Function => ShowCreateObject::Function,
                _ => ShowCreateObject::Event,
            };
            let obj_name = self.parse_object_name()?;
            return Ok(Statement::ShowCreate { obj_type, obj_name });
        }
        // anything else: `SHOW <words>` (e.g. `SHOW TIME ZONE`)
        let mut variable = Vec::new();
        while let Token::Word(_) = self.peek_token().token {
            variable.push(self.parse_identifier()?);
        }
        Ok(Statement::ShowVariable { variable })
    }

    fn parse_show_statement_filter(
        &mut self,
    ) -> Result<Option<ShowStatementFilter>, ParserError> {
        if self.parse_keyword(Keyword::Like) {
            Ok(Some(ShowStatementFilter::Like(
                self.parse_literal_string()?,
            )))
        } else if self.parse_keyword(Keyword::Ilike) {
            Ok(Some(ShowStatementFilter::ILike(
                self.parse_literal_string()?,
            )))
        } else if self.parse_keyword(Keyword::Where) {
            Ok(Some(ShowStatementFilter::Where(self.parse_expr()?)))
        } else {
            Ok(None)
        }
    }

    // ------------------------------------------------------------------
    // SET
    // ------------------------------------------------------------------

    pub fn parse_set(&mut self) -> Result<Statement, ParserError> {
        let modifier =
            self.parse_one_of_keywords(&[Keyword::Session, Keyword::Local, Keyword::Hivevar]);
        if modifier == Some(Keyword::Hivevar) {
            self.expect_token(&Token::Colon)?;
        }
        let local = modifier == Some(Keyword::Local);
        let hivevar = modifier == Some(Keyword::Hivevar);

        if !hivevar && self.parse_keywords(&[Keyword::Time, Keyword::Zone]) {
            return Ok(Statement::SetTimeZone {
                local,
                value: self.parse_expr()?,
            });
        }
        if modifier.is_none() && self.parse_keyword(Keyword::Names) {
            if self.parse_keyword(Keyword::Default) {
                return Ok(Statement::SetNamesDefault {});
            }
            let charset_name = self.parse_literal_string()?;
            let collation_name = if self.parse_keyword(Keyword::Collate) {
                Some(self.parse_literal_string()?)
            } else {
                None
            };
            return Ok(Statement::SetNames {
                charset_name,
                collation_name,
            });
        }
        if !hivevar && self.parse_keyword(Keyword::Role) {
            let context_modifier = match modifier {
                Some(Keyword::Session) => ContextModifier::Session,
                Some(Keyword::Local) => ContextModifier::Local,
                _ => ContextModifier::None,
            };
            let role_name = if self.parse_keyword(Keyword::None) {
                None
            } else {
                Some(self.parse_identifier()?)
            };
            return Ok(Statement::SetRole {
                context_modifier,
                role_name,
            });
        }
        if !hivevar && self.parse_keyword(Keyword::Transaction) {
            if self.parse_keyword(Keyword::Snapshot) {
                return Ok(Statement::SetTransaction {
                    modes: Vec::new(),
                    snapshot: Some(self.parse_value()?),
                    session: false,
                });
            }
            return Ok(Statement::SetTransaction {
                modes: self.parse_transaction_modes()?,
                snapshot: None,
                session: false,
            });
        }
        if self.parse_keywords(&[
            Keyword::Characteristics,
            Keyword::As,
            Keyword::Transaction,
        ]) {
            return Ok(Statement::SetTransaction {
                modes: self.parse_transaction_modes()?,
                snapshot: None,
                session: true,
            });
        }

        let variables = if self.caps().supports_parenthesized_set_variables
            && self.peek_token() == Token::LeftParen
        {
            let names =
                self.parse_parenthesized(|p| p.parse_comma_separated(Parser::parse_object_name))?;
            OneOrManyWithParens::Many(names)
        } else {
            OneOrManyWithParens::One(self.parse_object_name()?)
        };
        if !self.consume_token(&Token::Eq) && !self.parse_keyword(Keyword::To) {
            return self.expected("'=' or TO after the SET variable", self.peek_token());
        }
        let value = self.parse_comma_separated(Parser::parse_expr)?;
        Ok(Statement::SetVariable {
            local,
            hivevar,
            variables,
            value,
        })
    }

    // ------------------------------------------------------------------
    // transactions
    // ------------------------------------------------------------------

    pub fn parse_transaction_modes(&mut self) -> Result<Vec<TransactionMode>, ParserError> {
        let mut modes = Vec::new();
        loop {
            let mode = if self.parse_keywords(&[Keyword::Isolation, Keyword::Level]) {
                let level = if self.parse_keywords(&[Keyword::Read, Keyword::Uncommitted]) {
                    TransactionIsolationLevel::ReadUncommitted
                } else if self.parse_keywords(&[Keyword::Read, Keyword::Committed]) {
                    TransactionIsolationLevel::ReadCommitted
                } else if self.parse_keywords(&[Keyword::Repeatable, Keyword::Read]) {
                    TransactionIsolationLevel::RepeatableRead
                } else if self.parse_keyword(Keyword::Serializable) {
                    TransactionIsolationLevel::Serializable
                } else if self.parse_keyword(Keyword::Snapshot) {
                    TransactionIsolationLevel::Snapshot
                } else {
                    return self.expected("an isolation level", self.peek_token());
                };
                TransactionMode::IsolationLevel(level)
            } else if self.parse_keywords(&[Keyword::Read, Keyword::Only]) {
                TransactionMode::AccessMode(TransactionAccessMode::ReadOnly)
            } else if self.parse_keywords(&[Keyword::Read, Keyword::Write]) {
                TransactionMode::AccessMode(TransactionAccessMode::ReadWrite)
            } else {
                break;
            };
            modes.push(mode);
            let _ = self.consume_token(&Token::Comma);
        }
        Ok(modes)
    }

    pub fn parse_begin(&mut self) -> Result<Statement, ParserError> {
        let modifier = if self.caps().supports_start_transaction_modifier {
            match self.parse_one_of_keywords(&[
                Keyword::Deferred,
                Keyword::Immediate,
                Keyword::Exclusive,
            ]) {
                Some(Keyword::Deferred) => Some(TransactionModifier::Deferred),
                Some(Keyword::Immediate) => Some(TransactionModifier::Immediate),
                Some(_) => Some(TransactionModifier::Exclusive),
                None => None,
            }
        } else {
            None
        };
        let _ = self.parse_one_of_keywords(&[Keyword::Transaction, Keyword::Work]);
        Ok(Statement::StartTransaction {
            modes: self.parse_transaction_modes()?,
            begin: true,
            modifier,
        })
    }

    pub fn parse_start_transaction(&mut self) -> Result<Statement, ParserError> {
        self.expect_keyword(Keyword::Transaction)?;
        Ok(Statement::StartTransaction {
            modes: self.parse_transaction_modes()?,
            begin: false,
            modifier: None,
        })
    }

    pub fn parse_commit(&mut self) -> Result<Statement, ParserError> {
        Ok(Statement::Commit {
            chain: self.parse_commit_rollback_chain()?,
        })
    }

    pub fn parse_rollback(&mut self) -> Result<Statement, ParserError> {
        let chain = self.parse_commit_rollback_chain()?;
        let savepoint = if self.parse_keyword(Keyword::To) {
            let _ = self.parse_keyword(Keyword::Savepoint);
            Some(self.parse_identifier()?)
        } else {
            None
        };
        Ok(Statement::Rollback { chain, savepoint })
    }

    fn parse_commit_rollback_chain(&mut self) -> Result<bool, ParserError> {
        let _ = self.parse_one_of_keywords(&[Keyword::Transaction, Keyword::Work]);
        if self.parse_keyword(Keyword::And) {
            let chain = !self.parse_keyword(Keyword::No);
            self.expect_keyword(Keyword::Chain)?;
            Ok(chain)
        } else {
            Ok(false)
        }
    }

    pub fn parse_savepoint(&mut self) -> Result<Statement, ParserError> {
        Ok(Statement::Savepoint {
            name: self.parse_identifier()?,
        })
    }

    pub fn parse_release(&mut self) -> Result<Statement, ParserError> {
        let _ = self.parse_keyword(Keyword::Savepoint);
        Ok(Statement::ReleaseSavepoint {
            name: self.parse_identifier()?,
        })
    }

    // ------------------------------------------------------------------
    // cursors
    // ------------------------------------------------------------------

    pub fn parse_declare(&mut self) -> Result<Statement, ParserError> {
        let name = self.parse_identifier()?;
        let binary = self.parse_keyword(Keyword::Binary);
        let sensitive = if self.parse_keyword(Keyword::Insensitive) {
            Some(false)
        } else {
            None
        };
        let scroll = if self.parse_keyword(Keyword::Scroll) {
            Some(true)
        } else if self.parse_keywords(&[Keyword::No, Keyword::Scroll]) {
            Some(false)
        } else {
            None
        };
        self.expect_keyword(Keyword::Cursor)?;
        let hold = match self.parse_one_of_keywords(&[Keyword::With, Keyword::Without]) {
            Some(keyword) => {
                self.expect_keyword(Keyword::Hold)?;
                Some(keyword == Keyword::With)
            }
            None => None,
        };
        self.expect_keyword(Keyword::For)?;
        let query = self.parse_query()?;
        Ok(Statement::Declare {
            name,
            binary,
            sensitive,
            scroll,
            hold,
            query,
        })
    }

    pub fn parse_fetch_statement(&mut self) -> Result<Statement, ParserError> {
        let direction = if self.parse_keyword(Keyword::Next) {
            FetchDirection::Next
        } else if self.parse_keyword(Keyword::Prior) {
            FetchDirection::Prior
        } else if self.parse_keyword(Keyword::First) {
            FetchDirection::First
        } else if self.parse_keyword(Keyword::Last) {
            FetchDirection::Last
        } else if self.parse_keyword(Keyword::Absolute) {
            FetchDirection::Absolute {
                limit: self.parse_number_value()?,
            }
        } else if self.parse_keyword(Keyword::Relative) {
            FetchDirection::Relative {
                limit: self.parse_number_value()?,
            }
        } else if self.parse_keyword(Keyword::Forward) {
            if self.parse_keyword(Keyword::All) {
                FetchDirection::ForwardAll
            } else {
                FetchDirection::Forward {
                    limit: self.maybe_parse(|p| p.parse_number_value())?,
                }
            }
        } else if self.parse_keyword(Keyword::Backward) {
            if self.parse_keyword(Keyword::All) {
                FetchDirection::BackwardAll
            } else {
                FetchDirection::Backward {
                    limit: self.maybe_parse(|p| p.parse_number_value())?,
                }
            }
        } else if self.parse_keyword(Keyword::All) {
            FetchDirection::All
        } else if matches!(self.peek_token().token, Token::Number(..)) {
            FetchDirection::Count {
                limit: self.parse_number_value()?,
            }
        } else {
            FetchDirection::Next
        };
        self.expect_one_of_keywords(&[Keyword::From, Keyword::In])?;
        let name = self.parse_identifier()?;
        let into = if self.parse_keyword(Keyword::Into) {
            Some(self.parse_object_name()?)
        } else {
            None
        };
        Ok(Statement::Fetch {
            name,
            direction,
            into,
        })
    }

    pub fn parse_close(&mut self) -> Result<Statement, ParserError> {
        let cursor = if self.parse_keyword(Keyword::All) {
            CloseCursor::All
        } else {
            CloseCursor::Specific {
                name: self.parse_identifier()?,
            }
        };
        Ok(Statement::Close { cursor })
    }

    // ------------------------------------------------------------------
    // access control
    // ------------------------------------------------------------------

    pub fn parse_grant(&mut self) -> Result<Statement, ParserError> {
        let (privileges, objects) = self.parse_grant_revoke_privileges_objects()?;
        self.expect_keyword(Keyword::To)?;
        let grantees = self.parse_comma_separated(Parser::parse_identifier)?;
        let with_grant_option =
            self.parse_keywords(&[Keyword::With, Keyword::Grant, Keyword::Option]);
        let granted_by = if self.parse_keywords(&[Keyword::Granted, Keyword::By]) {
            Some(self.parse_identifier()?)
        } else {
            None
        };
        Ok(Statement::Grant {
            privileges,
            objects,
            grantees,
            with_grant_option,
            granted_by,
        })
    }

    pub fn parse_revoke(&mut self) -> Result<Statement, ParserError> {
        let (privileges, objects) = self.parse_grant_revoke_privileges_objects()?;
        self.expect_keyword(Keyword::From)?;
        let grantees = self.parse_comma_separated(Parser::parse_identifier)?;
        let granted_by = if self.parse_keywords(&[Keyword::Granted, Keyword::By]) {
            Some(self.parse_identifier()?)
        } else {
            None
        };
        let cascade = self.parse_keyword(Keyword::Cascade);
        let _ = self.parse_keyword(Keyword::Restrict);
        Ok(Statement::Revoke {
            privileges,
            objects,
            grantees,
            granted_by,
            cascade,
        })
    }

    fn parse_grant_revoke_privileges_objects(
        &mut self,
    ) -> Result<(Privileges, GrantObjects), ParserError> {
        let privileges = if self.parse_keyword(Keyword::All) {
            Privileges::All {
                with_privileges_keyword: self.parse_keyword(Keyword::Privileges),
            }
        } else {
            Privileges::Actions(self.parse_comma_separated(Parser::parse_grant_action)?)
        };
        self.expect_keyword(Keyword::On)?;
        let objects = if self.parse_keywords(&[
            Keyword::All,
            Keyword::Tables,
            Keyword::In,
            Keyword::Schema,
        ]) {
            GrantObjects::AllTablesInSchema {
                schemas: self.parse_comma_separated(Parser::parse_object_name)?,
            }
        } else if self.parse_keywords(&[
            Keyword::All,
            Keyword::Sequences,
            Keyword::In,
            Keyword::Schema,
        ]) {
            GrantObjects::AllSequencesInSchema {
                schemas: self.parse_comma_separated(Parser::parse_object_name)?,
            }
        } else if self.parse_keyword(Keyword::Schema) {
            GrantObjects::Schemas(self.parse_comma_separated(Parser::parse_object_name)?)
        } else if self.parse_keyword(Keyword::Sequence) {
            GrantObjects::Sequences(self.parse_comma_separated(Parser::parse_object_name)?)
        } else {
            let _ = self.parse_keyword(Keyword::Table);
            GrantObjects::Tables(self.parse_comma_separated(Parser::parse_object_name)?)
        };
        Ok((privileges, objects))
    }

    fn parse_grant_action(&mut self) -> Result<Action, ParserError> {
        let keyword = self.expect_one_of_keywords(&[
            Keyword::Connect,
            Keyword::Create,
            Keyword::Delete,
            Keyword::Execute,
            Keyword::Insert,
            Keyword::References,
            Keyword::Select,
            Keyword::Temporary,
            Keyword::Temp,
            Keyword::Trigger,
            Keyword::Truncate,
            Keyword::Update,
            Keyword::Usage,
        ])?;
        let mut columns = || -> Result<Option<Vec<Ident>>, ParserError> {
            let columns = self.parse_parenthesized_column_list(IsOptional::Optional, false)?;
            Ok(if columns.is_empty() {
                None
            } else {
                Some(columns)
            })
        };
        Ok(match keyword {
            Keyword::Connect => Action::Connect,
            Keyword::Create => Action::Create,
            Keyword::Delete => Action::Delete,
            Keyword::Execute => Action::Execute,
            Keyword::Insert => Action::Insert { columns: columns()? },
            Keyword::References => Action::References { columns: columns()? },
            Keyword::Select => Action::Select { columns: columns()? },
            Keyword::Temporary | Keyword::Temp => Action::Temporary,
            Keyword::Trigger => Action::Trigger,
            Keyword::Truncate => Action::Truncate,
            Keyword::Update => Action::Update { columns: columns()? },
            _ => Action::Usage,
        })
    }

    // ------------------------------------------------------------------
    // diagnostics & sessions
    // ------------------------------------------------------------------

    pub fn parse_kill(&mut self) -> Result<Statement, ParserError> {
        let modifier = match self.parse_one_of_keywords(&[
            Keyword::Connection,
            Keyword::Query,
            Keyword::Mutation,
        ]) {
            Some(Keyword::Connection) => Some(KillType::Connection),
            Some(Keyword::Query) => Some(KillType::Query),
            Some(_) => Some(KillType::Mutation),
            None => None,
        };
        let id = self.parse_literal_uint()?;
        Ok(Statement::Kill { modifier, id })
    }

    pub fn parse_discard(&mut self) -> Result<Statement, ParserError> {
        let object_type = match self.expect_one_of_keywords(&[
            Keyword::All,
            Keyword::Plans,
            Keyword::Sequences,
            Keyword::Temp,
            Keyword::Temporary,
        ])? {
            Keyword::All => DiscardObject::All,
            Keyword::Plans => DiscardObject::Plans,
            Keyword::Sequences => DiscardObject::Sequences,
            _ => DiscardObject::Temp,
        };
        Ok(Statement::Discard { object_type })
    }

    pub fn parse_flush(&mut self) -> Result<Statement, ParserError> {
        if self.parse_keyword(Keyword::Privileges) {
            return Ok(Statement::Flush {
                object_type: FlushType::Privileges,
                tables: Vec::new(),
            });
        }
        self.expect_keyword(Keyword::Tables)?;
        let tables = match self.peek_token().token {
            Token::Word(_) => self.parse_comma_separated(Parser::parse_object_name)?,
            _ => Vec::new(),
        };
        Ok(Statement::Flush {
            object_type: FlushType::Tables,
            tables,
        })
    }

    pub fn parse_use(&mut self) -> Result<Statement, ParserError> {
        Ok(Statement::Use {
            db_name: self.parse_identifier()?,
        })
    }

    pub fn parse_pragma(&mut self) -> Result<Statement, ParserError> {
        let name = self.parse_object_name()?;
        if self.consume_token(&Token::LeftParen) {
            let value = self.parse_value()?;
            self.expect_token(&Token::RightParen)?;
            Ok(Statement::Pragma {
                name,
                value: Some(value),
                is_eq: false,
            })
        } else if self.consume_token(&Token::Eq) {
            Ok(Statement::Pragma {
                name,
                value: Some(self.parse_value()?),
                is_eq: true,
            })
        } else {
            Ok(Statement::Pragma {
                name,
                value: None,
                is_eq: false,
            })
        }
    }

    // ------------------------------------------------------------------
    // prepared statements
    // ------------------------------------------------------------------

    pub fn parse_prepare(&mut self) -> Result<Statement, ParserError> {
        let name = self.parse_identifier()?;
        let data_types = if self.consume_token(&Token::LeftParen) {
            let data_types = self.parse_comma_separated(Parser::parse_data_type)?;
            self.expect_token(&Token::RightParen)?;
            data_types
        } else {
            Vec::new()
        };
        self.expect_keyword(Keyword::As)?;
        let statement = Box::new(self.parse_statement()?);
        Ok(Statement::Prepare {
            name,
            data_types,
            statement,
        })
    }

    pub fn parse_execute(&mut self) -> Result<Statement, ParserError> {
        let name = self.parse_identifier()?;
        let parameters = if self.consume_token(&Token::LeftParen) {
            let parameters = self.parse_comma_separated(Parser::parse_expr)?;
            self.expect_token(&Token::RightParen)?;
            parameters
        } else {
            Vec::new()
        };
        let using = if self.parse_keyword(Keyword::Using) {
            self.parse_comma_separated(Parser::parse_expr)?
        } else {
            Vec::new()
        };
        Ok(Statement::Execute {
            name,
            parameters,
            using,
        })
    }

    pub fn parse_deallocate(&mut self) -> Result<Statement, ParserError> {
        let prepare = self.parse_keyword(Keyword::Prepare);
        Ok(Statement::Deallocate {
            name: self.parse_identifier()?,
            prepare,
        })
    }

    // ------------------------------------------------------------------
    // vendor statements the core grammar owns
    // ------------------------------------------------------------------

    pub fn parse_install(&mut self) -> Result<Statement, ParserError> {
        Ok(Statement::Install {
            extension_name: self.parse_identifier()?,
        })
    }

    pub fn parse_load(&mut self) -> Result<Statement, ParserError> {
        Ok(Statement::Load {
            extension_name: self.parse_identifier()?,
        })
    }

    pub fn parse_optimize_table(&mut self) -> Result<Statement, ParserError> {
        self.expect_keyword(Keyword::Table)?;
        let name = self.parse_object_name()?;
        let partition = if self.peek_keyword(Keyword::Partition) || self.peek_keyword(Keyword::Part)
        {
            Some(self.parse_part_or_partition()?)
        } else {
            None
        };
        let include_final = self.parse_keyword(Keyword::Final);
        let deduplicate = if self.parse_keyword(Keyword::Deduplicate) {
            if self.parse_keyword(Keyword::By) {
                Some(Deduplicate::ByExpression(self.parse_expr()?))
            } else {
                Some(Deduplicate::All)
            }
        } else {
            None
        };
        Ok(Statement::OptimizeTable {
            name,
            partition,
            include_final,
            deduplicate,
        })
    }

    /// SQLite `ATTACH [DATABASE] expr AS name`. The DuckDb spelling is
    /// handled by that dialect's statement hook.
    pub fn parse_attach(&mut self) -> Result<Statement, ParserError> {
        let database = self.parse_keyword(Keyword::Database);
        let database_file_name = self.parse_expr()?;
        self.expect_keyword(Keyword::As)?;
        let schema_name = self.parse_identifier()?;
        Ok(Statement::AttachDatabase {
            schema_name,
            database_file_name,
            database,
        })
    }

    /// Bare `DETACH` belongs to DuckDb; without that dialect's hook the
    /// construct is rejected rather than guessed at.
    pub fn parse_detach(&mut self) -> Result<Statement, ParserError> {
        parser_err!("Unsupported statement DETACH")
    }

    pub fn parse_call(&mut self) -> Result<Statement, ParserError> {
        let name = self.parse_object_name()?;
        if self.peek_token() == Token::LeftParen {
            match self.parse_function(name)? {
                Expr::Function(function) => Ok(Statement::Call(function)),
                _ => self.expected("a function call after CALL", self.peek_token()),
            }
        } else {
            Ok(Statement::Call(Function {
                name,
                parameters: FunctionArguments::None,
                args: FunctionArguments::None,
                filter: None,
                null_treatment: None,
                over: None,
                within_group: Vec::new(),
            }))
        }
    }

    pub fn parse_assert(&mut self) -> Result<Statement, ParserError> {
        let condition = self.parse_expr()?;
        let message = if self.parse_keyword(Keyword::As) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        Ok(Statement::Assert { condition, message })
    }

    pub fn parse_unload(&mut self) -> Result<Statement, ParserError> {
        self.expect_token(&Token::LeftParen)?;
        let query = self.parse_query()?;
        self.expect_token(&Token::RightParen)?;
        self.expect_keyword(Keyword::To)?;
        let to = self.parse_identifier()?;
        let with = self.parse_options(Keyword::With)?;
        Ok(Statement::Unload { query, to, with })
    }
}
