//! `CREATE`, `ALTER` and `DROP` for every object kind.

use crate::ast::*;
use crate::errors::ParserError;
use crate::keywords::Keyword;
use crate::parser::{IsOptional, Parser};
use crate::parser_err;
use crate::tokens::Token;

/// `X specified more than once` for set-once clauses.
fn set_once<T>(slot: &mut Option<T>, value: T, what: &str) -> Result<(), ParserError> {
    if slot.is_some() {
        return parser_err!("{what} specified more than once");
    }
    *slot = Some(value);
    Ok(())
}

impl<'a> Parser<'a> {
    pub fn parse_create(&mut self) -> Result<Statement, ParserError> {
        let or_replace = self.parse_keywords(&[Keyword::Or, Keyword::Replace]);
        let or_alter = self.parse_keywords(&[Keyword::Or, Keyword::Alter]);
        let temporary = self
            .parse_one_of_keywords(&[Keyword::Temp, Keyword::Temporary])
            .is_some();
        let persistent = self.parse_keyword(Keyword::Persistent);

        if persistent || (self.peek_keyword(Keyword::Secret)) {
            self.expect_keyword(Keyword::Secret)?;
            return self.parse_create_secret(or_replace, temporary, persistent);
        }
        if self.parse_keyword(Keyword::Table) {
            return self.parse_create_table(or_replace, temporary, false);
        }
        if self.parse_keyword(Keyword::External) {
            self.expect_keyword(Keyword::Table)?;
            return self.parse_create_table(or_replace, temporary, true);
        }
        if self.parse_keyword(Keyword::Materialized) {
            self.expect_keyword(Keyword::View)?;
            return self.parse_create_view(or_replace, true, temporary);
        }
        if self.parse_keyword(Keyword::View) {
            return self.parse_create_view(or_replace, false, temporary);
        }
        if self.parse_keyword(Keyword::Virtual) {
            self.expect_keyword(Keyword::Table)?;
            return self.parse_create_virtual_table();
        }
        let unique = self.parse_keyword(Keyword::Unique);
        if self.parse_keyword(Keyword::Index) {
            return self.parse_create_index(unique);
        }
        if unique {
            return self.expected("INDEX after CREATE UNIQUE", self.peek_token());
        }
        if self.parse_keyword(Keyword::Schema) {
            return self.parse_create_schema();
        }
        if self.parse_keyword(Keyword::Database) {
            return self.parse_create_database();
        }
        if self.parse_keyword(Keyword::Role) {
            return self.parse_create_role();
        }
        if self.parse_keyword(Keyword::Function) {
            return self.parse_create_function(or_replace, temporary);
        }
        if self.parse_keyword(Keyword::Macro) {
            return self.parse_create_macro(or_replace, temporary);
        }
        if self.parse_keyword(Keyword::Procedure) {
            return self.parse_create_procedure(or_alter);
        }
        if self.parse_keyword(Keyword::Trigger) {
            return self.parse_create_trigger(or_replace);
        }
        if self.parse_keyword(Keyword::Type) {
            return self.parse_create_type();
        }
        if self.parse_keyword(Keyword::Sequence) {
            return self.parse_create_sequence(temporary);
        }
        if self.parse_keyword(Keyword::Extension) {
            return self.parse_create_extension();
        }
        self.expected("an object type after CREATE", self.peek_token())
    }

    // ------------------------------------------------------------------
    // CREATE TABLE
    // ------------------------------------------------------------------

    pub fn parse_create_table(
        &mut self,
        or_replace: bool,
        temporary: bool,
        external: bool,
    ) -> Result<Statement, ParserError> {
        let if_not_exists = self.parse_keywords(&[Keyword::If, Keyword::Not, Keyword::Exists]);
        let name = self.parse_object_name()?;

        let like = if self.parse_keyword(Keyword::Like) {
            Some(self.parse_object_name()?)
        } else {
            None
        };

        let (columns, constraints) = self.parse_columns()?;
        let without_rowid = self.parse_keywords(&[Keyword::Without, Keyword::Rowid]);

        let hive_distribution = self.parse_hive_distribution()?;
        let hive_formats = self.parse_hive_formats()?;

        let table_properties = self.parse_options(Keyword::Tblproperties)?;
        let with_options = self.parse_options(Keyword::With)?;

        let engine = if self.parse_keyword(Keyword::Engine) {
            let _ = self.consume_token(&Token::Eq);
            let next_token = self.next_token();
            match next_token.token {
                Token::Word(w) => {
                    let name = w.value;
                    let parameters = if self.peek_token() == Token::LeftParen {
                        self.expect_token(&Token::LeftParen)?;
                        let parameters = if self.consume_token(&Token::RightParen) {
                            Vec::new()
                        } else {
                            let parameters = self.parse_identifiers()?;
                            self.expect_token(&Token::RightParen)?;
                            parameters
                        };
                        Some(parameters)
                    } else {
                        None
                    };
                    Some(TableEngine { name, parameters })
                }
                _ => return self.expected("an engine name", next_token),
            }
        } else {
            None
        };

        let auto_increment_offset = if self.parse_keyword(Keyword::AutoIncrement) {
            let _ = self.consume_token(&Token::Eq);
            Some(self.parse_literal_uint()?)
        } else {
            None
        };

        let primary_key = if self.parse_keywords(&[Keyword::Primary, Keyword::Key]) {
            Some(Box::new(self.parse_expr()?))
        } else {
            None
        };

        let order_by = if self.parse_keywords(&[Keyword::Order, Keyword::By]) {
            if self.consume_token(&Token::LeftParen) {
                let cols = if self.peek_token() == Token::RightParen {
                    Vec::new()
                } else {
                    self.parse_comma_separated(Parser::parse_expr)?
                };
                self.expect_token(&Token::RightParen)?;
                Some(OneOrManyWithParens::Many(cols))
            } else {
                Some(OneOrManyWithParens::One(self.parse_expr()?))
            }
        } else {
            None
        };

        let partition_by = if self.parse_keywords(&[Keyword::Partition, Keyword::By]) {
            Some(Box::new(self.parse_expr()?))
        } else {
            None
        };

        let cluster_by = if self.parse_keywords(&[Keyword::Cluster, Keyword::By]) {
            Some(self.parse_comma_separated(Parser::parse_identifier)?)
        } else {
            None
        };

        let options = if self.peek_keyword(Keyword::Options) {
            Some(self.parse_options(Keyword::Options)?)
        } else {
            None
        };

        let default_charset = if self.parse_keywords(&[Keyword::Default, Keyword::Charset]) {
            let _ = self.consume_token(&Token::Eq);
            Some(self.parse_identifier()?.value)
        } else {
            None
        };

        let collation = if self.parse_keyword(Keyword::Collate) {
            let _ = self.consume_token(&Token::Eq);
            Some(self.parse_identifier()?.value)
        } else {
            None
        };

        let on_commit = if self.parse_keywords(&[Keyword::On, Keyword::Commit]) {
            if self.parse_keywords(&[Keyword::Delete, Keyword::Rows]) {
                Some(OnCommit::DeleteRows)
            } else if self.parse_keywords(&[Keyword::Preserve, Keyword::Rows]) {
                Some(OnCommit::PreserveRows)
            } else if self.parse_keyword(Keyword::Drop) {
                Some(OnCommit::Drop)
            } else {
                return self.expected(
                    "DELETE ROWS, PRESERVE ROWS or DROP after ON COMMIT",
                    self.peek_token(),
                );
            }
        } else {
            None
        };

        let strict = self.parse_keyword(Keyword::Strict);

        let comment = if self.parse_keyword(Keyword::Comment) {
            let _ = self.consume_token(&Token::Eq);
            Some(self.parse_literal_string()?)
        } else {
            None
        };

        let query = if self.parse_keyword(Keyword::As) {
            Some(self.parse_query()?)
        } else {
            None
        };

        Ok(Statement::CreateTable(CreateTable {
            or_replace,
            temporary,
            external,
            if_not_exists,
            name,
            columns,
            constraints,
            hive_distribution,
            hive_formats: Some(hive_formats),
            table_properties,
            with_options,
            engine,
            auto_increment_offset,
            default_charset,
            collation,
            comment,
            on_commit,
            query,
            without_rowid,
            like,
            primary_key,
            order_by,
            partition_by,
            cluster_by,
            options,
            strict,
        }))
    }

    /// The parenthesised column and constraint list of a CREATE TABLE.
    pub fn parse_columns(&mut self) -> Result<(Vec<ColumnDef>, Vec<TableConstraint>), ParserError> {
        let mut columns = Vec::new();
        let mut constraints = Vec::new();
        if !self.consume_token(&Token::LeftParen) || self.consume_token(&Token::RightParen) {
            return Ok((columns, constraints));
        }
        loop {
            if let Some(constraint) = self.parse_optional_table_constraint()? {
                constraints.push(constraint);
            } else if matches!(
                self.peek_token().token,
                Token::Word(_) | Token::SingleQuotedString(_) | Token::DoubleQuotedString(_)
            ) {
                columns.push(self.parse_column_def()?);
            } else {
                return self.expected("a column name or constraint definition", self.peek_token());
            }
            let comma = self.consume_token(&Token::Comma);
            let rparen = self.peek_token() == Token::RightParen;
            if !comma && !rparen {
                return self.expected("',' or ')' after a column definition", self.peek_token());
            }
            if rparen
                && (!comma
                    || self.options().trailing_commas
                    || self.caps().supports_trailing_commas)
            {
                self.expect_token(&Token::RightParen)?;
                break;
            }
        }
        Ok((columns, constraints))
    }

    pub fn parse_column_def(&mut self) -> Result<ColumnDef, ParserError> {
        let name = self.parse_identifier()?;
        let data_type = match self.peek_token().token {
            // SQLite allows untyped columns
            Token::Comma | Token::RightParen => DataType::Unspecified,
            _ => self.parse_data_type()?,
        };
        let mut collation = None;
        let mut options = Vec::new();
        loop {
            if self.parse_keyword(Keyword::Collate) {
                collation = Some(self.parse_object_name()?);
            } else if self.parse_keyword(Keyword::Constraint) {
                let name = Some(self.parse_identifier()?);
                if let Some(option) = self.parse_optional_column_option()? {
                    options.push(ColumnOptionDef { name, option });
                } else {
                    return self.expected(
                        "a constraint clause after CONSTRAINT",
                        self.peek_token(),
                    );
                }
            } else if let Some(option) = self.parse_optional_column_option()? {
                options.push(ColumnOptionDef { name: None, option });
            } else {
                break;
            }
        }
        Ok(ColumnDef {
            name,
            data_type,
            collation,
            options,
        })
    }

    pub fn parse_optional_column_option(&mut self) -> Result<Option<ColumnOption>, ParserError> {
        if let Some(option) = self.dialect.parse_column_option(self) {
            return option.map(Some);
        }
        if self.parse_keywords(&[Keyword::Character, Keyword::Set]) {
            return Ok(Some(ColumnOption::CharacterSet(self.parse_object_name()?)));
        }
        if self.parse_keywords(&[Keyword::Not, Keyword::Null]) {
            return Ok(Some(ColumnOption::NotNull));
        }
        if self.parse_keyword(Keyword::Null) {
            return Ok(Some(ColumnOption::Null));
        }
        if self.parse_keyword(Keyword::Default) {
            return Ok(Some(ColumnOption::Default(self.parse_expr()?)));
        }
        if self.parse_keyword(Keyword::Materialized) {
            return Ok(Some(ColumnOption::Materialized(self.parse_expr()?)));
        }
        if self.parse_keyword(Keyword::Alias) {
            return Ok(Some(ColumnOption::Alias(self.parse_expr()?)));
        }
        if self.parse_keyword(Keyword::Ephemeral) {
            let expr = match self.peek_token().token {
                Token::Comma | Token::RightParen => None,
                _ => Some(self.parse_expr()?),
            };
            return Ok(Some(ColumnOption::Ephemeral(expr)));
        }
        if self.parse_keywords(&[Keyword::Primary, Keyword::Key]) {
            let characteristics = self.parse_constraint_characteristics()?;
            return Ok(Some(ColumnOption::Unique {
                is_primary: true,
                characteristics,
            }));
        }
        if self.parse_keyword(Keyword::Unique) {
            let characteristics = self.parse_constraint_characteristics()?;
            return Ok(Some(ColumnOption::Unique {
                is_primary: false,
                characteristics,
            }));
        }
        if self.parse_keyword(Keyword::References) {
            let foreign_table = self.parse_object_name()?;
            let referred_columns =
                self.parse_parenthesized_column_list(IsOptional::Optional, true)?;
            let (on_delete, on_update) = self.parse_referential_actions()?;
            let characteristics = self.parse_constraint_characteristics()?;
            return Ok(Some(ColumnOption::ForeignKey {
                foreign_table,
                referred_columns,
                on_delete,
                on_update,
                characteristics,
            }));
        }
        if self.parse_keyword(Keyword::Check) {
            return Ok(Some(ColumnOption::Check(
                self.parse_parenthesized(Parser::parse_expr)?,
            )));
        }
        if self.parse_keyword(Keyword::AutoIncrement) || self.parse_keyword(Keyword::Autoincrement)
        {
            return Ok(Some(ColumnOption::AutoIncrement));
        }
        if self.parse_keywords(&[Keyword::On, Keyword::Update]) {
            return Ok(Some(ColumnOption::OnUpdate(self.parse_expr()?)));
        }
        if self.parse_keyword(Keyword::Generated) {
            return self.parse_generated_column_option().map(Some);
        }
        if self.peek_keyword(Keyword::As) && self.peek_nth_token(1) == Token::LeftParen {
            self.expect_keyword(Keyword::As)?;
            let expr = self.parse_parenthesized(Parser::parse_expr)?;
            let mode = if self.parse_keyword(Keyword::Stored) {
                Some(GeneratedExpressionMode::Stored)
            } else if self.parse_keyword(Keyword::Virtual) {
                Some(GeneratedExpressionMode::Virtual)
            } else {
                None
            };
            return Ok(Some(ColumnOption::Generated {
                generated_as: GeneratedAs::ExpStored,
                sequence_options: None,
                generation_expr: Some(expr),
                generation_expr_mode: mode,
                generated_keyword: false,
            }));
        }
        if self.parse_keyword(Keyword::Identity) {
            let property = if self.consume_token(&Token::LeftParen) {
                let seed = self.parse_expr()?;
                self.expect_token(&Token::Comma)?;
                let increment = self.parse_expr()?;
                self.expect_token(&Token::RightParen)?;
                Some(IdentityProperty { seed, increment })
            } else {
                None
            };
            return Ok(Some(ColumnOption::Identity(property)));
        }
        if self.peek_keyword(Keyword::Options) {
            return Ok(Some(ColumnOption::Options(
                self.parse_options(Keyword::Options)?,
            )));
        }
        if self.parse_keyword(Keyword::Comment) {
            return Ok(Some(ColumnOption::Comment(self.parse_literal_string()?)));
        }
        if self.caps().supports_ascdesc_in_column_definition {
            if self.parse_keyword(Keyword::Asc) {
                return Ok(Some(ColumnOption::Sort(SortDirection::Asc)));
            }
            if self.parse_keyword(Keyword::Desc) {
                return Ok(Some(ColumnOption::Sort(SortDirection::Desc)));
            }
        }
        Ok(None)
    }

    fn parse_generated_column_option(&mut self) -> Result<ColumnOption, ParserError> {
        let generated_as = if self.parse_keyword(Keyword::Always) {
            GeneratedAs::Always
        } else {
            self.expect_keywords(&[Keyword::By, Keyword::Default])?;
            GeneratedAs::ByDefault
        };
        self.expect_keyword(Keyword::As)?;
        if self.parse_keyword(Keyword::Identity) {
            let sequence_options = if self.consume_token(&Token::LeftParen) {
                let options = self.parse_sequence_option_list()?;
                self.expect_token(&Token::RightParen)?;
                Some(options)
            } else {
                None
            };
            return Ok(ColumnOption::Generated {
                generated_as,
                sequence_options,
                generation_expr: None,
                generation_expr_mode: None,
                generated_keyword: true,
            });
        }
        let expr = self.parse_parenthesized(Parser::parse_expr)?;
        let mode = if self.parse_keyword(Keyword::Stored) {
            Some(GeneratedExpressionMode::Stored)
        } else if self.parse_keyword(Keyword::Virtual) {
            Some(GeneratedExpressionMode::Virtual)
        } else {
            None
        };
        Ok(ColumnOption::Generated {
            generated_as,
            sequence_options: None,
            generation_expr: Some(expr),
            generation_expr_mode: mode,
            generated_keyword: true,
        })
    }

    fn parse_referential_actions(
        &mut self,
    ) -> Result<(Option<ReferentialAction>, Option<ReferentialAction>), ParserError> {
        let mut on_delete = None;
        let mut on_update = None;
        loop {
            if on_delete.is_none() && self.parse_keywords(&[Keyword::On, Keyword::Delete]) {
                on_delete = Some(self.parse_referential_action()?);
            } else if on_update.is_none() && self.parse_keywords(&[Keyword::On, Keyword::Update]) {
                on_update = Some(self.parse_referential_action()?);
            } else {
                break;
            }
        }
        Ok((on_delete, on_update))
    }

    pub fn parse_referential_action(&mut self) -> Result<ReferentialAction, ParserError> {
        if self.parse_keyword(Keyword::Restrict) {
            Ok(ReferentialAction::Restrict)
        } else if self.parse_keyword(Keyword::Cascade) {
            Ok(ReferentialAction::Cascade)
        } else if self.parse_keywords(&[Keyword::Set, Keyword::Null]) {
            Ok(ReferentialAction::SetNull)
        } else if self.parse_keywords(&[Keyword::No, Keyword::Action]) {
            Ok(ReferentialAction::NoAction)
        } else if self.parse_keywords(&[Keyword::Set, Keyword::Default]) {
            Ok(ReferentialAction::SetDefault)
        } else {
            self.expected(
                "RESTRICT, CASCADE, SET NULL, NO ACTION or SET DEFAULT",
                self.peek_token(),
            )
        }
    }

    fn parse_constraint_characteristics(
        &mut self,
    ) -> Result<Option<ConstraintCharacteristics>, ParserError> {
        let mut characteristics = ConstraintCharacteristics::default();
        loop {
            if characteristics.deferrable.is_none()
                && self.parse_keywords(&[Keyword::Not, Keyword::Deferrable])
            {
                characteristics.deferrable = Some(false);
            } else if characteristics.deferrable.is_none()
                && self.parse_keyword(Keyword::Deferrable)
            {
                characteristics.deferrable = Some(true);
            } else if characteristics.initially.is_none()
                && self.parse_keyword(Keyword::Initially)
            {
                characteristics.initially =
                    Some(if self.parse_keyword(Keyword::Deferred) {
                        DeferrableInitial::Deferred
                    } else {
                        self.expect_keyword(Keyword::Immediate)?;
                        DeferrableInitial::Immediate
                    });
            } else if characteristics.enforced.is_none()
                && self.parse_keywords(&[Keyword::Not, Keyword::Enforced])
            {
                characteristics.enforced = Some(false);
            } else if characteristics.enforced.is_none() && self.parse_keyword(Keyword::Enforced) {
                characteristics.enforced = Some(true);
            } else {
                break;
            }
        }
        if characteristics == ConstraintCharacteristics::default() {
            Ok(None)
        } else {
            Ok(Some(characteristics))
        }
    }

    pub fn parse_optional_table_constraint(
        &mut self,
    ) -> Result<Option<TableConstraint>, ParserError> {
        let name = if self.parse_keyword(Keyword::Constraint) {
            Some(self.parse_identifier()?)
        } else {
            None
        };
        match self.peek_token().token {
            Token::Word(w) => match w.keyword {
                Keyword::Primary => {
                    self.expect_keywords(&[Keyword::Primary, Keyword::Key])?;
                    let columns =
                        self.parse_parenthesized_column_list(IsOptional::Mandatory, false)?;
                    let characteristics = self.parse_constraint_characteristics()?;
                    Ok(Some(TableConstraint::PrimaryKey {
                        name,
                        columns,
                        characteristics,
                    }))
                }
                Keyword::Unique => {
                    self.expect_keyword(Keyword::Unique)?;
                    let _ = self.parse_one_of_keywords(&[Keyword::Index, Keyword::Key]);
                    let columns =
                        self.parse_parenthesized_column_list(IsOptional::Mandatory, false)?;
                    let characteristics = self.parse_constraint_characteristics()?;
                    Ok(Some(TableConstraint::Unique {
                        name,
                        columns,
                        characteristics,
                    }))
                }
                Keyword::Foreign => {
                    self.expect_keywords(&[Keyword::Foreign, Keyword::Key])?;
                    let columns =
                        self.parse_parenthesized_column_list(IsOptional::Mandatory, false)?;
                    self.expect_keyword(Keyword::References)?;
                    let foreign_table = self.parse_object_name()?;
                    let referred_columns =
                        self.parse_parenthesized_column_list(IsOptional::Optional, true)?;
                    let (on_delete, on_update) = self.parse_referential_actions()?;
                    let characteristics = self.parse_constraint_characteristics()?;
                    Ok(Some(TableConstraint::ForeignKey {
                        name,
                        columns,
                        foreign_table,
                        referred_columns,
                        on_delete,
                        on_update,
                        characteristics,
                    }))
                }
                Keyword::Check => {
                    self.expect_keyword(Keyword::Check)?;
                    let expr = Box::new(self.parse_parenthesized(Parser::parse_expr)?);
                    Ok(Some(TableConstraint::Check { name, expr }))
                }
                Keyword::Index | Keyword::Key if name.is_none() => {
                    let display_as_key = w.keyword == Keyword::Key;
                    self.next_token();
                    let index_name = match self.peek_token().token {
                        Token::Word(w) if w.keyword == Keyword::Undefined => {
                            Some(self.parse_identifier()?)
                        }
                        _ => None,
                    };
                    let index_type = self.parse_optional_using_index_type()?;
                    let columns =
                        self.parse_parenthesized_column_list(IsOptional::Mandatory, false)?;
                    Ok(Some(TableConstraint::Index {
                        display_as_key,
                        name: index_name,
                        index_type,
                        columns,
                    }))
                }
                Keyword::Fulltext | Keyword::Spatial if name.is_none() => {
                    let fulltext = w.keyword == Keyword::Fulltext;
                    self.next_token();
                    let _ = self.parse_one_of_keywords(&[Keyword::Index, Keyword::Key]);
                    let index_name = match self.peek_token().token {
                        Token::Word(w) if w.keyword == Keyword::Undefined => {
                            Some(self.parse_identifier()?)
                        }
                        _ => None,
                    };
                    let columns =
                        self.parse_parenthesized_column_list(IsOptional::Mandatory, false)?;
                    Ok(Some(TableConstraint::FulltextOrSpatial {
                        fulltext,
                        index_name,
                        columns,
                    }))
                }
                _ => {
                    if name.is_some() {
                        self.expected("PRIMARY, UNIQUE, FOREIGN or CHECK", self.peek_token())
                    } else {
                        Ok(None)
                    }
                }
            },
            _ => {
                if name.is_some() {
                    self.expected("PRIMARY, UNIQUE, FOREIGN or CHECK", self.peek_token())
                } else {
                    Ok(None)
                }
            }
        }
    }

    fn parse_optional_using_index_type(&mut self) -> Result<Option<IndexType>, ParserError> {
        if self.parse_keyword(Keyword::Using) {
            if self.parse_keyword(Keyword::Btree) {
                Ok(Some(IndexType::BTree))
            } else if self.parse_keyword(Keyword::Hash) {
                Ok(Some(IndexType::Hash))
            } else {
                self.expected("BTREE or HASH", self.peek_token())
            }
        } else {
            Ok(None)
        }
    }

    fn parse_hive_distribution(&mut self) -> Result<HiveDistributionStyle, ParserError> {
        if self.parse_keywords(&[Keyword::Partitioned, Keyword::By]) {
            self.expect_token(&Token::LeftParen)?;
            let columns = self.parse_comma_separated(Parser::parse_column_def)?;
            self.expect_token(&Token::RightParen)?;
            Ok(HiveDistributionStyle::Partitioned { columns })
        } else if self.parse_keywords(&[Keyword::Clustered, Keyword::By]) {
            let columns = self.parse_parenthesized_column_list(IsOptional::Mandatory, false)?;
            let sorted_by = if self.parse_keywords(&[Keyword::Sorted, Keyword::By]) {
                self.expect_token(&Token::LeftParen)?;
                let sorted_by = self.parse_comma_separated(Parser::parse_order_by_expr)?;
                self.expect_token(&Token::RightParen)?;
                sorted_by
            } else {
                Vec::new()
            };
            self.expect_keyword(Keyword::Into)?;
            let num_buckets = self.parse_literal_uint()?;
            self.expect_keyword(Keyword::Buckets)?;
            Ok(HiveDistributionStyle::Clustered {
                columns,
                sorted_by,
                num_buckets,
            })
        } else {
            Ok(HiveDistributionStyle::None)
        }
    }

    fn parse_hive_formats(&mut self) -> Result<HiveFormat, ParserError> {
        let mut hive_format = HiveFormat::default();
        loop {
            if self.parse_keywords(&[Keyword::Row, Keyword::Format]) {
                hive_format.row_format = Some(self.parse_row_format()?);
            } else if self.parse_keywords(&[Keyword::Stored, Keyword::As]) {
                if self.parse_keyword(Keyword::Inputformat) {
                    let input_format = self.parse_expr()?;
                    self.expect_keyword(Keyword::Outputformat)?;
                    let output_format = self.parse_expr()?;
                    hive_format.storage = Some(HiveIOFormat::IOF {
                        input_format,
                        output_format,
                    });
                } else {
                    let format = self.parse_file_format()?;
                    hive_format.storage = Some(HiveIOFormat::FileFormat { format });
                }
            } else if self.parse_keyword(Keyword::With) {
                if self.peek_keyword(Keyword::Serdeproperties) {
                    hive_format.serde_properties =
                        Some(self.parse_options(Keyword::Serdeproperties)?);
                } else {
                    // the WITH belongs to a later clause
                    self.prev_token();
                    break;
                }
            } else if self.parse_keyword(Keyword::Location) {
                hive_format.location = Some(self.parse_literal_string()?);
            } else {
                break;
            }
        }
        Ok(hive_format)
    }

    fn parse_row_format(&mut self) -> Result<HiveRowFormat, ParserError> {
        if self.parse_keyword(Keyword::Serde) {
            let class = self.parse_literal_string()?;
            Ok(HiveRowFormat::Serde { class })
        } else {
            self.expect_keyword(Keyword::Delimited)?;
            let mut delimiters = Vec::new();
            loop {
                let delimiter = if self.parse_keywords(&[
                    Keyword::Fields,
                    Keyword::Terminated,
                    Keyword::By,
                ]) {
                    HiveDelimiter::FieldsTerminatedBy
                } else if self.parse_keywords(&[Keyword::Escaped, Keyword::By]) {
                    HiveDelimiter::FieldsEscapedBy
                } else if self.parse_keywords(&[
                    Keyword::Collection,
                    Keyword::Items,
                    Keyword::Terminated,
                    Keyword::By,
                ]) {
                    HiveDelimiter::CollectionItemsTerminatedBy
                } else if self.parse_keywords(&[
                    Keyword::Map,
                    Keyword::Keys,
                    Keyword::Terminated,
                    Keyword::By,
                ]) {
                    HiveDelimiter::MapKeysTerminatedBy
                } else if self.parse_keywords(&[
                    Keyword::Lines,
                    Keyword::Terminated,
                    Keyword::By,
                ]) {
                    HiveDelimiter::LinesTerminatedBy
                } else {
                    break;
                };
                delimiters.push(HiveRowDelimiter {
                    delimiter,
                    char: self.parse_value()?,
                });
            }
            Ok(HiveRowFormat::Delimited { delimiters })
        }
    }

    pub fn parse_file_format(&mut self) -> Result<FileFormat, ParserError> {
        let next_token = self.next_token();
        match &next_token.token {
            Token::Word(w) => match w.keyword {
                Keyword::Textfile => Ok(FileFormat::TextFile),
                Keyword::Sequencefile => Ok(FileFormat::SequenceFile),
                Keyword::Orc => Ok(FileFormat::Orc),
                Keyword::Parquet => Ok(FileFormat::Parquet),
                Keyword::Avro => Ok(FileFormat::Avro),
                Keyword::Rcfile => Ok(FileFormat::RcFile),
                Keyword::Jsonfile => Ok(FileFormat::JsonFile),
                _ => self.expected("a file format", next_token),
            },
            _ => self.expected("a file format", next_token),
        }
    }

    // ------------------------------------------------------------------
    // other CREATE forms
    // ------------------------------------------------------------------

    pub fn parse_create_view(
        &mut self,
        or_replace: bool,
        materialized: bool,
        temporary: bool,
    ) -> Result<Statement, ParserError> {
        let if_not_exists = self.parse_keywords(&[Keyword::If, Keyword::Not, Keyword::Exists]);
        let name = self.parse_object_name()?;
        let columns = self.parse_parenthesized_column_list(IsOptional::Optional, false)?;
        let with_options = self.parse_options(Keyword::With)?;
        let cluster_by = if self.parse_keywords(&[Keyword::Cluster, Keyword::By]) {
            self.parse_comma_separated(Parser::parse_identifier)?
        } else {
            Vec::new()
        };
        let options = if self.peek_keyword(Keyword::Options) {
            CreateTableOptions::Options(self.parse_options(Keyword::Options)?)
        } else if !with_options.is_empty() {
            CreateTableOptions::With(with_options)
        } else {
            CreateTableOptions::None
        };
        self.expect_keyword(Keyword::As)?;
        let query = self.parse_query()?;
        Ok(Statement::CreateView {
            or_replace,
            materialized,
            name,
            columns,
            query,
            options,
            cluster_by,
            if_not_exists,
            temporary,
        })
    }

    pub fn parse_create_index(&mut self, unique: bool) -> Result<Statement, ParserError> {
        let concurrently = self.parse_keyword(Keyword::Concurrently);
        let if_not_exists = self.parse_keywords(&[Keyword::If, Keyword::Not, Keyword::Exists]);
        let name = if self.peek_keyword(Keyword::On) {
            None
        } else {
            Some(self.parse_object_name()?)
        };
        self.expect_keyword(Keyword::On)?;
        let table_name = self.parse_object_name()?;
        let using = if self.parse_keyword(Keyword::Using) {
            Some(self.parse_identifier()?)
        } else {
            None
        };
        self.expect_token(&Token::LeftParen)?;
        let columns = self.parse_comma_separated(Parser::parse_order_by_expr)?;
        self.expect_token(&Token::RightParen)?;
        let include = if self.parse_keyword(Keyword::Include) {
            self.parse_parenthesized_column_list(IsOptional::Mandatory, false)?
        } else {
            Vec::new()
        };
        let with = if self.caps().supports_create_index_with_clause
            && self.parse_keyword(Keyword::With)
        {
            self.expect_token(&Token::LeftParen)?;
            let with = self.parse_comma_separated(Parser::parse_expr)?;
            self.expect_token(&Token::RightParen)?;
            with
        } else {
            Vec::new()
        };
        let predicate = if self.parse_keyword(Keyword::Where) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        Ok(Statement::CreateIndex(CreateIndex {
            name,
            table_name,
            using,
            columns,
            unique,
            concurrently,
            if_not_exists,
            include,
            with,
            predicate,
        }))
    }

    fn parse_create_virtual_table(&mut self) -> Result<Statement, ParserError> {
        let if_not_exists = self.parse_keywords(&[Keyword::If, Keyword::Not, Keyword::Exists]);
        let name = self.parse_object_name()?;
        self.expect_keyword(Keyword::Using)?;
        let module_name = self.parse_identifier()?;
        let module_args = self.parse_parenthesized_column_list(IsOptional::Optional, true)?;
        Ok(Statement::CreateVirtualTable {
            name,
            if_not_exists,
            module_name,
            module_args,
        })
    }

    fn parse_create_schema(&mut self) -> Result<Statement, ParserError> {
        let if_not_exists = self.parse_keywords(&[Keyword::If, Keyword::Not, Keyword::Exists]);
        let schema_name = if self.parse_keyword(Keyword::Authorization) {
            SchemaName::UnnamedAuthorization(self.parse_identifier()?)
        } else {
            let name = self.parse_object_name()?;
            if self.parse_keyword(Keyword::Authorization) {
                SchemaName::NamedAuthorization(name, self.parse_identifier()?)
            } else {
                SchemaName::Simple(name)
            }
        };
        Ok(Statement::CreateSchema {
            schema_name,
            if_not_exists,
        })
    }

    fn parse_create_database(&mut self) -> Result<Statement, ParserError> {
        let if_not_exists = self.parse_keywords(&[Keyword::If, Keyword::Not, Keyword::Exists]);
        let db_name = self.parse_object_name()?;
        let mut location = None;
        let mut managed_location = None;
        loop {
            if self.parse_keyword(Keyword::Location) {
                location = Some(self.parse_literal_string()?);
            } else if self.parse_keyword(Keyword::Managedlocation) {
                managed_location = Some(self.parse_literal_string()?);
            } else {
                break;
            }
        }
        Ok(Statement::CreateDatabase {
            db_name,
            if_not_exists,
            location,
            managed_location,
        })
    }

    fn parse_create_role(&mut self) -> Result<Statement, ParserError> {
        let if_not_exists = self.parse_keywords(&[Keyword::If, Keyword::Not, Keyword::Exists]);
        let names = self.parse_comma_separated(Parser::parse_object_name)?;
        let options = if self.parse_keyword(Keyword::With) {
            self.parse_role_options()?
        } else {
            Vec::new()
        };
        Ok(Statement::CreateRole {
            names,
            if_not_exists,
            options,
        })
    }

    pub(crate) fn parse_role_options(&mut self) -> Result<Vec<RoleOption>, ParserError> {
        let mut options = Vec::new();
        while let Token::Word(_) = self.peek_token().token {
            let name = self.parse_identifier()?;
            let value = match self.peek_token().token {
                Token::Number(..) | Token::SingleQuotedString(_) => {
                    Some(Expr::Value(self.parse_value()?))
                }
                _ => None,
            };
            options.push(RoleOption { name, value });
        }
        Ok(options)
    }

    /// One grammar covering the Hive, PostgreSQL and BigQuery spellings;
    /// every clause is set-once.
    pub fn parse_create_function(
        &mut self,
        or_replace: bool,
        temporary: bool,
    ) -> Result<Statement, ParserError> {
        let if_not_exists = self.parse_keywords(&[Keyword::If, Keyword::Not, Keyword::Exists]);
        let name = self.parse_object_name()?;
        let args = if self.consume_token(&Token::LeftParen) {
            if self.consume_token(&Token::RightParen) {
                Some(Vec::new())
            } else {
                let args = self.parse_comma_separated(Parser::parse_function_arg_def)?;
                self.expect_token(&Token::RightParen)?;
                Some(args)
            }
        } else {
            None
        };

        let mut return_type = None;
        let mut function_body = None;
        let mut behavior = None;
        let mut called_on_null = None;
        let mut language = None;
        let mut options = None;
        let mut using = None;
        loop {
            if self.parse_keyword(Keyword::Returns) {
                if self.parse_keywords(&[
                    Keyword::Null,
                    Keyword::On,
                    Keyword::Null,
                    Keyword::Input,
                ]) {
                    set_once(
                        &mut called_on_null,
                        FunctionCalledOnNull::ReturnsNullOnNullInput,
                        "NULL-call behavior",
                    )?;
                } else {
                    set_once(&mut return_type, self.parse_data_type()?, "RETURNS")?;
                }
            } else if self.parse_keywords(&[
                Keyword::Called,
                Keyword::On,
                Keyword::Null,
                Keyword::Input,
            ]) {
                set_once(
                    &mut called_on_null,
                    FunctionCalledOnNull::CalledOnNullInput,
                    "NULL-call behavior",
                )?;
            } else if self.parse_keyword(Keyword::Strict) {
                set_once(
                    &mut called_on_null,
                    FunctionCalledOnNull::Strict,
                    "NULL-call behavior",
                )?;
            } else if self.parse_keyword(Keyword::Immutable) {
                set_once(&mut behavior, FunctionBehavior::Immutable, "behavior")?;
            } else if self.parse_keyword(Keyword::Stable) {
                set_once(&mut behavior, FunctionBehavior::Stable, "behavior")?;
            } else if self.parse_keyword(Keyword::Volatile) {
                set_once(&mut behavior, FunctionBehavior::Volatile, "behavior")?;
            } else if self.parse_keyword(Keyword::Language) {
                set_once(&mut language, self.parse_identifier()?, "LANGUAGE")?;
            } else if self.peek_keyword(Keyword::Options) {
                set_once(
                    &mut options,
                    self.parse_options(Keyword::Options)?,
                    "OPTIONS",
                )?;
            } else if self.parse_keyword(Keyword::Using) {
                let spec = match self.expect_one_of_keywords(&[
                    Keyword::Jar,
                    Keyword::File,
                    Keyword::Archive,
                ])? {
                    Keyword::Jar => CreateFunctionUsing::Jar(self.parse_literal_string()?),
                    Keyword::File => CreateFunctionUsing::File(self.parse_literal_string()?),
                    _ => CreateFunctionUsing::Archive(self.parse_literal_string()?),
                };
                set_once(&mut using, spec, "USING")?;
            } else if self.parse_keyword(Keyword::As) {
                let body = self.parse_expr()?;
                let body = if options.is_some() {
                    CreateFunctionBody::AsAfterOptions(body)
                } else {
                    CreateFunctionBody::AsBeforeOptions(body)
                };
                set_once(&mut function_body, body, "AS")?;
            } else if self.parse_keyword(Keyword::Return) {
                set_once(
                    &mut function_body,
                    CreateFunctionBody::Return(self.parse_expr()?),
                    "RETURN",
                )?;
            } else {
                break;
            }
        }

        Ok(Statement::CreateFunction(CreateFunction {
            or_replace,
            temporary,
            if_not_exists,
            name,
            args,
            return_type,
            function_body,
            behavior,
            called_on_null,
            language,
            options,
            using,
        }))
    }

    fn parse_function_arg_def(&mut self) -> Result<OperateFunctionArg, ParserError> {
        // `name type` or a bare `type`
        let named = self.maybe_parse(|p| {
            let name = p.parse_identifier()?;
            let data_type = p.parse_data_type()?;
            Ok((name, data_type))
        })?;
        let (name, data_type) = match named {
            Some((name, data_type)) => (Some(name), data_type),
            None => (None, self.parse_data_type()?),
        };
        let default_expr = if self.parse_keyword(Keyword::Default)
            || self.consume_token(&Token::Eq)
        {
            Some(self.parse_expr()?)
        } else {
            None
        };
        Ok(OperateFunctionArg {
            name,
            data_type,
            default_expr,
        })
    }

    fn parse_create_macro(
        &mut self,
        or_replace: bool,
        temporary: bool,
    ) -> Result<Statement, ParserError> {
        let name = self.parse_object_name()?;
        let args = if self.consume_token(&Token::LeftParen) {
            let args = if self.consume_token(&Token::RightParen) {
                Vec::new()
            } else {
                let args = self.parse_comma_separated(|p| {
                    let name = p.parse_identifier()?;
                    let default_expr = if p.consume_token(&Token::Assignment) {
                        Some(p.parse_expr()?)
                    } else {
                        None
                    };
                    Ok(MacroArg { name, default_expr })
                })?;
                self.expect_token(&Token::RightParen)?;
                args
            };
            Some(args)
        } else {
            None
        };
        self.expect_keyword(Keyword::As)?;
        let definition = if self.parse_keyword(Keyword::Table) {
            MacroDefinition::Table(self.parse_query()?)
        } else {
            MacroDefinition::Expr(self.parse_expr()?)
        };
        Ok(Statement::CreateMacro {
            or_replace,
            temporary,
            name,
            args,
            definition,
        })
    }

    fn parse_create_procedure(&mut self, or_alter: bool) -> Result<Statement, ParserError> {
        let name = self.parse_object_name()?;
        let params = if self.consume_token(&Token::LeftParen) {
            if self.consume_token(&Token::RightParen) {
                Some(Vec::new())
            } else {
                let params = self.parse_comma_separated(|p| {
                    let name = p.parse_identifier()?;
                    let data_type = p.parse_data_type()?;
                    Ok(ProcedureParam { name, data_type })
                })?;
                self.expect_token(&Token::RightParen)?;
                Some(params)
            }
        } else {
            None
        };
        self.expect_keyword(Keyword::As)?;
        self.expect_keyword(Keyword::Begin)?;
        let body = self.parse_statements()?;
        self.expect_keyword(Keyword::End)?;
        Ok(Statement::CreateProcedure {
            or_alter,
            name,
            params,
            body,
        })
    }

    fn parse_create_trigger(&mut self, or_replace: bool) -> Result<Statement, ParserError> {
        let name = self.parse_object_name()?;
        let period = if self.parse_keyword(Keyword::Before) {
            TriggerPeriod::Before
        } else if self.parse_keyword(Keyword::After) {
            TriggerPeriod::After
        } else {
            self.expect_keywords(&[Keyword::Instead, Keyword::Of])?;
            TriggerPeriod::InsteadOf
        };
        let mut events = vec![self.parse_trigger_event()?];
        while self.parse_keyword(Keyword::Or) {
            events.push(self.parse_trigger_event()?);
        }
        self.expect_keyword(Keyword::On)?;
        let table_name = self.parse_object_name()?;
        let trigger_object = if self.parse_keyword(Keyword::For) {
            let _ = self.parse_keyword(Keyword::Each);
            if self.parse_keyword(Keyword::Row) {
                TriggerObject::Row
            } else {
                self.expect_keyword(Keyword::Statement)?;
                TriggerObject::Statement
            }
        } else {
            TriggerObject::Statement
        };
        let condition = if self.parse_keyword(Keyword::When) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        self.expect_keyword(Keyword::Execute)?;
        let exec_type = if self.parse_keyword(Keyword::Function) {
            TriggerExecBodyType::Function
        } else {
            self.expect_keyword(Keyword::Procedure)?;
            TriggerExecBodyType::Procedure
        };
        let func_name = self.parse_object_name()?;
        self.expect_token(&Token::LeftParen)?;
        self.expect_token(&Token::RightParen)?;
        Ok(Statement::CreateTrigger {
            or_replace,
            name,
            period,
            events,
            table_name,
            trigger_object,
            condition,
            exec_body: TriggerExecBody {
                exec_type,
                func_desc: FunctionDesc {
                    name: func_name,
                    args: None,
                },
            },
        })
    }

    fn parse_trigger_event(&mut self) -> Result<TriggerEvent, ParserError> {
        if self.parse_keyword(Keyword::Insert) {
            Ok(TriggerEvent::Insert)
        } else if self.parse_keyword(Keyword::Update) {
            let columns = if self.parse_keyword(Keyword::Of) {
                self.parse_comma_separated(Parser::parse_identifier)?
            } else {
                Vec::new()
            };
            Ok(TriggerEvent::Update(columns))
        } else if self.parse_keyword(Keyword::Delete) {
            Ok(TriggerEvent::Delete)
        } else if self.parse_keyword(Keyword::Truncate) {
            Ok(TriggerEvent::Truncate)
        } else {
            self.expected("INSERT, UPDATE, DELETE or TRUNCATE", self.peek_token())
        }
    }

    fn parse_create_type(&mut self) -> Result<Statement, ParserError> {
        let name = self.parse_object_name()?;
        self.expect_keyword(Keyword::As)?;
        let representation = if self.parse_keyword(Keyword::Enum) {
            self.expect_token(&Token::LeftParen)?;
            let labels = self.parse_comma_separated(Parser::parse_identifier)?;
            self.expect_token(&Token::RightParen)?;
            UserDefinedTypeRepresentation::Enum { labels }
        } else {
            self.expect_token(&Token::LeftParen)?;
            let attributes = self.parse_comma_separated(|p| {
                let name = p.parse_identifier()?;
                let data_type = p.parse_data_type()?;
                let collation = if p.parse_keyword(Keyword::Collate) {
                    Some(p.parse_object_name()?)
                } else {
                    None
                };
                Ok(UserDefinedTypeCompositeAttributeDef {
                    name,
                    data_type,
                    collation,
                })
            })?;
            self.expect_token(&Token::RightParen)?;
            UserDefinedTypeRepresentation::Composite { attributes }
        };
        Ok(Statement::CreateType {
            name,
            representation,
        })
    }

    fn parse_create_sequence(&mut self, temporary: bool) -> Result<Statement, ParserError> {
        let if_not_exists = self.parse_keywords(&[Keyword::If, Keyword::Not, Keyword::Exists]);
        let name = self.parse_object_name()?;
        let data_type = if self.parse_keyword(Keyword::As) {
            Some(self.parse_data_type()?)
        } else {
            None
        };
        let sequence_options = self.parse_sequence_option_list()?;
        let owned_by = if self.parse_keywords(&[Keyword::Owned, Keyword::By]) {
            if self.parse_keyword(Keyword::None) {
                None
            } else {
                Some(self.parse_object_name()?)
            }
        } else {
            None
        };
        Ok(Statement::CreateSequence {
            temporary,
            if_not_exists,
            name,
            data_type,
            sequence_options,
            owned_by,
        })
    }

    pub(crate) fn parse_sequence_option_list(
        &mut self,
    ) -> Result<Vec<SequenceOptions>, ParserError> {
        let mut options = Vec::new();
        loop {
            if self.parse_keyword(Keyword::Increment) {
                let _ = self.parse_keyword(Keyword::By);
                options.push(SequenceOptions::IncrementBy(self.parse_expr()?));
            } else if self.parse_keyword(Keyword::Minvalue) {
                options.push(SequenceOptions::MinValue(self.parse_expr()?));
            } else if self.parse_keywords(&[Keyword::No, Keyword::Minvalue]) {
                options.push(SequenceOptions::NoMinValue);
            } else if self.parse_keyword(Keyword::Maxvalue) {
                options.push(SequenceOptions::MaxValue(self.parse_expr()?));
            } else if self.parse_keywords(&[Keyword::No, Keyword::Maxvalue]) {
                options.push(SequenceOptions::NoMaxValue);
            } else if self.parse_keyword(Keyword::Start) {
                let _ = self.parse_keyword(Keyword::With);
                options.push(SequenceOptions::StartWith(self.parse_expr()?));
            } else if self.parse_keyword(Keyword::Cache) {
                options.push(SequenceOptions::Cache(self.parse_expr()?));
            } else if self.parse_keywords(&[Keyword::No, Keyword::Cycle]) {
                options.push(SequenceOptions::NoCycle);
            } else if self.parse_keyword(Keyword::Cycle) {
                options.push(SequenceOptions::Cycle);
            } else {
                break;
            }
        }
        Ok(options)
    }

    fn parse_create_secret(
        &mut self,
        or_replace: bool,
        temporary: bool,
        persistent: bool,
    ) -> Result<Statement, ParserError> {
        let if_not_exists = self.parse_keywords(&[Keyword::If, Keyword::Not, Keyword::Exists]);
        let name = if self.peek_token() == Token::LeftParen {
            None
        } else {
            Some(self.parse_identifier()?)
        };
        self.expect_token(&Token::LeftParen)?;
        self.expect_keyword(Keyword::Type)?;
        let secret_type = self.parse_identifier()?;
        let mut options = Vec::new();
        while self.consume_token(&Token::Comma) {
            let key = self.parse_identifier()?;
            let value = self.parse_identifier()?;
            options.push(SecretOption { key, value });
        }
        self.expect_token(&Token::RightParen)?;
        Ok(Statement::CreateSecret {
            or_replace,
            temporary: temporary.then_some(true).or(persistent.then_some(false)),
            if_not_exists,
            name,
            secret_type,
            options,
        })
    }

    fn parse_create_extension(&mut self) -> Result<Statement, ParserError> {
        let if_not_exists = self.parse_keywords(&[Keyword::If, Keyword::Not, Keyword::Exists]);
        let name = self.parse_identifier()?;
        let (mut schema, mut version, mut cascade) = (None, None, false);
        if self.parse_keyword(Keyword::With) {
            loop {
                if self.parse_keyword(Keyword::Schema) {
                    schema = Some(self.parse_identifier()?);
                } else if self.parse_keyword(Keyword::Version) {
                    version = Some(self.parse_identifier()?);
                } else if self.parse_keyword(Keyword::Cascade) {
                    cascade = true;
                } else {
                    break;
                }
            }
        }
        Ok(Statement::CreateExtension {
            name,
            if_not_exists,
            cascade,
            schema,
            version,
        })
    }

    // ------------------------------------------------------------------
    // DROP
    // ------------------------------------------------------------------

    pub fn parse_drop(&mut self) -> Result<Statement, ParserError> {
        let temporary = self
            .parse_one_of_keywords(&[Keyword::Temp, Keyword::Temporary])
            .is_some();
        let persistent = self.parse_keyword(Keyword::Persistent);
        let object_type = if self.parse_keyword(Keyword::Table) {
            ObjectType::Table
        } else if self.parse_keyword(Keyword::View) {
            ObjectType::View
        } else if self.parse_keyword(Keyword::Index) {
            ObjectType::Index
        } else if self.parse_keyword(Keyword::Schema) {
            ObjectType::Schema
        } else if self.parse_keyword(Keyword::Database) {
            ObjectType::Database
        } else if self.parse_keyword(Keyword::Role) {
            ObjectType::Role
        } else if self.parse_keyword(Keyword::Sequence) {
            ObjectType::Sequence
        } else if self.parse_keyword(Keyword::Function) {
            return self.parse_drop_function();
        } else if self.parse_keyword(Keyword::Procedure) {
            return self.parse_drop_procedure();
        } else if self.parse_keyword(Keyword::Trigger) {
            return self.parse_drop_trigger();
        } else if self.parse_keyword(Keyword::Secret) {
            return self.parse_drop_secret(temporary, persistent);
        } else if self.parse_keyword(Keyword::Policy) {
            return self.parse_drop_policy();
        } else {
            return self.expected("an object type after DROP", self.peek_token());
        };
        let if_exists = self.parse_keywords(&[Keyword::If, Keyword::Exists]);
        let names = self.parse_comma_separated(Parser::parse_object_name)?;
        let cascade = self.parse_keyword(Keyword::Cascade);
        let restrict = self.parse_keyword(Keyword::Restrict);
        let purge = self.parse_keyword(Keyword::Purge);
        Ok(Statement::Drop {
            object_type,
            if_exists,
            names,
            cascade,
            restrict,
            purge,
            temporary,
        })
    }

    fn parse_drop_function(&mut self) -> Result<Statement, ParserError> {
        let if_exists = self.parse_keywords(&[Keyword::If, Keyword::Exists]);
        let func_desc = self.parse_comma_separated(Parser::parse_function_desc)?;
        let option = self.parse_optional_drop_behavior();
        Ok(Statement::DropFunction {
            if_exists,
            func_desc,
            option,
        })
    }

    fn parse_drop_procedure(&mut self) -> Result<Statement, ParserError> {
        let if_exists = self.parse_keywords(&[Keyword::If, Keyword::Exists]);
        let proc_desc = self.parse_comma_separated(Parser::parse_function_desc)?;
        let option = self.parse_optional_drop_behavior();
        Ok(Statement::DropProcedure {
            if_exists,
            proc_desc,
            option,
        })
    }

    fn parse_function_desc(&mut self) -> Result<FunctionDesc, ParserError> {
        let name = self.parse_object_name()?;
        let args = if self.consume_token(&Token::LeftParen) {
            if self.consume_token(&Token::RightParen) {
                Some(Vec::new())
            } else {
                let args = self.parse_comma_separated(Parser::parse_function_arg_def)?;
                self.expect_token(&Token::RightParen)?;
                Some(args)
            }
        } else {
            None
        };
        Ok(FunctionDesc { name, args })
    }

    fn parse_optional_drop_behavior(&mut self) -> Option<ReferentialAction> {
        if self.parse_keyword(Keyword::Cascade) {
            Some(ReferentialAction::Cascade)
        } else if self.parse_keyword(Keyword::Restrict) {
            Some(ReferentialAction::Restrict)
        } else {
            None
        }
    }

    fn parse_drop_trigger(&mut self) -> Result<Statement, ParserError> {
        let if_exists = self.parse_keywords(&[Keyword::If, Keyword::Exists]);
        let trigger_name = self.parse_object_name()?;
        let table_name = if self.parse_keyword(Keyword::On) {
            Some(self.parse_object_name()?)
        } else {
            None
        };
        let option = self.parse_optional_drop_behavior();
        Ok(Statement::DropTrigger {
            if_exists,
            trigger_name,
            table_name,
            option,
        })
    }

    fn parse_drop_secret(
        &mut self,
        temporary: bool,
        persistent: bool,
    ) -> Result<Statement, ParserError> {
        let if_exists = self.parse_keywords(&[Keyword::If, Keyword::Exists]);
        let name = self.parse_identifier()?;
        Ok(Statement::DropSecret {
            if_exists,
            temporary: temporary.then_some(true).or(persistent.then_some(false)),
            name,
        })
    }

    fn parse_drop_policy(&mut self) -> Result<Statement, ParserError> {
        let if_exists = self.parse_keywords(&[Keyword::If, Keyword::Exists]);
        let name = self.parse_identifier()?;
        self.expect_keyword(Keyword::On)?;
        let table_name = self.parse_object_name()?;
        let option = self.parse_optional_drop_behavior();
        Ok(Statement::DropPolicy {
            if_exists,
            name,
            table_name,
            option,
        })
    }

    // ------------------------------------------------------------------
    // ALTER
    // ------------------------------------------------------------------

    pub fn parse_alter(&mut self) -> Result<Statement, ParserError> {
        match self.expect_one_of_keywords(&[
            Keyword::Table,
            Keyword::View,
            Keyword::Index,
            Keyword::Role,
        ])? {
            Keyword::Table => {
                let if_exists = self.parse_keywords(&[Keyword::If, Keyword::Exists]);
                let only = self.parse_keyword(Keyword::Only);
                let name = self.parse_object_name()?;
                let operations =
                    self.parse_comma_separated(Parser::parse_alter_table_operation)?;
                Ok(Statement::AlterTable {
                    name,
                    if_exists,
                    only,
                    operations,
                })
            }
            Keyword::View => {
                let name = self.parse_object_name()?;
                let columns = self.parse_parenthesized_column_list(IsOptional::Optional, false)?;
                let with_options = self.parse_options(Keyword::With)?;
                self.expect_keyword(Keyword::As)?;
                let query = self.parse_query()?;
                Ok(Statement::AlterView {
                    name,
                    columns,
                    query,
                    with_options,
                })
            }
            Keyword::Index => {
                let name = self.parse_object_name()?;
                self.expect_keywords(&[Keyword::Rename, Keyword::To])?;
                let index_name = self.parse_object_name()?;
                Ok(Statement::AlterIndex {
                    name,
                    operation: AlterIndexOperation::RenameIndex { index_name },
                })
            }
            _ => {
                let name = self.parse_identifier()?;
                let operation = if self.parse_keywords(&[Keyword::Rename, Keyword::To]) {
                    AlterRoleOperation::RenameRole {
                        role_name: self.parse_identifier()?,
                    }
                } else {
                    let _ = self.parse_keyword(Keyword::With);
                    AlterRoleOperation::WithOptions {
                        options: self.parse_role_options()?,
                    }
                };
                Ok(Statement::AlterRole { name, operation })
            }
        }
    }

    pub fn parse_alter_table_operation(&mut self) -> Result<AlterTableOperation, ParserError> {
        if self.parse_keyword(Keyword::Add) {
            return self.parse_alter_table_add();
        }
        if self.parse_keyword(Keyword::Rename) {
            if self.parse_keyword(Keyword::Column) {
                let old_column_name = self.parse_identifier()?;
                self.expect_keyword(Keyword::To)?;
                let new_column_name = self.parse_identifier()?;
                return Ok(AlterTableOperation::RenameColumn {
                    old_column_name,
                    new_column_name,
                });
            }
            if self.parse_keyword(Keyword::Constraint) {
                let old_name = self.parse_identifier()?;
                self.expect_keyword(Keyword::To)?;
                let new_name = self.parse_identifier()?;
                return Ok(AlterTableOperation::RenameConstraint { old_name, new_name });
            }
            self.expect_keyword(Keyword::To)?;
            return Ok(AlterTableOperation::RenameTable {
                table_name: self.parse_object_name()?,
            });
        }
        if self.parse_keyword(Keyword::Drop) {
            if self.parse_keywords(&[Keyword::Primary, Keyword::Key]) {
                return Ok(AlterTableOperation::DropPrimaryKey);
            }
            if self.parse_keyword(Keyword::Projection) {
                let if_exists = self.parse_keywords(&[Keyword::If, Keyword::Exists]);
                let name = self.parse_identifier()?;
                return Ok(AlterTableOperation::DropProjection { if_exists, name });
            }
            if self.parse_keyword(Keyword::Partition) {
                let if_exists = self.parse_keywords(&[Keyword::If, Keyword::Exists]);
                self.expect_token(&Token::LeftParen)?;
                let partitions = self.parse_comma_separated(Parser::parse_expr)?;
                self.expect_token(&Token::RightParen)?;
                return Ok(AlterTableOperation::DropPartitions {
                    if_exists,
                    partitions,
                });
            }
            if self.parse_keyword(Keyword::Constraint) {
                let if_exists = self.parse_keywords(&[Keyword::If, Keyword::Exists]);
                let name = self.parse_identifier()?;
                let cascade = self.parse_keyword(Keyword::Cascade);
                return Ok(AlterTableOperation::DropConstraint {
                    if_exists,
                    name,
                    cascade,
                });
            }
            let _ = self.parse_keyword(Keyword::Column);
            let if_exists = self.parse_keywords(&[Keyword::If, Keyword::Exists]);
            let column_name = self.parse_identifier()?;
            let cascade = self.parse_keyword(Keyword::Cascade);
            return Ok(AlterTableOperation::DropColumn {
                if_exists,
                column_name,
                cascade,
            });
        }
        if self.parse_keyword(Keyword::Change) {
            let _ = self.parse_keyword(Keyword::Column);
            let old_name = self.parse_identifier()?;
            let new_name = self.parse_identifier()?;
            let data_type = self.parse_data_type()?;
            let mut options = Vec::new();
            while let Some(option) = self.parse_optional_column_option()? {
                options.push(option);
            }
            return Ok(AlterTableOperation::ChangeColumn {
                old_name,
                new_name,
                data_type,
                options,
            });
        }
        if self.parse_keyword(Keyword::Modify) {
            let _ = self.parse_keyword(Keyword::Column);
            let col_name = self.parse_identifier()?;
            let data_type = self.parse_data_type()?;
            let mut options = Vec::new();
            while let Some(option) = self.parse_optional_column_option()? {
                options.push(option);
            }
            return Ok(AlterTableOperation::ModifyColumn {
                col_name,
                data_type,
                options,
            });
        }
        if self.parse_keyword(Keyword::Alter) {
            let _ = self.parse_keyword(Keyword::Column);
            let column_name = self.parse_identifier()?;
            let op = if self.parse_keywords(&[Keyword::Set, Keyword::Not, Keyword::Null]) {
                AlterColumnOperation::SetNotNull
            } else if self.parse_keywords(&[Keyword::Drop, Keyword::Not, Keyword::Null]) {
                AlterColumnOperation::DropNotNull
            } else if self.parse_keywords(&[Keyword::Set, Keyword::Default]) {
                AlterColumnOperation::SetDefault {
                    value: self.parse_expr()?,
                }
            } else if self.parse_keywords(&[Keyword::Drop, Keyword::Default]) {
                AlterColumnOperation::DropDefault
            } else if self.parse_keywords(&[Keyword::Set, Keyword::Data, Keyword::Type])
                || self.parse_keyword(Keyword::Type)
            {
                let data_type = self.parse_data_type()?;
                let using = if self.parse_keyword(Keyword::Using) {
                    Some(self.parse_expr()?)
                } else {
                    None
                };
                AlterColumnOperation::SetDataType { data_type, using }
            } else if self.parse_keywords(&[Keyword::Add, Keyword::Generated]) {
                let generated_as = if self.parse_keyword(Keyword::Always) {
                    Some(GeneratedAs::Always)
                } else if self.parse_keywords(&[Keyword::By, Keyword::Default]) {
                    Some(GeneratedAs::ByDefault)
                } else {
                    None
                };
                self.expect_keywords(&[Keyword::As, Keyword::Identity])?;
                let sequence_options = if self.consume_token(&Token::LeftParen) {
                    let options = self.parse_sequence_option_list()?;
                    self.expect_token(&Token::RightParen)?;
                    Some(options)
                } else {
                    None
                };
                AlterColumnOperation::AddGenerated {
                    generated_as,
                    sequence_options,
                }
            } else {
                return self.expected(
                    "SET/DROP NOT NULL, SET/DROP DEFAULT, SET DATA TYPE or ADD GENERATED",
                    self.peek_token(),
                );
            };
            return Ok(AlterTableOperation::AlterColumn { column_name, op });
        }
        if self.parse_keywords(&[Keyword::Swap, Keyword::With]) {
            return Ok(AlterTableOperation::SwapWith {
                table_name: self.parse_object_name()?,
            });
        }
        if self.parse_keyword(Keyword::Enable) {
            if self.parse_keywords(&[Keyword::Row, Keyword::Level, Keyword::Security]) {
                return Ok(AlterTableOperation::EnableRowLevelSecurity);
            }
            if self.parse_keyword(Keyword::Rule) {
                return Ok(AlterTableOperation::EnableRule {
                    name: self.parse_identifier()?,
                });
            }
            self.expect_keyword(Keyword::Trigger)?;
            return Ok(AlterTableOperation::EnableTrigger {
                name: self.parse_identifier()?,
            });
        }
        if self.parse_keyword(Keyword::Disable) {
            if self.parse_keywords(&[Keyword::Row, Keyword::Level, Keyword::Security]) {
                return Ok(AlterTableOperation::DisableRowLevelSecurity);
            }
            if self.parse_keyword(Keyword::Rule) {
                return Ok(AlterTableOperation::DisableRule {
                    name: self.parse_identifier()?,
                });
            }
            self.expect_keyword(Keyword::Trigger)?;
            return Ok(AlterTableOperation::DisableTrigger {
                name: self.parse_identifier()?,
            });
        }
        if self.parse_keywords(&[Keyword::Owner, Keyword::To]) {
            let owner = if self.parse_keyword(Keyword::CurrentUser) {
                Owner::CurrentUser
            } else if self.parse_keyword(Keyword::SessionUser) {
                Owner::SessionUser
            } else {
                Owner::Identifier(self.parse_identifier()?)
            };
            return Ok(AlterTableOperation::OwnerTo(owner));
        }
        if self.parse_keyword(Keyword::Attach) {
            return Ok(AlterTableOperation::AttachPartition {
                partition: self.parse_part_or_partition()?,
            });
        }
        if self.parse_keyword(Keyword::Detach) {
            return Ok(AlterTableOperation::DetachPartition {
                partition: self.parse_part_or_partition()?,
            });
        }
        if self.parse_keyword(Keyword::Freeze) {
            let partition = self.parse_part_or_partition()?;
            let with_name = if self.parse_keywords(&[Keyword::With, Keyword::Name]) {
                Some(self.parse_identifier()?)
            } else {
                None
            };
            return Ok(AlterTableOperation::FreezePartition {
                partition,
                with_name,
            });
        }
        if self.parse_keyword(Keyword::Unfreeze) {
            let partition = self.parse_part_or_partition()?;
            let with_name = if self.parse_keywords(&[Keyword::With, Keyword::Name]) {
                Some(self.parse_identifier()?)
            } else {
                None
            };
            return Ok(AlterTableOperation::UnfreezePartition {
                partition,
                with_name,
            });
        }
        self.expected("an ALTER TABLE operation", self.peek_token())
    }

    fn parse_alter_table_add(&mut self) -> Result<AlterTableOperation, ParserError> {
        if self.parse_keyword(Keyword::Projection) {
            let if_not_exists = self.parse_keywords(&[Keyword::If, Keyword::Not, Keyword::Exists]);
            let name = self.parse_identifier()?;
            let select = self.parse_parenthesized(Parser::parse_query)?;
            return Ok(AlterTableOperation::AddProjection {
                if_not_exists,
                name,
                select,
            });
        }
        let if_not_exists_first =
            self.parse_keywords(&[Keyword::If, Keyword::Not, Keyword::Exists]);
        if self.parse_keyword(Keyword::Partition) {
            self.expect_token(&Token::LeftParen)?;
            let new_partitions = self.parse_comma_separated(Parser::parse_expr)?;
            self.expect_token(&Token::RightParen)?;
            return Ok(AlterTableOperation::AddPartitions {
                if_not_exists: if_not_exists_first,
                new_partitions,
            });
        }
        if !if_not_exists_first {
            if let Some(constraint) = self.parse_optional_table_constraint()? {
                return Ok(AlterTableOperation::AddConstraint(constraint));
            }
        }
        let column_keyword = self.parse_keyword(Keyword::Column);
        let if_not_exists = if_not_exists_first
            || self.parse_keywords(&[Keyword::If, Keyword::Not, Keyword::Exists]);
        let column_def = self.parse_column_def()?;
        Ok(AlterTableOperation::AddColumn {
            column_keyword,
            if_not_exists,
            column_def,
        })
    }

    pub(crate) fn parse_part_or_partition(&mut self) -> Result<Partition, ParserError> {
        if self.parse_keyword(Keyword::Part) {
            Ok(Partition::Part(self.parse_expr()?))
        } else {
            self.expect_keyword(Keyword::Partition)?;
            Ok(Partition::Expr(self.parse_expr()?))
        }
    }

    // ------------------------------------------------------------------
    // TRUNCATE / MSCK / CACHE
    // ------------------------------------------------------------------

    pub fn parse_truncate(&mut self) -> Result<Statement, ParserError> {
        let table = self.parse_keyword(Keyword::Table);
        let table_names = self.parse_comma_separated(Parser::parse_object_name)?;
        let partitions = if self.parse_keyword(Keyword::Partition) {
            self.expect_token(&Token::LeftParen)?;
            let partitions = self.parse_comma_separated(Parser::parse_expr)?;
            self.expect_token(&Token::RightParen)?;
            Some(partitions)
        } else {
            None
        };
        Ok(Statement::Truncate {
            table_names,
            partitions,
            table,
        })
    }

    pub fn parse_msck(&mut self) -> Result<Statement, ParserError> {
        let repair = self.parse_keyword(Keyword::Repair);
        self.expect_keyword(Keyword::Table)?;
        let table_name = self.parse_object_name()?;
        let partition_action = self
            .parse_one_of_keywords(&[Keyword::Add, Keyword::Drop, Keyword::Sync])
            .map(|keyword| {
                let _ = self.parse_keyword(Keyword::Partitions);
                match keyword {
                    Keyword::Add => AddDropSync::Add,
                    Keyword::Drop => AddDropSync::Drop,
                    _ => AddDropSync::Sync,
                }
            });
        Ok(Statement::Msck {
            table_name,
            repair,
            partition_action,
        })
    }

    pub fn parse_cache_table(&mut self) -> Result<Statement, ParserError> {
        let table_flag = if self.parse_keyword(Keyword::Table) {
            None
        } else {
            let flag = self.parse_object_name()?;
            self.expect_keyword(Keyword::Table)?;
            Some(flag)
        };
        let table_name = self.parse_object_name()?;
        let options = self.parse_options(Keyword::Options)?;
        let has_as = self.parse_keyword(Keyword::As);
        let query = if has_as || self.peek_keyword(Keyword::Select) {
            Some(self.parse_query()?)
        } else {
            None
        };
        Ok(Statement::Cache {
            table_flag,
            table_name,
            has_as,
            options,
            query,
        })
    }

    pub fn parse_uncache_table(&mut self) -> Result<Statement, ParserError> {
        self.expect_keyword(Keyword::Table)?;
        let if_exists = self.parse_keywords(&[Keyword::If, Keyword::Exists]);
        let table_name = self.parse_object_name()?;
        Ok(Statement::UNCache {
            table_name,
            if_exists,
        })
    }
}
