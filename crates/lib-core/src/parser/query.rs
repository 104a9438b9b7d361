//! Queries: `WITH`, set-expressions, `SELECT`, table factors and joins.

use crate::ast::*;
use crate::errors::ParserError;
use crate::keywords::{Keyword, RESERVED_FOR_COLUMN_ALIAS, RESERVED_FOR_TABLE_ALIAS};
use crate::parser::{IsOptional, Parser, ParserState};
use crate::parser_err;
use crate::tokens::Token;

impl<'a> Parser<'a> {
    /// Runs `f` with the given parser state, restoring the previous state
    /// on every path.
    pub(crate) fn with_state<T>(
        &mut self,
        state: ParserState,
        f: impl FnOnce(&mut Self) -> Result<T, ParserError>,
    ) -> Result<T, ParserError> {
        let prior = self.state;
        self.state = state;
        let result = f(self);
        self.state = prior;
        result
    }

    /// A complete query expression.
    pub fn parse_query(&mut self) -> Result<Box<Query>, ParserError> {
        let _guard = self.recursion.try_decrease()?;

        let with = if self.parse_keyword(Keyword::With) {
            Some(With {
                recursive: self.parse_keyword(Keyword::Recursive),
                cte_tables: self.parse_comma_separated(Parser::parse_cte)?,
            })
        } else {
            None
        };

        if self.parse_keyword(Keyword::Insert) {
            let insert = self.parse_insert(false)?;
            return Ok(Box::new(Query {
                with,
                body: Box::new(SetExpr::Insert(insert)),
                order_by: None,
                limit: None,
                limit_by: Vec::new(),
                offset: None,
                fetch: None,
                locks: Vec::new(),
            }));
        }
        if self.parse_keyword(Keyword::Update) {
            let update = self.parse_update()?;
            return Ok(Box::new(Query {
                with,
                body: Box::new(SetExpr::Update(update)),
                order_by: None,
                limit: None,
                limit_by: Vec::new(),
                offset: None,
                fetch: None,
                locks: Vec::new(),
            }));
        }

        let body = self.parse_query_body(0)?;
        let order_by = self.parse_optional_order_by()?;

        let mut limit = None;
        let mut offset = None;
        for _ in 0..2 {
            if limit.is_none() && self.parse_keyword(Keyword::Limit) {
                limit = self.parse_limit()?;
            }
            if offset.is_none() && self.parse_keyword(Keyword::Offset) {
                offset = Some(self.parse_offset()?);
            }
            if offset.is_none() && limit.is_some() && self.consume_token(&Token::Comma) {
                // MySQL `LIMIT offset, limit`, normalised to the canonical
                // clauses
                offset = Some(Offset {
                    value: limit.take().expect("checked above"),
                    rows: OffsetRows::None,
                });
                limit = Some(self.parse_expr()?);
            }
        }

        let limit_by = if self.parse_keyword(Keyword::By) {
            self.parse_comma_separated(Parser::parse_expr)?
        } else {
            Vec::new()
        };

        let fetch = if self.parse_keyword(Keyword::Fetch) {
            Some(self.parse_fetch()?)
        } else {
            None
        };

        let mut locks = Vec::new();
        while self.parse_keyword(Keyword::For) {
            locks.push(self.parse_lock()?);
        }

        Ok(Box::new(Query {
            with,
            body,
            order_by,
            limit,
            limit_by,
            offset,
            fetch,
            locks,
        }))
    }

    fn parse_cte(&mut self) -> Result<Cte, ParserError> {
        let name = self.parse_identifier()?;
        let columns = self.parse_parenthesized_column_list(IsOptional::Optional, false)?;
        self.expect_keyword(Keyword::As)?;
        let materialized = if self.parse_keyword(Keyword::Materialized) {
            Some(CteAsMaterialized::Materialized)
        } else if self.parse_keywords(&[Keyword::Not, Keyword::Materialized]) {
            Some(CteAsMaterialized::NotMaterialized)
        } else {
            None
        };
        self.expect_token(&Token::LeftParen)?;
        let query = self.parse_query()?;
        self.expect_token(&Token::RightParen)?;
        let from = if self.parse_keyword(Keyword::From) {
            Some(self.parse_identifier()?)
        } else {
            None
        };
        Ok(Cte {
            alias: TableAlias { name, columns },
            query,
            materialized,
            from,
        })
    }

    /// A query body, extended with set operations while they bind tighter
    /// than `min_precedence`. Set operations are left-associative at equal
    /// precedence; `INTERSECT` binds tighter than `UNION`/`EXCEPT`.
    pub fn parse_query_body(&mut self, min_precedence: u8) -> Result<Box<SetExpr>, ParserError> {
        let expr = if self.parse_keyword(Keyword::Select) {
            SetExpr::Select(Box::new(self.parse_select()?))
        } else if self.consume_token(&Token::LeftParen) {
            let subquery = self.parse_query()?;
            self.expect_token(&Token::RightParen)?;
            SetExpr::Query(subquery)
        } else if self.parse_keyword(Keyword::Values) {
            SetExpr::Values(self.parse_values()?)
        } else if self.parse_keyword(Keyword::Table) {
            SetExpr::Table(self.parse_object_name()?)
        } else {
            return self.expected(
                "SELECT, VALUES, or a subquery in the query body",
                self.peek_token(),
            );
        };

        let mut expr = expr;
        loop {
            let op = self.peek_set_operator();
            let next_precedence = match op {
                Some(SetOperator::Union) | Some(SetOperator::Except) => 10,
                Some(SetOperator::Intersect) => 20,
                None => break,
            };
            if min_precedence >= next_precedence {
                break;
            }
            self.next_token();
            let set_quantifier = self.parse_set_quantifier()?;
            let right = self.parse_query_body(next_precedence)?;
            expr = SetExpr::SetOperation {
                op: op.expect("checked above"),
                set_quantifier,
                left: Box::new(expr),
                right,
            };
        }
        Ok(Box::new(expr))
    }

    fn peek_set_operator(&self) -> Option<SetOperator> {
        match self.peek_token().token {
            Token::Word(w) => match w.keyword {
                Keyword::Union => Some(SetOperator::Union),
                Keyword::Except => Some(SetOperator::Except),
                Keyword::Intersect => Some(SetOperator::Intersect),
                _ => None,
            },
            _ => None,
        }
    }

    fn parse_set_quantifier(&mut self) -> Result<SetQuantifier, ParserError> {
        if self.parse_keywords(&[Keyword::Distinct, Keyword::By, Keyword::Name]) {
            Ok(SetQuantifier::DistinctByName)
        } else if self.parse_keywords(&[Keyword::All, Keyword::By, Keyword::Name]) {
            Ok(SetQuantifier::AllByName)
        } else if self.parse_keywords(&[Keyword::By, Keyword::Name]) {
            Ok(SetQuantifier::ByName)
        } else if self.parse_keyword(Keyword::All) {
            Ok(SetQuantifier::All)
        } else if self.parse_keyword(Keyword::Distinct) {
            Ok(SetQuantifier::Distinct)
        } else {
            Ok(SetQuantifier::None)
        }
    }

    /// The restricted `SELECT` body; `SELECT` is already consumed.
    pub fn parse_select(&mut self) -> Result<Select, ParserError> {
        let value_table_mode = if self.parse_keywords(&[Keyword::As, Keyword::Value]) {
            Some(ValueTableMode::AsValue)
        } else if self.parse_keywords(&[Keyword::As, Keyword::Struct]) {
            Some(ValueTableMode::AsStruct)
        } else {
            None
        };

        let mut top = None;
        let mut top_before_distinct = false;
        if self.caps().supports_top_before_distinct && self.parse_keyword(Keyword::Top) {
            top = Some(self.parse_top()?);
            top_before_distinct = true;
        }
        let distinct = self.parse_all_or_distinct()?;
        if top.is_none() && self.parse_keyword(Keyword::Top) {
            top = Some(self.parse_top()?);
        }

        let projection = self.parse_projection()?;

        let into = if self.parse_keyword(Keyword::Into) {
            let temporary = self
                .parse_one_of_keywords(&[Keyword::Temp, Keyword::Temporary])
                .is_some();
            let unlogged = self.parse_keyword(Keyword::Unlogged);
            let table = self.parse_keyword(Keyword::Table);
            Some(SelectInto {
                temporary,
                unlogged,
                table,
                name: self.parse_object_name()?,
            })
        } else {
            None
        };

        let from = if self.parse_keyword(Keyword::From) {
            self.parse_comma_separated(Parser::parse_table_and_joins)?
        } else {
            Vec::new()
        };

        let mut lateral_views = Vec::new();
        while self.parse_keywords(&[Keyword::Lateral, Keyword::View]) {
            let outer = self.parse_keyword(Keyword::Outer);
            let lateral_view = self.parse_expr()?;
            let lateral_view_name = self.parse_object_name()?;
            let lateral_col_alias = if self.parse_keyword(Keyword::As) {
                self.parse_comma_separated(Parser::parse_identifier)?
            } else {
                Vec::new()
            };
            lateral_views.push(LateralView {
                lateral_view,
                lateral_view_name,
                lateral_col_alias,
                outer,
            });
        }

        let prewhere = if self.parse_keyword(Keyword::Prewhere) {
            Some(self.parse_expr()?)
        } else {
            None
        };

        let selection = if self.parse_keyword(Keyword::Where) {
            Some(self.parse_expr()?)
        } else {
            None
        };

        let group_by = self.parse_optional_group_by()?;

        let cluster_by = if self.parse_keywords(&[Keyword::Cluster, Keyword::By]) {
            self.parse_comma_separated(Parser::parse_expr)?
        } else {
            Vec::new()
        };
        let distribute_by = if self.parse_keywords(&[Keyword::Distribute, Keyword::By]) {
            self.parse_comma_separated(Parser::parse_expr)?
        } else {
            Vec::new()
        };
        let sort_by = if self.parse_keywords(&[Keyword::Sort, Keyword::By]) {
            self.parse_comma_separated(Parser::parse_expr)?
        } else {
            Vec::new()
        };

        let having = if self.parse_keyword(Keyword::Having) {
            Some(self.parse_expr()?)
        } else {
            None
        };

        // WINDOW and QUALIFY may come in either order; record which
        let (named_window, qualify, window_before_qualify) =
            if self.parse_keyword(Keyword::Window) {
                let named_window = self.parse_comma_separated(Parser::parse_named_window)?;
                let qualify = if self.parse_keyword(Keyword::Qualify) {
                    Some(self.parse_expr()?)
                } else {
                    None
                };
                (named_window, qualify, true)
            } else if self.parse_keyword(Keyword::Qualify) {
                let qualify = Some(self.parse_expr()?);
                let named_window = if self.parse_keyword(Keyword::Window) {
                    self.parse_comma_separated(Parser::parse_named_window)?
                } else {
                    Vec::new()
                };
                (named_window, qualify, false)
            } else {
                (Vec::new(), None, false)
            };

        let connect_by = if self.caps().supports_connect_by {
            self.parse_optional_connect_by()?
        } else {
            None
        };

        Ok(Select {
            distinct,
            top,
            top_before_distinct,
            value_table_mode,
            projection,
            into,
            from,
            lateral_views,
            prewhere,
            selection,
            group_by,
            cluster_by,
            distribute_by,
            sort_by,
            having,
            named_window,
            qualify,
            window_before_qualify,
            connect_by,
        })
    }

    fn parse_optional_connect_by(&mut self) -> Result<Option<ConnectBy>, ParserError> {
        if self.parse_keywords(&[Keyword::Start, Keyword::With]) {
            let start_with = Some(self.parse_expr()?);
            self.expect_keywords(&[Keyword::Connect, Keyword::By])?;
            let relationships = self.with_state(ParserState::ConnectBy, |p| {
                p.parse_comma_separated(Parser::parse_expr)
            })?;
            Ok(Some(ConnectBy {
                start_with,
                relationships,
            }))
        } else if self.parse_keywords(&[Keyword::Connect, Keyword::By]) {
            let relationships = self.with_state(ParserState::ConnectBy, |p| {
                p.parse_comma_separated(Parser::parse_expr)
            })?;
            let start_with = if self.parse_keywords(&[Keyword::Start, Keyword::With]) {
                Some(self.parse_expr()?)
            } else {
                None
            };
            Ok(Some(ConnectBy {
                start_with,
                relationships,
            }))
        } else {
            Ok(None)
        }
    }

    /// The projection list, honouring projection trailing commas.
    pub fn parse_projection(&mut self) -> Result<Vec<SelectItem>, ParserError> {
        let trailing_commas = self.options().trailing_commas
            || self.caps().supports_projection_trailing_commas
            || self.caps().supports_trailing_commas;
        let mut values = Vec::new();
        loop {
            values.push(self.parse_select_item()?);
            if !self.consume_token(&Token::Comma) {
                break;
            }
            if trailing_commas {
                match self.peek_token().token {
                    Token::Word(w) if RESERVED_FOR_COLUMN_ALIAS.contains(&w.keyword) => break,
                    Token::RightParen | Token::SemiColon | Token::EndOfFile => break,
                    _ => continue,
                }
            }
        }
        Ok(values)
    }

    fn parse_select_item(&mut self) -> Result<SelectItem, ParserError> {
        if self.caps().supports_equal_alias_assignment {
            let aliased = self.maybe_parse(|p| {
                let alias = p.parse_identifier()?;
                p.expect_token(&Token::Eq)?;
                let expr = p.parse_expr()?;
                Ok(SelectItem::ExprWithAlias { expr, alias })
            })?;
            if let Some(item) = aliased {
                return Ok(item);
            }
        }
        match self.parse_wildcard_expr()? {
            Expr::QualifiedWildcard(prefix) => Ok(SelectItem::QualifiedWildcard(
                prefix,
                self.parse_wildcard_additional_options()?,
            )),
            Expr::Wildcard => Ok(SelectItem::Wildcard(
                self.parse_wildcard_additional_options()?,
            )),
            expr => match self.parse_optional_alias(RESERVED_FOR_COLUMN_ALIAS)? {
                Some(alias) => Ok(SelectItem::ExprWithAlias { expr, alias }),
                None => Ok(SelectItem::UnnamedExpr(expr)),
            },
        }
    }

    fn parse_wildcard_additional_options(
        &mut self,
    ) -> Result<WildcardAdditionalOptions, ParserError> {
        let opt_ilike = if self.parse_keyword(Keyword::Ilike) {
            Some(IlikeSelectItem {
                pattern: self.parse_literal_string()?,
            })
        } else {
            None
        };
        let opt_exclude = if self.parse_keyword(Keyword::Exclude) {
            Some(if self.consume_token(&Token::LeftParen) {
                let columns = self.parse_comma_separated(Parser::parse_identifier)?;
                self.expect_token(&Token::RightParen)?;
                ExcludeSelectItem::Multiple(columns)
            } else {
                ExcludeSelectItem::Single(self.parse_identifier()?)
            })
        } else {
            None
        };
        let opt_except = if self.caps().supports_select_wildcard_except
            && self.peek_keyword(Keyword::Except)
            && self.peek_nth_token(1) == Token::LeftParen
        {
            self.expect_keyword(Keyword::Except)?;
            self.expect_token(&Token::LeftParen)?;
            let idents = self.parse_comma_separated(Parser::parse_identifier)?;
            self.expect_token(&Token::RightParen)?;
            let mut iter = idents.into_iter();
            let first_element = iter
                .next()
                .ok_or_else(|| ParserError::syntax("EXCEPT requires at least one column"))?;
            Some(ExceptSelectItem {
                first_element,
                additional_elements: iter.collect(),
            })
        } else {
            None
        };
        let opt_replace = if self.parse_keyword(Keyword::Replace) {
            self.expect_token(&Token::LeftParen)?;
            let items = self.parse_comma_separated(|p| {
                let expr = p.parse_expr()?;
                let as_keyword = p.parse_keyword(Keyword::As);
                let column_name = p.parse_identifier()?;
                Ok(ReplaceSelectElement {
                    expr,
                    column_name,
                    as_keyword,
                })
            })?;
            self.expect_token(&Token::RightParen)?;
            Some(ReplaceSelectItem { items })
        } else {
            None
        };
        let opt_rename = if self.parse_keyword(Keyword::Rename) {
            Some(if self.consume_token(&Token::LeftParen) {
                let items = self.parse_comma_separated(Parser::parse_identifier_with_alias)?;
                self.expect_token(&Token::RightParen)?;
                RenameSelectItem::Multiple(items)
            } else {
                RenameSelectItem::Single(self.parse_identifier_with_alias()?)
            })
        } else {
            None
        };
        Ok(WildcardAdditionalOptions {
            opt_ilike,
            opt_exclude,
            opt_except,
            opt_replace,
            opt_rename,
        })
    }

    fn parse_identifier_with_alias(&mut self) -> Result<IdentWithAlias, ParserError> {
        let ident = self.parse_identifier()?;
        self.expect_keyword(Keyword::As)?;
        let alias = self.parse_identifier()?;
        Ok(IdentWithAlias { ident, alias })
    }

    pub(crate) fn peek_keyword(&self, keyword: Keyword) -> bool {
        matches!(self.peek_token().token, Token::Word(w) if w.keyword == keyword)
    }

    fn parse_top(&mut self) -> Result<Top, ParserError> {
        let quantity = if self.consume_token(&Token::LeftParen) {
            let quantity = self.parse_expr()?;
            self.expect_token(&Token::RightParen)?;
            Some(TopQuantity::Expr(quantity))
        } else if matches!(self.peek_token().token, Token::Number(..)) {
            Some(TopQuantity::Constant(self.parse_literal_uint()?))
        } else {
            None
        };
        let percent = self.parse_keyword(Keyword::Percent);
        let with_ties = self.parse_keywords(&[Keyword::With, Keyword::Ties]);
        Ok(Top {
            with_ties,
            percent,
            quantity,
        })
    }

    fn parse_optional_group_by(&mut self) -> Result<GroupByExpr, ParserError> {
        if !self.parse_keywords(&[Keyword::Group, Keyword::By]) {
            return Ok(GroupByExpr::Expressions(Vec::new(), Vec::new()));
        }
        if self.parse_keyword(Keyword::All) {
            return Ok(GroupByExpr::All);
        }
        let expressions = self.parse_comma_separated(Parser::parse_group_by_expr)?;
        let mut modifiers = Vec::new();
        loop {
            if self.parse_keywords(&[Keyword::With, Keyword::Rollup]) {
                modifiers.push(GroupByWithModifier::Rollup);
            } else if self.parse_keywords(&[Keyword::With, Keyword::Cube]) {
                modifiers.push(GroupByWithModifier::Cube);
            } else if self.parse_keywords(&[Keyword::With, Keyword::Totals]) {
                modifiers.push(GroupByWithModifier::Totals);
            } else {
                break;
            }
        }
        Ok(GroupByExpr::Expressions(expressions, modifiers))
    }

    fn parse_group_by_expr(&mut self) -> Result<Expr, ParserError> {
        if !self.caps().supports_group_by_expression {
            // column references (or positions) only
            if matches!(self.peek_token().token, Token::Number(..)) {
                return Ok(Expr::Value(self.parse_number_value()?));
            }
            let ObjectName(mut idents) = self.parse_object_name()?;
            return Ok(if idents.len() == 1 {
                Expr::Identifier(idents.remove(0))
            } else {
                Expr::CompoundIdentifier(idents)
            });
        }
        if self.parse_keywords(&[Keyword::Grouping, Keyword::Sets]) {
            return Ok(Expr::GroupingSets(self.parse_nested_expr_lists()?));
        }
        if self.peek_keyword(Keyword::Cube) && self.peek_nth_token(1) == Token::LeftParen {
            self.expect_keyword(Keyword::Cube)?;
            return Ok(Expr::Cube(self.parse_nested_expr_lists()?));
        }
        if self.peek_keyword(Keyword::Rollup) && self.peek_nth_token(1) == Token::LeftParen {
            self.expect_keyword(Keyword::Rollup)?;
            return Ok(Expr::Rollup(self.parse_nested_expr_lists()?));
        }
        self.parse_expr()
    }

    /// `((a, b), c, ())` -> `[[a, b], [c], []]`
    fn parse_nested_expr_lists(&mut self) -> Result<Vec<Vec<Expr>>, ParserError> {
        self.expect_token(&Token::LeftParen)?;
        let lists = self.parse_comma_separated(|p| {
            if p.consume_token(&Token::LeftParen) {
                if p.consume_token(&Token::RightParen) {
                    return Ok(Vec::new());
                }
                let exprs = p.parse_comma_separated(Parser::parse_expr)?;
                p.expect_token(&Token::RightParen)?;
                Ok(exprs)
            } else {
                Ok(vec![p.parse_expr()?])
            }
        })?;
        self.expect_token(&Token::RightParen)?;
        Ok(lists)
    }

    fn parse_named_window(&mut self) -> Result<NamedWindowDef, ParserError> {
        let ident = self.parse_identifier()?;
        self.expect_keyword(Keyword::As)?;
        let window_expr = if self.consume_token(&Token::LeftParen) {
            NamedWindowExpr::WindowSpec(self.parse_window_spec()?)
        } else if self.caps().supports_window_clause_named_window_reference {
            NamedWindowExpr::NamedWindow(self.parse_identifier()?)
        } else {
            return self.expected("(", self.peek_token());
        };
        Ok(NamedWindowDef(ident, window_expr))
    }

    // ------------------------------------------------------------------
    // ORDER BY / LIMIT / FETCH / locks
    // ------------------------------------------------------------------

    pub fn parse_optional_order_by(&mut self) -> Result<Option<OrderBy>, ParserError> {
        if !self.parse_keywords(&[Keyword::Order, Keyword::By]) {
            return Ok(None);
        }
        let exprs = self.parse_comma_separated(Parser::parse_order_by_expr)?;
        let interpolate = if self.parse_keyword(Keyword::Interpolate) {
            if self.consume_token(&Token::LeftParen) {
                let exprs = if self.peek_token() == Token::RightParen {
                    Vec::new()
                } else {
                    self.parse_comma_separated(|p| {
                        let column = p.parse_identifier()?;
                        let expr = if p.parse_keyword(Keyword::As) {
                            Some(p.parse_expr()?)
                        } else {
                            None
                        };
                        Ok(InterpolateExpr { column, expr })
                    })?
                };
                self.expect_token(&Token::RightParen)?;
                Some(Interpolate { exprs: Some(exprs) })
            } else {
                Some(Interpolate { exprs: None })
            }
        } else {
            None
        };
        Ok(Some(OrderBy { exprs, interpolate }))
    }

    pub fn parse_order_by_expr(&mut self) -> Result<OrderByExpr, ParserError> {
        let expr = self.parse_expr()?;
        let asc = if self.parse_keyword(Keyword::Asc) {
            Some(true)
        } else if self.parse_keyword(Keyword::Desc) {
            Some(false)
        } else {
            None
        };
        let nulls_first = if self.parse_keywords(&[Keyword::Nulls, Keyword::First]) {
            Some(true)
        } else if self.parse_keywords(&[Keyword::Nulls, Keyword::Last]) {
            Some(false)
        } else {
            None
        };
        let with_fill = if self.parse_keywords(&[Keyword::With, Keyword::Fill]) {
            let from = if self.parse_keyword(Keyword::From) {
                Some(self.parse_expr()?)
            } else {
                None
            };
            let to = if self.parse_keyword(Keyword::To) {
                Some(self.parse_expr()?)
            } else {
                None
            };
            let step = if self.parse_keyword(Keyword::Step) {
                Some(self.parse_expr()?)
            } else {
                None
            };
            Some(WithFill { from, to, step })
        } else {
            None
        };
        Ok(OrderByExpr {
            expr,
            asc,
            nulls_first,
            with_fill,
        })
    }

    fn parse_limit(&mut self) -> Result<Option<Expr>, ParserError> {
        if self.parse_keyword(Keyword::All) {
            Ok(None)
        } else {
            Ok(Some(self.parse_expr()?))
        }
    }

    fn parse_offset(&mut self) -> Result<Offset, ParserError> {
        let value = self.parse_expr()?;
        let rows = if self.parse_keyword(Keyword::Row) {
            OffsetRows::Row
        } else if self.parse_keyword(Keyword::Rows) {
            OffsetRows::Rows
        } else {
            OffsetRows::None
        };
        Ok(Offset { value, rows })
    }

    fn parse_fetch(&mut self) -> Result<Fetch, ParserError> {
        self.expect_one_of_keywords(&[Keyword::First, Keyword::Next])?;
        let (quantity, percent) = if self
            .parse_one_of_keywords(&[Keyword::Row, Keyword::Rows])
            .is_some()
        {
            (None, false)
        } else {
            let quantity = self.parse_expr()?;
            let percent = self.parse_keyword(Keyword::Percent);
            self.expect_one_of_keywords(&[Keyword::Row, Keyword::Rows])?;
            (Some(quantity), percent)
        };
        let with_ties = if self.parse_keyword(Keyword::Only) {
            false
        } else if self.parse_keywords(&[Keyword::With, Keyword::Ties]) {
            true
        } else {
            return self.expected("ONLY or WITH TIES", self.peek_token());
        };
        Ok(Fetch {
            with_ties,
            percent,
            quantity,
        })
    }

    fn parse_lock(&mut self) -> Result<LockClause, ParserError> {
        let lock_type = match self.expect_one_of_keywords(&[Keyword::Update, Keyword::Share])? {
            Keyword::Update => LockType::Update,
            _ => LockType::Share,
        };
        let of = if self.parse_keyword(Keyword::Of) {
            Some(self.parse_object_name()?)
        } else {
            None
        };
        let nonblock = if self.parse_keyword(Keyword::Nowait) {
            Some(NonBlock::Nowait)
        } else if self.parse_keywords(&[Keyword::Skip, Keyword::Locked]) {
            Some(NonBlock::SkipLocked)
        } else {
            None
        };
        Ok(LockClause {
            lock_type,
            of,
            nonblock,
        })
    }

    pub fn parse_values(&mut self) -> Result<Values, ParserError> {
        let mut explicit_row = false;
        let rows = self.parse_comma_separated(|p| {
            if p.parse_keyword(Keyword::Row) {
                explicit_row = true;
            }
            p.expect_token(&Token::LeftParen)?;
            let exprs = p.parse_comma_separated(Parser::parse_expr)?;
            p.expect_token(&Token::RightParen)?;
            Ok(exprs)
        })?;
        Ok(Values { explicit_row, rows })
    }

    // ------------------------------------------------------------------
    // table factors & joins
    // ------------------------------------------------------------------

    pub fn parse_table_and_joins(&mut self) -> Result<TableWithJoins, ParserError> {
        let relation = self.parse_table_factor()?;
        let joins = self.parse_joins()?;
        Ok(TableWithJoins { relation, joins })
    }

    fn parse_joins(&mut self) -> Result<Vec<Join>, ParserError> {
        let mut joins = Vec::new();
        loop {
            let join = if self.parse_keyword(Keyword::Cross) {
                if self.parse_keyword(Keyword::Join) {
                    Join {
                        relation: self.parse_table_factor()?,
                        join_operator: JoinOperator::CrossJoin,
                    }
                } else if self.parse_keyword(Keyword::Apply) {
                    Join {
                        relation: self.parse_table_factor()?,
                        join_operator: JoinOperator::CrossApply,
                    }
                } else {
                    return self.expected("JOIN or APPLY after CROSS", self.peek_token());
                }
            } else if self.parse_keywords(&[Keyword::Outer, Keyword::Apply]) {
                Join {
                    relation: self.parse_table_factor()?,
                    join_operator: JoinOperator::OuterApply,
                }
            } else if self.parse_keyword(Keyword::Asof) {
                self.expect_keyword(Keyword::Join)?;
                let relation = self.parse_table_factor()?;
                self.expect_keyword(Keyword::MatchCondition)?;
                let match_condition = self.parse_parenthesized(Parser::parse_expr)?;
                let constraint = self.parse_join_constraint(false)?;
                Join {
                    relation,
                    join_operator: JoinOperator::AsOf {
                        match_condition,
                        constraint,
                    },
                }
            } else {
                let natural = self.parse_keyword(Keyword::Natural);
                let peek_keyword = match self.peek_token().token {
                    Token::Word(w) => w.keyword,
                    _ => Keyword::Undefined,
                };
                let join_operator: fn(JoinConstraint) -> JoinOperator = match peek_keyword {
                    Keyword::Join => {
                        self.next_token();
                        JoinOperator::Inner
                    }
                    Keyword::Inner => {
                        self.next_token();
                        self.expect_keyword(Keyword::Join)?;
                        JoinOperator::Inner
                    }
                    kw @ (Keyword::Left | Keyword::Right) => {
                        self.next_token();
                        let is_left = kw == Keyword::Left;
                        if self.parse_keyword(Keyword::Semi) {
                            self.expect_keyword(Keyword::Join)?;
                            if is_left {
                                JoinOperator::LeftSemi
                            } else {
                                JoinOperator::RightSemi
                            }
                        } else if self.parse_keyword(Keyword::Anti) {
                            self.expect_keyword(Keyword::Join)?;
                            if is_left {
                                JoinOperator::LeftAnti
                            } else {
                                JoinOperator::RightAnti
                            }
                        } else {
                            let _ = self.parse_keyword(Keyword::Outer);
                            self.expect_keyword(Keyword::Join)?;
                            if is_left {
                                JoinOperator::LeftOuter
                            } else {
                                JoinOperator::RightOuter
                            }
                        }
                    }
                    Keyword::Full => {
                        self.next_token();
                        let _ = self.parse_keyword(Keyword::Outer);
                        self.expect_keyword(Keyword::Join)?;
                        JoinOperator::FullOuter
                    }
                    Keyword::Semi => {
                        self.next_token();
                        self.expect_keyword(Keyword::Join)?;
                        JoinOperator::Semi
                    }
                    Keyword::Anti => {
                        self.next_token();
                        self.expect_keyword(Keyword::Join)?;
                        JoinOperator::Anti
                    }
                    Keyword::Outer => {
                        return self.expected("LEFT, RIGHT or FULL", self.peek_token());
                    }
                    _ if natural => {
                        return self.expected("a join type after NATURAL", self.peek_token());
                    }
                    _ => break,
                };
                let relation = self.parse_table_factor()?;
                let constraint = self.parse_join_constraint(natural)?;
                Join {
                    relation,
                    join_operator: join_operator(constraint),
                }
            };
            joins.push(join);
        }
        Ok(joins)
    }

    fn parse_join_constraint(&mut self, natural: bool) -> Result<JoinConstraint, ParserError> {
        if natural {
            Ok(JoinConstraint::Natural)
        } else if self.parse_keyword(Keyword::On) {
            Ok(JoinConstraint::On(self.parse_expr()?))
        } else if self.parse_keyword(Keyword::Using) {
            let columns = self.parse_parenthesized_column_list(IsOptional::Mandatory, false)?;
            Ok(JoinConstraint::Using(columns))
        } else {
            Ok(JoinConstraint::None)
        }
    }

    /// One element of a `FROM` clause.
    pub fn parse_table_factor(&mut self) -> Result<TableFactor, ParserError> {
        if self.parse_keyword(Keyword::Lateral) {
            if self.consume_token(&Token::LeftParen) {
                return self.parse_derived_table_factor(true);
            }
            let name = self.parse_object_name()?;
            self.expect_token(&Token::LeftParen)?;
            let args = self.parse_table_function_args()?;
            let alias = self.parse_optional_table_alias(RESERVED_FOR_TABLE_ALIAS)?;
            return Ok(TableFactor::Function {
                lateral: true,
                name,
                args,
                alias,
            });
        }

        if self.peek_keyword(Keyword::Table) && self.peek_nth_token(1) == Token::LeftParen {
            self.expect_keyword(Keyword::Table)?;
            self.expect_token(&Token::LeftParen)?;
            let expr = self.parse_expr()?;
            self.expect_token(&Token::RightParen)?;
            let alias = self.parse_optional_table_alias(RESERVED_FOR_TABLE_ALIAS)?;
            return Ok(TableFactor::TableFunction { expr, alias });
        }

        if self.peek_keyword(Keyword::Unnest) && self.peek_nth_token(1) == Token::LeftParen {
            self.expect_keyword(Keyword::Unnest)?;
            return self.parse_unnest_table_factor();
        }

        if self.peek_keyword(Keyword::JsonTable) && self.peek_nth_token(1) == Token::LeftParen {
            self.expect_keyword(Keyword::JsonTable)?;
            return self.parse_json_table_factor();
        }

        // Snowflake/Databricks `FROM VALUES (..), (..)` without parentheses
        if self.peek_keyword(Keyword::Values) && self.peek_nth_token(1) == Token::LeftParen {
            self.expect_keyword(Keyword::Values)?;
            let values = SetExpr::Values(self.parse_values()?);
            let alias = self.parse_optional_table_alias(RESERVED_FOR_TABLE_ALIAS)?;
            return Ok(TableFactor::Derived {
                lateral: false,
                subquery: Box::new(Query {
                    with: None,
                    body: Box::new(values),
                    order_by: None,
                    limit: None,
                    limit_by: Vec::new(),
                    offset: None,
                    fetch: None,
                    locks: Vec::new(),
                }),
                alias,
            });
        }

        if self.consume_token(&Token::LeftParen) {
            // A derived table, or a parenthesised join tree, or (Snowflake)
            // a redundantly parenthesised single relation.
            if let Some(derived) = self.maybe_parse(|p| p.parse_derived_table_factor(false))? {
                return Ok(derived);
            }
            let table_and_joins = self.parse_table_and_joins()?;
            self.expect_token(&Token::RightParen)?;
            let alias = self.parse_optional_table_alias(RESERVED_FOR_TABLE_ALIAS)?;
            if table_and_joins.joins.is_empty() {
                let mut relation = table_and_joins.relation;
                if alias.is_some() {
                    set_table_factor_alias(&mut relation, alias)?;
                }
                return Ok(relation);
            }
            return Ok(TableFactor::NestedJoin {
                table_with_joins: Box::new(table_and_joins),
                alias,
            });
        }

        let name = self.parse_object_name()?;
        let partitions = if self.parse_keyword(Keyword::Partition) {
            self.parse_parenthesized_column_list(IsOptional::Mandatory, false)?
        } else {
            Vec::new()
        };
        let args = if self.consume_token(&Token::LeftParen) {
            Some(self.parse_table_function_args()?)
        } else {
            None
        };
        let with_ordinality = self.parse_keywords(&[Keyword::With, Keyword::Ordinality]);
        let version = if self.parse_keywords(&[
            Keyword::For,
            Keyword::SystemTime,
            Keyword::As,
            Keyword::Of,
        ]) {
            Some(TableVersion::ForSystemTimeAsOf(self.parse_expr()?))
        } else {
            None
        };
        let alias = self.parse_optional_table_alias(RESERVED_FOR_TABLE_ALIAS)?;
        let with_hints = if self.parse_keyword(Keyword::With) {
            if self.consume_token(&Token::LeftParen) {
                let hints = self.parse_comma_separated(Parser::parse_expr)?;
                self.expect_token(&Token::RightParen)?;
                hints
            } else {
                // not a hint block, give the keyword back
                self.prev_token();
                Vec::new()
            }
        } else {
            Vec::new()
        };

        let mut table = TableFactor::Table {
            name,
            alias,
            args,
            with_hints,
            version,
            partitions,
            with_ordinality,
        };

        loop {
            if self.peek_keyword(Keyword::Pivot) && self.peek_nth_token(1) == Token::LeftParen {
                self.expect_keyword(Keyword::Pivot)?;
                table = self.parse_pivot_table_factor(table)?;
            } else if self.peek_keyword(Keyword::Unpivot)
                && self.peek_nth_token(1) == Token::LeftParen
            {
                self.expect_keyword(Keyword::Unpivot)?;
                table = self.parse_unpivot_table_factor(table)?;
            } else {
                break;
            }
        }

        if self.caps().supports_match_recognize
            && self.peek_keyword(Keyword::MatchRecognize)
            && self.peek_nth_token(1) == Token::LeftParen
        {
            self.expect_keyword(Keyword::MatchRecognize)?;
            table = self.parse_match_recognize_table_factor(table)?;
        }

        Ok(table)
    }

    fn parse_derived_table_factor(&mut self, lateral: bool) -> Result<TableFactor, ParserError> {
        let subquery = self.parse_query()?;
        self.expect_token(&Token::RightParen)?;
        let alias = self.parse_optional_table_alias(RESERVED_FOR_TABLE_ALIAS)?;
        Ok(TableFactor::Derived {
            lateral,
            subquery,
            alias,
        })
    }

    fn parse_table_function_args(&mut self) -> Result<Vec<FunctionArg>, ParserError> {
        if self.consume_token(&Token::RightParen) {
            return Ok(Vec::new());
        }
        let args = self.parse_comma_separated(Parser::parse_function_arg)?;
        self.expect_token(&Token::RightParen)?;
        Ok(args)
    }

    fn parse_unnest_table_factor(&mut self) -> Result<TableFactor, ParserError> {
        self.expect_token(&Token::LeftParen)?;
        let array_exprs = self.parse_comma_separated(Parser::parse_expr)?;
        self.expect_token(&Token::RightParen)?;
        let with_ordinality = self.parse_keywords(&[Keyword::With, Keyword::Ordinality]);
        let alias = self.parse_optional_table_alias(RESERVED_FOR_TABLE_ALIAS)?;
        let with_offset = self.parse_keywords(&[Keyword::With, Keyword::Offset]);
        let with_offset_alias = if with_offset {
            self.parse_optional_alias(&[])?
        } else {
            None
        };
        Ok(TableFactor::UnNest {
            alias,
            array_exprs,
            with_offset,
            with_offset_alias,
            with_ordinality,
        })
    }

    fn parse_json_table_factor(&mut self) -> Result<TableFactor, ParserError> {
        self.expect_token(&Token::LeftParen)?;
        let json_expr = self.parse_expr()?;
        self.expect_token(&Token::Comma)?;
        let json_path = self.parse_value()?;
        self.expect_keyword(Keyword::Columns)?;
        self.expect_token(&Token::LeftParen)?;
        let columns = self.parse_comma_separated(Parser::parse_json_table_column)?;
        self.expect_token(&Token::RightParen)?;
        self.expect_token(&Token::RightParen)?;
        let alias = self.parse_optional_table_alias(RESERVED_FOR_TABLE_ALIAS)?;
        Ok(TableFactor::JsonTable {
            json_expr,
            json_path,
            columns,
            alias,
        })
    }

    fn parse_json_table_column(&mut self) -> Result<JsonTableColumn, ParserError> {
        let name = self.parse_identifier()?;
        if self.parse_keywords(&[Keyword::For, Keyword::Ordinality]) {
            return Ok(JsonTableColumn::ForOrdinality(name));
        }
        let r#type = self.parse_data_type()?;
        let exists = self.parse_keyword(Keyword::Exists);
        self.expect_keyword(Keyword::Path)?;
        let path = self.parse_value()?;
        let mut on_empty = None;
        let mut on_error = None;
        while let Some(handling) = self.parse_json_table_column_error_handling()? {
            self.expect_keyword(Keyword::On)?;
            match self.expect_one_of_keywords(&[Keyword::Empty, Keyword::Error])? {
                Keyword::Empty => on_empty = Some(handling),
                _ => on_error = Some(handling),
            }
        }
        Ok(JsonTableColumn::Named(JsonTableNamedColumn {
            name,
            r#type,
            path,
            exists,
            on_empty,
            on_error,
        }))
    }

    fn parse_json_table_column_error_handling(
        &mut self,
    ) -> Result<Option<JsonTableColumnErrorHandling>, ParserError> {
        if self.parse_keyword(Keyword::Null) {
            Ok(Some(JsonTableColumnErrorHandling::Null))
        } else if self.parse_keyword(Keyword::Error) {
            Ok(Some(JsonTableColumnErrorHandling::Error))
        } else if self.parse_keyword(Keyword::Default) {
            Ok(Some(JsonTableColumnErrorHandling::Default(
                self.parse_value()?,
            )))
        } else {
            Ok(None)
        }
    }

    fn parse_pivot_table_factor(&mut self, table: TableFactor) -> Result<TableFactor, ParserError> {
        self.expect_token(&Token::LeftParen)?;
        let aggregate_functions = self.parse_comma_separated(Parser::parse_expr_with_alias)?;
        self.expect_keyword(Keyword::For)?;
        let value_column = self.parse_object_name()?.0;
        self.expect_keyword(Keyword::In)?;
        self.expect_token(&Token::LeftParen)?;
        let value_source = if self.parse_keyword(Keyword::Any) {
            let order_by = if self.parse_keywords(&[Keyword::Order, Keyword::By]) {
                self.parse_comma_separated(Parser::parse_order_by_expr)?
            } else {
                Vec::new()
            };
            PivotValueSource::Any(order_by)
        } else if matches!(
            self.peek_token().token,
            Token::Word(crate::tokens::Word {
                keyword: Keyword::Select | Keyword::With,
                ..
            })
        ) {
            PivotValueSource::Subquery(self.parse_query()?)
        } else {
            PivotValueSource::List(self.parse_comma_separated(Parser::parse_expr_with_alias)?)
        };
        self.expect_token(&Token::RightParen)?;
        let default_on_null = if self.parse_keywords(&[Keyword::Default, Keyword::On, Keyword::Null])
        {
            Some(self.parse_parenthesized(Parser::parse_expr)?)
        } else {
            None
        };
        self.expect_token(&Token::RightParen)?;
        let alias = self.parse_optional_table_alias(RESERVED_FOR_TABLE_ALIAS)?;
        Ok(TableFactor::Pivot {
            table: Box::new(table),
            aggregate_functions,
            value_column,
            value_source,
            default_on_null,
            alias,
        })
    }

    pub fn parse_expr_with_alias(&mut self) -> Result<ExprWithAlias, ParserError> {
        let expr = self.parse_expr()?;
        let alias = if self.parse_keyword(Keyword::As) {
            Some(self.parse_identifier()?)
        } else {
            // an implicit alias must be a plain word, or it would swallow
            // the clause keyword that follows (`.. FOR quarter IN ..`)
            match self.peek_token().token {
                Token::Word(w) if w.keyword == Keyword::Undefined => {
                    Some(self.parse_identifier()?)
                }
                _ => None,
            }
        };
        Ok(ExprWithAlias { expr, alias })
    }

    fn parse_unpivot_table_factor(
        &mut self,
        table: TableFactor,
    ) -> Result<TableFactor, ParserError> {
        self.expect_token(&Token::LeftParen)?;
        let value = self.parse_identifier()?;
        self.expect_keyword(Keyword::For)?;
        let name = self.parse_identifier()?;
        self.expect_keyword(Keyword::In)?;
        let columns = self.parse_parenthesized_column_list(IsOptional::Mandatory, false)?;
        self.expect_token(&Token::RightParen)?;
        let alias = self.parse_optional_table_alias(RESERVED_FOR_TABLE_ALIAS)?;
        Ok(TableFactor::Unpivot {
            table: Box::new(table),
            value,
            name,
            columns,
            alias,
        })
    }

    // ------------------------------------------------------------------
    // MATCH_RECOGNIZE
    // ------------------------------------------------------------------

    fn parse_match_recognize_table_factor(
        &mut self,
        table: TableFactor,
    ) -> Result<TableFactor, ParserError> {
        self.expect_token(&Token::LeftParen)?;

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
        let measures = if self.parse_keyword(Keyword::Measures) {
            self.parse_comma_separated(|p| {
                let expr = p.parse_expr()?;
                let _ = p.parse_keyword(Keyword::As);
                let alias = p.parse_identifier()?;
                Ok(Measure { expr, alias })
            })?
        } else {
            Vec::new()
        };

        let rows_per_match = if self.parse_keywords(&[
            Keyword::One,
            Keyword::Row,
            Keyword::Per,
            Keyword::Match,
        ]) {
            Some(RowsPerMatch::OneRow)
        } else if self.parse_keywords(&[
            Keyword::All,
            Keyword::Rows,
            Keyword::Per,
            Keyword::Match,
        ]) {
            Some(RowsPerMatch::AllRows(
                if self.parse_keywords(&[Keyword::Show, Keyword::Empty, Keyword::Matches]) {
                    Some(EmptyMatchesMode::Show)
                } else if self.parse_keywords(&[Keyword::Omit, Keyword::Empty, Keyword::Matches]) {
                    Some(EmptyMatchesMode::Omit)
                } else if self.parse_keywords(&[Keyword::With, Keyword::Unmatched, Keyword::Rows])
                {
                    Some(EmptyMatchesMode::WithUnmatched)
                } else {
                    None
                },
            ))
        } else {
            None
        };

        let after_match_skip =
            if self.parse_keywords(&[Keyword::After, Keyword::Match, Keyword::Skip]) {
                if self.parse_keywords(&[Keyword::Past, Keyword::Last, Keyword::Row]) {
                    Some(AfterMatchSkip::PastLastRow)
                } else if self.parse_keywords(&[Keyword::To, Keyword::Next, Keyword::Row]) {
                    Some(AfterMatchSkip::ToNextRow)
                } else if self.parse_keywords(&[Keyword::To, Keyword::First]) {
                    Some(AfterMatchSkip::ToFirst(self.parse_identifier()?))
                } else if self.parse_keywords(&[Keyword::To, Keyword::Last]) {
                    Some(AfterMatchSkip::ToLast(self.parse_identifier()?))
                } else {
                    return self.expected("after match skip option", self.peek_token());
                }
            } else {
                None
            };

        self.expect_keyword(Keyword::Pattern)?;
        let pattern = self.parse_parenthesized(Parser::parse_pattern)?;
        self.expect_keyword(Keyword::Define)?;
        let symbols = self.parse_comma_separated(|p| {
            let symbol = p.parse_identifier()?;
            p.expect_keyword(Keyword::As)?;
            let definition = p.parse_expr()?;
            Ok(SymbolDefinition { symbol, definition })
        })?;
        self.expect_token(&Token::RightParen)?;
        let alias = self.parse_optional_table_alias(RESERVED_FOR_TABLE_ALIAS)?;
        Ok(TableFactor::MatchRecognize {
            table: Box::new(table),
            partition_by,
            order_by,
            measures,
            rows_per_match,
            after_match_skip,
            pattern,
            symbols,
            alias,
        })
    }

    fn parse_base_pattern(&mut self) -> Result<MatchRecognizePattern, ParserError> {
        let next_token = self.next_token();
        match next_token.token {
            Token::Caret => Ok(MatchRecognizePattern::Symbol(MatchRecognizeSymbol::Start)),
            Token::Placeholder(s) if s == "$" => {
                Ok(MatchRecognizePattern::Symbol(MatchRecognizeSymbol::End))
            }
            Token::LeftParen => {
                let pattern = self.parse_pattern()?;
                self.expect_token(&Token::RightParen)?;
                Ok(MatchRecognizePattern::Group(Box::new(pattern)))
            }
            Token::LeftBrace => {
                self.expect_token(&Token::Minus)?;
                let symbol = MatchRecognizeSymbol::Named(self.parse_identifier()?);
                self.expect_token(&Token::Minus)?;
                self.expect_token(&Token::RightBrace)?;
                Ok(MatchRecognizePattern::Exclude(symbol))
            }
            Token::Word(w) if w.keyword == Keyword::Permute => {
                self.expect_token(&Token::LeftParen)?;
                let symbols = self.parse_comma_separated(|p| {
                    Ok(MatchRecognizeSymbol::Named(p.parse_identifier()?))
                })?;
                self.expect_token(&Token::RightParen)?;
                Ok(MatchRecognizePattern::Permute(symbols))
            }
            Token::Word(w) => Ok(MatchRecognizePattern::Symbol(MatchRecognizeSymbol::Named(
                crate::parser::ident_of(w),
            ))),
            _ => self.expected("a pattern symbol", next_token),
        }
    }

    fn parse_repetition_pattern(&mut self) -> Result<MatchRecognizePattern, ParserError> {
        let mut pattern = self.parse_base_pattern()?;
        loop {
            let quantifier = match self.peek_token().token {
                Token::Mul => RepetitionQuantifier::ZeroOrMore,
                Token::Plus => RepetitionQuantifier::OneOrMore,
                Token::Placeholder(ref s) if s == "?" => RepetitionQuantifier::AtMostOne,
                Token::LeftBrace => {
                    self.next_token();
                    let quantifier = if self.consume_token(&Token::Comma) {
                        RepetitionQuantifier::AtMost(self.parse_repetition_count()?)
                    } else {
                        let n = self.parse_repetition_count()?;
                        if self.consume_token(&Token::Comma) {
                            if self.peek_token() == Token::RightBrace {
                                RepetitionQuantifier::AtLeast(n)
                            } else {
                                RepetitionQuantifier::Range(n, self.parse_repetition_count()?)
                            }
                        } else {
                            RepetitionQuantifier::Exactly(n)
                        }
                    };
                    self.expect_token(&Token::RightBrace)?;
                    pattern = MatchRecognizePattern::Repetition(Box::new(pattern), quantifier);
                    continue;
                }
                _ => break,
            };
            self.next_token();
            pattern = MatchRecognizePattern::Repetition(Box::new(pattern), quantifier);
        }
        Ok(pattern)
    }

    fn parse_repetition_count(&mut self) -> Result<u32, ParserError> {
        let count = self.parse_literal_uint()?;
        u32::try_from(count)
            .map_err(|_| ParserError::syntax(format!("repetition count {count} out of range")))
    }

    fn parse_concat_pattern(&mut self) -> Result<MatchRecognizePattern, ParserError> {
        let mut patterns = vec![self.parse_repetition_pattern()?];
        loop {
            match self.peek_token().token {
                Token::RightParen | Token::Pipe | Token::EndOfFile => break,
                Token::Minus => break,
                _ => patterns.push(self.parse_repetition_pattern()?),
            }
        }
        if patterns.len() == 1 {
            Ok(patterns.remove(0))
        } else {
            Ok(MatchRecognizePattern::Concat(patterns))
        }
    }

    pub(crate) fn parse_pattern(&mut self) -> Result<MatchRecognizePattern, ParserError> {
        let mut patterns = vec![self.parse_concat_pattern()?];
        while self.consume_token(&Token::Pipe) {
            patterns.push(self.parse_concat_pattern()?);
        }
        if patterns.len() == 1 {
            Ok(patterns.remove(0))
        } else {
            Ok(MatchRecognizePattern::Alternation(patterns))
        }
    }
}

/// Attaches an outer alias to a redundantly parenthesised relation.
fn set_table_factor_alias(
    relation: &mut TableFactor,
    alias: Option<TableAlias>,
) -> Result<(), ParserError> {
    let slot = match relation {
        TableFactor::Table { alias, .. }
        | TableFactor::Derived { alias, .. }
        | TableFactor::TableFunction { alias, .. }
        | TableFactor::Function { alias, .. }
        | TableFactor::UnNest { alias, .. }
        | TableFactor::JsonTable { alias, .. }
        | TableFactor::NestedJoin { alias, .. }
        | TableFactor::Pivot { alias, .. }
        | TableFactor::Unpivot { alias, .. }
        | TableFactor::MatchRecognize { alias, .. } => alias,
    };
    if slot.is_some() {
        return parser_err!("duplicate alias on parenthesised table factor");
    }
    *slot = alias;
    Ok(())
}
