//! MySQL-flavoured behaviour, including this dialect's statement and infix
//! hooks.

mod common;

use common::*;
use pretty_assertions::assert_eq;
use squill_lib::MySqlDialect;
use squill_lib::ast::*;

#[test]
fn lock_and_unlock_tables_via_the_statement_hook() {
    let Statement::LockTables { tables } = one_statement_with(
        &MySqlDialect,
        "LOCK TABLES t1 READ LOCAL, t2 AS t WRITE, t3 LOW_PRIORITY WRITE",
    ) else {
        panic!("expected LOCK TABLES");
    };
    assert_eq!(
        tables,
        vec![
            LockTable {
                table: Ident::new("t1"),
                alias: None,
                lock_type: LockTableType::Read { local: true },
            },
            LockTable {
                table: Ident::new("t2"),
                alias: Some(Ident::new("t")),
                lock_type: LockTableType::Write {
                    low_priority: false,
                },
            },
            LockTable {
                table: Ident::new("t3"),
                alias: None,
                lock_type: LockTableType::Write { low_priority: true },
            },
        ]
    );
    assert_eq!(
        one_statement_with(&MySqlDialect, "UNLOCK TABLES"),
        Statement::UnlockTables
    );
}

#[test]
fn div_operator_via_the_infix_hook() {
    assert_eq!(
        expr_with(&MySqlDialect, "10 DIV 3 + 1"),
        binop(
            binop(number("10"), BinaryOperator::MyIntegerDivide, number("3")),
            BinaryOperator::Plus,
            number("1"),
        )
    );
}

#[test]
fn backtick_quoted_identifiers() {
    assert_eq!(
        expr_with(&MySqlDialect, "`select`"),
        Expr::Identifier(Ident::with_quote('`', "select"))
    );
}

#[test]
fn replace_into_reuses_the_insert_parse() {
    let Statement::Insert(insert) =
        one_statement_with(&MySqlDialect, "REPLACE INTO t (a) VALUES (1)")
    else {
        panic!("expected an insert");
    };
    assert!(insert.replace_into);
    assert!(insert.or.is_none());
}

#[test]
fn insert_modifiers_and_on_duplicate_key() {
    let Statement::Insert(insert) = one_statement_with(
        &MySqlDialect,
        "INSERT LOW_PRIORITY IGNORE INTO t (a) VALUES (1) \
         ON DUPLICATE KEY UPDATE a = a + 1",
    ) else {
        panic!("expected an insert");
    };
    assert_eq!(insert.priority, Some(MysqlInsertPriority::LowPriority));
    assert!(insert.ignore);
    assert!(matches!(insert.on, Some(OnInsert::DuplicateKeyUpdate(_))));
}

#[test]
fn match_against_fulltext_search() {
    let Expr::MatchAgainst {
        columns,
        match_value,
        opt_search_modifier,
    } = expr_with(
        &MySqlDialect,
        "MATCH (title, body) AGAINST ('rust' IN BOOLEAN MODE)",
    )
    else {
        panic!("expected MATCH .. AGAINST");
    };
    assert_eq!(columns, vec![Ident::new("title"), Ident::new("body")]);
    assert_eq!(match_value, Value::SingleQuotedString("rust".to_string()));
    assert_eq!(opt_search_modifier, Some(SearchModifier::InBooleanMode));
}

#[test]
fn introduced_string() {
    assert_eq!(
        expr_with(&MySqlDialect, "_utf8mb4'abc'"),
        Expr::IntroducedString {
            introducer: "_utf8mb4".to_string(),
            value: Value::SingleQuotedString("abc".to_string()),
        }
    );
}

#[test]
fn create_table_engine_and_charset() {
    let Statement::CreateTable(create) = one_statement_with(
        &MySqlDialect,
        "CREATE TABLE t (id INT AUTO_INCREMENT, KEY idx (id)) \
         ENGINE = InnoDB AUTO_INCREMENT = 100 DEFAULT CHARSET = utf8mb4",
    ) else {
        panic!("expected CREATE TABLE");
    };
    assert_eq!(
        create.columns[0].options[0].option,
        ColumnOption::AutoIncrement
    );
    assert!(matches!(
        create.constraints[0],
        TableConstraint::Index {
            display_as_key: true,
            ..
        }
    ));
    assert_eq!(create.engine.unwrap().name, "InnoDB");
    assert_eq!(create.auto_increment_offset, Some(100));
    assert_eq!(create.default_charset.as_deref(), Some("utf8mb4"));
}

#[test]
fn alter_table_change_and_modify() {
    let Statement::AlterTable { operations, .. } = one_statement_with(
        &MySqlDialect,
        "ALTER TABLE t CHANGE COLUMN a b BIGINT NOT NULL, MODIFY c TEXT",
    ) else {
        panic!("expected ALTER TABLE");
    };
    assert!(matches!(
        operations[0],
        AlterTableOperation::ChangeColumn { .. }
    ));
    assert!(matches!(
        operations[1],
        AlterTableOperation::ModifyColumn { .. }
    ));
}

#[test]
fn unsigned_integer_types() {
    let Statement::CreateTable(create) =
        one_statement_with(&MySqlDialect, "CREATE TABLE t (a TINYINT(1) UNSIGNED, b INT UNSIGNED)")
    else {
        panic!("expected CREATE TABLE");
    };
    assert_eq!(create.columns[0].data_type, DataType::TinyIntUnsigned(Some(1)));
    assert_eq!(create.columns[1].data_type, DataType::IntUnsigned(None));
}
