//! DDL-side AST: column definitions, constraints, `CREATE`/`ALTER` payloads.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{
    DataType, Expr, Ident, ObjectName, OneOrManyWithParens, OrderByExpr, Query, SqlOption, Value,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColumnDef {
    pub name: Ident,
    pub data_type: DataType,
    pub collation: Option<ObjectName>,
    pub options: Vec<ColumnOptionDef>,
}

/// `[CONSTRAINT name] option`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColumnOptionDef {
    pub name: Option<Ident>,
    pub option: ColumnOption,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ColumnOption {
    Null,
    NotNull,
    Default(Expr),
    /// ClickHouse `MATERIALIZED expr`
    Materialized(Expr),
    /// ClickHouse `EPHEMERAL [expr]`
    Ephemeral(Option<Expr>),
    /// ClickHouse `ALIAS expr`
    Alias(Expr),
    Unique {
        is_primary: bool,
        characteristics: Option<ConstraintCharacteristics>,
    },
    ForeignKey {
        foreign_table: ObjectName,
        referred_columns: Vec<Ident>,
        on_delete: Option<ReferentialAction>,
        on_update: Option<ReferentialAction>,
        characteristics: Option<ConstraintCharacteristics>,
    },
    Check(Expr),
    /// `AUTO_INCREMENT` / `AUTOINCREMENT`
    AutoIncrement,
    /// MySQL `ON UPDATE expr`
    OnUpdate(Expr),
    /// SQLite conflict clause on a column constraint.
    OnConflict(ConflictResolution),
    Generated {
        generated_as: GeneratedAs,
        sequence_options: Option<Vec<SequenceOptions>>,
        generation_expr: Option<Expr>,
        generation_expr_mode: Option<GeneratedExpressionMode>,
        /// `GENERATED ALWAYS AS (..)` vs the bare `AS (..)` spelling.
        generated_keyword: bool,
    },
    /// MsSql `IDENTITY[(seed, increment)]`
    Identity(Option<IdentityProperty>),
    /// BigQuery `OPTIONS(..)`
    Options(Vec<SqlOption>),
    Comment(String),
    CharacterSet(ObjectName),
    /// `ASC`/`DESC` in a column definition, where the dialect allows it.
    Sort(SortDirection),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConflictResolution {
    Rollback,
    Abort,
    Fail,
    Ignore,
    Replace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GeneratedAs {
    Always,
    ByDefault,
    /// A bare `AS (expr)` without the `GENERATED` introducer.
    ExpStored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GeneratedExpressionMode {
    Stored,
    Virtual,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IdentityProperty {
    pub seed: Expr,
    pub increment: Expr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ReferentialAction {
    Restrict,
    Cascade,
    SetNull,
    NoAction,
    SetDefault,
}

/// `[NOT] DEFERRABLE [INITIALLY {IMMEDIATE|DEFERRED}] [[NOT] ENFORCED]`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConstraintCharacteristics {
    pub deferrable: Option<bool>,
    pub initially: Option<DeferrableInitial>,
    pub enforced: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DeferrableInitial {
    Immediate,
    Deferred,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TableConstraint {
    Unique {
        name: Option<Ident>,
        columns: Vec<Ident>,
        characteristics: Option<ConstraintCharacteristics>,
    },
    PrimaryKey {
        name: Option<Ident>,
        columns: Vec<Ident>,
        characteristics: Option<ConstraintCharacteristics>,
    },
    ForeignKey {
        name: Option<Ident>,
        columns: Vec<Ident>,
        foreign_table: ObjectName,
        referred_columns: Vec<Ident>,
        on_delete: Option<ReferentialAction>,
        on_update: Option<ReferentialAction>,
        characteristics: Option<ConstraintCharacteristics>,
    },
    Check {
        name: Option<Ident>,
        expr: Box<Expr>,
    },
    /// MySQL inline `{INDEX|KEY} [name] [USING ..] (columns)`
    Index {
        display_as_key: bool,
        name: Option<Ident>,
        index_type: Option<IndexType>,
        columns: Vec<Ident>,
    },
    FulltextOrSpatial {
        fulltext: bool,
        index_name: Option<Ident>,
        columns: Vec<Ident>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IndexType {
    BTree,
    Hash,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SequenceOptions {
    IncrementBy(Expr),
    MinValue(Expr),
    NoMinValue,
    MaxValue(Expr),
    NoMaxValue,
    StartWith(Expr),
    Cache(Expr),
    Cycle,
    NoCycle,
}

/// The payload of `Statement::CreateTable`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CreateTable {
    pub or_replace: bool,
    pub temporary: bool,
    pub external: bool,
    pub if_not_exists: bool,
    pub name: ObjectName,
    pub columns: Vec<ColumnDef>,
    pub constraints: Vec<TableConstraint>,
    pub hive_distribution: HiveDistributionStyle,
    pub hive_formats: Option<HiveFormat>,
    pub table_properties: Vec<SqlOption>,
    pub with_options: Vec<SqlOption>,
    pub engine: Option<TableEngine>,
    pub auto_increment_offset: Option<u64>,
    pub default_charset: Option<String>,
    pub collation: Option<String>,
    pub comment: Option<String>,
    pub on_commit: Option<OnCommit>,
    pub query: Option<Box<Query>>,
    pub without_rowid: bool,
    pub like: Option<ObjectName>,
    /// ClickHouse `PRIMARY KEY expr` at table level.
    pub primary_key: Option<Box<Expr>>,
    /// ClickHouse `ORDER BY expr` / `ORDER BY (expr, ..)`.
    pub order_by: Option<OneOrManyWithParens<Expr>>,
    /// BigQuery/PostgreSQL `PARTITION BY expr`.
    pub partition_by: Option<Box<Expr>>,
    /// BigQuery `CLUSTER BY col, ..`.
    pub cluster_by: Option<Vec<Ident>>,
    /// BigQuery `OPTIONS(..)`.
    pub options: Option<Vec<SqlOption>>,
    pub strict: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TableEngine {
    pub name: String,
    pub parameters: Option<Vec<Ident>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OnCommit {
    DeleteRows,
    PreserveRows,
    Drop,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HiveDistributionStyle {
    Partitioned {
        columns: Vec<ColumnDef>,
    },
    Clustered {
        columns: Vec<Ident>,
        sorted_by: Vec<OrderByExpr>,
        num_buckets: u64,
    },
    #[default]
    None,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HiveFormat {
    pub row_format: Option<HiveRowFormat>,
    pub serde_properties: Option<Vec<SqlOption>>,
    pub storage: Option<HiveIOFormat>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HiveRowFormat {
    Serde { class: String },
    Delimited { delimiters: Vec<HiveRowDelimiter> },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HiveRowDelimiter {
    pub delimiter: HiveDelimiter,
    pub char: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HiveDelimiter {
    FieldsTerminatedBy,
    FieldsEscapedBy,
    CollectionItemsTerminatedBy,
    MapKeysTerminatedBy,
    LinesTerminatedBy,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HiveIOFormat {
    IOF {
        input_format: Expr,
        output_format: Expr,
    },
    FileFormat {
        format: FileFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FileFormat {
    TextFile,
    SequenceFile,
    Orc,
    Parquet,
    Avro,
    RcFile,
    JsonFile,
}

/// The payload of `Statement::CreateIndex`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CreateIndex {
    /// Anonymous indexes are legal (`CREATE INDEX ON t(a)`).
    pub name: Option<ObjectName>,
    pub table_name: ObjectName,
    pub using: Option<Ident>,
    pub columns: Vec<OrderByExpr>,
    pub unique: bool,
    pub concurrently: bool,
    pub if_not_exists: bool,
    pub include: Vec<Ident>,
    pub with: Vec<Expr>,
    pub predicate: Option<Expr>,
}

/// The payload of `Statement::CreateFunction`, covering the Hive,
/// PostgreSQL and BigQuery grammars.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CreateFunction {
    pub or_replace: bool,
    pub temporary: bool,
    pub if_not_exists: bool,
    pub name: ObjectName,
    pub args: Option<Vec<OperateFunctionArg>>,
    pub return_type: Option<DataType>,
    pub function_body: Option<CreateFunctionBody>,
    pub behavior: Option<FunctionBehavior>,
    pub called_on_null: Option<FunctionCalledOnNull>,
    pub language: Option<Ident>,
    /// BigQuery `OPTIONS(..)`.
    pub options: Option<Vec<SqlOption>>,
    /// Hive `USING JAR|FILE|ARCHIVE '..'`.
    pub using: Option<CreateFunctionUsing>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OperateFunctionArg {
    pub name: Option<Ident>,
    pub data_type: DataType,
    pub default_expr: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CreateFunctionBody {
    /// `AS 'body'` before any `OPTIONS` clause.
    AsBeforeOptions(Expr),
    /// `AS 'body'` after an `OPTIONS` clause (BigQuery ordering).
    AsAfterOptions(Expr),
    /// `RETURN expr`
    Return(Expr),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FunctionBehavior {
    Immutable,
    Stable,
    Volatile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FunctionCalledOnNull {
    CalledOnNullInput,
    ReturnsNullOnNullInput,
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CreateFunctionUsing {
    Jar(String),
    File(String),
    Archive(String),
}

/// One operation of a comma-separated `ALTER TABLE` list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AlterTableOperation {
    AddConstraint(TableConstraint),
    AddColumn {
        /// Whether the `COLUMN` keyword was written.
        column_keyword: bool,
        if_not_exists: bool,
        column_def: ColumnDef,
    },
    AddPartitions {
        if_not_exists: bool,
        new_partitions: Vec<Expr>,
    },
    /// ClickHouse `ADD PROJECTION name (SELECT ..)`
    AddProjection {
        if_not_exists: bool,
        name: Ident,
        select: Box<Query>,
    },
    DropProjection {
        if_exists: bool,
        name: Ident,
    },
    DropConstraint {
        if_exists: bool,
        name: Ident,
        cascade: bool,
    },
    DropColumn {
        if_exists: bool,
        column_name: Ident,
        cascade: bool,
    },
    DropPrimaryKey,
    DropPartitions {
        if_exists: bool,
        partitions: Vec<Expr>,
    },
    RenameColumn {
        old_column_name: Ident,
        new_column_name: Ident,
    },
    RenameConstraint {
        old_name: Ident,
        new_name: Ident,
    },
    RenameTable {
        table_name: ObjectName,
    },
    /// MySQL `CHANGE [COLUMN] old new type options`
    ChangeColumn {
        old_name: Ident,
        new_name: Ident,
        data_type: DataType,
        options: Vec<ColumnOption>,
    },
    /// MySQL `MODIFY [COLUMN] col type options`
    ModifyColumn {
        col_name: Ident,
        data_type: DataType,
        options: Vec<ColumnOption>,
    },
    AlterColumn {
        column_name: Ident,
        op: AlterColumnOperation,
    },
    /// Snowflake `SWAP WITH other`
    SwapWith {
        table_name: ObjectName,
    },
    EnableRowLevelSecurity,
    DisableRowLevelSecurity,
    EnableRule {
        name: Ident,
    },
    DisableRule {
        name: Ident,
    },
    EnableTrigger {
        name: Ident,
    },
    DisableTrigger {
        name: Ident,
    },
    OwnerTo(Owner),
    /// ClickHouse partition manipulation.
    AttachPartition {
        partition: Partition,
    },
    DetachPartition {
        partition: Partition,
    },
    FreezePartition {
        partition: Partition,
        with_name: Option<Ident>,
    },
    UnfreezePartition {
        partition: Partition,
        with_name: Option<Ident>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Partition {
    Expr(Expr),
    /// `PART 'name'`
    Part(Expr),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Owner {
    Identifier(Ident),
    CurrentUser,
    SessionUser,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AlterColumnOperation {
    SetNotNull,
    DropNotNull,
    SetDefault {
        value: Expr,
    },
    DropDefault,
    SetDataType {
        data_type: DataType,
        using: Option<Expr>,
    },
    AddGenerated {
        generated_as: Option<GeneratedAs>,
        sequence_options: Option<Vec<SequenceOptions>>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AlterIndexOperation {
    RenameIndex { index_name: ObjectName },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AlterRoleOperation {
    RenameRole { role_name: Ident },
    WithOptions { options: Vec<RoleOption> },
}

/// `LOGIN`, `PASSWORD 'x'`, `CONNECTION LIMIT 10`, ..
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RoleOption {
    pub name: Ident,
    pub value: Option<Expr>,
}

/// `CREATE SCHEMA` target.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SchemaName {
    Simple(ObjectName),
    UnnamedAuthorization(Ident),
    NamedAuthorization(ObjectName, Ident),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UserDefinedTypeRepresentation {
    Composite {
        attributes: Vec<UserDefinedTypeCompositeAttributeDef>,
    },
    Enum {
        labels: Vec<Ident>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UserDefinedTypeCompositeAttributeDef {
    pub name: Ident,
    pub data_type: DataType,
    pub collation: Option<ObjectName>,
}

/// Trigger support, PostgreSQL-flavoured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TriggerPeriod {
    Before,
    After,
    InsteadOf,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TriggerEvent {
    Insert,
    Update(Vec<Ident>),
    Delete,
    Truncate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TriggerObject {
    Row,
    Statement,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TriggerExecBody {
    pub exec_type: TriggerExecBodyType,
    pub func_desc: FunctionDesc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TriggerExecBodyType {
    Function,
    Procedure,
}

/// A function referenced by name and optional signature, as in
/// `DROP FUNCTION f(int, text)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FunctionDesc {
    pub name: ObjectName,
    pub args: Option<Vec<OperateFunctionArg>>,
}

/// DuckDb `CREATE MACRO` argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MacroArg {
    pub name: Ident,
    pub default_expr: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MacroDefinition {
    Expr(Expr),
    Table(Box<Query>),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProcedureParam {
    pub name: Ident,
    pub data_type: DataType,
}

/// DuckDb `CREATE SECRET` key/value option.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SecretOption {
    pub key: Ident,
    pub value: Ident,
}

/// DuckDb `ATTACH .. (key [value], ..)` option.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AttachOption {
    pub key: Ident,
    pub value: Option<Expr>,
}

/// What a `DROP` statement drops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ObjectType {
    Table,
    View,
    Index,
    Schema,
    Database,
    Role,
    Sequence,
}

/// `WITH (..)` vs `OPTIONS (..)` on CREATE VIEW and friends.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CreateTableOptions {
    None,
    With(Vec<SqlOption>),
    Options(Vec<SqlOption>),
}
