//! The abstract syntax tree the parser emits.
//!
//! Everything here is a plain owned value: statements own their
//! expressions, expressions box their self-referential subtrees, and the
//! whole tree derives `Debug`/`Clone`/`PartialEq`/`Eq`/`Hash` so consumers
//! can compare and analyse it. Identifier quoting is preserved verbatim;
//! nothing is case-normalised.

pub mod data_type;
pub mod ddl;
pub mod dml;
pub mod operator;
pub mod query;
pub mod value;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use self::data_type::*;
pub use self::ddl::*;
pub use self::dml::*;
pub use self::operator::*;
pub use self::query::*;
pub use self::value::*;

/// An identifier with its original quoting, if any.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ident {
    pub value: String,
    pub quote_style: Option<char>,
}

impl Ident {
    pub fn new(value: impl Into<String>) -> Self {
        Ident {
            value: value.into(),
            quote_style: None,
        }
    }

    pub fn with_quote(quote: char, value: impl Into<String>) -> Self {
        Ident {
            value: value.into(),
            quote_style: Some(quote),
        }
    }
}

impl From<&str> for Ident {
    fn from(value: &str) -> Self {
        Ident::new(value)
    }
}

/// A possibly-qualified name: `db.schema.table`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObjectName(pub Vec<Ident>);

impl From<Vec<Ident>> for ObjectName {
    fn from(idents: Vec<Ident>) -> Self {
        ObjectName(idents)
    }
}

/// One value, or several wrapped in parentheses. Preserves whether the
/// source used the parenthesised spelling.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OneOrManyWithParens<T> {
    One(T),
    Many(Vec<T>),
}

/// A generic `name = value` option.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SqlOption {
    pub name: Ident,
    pub value: Expr,
}

/// An SQL expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    Identifier(Ident),
    CompoundIdentifier(Vec<Ident>),
    /// `*` in an expression position.
    Wildcard,
    /// `alias.*` in an expression position.
    QualifiedWildcard(ObjectName),
    /// `(struct_expr).key`
    CompositeAccess { expr: Box<Expr>, key: Ident },
    /// Semi-structured access: `expr:a.b[1]` and friends.
    JsonAccess { value: Box<Expr>, path: JsonPath },
    IsFalse(Box<Expr>),
    IsNotFalse(Box<Expr>),
    IsTrue(Box<Expr>),
    IsNotTrue(Box<Expr>),
    IsNull(Box<Expr>),
    IsNotNull(Box<Expr>),
    IsUnknown(Box<Expr>),
    IsNotUnknown(Box<Expr>),
    IsDistinctFrom(Box<Expr>, Box<Expr>),
    IsNotDistinctFrom(Box<Expr>, Box<Expr>),
    InList {
        expr: Box<Expr>,
        list: Vec<Expr>,
        negated: bool,
    },
    InSubquery {
        expr: Box<Expr>,
        subquery: Box<Query>,
        negated: bool,
    },
    InUnnest {
        expr: Box<Expr>,
        array_expr: Box<Expr>,
        negated: bool,
    },
    Between {
        expr: Box<Expr>,
        negated: bool,
        low: Box<Expr>,
        high: Box<Expr>,
    },
    BinaryOp {
        left: Box<Expr>,
        op: BinaryOperator,
        right: Box<Expr>,
    },
    Like {
        negated: bool,
        expr: Box<Expr>,
        pattern: Box<Expr>,
        escape_char: Option<String>,
    },
    ILike {
        negated: bool,
        expr: Box<Expr>,
        pattern: Box<Expr>,
        escape_char: Option<String>,
    },
    SimilarTo {
        negated: bool,
        expr: Box<Expr>,
        pattern: Box<Expr>,
        escape_char: Option<String>,
    },
    /// `REGEXP`/`RLIKE`; the flag records the `REGEXP` spelling.
    RLike {
        negated: bool,
        expr: Box<Expr>,
        pattern: Box<Expr>,
        regexp: bool,
    },
    AnyOp {
        left: Box<Expr>,
        compare_op: BinaryOperator,
        right: Box<Expr>,
    },
    AllOp {
        left: Box<Expr>,
        compare_op: BinaryOperator,
        right: Box<Expr>,
    },
    UnaryOp {
        op: UnaryOperator,
        expr: Box<Expr>,
    },
    Convert {
        expr: Box<Expr>,
        data_type: Option<DataType>,
        charset: Option<ObjectName>,
        /// Which argument order the dialect used.
        target_before_value: bool,
    },
    /// `CAST`/`TRY_CAST`/`SAFE_CAST` and the `::` operator (kind `Cast`).
    Cast {
        kind: CastKind,
        expr: Box<Expr>,
        data_type: DataType,
        format: Option<CastFormat>,
    },
    AtTimeZone {
        timestamp: Box<Expr>,
        time_zone: Box<Expr>,
    },
    Extract {
        field: DateTimeField,
        expr: Box<Expr>,
    },
    Ceil {
        expr: Box<Expr>,
        field: DateTimeField,
    },
    Floor {
        expr: Box<Expr>,
        field: DateTimeField,
    },
    Position {
        expr: Box<Expr>,
        within: Box<Expr>,
    },
    Substring {
        expr: Box<Expr>,
        substring_from: Option<Box<Expr>>,
        substring_for: Option<Box<Expr>>,
        /// Whether the comma form (`SUBSTRING(x, 1, 2)`) was used.
        special: bool,
    },
    Trim {
        expr: Box<Expr>,
        trim_where: Option<TrimWhereField>,
        trim_what: Option<Box<Expr>>,
    },
    Overlay {
        expr: Box<Expr>,
        overlay_what: Box<Expr>,
        overlay_from: Box<Expr>,
        overlay_for: Option<Box<Expr>>,
    },
    Collate {
        expr: Box<Expr>,
        collation: ObjectName,
    },
    /// A parenthesised single expression.
    Nested(Box<Expr>),
    Value(Value),
    /// `_utf8'..'` and other introduced strings.
    IntroducedString {
        introducer: String,
        value: Value,
    },
    /// A literal prefixed by its type: `DATE '2020-01-01'`.
    TypedString {
        data_type: DataType,
        value: String,
    },
    MapAccess {
        column: Box<Expr>,
        keys: Vec<Expr>,
    },
    Function(Function),
    Case {
        operand: Option<Box<Expr>>,
        conditions: Vec<Expr>,
        results: Vec<Expr>,
        else_result: Option<Box<Expr>>,
    },
    Exists {
        subquery: Box<Query>,
        negated: bool,
    },
    Subquery(Box<Query>),
    GroupingSets(Vec<Vec<Expr>>),
    Cube(Vec<Vec<Expr>>),
    Rollup(Vec<Vec<Expr>>),
    Tuple(Vec<Expr>),
    /// BigQuery `STRUCT<..>(..)`.
    Struct {
        values: Vec<Expr>,
        fields: Vec<StructField>,
    },
    /// BigQuery `expr AS name` inside struct construction.
    Named {
        expr: Box<Expr>,
        name: Ident,
    },
    /// DuckDb `{'k': v, ..}`.
    Dictionary(Vec<DictionaryField>),
    /// DuckDb `MAP {k: v, ..}`.
    Map(Map),
    Array(Array),
    Subscript {
        expr: Box<Expr>,
        subscript: Box<Subscript>,
    },
    Interval(Interval),
    /// MySQL `MATCH (..) AGAINST (..)`.
    MatchAgainst {
        columns: Vec<Ident>,
        match_value: Value,
        opt_search_modifier: Option<SearchModifier>,
    },
    /// The old-style Oracle/Snowflake outer-join marker `col (+)`.
    OuterJoin(Box<Expr>),
    /// `PRIOR expr`, only inside `CONNECT BY`.
    Prior(Box<Expr>),
    Lambda(LambdaFunction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastKind {
    Cast,
    TryCast,
    SafeCast,
}

/// `CAST(.. AS .. FORMAT ..)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastFormat {
    Value(Value),
    ValueAtTimeZone(Value, Value),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JsonPath {
    pub path: Vec<JsonPathElem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum JsonPathElem {
    Dot { key: String, quoted: bool },
    Bracket { key: Expr },
}

/// An array subscript: one index or a slice.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Subscript {
    Index {
        index: Expr,
    },
    Slice {
        lower_bound: Option<Expr>,
        upper_bound: Option<Expr>,
        stride: Option<Expr>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Array {
    pub elem: Vec<Expr>,
    /// Whether the `ARRAY` keyword introduced the literal.
    pub named: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Map {
    pub entries: Vec<MapEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MapEntry {
    pub key: Box<Expr>,
    pub value: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DictionaryField {
    pub key: Ident,
    pub value: Box<Expr>,
}

/// `INTERVAL value [leading [(p)] [TO last [(fp)]]]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Interval {
    pub value: Box<Expr>,
    pub leading_field: Option<DateTimeField>,
    pub leading_precision: Option<u64>,
    pub last_field: Option<DateTimeField>,
    pub fractional_seconds_precision: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SearchModifier {
    InNaturalLanguageMode,
    InNaturalLanguageModeWithQueryExpansion,
    InBooleanMode,
    WithQueryExpansion,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LambdaFunction {
    pub params: OneOrManyWithParens<Ident>,
    pub body: Box<Expr>,
}

/// A function call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Function {
    pub name: ObjectName,
    /// ClickHouse parametric functions: `quantile(0.5)(x)`.
    pub parameters: FunctionArguments,
    pub args: FunctionArguments,
    pub filter: Option<Box<Expr>>,
    pub null_treatment: Option<NullTreatment>,
    pub over: Option<WindowType>,
    pub within_group: Vec<OrderByExpr>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FunctionArguments {
    /// A call without parentheses (`CURRENT_TIMESTAMP`).
    None,
    /// `fn(SELECT ..)`
    Subquery(Box<Query>),
    List(FunctionArgumentList),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FunctionArgumentList {
    pub duplicate_treatment: Option<DuplicateTreatment>,
    pub args: Vec<FunctionArg>,
    pub clauses: Vec<FunctionArgumentClause>,
}

impl FunctionArgumentList {
    pub fn empty() -> Self {
        FunctionArgumentList {
            duplicate_treatment: None,
            args: Vec::new(),
            clauses: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FunctionArg {
    Named {
        name: Ident,
        arg: FunctionArgExpr,
        operator: FunctionArgOperator,
    },
    Unnamed(FunctionArgExpr),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FunctionArgExpr {
    Expr(Expr),
    QualifiedWildcard(ObjectName),
    Wildcard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FunctionArgOperator {
    /// `name => value`
    RightArrow,
    /// `name = value`
    Equals,
    /// `name := value`
    Assignment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DuplicateTreatment {
    All,
    Distinct,
}

/// The optional clauses accepted inside an argument list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FunctionArgumentClause {
    IgnoreOrRespectNulls(NullTreatment),
    OrderBy(Vec<OrderByExpr>),
    Limit(Expr),
    OnOverflow(ListAggOnOverflow),
    Having(HavingBound),
    /// MySQL `GROUP_CONCAT(.. SEPARATOR ',')`
    Separator(Value),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ListAggOnOverflow {
    Error,
    Truncate {
        filler: Option<Box<Expr>>,
        with_count: bool,
    },
}

/// `HAVING {MIN|MAX} expr`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HavingBound(pub HavingBoundKind, pub Expr);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HavingBoundKind {
    Min,
    Max,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NullTreatment {
    IgnoreNulls,
    RespectNulls,
}

/// `OVER (..)` or `OVER name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WindowType {
    WindowSpec(WindowSpec),
    NamedWindow(Ident),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WindowSpec {
    /// A base window this one refines.
    pub window_name: Option<Ident>,
    pub partition_by: Vec<Expr>,
    pub order_by: Vec<OrderByExpr>,
    pub window_frame: Option<WindowFrame>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WindowFrame {
    pub units: WindowFrameUnits,
    pub start_bound: WindowFrameBound,
    pub end_bound: Option<WindowFrameBound>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WindowFrameUnits {
    Rows,
    Range,
    Groups,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WindowFrameBound {
    CurrentRow,
    /// `UNBOUNDED PRECEDING` when the quantity is absent.
    Preceding(Option<Box<Expr>>),
    Following(Option<Box<Expr>>),
}

/// One item of a projection list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SelectItem {
    UnnamedExpr(Expr),
    ExprWithAlias { expr: Expr, alias: Ident },
    QualifiedWildcard(ObjectName, WildcardAdditionalOptions),
    Wildcard(WildcardAdditionalOptions),
}

/// The dialect-specific modifiers a wildcard accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WildcardAdditionalOptions {
    /// Snowflake `* ILIKE '..'`.
    pub opt_ilike: Option<IlikeSelectItem>,
    /// Snowflake `* EXCLUDE (..)`.
    pub opt_exclude: Option<ExcludeSelectItem>,
    /// `* EXCEPT (..)`.
    pub opt_except: Option<ExceptSelectItem>,
    /// `* REPLACE (expr AS col, ..)`.
    pub opt_replace: Option<ReplaceSelectItem>,
    /// Snowflake `* RENAME (col AS new, ..)`.
    pub opt_rename: Option<RenameSelectItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IlikeSelectItem {
    pub pattern: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ExcludeSelectItem {
    Single(Ident),
    Multiple(Vec<Ident>),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExceptSelectItem {
    pub first_element: Ident,
    pub additional_elements: Vec<Ident>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReplaceSelectItem {
    pub items: Vec<ReplaceSelectElement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReplaceSelectElement {
    pub expr: Expr,
    pub column_name: Ident,
    pub as_keyword: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RenameSelectItem {
    Single(IdentWithAlias),
    Multiple(Vec<IdentWithAlias>),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IdentWithAlias {
    pub ident: Ident,
    pub alias: Ident,
}

/// A top-level statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Statement {
    Query(Box<Query>),
    Insert(Insert),
    Update {
        table: TableWithJoins,
        assignments: Vec<Assignment>,
        from: Option<TableWithJoins>,
        selection: Option<Expr>,
        returning: Option<Vec<SelectItem>>,
    },
    Delete(Delete),
    Merge {
        /// Whether `INTO` was written.
        into: bool,
        table: TableFactor,
        source: TableFactor,
        on: Box<Expr>,
        clauses: Vec<MergeClause>,
    },
    CreateTable(CreateTable),
    CreateView {
        or_replace: bool,
        materialized: bool,
        name: ObjectName,
        columns: Vec<Ident>,
        query: Box<Query>,
        options: CreateTableOptions,
        cluster_by: Vec<Ident>,
        if_not_exists: bool,
        temporary: bool,
    },
    CreateIndex(CreateIndex),
    CreateSchema {
        schema_name: SchemaName,
        if_not_exists: bool,
    },
    CreateDatabase {
        db_name: ObjectName,
        if_not_exists: bool,
        location: Option<String>,
        managed_location: Option<String>,
    },
    CreateRole {
        names: Vec<ObjectName>,
        if_not_exists: bool,
        options: Vec<RoleOption>,
    },
    CreateFunction(CreateFunction),
    CreateMacro {
        or_replace: bool,
        temporary: bool,
        name: ObjectName,
        args: Option<Vec<MacroArg>>,
        definition: MacroDefinition,
    },
    CreateProcedure {
        or_alter: bool,
        name: ObjectName,
        params: Option<Vec<ProcedureParam>>,
        body: Vec<Statement>,
    },
    CreateTrigger {
        or_replace: bool,
        name: ObjectName,
        period: TriggerPeriod,
        events: Vec<TriggerEvent>,
        table_name: ObjectName,
        trigger_object: TriggerObject,
        condition: Option<Expr>,
        exec_body: TriggerExecBody,
    },
    CreateType {
        name: ObjectName,
        representation: UserDefinedTypeRepresentation,
    },
    CreateSequence {
        temporary: bool,
        if_not_exists: bool,
        name: ObjectName,
        data_type: Option<DataType>,
        sequence_options: Vec<SequenceOptions>,
        owned_by: Option<ObjectName>,
    },
    CreateSecret {
        or_replace: bool,
        temporary: Option<bool>,
        if_not_exists: bool,
        name: Option<Ident>,
        secret_type: Ident,
        options: Vec<SecretOption>,
    },
    CreateExtension {
        name: Ident,
        if_not_exists: bool,
        cascade: bool,
        schema: Option<Ident>,
        version: Option<Ident>,
    },
    CreateVirtualTable {
        name: ObjectName,
        if_not_exists: bool,
        module_name: Ident,
        module_args: Vec<Ident>,
    },
    Drop {
        object_type: ObjectType,
        if_exists: bool,
        names: Vec<ObjectName>,
        cascade: bool,
        restrict: bool,
        /// Hive `PURGE`.
        purge: bool,
        temporary: bool,
    },
    DropFunction {
        if_exists: bool,
        func_desc: Vec<FunctionDesc>,
        option: Option<ReferentialAction>,
    },
    DropProcedure {
        if_exists: bool,
        proc_desc: Vec<FunctionDesc>,
        option: Option<ReferentialAction>,
    },
    DropTrigger {
        if_exists: bool,
        trigger_name: ObjectName,
        table_name: Option<ObjectName>,
        option: Option<ReferentialAction>,
    },
    DropSecret {
        if_exists: bool,
        temporary: Option<bool>,
        name: Ident,
    },
    DropPolicy {
        if_exists: bool,
        name: Ident,
        table_name: ObjectName,
        option: Option<ReferentialAction>,
    },
    AlterTable {
        name: ObjectName,
        if_exists: bool,
        only: bool,
        operations: Vec<AlterTableOperation>,
    },
    AlterView {
        name: ObjectName,
        columns: Vec<Ident>,
        query: Box<Query>,
        with_options: Vec<SqlOption>,
    },
    AlterIndex {
        name: ObjectName,
        operation: AlterIndexOperation,
    },
    AlterRole {
        name: Ident,
        operation: AlterRoleOperation,
    },
    Truncate {
        table_names: Vec<ObjectName>,
        partitions: Option<Vec<Expr>>,
        /// Whether the `TABLE` keyword was written.
        table: bool,
    },
    Analyze {
        table_name: ObjectName,
        partitions: Option<Vec<Expr>>,
        for_columns: bool,
        columns: Vec<Ident>,
        cache_metadata: bool,
        noscan: bool,
        compute_statistics: bool,
    },
    Msck {
        table_name: ObjectName,
        repair: bool,
        partition_action: Option<AddDropSync>,
    },
    Cache {
        /// Spark `CACHE LAZY? TABLE` flag object.
        table_flag: Option<ObjectName>,
        table_name: ObjectName,
        has_as: bool,
        options: Vec<SqlOption>,
        query: Option<Box<Query>>,
    },
    UNCache {
        table_name: ObjectName,
        if_exists: bool,
    },
    Commit {
        chain: bool,
    },
    Rollback {
        chain: bool,
        savepoint: Option<Ident>,
    },
    StartTransaction {
        modes: Vec<TransactionMode>,
        /// Whether this was spelled `BEGIN`.
        begin: bool,
        modifier: Option<TransactionModifier>,
    },
    Savepoint {
        name: Ident,
    },
    ReleaseSavepoint {
        name: Ident,
    },
    SetTransaction {
        modes: Vec<TransactionMode>,
        snapshot: Option<Value>,
        session: bool,
    },
    SetNames {
        charset_name: String,
        collation_name: Option<String>,
    },
    SetNamesDefault {},
    SetRole {
        context_modifier: ContextModifier,
        /// `None` for `SET ROLE NONE`.
        role_name: Option<Ident>,
    },
    SetVariable {
        local: bool,
        hivevar: bool,
        variables: OneOrManyWithParens<ObjectName>,
        value: Vec<Expr>,
    },
    SetTimeZone {
        local: bool,
        value: Expr,
    },
    Declare {
        name: Ident,
        binary: bool,
        sensitive: Option<bool>,
        scroll: Option<bool>,
        hold: Option<bool>,
        query: Box<Query>,
    },
    Fetch {
        name: Ident,
        direction: FetchDirection,
        into: Option<ObjectName>,
    },
    Close {
        cursor: CloseCursor,
    },
    Copy {
        source: CopySource,
        /// `TO` vs `FROM`.
        to: bool,
        target: CopyTarget,
        options: Vec<CopyOption>,
    },
    Grant {
        privileges: Privileges,
        objects: GrantObjects,
        grantees: Vec<Ident>,
        with_grant_option: bool,
        granted_by: Option<Ident>,
    },
    Revoke {
        privileges: Privileges,
        objects: GrantObjects,
        grantees: Vec<Ident>,
        granted_by: Option<Ident>,
        cascade: bool,
    },
    Explain {
        describe_alias: DescribeAlias,
        analyze: bool,
        verbose: bool,
        statement: Box<Statement>,
        format: Option<AnalyzeFormat>,
    },
    ExplainTable {
        describe_alias: DescribeAlias,
        hive_format: Option<HiveDescribeFormat>,
        table_name: ObjectName,
    },
    Kill {
        modifier: Option<KillType>,
        id: u64,
    },
    Discard {
        object_type: DiscardObject,
    },
    Pragma {
        name: ObjectName,
        value: Option<Value>,
        /// `PRAGMA name = value` vs `PRAGMA name(value)`.
        is_eq: bool,
    },
    Prepare {
        name: Ident,
        data_types: Vec<DataType>,
        statement: Box<Statement>,
    },
    Execute {
        name: Ident,
        parameters: Vec<Expr>,
        using: Vec<Expr>,
    },
    Deallocate {
        name: Ident,
        prepare: bool,
    },
    /// DuckDb `INSTALL extension`.
    Install {
        extension_name: Ident,
    },
    /// DuckDb `LOAD extension`.
    Load {
        extension_name: Ident,
    },
    ShowTables {
        extended: bool,
        full: bool,
        db_name: Option<Ident>,
        filter: Option<ShowStatementFilter>,
    },
    ShowColumns {
        extended: bool,
        full: bool,
        table_name: ObjectName,
        filter: Option<ShowStatementFilter>,
    },
    ShowCreate {
        obj_type: ShowCreateObject,
        obj_name: ObjectName,
    },
    ShowFunctions {
        filter: Option<ShowStatementFilter>,
    },
    /// A free-form `SHOW ident ..` (`SHOW TIME ZONE`, ..).
    ShowVariable {
        variable: Vec<Ident>,
    },
    ShowVariables {
        filter: Option<ShowStatementFilter>,
        global: bool,
        session: bool,
    },
    ShowCollation {
        filter: Option<ShowStatementFilter>,
    },
    ShowDatabases {
        filter: Option<ShowStatementFilter>,
    },
    Use {
        db_name: Ident,
    },
    Flush {
        object_type: FlushType,
        tables: Vec<ObjectName>,
    },
    Assert {
        condition: Expr,
        message: Option<Expr>,
    },
    Unload {
        query: Box<Query>,
        to: Ident,
        with: Vec<SqlOption>,
    },
    /// SQLite `ATTACH [DATABASE] expr AS name`.
    AttachDatabase {
        schema_name: Ident,
        database_file_name: Expr,
        database: bool,
    },
    AttachDuckDbDatabase {
        if_not_exists: bool,
        database: bool,
        database_path: Ident,
        database_alias: Option<Ident>,
        attach_options: Vec<AttachOption>,
    },
    DetachDuckDbDatabase {
        if_exists: bool,
        database: bool,
        database_alias: Ident,
    },
    /// Hive `INSERT OVERWRITE [LOCAL] DIRECTORY '..' .. query`.
    Directory {
        overwrite: bool,
        local: bool,
        path: String,
        file_format: Option<FileFormat>,
        source: Box<Query>,
    },
    /// ClickHouse `OPTIMIZE TABLE`.
    OptimizeTable {
        name: ObjectName,
        partition: Option<Partition>,
        include_final: bool,
        deduplicate: Option<Deduplicate>,
    },
    /// MySQL `LOCK TABLES`, produced by that dialect's statement hook.
    LockTables {
        tables: Vec<LockTable>,
    },
    UnlockTables,
    Call(Function),
}

/// `tbl_name [[AS] alias] lock_type` in `LOCK TABLES`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LockTable {
    pub table: Ident,
    pub alias: Option<Ident>,
    pub lock_type: LockTableType,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LockTableType {
    Read { local: bool },
    Write { low_priority: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AddDropSync {
    Add,
    Drop,
    Sync,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TransactionMode {
    AccessMode(TransactionAccessMode),
    IsolationLevel(TransactionIsolationLevel),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TransactionAccessMode {
    ReadOnly,
    ReadWrite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TransactionIsolationLevel {
    ReadUncommitted,
    ReadCommitted,
    RepeatableRead,
    Serializable,
    Snapshot,
}

/// SQLite `BEGIN DEFERRED|IMMEDIATE|EXCLUSIVE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TransactionModifier {
    Deferred,
    Immediate,
    Exclusive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ContextModifier {
    None,
    Local,
    Session,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FetchDirection {
    Count { limit: Value },
    Next,
    Prior,
    First,
    Last,
    Absolute { limit: Value },
    Relative { limit: Value },
    All,
    Forward { limit: Option<Value> },
    ForwardAll,
    Backward { limit: Option<Value> },
    BackwardAll,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CloseCursor {
    All,
    Specific { name: Ident },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Privileges {
    All {
        /// Whether `PRIVILEGES` was written after `ALL`.
        with_privileges_keyword: bool,
    },
    Actions(Vec<Action>),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Action {
    Connect,
    Create,
    Delete,
    Execute,
    Insert { columns: Option<Vec<Ident>> },
    References { columns: Option<Vec<Ident>> },
    Select { columns: Option<Vec<Ident>> },
    Temporary,
    Trigger,
    Truncate,
    Update { columns: Option<Vec<Ident>> },
    Usage,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GrantObjects {
    AllSequencesInSchema { schemas: Vec<ObjectName> },
    AllTablesInSchema { schemas: Vec<ObjectName> },
    Schemas(Vec<ObjectName>),
    Sequences(Vec<ObjectName>),
    Tables(Vec<ObjectName>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DescribeAlias {
    Describe,
    Explain,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AnalyzeFormat {
    Text,
    Graphviz,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HiveDescribeFormat {
    Extended,
    Formatted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum KillType {
    Connection,
    Query,
    Mutation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DiscardObject {
    All,
    Plans,
    Sequences,
    Temp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ShowCreateObject {
    Table,
    View,
    Trigger,
    Procedure,
    Function,
    Event,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ShowStatementFilter {
    Like(String),
    ILike(String),
    Where(Expr),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FlushType {
    Privileges,
    Tables,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Deduplicate {
    All,
    ByExpression(Expr),
}
