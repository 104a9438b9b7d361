//! Every word the parser may treat as a keyword.
//!
//! This is not a list of *reserved* words: most entries can still be parsed
//! as identifiers when the grammar allows it, so adding a keyword here does
//! not change existing parses. Lookup goes through [`Keyword::lookup`] on
//! the uppercased word; anything unknown maps to [`Keyword::Undefined`].
//!
//! Two subsets matter for disambiguation: [`RESERVED_FOR_TABLE_ALIAS`] and
//! [`RESERVED_FOR_COLUMN_ALIAS`] list the keywords that terminate an alias
//! position instead of naming it.

use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, AsRefStr, Display, EnumString,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Keyword {
    /// Sentinel for a word that is not a keyword.
    #[strum(serialize = "")]
    Undefined,
    Abort,
    Absolute,
    Action,
    Add,
    Admin,
    After,
    Against,
    Alias,
    All,
    Alter,
    Always,
    Analyze,
    And,
    Anti,
    Any,
    Apply,
    Archive,
    Array,
    ArrayAgg,
    As,
    Asc,
    Asof,
    Assert,
    At,
    Attach,
    Authorization,
    Autoincrement,
    AutoIncrement,
    Avro,
    Backward,
    Before,
    Begin,
    Between,
    Bigdecimal,
    Bigint,
    Bignumeric,
    Binary,
    Blob,
    Bool,
    Boolean,
    Both,
    Btree,
    Buckets,
    By,
    Bytea,
    Bytes,
    Cache,
    Call,
    Called,
    Cascade,
    Cascaded,
    Case,
    Cast,
    Ceil,
    Ceiling,
    Century,
    Chain,
    Change,
    Char,
    Character,
    Characteristics,
    Characters,
    Charset,
    Check,
    Clob,
    Close,
    Cluster,
    Clustered,
    Collate,
    Collation,
    Collection,
    Column,
    Columns,
    Comment,
    Commit,
    Committed,
    Compute,
    Concurrently,
    Conflict,
    Connect,
    Connection,
    Constraint,
    Convert,
    Copy,
    Count,
    Create,
    Cross,
    Csv,
    Cube,
    Current,
    CurrentCatalog,
    CurrentDate,
    CurrentTime,
    CurrentTimestamp,
    CurrentUser,
    Cursor,
    Cycle,
    Data,
    Database,
    Databases,
    Date,
    Date32,
    Datetime,
    Datetime64,
    Day,
    Dayofweek,
    Dayofyear,
    Deallocate,
    Dec,
    Decade,
    Decimal,
    Declare,
    Deduplicate,
    Default,
    Deferrable,
    Deferred,
    Define,
    Delayed,
    Delete,
    Delimited,
    Delimiter,
    Desc,
    Describe,
    Detach,
    Dictionary,
    Directory,
    Disable,
    Discard,
    Distinct,
    Distribute,
    Div,
    Do,
    Double,
    Dow,
    Doy,
    Drop,
    Duplicate,
    Each,
    Else,
    Empty,
    Enable,
    End,
    #[strum(serialize = "END-EXEC")]
    EndExec,
    Enforced,
    Engine,
    Enum,
    Ephemeral,
    Epoch,
    Error,
    Escape,
    Escaped,
    Event,
    Except,
    Exclude,
    Exclusive,
    Execute,
    Exists,
    Expansion,
    Explain,
    Extended,
    Extension,
    External,
    Extract,
    Fail,
    False,
    Fetch,
    Fields,
    File,
    Fill,
    Filter,
    Final,
    First,
    Fixedstring,
    Float,
    Float32,
    Float4,
    Float64,
    Float8,
    Floor,
    Flush,
    Following,
    For,
    Foreign,
    Format,
    Formatted,
    Forward,
    Freeze,
    From,
    Full,
    Fulltext,
    Function,
    Functions,
    Generated,
    Global,
    Grant,
    Granted,
    Graphviz,
    Group,
    Grouping,
    Groups,
    Hash,
    Having,
    Header,
    HighPriority,
    Hivevar,
    Hold,
    Hosts,
    Hour,
    Identity,
    If,
    Ignore,
    Ilike,
    Immediate,
    Immutable,
    In,
    Include,
    Increment,
    Index,
    Initially,
    Inner,
    Input,
    Inputformat,
    Insensitive,
    Insert,
    Install,
    Instead,
    Int,
    Int128,
    Int16,
    Int2,
    Int256,
    Int32,
    Int4,
    Int64,
    Int8,
    Integer,
    Interpolate,
    Intersect,
    Interval,
    Into,
    Is,
    Isodow,
    Isolation,
    Isoyear,
    Items,
    Jar,
    Join,
    Json,
    Jsonb,
    Jsonfile,
    JsonTable,
    Julian,
    Key,
    Keys,
    Kill,
    Language,
    Large,
    Last,
    Lateral,
    Lazy,
    Leading,
    Left,
    Level,
    Like,
    Limit,
    Lines,
    Load,
    Local,
    Localtime,
    Localtimestamp,
    Location,
    Lock,
    Locked,
    Login,
    Lowcardinality,
    LowPriority,
    Macro,
    Managedlocation,
    Map,
    Match,
    Matched,
    Matches,
    MatchCondition,
    MatchRecognize,
    Materialized,
    Max,
    Maxvalue,
    Measures,
    Mediumint,
    Merge,
    Metadata,
    Microsecond,
    Microseconds,
    Millenium,
    Millennium,
    Millisecond,
    Milliseconds,
    Min,
    Minute,
    Minvalue,
    Mode,
    Modify,
    Month,
    Msck,
    Mutation,
    Name,
    Names,
    Nanosecond,
    Nanoseconds,
    Natural,
    Nested,
    Next,
    No,
    None,
    Noscan,
    Not,
    Nothing,
    Nowait,
    Null,
    Nullable,
    Nulls,
    Numeric,
    Nvarchar,
    Object,
    Octets,
    Of,
    Offset,
    Omit,
    On,
    One,
    Only,
    Open,
    Operator,
    Optimize,
    Option,
    Options,
    Or,
    Orc,
    Order,
    Ordinality,
    Outer,
    Outputformat,
    Over,
    Overflow,
    Overlay,
    Overwrite,
    Owned,
    Owner,
    Parquet,
    Part,
    Partition,
    Partitioned,
    Partitions,
    Password,
    Past,
    Path,
    Pattern,
    Per,
    Percent,
    Permute,
    Persistent,
    Pivot,
    Placing,
    Plans,
    Policy,
    Position,
    Pragma,
    Preceding,
    Precision,
    Prepare,
    Preserve,
    Prewhere,
    Primary,
    Prior,
    Privileges,
    Procedure,
    Program,
    Projection,
    Purge,
    Qualify,
    Quarter,
    Query,
    Quote,
    Range,
    Rcfile,
    Read,
    Real,
    Recursive,
    References,
    Regclass,
    Regexp,
    Relative,
    Release,
    Rename,
    Repair,
    Repeatable,
    Replace,
    Respect,
    Restrict,
    Return,
    Returning,
    Returns,
    Revoke,
    Right,
    Rlike,
    Role,
    Rollback,
    Rollup,
    Row,
    Rowid,
    Rows,
    Rule,
    SafeCast,
    Savepoint,
    Schema,
    Scroll,
    Second,
    Secret,
    Security,
    Select,
    Semi,
    Separator,
    Sequence,
    Sequencefile,
    Sequences,
    Serde,
    Serdeproperties,
    Serializable,
    Session,
    SessionUser,
    Set,
    Sets,
    Settings,
    Share,
    Show,
    Similar,
    Skip,
    Smallint,
    Snapshot,
    Some,
    Sort,
    Sorted,
    Source,
    Spatial,
    Stable,
    Start,
    Statement,
    Statistics,
    Stdin,
    Stdout,
    Step,
    Stored,
    Strict,
    String,
    Struct,
    Substring,
    Swap,
    Sync,
    SystemTime,
    Table,
    Tables,
    Target,
    Tblproperties,
    Temp,
    Temporary,
    Terminated,
    Text,
    Textfile,
    Then,
    Ties,
    Time,
    Timestamp,
    Timestamptz,
    Timetz,
    Timezone,
    TimezoneHour,
    TimezoneMinute,
    Tinyint,
    To,
    Top,
    Totals,
    Trailing,
    Transaction,
    Trigger,
    Trim,
    True,
    Truncate,
    TryCast,
    Tuple,
    Type,
    Uescape,
    Uint128,
    Uint16,
    Uint256,
    Uint32,
    Uint64,
    Uint8,
    Unbounded,
    Uncache,
    Uncommitted,
    Unfreeze,
    Union,
    Unique,
    Unknown,
    Unload,
    Unlock,
    Unlogged,
    Unmatched,
    Unnest,
    Unpivot,
    Unsigned,
    Update,
    Usage,
    Use,
    User,
    Using,
    Uuid,
    Value,
    Values,
    Varbinary,
    Varchar,
    Variables,
    Varying,
    Verbose,
    Version,
    View,
    Virtual,
    Volatile,
    Week,
    When,
    Where,
    Window,
    With,
    Within,
    Without,
    Work,
    Write,
    Xor,
    Year,
    Zone,
}

impl Keyword {
    /// Resolves an uppercased word to its keyword, or `Undefined`.
    pub fn lookup(upper: &str) -> Keyword {
        Keyword::from_str(upper).unwrap_or(Keyword::Undefined)
    }
}

/// Can't be used as a table alias without `AS`: these words end the alias
/// position of a table factor instead of naming it.
pub const RESERVED_FOR_TABLE_ALIAS: &[Keyword] = &[
    Keyword::With,
    Keyword::Explain,
    Keyword::Analyze,
    Keyword::Select,
    Keyword::Where,
    Keyword::Group,
    Keyword::Sort,
    Keyword::Having,
    Keyword::Order,
    Keyword::Pivot,
    Keyword::Unpivot,
    Keyword::Top,
    Keyword::Lateral,
    Keyword::View,
    Keyword::Limit,
    Keyword::Offset,
    Keyword::Fetch,
    Keyword::Union,
    Keyword::Except,
    Keyword::Intersect,
    Keyword::Cluster,
    Keyword::Distribute,
    Keyword::Returning,
    Keyword::Using,
    Keyword::On,
    Keyword::Join,
    Keyword::Inner,
    Keyword::Cross,
    Keyword::Full,
    Keyword::Left,
    Keyword::Right,
    Keyword::Natural,
    Keyword::Semi,
    Keyword::Anti,
    Keyword::Asof,
    Keyword::For,
    Keyword::Window,
    Keyword::Qualify,
    Keyword::Set,
    Keyword::Prewhere,
    Keyword::Settings,
    Keyword::Format,
    Keyword::Outer,
    Keyword::MatchRecognize,
    Keyword::Start,
    Keyword::Connect,
    Keyword::End,
];

/// Can't be used as a projection alias without `AS`.
pub const RESERVED_FOR_COLUMN_ALIAS: &[Keyword] = &[
    Keyword::With,
    Keyword::Explain,
    Keyword::Analyze,
    Keyword::Select,
    Keyword::Where,
    Keyword::Group,
    Keyword::Having,
    Keyword::Order,
    Keyword::Limit,
    Keyword::Offset,
    Keyword::Fetch,
    Keyword::Union,
    Keyword::Except,
    Keyword::Intersect,
    Keyword::Cluster,
    Keyword::Distribute,
    Keyword::Returning,
    Keyword::From,
    Keyword::Into,
    Keyword::End,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_exact_on_uppercase() {
        assert_eq!(Keyword::lookup("SELECT"), Keyword::Select);
        assert_eq!(Keyword::lookup("CURRENT_TIMESTAMP"), Keyword::CurrentTimestamp);
        assert_eq!(Keyword::lookup("AUTO_INCREMENT"), Keyword::AutoIncrement);
        assert_eq!(Keyword::lookup("AUTOINCREMENT"), Keyword::Autoincrement);
        assert_eq!(Keyword::lookup("DATETIME64"), Keyword::Datetime64);
        assert_eq!(Keyword::lookup("END-EXEC"), Keyword::EndExec);
        assert_eq!(Keyword::lookup("select"), Keyword::Undefined);
        assert_eq!(Keyword::lookup("FROBNICATE"), Keyword::Undefined);
    }

    #[test]
    fn keywords_render_as_sql_spelling() {
        assert_eq!(Keyword::MatchRecognize.as_ref(), "MATCH_RECOGNIZE");
        assert_eq!(Keyword::TryCast.as_ref(), "TRY_CAST");
        assert_eq!(Keyword::Fixedstring.as_ref(), "FIXEDSTRING");
    }
}
