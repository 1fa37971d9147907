use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// What a statement does to the warehouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementKind {
    CreateSchema,
    DropTable,
    CreateTable,
    Copy,
    Insert,
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StatementKind::CreateSchema => "create schema",
            StatementKind::DropTable => "drop",
            StatementKind::CreateTable => "create",
            StatementKind::Copy => "copy",
            StatementKind::Insert => "insert",
        };
        f.write_str(label)
    }
}

/// A named SQL statement together with the object it targets.
///
/// Lists of statements are the execution plan of a run: the sequencer
/// executes them exactly in list order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub kind: StatementKind,
    /// Schema or fully qualified table the statement acts on.
    pub target: &'static str,
    pub sql: Cow<'static, str>,
}

impl Statement {
    pub const fn new(kind: StatementKind, target: &'static str, sql: &'static str) -> Self {
        Self {
            kind,
            target,
            sql: Cow::Borrowed(sql),
        }
    }

    pub fn generated(kind: StatementKind, target: &'static str, sql: String) -> Self {
        Self {
            kind,
            target,
            sql: Cow::Owned(sql),
        }
    }

    /// Short label used in logs and reports, e.g. `drop analytics.d_time`.
    pub fn name(&self) -> String {
        format!("{} {}", self.kind, self.target)
    }
}
