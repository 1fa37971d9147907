use catalog::{Statement, StatementKind};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;

/// How a single statement ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Succeeded { rows_affected: u64 },
    Failed { error: String },
}

/// The result of one statement of a run.
#[derive(Debug, Clone, Serialize)]
pub struct StatementOutcome {
    pub name: String,
    pub kind: StatementKind,
    pub target: &'static str,
    #[serde(flatten)]
    pub outcome: Outcome,
    pub elapsed_ms: u64,
}

impl StatementOutcome {
    pub fn new(statement: &Statement, outcome: Outcome, elapsed: Duration) -> Self {
        Self {
            name: statement.name(),
            kind: statement.kind,
            target: statement.target,
            outcome,
            elapsed_ms: elapsed.as_millis() as u64,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Succeeded { .. })
    }
}

/// Per-statement results of a run, in execution order.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub statements: Vec<StatementOutcome>,
}

impl RunReport {
    pub fn start() -> Self {
        let now = Utc::now();
        Self {
            started_at: now,
            finished_at: now,
            statements: Vec::new(),
        }
    }

    pub fn record(&mut self, outcome: StatementOutcome) {
        self.statements.push(outcome);
        self.finished_at = Utc::now();
    }

    /// Appends the statements of a later phase of the same run.
    pub fn merge(&mut self, other: RunReport) {
        self.statements.extend(other.statements);
        self.finished_at = self.finished_at.max(other.finished_at);
    }

    pub fn succeeded(&self) -> usize {
        self.statements.iter().filter(|s| s.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.statements.len() - self.succeeded()
    }

    pub fn failures(&self) -> impl Iterator<Item = &StatementOutcome> {
        self.statements.iter().filter(|s| !s.is_success())
    }

    /// True when every statement of the run succeeded.
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
