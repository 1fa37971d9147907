//! Fake executors for exercising the sequencer and the runners without a cluster.

use async_trait::async_trait;
use database::{DbError, StatementExecutor};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Execute(String),
    Commit,
    Rollback,
    Close,
}

/// Records every call and fails the executes whose SQL contains one of
/// `fail_when`.
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    pub calls: Vec<Call>,
    pub fail_when: Vec<String>,
    pub fail_commit: bool,
}

impl RecordingExecutor {
    pub fn failing_on(pattern: &str) -> Self {
        Self {
            fail_when: vec![pattern.to_string()],
            ..Self::default()
        }
    }

    pub fn executed(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Execute(sql) => Some(sql.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, wanted: &Call) -> usize {
        self.calls.iter().filter(|call| *call == wanted).count()
    }
}

#[async_trait]
impl StatementExecutor for RecordingExecutor {
    async fn execute(&mut self, sql: &str) -> Result<u64, DbError> {
        self.calls.push(Call::Execute(sql.to_string()));
        if self.fail_when.iter().any(|pattern| sql.contains(pattern.as_str())) {
            return Err(DbError::QueryError(sqlx_error("simulated failure")));
        }
        Ok(1)
    }

    async fn commit(&mut self) -> Result<(), DbError> {
        self.calls.push(Call::Commit);
        if self.fail_commit {
            return Err(DbError::QueryError(sqlx_error("commit refused")));
        }
        Ok(())
    }

    async fn rollback(&mut self) -> Result<(), DbError> {
        self.calls.push(Call::Rollback);
        Ok(())
    }

    async fn close(&mut self) -> Result<(), DbError> {
        self.calls.push(Call::Close);
        Ok(())
    }
}

fn sqlx_error(message: &str) -> database::sqlx::Error {
    database::sqlx::Error::Protocol(message.to_string())
}

/// Tracks which schemas and tables exist, interpreting only the DDL forms the
/// catalog uses. Unguarded creates of existing objects fail like the real
/// engine would.
#[derive(Debug, Default)]
pub struct SchemaStateExecutor {
    pub objects: BTreeSet<String>,
}

#[async_trait]
impl StatementExecutor for SchemaStateExecutor {
    async fn execute(&mut self, sql: &str) -> Result<u64, DbError> {
        let words: Vec<&str> = sql.split_whitespace().collect();
        match words.as_slice() {
            ["drop", "table", "if", "exists", name, ..] => {
                self.objects.remove(*name);
            }
            ["create", _, "if", "not", "exists", name, ..] => {
                self.objects.insert(name.to_string());
            }
            ["create", _, name, ..] => {
                if !self.objects.insert(name.to_string()) {
                    return Err(DbError::QueryError(sqlx_error("already exists")));
                }
            }
            _ => {}
        }
        Ok(0)
    }

    async fn commit(&mut self) -> Result<(), DbError> {
        Ok(())
    }

    async fn rollback(&mut self) -> Result<(), DbError> {
        Ok(())
    }

    async fn close(&mut self) -> Result<(), DbError> {
        Ok(())
    }
}
