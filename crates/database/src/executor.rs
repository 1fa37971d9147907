use crate::error::DbError;
use async_trait::async_trait;
use sqlx::{Connection, Executor, PgConnection};

/// The minimal set of operations the statement sequencer needs from a
/// database connection.
///
/// Each statement runs in its own transaction: `execute` opens one if none is
/// active, `commit` or `rollback` ends it. Implementations must not run two
/// statements at once.
#[async_trait]
pub trait StatementExecutor: Send {
    /// Executes a single SQL statement and returns the number of rows affected.
    async fn execute(&mut self, sql: &str) -> Result<u64, DbError>;

    /// Commits the transaction opened by the last `execute`.
    async fn commit(&mut self) -> Result<(), DbError>;

    /// Discards the transaction opened by the last `execute`.
    async fn rollback(&mut self) -> Result<(), DbError>;

    /// Closes the underlying connection. Later calls fail with `DbError::Closed`.
    async fn close(&mut self) -> Result<(), DbError>;
}

/// A `StatementExecutor` over a single `sqlx` Postgres connection.
///
/// Statements are sent with the simple query protocol (`sqlx::raw_sql`), which
/// is what Redshift expects for DDL and `COPY`.
#[derive(Debug)]
pub struct PgStatementExecutor {
    conn: Option<PgConnection>,
    in_transaction: bool,
}

impl PgStatementExecutor {
    pub fn new(conn: PgConnection) -> Self {
        Self {
            conn: Some(conn),
            in_transaction: false,
        }
    }

    fn conn(&mut self) -> Result<&mut PgConnection, DbError> {
        self.conn.as_mut().ok_or(DbError::Closed)
    }
}

#[async_trait]
impl StatementExecutor for PgStatementExecutor {
    async fn execute(&mut self, sql: &str) -> Result<u64, DbError> {
        if !self.in_transaction {
            self.conn()?.execute(sqlx::raw_sql("BEGIN")).await?;
            self.in_transaction = true;
        }
        let result = self.conn()?.execute(sqlx::raw_sql(sql)).await?;
        Ok(result.rows_affected())
    }

    async fn commit(&mut self) -> Result<(), DbError> {
        if self.in_transaction {
            self.in_transaction = false;
            self.conn()?.execute(sqlx::raw_sql("COMMIT")).await?;
        }
        Ok(())
    }

    async fn rollback(&mut self) -> Result<(), DbError> {
        if self.in_transaction {
            self.in_transaction = false;
            self.conn()?.execute(sqlx::raw_sql("ROLLBACK")).await?;
        }
        Ok(())
    }

    async fn close(&mut self) -> Result<(), DbError> {
        let conn = self.conn.take().ok_or(DbError::Closed)?;
        conn.close().await?;
        tracing::info!("Connection to cluster closed.");
        Ok(())
    }
}
