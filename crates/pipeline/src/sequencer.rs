use crate::report::{Outcome, RunReport, StatementOutcome};
use catalog::Statement;
use database::{DbError, StatementExecutor};
use std::time::Instant;

/// Executes `statements` one after another on a single connection.
///
/// Every statement runs in its own transaction and is committed as soon as it
/// succeeds. A failing statement is rolled back, recorded, and the sequence
/// moves on: every statement is attempted exactly once, in list order. Earlier
/// commits are never undone.
pub async fn run_statements<E>(executor: &mut E, statements: &[Statement]) -> RunReport
where
    E: StatementExecutor + ?Sized,
{
    let mut report = RunReport::start();

    for statement in statements {
        let name = statement.name();
        tracing::info!(statement = %name, "Attempting to execute query: {}", statement.sql.trim());

        let started = Instant::now();
        let outcome = match execute_and_commit(executor, &statement.sql).await {
            Ok(rows_affected) => {
                tracing::info!(
                    statement = %name,
                    rows_affected,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Query finished successfully"
                );
                Outcome::Succeeded { rows_affected }
            }
            Err(e) => {
                tracing::error!(statement = %name, error = %e, "Query failed");
                if let Err(rollback_err) = executor.rollback().await {
                    tracing::warn!(statement = %name, error = %rollback_err, "Rollback failed");
                }
                Outcome::Failed {
                    error: e.to_string(),
                }
            }
        };

        report.record(StatementOutcome::new(statement, outcome, started.elapsed()));
    }

    report
}

async fn execute_and_commit<E>(executor: &mut E, sql: &str) -> Result<u64, DbError>
where
    E: StatementExecutor + ?Sized,
{
    let rows_affected = executor.execute(sql).await?;
    executor.commit().await?;
    Ok(rows_affected)
}
