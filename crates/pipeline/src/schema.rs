use crate::report::RunReport;
use crate::sequencer::run_statements;
use catalog::{create_statements, drop_statements};
use database::StatementExecutor;

/// Rebuilds the warehouse schema: drops the tables, then creates everything.
///
/// With `skip_staging` the staging tables survive the drop, so the next ETL run
/// can reuse the loaded raw data. The create list always runs in full; its
/// existence guards make it a no-op for the surviving tables.
pub async fn drop_and_create<E>(executor: &mut E, skip_staging: bool) -> RunReport
where
    E: StatementExecutor + ?Sized,
{
    tracing::info!("Dropping tables with `skip_staging` set to: {}", skip_staging);
    let mut report = run_statements(executor, &drop_statements(skip_staging)).await;

    tracing::info!("Creating schemas and tables.");
    report.merge(run_statements(executor, &create_statements()).await);

    report
}
