use crate::report::RunReport;
use crate::sequencer::run_statements;
use catalog::{StagingSources, copy_statements, insert_statements};
use database::StatementExecutor;

/// Loads the staging tables from S3, then transforms them into the analytics tables.
///
/// With `skip_staging` no copy is issued and the transforms read whatever the
/// staging tables already hold from a previous run.
pub async fn load_and_transform<E>(
    executor: &mut E,
    sources: &StagingSources,
    skip_staging: bool,
) -> RunReport
where
    E: StatementExecutor + ?Sized,
{
    let mut report = if skip_staging {
        tracing::info!("Loading staging tables is skipped, existing data will be used.");
        RunReport::start()
    } else {
        tracing::warn!("Loading staging tables, this might take around 2 hours...");
        run_statements(executor, &copy_statements(sources)).await
    };

    tracing::info!("Transforming staging tables into analytics tables.");
    report.merge(run_statements(executor, &insert_statements()).await);

    report
}
