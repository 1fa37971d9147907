use crate::error::PipelineError;
use crate::etl::load_and_transform;
use crate::report::RunReport;
use crate::schema::drop_and_create;
use catalog::StagingSources;
use configuration::Config;
use database::{StatementExecutor, connect};

/// The staging sources described by the loaded configuration.
pub fn staging_sources(config: &Config) -> StagingSources {
    StagingSources {
        iam_role_arn: config.iam_role.arn.clone(),
        log_data: config.s3.log_data.clone(),
        song_data: config.s3.song_data.clone(),
    }
}

/// Connects to the cluster and rebuilds the schema.
///
/// A failed connection aborts the run. Once connected, the connection is
/// closed at the end whatever the statements did.
pub async fn run_create_tables(config: &Config, skip_staging: bool) -> Result<RunReport, PipelineError> {
    let mut executor = connect(&config.cluster).await?;
    let report = drop_and_create(&mut executor, skip_staging).await;
    close(&mut executor).await;
    Ok(report)
}

/// Connects to the cluster, loads the staging tables and runs the transforms.
///
/// A failed connection aborts the run. Once connected, the connection is
/// closed at the end whatever the statements did.
pub async fn run_etl(config: &Config, skip_staging: bool) -> Result<RunReport, PipelineError> {
    let sources = staging_sources(config);
    let mut executor = connect(&config.cluster).await?;
    let report = load_and_transform(&mut executor, &sources, skip_staging).await;
    close(&mut executor).await;
    Ok(report)
}

async fn close<E>(executor: &mut E)
where
    E: StatementExecutor + ?Sized,
{
    if let Err(e) = executor.close().await {
        tracing::warn!(error = %e, "Failed to close the connection cleanly");
    }
}
