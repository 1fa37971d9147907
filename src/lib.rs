//! Shared plumbing of the `create_tables` and `etl` binaries.

pub mod logging;
pub mod summary;

use anyhow::Result;
use configuration::RunArgs;
use pipeline::RunReport;
use std::path::Path;
use std::process::ExitCode;

pub use logging::init_logging;
pub use summary::render_summary;

/// Exit code of a run that failed before executing any statement.
pub const EXIT_ABORTED: u8 = 2;

/// Exit code of a completed run: success only if no statement failed.
pub fn exit_code(report: &RunReport) -> ExitCode {
    if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

/// Logs the outcome of a finished run and prints the summary when asked to.
pub fn finish(report: &RunReport, args: &RunArgs) -> ExitCode {
    if report.is_success() {
        tracing::info!(statements = report.statements.len(), "Run finished without errors.");
    } else {
        for failure in report.failures() {
            tracing::warn!(statement = %failure.name, "Statement did not succeed");
        }
        tracing::error!(
            succeeded = report.succeeded(),
            failed = report.failed(),
            "Run finished with failed statements."
        );
    }
    match report.to_json() {
        Ok(json) => tracing::info!(report = %json, "Run report"),
        Err(e) => tracing::warn!(error = %e, "Failed to serialize the run report"),
    }

    if args.summary {
        println!("{}", render_summary(report));
    }
    exit_code(report)
}

/// Awaits a run and maps an error that stopped it early (bad config, no
/// connection) to [`EXIT_ABORTED`], logging it and echoing it on stderr.
pub async fn run_or_abort<F>(body: F) -> ExitCode
where
    F: std::future::Future<Output = Result<ExitCode>>,
{
    match body.await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "Run aborted");
            eprintln!("Error: {e:#}");
            ExitCode::from(EXIT_ABORTED)
        }
    }
}

/// The log file of a binary, e.g. `./logs/etl.log`.
pub fn log_file(name: &str) -> std::path::PathBuf {
    Path::new("./logs").join(format!("{name}.log"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::insert_statements;
    use pipeline::{Outcome, StatementOutcome};
    use std::time::Duration;

    fn report(failures: usize) -> RunReport {
        let mut report = RunReport::start();
        for (idx, statement) in insert_statements().iter().enumerate() {
            let outcome = if idx < failures {
                Outcome::Failed { error: "boom".to_string() }
            } else {
                Outcome::Succeeded { rows_affected: 10 }
            };
            report.record(StatementOutcome::new(statement, outcome, Duration::ZERO));
        }
        report
    }

    #[test]
    fn exit_code_follows_report() {
        assert_eq!(exit_code(&report(0)), ExitCode::SUCCESS);
        assert_eq!(exit_code(&report(2)), ExitCode::from(1));
    }

    #[test]
    fn log_files_live_under_logs() {
        assert_eq!(log_file("etl"), Path::new("./logs/etl.log"));
        assert_eq!(log_file("create_tables"), Path::new("./logs/create_tables.log"));
    }

    #[tokio::test]
    async fn early_error_maps_to_aborted() {
        let code = run_or_abort(async { Err(anyhow::anyhow!("no config")) }).await;
        assert_eq!(code, ExitCode::from(EXIT_ABORTED));
    }
}
