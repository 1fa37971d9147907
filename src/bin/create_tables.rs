use anyhow::Context;
use clap::Parser;
use configuration::{RunArgs, load_config};
use redshift_elt::{finish, init_logging, log_file, run_or_abort};
use std::process::ExitCode;

/// Drops and recreates the staging and analytics tables of the warehouse.
#[tokio::main]
async fn main() -> ExitCode {
    let args = RunArgs::parse();

    let _guard = match init_logging(&log_file("create_tables"), !args.no_verbose) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::from(redshift_elt::EXIT_ABORTED);
        }
    };

    run_or_abort(async {
        let config = load_config(&args.config)
            .with_context(|| format!("failed to load config from {}", args.config.display()))?;
        let report = pipeline::run_create_tables(&config, args.skip_staging).await?;
        Ok::<_, anyhow::Error>(finish(&report, &args))
    })
    .await
}
