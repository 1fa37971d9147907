use anyhow::Context;
use clap::Parser;
use configuration::{RunArgs, load_config};
use redshift_elt::{finish, init_logging, log_file, run_or_abort};
use std::process::ExitCode;

/// Loads the raw song and event data from S3 into staging and transforms it
/// into the star schema.
#[tokio::main]
async fn main() -> ExitCode {
    let args = RunArgs::parse();

    let _guard = match init_logging(&log_file("etl"), !args.no_verbose) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::from(redshift_elt::EXIT_ABORTED);
        }
    };

    run_or_abort(async {
        let config = load_config(&args.config)
            .with_context(|| format!("failed to load config from {}", args.config.display()))?;
        let report = pipeline::run_etl(&config, args.skip_staging).await?;
        Ok::<_, anyhow::Error>(finish(&report, &args))
    })
    .await
}
