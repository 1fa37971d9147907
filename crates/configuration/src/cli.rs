use std::path::PathBuf;

/// Command-line arguments shared by the `create_tables` and `etl` binaries.
#[derive(Debug, Clone, clap::Parser)]
#[command(author, version, about, long_about = None)]
pub struct RunArgs {
    /// Filepath to the config file.
    #[arg(long, default_value = "./dwh.cfg")]
    pub config: PathBuf,

    /// Only log warnings and errors.
    #[arg(long)]
    pub no_verbose: bool,

    /// Leave the staging tables alone (no drop, no reload).
    #[arg(long)]
    pub skip_staging: bool,

    /// Print a table of statement outcomes when the run finishes.
    #[arg(long)]
    pub summary: bool,
}
