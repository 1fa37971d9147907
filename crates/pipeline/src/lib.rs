//! # Warehouse Pipeline Crate
//!
//! Runs the statement catalog against the cluster. Two runs exist:
//!
//! - `run_create_tables`: drop the tables, then recreate the full schema.
//! - `run_etl`: bulk-load staging from S3 (optional), then transform into the
//!   star schema.
//!
//! Both go through the statement sequencer, which commits every statement on
//! its own, keeps going after failures, and returns a `RunReport`.

pub mod error;
pub mod etl;
pub mod report;
pub mod run;
pub mod schema;
pub mod sequencer;

#[cfg(test)]
mod testing;

pub use error::PipelineError;
pub use etl::load_and_transform;
pub use report::{Outcome, RunReport, StatementOutcome};
pub use run::{run_create_tables, run_etl, staging_sources};
pub use schema::drop_and_create;
pub use sequencer::run_statements;
