use thiserror::Error;

/// Errors that stop a run before any statement is executed.
///
/// Failures of individual statements are not errors at this level: they are
/// recorded in the `RunReport`.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(#[from] configuration::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] database::DbError),
}
