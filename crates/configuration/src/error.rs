use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read the warehouse config (dwh.cfg or DWH_* variables): {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Invalid warehouse config: {0}")]
    ValidationError(String),
}
