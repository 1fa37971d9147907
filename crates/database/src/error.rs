use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Invalid connection settings for the cluster: {0}")]
    ConnectionConfigError(String),

    #[error("Failed to connect to the cluster: {0}")]
    ConnectionError(#[source] sqlx::Error),

    #[error("Statement failed: {0}")]
    QueryError(#[from] sqlx::Error),

    #[error("The connection has already been closed.")]
    Closed,
}
