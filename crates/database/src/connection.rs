use crate::error::DbError;
use crate::executor::PgStatementExecutor;
use configuration::ClusterConfig;
use sqlx::postgres::PgConnectOptions;
use sqlx::{Connection, PgConnection};

/// Opens one connection to the cluster described by `cluster`.
///
/// A run owns exactly one connection for its whole lifetime, so there is no
/// pool here. A failure is returned to the caller, which is expected to abort
/// the run rather than carry on without a connection.
pub async fn connect(cluster: &ClusterConfig) -> Result<PgStatementExecutor, DbError> {
    let port = cluster
        .port_number()
        .map_err(|e| DbError::ConnectionConfigError(e.to_string()))?;

    let options = PgConnectOptions::new()
        .host(&cluster.host)
        .port(port)
        .username(&cluster.user)
        .password(&cluster.password)
        .database(&cluster.dbname);

    tracing::info!(
        cluster = %cluster.redacted_conn_string(),
        "Connecting to cluster"
    );

    let conn = PgConnection::connect_with(&options)
        .await
        .map_err(DbError::ConnectionError)?;

    tracing::info!("Successfully established connection to cluster.");
    Ok(PgStatementExecutor::new(conn))
}
