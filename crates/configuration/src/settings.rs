use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

use crate::error::ConfigError;

/// The root configuration structure, mirroring the sections of `dwh.cfg`.
///
/// Field names are the canonical keys produced by `canonical_entries`; the
/// raw sources are never deserialized into this struct directly.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub cluster: ClusterConfig,
    pub iam_role: IamRoleConfig,
    pub s3: S3Config,
}

/// Credentials and address of the Redshift cluster.
#[derive(Clone, Deserialize)]
pub struct ClusterConfig {
    pub host: String,
    pub dbname: String,
    pub user: String,
    pub password: String,
    /// Kept as text so that the connection string reproduces it exactly.
    pub port: String,
}

/// The IAM role the cluster assumes to read from S3.
#[derive(Debug, Clone, Deserialize)]
pub struct IamRoleConfig {
    pub arn: String,
}

/// Locations of the raw JSON data sets.
#[derive(Debug, Clone, Deserialize)]
pub struct S3Config {
    /// Prefix holding the event log files.
    pub log_data: String,
    /// Prefix holding the song metadata files.
    pub song_data: String,
}

impl Config {
    /// Checks that every value needed to connect and to load staging data is present.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("CLUSTER.host", &self.cluster.host),
            ("CLUSTER.dbname", &self.cluster.dbname),
            ("CLUSTER.user", &self.cluster.user),
            ("IAM_ROLE.ARN", &self.iam_role.arn),
            ("S3.LOG_DATA", &self.s3.log_data),
            ("S3.SONG_DATA", &self.s3.song_data),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "`{key}` must not be empty"
                )));
            }
        }
        self.cluster.port_number()?;
        Ok(())
    }

    /// Strips one pair of enclosing single quotes from the S3 locations.
    ///
    /// The copy statements quote the locations themselves, so a value written
    /// as `'s3://bucket/prefix'` and one written as `s3://bucket/prefix` end
    /// up in the same statement.
    pub(crate) fn normalize(mut self) -> Self {
        self.s3.log_data = strip_quotes(&self.s3.log_data);
        self.s3.song_data = strip_quotes(&self.s3.song_data);
        self.iam_role.arn = strip_quotes(&self.iam_role.arn);
        self
    }
}

/// Sections of a raw config source: section name to key to value.
pub(crate) type RawSections = HashMap<String, HashMap<String, String>>;

/// Flattens raw sections into `section.key` paths with lower-case names,
/// mapping the `DB_*` spellings of `dwh.cfg` onto the field names.
///
/// Every source goes through here, so a value from the file and an override
/// from the environment land on the same path.
pub(crate) fn canonical_entries(sections: RawSections) -> Vec<(String, String)> {
    sections
        .into_iter()
        .flat_map(|(section, keys)| {
            let section = section.to_lowercase();
            keys.into_iter().map(move |(key, value)| {
                let key = key.to_lowercase();
                (format!("{section}.{}", canonical_key(&key)), value)
            })
        })
        .collect()
}

fn canonical_key(key: &str) -> &str {
    match key {
        "db_name" => "dbname",
        "db_user" => "user",
        "db_password" => "password",
        "db_port" => "port",
        other => other,
    }
}

fn strip_quotes(value: &str) -> String {
    let trimmed = value.trim();
    trimmed
        .strip_prefix('\'')
        .and_then(|v| v.strip_suffix('\''))
        .unwrap_or(trimmed)
        .to_string()
}

impl ClusterConfig {
    /// The libpq form of the cluster address, kept for callers that hand it to
    /// other tools; `connect` builds its options field by field.
    pub fn conn_string(&self) -> String {
        format!(
            "host={} dbname={} user={} password={} port={}",
            self.host, self.dbname, self.user, self.password, self.port
        )
    }

    /// Same as [`ClusterConfig::conn_string`] with the password masked, for logging.
    pub fn redacted_conn_string(&self) -> String {
        format!(
            "host={} dbname={} user={} password=*** port={}",
            self.host, self.dbname, self.user, self.port
        )
    }

    /// The port as a number, as the driver expects it.
    pub fn port_number(&self) -> Result<u16, ConfigError> {
        self.port.trim().parse::<u16>().map_err(|_| {
            ConfigError::ValidationError(format!(
                "`CLUSTER.port` must be a valid port number, got '{}'",
                self.port
            ))
        })
    }
}

impl fmt::Debug for ClusterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClusterConfig")
            .field("host", &self.host)
            .field("dbname", &self.dbname)
            .field("user", &self.user)
            .field("password", &"***")
            .field("port", &self.port)
            .finish()
    }
}
