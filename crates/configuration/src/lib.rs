use crate::settings::{RawSections, canonical_entries};
use std::path::Path;

// Declare the modules that make up this crate.
#[cfg(feature = "clap")]
pub mod cli;
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
#[cfg(feature = "clap")]
pub use cli::RunArgs;
pub use error::ConfigError;
pub use settings::{ClusterConfig, Config, IamRoleConfig, S3Config};

/// Prefix of environment variables that override values from the config file.
///
/// The section and key follow, separated by a double underscore:
/// `DWH_CLUSTER__PASSWORD` overrides `password` in `[CLUSTER]`.
pub const ENV_PREFIX: &str = "DWH";

/// Loads the warehouse configuration from an INI file such as `dwh.cfg`.
///
/// Values may be overridden from the environment (a `.env` file is read first),
/// which keeps secrets out of the file. Both sources are reduced to the same
/// lower-case keys before they are merged, so `DB_PASSWORD` in the file and
/// `DWH_CLUSTER__PASSWORD` in the environment name the same value. The result
/// is validated before it is returned, so a missing section or key surfaces
/// here rather than halfway through a run.
pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    if dotenvy::dotenv().is_ok() {
        tracing::debug!("Loaded environment overrides from .env");
    }

    let file: RawSections = config::Config::builder()
        .add_source(
            config::File::new(&path.to_string_lossy(), config::FileFormat::Ini).required(true),
        )
        .build()?
        .try_deserialize()?;

    let env: RawSections = config::Config::builder()
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?
        .try_deserialize()?;

    let mut builder = config::Config::builder();
    for (key, value) in canonical_entries(file) {
        builder = builder.set_default(key, value)?;
    }
    for (key, value) in canonical_entries(env) {
        tracing::debug!(key = %key, "Overriding config value from the environment");
        builder = builder.set_override(key, value)?;
    }

    let config = builder.build()?.try_deserialize::<Config>()?.normalize();
    config.validate()?;

    tracing::debug!(path = %path.display(), "Configuration loaded");
    Ok(config)
}
