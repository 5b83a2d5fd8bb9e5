use std::path::Path;
use std::time::Duration;

use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Prefix of the environment variables read by [`BeerReviewsConfig::load`].
pub const ENV_PREFIX: &str = "BEER_REVIEWS_";

const FIELDS: &[&str] = &[
    "database_url",
    "max_connections",
    "min_connections",
    "connect_timeout",
    "sqlx_logging",
    "run_migrations",
];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid beer_reviews configuration: {0}")]
    Figment(#[from] Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

/// Configuration for the `beer_reviews` module.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BeerReviewsConfig {
    #[serde(default = "default_database_url")]
    pub database_url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout", with = "humantime_serde")]
    pub connect_timeout: Duration,
    #[serde(default)]
    pub sqlx_logging: bool,
    #[serde(default = "default_run_migrations")]
    pub run_migrations: bool,
}

impl Default for BeerReviewsConfig {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout: default_connect_timeout(),
            sqlx_logging: false,
            run_migrations: default_run_migrations(),
        }
    }
}

impl BeerReviewsConfig {
    /// Defaults, then the YAML file at `path` (when given), then
    /// `BEER_REVIEWS_*` environment variables. Variables under the prefix that
    /// name no field are ignored.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when a source cannot be read or a value has the
    /// wrong type.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        Self::from_figment(&figment.merge(known_fields(Env::prefixed(ENV_PREFIX))))
    }

    /// Extracts the configuration from a host-provided figment.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when a value has the wrong type.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        Ok(figment.extract()?)
    }

    /// In-memory `SQLite` lives in a single connection; a pool of several
    /// would give each connection its own empty database.
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        let url = self.database_url.as_str();
        url.starts_with("sqlite::memory:") || url.contains("mode=memory")
    }
}

fn known_fields(env: Env) -> Env {
    env.only(FIELDS)
}

fn default_database_url() -> String {
    "sqlite::memory:".to_owned()
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connect_timeout() -> Duration {
    Duration::from_secs(10)
}

fn default_run_migrations() -> bool {
    true
}
