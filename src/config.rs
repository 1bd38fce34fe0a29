use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::PgSslMode;

use crate::error::Error;

pub const DATABASE_URL: &str = "POSTGRES_DATABASE_URL";
pub const SSL_MODE: &str = "POSTGRES_SSLMODE";
pub const MAX_CONNECTIONS: &str = "DATABASE_MAX_CONNECTIONS";
pub const MAX_LIFETIME_SECS: &str = "DATABASE_MAX_LIFETIME_SECS";
pub const HOST: &str = "QUIZAPI_HOST";
pub const PORT: &str = "QUIZAPI_PORT";

/// Startup configuration, read once from the environment (and `.env`).
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub ssl_mode: PgSslMode,
    pub max_connections: u32,
    /// Connections older than this are closed and replaced.
    pub max_lifetime: Duration,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| dotenv::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup(DATABASE_URL).ok_or_else(|| Error::ConfigError(format!("environment variable {} not been set", DATABASE_URL)))?;
        let ssl_mode = match lookup(SSL_MODE) {
            Some(mode) => PgSslMode::from_str(&mode).map_err(|_| Error::ConfigError(format!("{}: unknown ssl mode {:?}", SSL_MODE, mode)))?,
            None => PgSslMode::Require,
        };
        let config = Config {
            database_url: normalize_url(database_url.trim()),
            ssl_mode,
            max_connections: parse_or(&lookup, MAX_CONNECTIONS, 5)?,
            max_lifetime: Duration::from_secs(parse_or(&lookup, MAX_LIFETIME_SECS, 300)?),
            host: lookup(HOST).unwrap_or_else(|| "127.0.0.1".into()),
            port: parse_or(&lookup, PORT, 8000)?,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), Error> {
        if self.database_url.is_empty() {
            return Err(Error::ConfigError(format!("{} is empty", DATABASE_URL)));
        }
        if !self.database_url.starts_with("postgres://") && !self.database_url.starts_with("postgresql://") {
            return Err(Error::ConfigError(format!("{} must be a postgres connection string", DATABASE_URL)));
        }
        if self.max_connections == 0 {
            return Err(Error::ConfigError(format!("{} must be greater than 0", MAX_CONNECTIONS)));
        }
        if self.port == 0 {
            return Err(Error::ConfigError(format!("{} must be greater than 0", PORT)));
        }
        if self.host.is_empty() {
            return Err(Error::ConfigError(format!("{} is empty", HOST)));
        }
        Ok(())
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, Error>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(v) => v.trim().parse().map_err(|e| Error::ConfigError(format!("{}: {}", key, e))),
        None => Ok(default),
    }
}

// "postgresql+psycopg://..." style urls name a driver; sqlx only wants the scheme.
fn normalize_url(url: &str) -> String {
    match url.split_once("://") {
        Some((scheme, rest)) if scheme.starts_with("postgresql+") => format!("postgresql://{}", rest),
        _ => url.to_owned(),
    }
}
