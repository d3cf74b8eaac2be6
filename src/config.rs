// src/config.rs
use std::{env, str::FromStr, time::Duration};
use thiserror::Error;

use crate::infrastructure::security::DEFAULT_MARKER_CONTEXT;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Redis,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "redis" => Ok(Self::Redis),
            "memory" => Ok(Self::Memory),
            other => Err(ConfigError::Invalid(format!(
                "STORAGE_BACKEND must be one of postgres, redis, memory (got '{other}')"
            ))),
        }
    }
}

impl StorageBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::Redis => "redis",
            Self::Memory => "memory",
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    storage_backend: StorageBackend,
    database_url: Option<String>,
    database_max_connections: u32,
    redis_url: Option<String>,
    allowed_origins: Vec<String>,
    request_deadline: Duration,
    marker_context: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

const DEFAULT_MAX_CONNECTIONS: u32 = 16;
const DEFAULT_DEADLINE_MS: u64 = 5_000;

fn parse_number<T: FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid(format!("{key} must be a positive integer"))),
    }
}

fn parse_origins(raw: Option<String>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
    })
    .filter(|origins| !origins.is_empty())
    .unwrap_or_else(default_allowed_origins)
}

impl AppConfig {
    /// Build configuration from environment variables, reading a `.env` file
    /// first when one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);
        let storage_backend = match lookup("STORAGE_BACKEND") {
            Some(raw) => raw.parse()?,
            None => StorageBackend::Postgres,
        };

        let database_url = lookup("DATABASE_URL").filter(|v| !v.trim().is_empty());
        let redis_url = lookup("REDIS_URL").filter(|v| !v.trim().is_empty());
        match storage_backend {
            StorageBackend::Postgres if database_url.is_none() => {
                return Err(ConfigError::Missing("DATABASE_URL"));
            }
            StorageBackend::Redis if redis_url.is_none() => {
                return Err(ConfigError::Missing("REDIS_URL"));
            }
            _ => {}
        }

        let database_max_connections = parse_number(
            "DATABASE_MAX_CONNECTIONS",
            lookup("DATABASE_MAX_CONNECTIONS"),
            DEFAULT_MAX_CONNECTIONS,
        )?;
        if database_max_connections == 0 {
            return Err(ConfigError::Invalid(
                "DATABASE_MAX_CONNECTIONS must be a positive integer".into(),
            ));
        }

        let deadline_ms = parse_number(
            "REQUEST_DEADLINE_MS",
            lookup("REQUEST_DEADLINE_MS"),
            DEFAULT_DEADLINE_MS,
        )?;
        if deadline_ms == 0 {
            return Err(ConfigError::Invalid(
                "REQUEST_DEADLINE_MS must be a positive integer".into(),
            ));
        }

        let marker_context = lookup("EXTERNAL_MARKER_CONTEXT")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MARKER_CONTEXT.to_string());

        Ok(Self {
            listen_addr,
            storage_backend,
            database_url,
            database_max_connections,
            redis_url,
            allowed_origins: parse_origins(lookup("ALLOWED_ORIGINS")),
            request_deadline: Duration::from_millis(deadline_ms),
            marker_context,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn storage_backend(&self) -> StorageBackend {
        self.storage_backend
    }

    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    pub fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    pub fn redis_url(&self) -> Option<&str> {
        self.redis_url.as_deref()
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn request_deadline(&self) -> Duration {
        self.request_deadline
    }

    pub fn marker_context(&self) -> &str {
        &self.marker_context
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn memory_backend_needs_no_urls() {
        let cfg = config(&[("STORAGE_BACKEND", "memory")]).unwrap();
        assert_eq!(cfg.storage_backend(), StorageBackend::Memory);
        assert_eq!(cfg.listen_addr(), "127.0.0.1:8080");
        assert_eq!(cfg.database_max_connections(), 16);
        assert_eq!(cfg.request_deadline(), Duration::from_millis(5_000));
        assert_eq!(cfg.allowed_origins(), ["http://localhost:3000".to_string()]);
        assert_eq!(cfg.marker_context(), DEFAULT_MARKER_CONTEXT);
    }

    #[test]
    fn postgres_is_the_default_and_requires_a_url() {
        assert!(matches!(config(&[]), Err(ConfigError::Missing("DATABASE_URL"))));
        let cfg = config(&[("DATABASE_URL", "postgres://localhost/cooks")]).unwrap();
        assert_eq!(cfg.storage_backend(), StorageBackend::Postgres);
        assert_eq!(cfg.database_url(), Some("postgres://localhost/cooks"));
    }

    #[test]
    fn redis_requires_a_url() {
        assert!(matches!(
            config(&[("STORAGE_BACKEND", "redis")]),
            Err(ConfigError::Missing("REDIS_URL"))
        ));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            config(&[("STORAGE_BACKEND", "mongo")]),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            config(&[("STORAGE_BACKEND", "memory"), ("REQUEST_DEADLINE_MS", "soon")]),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            config(&[("STORAGE_BACKEND", "memory"), ("DATABASE_MAX_CONNECTIONS", "0")]),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn origins_are_split_and_trimmed() {
        let cfg = config(&[
            ("STORAGE_BACKEND", "memory"),
            ("ALLOWED_ORIGINS", "https://a.test, https://b.test ,"),
        ])
        .unwrap();
        assert_eq!(cfg.allowed_origins(), ["https://a.test", "https://b.test"]);
    }
}
