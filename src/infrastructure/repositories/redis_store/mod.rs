// src/infrastructure/repositories/redis_store/mod.rs
//! Document storage: one JSON document per cook with the favorites embedded
//! as an array of menu snapshots. Uniqueness is kept by index keys that are
//! only ever written by the Lua scripts in [`scripts`].
mod cooks;
mod document;
mod favorites;
mod scripts;

use crate::domain::cook::{CookId, CookName, Email, ExternalSubject};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::menu::MenuId;
use crate::domain::storage::CookStorage;
use deadpool_redis::{Config as DeadpoolConfig, Connection, Pool, Runtime};

const DEFAULT_KEY_PREFIX: &str = "cook-service:";

#[derive(Clone)]
pub struct RedisCookStore {
    pool: Pool,
    prefix: String,
}

impl RedisCookStore {
    /// Create a store from a redis URL (e.g. redis://:password@host:6379/0)
    pub fn from_url(url: &str) -> DomainResult<Self> {
        let cfg = DeadpoolConfig::from_url(url);
        let pool = cfg
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|err| DomainError::persistence(err.to_string()))?;

        Ok(Self::new(pool))
    }

    pub fn new(pool: Pool) -> Self {
        Self {
            pool,
            prefix: DEFAULT_KEY_PREFIX.to_string(),
        }
    }

    /// Namespace every key under `prefix`, e.g. to isolate test runs.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn menu_key(&self, id: &MenuId) -> String {
        format!("{}menu:{}", self.prefix, id)
    }

    fn cook_key(&self, id: CookId) -> String {
        format!("{}cook:{}", self.prefix, id)
    }

    fn email_key(&self, email: &Email) -> String {
        format!("{}cook:email:{}", self.prefix, email)
    }

    fn name_key(&self, name: &CookName) -> String {
        format!("{}cook:name:{}", self.prefix, name)
    }

    fn external_key(&self, subject: &ExternalSubject) -> String {
        format!("{}cook:external:{}", self.prefix, subject.as_str())
    }

    async fn connection(&self) -> DomainResult<Connection> {
        self.pool
            .get()
            .await
            .map_err(|err| DomainError::persistence(err.to_string()))
    }
}

impl CookStorage for RedisCookStore {
    fn backend_name(&self) -> &'static str {
        "redis"
    }
}

fn map_redis(err: redis::RedisError) -> DomainError {
    DomainError::persistence(err.to_string())
}

/// Script status for a refused uniqueness check.
fn script_conflict(status: &str) -> Option<DomainError> {
    match status {
        "email" => Some(DomainError::conflict("email already registered")),
        "name" => Some(DomainError::conflict("name already taken")),
        "external" => Some(DomainError::conflict(
            "external identity already linked to another cook",
        )),
        _ => None,
    }
}
