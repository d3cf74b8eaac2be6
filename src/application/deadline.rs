// src/application/deadline.rs
use crate::application::{ApplicationResult, error::ApplicationError};
use std::{future::Future, time::Duration};

/// Upper bound on how long a single resolver or ledger call may spend in
/// storage. Dropping the storage future on expiry aborts the in-flight query
/// and rolls back any open transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline(Duration);

impl Deadline {
    pub const DEFAULT: Self = Self(Duration::from_secs(5));

    pub fn new(limit: Duration) -> Self {
        Self(limit)
    }

    pub fn limit(&self) -> Duration {
        self.0
    }

    pub async fn run<T, F>(&self, operation: &'static str, fut: F) -> ApplicationResult<T>
    where
        F: Future<Output = ApplicationResult<T>>,
    {
        match tokio::time::timeout(self.0, fut).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(
                    operation,
                    limit_ms = self.0.as_millis() as u64,
                    "storage deadline exceeded"
                );
                Err(ApplicationError::infrastructure(format!(
                    "{operation} did not finish within {} ms",
                    self.0.as_millis()
                )))
            }
        }
    }
}

impl Default for Deadline {
    fn default() -> Self {
        Self::DEFAULT
    }
}
