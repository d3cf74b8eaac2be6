// src/application/ports/security.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

/// One-way transform of secrets into their stored form.
#[async_trait]
pub trait CredentialHasher: Send + Sync {
    /// Salted, slow hash of a locally chosen secret.
    async fn hash(&self, secret: &str) -> ApplicationResult<String>;

    /// Whether `secret` matches a value produced by [`CredentialHasher::hash`].
    async fn verify(&self, secret: &str, hashed: &str) -> ApplicationResult<bool>;

    /// Deterministic marker for an external provider's subject id. The same
    /// subject always maps to the same marker, so it doubles as a lookup key.
    fn external_marker(&self, subject_id: &str) -> ApplicationResult<String>;
}
