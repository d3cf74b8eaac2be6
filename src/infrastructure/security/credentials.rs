// src/infrastructure/security/credentials.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::security::CredentialHasher,
};
use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use async_trait::async_trait;

/// BLAKE3 derive-key context used when `EXTERNAL_MARKER_CONTEXT` is unset.
pub const DEFAULT_MARKER_CONTEXT: &str = "cook-service 2024-01-01 external identity marker";

#[derive(Clone)]
pub struct Argon2CredentialHasher {
    marker_context: String,
}

impl Default for Argon2CredentialHasher {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER_CONTEXT)
    }
}

impl Argon2CredentialHasher {
    pub fn new(marker_context: impl Into<String>) -> Self {
        Self {
            marker_context: marker_context.into(),
        }
    }
}

#[async_trait]
impl CredentialHasher for Argon2CredentialHasher {
    async fn hash(&self, secret: &str) -> ApplicationResult<String> {
        let secret = secret.to_owned();
        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            Argon2::default()
                .hash_password(secret.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|err| ApplicationError::infrastructure(err.to_string()))
        })
        .await
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
    }

    async fn verify(&self, secret: &str, hashed: &str) -> ApplicationResult<bool> {
        let secret = secret.to_owned();
        let hashed = hashed.to_owned();
        tokio::task::spawn_blocking(move || -> ApplicationResult<bool> {
            let parsed = PasswordHash::new(&hashed)
                .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
            Ok(Argon2::default()
                .verify_password(secret.as_bytes(), &parsed)
                .is_ok())
        })
        .await
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
    }

    fn external_marker(&self, subject_id: &str) -> ApplicationResult<String> {
        let subject_id = subject_id.trim();
        if subject_id.is_empty() {
            return Err(ApplicationError::validation(
                "external subject id cannot be empty",
            ));
        }
        let mut hasher = blake3::Hasher::new_derive_key(&self.marker_context);
        hasher.update(subject_id.as_bytes());
        Ok(hasher.finalize().to_hex().to_string())
    }
}
