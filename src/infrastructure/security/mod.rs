// src/infrastructure/security/mod.rs
pub mod credentials;

pub use credentials::{Argon2CredentialHasher, DEFAULT_MARKER_CONTEXT};
