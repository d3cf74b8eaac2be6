// src/domain/cook/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

const MAX_NAME_LEN: usize = 64;
const MAX_EMAIL_LEN: usize = 254;
const MAX_AVATAR_LEN: usize = 2048;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CookId(Uuid);

impl CookId {
    /// Fresh identifier for a profile that is about to be created.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<CookId> for Uuid {
    fn from(value: CookId) -> Self {
        value.0
    }
}

impl FromStr for CookId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| DomainError::validation("invalid cook ID format"))
    }
}

impl fmt::Display for CookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CookName(String);

impl CookName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if trimmed.chars().count() > MAX_NAME_LEN {
            return Err(DomainError::validation(format!(
                "name must be at most {MAX_NAME_LEN} characters long"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Same name with `-suffix` appended, trimmed back under the length limit.
    pub fn with_suffix(&self, suffix: &str) -> DomainResult<Self> {
        let keep = MAX_NAME_LEN.saturating_sub(suffix.chars().count() + 1);
        let base: String = self.0.chars().take(keep).collect();
        Self::new(format!("{base}-{suffix}"))
    }
}

impl From<CookName> for String {
    fn from(value: CookName) -> Self {
        value.0
    }
}

impl fmt::Display for CookName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Email addresses are compared case-insensitively, so they are stored
/// lowercased.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_lowercase();
        if value.is_empty() {
            return Err(DomainError::validation("email cannot be empty"));
        }
        if value.len() > MAX_EMAIL_LEN {
            return Err(DomainError::validation("email is too long"));
        }
        let valid = match value.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && !domain.is_empty()
                    && !domain.contains('@')
                    && !value.chars().any(char::is_whitespace)
            }
            None => false,
        };
        if !valid {
            return Err(DomainError::validation(format!(
                "'{value}' is not a valid email address"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Avatar(String);

impl Avatar {
    /// Blank input means "no avatar" rather than an error.
    pub fn parse(value: Option<String>) -> DomainResult<Option<Self>> {
        let Some(value) = value else {
            return Ok(None);
        };
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        if trimmed.len() > MAX_AVATAR_LEN {
            return Err(DomainError::validation("avatar reference is too long"));
        }
        Ok(Some(Self(trimmed.to_string())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Avatar> for String {
    fn from(value: Avatar) -> Self {
        value.0
    }
}

/// Stored form of a secret: an argon2 hash for local credentials, or the
/// external marker for profiles created by federated sign-in.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretHash(String);

impl SecretHash {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::validation("secret hash cannot be empty"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretHash(..)")
    }
}

impl From<SecretHash> for String {
    fn from(value: SecretHash) -> Self {
        value.0
    }
}

/// Opaque marker derived from an external provider's subject id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExternalSubject(String);

impl ExternalSubject {
    pub fn new(marker: impl Into<String>) -> DomainResult<Self> {
        let marker = marker.into();
        if marker.is_empty() {
            return Err(DomainError::validation("external subject marker cannot be empty"));
        }
        Ok(Self(marker))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn short(&self) -> &str {
        self.prefix(8)
    }

    /// First `chars` characters of the marker, or all of it when shorter.
    pub fn prefix(&self, chars: usize) -> &str {
        let end = self.0.char_indices().nth(chars).map_or(self.0.len(), |(i, _)| i);
        &self.0[..end]
    }
}

impl From<ExternalSubject> for String {
    fn from(value: ExternalSubject) -> Self {
        value.0
    }
}
