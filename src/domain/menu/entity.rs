// src/domain/menu/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

const MAX_MENU_ID_LEN: usize = 128;

/// Menu identifiers are owned by the external catalog and treated as opaque.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MenuId(String);

impl MenuId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("menu id cannot be empty"));
        }
        if trimmed.len() > MAX_MENU_ID_LEN {
            return Err(DomainError::validation("menu id is too long"));
        }
        if trimmed.chars().any(char::is_control) {
            return Err(DomainError::validation("menu id contains control characters"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for MenuId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MenuId> for String {
    fn from(value: MenuId) -> Self {
        value.0
    }
}

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Read-only view of a catalog menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    pub id: MenuId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
}

impl Menu {
    pub fn new(id: MenuId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            ingredients: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_id_is_trimmed() {
        assert_eq!(MenuId::new(" menu-1 ").unwrap().as_str(), "menu-1");
        assert!(MenuId::new("").is_err());
        assert!(MenuId::new("a\u{0}b").is_err());
    }

    #[test]
    fn menu_id_deserialisation_validates() {
        let ok: MenuId = serde_json::from_str("\"menu-1\"").unwrap();
        assert_eq!(ok.as_str(), "menu-1");
        assert!(serde_json::from_str::<MenuId>("\"  \"").is_err());
    }
}
