// src/infrastructure/repositories/redis_store/document.rs
//! JSON shapes stored in Redis. Documents are rewritten by Lua scripts through
//! `cjson`, which encodes an empty array as `{}`, so every list field accepts
//! either form on the way back in.
use crate::domain::cook::{
    Avatar, Cook, CookId, CookName, Email, ExternalSubject, NewCook, SecretHash,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::favorite::{FavoriteId, FavoriteLink, NewFavorite};
use crate::domain::menu::{Menu, MenuId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

fn lua_array<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum LuaArray<T> {
        List(Vec<T>),
        Empty(BTreeMap<String, serde_json::Value>),
    }

    match LuaArray::deserialize(deserializer)? {
        LuaArray::List(items) => Ok(items),
        LuaArray::Empty(map) if map.is_empty() => Ok(Vec::new()),
        LuaArray::Empty(_) => Err(serde::de::Error::custom("expected an array")),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(super) struct MenuDocument {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "lua_array")]
    pub ingredients: Vec<String>,
}

impl From<Menu> for MenuDocument {
    fn from(menu: Menu) -> Self {
        Self {
            id: menu.id.into(),
            name: menu.name,
            description: menu.description,
            ingredients: menu.ingredients,
        }
    }
}

impl TryFrom<MenuDocument> for Menu {
    type Error = DomainError;

    fn try_from(doc: MenuDocument) -> Result<Self, Self::Error> {
        Ok(Menu::new(MenuId::new(doc.id)?, doc.name)
            .with_description(doc.description)
            .with_ingredients(doc.ingredients))
    }
}

/// Embedded favorite carrying the menu as it looked when it was favorited.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(super) struct FavoriteEntry {
    pub id: Uuid,
    pub menu_id: String,
    pub menu: MenuDocument,
    pub added_at: DateTime<Utc>,
}

impl From<NewFavorite> for FavoriteEntry {
    fn from(favorite: NewFavorite) -> Self {
        Self {
            id: favorite.id.as_uuid(),
            menu_id: favorite.menu.id.as_str().to_owned(),
            menu: favorite.menu.into(),
            added_at: favorite.added_at,
        }
    }
}

impl FavoriteEntry {
    fn into_link(self, cook_id: CookId) -> DomainResult<FavoriteLink> {
        Ok(FavoriteLink {
            id: FavoriteId::from_uuid(self.id),
            cook_id,
            menu_id: MenuId::new(self.menu_id)?,
            menu: Some(Menu::try_from(self.menu)?),
            added_at: self.added_at,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(super) struct CookDocument {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub secret: String,
    #[serde(default)]
    pub external_subject: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "lua_array")]
    pub favorites: Vec<FavoriteEntry>,
}

impl From<NewCook> for CookDocument {
    fn from(new_cook: NewCook) -> Self {
        Self {
            id: new_cook.id.as_uuid(),
            name: new_cook.name.into(),
            email: new_cook.email.into(),
            secret: new_cook.secret.into(),
            external_subject: new_cook.external_subject.map(String::from),
            avatar: new_cook.avatar.map(String::from),
            created_at: new_cook.created_at,
            favorites: Vec::new(),
        }
    }
}

impl CookDocument {
    pub fn parse(raw: &str) -> DomainResult<Self> {
        serde_json::from_str(raw)
            .map_err(|err| DomainError::persistence(format!("corrupt cook document: {err}")))
    }

    pub fn to_json(&self) -> DomainResult<String> {
        serde_json::to_string(self)
            .map_err(|err| DomainError::persistence(format!("cook document encoding: {err}")))
    }

    pub fn to_cook(&self) -> DomainResult<Cook> {
        Ok(Cook {
            id: CookId::from_uuid(self.id),
            name: CookName::new(self.name.clone())?,
            email: Email::new(self.email.clone())?,
            secret: SecretHash::new(self.secret.clone())?,
            external_subject: self
                .external_subject
                .clone()
                .map(ExternalSubject::new)
                .transpose()?,
            avatar: Avatar::parse(self.avatar.clone())?,
            created_at: self.created_at,
        })
    }

    pub fn into_favorites(self) -> DomainResult<Vec<FavoriteLink>> {
        let cook_id = CookId::from_uuid(self.id);
        self.favorites
            .into_iter()
            .map(|entry| entry.into_link(cook_id))
            .collect()
    }
}
