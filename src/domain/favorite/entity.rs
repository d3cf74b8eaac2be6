// src/domain/favorite/entity.rs
use crate::domain::cook::CookId;
use crate::domain::menu::{Menu, MenuId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteId(Uuid);

impl FavoriteId {
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

impl fmt::Display for FavoriteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// One (cook, menu) pairing.
///
/// `menu` is whatever the backend can show for the linked menu: a live catalog
/// row for relational storage, or the snapshot copied when the favorite was
/// added for document storage. It is `None` when a relational link outlives
/// its catalog row.
#[derive(Debug, Clone, PartialEq)]
pub struct FavoriteLink {
    pub id: FavoriteId,
    pub cook_id: CookId,
    pub menu_id: MenuId,
    pub menu: Option<Menu>,
    pub added_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewFavorite {
    pub id: FavoriteId,
    pub cook_id: CookId,
    pub menu: Menu,
    pub added_at: DateTime<Utc>,
}

impl NewFavorite {
    pub fn new(cook_id: CookId, menu: Menu, added_at: DateTime<Utc>) -> Self {
        Self {
            id: FavoriteId::generate(),
            cook_id,
            menu,
            added_at,
        }
    }

    pub fn into_link(self) -> FavoriteLink {
        FavoriteLink {
            id: self.id,
            cook_id: self.cook_id,
            menu_id: self.menu.id.clone(),
            menu: Some(self.menu),
            added_at: self.added_at,
        }
    }
}
