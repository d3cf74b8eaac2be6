use crate::domain::{favorite::FavoriteLink, menu::Menu};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MenuDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub ingredients: Vec<String>,
}

impl From<Menu> for MenuDto {
    fn from(menu: Menu) -> Self {
        Self {
            id: menu.id.into(),
            name: menu.name,
            description: menu.description,
            ingredients: menu.ingredients,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteMenuDto {
    pub id: Uuid,
    pub menu_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu: Option<MenuDto>,
    pub added_at: DateTime<Utc>,
}

impl From<FavoriteLink> for FavoriteMenuDto {
    fn from(link: FavoriteLink) -> Self {
        Self {
            id: link.id.as_uuid(),
            menu_id: link.menu_id.into(),
            menu: link.menu.map(MenuDto::from),
            added_at: link.added_at,
        }
    }
}
