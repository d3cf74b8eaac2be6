// src/infrastructure/repositories/postgres/favorites.rs
use super::PostgresCookStore;
use crate::domain::cook::CookId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::favorite::{FavoriteId, FavoriteLink, FavoriteRepository, NewFavorite};
use crate::domain::menu::{Menu, MenuId};
use crate::infrastructure::repositories::map_sqlx;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Link row with the catalog menu joined in live; the menu columns are null
/// when the catalog no longer has the row.
#[derive(Debug, FromRow)]
struct FavoriteRow {
    id: Uuid,
    cook_id: Uuid,
    menu_id: String,
    added_at: DateTime<Utc>,
    menu_name: Option<String>,
    menu_description: Option<String>,
    menu_ingredients: Option<Vec<String>>,
}

impl TryFrom<FavoriteRow> for FavoriteLink {
    type Error = DomainError;

    fn try_from(row: FavoriteRow) -> Result<Self, Self::Error> {
        let menu_id = MenuId::new(row.menu_id)?;
        let menu = row.menu_name.map(|name| {
            Menu::new(menu_id.clone(), name)
                .with_description(row.menu_description.unwrap_or_default())
                .with_ingredients(row.menu_ingredients.unwrap_or_default())
        });

        Ok(FavoriteLink {
            id: FavoriteId::from_uuid(row.id),
            cook_id: CookId::from_uuid(row.cook_id),
            menu_id,
            menu,
            added_at: row.added_at,
        })
    }
}

#[async_trait]
impl FavoriteRepository for PostgresCookStore {
    async fn list_favorites(&self, cook_id: CookId) -> DomainResult<Vec<FavoriteLink>> {
        let rows = sqlx::query_as::<_, FavoriteRow>(
            "SELECT f.id, f.cook_id, f.menu_id, f.added_at,
                    m.name AS menu_name,
                    m.description AS menu_description,
                    m.ingredients AS menu_ingredients
             FROM favorite_links f
             LEFT JOIN menus m ON m.id = f.menu_id
             WHERE f.cook_id = $1
             ORDER BY f.added_at, f.id",
        )
        .bind(cook_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(FavoriteLink::try_from).collect()
    }

    async fn add_favorite(&self, favorite: NewFavorite) -> DomainResult<bool> {
        let result = sqlx::query(
            "INSERT INTO favorite_links (id, cook_id, menu_id, added_at)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (cook_id, menu_id) DO NOTHING",
        )
        .bind(favorite.id.as_uuid())
        .bind(favorite.cook_id.as_uuid())
        .bind(favorite.menu.id.as_str())
        .bind(favorite.added_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(result.rows_affected() == 1)
    }

    async fn remove_favorite(&self, cook_id: CookId, menu_id: &MenuId) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM favorite_links WHERE cook_id = $1 AND menu_id = $2")
            .bind(cook_id.as_uuid())
            .bind(menu_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(result.rows_affected() > 0)
    }
}
