use super::{
    RedisCookStore,
    document::{FavoriteEntry, MenuDocument},
    map_redis, scripts,
};
use crate::domain::cook::CookId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::favorite::{FavoriteLink, FavoriteRepository, NewFavorite};
use crate::domain::menu::{Menu, MenuCatalog, MenuId};
use async_trait::async_trait;
use redis::AsyncCommands;

fn favorite_outcome(code: i64) -> DomainResult<bool> {
    match code {
        1 => Ok(true),
        0 => Ok(false),
        -1 => Err(DomainError::not_found("cook not found")),
        other => Err(DomainError::persistence(format!(
            "unexpected script result {other}"
        ))),
    }
}

#[async_trait]
impl FavoriteRepository for RedisCookStore {
    async fn list_favorites(&self, cook_id: CookId) -> DomainResult<Vec<FavoriteLink>> {
        match self.load_document(cook_id).await? {
            Some(doc) => doc.into_favorites(),
            None => Ok(Vec::new()),
        }
    }

    async fn add_favorite(&self, favorite: NewFavorite) -> DomainResult<bool> {
        let doc_key = self.cook_key(favorite.cook_id);
        let menu_id = favorite.menu.id.as_str().to_owned();
        let entry = serde_json::to_string(&FavoriteEntry::from(favorite))
            .map_err(|err| DomainError::persistence(format!("favorite encoding: {err}")))?;

        let mut conn = self.connection().await?;
        let code: i64 = redis::cmd("EVAL")
            .arg(scripts::ADD_FAVORITE)
            .arg(1)
            .arg(&doc_key)
            .arg(&menu_id)
            .arg(&entry)
            .query_async(&mut conn)
            .await
            .map_err(map_redis)?;

        favorite_outcome(code)
    }

    async fn remove_favorite(&self, cook_id: CookId, menu_id: &MenuId) -> DomainResult<bool> {
        let mut conn = self.connection().await?;
        let code: i64 = redis::cmd("EVAL")
            .arg(scripts::REMOVE_FAVORITE)
            .arg(1)
            .arg(self.cook_key(cook_id))
            .arg(menu_id.as_str())
            .query_async(&mut conn)
            .await
            .map_err(map_redis)?;

        favorite_outcome(code)
    }
}

#[async_trait]
impl MenuCatalog for RedisCookStore {
    async fn find_menu(&self, id: &MenuId) -> DomainResult<Option<Menu>> {
        let mut conn = self.connection().await?;
        let raw: Option<String> = conn.get(self.menu_key(id)).await.map_err(map_redis)?;
        let Some(raw) = raw else {
            return Ok(None);
        };

        let doc: MenuDocument = serde_json::from_str(&raw)
            .map_err(|err| DomainError::persistence(format!("corrupt menu document: {err}")))?;
        Menu::try_from(doc).map(Some)
    }
}
