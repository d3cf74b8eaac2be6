use crate::domain::cook::CookId;
use crate::domain::errors::DomainResult;
use crate::domain::favorite::entity::{FavoriteLink, NewFavorite};
use crate::domain::menu::MenuId;
use async_trait::async_trait;

#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Favorites of `cook_id` in storage order.
    async fn list_favorites(&self, cook_id: CookId) -> DomainResult<Vec<FavoriteLink>>;

    /// Conditional insert. Returns `false` when the (cook, menu) pair already
    /// exists, in which case nothing is written.
    async fn add_favorite(&self, favorite: NewFavorite) -> DomainResult<bool>;

    /// Conditional delete. Returns `false` when there was nothing to remove.
    async fn remove_favorite(&self, cook_id: CookId, menu_id: &MenuId) -> DomainResult<bool>;
}
