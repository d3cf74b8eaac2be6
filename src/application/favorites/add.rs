use super::FavoritesLedger;
use crate::{
    application::{
        dto::FavoriteMenuDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{cook::CookId, favorite::NewFavorite, menu::MenuId},
};

impl FavoritesLedger {
    /// Set-union of `menu_id` into the caller's favorites. Adding a menu that
    /// is already a favorite succeeds without writing anything.
    pub async fn add_favorite(
        &self,
        caller: CookId,
        menu_id: &str,
    ) -> ApplicationResult<Vec<FavoriteMenuDto>> {
        let menu_id = MenuId::new(menu_id)?;
        self.deadline
            .run("add_favorite", async {
                self.ensure_cook_exists(caller).await?;

                let menu = self
                    .storage
                    .find_menu(&menu_id)
                    .await?
                    .ok_or_else(|| ApplicationError::not_found("menu not found"))?;

                let favorite = NewFavorite::new(caller, menu, self.clock.now());
                if self.storage.add_favorite(favorite).await? {
                    tracing::info!(cook_id = %caller, menu_id = %menu_id, "favorite added");
                } else {
                    tracing::debug!(cook_id = %caller, menu_id = %menu_id, "favorite already present");
                }

                self.current_favorites(caller).await
            })
            .await
    }
}
