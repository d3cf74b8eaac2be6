use super::FavoritesLedger;
use crate::{
    application::{dto::FavoriteMenuDto, error::ApplicationResult},
    domain::{cook::CookId, menu::MenuId},
};

impl FavoritesLedger {
    /// Set-difference. Removing a menu that is not a favorite is a silent
    /// success.
    pub async fn remove_favorite(
        &self,
        caller: CookId,
        menu_id: &str,
    ) -> ApplicationResult<Vec<FavoriteMenuDto>> {
        let menu_id = MenuId::new(menu_id)?;
        self.deadline
            .run("remove_favorite", async {
                self.ensure_cook_exists(caller).await?;

                if self.storage.remove_favorite(caller, &menu_id).await? {
                    tracing::info!(cook_id = %caller, menu_id = %menu_id, "favorite removed");
                } else {
                    tracing::debug!(cook_id = %caller, menu_id = %menu_id, "favorite was not present");
                }

                self.current_favorites(caller).await
            })
            .await
    }
}
