use super::FavoritesLedger;
use crate::{
    application::{dto::FavoriteMenuDto, error::ApplicationResult},
    domain::cook::CookId,
};

impl FavoritesLedger {
    /// Current favorites in storage order: insertion time for relational
    /// storage, array order for document storage.
    pub async fn list_favorites(&self, caller: CookId) -> ApplicationResult<Vec<FavoriteMenuDto>> {
        self.deadline
            .run("list_favorites", async {
                self.ensure_cook_exists(caller).await?;
                self.current_favorites(caller).await
            })
            .await
    }

    pub(super) async fn current_favorites(
        &self,
        caller: CookId,
    ) -> ApplicationResult<Vec<FavoriteMenuDto>> {
        let links = self.storage.list_favorites(caller).await?;
        Ok(links.into_iter().map(FavoriteMenuDto::from).collect())
    }
}
