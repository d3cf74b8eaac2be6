use super::IdentityResolver;
use crate::{
    application::{
        dto::CookProfileDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::cook::{Cook, CookId},
};

impl IdentityResolver {
    pub async fn view_profile(&self, caller: CookId) -> ApplicationResult<CookProfileDto> {
        self.deadline
            .run("view_profile", async {
                self.load_cook(caller).await.map(CookProfileDto::from)
            })
            .await
    }

    pub(super) async fn load_cook(&self, id: CookId) -> ApplicationResult<Cook> {
        self.storage
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("cook not found"))
    }
}
