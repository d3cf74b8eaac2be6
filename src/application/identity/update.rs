use super::IdentityResolver;
use crate::{
    application::{dto::CookProfileDto, error::ApplicationResult},
    domain::cook::{Avatar, CookId, CookName, CookUpdate, Email},
};

/// Partial profile patch. Absent and blank fields are ignored.
#[derive(Debug, Default)]
pub struct UpdateProfileCommand {
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl IdentityResolver {
    pub async fn update_profile(
        &self,
        caller: CookId,
        command: UpdateProfileCommand,
    ) -> ApplicationResult<CookProfileDto> {
        self.deadline
            .run("update_profile", self.apply_profile_patch(caller, command))
            .await
    }

    async fn apply_profile_patch(
        &self,
        caller: CookId,
        command: UpdateProfileCommand,
    ) -> ApplicationResult<CookProfileDto> {
        let mut update = CookUpdate::new(caller);

        if let Some(name) = non_blank(command.name) {
            update = update.with_name(CookName::new(name)?);
        }
        if let Some(email) = non_blank(command.email) {
            update = update.with_email(Email::new(email)?);
        }
        if let Some(avatar) = Avatar::parse(command.avatar)? {
            update = update.with_avatar(avatar);
        }

        let current = self.load_cook(caller).await?;
        let update = update.without_unchanged(&current);
        if update.is_empty() {
            return Ok(current.into());
        }

        let cook = self.storage.update(update).await?;
        tracing::info!(cook_id = %cook.id, "profile updated");
        Ok(cook.into())
    }
}
