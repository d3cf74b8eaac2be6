use super::IdentityResolver;
use crate::{
    application::{
        dto::CookProfileDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        cook::{Avatar, CookName, Email, NewCook, SecretHash},
        errors::DomainError,
    },
};

pub struct RegisterCookCommand {
    pub name: String,
    pub email: String,
    pub secret: String,
    pub avatar: Option<String>,
}

impl IdentityResolver {
    /// Create a profile from local credentials. Rejected with `Conflict` when
    /// the email or the name is already taken by any profile.
    pub async fn register(&self, command: RegisterCookCommand) -> ApplicationResult<CookProfileDto> {
        self.deadline.run("register", self.register_cook(command)).await
    }

    async fn register_cook(&self, command: RegisterCookCommand) -> ApplicationResult<CookProfileDto> {
        let name = CookName::new(command.name)?;
        let email = Email::new(command.email)?;
        let avatar = Avatar::parse(command.avatar)?;
        if command.secret.is_empty() {
            return Err(ApplicationError::validation("secret is required"));
        }

        let secret = self.hash_secret(&command.secret).await?;
        let new_cook = NewCook::new(name, email, secret, avatar, self.clock.now());

        let cook = self.storage.insert(new_cook).await.map_err(|err| {
            if let DomainError::Conflict(reason) = &err {
                tracing::info!(%reason, "registration rejected");
            }
            ApplicationError::from(err)
        })?;

        tracing::info!(cook_id = %cook.id, "cook registered");
        Ok(cook.into())
    }

    async fn hash_secret(&self, secret: &str) -> ApplicationResult<SecretHash> {
        let hashed = self.hasher.hash(secret).await?;
        SecretHash::new(hashed)
            .map_err(|_| ApplicationError::infrastructure("credential hasher produced an empty hash"))
    }
}
