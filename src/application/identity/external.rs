use super::IdentityResolver;
use crate::{
    application::{
        dto::ExternalSignInDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        cook::{Avatar, Cook, CookName, Email, ExternalSubject, NewCook, SecretHash},
        errors::DomainError,
    },
};

/// Identity asserted by the external provider. The provider has already
/// verified it; nothing here re-checks the token.
pub struct ExternalSignInCommand {
    pub external_subject_id: String,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
}

impl IdentityResolver {
    /// Upsert a profile for an external identity.
    ///
    /// The subject's marker is looked up first. Failing that, a profile with
    /// the same email is (re)linked to the marker, which also covers provider
    /// subject rotation. Only when neither exists is a new profile created.
    /// Calling this repeatedly with the same subject always yields the same
    /// profile, and it never reports `Conflict`.
    pub async fn resolve_external(
        &self,
        command: ExternalSignInCommand,
    ) -> ApplicationResult<ExternalSignInDto> {
        self.deadline
            .run("resolve_external", self.resolve_external_identity(command))
            .await
    }

    async fn resolve_external_identity(
        &self,
        command: ExternalSignInCommand,
    ) -> ApplicationResult<ExternalSignInDto> {
        let subject_id = command.external_subject_id.trim();
        if subject_id.is_empty() {
            return Err(ApplicationError::validation("external subject id is required"));
        }
        let marker = ExternalSubject::new(self.hasher.external_marker(subject_id)?)?;

        if let Some(cook) = self.storage.find_by_external_subject(&marker).await? {
            return Ok(signed_in(&cook, false));
        }

        let name = CookName::new(command.name)?;
        let email = Email::new(command.email)?;
        let avatar = Avatar::parse(command.avatar)?;

        if let Some(cook) = self.link_by_email(&email, &marker).await? {
            return Ok(signed_in(&cook, false));
        }

        let secret = SecretHash::new(marker.as_str())?;
        let new_cook = NewCook::new(name, email, secret, avatar, self.clock.now())
            .with_external_subject(marker);
        self.create_external(new_cook).await
    }

    async fn link_by_email(
        &self,
        email: &Email,
        marker: &ExternalSubject,
    ) -> ApplicationResult<Option<Cook>> {
        let Some(cook) = self.storage.find_by_email(email).await? else {
            return Ok(None);
        };
        if cook.external_subject.as_ref() == Some(marker) {
            return Ok(Some(cook));
        }

        match self.storage.link_external_subject(cook.id, marker).await {
            Ok(linked) => {
                tracing::info!(cook_id = %linked.id, "external identity linked by email");
                Ok(Some(linked))
            }
            // Another sign-in claimed the marker between our lookup and the link.
            Err(DomainError::Conflict(_)) => Ok(self.storage.find_by_external_subject(marker).await?),
            Err(err) => Err(err.into()),
        }
    }

    async fn create_external(&self, new_cook: NewCook) -> ApplicationResult<ExternalSignInDto> {
        let marker = new_cook
            .external_subject
            .clone()
            .ok_or_else(|| ApplicationError::infrastructure("external profile without a marker"))?;
        let requested = new_cook.name.clone();

        let mut candidate = new_cook;
        for attempt in 0..MAX_NAME_ATTEMPTS {
            match self.storage.insert(candidate.clone()).await {
                Ok(cook) => {
                    tracing::info!(cook_id = %cook.id, "cook created from external identity");
                    return Ok(signed_in(&cook, true));
                }
                Err(DomainError::Conflict(_)) => {}
                Err(err) => return Err(err.into()),
            }

            if let Some(cook) = self.storage.find_by_external_subject(&marker).await? {
                return Ok(signed_in(&cook, false));
            }
            if let Some(cook) = self.link_by_email(&candidate.email, &marker).await? {
                return Ok(signed_in(&cook, false));
            }

            // Only the display name collides, with an unrelated profile.
            let renamed = requested.with_suffix(&name_suffix(&marker, attempt))?;
            tracing::info!(
                requested = %requested,
                assigned = %renamed,
                "external sign-in name taken, disambiguating"
            );
            candidate = candidate.with_name(renamed);
        }

        Err(ApplicationError::infrastructure(format!(
            "no free name for '{requested}' after {MAX_NAME_ATTEMPTS} attempts"
        )))
    }
}

const MAX_NAME_ATTEMPTS: usize = 32;

/// Suffix for the `attempt`-th rename: the short marker, then a longer marker
/// prefix, then the short marker with a counter.
fn name_suffix(marker: &ExternalSubject, attempt: usize) -> String {
    match attempt {
        0 => marker.short().to_owned(),
        1 => marker.prefix(16).to_owned(),
        n => format!("{}{n}", marker.short()),
    }
}

fn signed_in(cook: &Cook, created: bool) -> ExternalSignInDto {
    ExternalSignInDto {
        profile_id: cook.id.as_uuid(),
        created,
    }
}
