use crate::domain::cook::{
    entity::{Cook, CookUpdate, NewCook},
    value_objects::{CookId, Email, ExternalSubject},
};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CookRepository: Send + Sync {
    /// Insert a profile unless another profile already has the same email or
    /// the same name, in which case `DomainError::Conflict` is returned. The
    /// check and the insert are a single atomic step.
    async fn insert(&self, new_cook: NewCook) -> DomainResult<Cook>;

    async fn find_by_id(&self, id: CookId) -> DomainResult<Option<Cook>>;

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<Cook>>;

    async fn find_by_external_subject(
        &self,
        subject: &ExternalSubject,
    ) -> DomainResult<Option<Cook>>;

    /// Apply the present fields of `update`. A changed name or email that is
    /// held by any other profile yields `DomainError::Conflict`; the check and
    /// the write are a single atomic step. Missing profile is `NotFound`.
    async fn update(&self, update: CookUpdate) -> DomainResult<Cook>;

    /// Point the profile's external link at `subject`. Fails with `Conflict`
    /// when the marker already belongs to a different profile.
    async fn link_external_subject(
        &self,
        id: CookId,
        subject: &ExternalSubject,
    ) -> DomainResult<Cook>;
}
