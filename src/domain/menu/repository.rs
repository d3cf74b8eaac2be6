use crate::domain::errors::DomainResult;
use crate::domain::menu::entity::{Menu, MenuId};
use async_trait::async_trait;

/// Lookup side of the externally owned menu catalog.
#[async_trait]
pub trait MenuCatalog: Send + Sync {
    async fn find_menu(&self, id: &MenuId) -> DomainResult<Option<Menu>>;
}
