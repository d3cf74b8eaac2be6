use std::sync::Arc;

use crate::application::{
    deadline::Deadline,
    ports::{security::CredentialHasher, time::Clock},
};
use crate::domain::storage::CookStorage;

pub struct IdentityResolver {
    pub(super) storage: Arc<dyn CookStorage>,
    pub(super) hasher: Arc<dyn CredentialHasher>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) deadline: Deadline,
}

impl IdentityResolver {
    pub fn new(
        storage: Arc<dyn CookStorage>,
        hasher: Arc<dyn CredentialHasher>,
        clock: Arc<dyn Clock>,
        deadline: Deadline,
    ) -> Self {
        Self {
            storage,
            hasher,
            clock,
            deadline,
        }
    }
}
