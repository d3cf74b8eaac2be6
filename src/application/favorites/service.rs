use std::sync::Arc;

use crate::application::{
    deadline::Deadline,
    error::{ApplicationError, ApplicationResult},
    ports::time::Clock,
};
use crate::domain::{cook::CookId, storage::CookStorage};

pub struct FavoritesLedger {
    pub(super) storage: Arc<dyn CookStorage>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) deadline: Deadline,
}

impl FavoritesLedger {
    pub fn new(storage: Arc<dyn CookStorage>, clock: Arc<dyn Clock>, deadline: Deadline) -> Self {
        Self {
            storage,
            clock,
            deadline,
        }
    }

    pub(super) async fn ensure_cook_exists(&self, caller: CookId) -> ApplicationResult<()> {
        match self.storage.find_by_id(caller).await? {
            Some(_) => Ok(()),
            None => Err(ApplicationError::not_found("cook not found")),
        }
    }
}
