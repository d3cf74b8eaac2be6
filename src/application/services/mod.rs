// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        deadline::Deadline,
        favorites::FavoritesLedger,
        identity::IdentityResolver,
        ports::{security::CredentialHasher, time::Clock},
    },
    domain::storage::CookStorage,
};

pub struct ApplicationServices {
    pub identity: Arc<IdentityResolver>,
    pub favorites: Arc<FavoritesLedger>,
    storage: Arc<dyn CookStorage>,
}

impl ApplicationServices {
    pub fn new(
        storage: Arc<dyn CookStorage>,
        hasher: Arc<dyn CredentialHasher>,
        clock: Arc<dyn Clock>,
        deadline: Deadline,
    ) -> Self {
        let identity = Arc::new(IdentityResolver::new(
            Arc::clone(&storage),
            Arc::clone(&hasher),
            Arc::clone(&clock),
            deadline,
        ));

        let favorites = Arc::new(FavoritesLedger::new(
            Arc::clone(&storage),
            Arc::clone(&clock),
            deadline,
        ));

        Self {
            identity,
            favorites,
            storage,
        }
    }

    pub fn storage_backend(&self) -> &'static str {
        self.storage.backend_name()
    }
}
