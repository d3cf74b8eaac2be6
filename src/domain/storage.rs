// src/domain/storage.rs
use crate::domain::{cook::CookRepository, favorite::FavoriteRepository, menu::MenuCatalog};

/// Everything a storage backend must provide for the profile and favorites
/// core. A backend implements the three repository traits on a single type so
/// that one pooled handle serves profiles, favorite links and menu lookups.
pub trait CookStorage: CookRepository + FavoriteRepository + MenuCatalog {
    /// Short backend label used in logs.
    fn backend_name(&self) -> &'static str;
}
