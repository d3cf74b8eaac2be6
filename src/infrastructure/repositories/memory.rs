// src/infrastructure/repositories/memory.rs
//! Process-local storage. Like the document backend, favorites are menu
//! snapshots taken at add time, kept as one list per cook id. Every operation
//! holds one lock for its whole check-then-write, so uniqueness holds under
//! concurrent calls.
use crate::domain::cook::{Cook, CookId, CookRepository, CookUpdate, Email, ExternalSubject, NewCook};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::favorite::{FavoriteLink, FavoriteRepository, NewFavorite};
use crate::domain::menu::{Menu, MenuCatalog, MenuId};
use crate::domain::storage::CookStorage;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Default)]
struct MemoryState {
    cooks: HashMap<CookId, Cook>,
    favorites: HashMap<CookId, Vec<FavoriteLink>>,
    menus: HashMap<MenuId, Menu>,
}

impl MemoryState {
    fn clash(&self, exclude: Option<CookId>, update: &CookUpdate) -> Option<DomainError> {
        let others = self
            .cooks
            .values()
            .filter(|cook| Some(cook.id) != exclude);
        for cook in others {
            if update.email.as_ref() == Some(&cook.email) {
                return Some(DomainError::conflict("email already registered"));
            }
            if update.name.as_ref() == Some(&cook.name) {
                return Some(DomainError::conflict("name already taken"));
            }
        }
        None
    }
}

#[derive(Default)]
pub struct InMemoryCookStore {
    state: Mutex<MemoryState>,
}

impl InMemoryCookStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with catalog menus.
    pub fn with_menus(menus: impl IntoIterator<Item = Menu>) -> Self {
        let store = Self::default();
        if let Ok(mut state) = store.state.lock() {
            state
                .menus
                .extend(menus.into_iter().map(|menu| (menu.id.clone(), menu)));
        }
        store
    }

    /// Replace a catalog menu. Already favorited snapshots are not touched.
    pub fn put_menu(&self, menu: Menu) -> DomainResult<()> {
        let mut state = self.lock()?;
        state.menus.insert(menu.id.clone(), menu);
        Ok(())
    }

    pub fn cook_count(&self) -> DomainResult<usize> {
        Ok(self.lock()?.cooks.len())
    }

    fn lock(&self) -> DomainResult<MutexGuard<'_, MemoryState>> {
        self.state
            .lock()
            .map_err(|_| DomainError::persistence("in-memory store lock poisoned"))
    }
}

impl CookStorage for InMemoryCookStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[async_trait]
impl CookRepository for InMemoryCookStore {
    async fn insert(&self, new_cook: NewCook) -> DomainResult<Cook> {
        let mut state = self.lock()?;

        let wanted = CookUpdate::new(new_cook.id)
            .with_name(new_cook.name.clone())
            .with_email(new_cook.email.clone());
        if let Some(conflict) = state.clash(None, &wanted) {
            return Err(conflict);
        }
        if let Some(subject) = &new_cook.external_subject {
            if state
                .cooks
                .values()
                .any(|cook| cook.external_subject.as_ref() == Some(subject))
            {
                return Err(DomainError::conflict(
                    "external identity already linked to another cook",
                ));
            }
        }

        let cook = new_cook.into_cook();
        state.cooks.insert(cook.id, cook.clone());
        Ok(cook)
    }

    async fn find_by_id(&self, id: CookId) -> DomainResult<Option<Cook>> {
        Ok(self.lock()?.cooks.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<Cook>> {
        let state = self.lock()?;
        Ok(state.cooks.values().find(|cook| &cook.email == email).cloned())
    }

    async fn find_by_external_subject(
        &self,
        subject: &ExternalSubject,
    ) -> DomainResult<Option<Cook>> {
        let state = self.lock()?;
        Ok(state
            .cooks
            .values()
            .find(|cook| cook.external_subject.as_ref() == Some(subject))
            .cloned())
    }

    async fn update(&self, update: CookUpdate) -> DomainResult<Cook> {
        if update.is_empty() {
            return Err(DomainError::validation("no fields provided for update"));
        }

        let mut state = self.lock()?;
        if let Some(conflict) = state.clash(Some(update.id), &update) {
            return Err(conflict);
        }

        let cook = state
            .cooks
            .get_mut(&update.id)
            .ok_or_else(|| DomainError::not_found("cook not found"))?;
        cook.apply(&update);
        Ok(cook.clone())
    }

    async fn link_external_subject(
        &self,
        id: CookId,
        subject: &ExternalSubject,
    ) -> DomainResult<Cook> {
        let mut state = self.lock()?;
        if state
            .cooks
            .values()
            .any(|cook| cook.id != id && cook.external_subject.as_ref() == Some(subject))
        {
            return Err(DomainError::conflict(
                "external identity already linked to another cook",
            ));
        }

        let cook = state
            .cooks
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found("cook not found"))?;
        cook.link_external(subject.clone());
        Ok(cook.clone())
    }
}

#[async_trait]
impl FavoriteRepository for InMemoryCookStore {
    async fn list_favorites(&self, cook_id: CookId) -> DomainResult<Vec<FavoriteLink>> {
        let state = self.lock()?;
        Ok(state.favorites.get(&cook_id).cloned().unwrap_or_default())
    }

    async fn add_favorite(&self, favorite: NewFavorite) -> DomainResult<bool> {
        let mut state = self.lock()?;
        if !state.cooks.contains_key(&favorite.cook_id) {
            return Err(DomainError::not_found("cook not found"));
        }

        let links = state.favorites.entry(favorite.cook_id).or_default();
        if links.iter().any(|link| link.menu_id == favorite.menu.id) {
            return Ok(false);
        }
        links.push(favorite.into_link());
        Ok(true)
    }

    async fn remove_favorite(&self, cook_id: CookId, menu_id: &MenuId) -> DomainResult<bool> {
        let mut state = self.lock()?;
        if !state.cooks.contains_key(&cook_id) {
            return Err(DomainError::not_found("cook not found"));
        }

        let Some(links) = state.favorites.get_mut(&cook_id) else {
            return Ok(false);
        };
        let before = links.len();
        links.retain(|link| &link.menu_id != menu_id);
        Ok(links.len() != before)
    }
}

#[async_trait]
impl MenuCatalog for InMemoryCookStore {
    async fn find_menu(&self, id: &MenuId) -> DomainResult<Option<Menu>> {
        Ok(self.lock()?.menus.get(id).cloned())
    }
}
