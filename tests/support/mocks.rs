// tests/support/mocks.rs
use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use cook_service::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::{security::CredentialHasher, time::Clock},
};
use cook_service::domain::{
    cook::{Cook, CookId, CookRepository, CookUpdate, Email, ExternalSubject, NewCook},
    errors::DomainResult,
    favorite::{FavoriteLink, FavoriteRepository, NewFavorite},
    menu::{Menu, MenuCatalog, MenuId},
    storage::CookStorage,
};
use cook_service::infrastructure::repositories::InMemoryCookStore;
use std::sync::{
    Arc,
    atomic::{AtomicI64, Ordering},
};

/// Reversible stand-in for argon2 so tests stay fast.
pub struct FakeHasher;

#[async_trait]
impl CredentialHasher for FakeHasher {
    async fn hash(&self, secret: &str) -> ApplicationResult<String> {
        Ok(format!("hashed:{secret}"))
    }

    async fn verify(&self, secret: &str, hashed: &str) -> ApplicationResult<bool> {
        Ok(hashed == format!("hashed:{secret}"))
    }

    fn external_marker(&self, subject_id: &str) -> ApplicationResult<String> {
        Ok(format!("marker-{subject_id}"))
    }
}

pub struct FailingHasher;

#[async_trait]
impl CredentialHasher for FailingHasher {
    async fn hash(&self, _secret: &str) -> ApplicationResult<String> {
        Err(ApplicationError::infrastructure("hasher unavailable"))
    }

    async fn verify(&self, _secret: &str, _hashed: &str) -> ApplicationResult<bool> {
        Err(ApplicationError::infrastructure("hasher unavailable"))
    }

    fn external_marker(&self, _subject_id: &str) -> ApplicationResult<String> {
        Err(ApplicationError::infrastructure("hasher unavailable"))
    }
}

/// Clock that advances one second per reading, so insertion order is visible
/// in timestamps.
pub struct TickingClock {
    start: DateTime<Utc>,
    ticks: AtomicI64,
}

impl Default for TickingClock {
    fn default() -> Self {
        Self {
            start: Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
            ticks: AtomicI64::new(0),
        }
    }
}

impl Clock for TickingClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.start + Duration::seconds(tick)
    }
}

/// Delegates to an in-memory store but stalls every profile lookup.
pub struct StallingStorage {
    pub inner: Arc<InMemoryCookStore>,
    pub stall: std::time::Duration,
}

impl CookStorage for StallingStorage {
    fn backend_name(&self) -> &'static str {
        "stalling"
    }
}

#[async_trait]
impl CookRepository for StallingStorage {
    async fn insert(&self, new_cook: NewCook) -> DomainResult<Cook> {
        self.inner.insert(new_cook).await
    }

    async fn find_by_id(&self, id: CookId) -> DomainResult<Option<Cook>> {
        tokio::time::sleep(self.stall).await;
        self.inner.find_by_id(id).await
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<Cook>> {
        self.inner.find_by_email(email).await
    }

    async fn find_by_external_subject(
        &self,
        subject: &ExternalSubject,
    ) -> DomainResult<Option<Cook>> {
        self.inner.find_by_external_subject(subject).await
    }

    async fn update(&self, update: CookUpdate) -> DomainResult<Cook> {
        self.inner.update(update).await
    }

    async fn link_external_subject(
        &self,
        id: CookId,
        subject: &ExternalSubject,
    ) -> DomainResult<Cook> {
        self.inner.link_external_subject(id, subject).await
    }
}

#[async_trait]
impl FavoriteRepository for StallingStorage {
    async fn list_favorites(&self, cook_id: CookId) -> DomainResult<Vec<FavoriteLink>> {
        self.inner.list_favorites(cook_id).await
    }

    async fn add_favorite(&self, favorite: NewFavorite) -> DomainResult<bool> {
        self.inner.add_favorite(favorite).await
    }

    async fn remove_favorite(&self, cook_id: CookId, menu_id: &MenuId) -> DomainResult<bool> {
        self.inner.remove_favorite(cook_id, menu_id).await
    }
}

#[async_trait]
impl MenuCatalog for StallingStorage {
    async fn find_menu(&self, id: &MenuId) -> DomainResult<Option<Menu>> {
        self.inner.find_menu(id).await
    }
}
