use super::{RedisCookStore, document::CookDocument, map_redis, script_conflict, scripts};
use crate::domain::cook::{Cook, CookId, CookRepository, CookUpdate, Email, ExternalSubject, NewCook};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use redis::AsyncCommands;

impl RedisCookStore {
    pub(super) async fn load_document(&self, id: CookId) -> DomainResult<Option<CookDocument>> {
        let mut conn = self.connection().await?;
        let raw: Option<String> = conn.get(self.cook_key(id)).await.map_err(map_redis)?;
        raw.as_deref().map(CookDocument::parse).transpose()
    }

    async fn find_by_index(&self, index_key: String) -> DomainResult<Option<Cook>> {
        let mut conn = self.connection().await?;
        let owner: Option<String> = conn.get(index_key).await.map_err(map_redis)?;
        let Some(owner) = owner else {
            return Ok(None);
        };
        let id: CookId = owner
            .parse()
            .map_err(|_| DomainError::persistence(format!("corrupt index entry '{owner}'")))?;

        self.load_document(id)
            .await?
            .map(|doc| doc.to_cook())
            .transpose()
    }

    /// Decode the `{status}` / `{'ok', document}` replies of the update scripts.
    fn document_reply(reply: Vec<String>) -> DomainResult<Cook> {
        let mut parts = reply.into_iter();
        match (parts.next().as_deref(), parts.next()) {
            (Some("ok"), Some(raw)) => CookDocument::parse(&raw)?.to_cook(),
            (Some("missing"), _) => Err(DomainError::not_found("cook not found")),
            (Some(status), _) => Err(script_conflict(status).unwrap_or_else(|| {
                DomainError::persistence(format!("unexpected script status '{status}'"))
            })),
            (None, _) => Err(DomainError::persistence("empty script reply")),
        }
    }
}

#[async_trait]
impl CookRepository for RedisCookStore {
    async fn insert(&self, new_cook: NewCook) -> DomainResult<Cook> {
        let doc_key = self.cook_key(new_cook.id);
        let email_key = self.email_key(&new_cook.email);
        let name_key = self.name_key(&new_cook.name);
        // The fourth key is only claimed when the flag argument says so.
        let (external_key, claim_external) = match &new_cook.external_subject {
            Some(subject) => (self.external_key(subject), "1"),
            None => (doc_key.clone(), "0"),
        };

        let doc = CookDocument::from(new_cook);
        let json = doc.to_json()?;

        let mut conn = self.connection().await?;
        let status: String = redis::cmd("EVAL")
            .arg(scripts::INSERT_COOK)
            .arg(4)
            .arg(&doc_key)
            .arg(&email_key)
            .arg(&name_key)
            .arg(&external_key)
            .arg(&json)
            .arg(doc.id.to_string())
            .arg(claim_external)
            .query_async(&mut conn)
            .await
            .map_err(map_redis)?;

        if status == "ok" {
            return doc.to_cook();
        }
        Err(script_conflict(&status).unwrap_or_else(|| {
            DomainError::persistence(format!("unexpected script status '{status}'"))
        }))
    }

    async fn find_by_id(&self, id: CookId) -> DomainResult<Option<Cook>> {
        self.load_document(id)
            .await?
            .map(|doc| doc.to_cook())
            .transpose()
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<Cook>> {
        self.find_by_index(self.email_key(email)).await
    }

    async fn find_by_external_subject(
        &self,
        subject: &ExternalSubject,
    ) -> DomainResult<Option<Cook>> {
        self.find_by_index(self.external_key(subject)).await
    }

    async fn update(&self, update: CookUpdate) -> DomainResult<Cook> {
        if update.is_empty() {
            return Err(DomainError::validation("no fields provided for update"));
        }

        let doc_key = self.cook_key(update.id);
        let email_key = update
            .email
            .as_ref()
            .map_or_else(|| doc_key.clone(), |email| self.email_key(email));
        let name_key = update
            .name
            .as_ref()
            .map_or_else(|| doc_key.clone(), |name| self.name_key(name));

        let mut conn = self.connection().await?;
        let reply: Vec<String> = redis::cmd("EVAL")
            .arg(scripts::UPDATE_COOK)
            .arg(3)
            .arg(&doc_key)
            .arg(&email_key)
            .arg(&name_key)
            .arg(update.id.to_string())
            .arg(update.name.as_ref().map_or("", |name| name.as_str()))
            .arg(update.email.as_ref().map_or("", |email| email.as_str()))
            .arg(update.avatar.as_ref().map_or("", |avatar| avatar.as_str()))
            .arg(&self.prefix)
            .query_async(&mut conn)
            .await
            .map_err(map_redis)?;

        Self::document_reply(reply)
    }

    async fn link_external_subject(
        &self,
        id: CookId,
        subject: &ExternalSubject,
    ) -> DomainResult<Cook> {
        let mut conn = self.connection().await?;
        let reply: Vec<String> = redis::cmd("EVAL")
            .arg(scripts::LINK_EXTERNAL)
            .arg(2)
            .arg(self.cook_key(id))
            .arg(self.external_key(subject))
            .arg(id.to_string())
            .arg(subject.as_str())
            .arg(&self.prefix)
            .query_async(&mut conn)
            .await
            .map_err(map_redis)?;

        Self::document_reply(reply)
    }
}
