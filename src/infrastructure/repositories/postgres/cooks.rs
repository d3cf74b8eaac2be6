// src/infrastructure/repositories/postgres/cooks.rs
use super::PostgresCookStore;
use crate::domain::cook::{
    Avatar, Cook, CookId, CookName, CookRepository, CookUpdate, Email, ExternalSubject, NewCook,
    SecretHash,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::infrastructure::repositories::map_sqlx;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, Postgres, QueryBuilder, Transaction};
use uuid::Uuid;

const COOK_COLUMNS: &str = "id, name, email, secret, external_subject, avatar, created_at";

#[derive(Debug, FromRow)]
struct CookRow {
    id: Uuid,
    name: String,
    email: String,
    secret: String,
    external_subject: Option<String>,
    avatar: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<CookRow> for Cook {
    type Error = DomainError;

    fn try_from(row: CookRow) -> Result<Self, Self::Error> {
        Ok(Cook {
            id: CookId::from_uuid(row.id),
            name: CookName::new(row.name)?,
            email: Email::new(row.email)?,
            secret: SecretHash::new(row.secret)?,
            external_subject: row.external_subject.map(ExternalSubject::new).transpose()?,
            avatar: Avatar::parse(row.avatar)?,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct ClashRow {
    name: String,
    email: String,
}

/// Which unique attribute of `clash` matches the candidate values.
fn clash_error(clash: &ClashRow, name: Option<&CookName>, email: Option<&Email>) -> DomainError {
    if email.is_some_and(|email| clash.email == email.as_str()) {
        DomainError::conflict("email already registered")
    } else if name.is_some_and(|name| clash.name == name.as_str()) {
        DomainError::conflict("name already taken")
    } else {
        DomainError::conflict("profile already exists")
    }
}

impl PostgresCookStore {
    async fn find_clash(
        tx: &mut Transaction<'_, Postgres>,
        exclude: Option<CookId>,
        name: Option<&CookName>,
        email: Option<&Email>,
    ) -> DomainResult<Option<ClashRow>> {
        if name.is_none() && email.is_none() {
            return Ok(None);
        }

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT name, email FROM cooks WHERE (");
        let mut separated = builder.separated(" OR ");
        if let Some(name) = name {
            separated.push("name = ");
            separated.push_bind_unseparated(name.as_str().to_owned());
        }
        if let Some(email) = email {
            separated.push("email = ");
            separated.push_bind_unseparated(email.as_str().to_owned());
        }
        builder.push(")");
        if let Some(id) = exclude {
            builder.push(" AND id <> ");
            builder.push_bind(id.as_uuid());
        }
        builder.push(" LIMIT 1 FOR UPDATE");

        builder
            .build_query_as::<ClashRow>()
            .fetch_optional(&mut **tx)
            .await
            .map_err(map_sqlx)
    }

    fn build_update_query(update: &CookUpdate) -> QueryBuilder<'static, Postgres> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE cooks SET ");
        let mut assignments = builder.separated(", ");

        if let Some(name) = &update.name {
            assignments.push("name = ");
            assignments.push_bind_unseparated(name.as_str().to_owned());
        }

        if let Some(email) = &update.email {
            assignments.push("email = ");
            assignments.push_bind_unseparated(email.as_str().to_owned());
        }

        if let Some(avatar) = &update.avatar {
            assignments.push("avatar = ");
            assignments.push_bind_unseparated(avatar.as_str().to_owned());
        }

        builder.push(" WHERE id = ");
        builder.push_bind(update.id.as_uuid());
        builder.push(" RETURNING ");
        builder.push(COOK_COLUMNS);

        builder
    }

    async fn find_one(&self, column: &str, value: String) -> DomainResult<Option<Cook>> {
        let sql = format!("SELECT {COOK_COLUMNS} FROM cooks WHERE {column} = $1");
        let row = sqlx::query_as::<_, CookRow>(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Cook::try_from).transpose()
    }
}

#[async_trait]
impl CookRepository for PostgresCookStore {
    async fn insert(&self, new_cook: NewCook) -> DomainResult<Cook> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        if let Some(clash) =
            Self::find_clash(&mut tx, None, Some(&new_cook.name), Some(&new_cook.email)).await?
        {
            return Err(clash_error(&clash, Some(&new_cook.name), Some(&new_cook.email)));
        }

        let NewCook {
            id,
            name,
            email,
            secret,
            external_subject,
            avatar,
            created_at,
        } = new_cook;

        // A concurrent insert that slips past the lookup still trips the
        // unique constraints, which map to Conflict.
        let sql = format!(
            "INSERT INTO cooks ({COOK_COLUMNS}) VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING {COOK_COLUMNS}"
        );
        let row = sqlx::query_as::<_, CookRow>(&sql)
            .bind(id.as_uuid())
            .bind(name.as_str())
            .bind(email.as_str())
            .bind(secret.as_str())
            .bind(external_subject.as_ref().map(ExternalSubject::as_str))
            .bind(avatar.as_ref().map(Avatar::as_str))
            .bind(created_at)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;
        Cook::try_from(row)
    }

    async fn find_by_id(&self, id: CookId) -> DomainResult<Option<Cook>> {
        let sql = format!("SELECT {COOK_COLUMNS} FROM cooks WHERE id = $1");
        let row = sqlx::query_as::<_, CookRow>(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Cook::try_from).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<Cook>> {
        self.find_one("email", email.as_str().to_owned()).await
    }

    async fn find_by_external_subject(
        &self,
        subject: &ExternalSubject,
    ) -> DomainResult<Option<Cook>> {
        self.find_one("external_subject", subject.as_str().to_owned())
            .await
    }

    async fn update(&self, update: CookUpdate) -> DomainResult<Cook> {
        if update.is_empty() {
            return Err(DomainError::validation("no fields provided for update"));
        }

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        if let Some(clash) = Self::find_clash(
            &mut tx,
            Some(update.id),
            update.name.as_ref(),
            update.email.as_ref(),
        )
        .await?
        {
            return Err(clash_error(&clash, update.name.as_ref(), update.email.as_ref()));
        }

        let mut builder = Self::build_update_query(&update);
        let row = builder
            .build_query_as::<CookRow>()
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::not_found("cook not found"))?;

        tx.commit().await.map_err(map_sqlx)?;
        Cook::try_from(row)
    }

    async fn link_external_subject(
        &self,
        id: CookId,
        subject: &ExternalSubject,
    ) -> DomainResult<Cook> {
        let sql = format!(
            "UPDATE cooks SET external_subject = $2 WHERE id = $1 RETURNING {COOK_COLUMNS}"
        );
        let row = sqlx::query_as::<_, CookRow>(&sql)
            .bind(id.as_uuid())
            .bind(subject.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::not_found("cook not found"))?;

        Cook::try_from(row)
    }
}
