// src/domain/cook/entity.rs
use crate::domain::cook::value_objects::{
    Avatar, CookId, CookName, Email, ExternalSubject, SecretHash,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Cook {
    pub id: CookId,
    pub name: CookName,
    pub email: Email,
    pub secret: SecretHash,
    pub external_subject: Option<ExternalSubject>,
    pub avatar: Option<Avatar>,
    pub created_at: DateTime<Utc>,
}

impl Cook {
    /// Apply the present fields of `update`; absent fields are left as they are.
    pub fn apply(&mut self, update: &CookUpdate) {
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(email) = &update.email {
            self.email = email.clone();
        }
        if let Some(avatar) = &update.avatar {
            self.avatar = Some(avatar.clone());
        }
    }

    pub fn link_external(&mut self, subject: ExternalSubject) {
        self.external_subject = Some(subject);
    }
}

#[derive(Debug, Clone)]
pub struct NewCook {
    pub id: CookId,
    pub name: CookName,
    pub email: Email,
    pub secret: SecretHash,
    pub external_subject: Option<ExternalSubject>,
    pub avatar: Option<Avatar>,
    pub created_at: DateTime<Utc>,
}

impl NewCook {
    pub fn new(
        name: CookName,
        email: Email,
        secret: SecretHash,
        avatar: Option<Avatar>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: CookId::generate(),
            name,
            email,
            secret,
            external_subject: None,
            avatar,
            created_at,
        }
    }

    pub fn with_external_subject(mut self, subject: ExternalSubject) -> Self {
        self.external_subject = Some(subject);
        self
    }

    pub fn with_name(mut self, name: CookName) -> Self {
        self.name = name;
        self
    }

    pub fn into_cook(self) -> Cook {
        Cook {
            id: self.id,
            name: self.name,
            email: self.email,
            secret: self.secret,
            external_subject: self.external_subject,
            avatar: self.avatar,
            created_at: self.created_at,
        }
    }
}

/// Partial profile change. `None` means "leave untouched".
#[derive(Debug, Clone)]
pub struct CookUpdate {
    pub id: CookId,
    pub name: Option<CookName>,
    pub email: Option<Email>,
    pub avatar: Option<Avatar>,
}

impl CookUpdate {
    pub fn new(id: CookId) -> Self {
        Self {
            id,
            name: None,
            email: None,
            avatar: None,
        }
    }

    pub fn with_name(mut self, name: CookName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_email(mut self, email: Email) -> Self {
        self.email = Some(email);
        self
    }

    pub fn with_avatar(mut self, avatar: Avatar) -> Self {
        self.avatar = Some(avatar);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.avatar.is_none()
    }

    /// Drop fields that already hold the requested value.
    pub fn without_unchanged(mut self, current: &Cook) -> Self {
        if self.name.as_ref() == Some(&current.name) {
            self.name = None;
        }
        if self.email.as_ref() == Some(&current.email) {
            self.email = None;
        }
        if self.avatar.is_some() && self.avatar == current.avatar {
            self.avatar = None;
        }
        self
    }
}
