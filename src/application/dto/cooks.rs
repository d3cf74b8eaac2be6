use crate::domain::cook::Cook;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Public view of a profile. The stored secret never leaves the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CookProfileDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Cook> for CookProfileDto {
    fn from(cook: Cook) -> Self {
        Self {
            id: cook.id.as_uuid(),
            name: cook.name.into(),
            email: cook.email.into(),
            avatar: cook.avatar.map(String::from),
            created_at: cook.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExternalSignInDto {
    pub profile_id: Uuid,
    /// `true` when this sign-in created the profile.
    pub created: bool,
}
