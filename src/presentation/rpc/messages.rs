// src/presentation/rpc/messages.rs
use crate::application::dto::{CookProfileDto, ExternalSignInDto, FavoriteMenuDto};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct Empty {}

/// Profile record as sent by callers. `id` is server-assigned and ignored on
/// input.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub secret: String,
    pub avatar: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub profile: CookProfileDto,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FavoriteMenuRequest {
    pub menu_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteMenusResponse {
    pub favorite_menus: Vec<FavoriteMenuDto>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExternalIdentityRequest {
    pub external_subject_id: String,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExternalIdentityResponse {
    #[serde(flatten)]
    pub result: ExternalSignInDto,
}
