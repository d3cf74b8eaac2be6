// src/presentation/http/controllers/cooks.rs
use crate::application::{
    dto::{CookProfileDto, ExternalSignInDto},
    identity::{ExternalSignInCommand, RegisterCookCommand, UpdateProfileCommand},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{CallerIdentity, JsonBody};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub secret: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Partial profile change. Missing or blank fields keep their current value.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Identity already verified by the external provider.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExternalSignInRequest {
    pub external_subject_id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Profile created.", body = CookProfileDto),
        (status = 400, description = "Invalid input.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Name or email already taken.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Cooks"
)]
pub async fn register(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<RegisterRequest>,
) -> HttpResult<Json<CookProfileDto>> {
    let command = RegisterCookCommand {
        name: payload.name,
        email: payload.email,
        secret: payload.secret,
        avatar: payload.avatar,
    };

    state
        .services
        .identity
        .register(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/profile",
    responses(
        (status = 200, description = "Profile of the caller.", body = CookProfileDto),
        (status = 400, description = "Malformed caller id.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Caller id missing.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Cook not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("cookId" = [])),
    tag = "Cooks"
)]
pub async fn view_profile(
    Extension(state): Extension<HttpState>,
    CallerIdentity(caller): CallerIdentity,
) -> HttpResult<Json<CookProfileDto>> {
    state
        .services
        .identity
        .view_profile(caller)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/profile",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Updated profile.", body = CookProfileDto),
        (status = 400, description = "Invalid input.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Caller id missing.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Cook not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Name or email already taken.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("cookId" = [])),
    tag = "Cooks"
)]
pub async fn update_profile(
    Extension(state): Extension<HttpState>,
    CallerIdentity(caller): CallerIdentity,
    JsonBody(payload): JsonBody<UpdateProfileRequest>,
) -> HttpResult<Json<CookProfileDto>> {
    let command = UpdateProfileCommand {
        name: payload.name,
        email: payload.email,
        avatar: payload.avatar,
    };

    state
        .services
        .identity
        .update_profile(caller, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/oauth/google",
    request_body = ExternalSignInRequest,
    responses(
        (status = 200, description = "Profile resolved or created.", body = ExternalSignInDto),
        (status = 400, description = "Invalid input.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Cooks"
)]
pub async fn external_sign_in(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<ExternalSignInRequest>,
) -> HttpResult<Json<ExternalSignInDto>> {
    let command = ExternalSignInCommand {
        external_subject_id: payload.external_subject_id,
        name: payload.name,
        email: payload.email,
        avatar: payload.avatar,
    };

    state
        .services
        .identity
        .resolve_external(command)
        .await
        .into_http()
        .map(Json)
}
