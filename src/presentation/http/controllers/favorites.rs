// src/presentation/http/controllers/favorites.rs
use crate::application::dto::FavoriteMenuDto;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{CallerIdentity, JsonBody, PathParam};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddFavoriteRequest {
    pub menu_id: String,
}

#[utoipa::path(
    get,
    path = "/favorite-menus",
    responses(
        (status = 200, description = "Favorite menus of the caller.", body = [FavoriteMenuDto]),
        (status = 401, description = "Caller id missing.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Cook not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("cookId" = [])),
    tag = "Favorites"
)]
pub async fn list_favorites(
    Extension(state): Extension<HttpState>,
    CallerIdentity(caller): CallerIdentity,
) -> HttpResult<Json<Vec<FavoriteMenuDto>>> {
    state
        .services
        .favorites
        .list_favorites(caller)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/favorite-menus",
    request_body = AddFavoriteRequest,
    responses(
        (status = 200, description = "Favorites after the addition.", body = [FavoriteMenuDto]),
        (status = 400, description = "Invalid menu id.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Caller id missing.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Cook or menu not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("cookId" = [])),
    tag = "Favorites"
)]
pub async fn add_favorite(
    Extension(state): Extension<HttpState>,
    CallerIdentity(caller): CallerIdentity,
    JsonBody(payload): JsonBody<AddFavoriteRequest>,
) -> HttpResult<Json<Vec<FavoriteMenuDto>>> {
    state
        .services
        .favorites
        .add_favorite(caller, &payload.menu_id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/favorite-menus/{menu_id}",
    params(("menu_id" = String, Path, description = "Menu identifier")),
    responses(
        (status = 200, description = "Favorites after the removal.", body = [FavoriteMenuDto]),
        (status = 401, description = "Caller id missing.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Cook not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("cookId" = [])),
    tag = "Favorites"
)]
pub async fn remove_favorite(
    Extension(state): Extension<HttpState>,
    CallerIdentity(caller): CallerIdentity,
    PathParam(menu_id): PathParam<String>,
) -> HttpResult<Json<Vec<FavoriteMenuDto>>> {
    state
        .services
        .favorites
        .remove_favorite(caller, &menu_id)
        .await
        .into_http()
        .map(Json)
}
