// src/presentation/rpc/service.rs
use super::{
    CALLER_METADATA,
    messages::{
        Empty, ExternalIdentityRequest, ExternalIdentityResponse, FavoriteMenuRequest,
        FavoriteMenusResponse, Profile, ProfileResponse,
    },
    status::{RpcCode, RpcStatus},
};
use crate::application::identity::{
    ExternalSignInCommand, RegisterCookCommand, UpdateProfileCommand,
};
use crate::domain::cook::CookId;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    body::Bytes,
    extract::Path,
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use serde::{Serialize, de::DeserializeOwned};

type RpcResult<T> = Result<T, RpcStatus>;

fn decode<T: DeserializeOwned + Default>(body: &Bytes) -> RpcResult<T> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body)
        .map_err(|err| RpcStatus::new(RpcCode::InvalidArgument, format!("malformed request: {err}")))
}

fn caller(headers: &HeaderMap) -> RpcResult<CookId> {
    let raw = headers
        .get(CALLER_METADATA)
        .ok_or_else(|| RpcStatus::new(RpcCode::Unauthenticated, "missing cookid metadata"))?
        .to_str()
        .map_err(|_| RpcStatus::new(RpcCode::InvalidArgument, "invalid cook ID format"))?;
    raw.trim()
        .parse()
        .map_err(|_| RpcStatus::new(RpcCode::InvalidArgument, "invalid cook ID format"))
}

fn reply<T: Serialize>(message: T) -> RpcResult<Response> {
    Ok(Json(message).into_response())
}

/// Single entry point for every method of `cook.CookService`.
pub async fn call(
    Extension(state): Extension<HttpState>,
    Path(method): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    match dispatch(&state, &method, &headers, &body).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

async fn dispatch(
    state: &HttpState,
    method: &str,
    headers: &HeaderMap,
    body: &Bytes,
) -> RpcResult<Response> {
    let identity = &state.services.identity;
    let favorites = &state.services.favorites;

    match method {
        "VerifyCookDetails" => {
            let request: Profile = decode(body)?;
            let profile = identity
                .register(RegisterCookCommand {
                    name: request.name,
                    email: request.email,
                    secret: request.secret,
                    avatar: request.avatar,
                })
                .await?;
            reply(ProfileResponse { profile })
        }
        "ViewProfile" => {
            let caller = caller(headers)?;
            let _: Empty = decode(body)?;
            let profile = identity.view_profile(caller).await?;
            reply(ProfileResponse { profile })
        }
        "UpdateProfile" => {
            let caller = caller(headers)?;
            let request: Profile = decode(body)?;
            let profile = identity
                .update_profile(
                    caller,
                    UpdateProfileCommand {
                        name: Some(request.name),
                        email: Some(request.email),
                        avatar: request.avatar,
                    },
                )
                .await?;
            reply(ProfileResponse { profile })
        }
        "GetFavoriteMenus" => {
            let caller = caller(headers)?;
            let _: Empty = decode(body)?;
            let favorite_menus = favorites.list_favorites(caller).await?;
            reply(FavoriteMenusResponse { favorite_menus })
        }
        "AddFavoriteMenu" => {
            let caller = caller(headers)?;
            let request: FavoriteMenuRequest = decode(body)?;
            let favorite_menus = favorites.add_favorite(caller, &request.menu_id).await?;
            reply(FavoriteMenusResponse { favorite_menus })
        }
        "RemoveFavoriteMenu" => {
            let caller = caller(headers)?;
            let request: FavoriteMenuRequest = decode(body)?;
            let favorite_menus = favorites.remove_favorite(caller, &request.menu_id).await?;
            reply(FavoriteMenusResponse { favorite_menus })
        }
        "ResolveExternalIdentity" => {
            let request: ExternalIdentityRequest = decode(body)?;
            let result = identity
                .resolve_external(ExternalSignInCommand {
                    external_subject_id: request.external_subject_id,
                    name: request.name,
                    email: request.email,
                    avatar: request.avatar,
                })
                .await?;
            reply(ExternalIdentityResponse { result })
        }
        other => Err(RpcStatus::new(
            RpcCode::Unimplemented,
            format!("unknown method cook.CookService/{other}"),
        )),
    }
}
