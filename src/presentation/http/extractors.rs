// src/presentation/http/extractors.rs
use crate::domain::cook::CookId;
use axum::{
    Json,
    extract::{
        FromRequest, FromRequestParts, Path, Request,
        rejection::{JsonRejection, PathRejection},
    },
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use super::error::HttpError;

pub const CALLER_HEADER: &str = "x-cook-id";

/// Profile id of the caller, already authenticated upstream and forwarded in
/// the `x-cook-id` header.
#[derive(Debug, Clone, Copy)]
pub struct CallerIdentity(pub CookId);

impl<S> FromRequestParts<S> for CallerIdentity
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(CALLER_HEADER)
            .ok_or_else(|| HttpError::unauthorized("missing x-cook-id header"))?
            .to_str()
            .map_err(|_| HttpError::bad_request("invalid cook ID format"))?;

        raw.trim()
            .parse::<CookId>()
            .map(Self)
            .map_err(|_| HttpError::bad_request("invalid cook ID format"))
    }
}

/// `Json` whose rejections use the service's error body.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(json_rejection(rejection)),
        }
    }
}

fn json_rejection(rejection: JsonRejection) -> HttpError {
    HttpError::bad_request(rejection.body_text())
}

/// `Path` whose rejections use the service's error body.
#[derive(Debug)]
pub struct PathParam<T>(pub T);

impl<S, T> FromRequestParts<S> for PathParam<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => Err(path_rejection(rejection)),
        }
    }
}

fn path_rejection(rejection: PathRejection) -> HttpError {
    HttpError::from_rejection(rejection.status(), rejection.body_text())
}
