// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{cooks, favorites},
    openapi::{self, StatusResponse},
};
use crate::presentation::rpc;
use axum::{
    Extension, Router,
    http::{HeaderName, HeaderValue, Method, header},
    routing::{delete, get, post},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use super::extractors::CALLER_HEADER;

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(CALLER_HEADER),
            HeaderName::from_static(rpc::CALLER_METADATA),
        ])
        .max_age(Duration::from_secs(3600))
}

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    Router::new()
        .merge(openapi::docs_router())
        .merge(rpc::router())
        .route("/health", get(health))
        .route("/register", post(cooks::register))
        .route(
            "/profile",
            get(cooks::view_profile).put(cooks::update_profile),
        )
        .route("/oauth/google", post(cooks::external_sign_in))
        .route(
            "/favorite-menus",
            get(favorites::list_favorites).post(favorites::add_favorite),
        )
        .route(
            "/favorite-menus/{menu_id}",
            delete(favorites::remove_favorite),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health(Extension(state): Extension<HttpState>) -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
        backend: state.services.storage_backend().into(),
    })
}
