// src/presentation/http/openapi.rs
use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{ApiKey, ApiKeyValue, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};

use super::extractors::CALLER_HEADER;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
    /// Storage backend selected at startup.
    pub backend: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::cooks::register,
        crate::presentation::http::controllers::cooks::view_profile,
        crate::presentation::http::controllers::cooks::update_profile,
        crate::presentation::http::controllers::cooks::external_sign_in,
        crate::presentation::http::controllers::favorites::list_favorites,
        crate::presentation::http::controllers::favorites::add_favorite,
        crate::presentation::http::controllers::favorites::remove_favorite,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::cooks::RegisterRequest,
            crate::presentation::http::controllers::cooks::UpdateProfileRequest,
            crate::presentation::http::controllers::cooks::ExternalSignInRequest,
            crate::presentation::http::controllers::favorites::AddFavoriteRequest,
            crate::application::dto::CookProfileDto,
            crate::application::dto::ExternalSignInDto,
            crate::application::dto::FavoriteMenuDto,
            crate::application::dto::MenuDto
        )
    ),
    tags(
        (name = "Cooks", description = "Registration, external sign-in and profiles"),
        (name = "Favorites", description = "Favorite menus of the caller"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Cook Service API",
        description = "Cook profiles and favorite menus",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        components.add_security_scheme(
            "cookId",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(CALLER_HEADER))),
        );
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    Router::new().route("/openapi.json", get(serve_openapi))
}

pub fn write_openapi_snapshot() -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "spec/openapi.json".to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}
