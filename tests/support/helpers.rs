// tests/support/helpers.rs
use super::mocks::{FakeHasher, TickingClock};
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use cook_service::application::{
    deadline::Deadline,
    ports::{security::CredentialHasher, time::Clock},
    services::ApplicationServices,
};
use cook_service::domain::{
    menu::{Menu, MenuId},
    storage::CookStorage,
};
use cook_service::infrastructure::repositories::InMemoryCookStore;
use cook_service::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;

pub fn menu(id: &str, name: &str) -> Menu {
    Menu::new(MenuId::new(id).unwrap(), name)
        .with_description(format!("{name} from the test kitchen"))
        .with_ingredients(["rice", "salt"])
}

/// In-memory store whose catalog holds `menu-1` to `menu-3`.
pub fn seeded_store() -> Arc<InMemoryCookStore> {
    Arc::new(InMemoryCookStore::with_menus([
        menu("menu-1", "Pad Thai"),
        menu("menu-2", "Green Curry"),
        menu("menu-3", "Mango Sticky Rice"),
    ]))
}

pub fn build_services_with(
    storage: Arc<dyn CookStorage>,
    hasher: Arc<dyn CredentialHasher>,
    deadline: Deadline,
) -> Arc<ApplicationServices> {
    let clock: Arc<dyn Clock> = Arc::new(TickingClock::default());
    Arc::new(ApplicationServices::new(storage, hasher, clock, deadline))
}

pub fn build_services(storage: Arc<dyn CookStorage>) -> Arc<ApplicationServices> {
    build_services_with(storage, Arc::new(FakeHasher), Deadline::default())
}

pub fn make_router_for(services: Arc<ApplicationServices>) -> axum::Router {
    build_router(
        HttpState::new(services),
        &["http://localhost:3000".to_string()],
    )
}

pub fn make_test_router() -> axum::Router {
    make_router_for(build_services(seeded_store()))
}

/// JSON request with an optional `x-cook-id` caller header.
pub fn json_request(
    method: Method,
    uri: &str,
    caller: Option<&str>,
    body: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(caller) = caller {
        builder = builder.header("x-cook-id", caller);
    }
    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected valid json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
