use axum::http::{Method, StatusCode};
use serde_json::json;
use tower::util::ServiceExt as _;

mod support;

use support::{json_request, read_json};

#[tokio::test]
async fn e2e_register_view_and_favorites_flow() {
    let app = support::make_test_router();

    let resp = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/register",
            None,
            Some(json!({ "name": "chef1", "email": "a@x.com", "secret": "pw" })),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let profile = read_json(resp).await;
    let cook_id = profile["id"].as_str().unwrap().to_string();
    assert!(profile.get("secret").is_none());

    let resp = app
        .clone()
        .oneshot(json_request(Method::GET, "/profile", Some(&cook_id), None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let viewed = read_json(resp).await;
    assert_eq!(viewed["name"], "chef1");
    assert_eq!(viewed["email"], "a@x.com");
    assert!(viewed.get("secret").is_none());

    let resp = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/favorite-menus",
            Some(&cook_id),
            Some(json!({ "menuId": "menu-1" })),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let list = read_json(resp).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["menuId"], "menu-1");
    assert_eq!(list[0]["menu"]["name"], "Pad Thai");

    let resp = app
        .clone()
        .oneshot(json_request(Method::GET, "/favorite-menus", Some(&cook_id), None))
        .await
        .unwrap();
    assert_eq!(read_json(resp).await[0]["menuId"], "menu-1");

    let resp = app
        .clone()
        .oneshot(json_request(
            Method::DELETE,
            "/favorite-menus/menu-1",
            Some(&cook_id),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await, json!([]));
}

#[tokio::test]
async fn e2e_update_profile_ignores_blank_fields() {
    let app = support::make_test_router();

    let resp = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/register",
            None,
            Some(json!({ "name": "chef1", "email": "a@x.com", "secret": "pw" })),
        ))
        .await
        .unwrap();
    let cook_id = read_json(resp).await["id"].as_str().unwrap().to_string();

    let resp = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            "/profile",
            Some(&cook_id),
            Some(json!({ "name": "", "email": "b@x.com" })),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated = read_json(resp).await;
    assert_eq!(updated["name"], "chef1");
    assert_eq!(updated["email"], "b@x.com");
}

#[tokio::test]
async fn e2e_google_sign_in_is_idempotent() {
    let app = support::make_test_router();
    let body = json!({
        "externalSubjectId": "google-123",
        "name": "chef1",
        "email": "a@x.com",
        "avatar": "https://img.test/a.png"
    });

    let resp = app
        .clone()
        .oneshot(json_request(Method::POST, "/oauth/google", None, Some(body.clone())))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let first = read_json(resp).await;
    assert_eq!(first["created"], true);

    let resp = app
        .clone()
        .oneshot(json_request(Method::POST, "/oauth/google", None, Some(body)))
        .await
        .unwrap();
    let second = read_json(resp).await;
    assert_eq!(second["created"], false);
    assert_eq!(second["profileId"], first["profileId"]);

    let cook_id = first["profileId"].as_str().unwrap().to_string();
    let resp = app
        .oneshot(json_request(Method::GET, "/profile", Some(&cook_id), None))
        .await
        .unwrap();
    assert_eq!(read_json(resp).await["avatar"], "https://img.test/a.png");
}

#[tokio::test]
async fn e2e_health_reports_backend() {
    let app = support::make_test_router();
    let resp = app
        .oneshot(json_request(Method::GET, "/health", None, None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["backend"], "memory");
}

#[tokio::test]
async fn e2e_openapi_document_is_served() {
    let app = support::make_test_router();
    let resp = app
        .oneshot(json_request(Method::GET, "/openapi.json", None, None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let doc = read_json(resp).await;
    assert!(doc["paths"].get("/favorite-menus").is_some());
    assert!(doc["components"]["securitySchemes"].get("cookId").is_some());
}
