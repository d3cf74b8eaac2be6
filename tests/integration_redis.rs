use cook_service::application::{
    ErrorKind,
    identity::{ExternalSignInCommand, RegisterCookCommand},
};
use cook_service::domain::{cook::CookId, menu::MenuId};
use cook_service::infrastructure::repositories::RedisCookStore;
use redis::AsyncCommands;
use std::sync::Arc;

mod support;

#[tokio::test]
async fn redis_store_end_to_end() {
    if std::env::var("RUN_REDIS_INTEGRATION").unwrap_or_default() != "1" {
        eprintln!("skipping integration test: set RUN_REDIS_INTEGRATION=1 and REDIS_URL to run");
        return;
    }

    let redis_url = std::env::var("REDIS_URL").expect("REDIS_URL must be set for integration tests");
    let run = uuid::Uuid::new_v4().simple().to_string();
    let store = RedisCookStore::from_url(&redis_url)
        .expect("redis pool")
        .with_prefix(format!("cook-service-test:{run}:"));

    let menu_id = MenuId::new("menu-1").unwrap();
    let client = redis::Client::open(redis_url.as_str()).expect("client");
    let mut conn = client
        .get_multiplexed_async_connection()
        .await
        .expect("connection");
    let menu = serde_json::json!({
        "id": "menu-1",
        "name": "Pad Thai",
        "description": "noodles",
        "ingredients": ["rice noodles", "tamarind"]
    });
    let _: () = conn
        .set(store.menu_key(&menu_id), menu.to_string())
        .await
        .expect("seed menu");

    let services = support::build_services(Arc::new(store));
    let profile = services
        .identity
        .register(RegisterCookCommand {
            name: "chef1".into(),
            email: "a@x.com".into(),
            secret: "pw".into(),
            avatar: None,
        })
        .await
        .expect("register");
    let caller = CookId::from_uuid(profile.id);

    let duplicate = services
        .identity
        .register(RegisterCookCommand {
            name: "chef2".into(),
            email: "a@x.com".into(),
            secret: "pw".into(),
            avatar: None,
        })
        .await
        .unwrap_err();
    assert_eq!(duplicate.kind(), ErrorKind::Conflict);

    services.favorites.add_favorite(caller, "menu-1").await.expect("add");
    let list = services.favorites.add_favorite(caller, "menu-1").await.expect("re-add");
    assert_eq!(list.len(), 1);

    // The favorite keeps the menu as it was when it was added.
    let renamed = serde_json::json!({ "id": "menu-1", "name": "Pad See Ew" });
    let _: () = conn
        .set(format!("cook-service-test:{run}:menu:menu-1"), renamed.to_string())
        .await
        .expect("rename menu");
    let list = services.favorites.list_favorites(caller).await.expect("list");
    assert_eq!(list[0].menu.as_ref().map(|m| m.name.as_str()), Some("Pad Thai"));

    let first = services
        .identity
        .resolve_external(ExternalSignInCommand {
            external_subject_id: "g-1".into(),
            name: "chef1".into(),
            email: "a@x.com".into(),
            avatar: None,
        })
        .await
        .expect("link");
    assert_eq!(first.profile_id, profile.id);

    let list = services
        .favorites
        .remove_favorite(caller, "menu-1")
        .await
        .expect("remove");
    assert!(list.is_empty());
}

#[tokio::test]
async fn redis_store_updates_release_indexes_and_rotate_subjects() {
    if std::env::var("RUN_REDIS_INTEGRATION").unwrap_or_default() != "1" {
        eprintln!("skipping integration test: set RUN_REDIS_INTEGRATION=1 and REDIS_URL to run");
        return;
    }

    let redis_url = std::env::var("REDIS_URL").expect("REDIS_URL must be set for integration tests");
    let run = uuid::Uuid::new_v4().simple().to_string();
    let store = RedisCookStore::from_url(&redis_url)
        .expect("redis pool")
        .with_prefix(format!("cook-service-test:{run}:"));

    support::exercise_profile_changes(Arc::new(store), &run[..12]).await;
}
