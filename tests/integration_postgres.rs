use cook_service::application::{
    ErrorKind,
    identity::{ExternalSignInCommand, RegisterCookCommand},
};
use cook_service::domain::cook::CookId;
use cook_service::infrastructure::{database, repositories::PostgresCookStore};
use std::sync::Arc;

mod support;

#[tokio::test]
async fn postgres_store_end_to_end() {
    if std::env::var("RUN_DB_INTEGRATION").unwrap_or_default() != "1" {
        eprintln!("skipping integration test: set RUN_DB_INTEGRATION=1 and DATABASE_URL to run");
        return;
    }

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");
    let pool = database::init_pool(&database_url, 4).await.expect("init pool");
    database::run_migrations(&pool).await.expect("migrations");

    let run = uuid::Uuid::new_v4().simple().to_string();
    let menu_id = format!("menu-{run}");
    sqlx::query("INSERT INTO menus (id, name, description, ingredients) VALUES ($1, $2, $3, $4)")
        .bind(&menu_id)
        .bind("Pad Thai")
        .bind("noodles")
        .bind(vec!["rice noodles".to_string(), "tamarind".to_string()])
        .execute(&pool)
        .await
        .expect("seed menu");

    let services = support::build_services(Arc::new(PostgresCookStore::new(pool.clone())));
    let name = format!("chef-{}", &run[..12]);
    let email = format!("{run}@x.com");

    let profile = services
        .identity
        .register(RegisterCookCommand {
            name: name.clone(),
            email: email.clone(),
            secret: "pw".into(),
            avatar: None,
        })
        .await
        .expect("register");
    let caller = CookId::from_uuid(profile.id);

    let duplicate = services
        .identity
        .register(RegisterCookCommand {
            name: name.clone(),
            email: format!("other-{run}@x.com"),
            secret: "pw".into(),
            avatar: None,
        })
        .await
        .unwrap_err();
    assert_eq!(duplicate.kind(), ErrorKind::Conflict);

    services.favorites.add_favorite(caller, &menu_id).await.expect("add");
    let list = services.favorites.add_favorite(caller, &menu_id).await.expect("re-add");
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].menu.as_ref().map(|m| m.name.as_str()), Some("Pad Thai"));

    let linked = services
        .identity
        .resolve_external(ExternalSignInCommand {
            external_subject_id: format!("g-{run}"),
            name: name.clone(),
            email: email.clone(),
            avatar: None,
        })
        .await
        .expect("link");
    assert_eq!(linked.profile_id, profile.id);
    assert!(!linked.created);

    let list = services
        .favorites
        .remove_favorite(caller, &menu_id)
        .await
        .expect("remove");
    assert!(list.is_empty());
    services
        .favorites
        .remove_favorite(caller, &menu_id)
        .await
        .expect("remove again");
}

#[tokio::test]
async fn postgres_store_updates_release_values_and_rotate_subjects() {
    if std::env::var("RUN_DB_INTEGRATION").unwrap_or_default() != "1" {
        eprintln!("skipping integration test: set RUN_DB_INTEGRATION=1 and DATABASE_URL to run");
        return;
    }

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");
    let pool = database::init_pool(&database_url, 4).await.expect("init pool");
    database::run_migrations(&pool).await.expect("migrations");

    let run = uuid::Uuid::new_v4().simple().to_string();
    support::exercise_profile_changes(Arc::new(PostgresCookStore::new(pool)), &run[..12]).await;
}
