use cook_service::application::{
    ErrorKind, identity::RegisterCookCommand, services::ApplicationServices,
};
use cook_service::domain::cook::CookId;
use std::sync::Arc;

mod support;

async fn registered(services: &ApplicationServices, name: &str) -> CookId {
    let profile = services
        .identity
        .register(RegisterCookCommand {
            name: name.into(),
            email: format!("{name}@x.com"),
            secret: "pw".into(),
            avatar: None,
        })
        .await
        .unwrap();
    CookId::from_uuid(profile.id)
}

fn menu_ids(list: &[cook_service::application::dto::FavoriteMenuDto]) -> Vec<&str> {
    list.iter().map(|f| f.menu_id.as_str()).collect()
}

#[tokio::test]
async fn add_list_remove_round_trip() {
    let services = support::build_services(support::seeded_store());
    let caller = registered(&services, "chef1").await;

    assert!(services.favorites.list_favorites(caller).await.unwrap().is_empty());

    let after_add = services.favorites.add_favorite(caller, "menu-1").await.unwrap();
    assert_eq!(menu_ids(&after_add), ["menu-1"]);
    let menu = after_add[0].menu.as_ref().expect("menu view");
    assert_eq!(menu.name, "Pad Thai");
    assert_eq!(menu.ingredients, ["rice", "salt"]);

    let after_remove = services
        .favorites
        .remove_favorite(caller, "menu-1")
        .await
        .unwrap();
    assert!(after_remove.is_empty());
}

#[tokio::test]
async fn adding_twice_lists_once() {
    let services = support::build_services(support::seeded_store());
    let caller = registered(&services, "chef1").await;

    services.favorites.add_favorite(caller, "menu-1").await.unwrap();
    let list = services.favorites.add_favorite(caller, "menu-1").await.unwrap();
    assert_eq!(menu_ids(&list), ["menu-1"]);
}

#[tokio::test]
async fn favorites_keep_insertion_order() {
    let services = support::build_services(support::seeded_store());
    let caller = registered(&services, "chef1").await;

    for id in ["menu-3", "menu-1", "menu-2"] {
        services.favorites.add_favorite(caller, id).await.unwrap();
    }
    let list = services.favorites.list_favorites(caller).await.unwrap();
    assert_eq!(menu_ids(&list), ["menu-3", "menu-1", "menu-2"]);
    assert!(list.windows(2).all(|w| w[0].added_at < w[1].added_at));
}

#[tokio::test]
async fn removing_a_missing_favorite_is_silent() {
    let services = support::build_services(support::seeded_store());
    let caller = registered(&services, "chef1").await;
    services.favorites.add_favorite(caller, "menu-2").await.unwrap();

    let list = services
        .favorites
        .remove_favorite(caller, "menu-1")
        .await
        .unwrap();
    assert_eq!(menu_ids(&list), ["menu-2"]);

    let unknown = services
        .favorites
        .remove_favorite(caller, "not-in-catalog")
        .await
        .unwrap();
    assert_eq!(menu_ids(&unknown), ["menu-2"]);
}

#[tokio::test]
async fn unknown_menu_is_not_found_and_writes_nothing() {
    let services = support::build_services(support::seeded_store());
    let caller = registered(&services, "chef1").await;

    let err = services
        .favorites
        .add_favorite(caller, "menu-404")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(services.favorites.list_favorites(caller).await.unwrap().is_empty());
}

#[tokio::test]
async fn unknown_caller_is_not_found() {
    let services = support::build_services(support::seeded_store());
    let ghost = CookId::generate();

    for result in [
        services.favorites.list_favorites(ghost).await,
        services.favorites.add_favorite(ghost, "menu-1").await,
        services.favorites.remove_favorite(ghost, "menu-1").await,
    ] {
        assert_eq!(result.unwrap_err().kind(), ErrorKind::NotFound);
    }
}

#[tokio::test]
async fn blank_menu_id_is_invalid() {
    let services = support::build_services(support::seeded_store());
    let caller = registered(&services, "chef1").await;
    let err = services.favorites.add_favorite(caller, "  ").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[tokio::test]
async fn favorites_are_per_cook() {
    let services = support::build_services(support::seeded_store());
    let first = registered(&services, "chef1").await;
    let second = registered(&services, "chef2").await;

    services.favorites.add_favorite(first, "menu-1").await.unwrap();
    services.favorites.add_favorite(second, "menu-2").await.unwrap();

    let list = services.favorites.list_favorites(first).await.unwrap();
    assert_eq!(menu_ids(&list), ["menu-1"]);
}

#[tokio::test]
async fn concurrent_adds_of_the_same_menu_store_one_link() {
    let services = support::build_services(support::seeded_store());
    let caller = registered(&services, "chef1").await;

    let mut handles = Vec::new();
    for _ in 0..8 {
        let services = Arc::clone(&services);
        handles.push(tokio::spawn(async move {
            services.favorites.add_favorite(caller, "menu-1").await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let list = services.favorites.list_favorites(caller).await.unwrap();
    assert_eq!(menu_ids(&list), ["menu-1"]);
}
