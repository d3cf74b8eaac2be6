// tests/support/backend.rs
use super::helpers::build_services;
use cook_service::application::{
    ErrorKind,
    identity::{ExternalSignInCommand, RegisterCookCommand, UpdateProfileCommand},
};
use cook_service::domain::cook::{CookId, CookRepository, ExternalSubject};
use cook_service::domain::storage::CookStorage;
use std::sync::Arc;

fn registration(name: &str, email: &str) -> RegisterCookCommand {
    RegisterCookCommand {
        name: name.into(),
        email: email.into(),
        secret: "pw".into(),
        avatar: None,
    }
}

fn external(subject: &str, name: &str, email: &str) -> ExternalSignInCommand {
    ExternalSignInCommand {
        external_subject_id: subject.into(),
        name: name.into(),
        email: email.into(),
        avatar: None,
    }
}

/// Profile updates and subject rotation against a real backend. `tag` keeps
/// names and emails unique across runs sharing one database.
pub async fn exercise_profile_changes(storage: Arc<dyn CookStorage>, tag: &str) {
    let services = build_services(storage.clone());
    let (a_name, a_email) = (format!("a-{tag}"), format!("a-{tag}@x.com"));
    let (b_name, b_email) = (format!("b-{tag}"), format!("b-{tag}@x.com"));

    let a = services
        .identity
        .register(registration(&a_name, &a_email))
        .await
        .expect("register a");
    let a_id = CookId::from_uuid(a.id);
    services
        .identity
        .register(registration(&b_name, &b_email))
        .await
        .expect("register b");

    let renamed = services
        .identity
        .update_profile(
            a_id,
            UpdateProfileCommand {
                name: Some(format!("a2-{tag}")),
                email: Some(format!("a2-{tag}@x.com")),
                avatar: Some("https://img.test/a2.png".into()),
            },
        )
        .await
        .expect("update a");
    assert_eq!(renamed.name, format!("a2-{tag}"));
    assert_eq!(renamed.email, format!("a2-{tag}@x.com"));

    let taken_email = services
        .identity
        .update_profile(
            a_id,
            UpdateProfileCommand {
                email: Some(b_email.clone()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(taken_email.kind(), ErrorKind::Conflict);
    let taken_name = services
        .identity
        .update_profile(
            a_id,
            UpdateProfileCommand {
                name: Some(b_name.clone()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(taken_name.kind(), ErrorKind::Conflict);

    // The values a gave up are free again.
    services
        .identity
        .register(registration(&a_name, &a_email))
        .await
        .expect("register with released name and email");

    let current = services.identity.view_profile(a_id).await.expect("view a");
    assert_eq!(current.name, format!("a2-{tag}"));
    assert_eq!(current.email, format!("a2-{tag}@x.com"));

    let first = services
        .identity
        .resolve_external(external(&format!("g1-{tag}"), &current.name, &current.email))
        .await
        .expect("link first subject");
    assert_eq!(first.profile_id, a.id);
    let rotated = services
        .identity
        .resolve_external(external(&format!("g2-{tag}"), &current.name, &current.email))
        .await
        .expect("link rotated subject");
    assert_eq!(rotated.profile_id, a.id);
    assert!(!rotated.created);

    // FakeHasher markers are `marker-<subject>`.
    let old = ExternalSubject::new(format!("marker-g1-{tag}")).unwrap();
    let new = ExternalSubject::new(format!("marker-g2-{tag}")).unwrap();
    assert!(storage.find_by_external_subject(&old).await.unwrap().is_none());
    let linked = storage.find_by_external_subject(&new).await.unwrap().unwrap();
    assert_eq!(linked.id, a_id);
}
