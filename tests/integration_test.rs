use user_registry::clients::actor_client::ActorClient;
use user_registry::lifecycle::UserSystem;
use user_registry::model::{UserCreate, UserUpdate};
use user_registry::user_actor::UserError;

/// End-to-end walk through the registry with the real actor.
#[tokio::test]
async fn test_full_registry_lifecycle() {
    let system = UserSystem::new(32).expect("Failed to seed registry");
    let client = &system.user_client;

    // Seed users hold ids 1..=3, so the first runtime create is 4
    let ana = client
        .create_user(UserCreate::new("Ana Ruiz", "ana@x.com", 29))
        .await
        .expect("Failed to create user");
    assert_eq!(ana.id, 4);
    assert!(ana.is_active);

    // Same email, different case
    let dup = client
        .create_user(UserCreate::new("Ana Again", "ANA@X.COM", 40))
        .await;
    assert_eq!(dup, Err(UserError::AlreadyExists("ANA@X.COM".into())));
    assert_eq!(client.list_all().await.unwrap().len(), 4);

    // Soft delete hides the user but keeps the record
    client.deactivate(1).await.expect("Failed to deactivate");
    assert_eq!(client.get_active(1).await, Err(UserError::NotFound(1)));
    assert!(client.list(true).await.unwrap().iter().all(|u| u.id != 1));
    assert!(client.list(false).await.unwrap().iter().any(|u| u.id == 1));

    // Reactivation restores it untouched
    let restored = client.activate(1).await.expect("Failed to activate");
    assert!(restored.is_active);
    assert_eq!(restored.name, "Juan Pérez");
    assert_eq!(restored.email, "juan@email.com");
    assert_eq!(restored.age, 25);

    // Hard delete is final
    client.delete(4).await.expect("Failed to delete");
    assert_eq!(client.get_active(4).await, Err(UserError::NotFound(4)));
    assert_eq!(client.deactivate(4).await, Err(UserError::NotFound(4)));
    assert_eq!(client.activate(4).await, Err(UserError::NotFound(4)));
    assert_eq!(client.delete(4).await, Err(UserError::NotFound(4)));

    system.shutdown().await.expect("Failed to shutdown");
}

#[tokio::test]
async fn test_ids_are_strictly_increasing_and_never_reused() {
    let system = UserSystem::empty(8);
    let client = &system.user_client;

    let first = client
        .create_user(UserCreate::new("First User", "first@x.com", 20))
        .await
        .unwrap();
    assert_eq!(first.id, 1);

    // A rejected create does not consume an id
    assert!(client
        .create_user(UserCreate::new("Bad Age", "bad@x.com", 5))
        .await
        .is_err());

    client.delete(first.id).await.unwrap();
    let second = client
        .create_user(UserCreate::new("Second User", "second@x.com", 21))
        .await
        .unwrap();
    assert_eq!(second.id, 2);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_update_keeps_untouched_fields_and_own_email() {
    let system = UserSystem::new(8).unwrap();
    let client = &system.user_client;

    let updated = client
        .update_user(
            2,
            UserUpdate {
                age: Some(31),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.age, 31);
    assert_eq!(updated.name, "María García");
    assert_eq!(updated.email, "maria@email.com");

    // Re-submitting your own email (any case) is not a conflict
    let same = client
        .update_user(
            2,
            UserUpdate {
                email: Some("MARIA@email.com".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(same.email, "MARIA@email.com");

    // Someone else's email is
    let taken = client
        .update_user(
            2,
            UserUpdate {
                email: Some("carlos@email.com".into()),
                ..Default::default()
            },
        )
        .await;
    assert_eq!(taken, Err(UserError::AlreadyExists("carlos@email.com".into())));

    // A rejected update leaves the record as it was
    let stored = client.get_active(2).await.unwrap();
    assert_eq!(stored.email, "MARIA@email.com");
    assert_eq!(stored.age, 31);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_update_checks_existence_before_validation() {
    let system = UserSystem::new(8).unwrap();
    let client = &system.user_client;

    client.deactivate(3).await.unwrap();
    let invalid = UserUpdate {
        age: Some(7),
        ..Default::default()
    };
    assert_eq!(
        client.update_user(3, invalid.clone()).await,
        Err(UserError::NotFound(3))
    );
    assert!(matches!(
        client.update_user(1, invalid).await,
        Err(UserError::Validation(v)) if v[0].field == "age"
    ));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_blank_names_are_rejected_on_create() {
    let system = UserSystem::empty(8);
    let client = &system.user_client;

    let result = client
        .create_user(UserCreate::new("   ", "ws@x.com", 30))
        .await;
    assert!(matches!(
        result,
        Err(UserError::Validation(v)) if v[0].message == "name is required"
    ));
    assert!(client.list_all().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_inactive_users_still_hold_their_email() {
    let system = UserSystem::new(8).unwrap();
    let client = &system.user_client;

    client.deactivate(1).await.unwrap();
    let result = client
        .create_user(UserCreate::new("Juan Nuevo", "juan@email.com", 40))
        .await;
    assert_eq!(result, Err(UserError::AlreadyExists("juan@email.com".into())));

    let holder = client.find_by_email("JUAN@EMAIL.COM", None).await.unwrap();
    assert_eq!(holder.map(|u| (u.id, u.is_active)), Some((1, false)));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_creates_with_one_email_yield_one_success() {
    let system = UserSystem::empty(64);

    let mut handles = Vec::new();
    for i in 0..20 {
        let client = system.user_client.clone();
        handles.push(tokio::spawn(async move {
            client
                .create_user(UserCreate::new(format!("Racer {}", i), "race@x.com", 30))
                .await
        }));
    }

    let mut successes = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => successes += 1,
            Err(UserError::AlreadyExists(_)) => conflicts += 1,
            Err(e) => panic!("unexpected error: {e}"),
        }
    }
    assert_eq!(successes, 1);
    assert_eq!(conflicts, 19);
    assert_eq!(system.user_client.list_all().await.unwrap().len(), 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_stats_over_seed_data() {
    let system = UserSystem::new(8).unwrap();
    let client = &system.user_client;

    let stats = client.stats().await.unwrap();
    assert_eq!(stats.total_users, 3);
    assert_eq!(stats.active_users, 3);
    assert_eq!(stats.inactive_users, 0);
    assert_eq!(stats.average_age, Some(27.67));

    for id in 1..=3 {
        client.deactivate(id).await.unwrap();
    }
    let stats = client.stats().await.unwrap();
    assert_eq!(stats.inactive_users, 3);
    assert_eq!(stats.average_age, None);
    assert_eq!(stats.newest_user, None);

    system.shutdown().await.unwrap();
}
