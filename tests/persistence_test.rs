mod common;

use campuswork_notifications::storage::{FileRepository, NotificationRepository};
use campuswork_notifications::{Notification, NotificationConfig, NotificationKind, NotificationStore};
use chrono::{Duration, Utc};

fn sample(id: &str, user_id: &str, read: bool, age_minutes: i64) -> Notification {
    Notification {
        id: id.to_string(),
        user_id: user_id.to_string(),
        kind: NotificationKind::PostReply,
        title: "Nouveau commentaire".to_string(),
        message: "Marie a commenté votre discussion \"Hooks\"".to_string(),
        actor_name: Some("Marie".to_string()),
        related_id: Some("post1".to_string()),
        related_title: Some("Hooks".to_string()),
        link: Some("/discussion/post1".to_string()),
        read,
        created_at: Utc::now() - Duration::minutes(age_minutes),
    }
}

#[test]
fn save_load_round_trip() {
    common::init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let repo = FileRepository::new(dir.path());

    let collection = vec![
        sample("notif-a", "u1", false, 0),
        sample("notif-b", "u1", true, 5),
        sample("notif-c", "u1", false, 60),
    ];
    repo.save("u1", &collection).unwrap();

    assert_eq!(repo.load("u1").unwrap(), collection);
}

#[test]
fn missing_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileRepository::new(dir.path());
    assert!(repo.load("nobody").unwrap().is_empty());
}

#[test]
fn malformed_file_loads_empty() {
    common::init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let repo = FileRepository::new(dir.path());

    std::fs::write(dir.path().join("notifications_u1.json"), b"{not json").unwrap();
    assert!(repo.load("u1").unwrap().is_empty());
}

#[test]
fn save_overwrites_previous_collection() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileRepository::new(dir.path());

    repo.save("u1", &[sample("notif-a", "u1", false, 0)]).unwrap();
    let replacement = vec![sample("notif-b", "u1", true, 1)];
    repo.save("u1", &replacement).unwrap();

    assert_eq!(repo.load("u1").unwrap(), replacement);
}

#[test]
fn remove_deletes_file() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileRepository::new(dir.path());

    repo.save("u1", &[sample("notif-a", "u1", false, 0)]).unwrap();
    assert!(dir.path().join("notifications_u1.json").exists());

    repo.remove("u1").unwrap();
    assert!(!dir.path().join("notifications_u1.json").exists());
    assert!(repo.load("u1").unwrap().is_empty());

    // Removing an absent collection is a no-op.
    repo.remove("u1").unwrap();
}

#[test]
fn hostile_user_id_stays_in_storage_dir() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileRepository::new(dir.path());

    repo.save("../outside", &[sample("notif-a", "../outside", false, 0)])
        .unwrap();

    let entries: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(entries, vec!["notifications____outside.json"]);
}

#[test]
fn store_survives_process_restart() {
    common::init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let config = NotificationConfig {
        storage_dir: dir.path().to_string_lossy().into_owned(),
        ..NotificationConfig::default()
    };

    {
        let repo = FileRepository::new(config.storage_dir.as_str());
        let mut store = NotificationStore::open(repo, "u1", &config);
        store.notify(&common::post_like("u1", "Jean", 1));
        store.notify(&common::post_like("u1", "Marie", 2));
    }

    let repo = FileRepository::new(config.storage_dir.as_str());
    let store = NotificationStore::open(repo, "u1", &config);
    assert_eq!(store.notifications().len(), 2);
    assert_eq!(store.unread_count(), 2);
    assert_eq!(
        store.notifications()[0].related_id.as_deref(),
        Some("post2")
    );
}
