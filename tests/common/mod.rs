#![allow(dead_code)]

use campuswork_notifications::storage::MemoryRepository;
use campuswork_notifications::{NotificationConfig, NotificationEvent, NotificationStore};
use std::sync::Once;

static TRACING: Once = Once::new();

pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "campuswork_notifications=debug".into()),
            )
            .try_init();
    });
}

pub fn open_store(user_id: &str) -> NotificationStore<MemoryRepository> {
    init_tracing();
    NotificationStore::open(
        MemoryRepository::new(),
        user_id,
        &NotificationConfig::default(),
    )
}

pub fn open_store_with(
    repo: MemoryRepository,
    user_id: &str,
) -> NotificationStore<MemoryRepository> {
    init_tracing();
    NotificationStore::open(repo, user_id, &NotificationConfig::default())
}

/// A like event with a numbered post, so test entries stay distinguishable.
pub fn post_like(recipient_id: &str, actor_name: &str, n: usize) -> NotificationEvent {
    NotificationEvent::PostLike {
        recipient_id: recipient_id.to_string(),
        actor_name: actor_name.to_string(),
        post_title: format!("Discussion {}", n),
        post_id: format!("post{}", n),
    }
}
