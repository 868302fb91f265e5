use crate::config::NotificationConfig;
use crate::models::{Notification, NotificationDraft, NotificationEvent};
use crate::storage::NotificationRepository;
use chrono::Utc;
use uuid::Uuid;

/// The ordered, capped notification collection for the active user session.
///
/// Newest entries come first; insertion beyond the retention cap evicts the
/// oldest. Every mutation writes through to the repository and recomputes the
/// unread count. Persistence failures are logged and swallowed: the in-memory
/// state stays authoritative for the session.
pub struct NotificationStore<R: NotificationRepository> {
    repo: R,
    user_id: String,
    retention_cap: usize,
    notifications: Vec<Notification>,
    unread: usize,
}

impl<R: NotificationRepository> NotificationStore<R> {
    /// Open the store for `user_id`, loading any persisted collection.
    /// A failed load starts the session empty rather than failing.
    pub fn open(repo: R, user_id: impl Into<String>, config: &NotificationConfig) -> Self {
        let user_id = user_id.into();
        let notifications = match repo.load(&user_id) {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!("Failed to load notifications for {}: {}", user_id, e);
                Vec::new()
            }
        };
        let unread = notifications.iter().filter(|n| !n.read).count();

        Self {
            repo,
            user_id,
            retention_cap: config.retention_cap,
            notifications,
            unread,
        }
    }

    /// Event-boundary entry point: map a domain event and store the result.
    /// Returns the new notification's id, or `None` when the event targets a
    /// different recipient than this store's user.
    pub fn notify(&mut self, event: &NotificationEvent) -> Option<String> {
        if event.recipient_id() != self.user_id {
            tracing::warn!(
                "Dropping notification addressed to {} from store of {}",
                event.recipient_id(),
                self.user_id
            );
            return None;
        }
        Some(self.add(event.to_draft()))
    }

    /// Assign a fresh id and timestamp to `draft`, prepend it, trim to the
    /// retention cap and persist. Returns the new id. Recipient screening
    /// happens at the event boundary in [`Self::notify`].
    pub fn add(&mut self, draft: NotificationDraft) -> String {
        let notification = Notification {
            id: format!("notif-{}", Uuid::new_v4()),
            user_id: draft.user_id,
            kind: draft.kind,
            title: draft.title,
            message: draft.message,
            actor_name: draft.actor_name,
            related_id: draft.related_id,
            related_title: draft.related_title,
            link: draft.link,
            read: false,
            created_at: Utc::now(),
        };
        let id = notification.id.clone();
        tracing::debug!("Notification {} ({:?}) for {}", id, notification.kind, self.user_id);

        self.notifications.insert(0, notification);
        self.notifications.truncate(self.retention_cap);
        self.sync();
        id
    }

    /// Mark one notification as read. Unknown ids are a no-op.
    pub fn mark_as_read(&mut self, id: &str) {
        if let Some(n) = self.notifications.iter_mut().find(|n| n.id == id) {
            n.read = true;
            self.sync();
        }
    }

    pub fn mark_all_read(&mut self) {
        for n in &mut self.notifications {
            n.read = true;
        }
        self.sync();
    }

    /// Delete one notification. Unknown ids are a no-op.
    pub fn delete(&mut self, id: &str) {
        let before = self.notifications.len();
        self.notifications.retain(|n| n.id != id);
        if self.notifications.len() != before {
            self.sync();
        }
    }

    /// Empty the collection and delete the durable copy entirely. The
    /// confirmation prompt belongs to the presentation boundary, not here.
    pub fn clear_all(&mut self) {
        self.notifications.clear();
        self.unread = 0;
        if let Err(e) = self.repo.remove(&self.user_id) {
            tracing::warn!(
                "Failed to remove stored notifications for {}: {}",
                self.user_id,
                e
            );
        }
    }

    /// Current collection, newest first.
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Count of unread entries, recomputed on every mutation.
    pub fn unread_count(&self) -> usize {
        self.unread
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Write-through: recompute the unread count and persist the collection.
    fn sync(&mut self) {
        self.unread = self.notifications.iter().filter(|n| !n.read).count();
        if let Err(e) = self.repo.save(&self.user_id, &self.notifications) {
            tracing::warn!("Failed to persist notifications for {}: {}", self.user_id, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NotificationKind;
    use crate::storage::MemoryRepository;

    fn draft_for(user_id: &str) -> NotificationDraft {
        NotificationDraft {
            user_id: user_id.to_string(),
            kind: NotificationKind::PostLike,
            title: "Nouveau like".to_string(),
            message: "Jean a aimé votre discussion \"Hooks\"".to_string(),
            actor_name: Some("Jean".to_string()),
            related_id: Some("post1".to_string()),
            related_title: Some("Hooks".to_string()),
            link: Some("/discussion/post1".to_string()),
        }
    }

    #[test]
    fn add_assigns_id_and_unread_state() {
        let mut store = NotificationStore::open(
            MemoryRepository::new(),
            "u1",
            &NotificationConfig::default(),
        );
        let id = store.add(draft_for("u1"));

        assert!(id.starts_with("notif-"));
        assert_eq!(store.notifications().len(), 1);
        assert!(!store.notifications()[0].read);
        assert_eq!(store.unread_count(), 1);
    }

    #[test]
    fn notify_rejects_foreign_recipient() {
        let mut store = NotificationStore::open(
            MemoryRepository::new(),
            "u1",
            &NotificationConfig::default(),
        );
        let event = NotificationEvent::AccountApproved {
            recipient_id: "u2".to_string(),
        };
        assert_eq!(store.notify(&event), None);
        assert!(store.notifications().is_empty());
        assert_eq!(store.unread_count(), 0);
    }

    #[test]
    fn notify_returns_stored_id() {
        let mut store = NotificationStore::open(
            MemoryRepository::new(),
            "u1",
            &NotificationConfig::default(),
        );
        let event = NotificationEvent::AccountApproved {
            recipient_id: "u1".to_string(),
        };
        let id = store.notify(&event).unwrap();
        assert_eq!(store.notifications()[0].id, id);
    }

    #[test]
    fn retention_cap_respected() {
        let config = NotificationConfig {
            retention_cap: 3,
            ..NotificationConfig::default()
        };
        let mut store = NotificationStore::open(MemoryRepository::new(), "u1", &config);
        for _ in 0..5 {
            store.add(draft_for("u1"));
        }
        assert_eq!(store.notifications().len(), 3);
        assert_eq!(store.unread_count(), 3);
    }
}
