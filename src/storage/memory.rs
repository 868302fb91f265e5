use super::NotificationRepository;
use crate::error::AppResult;
use crate::models::Notification;
use dashmap::DashMap;
use std::sync::Arc;

/// In-memory adapter. Cloning shares the underlying map, so a clone handed
/// to a store observes the same state as the original.
#[derive(Clone, Default)]
pub struct MemoryRepository {
    entries: Arc<DashMap<String, Vec<Notification>>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NotificationRepository for MemoryRepository {
    fn load(&self, user_id: &str) -> AppResult<Vec<Notification>> {
        Ok(self
            .entries
            .get(user_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default())
    }

    fn save(&self, user_id: &str, notifications: &[Notification]) -> AppResult<()> {
        self.entries
            .insert(user_id.to_string(), notifications.to_vec());
        Ok(())
    }

    fn remove(&self, user_id: &str) -> AppResult<()> {
        self.entries.remove(user_id);
        Ok(())
    }
}
