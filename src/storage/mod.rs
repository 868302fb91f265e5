pub mod file;
pub mod memory;

pub use file::FileRepository;
pub use memory::MemoryRepository;

use crate::error::AppResult;
use crate::models::Notification;

/// Durable storage for notification collections, keyed by recipient id.
///
/// The concrete medium is swappable; implementations must treat missing or
/// unparsable stored data as an empty collection, never as an error.
pub trait NotificationRepository {
    fn load(&self, user_id: &str) -> AppResult<Vec<Notification>>;
    fn save(&self, user_id: &str, notifications: &[Notification]) -> AppResult<()>;
    fn remove(&self, user_id: &str) -> AppResult<()>;
}
