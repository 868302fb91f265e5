pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use config::NotificationConfig;
pub use error::{AppError, AppResult};
pub use models::{Notification, NotificationDraft, NotificationEvent, NotificationKind};
pub use services::notification::NotificationStore;
pub use storage::{FileRepository, MemoryRepository, NotificationRepository};
