pub mod event;
pub mod notification;

pub use event::NotificationEvent;
pub use notification::{Notification, NotificationDraft, NotificationKind, NotificationStyle};
