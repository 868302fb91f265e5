use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One unit of user-facing asynchronous information, scoped to exactly one
/// recipient. `read` is the only field that mutates after creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub user_id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub actor_name: Option<String>,
    pub related_id: Option<String>,
    pub related_title: Option<String>,
    pub link: Option<String>,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// A notification minus the fields the store assigns at insertion time
/// (`id`, `created_at`, `read`).
#[derive(Clone, Debug, PartialEq)]
pub struct NotificationDraft {
    pub user_id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub actor_name: Option<String>,
    pub related_id: Option<String>,
    pub related_title: Option<String>,
    pub link: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    CommentReply,
    PostReply,
    PostLike,
    ProjectLike,
    CommentLike,
    ProjectEvaluation,
    PostDeleted,
    ProjectDeleted,
    AccountApproved,
    AccountBanned,
    NewProject,
}

/// Icon and accent color the panel renders for a given kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotificationStyle {
    pub icon: &'static str,
    pub color: &'static str,
}

impl NotificationKind {
    pub fn style(&self) -> NotificationStyle {
        let (icon, color) = match self {
            NotificationKind::CommentReply => ("💬", "blue"),
            NotificationKind::PostReply => ("📝", "blue"),
            NotificationKind::PostLike
            | NotificationKind::ProjectLike
            | NotificationKind::CommentLike => ("❤️", "red"),
            NotificationKind::ProjectEvaluation => ("📊", "purple"),
            NotificationKind::PostDeleted | NotificationKind::ProjectDeleted => ("🗑️", "orange"),
            NotificationKind::AccountApproved => ("✅", "green"),
            NotificationKind::AccountBanned => ("🚫", "red"),
            NotificationKind::NewProject => ("🚀", "emerald"),
        };
        NotificationStyle { icon, color }
    }
}
