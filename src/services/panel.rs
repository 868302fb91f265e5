use crate::models::{Notification, NotificationStyle};
use chrono::{DateTime, Utc};

/// Which entries the panel shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelFilter {
    All,
    Unread,
}

/// A notification decorated for display: per-kind style plus a relative
/// timestamp. Rendering itself lives outside this crate.
#[derive(Clone, Debug)]
pub struct NotificationView<'a> {
    pub notification: &'a Notification,
    pub style: NotificationStyle,
    pub timestamp: String,
}

/// Bell badge text: nothing at zero, "9+" past nine.
pub fn badge_label(unread: usize) -> Option<String> {
    match unread {
        0 => None,
        n if n > 9 => Some("9+".to_string()),
        n => Some(n.to_string()),
    }
}

/// Relative timestamp buckets: minutes under an hour, hours under a day,
/// days under a week, full date beyond that.
pub fn format_relative(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(created_at);
    let mins = elapsed.num_minutes();
    if mins < 1 {
        return "À l'instant".to_string();
    }
    if mins < 60 {
        return format!("Il y a {} min", mins);
    }
    let hours = elapsed.num_hours();
    if hours < 24 {
        return format!("Il y a {}h", hours);
    }
    let days = elapsed.num_days();
    if days < 7 {
        return format!("Il y a {}j", days);
    }
    created_at.format("%d/%m/%Y").to_string()
}

pub fn panel_views<'a>(
    notifications: &'a [Notification],
    filter: PanelFilter,
    now: DateTime<Utc>,
) -> Vec<NotificationView<'a>> {
    notifications
        .iter()
        .filter(|n| match filter {
            PanelFilter::All => true,
            PanelFilter::Unread => !n.read,
        })
        .map(|n| NotificationView {
            style: n.kind.style(),
            timestamp: format_relative(n.created_at, now),
            notification: n,
        })
        .collect()
}
