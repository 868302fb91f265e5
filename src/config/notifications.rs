use std::env;

/// Maximum notifications retained per user; older entries are evicted.
pub const DEFAULT_RETENTION_CAP: usize = 50;

const DEFAULT_STORAGE_DIR: &str = "data/notifications";

#[derive(Debug, Clone)]
pub struct NotificationConfig {
    pub storage_dir: String,
    pub retention_cap: usize,
}

impl NotificationConfig {
    /// Read configuration from the environment, loading `.env` first.
    /// This crate has no binary of its own, so the dotenv bootstrap lives
    /// here rather than in a `main`.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let storage_dir =
            env::var("NOTIFICATIONS_DIR").unwrap_or_else(|_| DEFAULT_STORAGE_DIR.to_string());

        let retention_cap = env::var("NOTIFICATIONS_RETENTION_CAP")
            .ok()
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|&cap| cap > 0)
            .unwrap_or(DEFAULT_RETENTION_CAP);

        Self {
            storage_dir,
            retention_cap,
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            storage_dir: DEFAULT_STORAGE_DIR.to_string(),
            retention_cap: DEFAULT_RETENTION_CAP,
        }
    }
}
