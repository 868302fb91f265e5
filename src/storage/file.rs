use super::NotificationRepository;
use crate::error::AppResult;
use crate::models::Notification;
use std::fs;
use std::path::PathBuf;

/// One JSON file per user under `dir`, named `notifications_<userId>.json`.
pub struct FileRepository {
    dir: PathBuf,
}

/// Keep recipient ids safe to use as file names.
fn sanitize_user_id(user_id: &str) -> String {
    user_id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

impl FileRepository {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, user_id: &str) -> PathBuf {
        self.dir
            .join(format!("notifications_{}.json", sanitize_user_id(user_id)))
    }
}

impl NotificationRepository for FileRepository {
    fn load(&self, user_id: &str) -> AppResult<Vec<Notification>> {
        let path = self.path_for(user_id);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let data = fs::read(&path)?;
        match serde_json::from_slice(&data) {
            Ok(notifications) => Ok(notifications),
            Err(e) => {
                // Unparsable stored data is equivalent to no stored data.
                tracing::warn!(
                    "Discarding unparsable notification file {}: {}",
                    path.display(),
                    e
                );
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, user_id: &str, notifications: &[Notification]) -> AppResult<()> {
        fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_vec(&notifications)?;
        fs::write(self.path_for(user_id), json)?;
        Ok(())
    }

    fn remove(&self, user_id: &str) -> AppResult<()> {
        let path = self.path_for(user_id);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_id_unchanged() {
        assert_eq!(sanitize_user_id("user-42_a"), "user-42_a");
    }

    #[test]
    fn path_separators_replaced() {
        assert_eq!(sanitize_user_id("../etc/passwd"), "___etc_passwd");
    }

    #[test]
    fn file_name_uses_storage_key() {
        let repo = FileRepository::new("/tmp/notif");
        assert_eq!(
            repo.path_for("u1"),
            PathBuf::from("/tmp/notif/notifications_u1.json")
        );
    }
}
