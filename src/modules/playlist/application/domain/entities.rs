use chrono::{DateTime, Utc};
use std::path::Path;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

/// Extension used when the uploaded file name has none.
pub const DEFAULT_IMAGE_EXTENSION: &str = ".png";

#[derive(Debug, Clone, PartialEq)]
pub struct Playlist {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub link: String,
    pub user_id: UserId,
    /// Copy of the owner's display name at the time of writing.
    pub user_name: String,
    /// Public relative path such as `/uploads/1718000000000-k3j9x0q2ab.png`.
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A cover image received from a form upload, not yet stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Extension of the original file name including the dot, or `.png`.
    ///
    /// Only ASCII alphanumeric extensions are kept so the stored name stays
    /// a plain file name.
    pub fn extension(&self) -> String {
        self.file_name
            .as_deref()
            .and_then(|name| Path::new(name).extension())
            .and_then(|ext| ext.to_str())
            .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
            .map(|ext| format!(".{}", ext))
            .unwrap_or_else(|| DEFAULT_IMAGE_EXTENSION.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(file_name: Option<&str>) -> ImageUpload {
        ImageUpload {
            file_name: file_name.map(str::to_string),
            content_type: Some("image/png".to_string()),
            bytes: vec![1, 2, 3],
        }
    }

    #[test]
    fn extension_comes_from_file_name() {
        assert_eq!(upload(Some("cover.jpg")).extension(), ".jpg");
        assert_eq!(upload(Some("my.mix.WEBP")).extension(), ".WEBP");
    }

    #[test]
    fn extension_defaults_to_png() {
        assert_eq!(upload(None).extension(), ".png");
        assert_eq!(upload(Some("cover")).extension(), ".png");
        assert_eq!(upload(Some("cover.p/g")).extension(), ".png");
    }
}
