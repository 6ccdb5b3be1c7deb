use async_trait::async_trait;

use crate::playlist::application::domain::entities::ImageUpload;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ImageStorageError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Invalid stored path: {0}")]
    InvalidPath(String),
}

#[async_trait]
pub trait ImageStorage: Send + Sync {
    /// Persist the upload and return its public path (`/uploads/<file>`).
    async fn store(&self, upload: &ImageUpload) -> Result<String, ImageStorageError>;

    async fn remove(&self, public_path: &str) -> Result<(), ImageStorageError>;
}
