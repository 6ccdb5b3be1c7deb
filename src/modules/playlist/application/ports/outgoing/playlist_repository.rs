use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::playlist::application::domain::entities::Playlist;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PlaylistRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPlaylist {
    pub name: String,
    pub description: Option<String>,
    pub link: String,
    pub user_id: UserId,
    pub user_name: String,
    pub image: Option<String>,
}

#[async_trait]
pub trait PlaylistRepository: Send + Sync {
    /// Newest first.
    async fn list(&self) -> Result<Vec<Playlist>, PlaylistRepositoryError>;

    async fn create(&self, data: NewPlaylist) -> Result<Playlist, PlaylistRepositoryError>;

    /// Returns the number of rows removed.
    async fn delete(&self, id: Uuid) -> Result<u64, PlaylistRepositoryError>;

    /// Copy `users.name` onto every playlist owned by `user_id`.
    async fn sync_user_name(&self, user_id: &UserId) -> Result<u64, PlaylistRepositoryError>;
}
