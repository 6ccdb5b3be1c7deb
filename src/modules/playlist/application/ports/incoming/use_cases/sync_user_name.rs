use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SyncPlaylistUserNameError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SyncPlaylistUserNameUseCase: Send + Sync {
    /// Returns how many playlists were rewritten.
    async fn execute(&self, user_id: &UserId) -> Result<u64, SyncPlaylistUserNameError>;
}
