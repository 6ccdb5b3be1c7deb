use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::playlist::application::ports::{
    incoming::use_cases::{SyncPlaylistUserNameError, SyncPlaylistUserNameUseCase},
    outgoing::PlaylistRepository,
};

#[derive(Debug, Clone)]
pub struct SyncPlaylistUserNameService<R>
where
    R: PlaylistRepository + Send + Sync,
{
    repository: R,
}

impl<R> SyncPlaylistUserNameService<R>
where
    R: PlaylistRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SyncPlaylistUserNameUseCase for SyncPlaylistUserNameService<R>
where
    R: PlaylistRepository + Send + Sync,
{
    async fn execute(&self, user_id: &UserId) -> Result<u64, SyncPlaylistUserNameError> {
        let updated = self.repository.sync_user_name(user_id).await.map_err(|e| {
            tracing::error!(user_id = %user_id, error = %e, "Failed to sync playlist user names");
            SyncPlaylistUserNameError::RepositoryError(e.to_string())
        })?;

        tracing::info!(user_id = %user_id, updated, "Playlist user names synced");
        Ok(updated)
    }
}
