use async_trait::async_trait;
use uuid::Uuid;

use crate::playlist::application::ports::{
    incoming::use_cases::{DeletePlaylistError, DeletePlaylistUseCase},
    outgoing::PlaylistRepository,
};

#[derive(Debug, Clone)]
pub struct DeletePlaylistService<R>
where
    R: PlaylistRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeletePlaylistService<R>
where
    R: PlaylistRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeletePlaylistUseCase for DeletePlaylistService<R>
where
    R: PlaylistRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeletePlaylistError> {
        let removed = self.repository.delete(id).await.map_err(|e| {
            tracing::error!(playlist_id = %id, error = %e, "Failed to delete playlist");
            DeletePlaylistError::RepositoryError(e.to_string())
        })?;

        if removed == 0 {
            tracing::debug!(playlist_id = %id, "Delete matched no playlist");
        }

        Ok(())
    }
}
