use async_trait::async_trait;

use crate::playlist::application::{
    domain::entities::Playlist,
    ports::{
        incoming::use_cases::{CreatePlaylistCommand, CreatePlaylistError, CreatePlaylistUseCase},
        outgoing::{ImageStorage, PlaylistRepository},
    },
};

#[derive(Debug, Clone)]
pub struct CreatePlaylistService<R, S>
where
    R: PlaylistRepository + Send + Sync,
    S: ImageStorage + Send + Sync,
{
    repository: R,
    storage: S,
}

impl<R, S> CreatePlaylistService<R, S>
where
    R: PlaylistRepository + Send + Sync,
    S: ImageStorage + Send + Sync,
{
    pub fn new(repository: R, storage: S) -> Self {
        Self {
            repository,
            storage,
        }
    }
}

#[async_trait]
impl<R, S> CreatePlaylistUseCase for CreatePlaylistService<R, S>
where
    R: PlaylistRepository + Send + Sync,
    S: ImageStorage + Send + Sync,
{
    async fn execute(&self, command: CreatePlaylistCommand) -> Result<Playlist, CreatePlaylistError> {
        // 1) Store the cover first so the row can carry its path.
        let image_path = match command.image() {
            Some(upload) => Some(self.storage.store(upload).await.map_err(|e| {
                tracing::error!(user_id = %command.user_id(), error = %e, "Failed to store playlist image");
                CreatePlaylistError::ImageStorageError(e.to_string())
            })?),
            None => None,
        };

        // 2) Insert; a failed insert must not leave an orphaned file behind.
        match self
            .repository
            .create(command.to_new_playlist(image_path.clone()))
            .await
        {
            Ok(playlist) => Ok(playlist),
            Err(e) => {
                tracing::error!(user_id = %command.user_id(), error = %e, "Failed to create playlist");
                if let Some(path) = image_path {
                    if let Err(cleanup) = self.storage.remove(&path).await {
                        tracing::warn!(path = %path, error = %cleanup, "Failed to remove orphaned playlist image");
                    }
                }
                Err(CreatePlaylistError::RepositoryError(e.to_string()))
            }
        }
    }
}
