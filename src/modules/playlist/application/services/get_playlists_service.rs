use async_trait::async_trait;

use crate::playlist::application::{
    domain::entities::Playlist,
    ports::{
        incoming::use_cases::{GetPlaylistsError, GetPlaylistsUseCase},
        outgoing::PlaylistRepository,
    },
};

#[derive(Debug, Clone)]
pub struct GetPlaylistsService<R>
where
    R: PlaylistRepository + Send + Sync,
{
    repository: R,
}

impl<R> GetPlaylistsService<R>
where
    R: PlaylistRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetPlaylistsUseCase for GetPlaylistsService<R>
where
    R: PlaylistRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Playlist>, GetPlaylistsError> {
        self.repository.list().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to list playlists");
            GetPlaylistsError::QueryFailed(e.to_string())
        })
    }
}
