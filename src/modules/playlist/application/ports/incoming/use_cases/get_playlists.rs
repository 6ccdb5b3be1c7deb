use async_trait::async_trait;

use crate::playlist::application::domain::entities::Playlist;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPlaylistsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetPlaylistsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Playlist>, GetPlaylistsError>;
}
