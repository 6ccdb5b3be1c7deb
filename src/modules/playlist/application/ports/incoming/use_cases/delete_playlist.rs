use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeletePlaylistError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeletePlaylistUseCase: Send + Sync {
    /// Deleting an id that does not exist is not an error.
    async fn execute(&self, id: Uuid) -> Result<(), DeletePlaylistError>;
}
