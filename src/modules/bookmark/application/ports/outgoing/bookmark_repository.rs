use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::bookmark::application::domain::entities::{Bookmark, BookmarkTarget};

#[derive(Debug, Clone, thiserror::Error)]
pub enum BookmarkRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait BookmarkRepository: Send + Sync {
    /// Insert unless the same `(user, target)` already exists.
    async fn add(&self, user_id: &UserId, target: &BookmarkTarget)
        -> Result<(), BookmarkRepositoryError>;

    /// Delete every matching row and return how many went.
    async fn remove(
        &self,
        user_id: &UserId,
        target: &BookmarkTarget,
    ) -> Result<u64, BookmarkRepositoryError>;

    async fn exists(
        &self,
        user_id: &UserId,
        target: &BookmarkTarget,
    ) -> Result<bool, BookmarkRepositoryError>;

    /// Newest first.
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Bookmark>, BookmarkRepositoryError>;
}
