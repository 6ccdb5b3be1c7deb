use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::bookmark::application::{
    domain::entities::{Bookmark, BookmarkTarget},
    ports::{
        incoming::use_cases::{
            AddBookmarkUseCase, GetBookmarksUseCase, IsBookmarkedUseCase, RemoveBookmarkUseCase,
        },
        outgoing::BookmarkRepository,
    },
};

/// Serves every bookmark use case over one repository.
#[derive(Debug, Clone)]
pub struct BookmarkService<R>
where
    R: BookmarkRepository + Send + Sync,
{
    repository: R,
}

impl<R> BookmarkService<R>
where
    R: BookmarkRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> AddBookmarkUseCase for BookmarkService<R>
where
    R: BookmarkRepository + Send + Sync,
{
    async fn execute(&self, user_id: &UserId, target: &BookmarkTarget) -> bool {
        match self.repository.add(user_id, target).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(
                    user_id = %user_id,
                    kind = %target.kind(),
                    target_id = %target.target_id(),
                    error = %e,
                    "Failed to add bookmark"
                );
                false
            }
        }
    }
}

#[async_trait]
impl<R> RemoveBookmarkUseCase for BookmarkService<R>
where
    R: BookmarkRepository + Send + Sync,
{
    async fn execute(&self, user_id: &UserId, target: &BookmarkTarget) -> bool {
        match self.repository.remove(user_id, target).await {
            Ok(removed) => {
                tracing::debug!(user_id = %user_id, removed, "Bookmark removed");
                true
            }
            Err(e) => {
                tracing::error!(
                    user_id = %user_id,
                    kind = %target.kind(),
                    target_id = %target.target_id(),
                    error = %e,
                    "Failed to remove bookmark"
                );
                false
            }
        }
    }
}

#[async_trait]
impl<R> IsBookmarkedUseCase for BookmarkService<R>
where
    R: BookmarkRepository + Send + Sync,
{
    async fn execute(&self, user_id: &UserId, target: &BookmarkTarget) -> bool {
        self.repository
            .exists(user_id, target)
            .await
            .unwrap_or_else(|e| {
                tracing::error!(user_id = %user_id, error = %e, "Failed to check bookmark");
                false
            })
    }
}

#[async_trait]
impl<R> GetBookmarksUseCase for BookmarkService<R>
where
    R: BookmarkRepository + Send + Sync,
{
    async fn execute(&self, user_id: &UserId) -> Vec<Bookmark> {
        self.repository
            .list_for_user(user_id)
            .await
            .unwrap_or_else(|e| {
                tracing::error!(user_id = %user_id, error = %e, "Failed to list bookmarks");
                Vec::new()
            })
    }
}
