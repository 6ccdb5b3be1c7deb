use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::bookmark::application::domain::entities::{Bookmark, BookmarkTarget};

/// Returns `false` only when the write failed.
#[async_trait]
pub trait AddBookmarkUseCase: Send + Sync {
    async fn execute(&self, user_id: &UserId, target: &BookmarkTarget) -> bool;
}

/// Returns `false` only when the delete failed. Removing nothing succeeds.
#[async_trait]
pub trait RemoveBookmarkUseCase: Send + Sync {
    async fn execute(&self, user_id: &UserId, target: &BookmarkTarget) -> bool;
}

#[async_trait]
pub trait IsBookmarkedUseCase: Send + Sync {
    async fn execute(&self, user_id: &UserId, target: &BookmarkTarget) -> bool;
}

#[async_trait]
pub trait GetBookmarksUseCase: Send + Sync {
    async fn execute(&self, user_id: &UserId) -> Vec<Bookmark>;
}
