use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::post::application::domain::entities::Post;

#[derive(Debug, Clone)]
pub struct NewPost {
    pub content: String,
    pub author_id: UserId,
    pub is_published: bool,
}

/// Partial update; `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct PostChanges {
    pub content: Option<String>,
    pub is_published: Option<bool>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PostRepositoryError {
    #[error("Post not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create(&self, data: NewPost) -> Result<Post, PostRepositoryError>;

    async fn update(&self, post_id: &str, changes: PostChanges)
        -> Result<Post, PostRepositoryError>;

    async fn delete(&self, post_id: &str) -> Result<(), PostRepositoryError>;

    /// Flip `is_published` in one statement.
    async fn toggle_visibility(&self, post_id: &str) -> Result<Post, PostRepositoryError>;

    async fn increment_likes(&self, post_id: &str) -> Result<Post, PostRepositoryError>;

    /// Never goes below zero.
    async fn decrement_likes(&self, post_id: &str) -> Result<Post, PostRepositoryError>;

    /// Recompute both counters from `post_likes` and `comments`.
    async fn reconcile_counters(&self, post_id: &str) -> Result<Post, PostRepositoryError>;
}
