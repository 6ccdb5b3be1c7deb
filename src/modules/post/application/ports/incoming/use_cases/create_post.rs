use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId, post::application::domain::entities::Post,
};

//
// ──────────────────────────────────────────────────────────
// Create Post Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreatePostCommand {
    author_id: UserId,
    content: String,
    is_published: bool,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreatePostCommandError {
    #[error("Post content cannot be empty")]
    EmptyContent,
}

impl CreatePostCommand {
    /// Posts are published unless the caller says otherwise.
    pub fn new(
        author_id: UserId,
        content: String,
        is_published: Option<bool>,
    ) -> Result<Self, CreatePostCommandError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(CreatePostCommandError::EmptyContent);
        }

        Ok(Self {
            author_id,
            content: content.to_string(),
            is_published: is_published.unwrap_or(true),
        })
    }

    pub fn author_id(&self) -> &UserId {
        &self.author_id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_published(&self) -> bool {
        self.is_published
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreatePostError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreatePostUseCase: Send + Sync {
    async fn execute(&self, command: CreatePostCommand) -> Result<Post, CreatePostError>;
}
