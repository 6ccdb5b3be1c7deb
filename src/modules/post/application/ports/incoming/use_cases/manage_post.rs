use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId, post::application::domain::entities::Post,
};

//
// ──────────────────────────────────────────────────────────
// Update Post Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct UpdatePostCommand {
    post_id: String,
    actor: UserId,
    content: Option<String>,
    is_published: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpdatePostCommandError {
    #[error("Post content cannot be empty")]
    EmptyContent,

    #[error("Nothing to update")]
    NothingToUpdate,
}

impl UpdatePostCommand {
    pub fn new(
        post_id: String,
        actor: UserId,
        content: Option<String>,
        is_published: Option<bool>,
    ) -> Result<Self, UpdatePostCommandError> {
        let content = match content {
            Some(c) => {
                let trimmed = c.trim();
                if trimmed.is_empty() {
                    return Err(UpdatePostCommandError::EmptyContent);
                }
                Some(trimmed.to_string())
            }
            None => None,
        };

        if content.is_none() && is_published.is_none() {
            return Err(UpdatePostCommandError::NothingToUpdate);
        }

        Ok(Self {
            post_id,
            actor,
            content,
            is_published,
        })
    }

    pub fn post_id(&self) -> &str {
        &self.post_id
    }

    pub fn actor(&self) -> &UserId {
        &self.actor
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn is_published(&self) -> Option<bool> {
        self.is_published
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Cases (author only)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ManagePostError {
    #[error("Post not found")]
    PostNotFound,

    #[error("Only the author can change this post")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdatePostUseCase: Send + Sync {
    async fn execute(&self, command: UpdatePostCommand) -> Result<Post, ManagePostError>;
}

#[async_trait]
pub trait DeletePostUseCase: Send + Sync {
    async fn execute(&self, post_id: &str, actor: &UserId) -> Result<(), ManagePostError>;
}

#[async_trait]
pub trait TogglePostVisibilityUseCase: Send + Sync {
    async fn execute(&self, post_id: &str, actor: &UserId) -> Result<Post, ManagePostError>;
}
