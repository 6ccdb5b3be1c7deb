use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    comment::application::domain::entities::Comment,
};

//
// ──────────────────────────────────────────────────────────
// Add Comment Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct AddCommentCommand {
    post_id: String,
    author_id: UserId,
    content: String,
    parent_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AddCommentCommandError {
    #[error("Comment content cannot be empty")]
    EmptyContent,

    #[error("Post id cannot be empty")]
    EmptyPostId,
}

impl AddCommentCommand {
    pub fn new(
        post_id: String,
        author_id: UserId,
        content: String,
        parent_id: Option<String>,
    ) -> Result<Self, AddCommentCommandError> {
        let post_id = post_id.trim();
        if post_id.is_empty() {
            return Err(AddCommentCommandError::EmptyPostId);
        }

        let content = content.trim();
        if content.is_empty() {
            return Err(AddCommentCommandError::EmptyContent);
        }

        // An empty parent id means a top-level comment.
        let parent_id = parent_id
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());

        Ok(Self {
            post_id: post_id.to_string(),
            author_id,
            content: content.to_string(),
            parent_id,
        })
    }

    pub fn post_id(&self) -> &str {
        &self.post_id
    }

    pub fn author_id(&self) -> &UserId {
        &self.author_id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn parent_id(&self) -> Option<&str> {
        self.parent_id.as_deref()
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

/// Returns the stored comment, or `None` when the write failed.
#[async_trait]
pub trait AddCommentUseCase: Send + Sync {
    async fn execute(&self, command: AddCommentCommand) -> Option<Comment>;
}
