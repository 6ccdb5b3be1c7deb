use async_trait::async_trait;

use crate::comment::application::{
    domain::entities::Comment,
    ports::{
        incoming::use_cases::{AddCommentCommand, AddCommentUseCase},
        outgoing::{CommentRepository, NewComment},
    },
};

#[derive(Debug, Clone)]
pub struct AddCommentService<R>
where
    R: CommentRepository + Send + Sync,
{
    repository: R,
}

impl<R> AddCommentService<R>
where
    R: CommentRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> AddCommentUseCase for AddCommentService<R>
where
    R: CommentRepository + Send + Sync,
{
    async fn execute(&self, command: AddCommentCommand) -> Option<Comment> {
        let data = NewComment {
            post_id: command.post_id().to_string(),
            author_id: command.author_id().clone(),
            content: command.content().to_string(),
            parent_id: command.parent_id().map(str::to_string),
        };

        match self.repository.insert_comment(data).await {
            Ok(comment) => Some(comment),
            Err(e) => {
                tracing::error!(
                    post_id = command.post_id(),
                    author_id = %command.author_id(),
                    error = %e,
                    "Failed to add comment"
                );
                None
            }
        }
    }
}
