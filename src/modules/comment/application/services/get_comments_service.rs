use async_trait::async_trait;

use crate::comment::application::{
    domain::{build_threads, CommentThread, ThreadShape},
    ports::{incoming::use_cases::GetCommentsUseCase, outgoing::CommentQuery},
};

#[derive(Debug, Clone)]
pub struct GetCommentsService<Q>
where
    Q: CommentQuery + Send + Sync,
{
    query: Q,
    shape: ThreadShape,
}

impl<Q> GetCommentsService<Q>
where
    Q: CommentQuery + Send + Sync,
{
    pub fn new(query: Q, shape: ThreadShape) -> Self {
        Self { query, shape }
    }
}

#[async_trait]
impl<Q> GetCommentsUseCase for GetCommentsService<Q>
where
    Q: CommentQuery + Send + Sync,
{
    async fn execute(&self, post_id: &str) -> Vec<CommentThread> {
        match self.query.comments_for_post(post_id).await {
            Ok(comments) => build_threads(comments, self.shape),
            Err(e) => {
                tracing::error!(post_id, error = %e, "Failed to load comments");
                Vec::new()
            }
        }
    }
}
