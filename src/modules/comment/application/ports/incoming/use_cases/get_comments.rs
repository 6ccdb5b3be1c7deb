use async_trait::async_trait;

use crate::comment::application::domain::CommentThread;

/// Load the threads of a post. Storage failures yield an empty list.
#[async_trait]
pub trait GetCommentsUseCase: Send + Sync {
    async fn execute(&self, post_id: &str) -> Vec<CommentThread>;
}
