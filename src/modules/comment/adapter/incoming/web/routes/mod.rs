mod add_comment;
mod get_comments;

pub use add_comment::{__path_add_comment_handler, add_comment_handler, AddCommentRequest};
pub use get_comments::{__path_get_comments_handler, get_comments_handler};

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::comment::application::domain::{entities::Comment, CommentThread};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: String,
    pub post_id: String,
    pub author_id: String,
    pub content: String,
    pub parent_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Comment> for CommentResponse {
    fn from(c: Comment) -> Self {
        Self {
            id: c.id,
            post_id: c.post_id,
            author_id: c.author_id.into_inner(),
            content: c.content,
            parent_id: c.parent_id,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// Nesting is bounded by `MAX_REPLY_DEPTH` when built by `build_threads`.
#[derive(Debug, Serialize, ToSchema)]
pub struct CommentThreadResponse {
    #[serde(flatten)]
    pub comment: CommentResponse,
    #[schema(no_recursion)]
    pub replies: Vec<CommentThreadResponse>,
}

impl From<CommentThread> for CommentThreadResponse {
    fn from(thread: CommentThread) -> Self {
        Self {
            comment: CommentResponse::from(thread.comment),
            replies: thread.replies.into_iter().map(Self::from).collect(),
        }
    }
}
