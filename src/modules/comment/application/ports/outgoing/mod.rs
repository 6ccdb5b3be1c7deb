mod comment_query;
mod comment_repository;

pub use comment_query::{CommentQuery, CommentQueryError};
pub use comment_repository::{CommentRepository, CommentRepositoryError, NewComment};
