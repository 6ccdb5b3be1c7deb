mod add_comment;
mod get_comments;

pub use add_comment::{AddCommentCommand, AddCommentCommandError, AddCommentUseCase};
pub use get_comments::GetCommentsUseCase;
