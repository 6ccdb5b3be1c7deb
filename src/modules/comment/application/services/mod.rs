mod add_comment_service;
mod get_comments_service;

pub use add_comment_service::AddCommentService;
pub use get_comments_service::GetCommentsService;
