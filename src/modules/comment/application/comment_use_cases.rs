use std::sync::Arc;

use crate::comment::application::ports::incoming::use_cases::{
    AddCommentUseCase, GetCommentsUseCase,
};

#[derive(Clone)]
pub struct CommentUseCases {
    pub get_threads: Arc<dyn GetCommentsUseCase + Send + Sync>,
    pub add: Arc<dyn AddCommentUseCase + Send + Sync>,
}
