use std::sync::Arc;

use crate::engagement::application::ports::incoming::use_cases::{
    GetLikeCountUseCase, HasUserLikedUseCase, ToggleLikeUseCase,
};

#[derive(Clone)]
pub struct LikeUseCases {
    pub count: Arc<dyn GetLikeCountUseCase + Send + Sync>,
    pub has_liked: Arc<dyn HasUserLikedUseCase + Send + Sync>,
    pub toggle: Arc<dyn ToggleLikeUseCase + Send + Sync>,
}
