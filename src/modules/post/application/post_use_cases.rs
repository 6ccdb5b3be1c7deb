use std::sync::Arc;

use crate::post::application::ports::incoming::use_cases::{
    AdjustLikesCountUseCase, CreatePostUseCase, DeletePostUseCase, GetPostByIdUseCase,
    GetPostsByUserUseCase, GetPostsUseCase, ReconcilePostCountersUseCase,
    TogglePostVisibilityUseCase, UpdatePostUseCase,
};

#[derive(Clone)]
pub struct PostUseCases {
    pub create: Arc<dyn CreatePostUseCase + Send + Sync>,
    pub update: Arc<dyn UpdatePostUseCase + Send + Sync>,
    pub delete: Arc<dyn DeletePostUseCase + Send + Sync>,
    pub toggle_visibility: Arc<dyn TogglePostVisibilityUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetPostsUseCase + Send + Sync>,
    pub get_by_user: Arc<dyn GetPostsByUserUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetPostByIdUseCase + Send + Sync>,
    pub likes_count: Arc<dyn AdjustLikesCountUseCase + Send + Sync>,
    pub reconcile: Arc<dyn ReconcilePostCountersUseCase + Send + Sync>,
}
