use std::sync::Arc;

use crate::bookmark::application::ports::incoming::use_cases::{
    AddBookmarkUseCase, GetBookmarksUseCase, IsBookmarkedUseCase, RemoveBookmarkUseCase,
};

#[derive(Clone)]
pub struct BookmarkUseCases {
    pub add: Arc<dyn AddBookmarkUseCase + Send + Sync>,
    pub remove: Arc<dyn RemoveBookmarkUseCase + Send + Sync>,
    pub status: Arc<dyn IsBookmarkedUseCase + Send + Sync>,
    pub list: Arc<dyn GetBookmarksUseCase + Send + Sync>,
}
