use actix_web::web;
use std::sync::Arc;

use crate::bookmark::application::bookmark_use_cases::BookmarkUseCases;
use crate::comment::application::{
    comment_use_cases::CommentUseCases,
    ports::incoming::use_cases::{AddCommentUseCase, GetCommentsUseCase},
};
use crate::engagement::application::like_use_cases::LikeUseCases;
use crate::playlist::application::{
    domain::policies::upload_policy::UploadPolicy, playlist_use_cases::PlaylistUseCases,
};
use crate::post::application::post_use_cases::PostUseCases;
use crate::tests::support::{in_memory::*, stubs::*};
use crate::user::application::{
    ports::incoming::use_cases::{GetUserByIdUseCase, GetUsersUseCase},
    user_use_cases::UserUseCases,
};
use crate::AppState;

/// Builds an `AppState` for route tests. Anything not overridden gets a working default.
pub struct TestAppStateBuilder {
    get_users: Arc<dyn GetUsersUseCase + Send + Sync>,
    get_user_by_id: Arc<dyn GetUserByIdUseCase + Send + Sync>,
    get_comments: Arc<dyn GetCommentsUseCase + Send + Sync>,
    add_comment: Arc<dyn AddCommentUseCase + Send + Sync>,
    likes: LikeUseCases,
    bookmarks: BookmarkUseCases,
    posts: PostUseCases,
    playlists: PlaylistUseCases,
    upload_policy: UploadPolicy,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            get_users: Arc::new(StubGetUsersUseCase::success(vec![])),
            get_user_by_id: Arc::new(StubGetUserByIdUseCase::not_found()),
            get_comments: Arc::new(StubGetCommentsUseCase::returning(vec![])),
            add_comment: Arc::new(StubAddCommentUseCase::echo()),
            likes: in_memory_like_use_cases(),
            bookmarks: in_memory_bookmark_use_cases().0,
            posts: in_memory_post_use_cases().0,
            playlists: in_memory_playlist_use_cases().0,
            upload_policy: UploadPolicy::default(),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_get_users(mut self, uc: impl GetUsersUseCase + Send + Sync + 'static) -> Self {
        self.get_users = Arc::new(uc);
        self
    }

    pub fn with_get_user_by_id(
        mut self,
        uc: impl GetUserByIdUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_user_by_id = Arc::new(uc);
        self
    }

    pub fn with_get_comments(
        mut self,
        uc: impl GetCommentsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_comments = Arc::new(uc);
        self
    }

    pub fn with_add_comment(mut self, uc: impl AddCommentUseCase + Send + Sync + 'static) -> Self {
        self.add_comment = Arc::new(uc);
        self
    }

    pub fn with_likes(mut self, likes: impl Into<LikeUseCases>) -> Self {
        self.likes = likes.into();
        self
    }

    pub fn with_bookmarks(mut self, bookmarks: BookmarkUseCases) -> Self {
        self.bookmarks = bookmarks;
        self
    }

    pub fn with_posts(mut self, posts: PostUseCases) -> Self {
        self.posts = posts;
        self
    }

    pub fn with_playlists(mut self, playlists: PlaylistUseCases) -> Self {
        self.playlists = playlists;
        self
    }

    /// Cap cover uploads at `max_bytes`.
    pub fn with_upload_limit(mut self, max_bytes: u64) -> Self {
        self.upload_policy.max_file_size_bytes = max_bytes;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            post: self.posts,
            like: self.likes,
            comment: CommentUseCases {
                get_threads: self.get_comments,
                add: self.add_comment,
            },
            bookmark: self.bookmarks,
            playlist: self.playlists,
            user: UserUseCases {
                get_list: self.get_users,
                get_single: self.get_user_by_id,
            },
            playlist_upload_policy: self.upload_policy,
        })
    }
}
