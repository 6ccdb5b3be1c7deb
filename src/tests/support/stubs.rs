use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::comment::application::{
    domain::{entities::Comment, CommentThread},
    ports::incoming::use_cases::{AddCommentCommand, AddCommentUseCase, GetCommentsUseCase},
};
use crate::engagement::application::{
    domain::entities::LikeState,
    like_use_cases::LikeUseCases,
    ports::incoming::use_cases::{GetLikeCountUseCase, HasUserLikedUseCase, ToggleLikeUseCase},
};
use crate::user::application::{
    domain::entities::User,
    ports::incoming::use_cases::{
        GetUserByIdError, GetUserByIdUseCase, GetUsersError, GetUsersUseCase,
    },
};

// ──────────────────────────────────────────────────────────
// Users
// ──────────────────────────────────────────────────────────

pub fn sample_user(id: &str, name: &str) -> User {
    let now = Utc::now();
    User {
        id: UserId::from(id),
        name: name.to_string(),
        email: format!("{}@example.com", id),
        email_verified: true,
        image: None,
        created_at: now,
        updated_at: now,
    }
}

#[derive(Clone)]
pub struct StubGetUsersUseCase {
    result: Result<Vec<User>, GetUsersError>,
}

impl StubGetUsersUseCase {
    pub fn success(users: Vec<User>) -> Self {
        Self { result: Ok(users) }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(GetUsersError::QueryFailed(msg.to_string())),
        }
    }
}

#[async_trait]
impl GetUsersUseCase for StubGetUsersUseCase {
    async fn execute(&self) -> Result<Vec<User>, GetUsersError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetUserByIdUseCase {
    user: Option<User>,
}

impl StubGetUserByIdUseCase {
    pub fn found(user: User) -> Self {
        Self { user: Some(user) }
    }

    pub fn not_found() -> Self {
        Self { user: None }
    }
}

#[async_trait]
impl GetUserByIdUseCase for StubGetUserByIdUseCase {
    async fn execute(&self, _user_id: &UserId) -> Result<User, GetUserByIdError> {
        self.user.clone().ok_or(GetUserByIdError::UserNotFound)
    }
}

// ──────────────────────────────────────────────────────────
// Comments
// ──────────────────────────────────────────────────────────

pub fn sample_comment(id: &str, parent_id: Option<&str>) -> Comment {
    let now = Utc::now();
    Comment {
        id: id.to_string(),
        post_id: "p1".to_string(),
        author_id: UserId::from("u1"),
        content: format!("comment {}", id),
        parent_id: parent_id.map(str::to_string),
        created_at: now,
        updated_at: now,
    }
}

#[derive(Clone, Default)]
pub struct StubGetCommentsUseCase {
    threads: Vec<CommentThread>,
}

impl StubGetCommentsUseCase {
    pub fn returning(threads: Vec<CommentThread>) -> Self {
        Self { threads }
    }
}

#[async_trait]
impl GetCommentsUseCase for StubGetCommentsUseCase {
    async fn execute(&self, _post_id: &str) -> Vec<CommentThread> {
        self.threads.clone()
    }
}

/// Echoes the command back as a stored comment, or fails; counts calls either way.
#[derive(Clone)]
pub struct StubAddCommentUseCase {
    fail: bool,
    calls: Arc<AtomicUsize>,
}

impl StubAddCommentUseCase {
    pub fn echo() -> Self {
        Self {
            fail: false,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::echo()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AddCommentUseCase for StubAddCommentUseCase {
    async fn execute(&self, command: AddCommentCommand) -> Option<Comment> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return None;
        }

        let now = Utc::now();
        Some(Comment {
            id: Uuid::new_v4().to_string(),
            post_id: command.post_id().to_string(),
            author_id: command.author_id().clone(),
            content: command.content().to_string(),
            parent_id: command.parent_id().map(str::to_string),
            created_at: now,
            updated_at: now,
        })
    }
}

// ──────────────────────────────────────────────────────────
// Likes
// ──────────────────────────────────────────────────────────

/// Fixed answers for every like use case.
#[derive(Clone)]
pub struct StubLikeUseCases {
    count: u64,
    liked: bool,
    toggle_result: Option<LikeState>,
}

impl StubLikeUseCases {
    pub fn new(count: u64, liked: bool) -> Self {
        Self {
            count,
            liked,
            toggle_result: Some(if liked {
                LikeState::Liked
            } else {
                LikeState::NotLiked
            }),
        }
    }

    pub fn failing_toggle() -> Self {
        Self {
            toggle_result: None,
            ..Self::new(0, false)
        }
    }

    /// State reported by the toggle use case.
    pub fn toggling_to(mut self, state: LikeState) -> Self {
        self.toggle_result = Some(state);
        self
    }
}

#[async_trait]
impl GetLikeCountUseCase for StubLikeUseCases {
    async fn execute(&self, _post_id: &str) -> u64 {
        self.count
    }
}

#[async_trait]
impl HasUserLikedUseCase for StubLikeUseCases {
    async fn execute(&self, _post_id: &str, _user_id: &UserId) -> bool {
        self.liked
    }
}

#[async_trait]
impl ToggleLikeUseCase for StubLikeUseCases {
    async fn execute(&self, _post_id: &str, _user_id: &UserId) -> Option<LikeState> {
        self.toggle_result
    }
}

impl From<StubLikeUseCases> for LikeUseCases {
    fn from(stub: StubLikeUseCases) -> Self {
        let stub = Arc::new(stub);
        LikeUseCases {
            count: stub.clone(),
            has_liked: stub.clone(),
            toggle: stub,
        }
    }
}
