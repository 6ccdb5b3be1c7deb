mod create_post;
mod get_posts;
mod manage_post;
mod post_counters;

pub use create_post::{CreatePostCommand, CreatePostCommandError, CreatePostError, CreatePostUseCase};
pub use get_posts::{GetPostByIdUseCase, GetPostsByUserUseCase, GetPostsError, GetPostsUseCase};
pub use manage_post::{
    DeletePostUseCase, ManagePostError, TogglePostVisibilityUseCase, UpdatePostCommand,
    UpdatePostCommandError, UpdatePostUseCase,
};
pub use post_counters::{AdjustLikesCountUseCase, PostCounterError, ReconcilePostCountersUseCase};
