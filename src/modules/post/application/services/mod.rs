mod create_post_service;
mod get_posts_service;
mod manage_post_service;
mod post_counters_service;

pub use create_post_service::CreatePostService;
pub use get_posts_service::GetPostsService;
pub use manage_post_service::ManagePostService;
pub use post_counters_service::PostCountersService;
