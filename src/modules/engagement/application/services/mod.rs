mod get_like_count_service;
mod has_user_liked_service;
mod toggle_like_service;

pub use get_like_count_service::GetLikeCountService;
pub use has_user_liked_service::HasUserLikedService;
pub use toggle_like_service::ToggleLikeService;
