mod get_likes;
mod toggle_like;

pub use get_likes::{__path_get_likes_handler, get_likes_handler};
pub use toggle_like::{__path_toggle_like_handler, toggle_like_handler};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{auth::application::domain::entities::UserId, AppState};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LikeSummaryResponse {
    pub like_count: u64,
    pub liked: bool,
}

async fn like_summary(
    state: &AppState,
    post_id: &str,
    viewer: Option<&UserId>,
) -> LikeSummaryResponse {
    let like_count = state.like.count.execute(post_id).await;
    let liked = match viewer {
        Some(user_id) => state.like.has_liked.execute(post_id, user_id).await,
        None => false,
    };

    LikeSummaryResponse { like_count, liked }
}
