use actix_web::{get, web, Responder};

use super::{like_summary, LikeSummaryResponse};
use crate::{
    auth::adapter::incoming::web::extractors::AuthenticatedUser, shared::api::ApiResponse,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/posts/{post_id}/likes",
    tag = "Likes",
    params(("post_id" = String, Path, description = "Post id")),
    responses(
        (status = 200, description = "Like count and whether the caller liked the post", body = LikeSummaryResponse)
    )
)]
#[get("/api/posts/{post_id}/likes")]
pub async fn get_likes_handler(
    user: Option<AuthenticatedUser>,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();
    let viewer = user.map(|u| u.user_id);

    ApiResponse::success(like_summary(&data, &post_id, viewer.as_ref()).await)
}
