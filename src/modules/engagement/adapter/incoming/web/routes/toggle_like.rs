use actix_web::{post, web, Responder};

use super::LikeSummaryResponse;
use crate::{
    auth::adapter::incoming::web::extractors::AuthenticatedUser, shared::api::ApiResponse,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/posts/{post_id}/likes/toggle",
    tag = "Likes",
    params(("post_id" = String, Path, description = "Post id")),
    responses(
        (status = 200, description = "Like state after the toggle", body = LikeSummaryResponse),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 500, description = "Toggle could not be stored")
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/posts/{post_id}/likes/toggle")]
pub async fn toggle_like_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();

    let Some(state) = data.like.toggle.execute(&post_id, &user.user_id).await else {
        return ApiResponse::internal_error();
    };

    ApiResponse::success(LikeSummaryResponse {
        like_count: data.like.count.execute(&post_id).await,
        liked: state.is_liked(),
    })
}
