use actix_web::{post, web, Responder};

use super::{map_manage_post_error, PostResponse};
use crate::{
    api::schemas::ErrorResponse, auth::adapter::incoming::web::extractors::AuthenticatedUser,
    shared::api::ApiResponse, AppState,
};

#[utoipa::path(
    post,
    path = "/api/posts/{post_id}/visibility/toggle",
    tag = "Posts",
    params(("post_id" = String, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post with flipped visibility", body = PostResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 403, description = "Caller is not the author", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/posts/{post_id}/visibility/toggle")]
pub async fn toggle_post_visibility_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();

    match data
        .post
        .toggle_visibility
        .execute(&post_id, &user.user_id)
        .await
    {
        Ok(post) => ApiResponse::success(PostResponse::from(post)),
        Err(e) => map_manage_post_error(e),
    }
}
