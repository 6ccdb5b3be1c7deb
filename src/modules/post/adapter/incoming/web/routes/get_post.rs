use actix_web::{get, web, Responder};

use super::{post_not_found, PostResponse};
use crate::{api::schemas::ErrorResponse, shared::api::ApiResponse, AppState};

#[utoipa::path(
    get,
    path = "/api/posts/{post_id}",
    tag = "Posts",
    params(("post_id" = String, Path, description = "Post id")),
    responses(
        (status = 200, description = "Single post", body = PostResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[get("/api/posts/{post_id}")]
pub async fn get_post_handler(path: web::Path<String>, data: web::Data<AppState>) -> impl Responder {
    let post_id = path.into_inner();

    match data.post.get_single.execute(&post_id).await {
        Ok(Some(post)) => ApiResponse::success(PostResponse::from(post)),
        Ok(None) => post_not_found(),
        Err(_) => ApiResponse::internal_error(),
    }
}
