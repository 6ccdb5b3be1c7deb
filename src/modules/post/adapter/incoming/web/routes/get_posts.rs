use actix_web::{get, web, Responder};

use super::{post_list, PostResponse};
use crate::{api::schemas::ErrorResponse, shared::api::ApiResponse, AppState};

#[utoipa::path(
    get,
    path = "/api/posts",
    tag = "Posts",
    responses(
        (status = 200, description = "Published posts, newest first", body = [PostResponse]),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[get("/api/posts")]
pub async fn get_posts_handler(data: web::Data<AppState>) -> impl Responder {
    match data.post.get_list.execute().await {
        Ok(posts) => ApiResponse::success(post_list(posts)),
        Err(_) => ApiResponse::internal_error(),
    }
}
