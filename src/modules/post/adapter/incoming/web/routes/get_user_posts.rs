use actix_web::{get, web, Responder};

use super::{post_list, PostResponse};
use crate::{
    api::schemas::ErrorResponse, auth::application::domain::entities::UserId,
    shared::api::ApiResponse, AppState,
};

#[utoipa::path(
    get,
    path = "/api/users/{user_id}/posts",
    tag = "Posts",
    params(("user_id" = String, Path, description = "Author id")),
    responses(
        (status = 200, description = "Published posts by the author, newest first", body = [PostResponse]),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[get("/api/users/{user_id}/posts")]
pub async fn get_user_posts_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let author_id = UserId::from(path.into_inner());

    match data.post.get_by_user.execute(&author_id).await {
        Ok(posts) => ApiResponse::success(post_list(posts)),
        Err(_) => ApiResponse::internal_error(),
    }
}
