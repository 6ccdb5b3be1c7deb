use actix_web::{get, web, Responder};

use super::CommentThreadResponse;
use crate::{shared::api::ApiResponse, AppState};

#[utoipa::path(
    get,
    path = "/api/posts/{post_id}/comments",
    tag = "Comments",
    params(("post_id" = String, Path, description = "Post id")),
    responses(
        (status = 200, description = "Comment threads, oldest root first", body = [CommentThreadResponse])
    )
)]
#[get("/api/posts/{post_id}/comments")]
pub async fn get_comments_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();

    let threads = data.comment.get_threads.execute(&post_id).await;

    ApiResponse::success(
        threads
            .into_iter()
            .map(CommentThreadResponse::from)
            .collect::<Vec<_>>(),
    )
}
