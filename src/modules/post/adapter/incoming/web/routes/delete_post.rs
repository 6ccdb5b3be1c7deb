use actix_web::{delete, web, HttpResponse, Responder};

use super::map_manage_post_error;
use crate::{
    api::schemas::ErrorResponse, auth::adapter::incoming::web::extractors::AuthenticatedUser,
    AppState,
};

#[utoipa::path(
    delete,
    path = "/api/posts/{post_id}",
    tag = "Posts",
    params(("post_id" = String, Path, description = "Post id")),
    responses(
        (status = 204, description = "Post deleted"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 403, description = "Caller is not the author", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[delete("/api/posts/{post_id}")]
pub async fn delete_post_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();

    match data.post.delete.execute(&post_id, &user.user_id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => map_manage_post_error(e),
    }
}
