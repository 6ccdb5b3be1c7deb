use actix_web::{post, web, Responder};

use super::{map_counter_error, PostResponse};
use crate::{
    api::schemas::ErrorResponse, auth::adapter::incoming::web::extractors::AuthenticatedUser,
    shared::api::ApiResponse, AppState,
};

// Maintenance endpoints for the denormalized counters on `posts`. Any
// authenticated caller may adjust any post; there is no author check.

#[utoipa::path(
    post,
    path = "/api/posts/{post_id}/likes-count/increment",
    tag = "Posts",
    params(("post_id" = String, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post after the increment", body = PostResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/posts/{post_id}/likes-count/increment")]
pub async fn increment_likes_handler(
    _user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.post.likes_count.increment(&path.into_inner()).await {
        Ok(post) => ApiResponse::success(PostResponse::from(post)),
        Err(e) => map_counter_error(e),
    }
}

#[utoipa::path(
    post,
    path = "/api/posts/{post_id}/likes-count/decrement",
    tag = "Posts",
    params(("post_id" = String, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post after the decrement, floored at zero", body = PostResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/posts/{post_id}/likes-count/decrement")]
pub async fn decrement_likes_handler(
    _user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.post.likes_count.decrement(&path.into_inner()).await {
        Ok(post) => ApiResponse::success(PostResponse::from(post)),
        Err(e) => map_counter_error(e),
    }
}

#[utoipa::path(
    post,
    path = "/api/posts/{post_id}/counters/reconcile",
    tag = "Posts",
    params(("post_id" = String, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post with recomputed counters", body = PostResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/posts/{post_id}/counters/reconcile")]
pub async fn reconcile_counters_handler(
    _user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.post.reconcile.execute(&path.into_inner()).await {
        Ok(post) => ApiResponse::success(PostResponse::from(post)),
        Err(e) => map_counter_error(e),
    }
}
