use actix_web::{patch, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use super::{map_manage_post_error, PostResponse};
use crate::{
    api::schemas::ErrorResponse,
    auth::adapter::incoming::web::extractors::AuthenticatedUser,
    post::application::ports::incoming::use_cases::{UpdatePostCommand, UpdatePostCommandError},
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    pub content: Option<String>,
    pub is_published: Option<bool>,
}

#[utoipa::path(
    patch,
    path = "/api/posts/{post_id}",
    tag = "Posts",
    params(("post_id" = String, Path, description = "Post id")),
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "Updated post", body = PostResponse),
        (status = 400, description = "Empty content or nothing to update", body = ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 403, description = "Caller is not the author", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[patch("/api/posts/{post_id}")]
pub async fn update_post_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    payload: web::Json<UpdatePostRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let payload = payload.into_inner();

    let command = match UpdatePostCommand::new(
        path.into_inner(),
        user.user_id,
        payload.content,
        payload.is_published,
    ) {
        Ok(cmd) => cmd,
        Err(UpdatePostCommandError::EmptyContent) => {
            return ApiResponse::bad_request("EMPTY_CONTENT", "Post content cannot be empty")
        }
        Err(UpdatePostCommandError::NothingToUpdate) => {
            return ApiResponse::bad_request("NOTHING_TO_UPDATE", "No fields to update")
        }
    };

    match data.post.update.execute(command).await {
        Ok(post) => ApiResponse::success(PostResponse::from(post)),
        Err(e) => map_manage_post_error(e),
    }
}
