use actix_web::{post, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use super::PostResponse;
use crate::{
    api::schemas::ErrorResponse,
    auth::adapter::incoming::web::extractors::AuthenticatedUser,
    post::application::ports::incoming::use_cases::{CreatePostCommand, CreatePostCommandError},
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub content: String,
    pub is_published: Option<bool>,
}

#[utoipa::path(
    post,
    path = "/api/posts",
    tag = "Posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created", body = PostResponse),
        (status = 400, description = "Empty content", body = ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/posts")]
pub async fn create_post_handler(
    user: AuthenticatedUser,
    payload: web::Json<CreatePostRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let payload = payload.into_inner();

    let command = match CreatePostCommand::new(user.user_id, payload.content, payload.is_published)
    {
        Ok(cmd) => cmd,
        Err(CreatePostCommandError::EmptyContent) => {
            return ApiResponse::bad_request("EMPTY_CONTENT", "Post content cannot be empty")
        }
    };

    match data.post.create.execute(command).await {
        Ok(post) => ApiResponse::created(PostResponse::from(post)),
        Err(_) => ApiResponse::internal_error(),
    }
}
