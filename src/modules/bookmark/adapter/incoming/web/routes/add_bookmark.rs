use actix_web::{post, web, Responder};

use super::{BookmarkStatusResponse, BookmarkTargetRequest};
use crate::{
    auth::adapter::incoming::web::extractors::AuthenticatedUser, shared::api::ApiResponse,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/bookmarks",
    tag = "Bookmarks",
    request_body = BookmarkTargetRequest,
    responses(
        (status = 201, description = "Target is bookmarked", body = BookmarkStatusResponse),
        (status = 400, description = "Unknown type or malformed target id"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 500, description = "Bookmark could not be stored")
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/bookmarks")]
pub async fn add_bookmark_handler(
    user: AuthenticatedUser,
    payload: web::Json<BookmarkTargetRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let target = match payload.to_target() {
        Ok(target) => target,
        Err(resp) => return resp,
    };

    if data.bookmark.add.execute(&user.user_id, &target).await {
        ApiResponse::created(BookmarkStatusResponse { bookmarked: true })
    } else {
        ApiResponse::internal_error()
    }
}
