use actix_web::{delete, web, Responder};

use super::{BookmarkStatusResponse, BookmarkTargetRequest};
use crate::{
    auth::adapter::incoming::web::extractors::AuthenticatedUser, shared::api::ApiResponse,
    AppState,
};

#[utoipa::path(
    delete,
    path = "/api/bookmarks",
    tag = "Bookmarks",
    params(BookmarkTargetRequest),
    responses(
        (status = 200, description = "Target is no longer bookmarked", body = BookmarkStatusResponse),
        (status = 400, description = "Unknown type or malformed target id"),
        (status = 401, description = "Missing or invalid bearer token")
    ),
    security(("bearer_auth" = []))
)]
#[delete("/api/bookmarks")]
pub async fn remove_bookmark_handler(
    user: AuthenticatedUser,
    query: web::Query<BookmarkTargetRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let target = match query.to_target() {
        Ok(target) => target,
        Err(resp) => return resp,
    };

    if data.bookmark.remove.execute(&user.user_id, &target).await {
        ApiResponse::success(BookmarkStatusResponse { bookmarked: false })
    } else {
        ApiResponse::internal_error()
    }
}
