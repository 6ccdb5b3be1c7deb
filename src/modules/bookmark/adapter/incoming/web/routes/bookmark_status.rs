use actix_web::{get, web, Responder};

use super::{BookmarkStatusResponse, BookmarkTargetRequest};
use crate::{
    auth::adapter::incoming::web::extractors::AuthenticatedUser, shared::api::ApiResponse,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/bookmarks/status",
    tag = "Bookmarks",
    params(BookmarkTargetRequest),
    responses(
        (status = 200, description = "Whether the caller bookmarked the target", body = BookmarkStatusResponse),
        (status = 400, description = "Unknown type or malformed target id"),
        (status = 401, description = "Missing or invalid bearer token")
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/bookmarks/status")]
pub async fn bookmark_status_handler(
    user: AuthenticatedUser,
    query: web::Query<BookmarkTargetRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let target = match query.to_target() {
        Ok(target) => target,
        Err(resp) => return resp,
    };

    let bookmarked = data.bookmark.status.execute(&user.user_id, &target).await;

    ApiResponse::success(BookmarkStatusResponse { bookmarked })
}
