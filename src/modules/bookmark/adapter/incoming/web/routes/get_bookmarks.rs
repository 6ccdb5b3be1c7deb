use actix_web::{get, web, Responder};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    auth::adapter::incoming::web::extractors::AuthenticatedUser,
    bookmark::application::domain::entities::Bookmark, shared::api::ApiResponse, AppState,
};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkResponse {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub target_id: String,
    pub created_at: DateTime<Utc>,
}

impl From<Bookmark> for BookmarkResponse {
    fn from(b: Bookmark) -> Self {
        Self {
            id: b.id,
            kind: b.target.kind().to_string(),
            target_id: b.target.target_id(),
            created_at: b.created_at,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/bookmarks",
    tag = "Bookmarks",
    responses(
        (status = 200, description = "Caller's bookmarks, newest first", body = [BookmarkResponse]),
        (status = 401, description = "Missing or invalid bearer token")
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/bookmarks")]
pub async fn get_bookmarks_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    let bookmarks = data.bookmark.list.execute(&user.user_id).await;

    ApiResponse::success(
        bookmarks
            .into_iter()
            .map(BookmarkResponse::from)
            .collect::<Vec<_>>(),
    )
}
