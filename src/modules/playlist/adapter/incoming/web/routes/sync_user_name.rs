use actix_web::{post, web, Responder};

use super::SyncUserNameResponse;
use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::AuthenticatedUser,
    shared::api::ApiResponse,
    AppState,
};

/// Rewrites the denormalized `userName` on the caller's playlists.
#[utoipa::path(
    post,
    path = "/api/playlist/sync-user-name",
    tag = "Playlists",
    responses(
        (status = 200, description = "Number of playlists rewritten", body = SuccessResponse<SyncUserNameResponse>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/playlist/sync-user-name")]
pub async fn sync_user_name_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.playlist.sync_user_name.execute(&user.user_id).await {
        Ok(updated) => ApiResponse::success(SyncUserNameResponse { updated }),
        Err(_) => ApiResponse::internal_error(),
    }
}
