use actix_web::{delete, web, HttpResponse, Responder};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use super::DeletePlaylistResponse;
use crate::{shared::api::ApiResponse, AppState};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DeletePlaylistQuery {
    /// Playlist UUID
    pub id: Option<String>,
}

#[utoipa::path(
    delete,
    path = "/api/playlist",
    tag = "Playlists",
    params(DeletePlaylistQuery),
    responses(
        (status = 200, description = "Playlist removed (or already absent)", body = DeletePlaylistResponse),
        (status = 400, description = "Missing or malformed id")
    )
)]
#[delete("/api/playlist")]
pub async fn delete_playlist_handler(
    query: web::Query<DeletePlaylistQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(raw_id) = query.id.as_deref().map(str::trim).filter(|s| !s.is_empty()) else {
        return ApiResponse::bad_request("MISSING_ID", "Missing id");
    };
    let Ok(id) = Uuid::parse_str(raw_id) else {
        return ApiResponse::bad_request("INVALID_ID", "Playlist id must be a UUID");
    };

    match data.playlist.delete.execute(id).await {
        Ok(()) => HttpResponse::Ok().json(DeletePlaylistResponse { success: true }),
        Err(_) => ApiResponse::internal_error(),
    }
}
