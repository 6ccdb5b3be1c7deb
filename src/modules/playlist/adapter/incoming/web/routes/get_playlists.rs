use actix_web::{get, web, HttpResponse, Responder};

use super::PlaylistResponse;
use crate::{shared::api::ApiResponse, AppState};

#[utoipa::path(
    get,
    path = "/api/playlist",
    tag = "Playlists",
    responses(
        (status = 200, description = "All playlists, newest first", body = [PlaylistResponse]),
        (status = 500, description = "Storage failure")
    )
)]
#[get("/api/playlist")]
pub async fn get_playlists_handler(data: web::Data<AppState>) -> impl Responder {
    match data.playlist.get_list.execute().await {
        Ok(playlists) => HttpResponse::Ok().json(
            playlists
                .into_iter()
                .map(PlaylistResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(_) => ApiResponse::internal_error(),
    }
}
