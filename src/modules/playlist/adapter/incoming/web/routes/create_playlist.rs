use actix_multipart::Multipart;
use actix_web::{post, web, HttpResponse, Responder};
use tracing::error;

use super::{
    form::{map_command_error, map_form_error, PlaylistForm},
    PlaylistResponse, PlaylistUploadForm,
};
use crate::{api::schemas::ErrorResponse, shared::api::ApiResponse, AppState};

#[utoipa::path(
    post,
    path = "/api/playlist",
    tag = "Playlists",
    request_body(content = PlaylistUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "The stored playlist row", body = PlaylistResponse),
        (status = 400, description = "MISSING_FIELDS, INVALID_MIME_TYPE or INVALID_FORM", body = ErrorResponse),
        (status = 413, description = "Cover image too large", body = ErrorResponse)
    )
)]
#[post("/api/playlist")]
pub async fn create_playlist_handler(
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let policy = &data.playlist_upload_policy;

    let form = match PlaylistForm::read(payload, policy.max_file_size_bytes).await {
        Ok(form) => form,
        Err(e) => return map_form_error(e),
    };

    let command = match form.into_builder().build(policy) {
        Ok(cmd) => cmd,
        Err(e) => return map_command_error(e),
    };

    match data.playlist.create.execute(command).await {
        Ok(playlist) => HttpResponse::Ok().json(PlaylistResponse::from(playlist)),
        Err(e) => {
            error!("Failed to create playlist: {}", e);
            ApiResponse::internal_error()
        }
    }
}
