mod add_bookmark;
mod bookmark_status;
mod get_bookmarks;
mod remove_bookmark;

pub use add_bookmark::{__path_add_bookmark_handler, add_bookmark_handler};
pub use bookmark_status::{__path_bookmark_status_handler, bookmark_status_handler};
pub use get_bookmarks::{__path_get_bookmarks_handler, get_bookmarks_handler};
pub use remove_bookmark::{__path_remove_bookmark_handler, remove_bookmark_handler};

use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    bookmark::application::domain::entities::{BookmarkTarget, BookmarkTargetError},
    shared::api::ApiResponse,
};

/// Target selector shared by the body of `POST` and the query of `DELETE`/status.
#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct BookmarkTargetRequest {
    /// `post` or `playlist`
    #[serde(rename = "type")]
    pub kind: String,
    pub target_id: String,
}

impl BookmarkTargetRequest {
    fn to_target(&self) -> Result<BookmarkTarget, HttpResponse> {
        BookmarkTarget::parse(&self.kind, &self.target_id).map_err(map_target_error)
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookmarkStatusResponse {
    pub bookmarked: bool,
}

fn map_target_error(err: BookmarkTargetError) -> HttpResponse {
    match err {
        BookmarkTargetError::UnknownType(_) => ApiResponse::bad_request(
            "INVALID_BOOKMARK_TYPE",
            "Bookmark type must be 'post' or 'playlist'",
        ),
        BookmarkTargetError::EmptyTargetId => {
            ApiResponse::bad_request("INVALID_TARGET_ID", "Target id cannot be empty")
        }
        BookmarkTargetError::InvalidPlaylistId(_) => {
            ApiResponse::bad_request("INVALID_TARGET_ID", "Playlist id must be a UUID")
        }
    }
}
