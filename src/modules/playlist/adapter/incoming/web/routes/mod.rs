mod create_playlist;
mod delete_playlist;
mod form;
mod get_playlists;
mod sync_user_name;

pub use create_playlist::{__path_create_playlist_handler, create_playlist_handler};
pub use delete_playlist::{__path_delete_playlist_handler, delete_playlist_handler};
pub use get_playlists::{__path_get_playlists_handler, get_playlists_handler};
pub use sync_user_name::{__path_sync_user_name_handler, sync_user_name_handler};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::playlist::application::domain::entities::Playlist;

pub use form::PlaylistUploadForm;

/// A stored playlist as the frontend reads it.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub link: String,
    pub user_id: String,
    pub user_name: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Playlist> for PlaylistResponse {
    fn from(p: Playlist) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            link: p.link,
            user_id: p.user_id.into_inner(),
            user_name: p.user_name,
            image: p.image,
            created_at: p.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeletePlaylistResponse {
    pub success: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SyncUserNameResponse {
    pub updated: u64,
}
