mod create_playlist_service;
mod delete_playlist_service;
mod get_playlists_service;
mod sync_user_name_service;

pub use create_playlist_service::CreatePlaylistService;
pub use delete_playlist_service::DeletePlaylistService;
pub use get_playlists_service::GetPlaylistsService;
pub use sync_user_name_service::SyncPlaylistUserNameService;
