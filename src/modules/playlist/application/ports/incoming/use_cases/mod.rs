mod create_playlist;
mod delete_playlist;
mod get_playlists;
mod sync_user_name;

pub use create_playlist::{
    CreatePlaylistCommand, CreatePlaylistCommandBuilder, CreatePlaylistCommandError,
    CreatePlaylistError, CreatePlaylistUseCase,
};
pub use delete_playlist::{DeletePlaylistError, DeletePlaylistUseCase};
pub use get_playlists::{GetPlaylistsError, GetPlaylistsUseCase};
pub use sync_user_name::{SyncPlaylistUserNameError, SyncPlaylistUserNameUseCase};
