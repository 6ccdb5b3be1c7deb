use std::sync::Arc;

use crate::playlist::application::ports::incoming::use_cases::{
    CreatePlaylistUseCase, DeletePlaylistUseCase, GetPlaylistsUseCase,
    SyncPlaylistUserNameUseCase,
};

#[derive(Clone)]
pub struct PlaylistUseCases {
    pub get_list: Arc<dyn GetPlaylistsUseCase + Send + Sync>,
    pub create: Arc<dyn CreatePlaylistUseCase + Send + Sync>,
    pub delete: Arc<dyn DeletePlaylistUseCase + Send + Sync>,
    pub sync_user_name: Arc<dyn SyncPlaylistUserNameUseCase + Send + Sync>,
}
