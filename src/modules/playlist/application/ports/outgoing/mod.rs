mod image_storage;
mod playlist_repository;

pub use image_storage::{ImageStorage, ImageStorageError};
pub use playlist_repository::{NewPlaylist, PlaylistRepository, PlaylistRepositoryError};
