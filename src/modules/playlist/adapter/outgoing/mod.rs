mod local_image_storage;
mod playlist_repository_postgres;
pub mod sea_orm_entity;

pub use local_image_storage::LocalImageStorage;
pub use playlist_repository_postgres::PlaylistRepositoryPostgres;
