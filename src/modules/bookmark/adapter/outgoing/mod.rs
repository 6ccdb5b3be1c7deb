mod bookmark_repository_postgres;
pub mod sea_orm_entity;

pub use bookmark_repository_postgres::BookmarkRepositoryPostgres;
