mod bookmark_repository;

pub use bookmark_repository::{BookmarkRepository, BookmarkRepositoryError};
