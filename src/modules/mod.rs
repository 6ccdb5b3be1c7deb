pub mod auth;
pub mod bookmark;
pub mod comment;
pub mod engagement;
pub mod playlist;
pub mod post;
pub mod revalidation;
pub mod user;
