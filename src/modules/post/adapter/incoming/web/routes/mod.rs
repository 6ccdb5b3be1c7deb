mod create_post;
mod delete_post;
mod get_post;
mod get_posts;
mod get_user_posts;
mod post_counters;
mod toggle_post_visibility;
mod update_post;

pub use create_post::{__path_create_post_handler, create_post_handler, CreatePostRequest};
pub use delete_post::{__path_delete_post_handler, delete_post_handler};
pub use get_post::{__path_get_post_handler, get_post_handler};
pub use get_posts::{__path_get_posts_handler, get_posts_handler};
pub use get_user_posts::{__path_get_user_posts_handler, get_user_posts_handler};
pub use post_counters::{
    __path_decrement_likes_handler, __path_increment_likes_handler,
    __path_reconcile_counters_handler, decrement_likes_handler, increment_likes_handler,
    reconcile_counters_handler,
};
pub use toggle_post_visibility::{
    __path_toggle_post_visibility_handler, toggle_post_visibility_handler,
};
pub use update_post::{__path_update_post_handler, update_post_handler, UpdatePostRequest};

use actix_web::HttpResponse;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    post::application::{
        domain::entities::Post,
        ports::incoming::use_cases::{ManagePostError, PostCounterError},
    },
    shared::api::ApiResponse,
};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: String,
    pub content: String,
    pub author_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_published: bool,
    pub likes_count: i32,
    pub comments_count: i32,
}

impl From<Post> for PostResponse {
    fn from(p: Post) -> Self {
        Self {
            id: p.id,
            content: p.content,
            author_id: p.author_id.into_inner(),
            created_at: p.created_at,
            updated_at: p.updated_at,
            is_published: p.is_published,
            likes_count: p.likes_count,
            comments_count: p.comments_count,
        }
    }
}

fn post_list(posts: Vec<Post>) -> Vec<PostResponse> {
    posts.into_iter().map(PostResponse::from).collect()
}

fn post_not_found() -> HttpResponse {
    ApiResponse::not_found("POST_NOT_FOUND", "Post not found")
}

fn map_manage_post_error(err: ManagePostError) -> HttpResponse {
    match err {
        ManagePostError::PostNotFound => post_not_found(),
        ManagePostError::Forbidden => {
            ApiResponse::forbidden("FORBIDDEN", "Only the author can change this post")
        }
        ManagePostError::RepositoryError(_) => ApiResponse::internal_error(),
    }
}

fn map_counter_error(err: PostCounterError) -> HttpResponse {
    match err {
        PostCounterError::PostNotFound => post_not_found(),
        PostCounterError::RepositoryError(_) => ApiResponse::internal_error(),
    }
}
