use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::api::schemas::{ErrorDetail, ErrorResponse};
use crate::bookmark::adapter::incoming::web::routes::{
    BookmarkStatusResponse, BookmarkTargetRequest,
};
use crate::comment::adapter::incoming::web::routes::{
    AddCommentRequest, CommentResponse, CommentThreadResponse,
};
use crate::engagement::adapter::incoming::web::routes::LikeSummaryResponse;
use crate::playlist::adapter::incoming::web::routes::{
    DeletePlaylistResponse, PlaylistResponse, PlaylistUploadForm, SyncUserNameResponse,
};
use crate::post::adapter::incoming::web::routes::{
    CreatePostRequest, PostResponse, UpdatePostRequest,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tunefeed API",
        version = "1.0.0",
        description = "Feed, engagement and playlist endpoints"
    ),
    paths(
        // Posts
        crate::post::adapter::incoming::web::routes::get_posts_handler,
        crate::post::adapter::incoming::web::routes::create_post_handler,
        crate::post::adapter::incoming::web::routes::get_user_posts_handler,
        crate::post::adapter::incoming::web::routes::get_post_handler,
        crate::post::adapter::incoming::web::routes::update_post_handler,
        crate::post::adapter::incoming::web::routes::delete_post_handler,
        crate::post::adapter::incoming::web::routes::toggle_post_visibility_handler,
        crate::post::adapter::incoming::web::routes::increment_likes_handler,
        crate::post::adapter::incoming::web::routes::decrement_likes_handler,
        crate::post::adapter::incoming::web::routes::reconcile_counters_handler,

        // Comments
        crate::comment::adapter::incoming::web::routes::get_comments_handler,
        crate::comment::adapter::incoming::web::routes::add_comment_handler,

        // Playlists
        crate::playlist::adapter::incoming::web::routes::get_playlists_handler,
        crate::playlist::adapter::incoming::web::routes::create_playlist_handler,
        crate::playlist::adapter::incoming::web::routes::delete_playlist_handler,
        crate::playlist::adapter::incoming::web::routes::sync_user_name_handler,

        // Likes
        crate::engagement::adapter::incoming::web::routes::get_likes_handler,
        crate::engagement::adapter::incoming::web::routes::toggle_like_handler,

        // Bookmarks
        crate::bookmark::adapter::incoming::web::routes::add_bookmark_handler,
        crate::bookmark::adapter::incoming::web::routes::remove_bookmark_handler,
        crate::bookmark::adapter::incoming::web::routes::bookmark_status_handler,
        crate::bookmark::adapter::incoming::web::routes::get_bookmarks_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,
            PostResponse,
            CreatePostRequest,
            UpdatePostRequest,
            CommentResponse,
            CommentThreadResponse,
            AddCommentRequest,
            PlaylistResponse,
            PlaylistUploadForm,
            DeletePlaylistResponse,
            SyncUserNameResponse,
            LikeSummaryResponse,
            BookmarkTargetRequest,
            BookmarkStatusResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Posts", description = "Feed posts and their counters"),
        (name = "Comments", description = "Comment threads on posts"),
        (name = "Playlists", description = "Shared playlists with cover images"),
        (name = "Likes", description = "Post likes"),
        (name = "Bookmarks", description = "Saved posts and playlists"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Session token issued by the identity provider"))
                        .build(),
                ),
            )
        }
    }
}
