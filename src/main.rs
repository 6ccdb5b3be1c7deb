pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{auth, bookmark, comment, engagement, playlist, post, revalidation, user};

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::JwtIdentityProvider;
use crate::auth::application::ports::outgoing::IdentityProvider;
use crate::bookmark::{
    adapter::outgoing::BookmarkRepositoryPostgres,
    application::{bookmark_use_cases::BookmarkUseCases, services::BookmarkService},
};
use crate::comment::{
    adapter::outgoing::{CommentQueryPostgres, CommentRepositoryPostgres},
    application::{
        comment_use_cases::CommentUseCases,
        services::{AddCommentService, GetCommentsService},
    },
};
use crate::engagement::{
    adapter::outgoing::LikeRepositoryPostgres,
    application::{
        like_use_cases::LikeUseCases,
        services::{GetLikeCountService, HasUserLikedService, ToggleLikeService},
    },
};
use crate::playlist::{
    adapter::outgoing::{LocalImageStorage, PlaylistRepositoryPostgres},
    application::{
        domain::policies::upload_policy::UploadPolicy,
        playlist_use_cases::PlaylistUseCases,
        services::{
            CreatePlaylistService, DeletePlaylistService, GetPlaylistsService,
            SyncPlaylistUserNameService,
        },
    },
};
use crate::post::{
    adapter::outgoing::{PostQueryPostgres, PostRepositoryPostgres},
    application::{
        post_use_cases::PostUseCases,
        services::{CreatePostService, GetPostsService, ManagePostService, PostCountersService},
    },
};
use crate::revalidation::{
    adapter::outgoing::{LoggingViewRefresher, WebhookViewRefresher},
    application::ports::outgoing::ViewRefresher,
};
use crate::shared::{api::custom_json_config, config::AppConfig};
use crate::user::{
    adapter::outgoing::UserQueryPostgres,
    application::{
        services::{GetUserByIdService, GetUsersService},
        user_use_cases::UserUseCases,
    },
};

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub post: PostUseCases,
    pub like: LikeUseCases,
    pub comment: CommentUseCases,
    pub bookmark: BookmarkUseCases,
    pub playlist: PlaylistUseCases,
    pub user: UserUseCases,
    pub playlist_upload_policy: UploadPolicy,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env().context("Invalid configuration")?;
    let server_url = config.server_url();

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_pool.max_connections)
        .min_connections(config.db_pool.min_connections)
        .connect_timeout(config.db_pool.connect_timeout)
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(config.db_pool.idle_timeout)
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let db_arc = Arc::new(
        Database::connect(opt)
            .await
            .context("Failed to connect to database")?,
    );

    let identity_provider: Arc<dyn IdentityProvider + Send + Sync> =
        Arc::new(JwtIdentityProvider::new(config.identity.clone()));

    let refresher: Arc<dyn ViewRefresher + Send + Sync> = match config.view_refresh_url.as_deref()
    {
        Some(url) => {
            info!("View refresh signals go to {}", url);
            Arc::new(WebhookViewRefresher::new(url).context("Invalid VIEW_REFRESH_URL")?)
        }
        None => Arc::new(LoggingViewRefresher),
    };

    // Posts
    let post_query = PostQueryPostgres::new(Arc::clone(&db_arc));
    let post_repo = PostRepositoryPostgres::new(Arc::clone(&db_arc));
    let manage_post = Arc::new(ManagePostService::new(
        post_query.clone(),
        post_repo.clone(),
        Arc::clone(&refresher),
    ));
    let get_posts = Arc::new(GetPostsService::new(post_query));
    let post_counters = Arc::new(PostCountersService::new(
        post_repo.clone(),
        Arc::clone(&refresher),
    ));
    let post = PostUseCases {
        create: Arc::new(CreatePostService::new(post_repo, Arc::clone(&refresher))),
        update: manage_post.clone(),
        delete: manage_post.clone(),
        toggle_visibility: manage_post,
        get_list: get_posts.clone(),
        get_by_user: get_posts.clone(),
        get_single: get_posts,
        likes_count: post_counters.clone(),
        reconcile: post_counters,
    };

    // Likes
    let like_repo = LikeRepositoryPostgres::new(Arc::clone(&db_arc));
    let like = LikeUseCases {
        count: Arc::new(GetLikeCountService::new(like_repo.clone())),
        has_liked: Arc::new(HasUserLikedService::new(like_repo.clone())),
        toggle: Arc::new(ToggleLikeService::new(like_repo, Arc::clone(&refresher))),
    };

    // Comments
    let comment = CommentUseCases {
        get_threads: Arc::new(GetCommentsService::new(
            CommentQueryPostgres::new(Arc::clone(&db_arc)),
            config.thread_shape,
        )),
        add: Arc::new(AddCommentService::new(CommentRepositoryPostgres::new(
            Arc::clone(&db_arc),
        ))),
    };

    // Bookmarks
    let bookmark_service = Arc::new(BookmarkService::new(BookmarkRepositoryPostgres::new(
        Arc::clone(&db_arc),
    )));
    let bookmark = BookmarkUseCases {
        add: bookmark_service.clone(),
        remove: bookmark_service.clone(),
        status: bookmark_service.clone(),
        list: bookmark_service,
    };

    // Playlists
    let playlist_repo = PlaylistRepositoryPostgres::new(Arc::clone(&db_arc));
    let image_storage = LocalImageStorage::new(config.public_dir.clone());
    tokio::fs::create_dir_all(image_storage.upload_dir())
        .await
        .context("Failed to create the uploads directory")?;
    let uploads = image_storage.clone();
    let playlist = PlaylistUseCases {
        get_list: Arc::new(GetPlaylistsService::new(playlist_repo.clone())),
        create: Arc::new(CreatePlaylistService::new(
            playlist_repo.clone(),
            image_storage,
        )),
        delete: Arc::new(DeletePlaylistService::new(playlist_repo.clone())),
        sync_user_name: Arc::new(SyncPlaylistUserNameService::new(playlist_repo)),
    };

    // Users
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let user = UserUseCases {
        get_list: Arc::new(GetUsersService::new(user_query.clone())),
        get_single: Arc::new(GetUserByIdService::new(user_query)),
    };

    let state = AppState {
        post,
        like,
        comment,
        bookmark,
        playlist,
        user,
        playlist_upload_policy: UploadPolicy::default(),
    };

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&identity_provider)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(uploads.public_files())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {}", server_url))?
    .run()
    .await
    .context("Server stopped with an error")
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Identity
    cfg.service(crate::auth::adapter::incoming::web::routes::current_user_handler);
    // Users
    cfg.service(crate::user::adapter::incoming::web::routes::get_users_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::get_user_handler);
    // Posts
    cfg.service(crate::post::adapter::incoming::web::routes::get_posts_handler);
    cfg.service(crate::post::adapter::incoming::web::routes::create_post_handler);
    cfg.service(crate::post::adapter::incoming::web::routes::get_user_posts_handler);
    cfg.service(crate::post::adapter::incoming::web::routes::get_post_handler);
    cfg.service(crate::post::adapter::incoming::web::routes::update_post_handler);
    cfg.service(crate::post::adapter::incoming::web::routes::delete_post_handler);
    cfg.service(crate::post::adapter::incoming::web::routes::toggle_post_visibility_handler);
    cfg.service(crate::post::adapter::incoming::web::routes::increment_likes_handler);
    cfg.service(crate::post::adapter::incoming::web::routes::decrement_likes_handler);
    cfg.service(crate::post::adapter::incoming::web::routes::reconcile_counters_handler);
    // Likes
    cfg.service(crate::engagement::adapter::incoming::web::routes::get_likes_handler);
    cfg.service(crate::engagement::adapter::incoming::web::routes::toggle_like_handler);
    // Comments
    cfg.service(crate::comment::adapter::incoming::web::routes::get_comments_handler);
    cfg.service(crate::comment::adapter::incoming::web::routes::add_comment_handler);
    // Bookmarks
    cfg.service(crate::bookmark::adapter::incoming::web::routes::bookmark_status_handler);
    cfg.service(crate::bookmark::adapter::incoming::web::routes::get_bookmarks_handler);
    cfg.service(crate::bookmark::adapter::incoming::web::routes::add_bookmark_handler);
    cfg.service(crate::bookmark::adapter::incoming::web::routes::remove_bookmark_handler);
    // Playlists
    cfg.service(crate::playlist::adapter::incoming::web::routes::sync_user_name_handler);
    cfg.service(crate::playlist::adapter::incoming::web::routes::get_playlists_handler);
    cfg.service(crate::playlist::adapter::incoming::web::routes::create_playlist_handler);
    cfg.service(crate::playlist::adapter::incoming::web::routes::delete_playlist_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
