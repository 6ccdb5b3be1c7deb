//! In-memory adapters for the outgoing ports, shared by service and route tests.
//!
//! Every adapter is `Clone` over shared state so a test can hand one copy to a
//! service and keep another to inspect what was written.

use std::collections::HashMap;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::bookmark::application::{
    bookmark_use_cases::BookmarkUseCases,
    domain::entities::{Bookmark, BookmarkTarget},
    ports::outgoing::{BookmarkRepository, BookmarkRepositoryError},
    services::BookmarkService,
};
use crate::engagement::application::{
    domain::entities::{LikeState, PostLike},
    like_use_cases::LikeUseCases,
    ports::outgoing::{LikeRepository, LikeRepositoryError},
    services::{GetLikeCountService, HasUserLikedService, ToggleLikeService},
};
use crate::playlist::application::{
    domain::entities::{ImageUpload, Playlist},
    playlist_use_cases::PlaylistUseCases,
    ports::outgoing::{
        ImageStorage, ImageStorageError, NewPlaylist, PlaylistRepository, PlaylistRepositoryError,
    },
    services::{
        CreatePlaylistService, DeletePlaylistService, GetPlaylistsService,
        SyncPlaylistUserNameService,
    },
};
use crate::post::application::{
    domain::entities::Post,
    ports::outgoing::{
        NewPost, PostChanges, PostQuery, PostQueryError, PostRepository, PostRepositoryError,
    },
    post_use_cases::PostUseCases,
    services::{CreatePostService, GetPostsService, ManagePostService, PostCountersService},
};
use crate::revalidation::application::ports::outgoing::{ViewRefreshError, ViewRefresher};

type FailSwitch = Arc<Mutex<Option<String>>>;

fn failure(switch: &FailSwitch) -> Option<String> {
    switch.lock().unwrap().clone()
}

// ──────────────────────────────────────────────────────────
// View refresh
// ──────────────────────────────────────────────────────────

/// Records every refreshed path instead of calling out.
#[derive(Debug, Clone, Default)]
pub struct RecordingViewRefresher {
    paths: Arc<Mutex<Vec<String>>>,
}

impl RecordingViewRefresher {
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

#[async_trait]
impl ViewRefresher for RecordingViewRefresher {
    async fn refresh(&self, path: &str) -> Result<(), ViewRefreshError> {
        self.paths.lock().unwrap().push(path.to_string());
        Ok(())
    }
}

// ──────────────────────────────────────────────────────────
// Likes
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct InMemoryLikeRepository {
    likes: Arc<Mutex<Vec<PostLike>>>,
    fail: FailSwitch,
}

impl InMemoryLikeRepository {
    pub fn seed(&self, post_id: &str, user_id: &UserId) {
        self.likes.lock().unwrap().push(PostLike {
            id: Uuid::new_v4().to_string(),
            post_id: post_id.to_string(),
            user_id: user_id.clone(),
            created_at: Utc::now(),
        });
    }

    pub fn fail_with(&self, msg: &str) {
        *self.fail.lock().unwrap() = Some(msg.to_string());
    }

    fn check(&self) -> Result<(), LikeRepositoryError> {
        match failure(&self.fail) {
            Some(msg) => Err(LikeRepositoryError::DatabaseError(msg)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl LikeRepository for InMemoryLikeRepository {
    async fn count_likes(&self, post_id: &str) -> Result<u64, LikeRepositoryError> {
        self.check()?;
        let likes = self.likes.lock().unwrap();
        Ok(likes.iter().filter(|l| l.post_id == post_id).count() as u64)
    }

    async fn find_like(
        &self,
        post_id: &str,
        user_id: &UserId,
    ) -> Result<Option<PostLike>, LikeRepositoryError> {
        self.check()?;
        let likes = self.likes.lock().unwrap();
        Ok(likes
            .iter()
            .find(|l| l.post_id == post_id && &l.user_id == user_id)
            .cloned())
    }

    async fn toggle_like(
        &self,
        post_id: &str,
        user_id: &UserId,
    ) -> Result<LikeState, LikeRepositoryError> {
        self.check()?;
        let mut likes = self.likes.lock().unwrap();
        let before = likes.len();
        likes.retain(|l| !(l.post_id == post_id && &l.user_id == user_id));
        if likes.len() < before {
            return Ok(LikeState::NotLiked);
        }

        likes.push(PostLike {
            id: Uuid::new_v4().to_string(),
            post_id: post_id.to_string(),
            user_id: user_id.clone(),
            created_at: Utc::now(),
        });
        Ok(LikeState::Liked)
    }
}

pub fn in_memory_like_use_cases() -> LikeUseCases {
    let repo = InMemoryLikeRepository::default();
    LikeUseCases {
        count: Arc::new(GetLikeCountService::new(repo.clone())),
        has_liked: Arc::new(HasUserLikedService::new(repo.clone())),
        toggle: Arc::new(ToggleLikeService::new(
            repo,
            Arc::new(RecordingViewRefresher::default()),
        )),
    }
}

// ──────────────────────────────────────────────────────────
// Bookmarks
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct InMemoryBookmarkRepository {
    rows: Arc<Mutex<Vec<Bookmark>>>,
    fail: FailSwitch,
}

impl InMemoryBookmarkRepository {
    pub fn seed(&self, user_id: &UserId, target: BookmarkTarget) {
        self.rows.lock().unwrap().push(Bookmark {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.clone(),
            target,
            created_at: Utc::now(),
        });
    }

    pub fn fail_with(&self, msg: &str) {
        *self.fail.lock().unwrap() = Some(msg.to_string());
    }

    pub fn contains(&self, user_id: &UserId, target: &BookmarkTarget) -> bool {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .any(|b| &b.user_id == user_id && &b.target == target)
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn check(&self) -> Result<(), BookmarkRepositoryError> {
        match failure(&self.fail) {
            Some(msg) => Err(BookmarkRepositoryError::DatabaseError(msg)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl BookmarkRepository for InMemoryBookmarkRepository {
    async fn add(
        &self,
        user_id: &UserId,
        target: &BookmarkTarget,
    ) -> Result<(), BookmarkRepositoryError> {
        self.check()?;
        if !self.contains(user_id, target) {
            self.seed(user_id, target.clone());
        }
        Ok(())
    }

    async fn remove(
        &self,
        user_id: &UserId,
        target: &BookmarkTarget,
    ) -> Result<u64, BookmarkRepositoryError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|b| !(&b.user_id == user_id && &b.target == target));
        Ok((before - rows.len()) as u64)
    }

    async fn exists(
        &self,
        user_id: &UserId,
        target: &BookmarkTarget,
    ) -> Result<bool, BookmarkRepositoryError> {
        self.check()?;
        Ok(self.contains(user_id, target))
    }

    async fn list_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Bookmark>, BookmarkRepositoryError> {
        self.check()?;
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .rev()
            .filter(|b| &b.user_id == user_id)
            .cloned()
            .collect())
    }
}

pub fn in_memory_bookmark_use_cases() -> (BookmarkUseCases, InMemoryBookmarkRepository) {
    let repo = InMemoryBookmarkRepository::default();
    let service = Arc::new(BookmarkService::new(repo.clone()));
    let use_cases = BookmarkUseCases {
        add: service.clone(),
        remove: service.clone(),
        status: service.clone(),
        list: service,
    };
    (use_cases, repo)
}

// ──────────────────────────────────────────────────────────
// Posts
// ──────────────────────────────────────────────────────────

/// Serves both `PostQuery` and `PostRepository` over one list kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPostStore {
    posts: Arc<Mutex<Vec<Post>>>,
    engagement: Arc<Mutex<HashMap<String, (i32, i32)>>>,
    fail: FailSwitch,
}

impl InMemoryPostStore {
    pub fn seed(&self, author_id: &str, content: &str, is_published: bool) -> Post {
        let now = Utc::now();
        let post = Post {
            id: Uuid::new_v4().to_string(),
            content: content.to_string(),
            author_id: UserId::from(author_id),
            created_at: now,
            updated_at: now,
            is_published,
            likes_count: 0,
            comments_count: 0,
        };
        self.posts.lock().unwrap().push(post.clone());
        post
    }

    pub fn len(&self) -> usize {
        self.posts.lock().unwrap().len()
    }

    pub fn fail_with(&self, msg: &str) {
        *self.fail.lock().unwrap() = Some(msg.to_string());
    }

    pub fn set_counters(&self, post_id: &str, likes: i32, comments: i32) {
        let mut posts = self.posts.lock().unwrap();
        if let Some(post) = posts.iter_mut().find(|p| p.id == post_id) {
            post.likes_count = likes;
            post.comments_count = comments;
        }
    }

    /// Row counts `reconcile_counters` will find in the like and comment tables.
    pub fn set_actual_engagement(&self, post_id: &str, likes: i32, comments: i32) {
        self.engagement
            .lock()
            .unwrap()
            .insert(post_id.to_string(), (likes, comments));
    }

    fn check(&self) -> Result<(), PostRepositoryError> {
        match failure(&self.fail) {
            Some(msg) => Err(PostRepositoryError::DatabaseError(msg)),
            None => Ok(()),
        }
    }

    fn published<F>(&self, keep: F) -> Result<Vec<Post>, PostQueryError>
    where
        F: Fn(&Post) -> bool,
    {
        if let Some(msg) = failure(&self.fail) {
            return Err(PostQueryError::DatabaseError(msg));
        }
        let posts = self.posts.lock().unwrap();
        Ok(posts
            .iter()
            .rev()
            .filter(|p| p.is_published && keep(p))
            .cloned()
            .collect())
    }

    fn modify<F>(&self, post_id: &str, change: F) -> Result<Post, PostRepositoryError>
    where
        F: FnOnce(&mut Post),
    {
        self.check()?;
        let mut posts = self.posts.lock().unwrap();
        let post = posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or(PostRepositoryError::NotFound)?;
        change(post);
        post.updated_at = Utc::now();
        Ok(post.clone())
    }
}

#[async_trait]
impl PostQuery for InMemoryPostStore {
    async fn list_published(&self) -> Result<Vec<Post>, PostQueryError> {
        self.published(|_| true)
    }

    async fn list_published_by_author(
        &self,
        author_id: &UserId,
    ) -> Result<Vec<Post>, PostQueryError> {
        self.published(|p| &p.author_id == author_id)
    }

    async fn find_by_id(&self, post_id: &str) -> Result<Option<Post>, PostQueryError> {
        if let Some(msg) = failure(&self.fail) {
            return Err(PostQueryError::DatabaseError(msg));
        }
        let posts = self.posts.lock().unwrap();
        Ok(posts.iter().find(|p| p.id == post_id).cloned())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostStore {
    async fn create(&self, data: NewPost) -> Result<Post, PostRepositoryError> {
        self.check()?;
        Ok(self.seed(data.author_id.value(), &data.content, data.is_published))
    }

    async fn update(&self, post_id: &str, changes: PostChanges) -> Result<Post, PostRepositoryError> {
        self.modify(post_id, |post| {
            if let Some(content) = changes.content {
                post.content = content;
            }
            if let Some(is_published) = changes.is_published {
                post.is_published = is_published;
            }
        })
    }

    async fn delete(&self, post_id: &str) -> Result<(), PostRepositoryError> {
        self.check()?;
        let mut posts = self.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|p| p.id != post_id);
        if posts.len() == before {
            return Err(PostRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn toggle_visibility(&self, post_id: &str) -> Result<Post, PostRepositoryError> {
        self.modify(post_id, |post| post.is_published = !post.is_published)
    }

    async fn increment_likes(&self, post_id: &str) -> Result<Post, PostRepositoryError> {
        self.modify(post_id, |post| post.likes_count += 1)
    }

    async fn decrement_likes(&self, post_id: &str) -> Result<Post, PostRepositoryError> {
        self.modify(post_id, |post| post.likes_count = (post.likes_count - 1).max(0))
    }

    async fn reconcile_counters(&self, post_id: &str) -> Result<Post, PostRepositoryError> {
        let (likes, comments) = self
            .engagement
            .lock()
            .unwrap()
            .get(post_id)
            .copied()
            .unwrap_or((0, 0));
        self.modify(post_id, |post| {
            post.likes_count = likes;
            post.comments_count = comments;
        })
    }
}

pub fn in_memory_post_use_cases() -> (PostUseCases, InMemoryPostStore) {
    let store = InMemoryPostStore::default();
    let refresher = Arc::new(RecordingViewRefresher::default());

    let manage = Arc::new(ManagePostService::new(
        store.clone(),
        store.clone(),
        refresher.clone(),
    ));
    let get = Arc::new(GetPostsService::new(store.clone()));
    let counters = Arc::new(PostCountersService::new(store.clone(), refresher.clone()));

    let use_cases = PostUseCases {
        create: Arc::new(CreatePostService::new(store.clone(), refresher)),
        update: manage.clone(),
        delete: manage.clone(),
        toggle_visibility: manage,
        get_list: get.clone(),
        get_by_user: get.clone(),
        get_single: get,
        likes_count: counters.clone(),
        reconcile: counters,
    };
    (use_cases, store)
}

// ──────────────────────────────────────────────────────────
// Playlists
// ──────────────────────────────────────────────────────────

/// Playlist rows plus the `users` names `sync_user_name` joins against.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPlaylistRepository {
    rows: Arc<Mutex<Vec<Playlist>>>,
    user_names: Arc<Mutex<HashMap<UserId, String>>>,
    fail: FailSwitch,
}

impl InMemoryPlaylistRepository {
    pub fn seed(&self, name: &str, user_id: &str) -> Playlist {
        let playlist = Playlist {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: None,
            link: format!("https://example.com/{}", name),
            user_id: UserId::from(user_id),
            user_name: format!("user {}", user_id),
            image: None,
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().push(playlist.clone());
        playlist
    }

    /// Change the account name without touching playlist rows.
    pub fn rename_user(&self, user_id: &str, name: &str) {
        self.user_names
            .lock()
            .unwrap()
            .insert(UserId::from(user_id), name.to_string());
    }

    pub fn fail_with(&self, msg: &str) {
        *self.fail.lock().unwrap() = Some(msg.to_string());
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn all(&self) -> Vec<Playlist> {
        self.rows.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), PlaylistRepositoryError> {
        match failure(&self.fail) {
            Some(msg) => Err(PlaylistRepositoryError::DatabaseError(msg)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl PlaylistRepository for InMemoryPlaylistRepository {
    async fn list(&self) -> Result<Vec<Playlist>, PlaylistRepositoryError> {
        self.check()?;
        Ok(self.rows.lock().unwrap().iter().rev().cloned().collect())
    }

    async fn create(&self, data: NewPlaylist) -> Result<Playlist, PlaylistRepositoryError> {
        self.check()?;
        let playlist = Playlist {
            id: Uuid::new_v4(),
            name: data.name,
            description: data.description,
            link: data.link,
            user_id: data.user_id,
            user_name: data.user_name,
            image: data.image,
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().push(playlist.clone());
        Ok(playlist)
    }

    async fn delete(&self, id: Uuid) -> Result<u64, PlaylistRepositoryError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|p| p.id != id);
        Ok((before - rows.len()) as u64)
    }

    async fn sync_user_name(&self, user_id: &UserId) -> Result<u64, PlaylistRepositoryError> {
        self.check()?;
        let Some(name) = self.user_names.lock().unwrap().get(user_id).cloned() else {
            return Ok(0);
        };

        let mut updated = 0;
        for row in self.rows.lock().unwrap().iter_mut() {
            if &row.user_id == user_id && row.user_name != name {
                row.user_name = name.clone();
                updated += 1;
            }
        }
        Ok(updated)
    }
}

/// Keeps uploads in memory and hands out `/uploads/test-<n><ext>` paths.
#[derive(Debug, Clone, Default)]
pub struct InMemoryImageStorage {
    stored: Arc<Mutex<Vec<String>>>,
    counter: Arc<AtomicUsize>,
}

impl InMemoryImageStorage {
    pub fn stored(&self) -> Vec<String> {
        self.stored.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageStorage for InMemoryImageStorage {
    async fn store(&self, upload: &ImageUpload) -> Result<String, ImageStorageError> {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        let path = format!("/uploads/test-{}{}", n, upload.extension());
        self.stored.lock().unwrap().push(path.clone());
        Ok(path)
    }

    async fn remove(&self, public_path: &str) -> Result<(), ImageStorageError> {
        self.stored.lock().unwrap().retain(|p| p != public_path);
        Ok(())
    }
}

pub fn in_memory_playlist_use_cases() -> (
    PlaylistUseCases,
    InMemoryPlaylistRepository,
    InMemoryImageStorage,
) {
    let repo = InMemoryPlaylistRepository::default();
    let storage = InMemoryImageStorage::default();

    let use_cases = PlaylistUseCases {
        get_list: Arc::new(GetPlaylistsService::new(repo.clone())),
        create: Arc::new(CreatePlaylistService::new(repo.clone(), storage.clone())),
        delete: Arc::new(DeletePlaylistService::new(repo.clone())),
        sync_user_name: Arc::new(SyncPlaylistUserNameService::new(repo.clone())),
    };
    (use_cases, repo, storage)
}
