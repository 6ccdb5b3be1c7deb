use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::post::application::{
    domain::entities::Post,
    ports::{
        incoming::use_cases::{
            GetPostByIdUseCase, GetPostsByUserUseCase, GetPostsError, GetPostsUseCase,
        },
        outgoing::{PostQuery, PostQueryError},
    },
};

/// Read side of posts.
#[derive(Debug, Clone)]
pub struct GetPostsService<Q>
where
    Q: PostQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetPostsService<Q>
where
    Q: PostQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

fn query_failed(context: &'static str) -> impl FnOnce(PostQueryError) -> GetPostsError {
    move |e| {
        tracing::error!(error = %e, "{}", context);
        GetPostsError::QueryFailed(e.to_string())
    }
}

#[async_trait]
impl<Q> GetPostsUseCase for GetPostsService<Q>
where
    Q: PostQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Post>, GetPostsError> {
        self.query
            .list_published()
            .await
            .map_err(query_failed("Failed to fetch posts"))
    }
}

#[async_trait]
impl<Q> GetPostsByUserUseCase for GetPostsService<Q>
where
    Q: PostQuery + Send + Sync,
{
    async fn execute(&self, author_id: &UserId) -> Result<Vec<Post>, GetPostsError> {
        self.query
            .list_published_by_author(author_id)
            .await
            .map_err(query_failed("Failed to fetch user posts"))
    }
}

#[async_trait]
impl<Q> GetPostByIdUseCase for GetPostsService<Q>
where
    Q: PostQuery + Send + Sync,
{
    async fn execute(&self, post_id: &str) -> Result<Option<Post>, GetPostsError> {
        self.query
            .find_by_id(post_id)
            .await
            .map_err(query_failed("Failed to fetch post"))
    }
}
