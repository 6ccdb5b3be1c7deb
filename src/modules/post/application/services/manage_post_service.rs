use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::post::application::{
    domain::entities::Post,
    ports::{
        incoming::use_cases::{
            DeletePostUseCase, ManagePostError, TogglePostVisibilityUseCase, UpdatePostCommand,
            UpdatePostUseCase,
        },
        outgoing::{PostChanges, PostQuery, PostRepository, PostRepositoryError},
    },
};
use crate::revalidation::application::ports::outgoing::{
    notify_view_refresh, ViewRefresher, DASHBOARD_PATH,
};

/// Author-only writes: update, delete, visibility toggle.
#[derive(Clone)]
pub struct ManagePostService<Q, R>
where
    Q: PostQuery + Send + Sync,
    R: PostRepository + Send + Sync,
{
    query: Q,
    repository: R,
    refresher: Arc<dyn ViewRefresher + Send + Sync>,
}

impl<Q, R> ManagePostService<Q, R>
where
    Q: PostQuery + Send + Sync,
    R: PostRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R, refresher: Arc<dyn ViewRefresher + Send + Sync>) -> Self {
        Self {
            query,
            repository,
            refresher,
        }
    }

    async fn ensure_author(&self, post_id: &str, actor: &UserId) -> Result<(), ManagePostError> {
        let post = self
            .query
            .find_by_id(post_id)
            .await
            .map_err(|e| {
                tracing::error!(post_id, error = %e, "Failed to load post");
                ManagePostError::RepositoryError(e.to_string())
            })?
            .ok_or(ManagePostError::PostNotFound)?;

        if !post.is_authored_by(actor) {
            tracing::warn!(post_id, actor = %actor, "Rejected change by non-author");
            return Err(ManagePostError::Forbidden);
        }

        Ok(())
    }

    fn map_repository_error(post_id: &str, e: PostRepositoryError) -> ManagePostError {
        match e {
            PostRepositoryError::NotFound => ManagePostError::PostNotFound,
            PostRepositoryError::DatabaseError(msg) => {
                tracing::error!(post_id, error = %msg, "Post write failed");
                ManagePostError::RepositoryError(msg)
            }
        }
    }
}

#[async_trait]
impl<Q, R> UpdatePostUseCase for ManagePostService<Q, R>
where
    Q: PostQuery + Send + Sync,
    R: PostRepository + Send + Sync,
{
    async fn execute(&self, command: UpdatePostCommand) -> Result<Post, ManagePostError> {
        self.ensure_author(command.post_id(), command.actor()).await?;

        let changes = PostChanges {
            content: command.content().map(str::to_string),
            is_published: command.is_published(),
        };

        let post = self
            .repository
            .update(command.post_id(), changes)
            .await
            .map_err(|e| Self::map_repository_error(command.post_id(), e))?;

        notify_view_refresh(self.refresher.as_ref(), DASHBOARD_PATH).await;
        Ok(post)
    }
}

#[async_trait]
impl<Q, R> DeletePostUseCase for ManagePostService<Q, R>
where
    Q: PostQuery + Send + Sync,
    R: PostRepository + Send + Sync,
{
    async fn execute(&self, post_id: &str, actor: &UserId) -> Result<(), ManagePostError> {
        self.ensure_author(post_id, actor).await?;

        self.repository
            .delete(post_id)
            .await
            .map_err(|e| Self::map_repository_error(post_id, e))?;

        notify_view_refresh(self.refresher.as_ref(), DASHBOARD_PATH).await;
        Ok(())
    }
}

#[async_trait]
impl<Q, R> TogglePostVisibilityUseCase for ManagePostService<Q, R>
where
    Q: PostQuery + Send + Sync,
    R: PostRepository + Send + Sync,
{
    async fn execute(&self, post_id: &str, actor: &UserId) -> Result<Post, ManagePostError> {
        self.ensure_author(post_id, actor).await?;

        let post = self
            .repository
            .toggle_visibility(post_id)
            .await
            .map_err(|e| Self::map_repository_error(post_id, e))?;

        notify_view_refresh(self.refresher.as_ref(), DASHBOARD_PATH).await;
        Ok(post)
    }
}
