use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::comment::application::{
    domain::entities::Comment,
    ports::outgoing::{CommentRepository, CommentRepositoryError, NewComment},
};

use super::sea_orm_entity::ActiveModel as CommentActiveModel;

#[derive(Debug, Clone)]
pub struct CommentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CommentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CommentRepository for CommentRepositoryPostgres {
    async fn insert_comment(&self, data: NewComment) -> Result<Comment, CommentRepositoryError> {
        let active = CommentActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            post_id: Set(data.post_id),
            author_id: Set(data.author_id.into_inner()),
            content: Set(data.content),
            parent_id: Set(data.parent_id),
            ..Default::default()
        };

        let inserted = active
            .insert(&*self.db)
            .await
            .map_err(|e| CommentRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.to_domain())
    }
}
