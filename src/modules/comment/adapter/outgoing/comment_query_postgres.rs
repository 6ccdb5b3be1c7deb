use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::comment::application::{
    domain::entities::Comment,
    ports::outgoing::{CommentQuery, CommentQueryError},
};

use super::sea_orm_entity::{Column as CommentColumn, Entity as CommentEntity};

#[derive(Debug, Clone)]
pub struct CommentQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CommentQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CommentQuery for CommentQueryPostgres {
    async fn comments_for_post(&self, post_id: &str) -> Result<Vec<Comment>, CommentQueryError> {
        let models = CommentEntity::find()
            .filter(CommentColumn::PostId.eq(post_id))
            .order_by_asc(CommentColumn::CreatedAt)
            .order_by_asc(CommentColumn::Id)
            .all(&*self.db)
            .await
            .map_err(|e| CommentQueryError::DatabaseError(e.to_string()))?;

        Ok(models.iter().map(|m| m.to_domain()).collect())
    }
}
