use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::post::application::{
    domain::entities::Post,
    ports::outgoing::{PostQuery, PostQueryError},
};

use super::sea_orm_entity::{Column as PostColumn, Entity as PostEntity, Model as PostModel};

#[derive(Debug, Clone)]
pub struct PostQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PostQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn to_posts(models: Vec<PostModel>) -> Vec<Post> {
    models.iter().map(PostModel::to_domain).collect()
}

#[async_trait]
impl PostQuery for PostQueryPostgres {
    async fn list_published(&self) -> Result<Vec<Post>, PostQueryError> {
        let models = PostEntity::find()
            .filter(PostColumn::IsPublished.eq(true))
            .order_by_desc(PostColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| PostQueryError::DatabaseError(e.to_string()))?;

        Ok(to_posts(models))
    }

    async fn list_published_by_author(
        &self,
        author_id: &UserId,
    ) -> Result<Vec<Post>, PostQueryError> {
        let models = PostEntity::find()
            .filter(PostColumn::AuthorId.eq(author_id.value()))
            .filter(PostColumn::IsPublished.eq(true))
            .order_by_desc(PostColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| PostQueryError::DatabaseError(e.to_string()))?;

        Ok(to_posts(models))
    }

    async fn find_by_id(&self, post_id: &str) -> Result<Option<Post>, PostQueryError> {
        let model = PostEntity::find_by_id(post_id.to_string())
            .one(&*self.db)
            .await
            .map_err(|e| PostQueryError::DatabaseError(e.to_string()))?;

        Ok(model.as_ref().map(PostModel::to_domain))
    }
}
