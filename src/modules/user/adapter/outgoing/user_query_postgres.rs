use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::user::application::{
    domain::entities::User,
    ports::outgoing::{UserQuery, UserQueryError},
};

use super::sea_orm_entity::{Column as UserColumn, Entity as UserEntity};

#[derive(Debug, Clone)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn list_users(&self) -> Result<Vec<User>, UserQueryError> {
        let models = UserEntity::find()
            .order_by_asc(UserColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(models.iter().map(|m| m.to_domain()).collect())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserQueryError> {
        let model = UserEntity::find_by_id(id.value().to_string())
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(|m| m.to_domain()))
    }
}
