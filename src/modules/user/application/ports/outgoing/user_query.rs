use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::user::application::domain::entities::User;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn list_users(&self) -> Result<Vec<User>, UserQueryError>;

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserQueryError>;
}
