use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::user::application::domain::entities::User;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetUserByIdError {
    #[error("User not found")]
    UserNotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetUserByIdUseCase: Send + Sync {
    async fn execute(&self, user_id: &UserId) -> Result<User, GetUserByIdError>;
}
