use async_trait::async_trait;

use crate::user::application::domain::entities::User;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetUsersError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetUsersUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<User>, GetUsersError>;
}
