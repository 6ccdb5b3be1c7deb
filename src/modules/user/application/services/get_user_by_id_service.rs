use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::user::application::{
    domain::entities::User,
    ports::{
        incoming::use_cases::{GetUserByIdError, GetUserByIdUseCase},
        outgoing::UserQuery,
    },
};

#[derive(Debug, Clone)]
pub struct GetUserByIdService<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetUserByIdService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetUserByIdUseCase for GetUserByIdService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, user_id: &UserId) -> Result<User, GetUserByIdError> {
        match self.query.find_by_id(user_id).await {
            Ok(Some(user)) => Ok(user),
            Ok(None) => Err(GetUserByIdError::UserNotFound),
            Err(e) => {
                tracing::error!(user_id = %user_id, error = %e, "Failed to load user");
                Err(GetUserByIdError::QueryFailed(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::user::application::ports::outgoing::UserQueryError;

    struct MockUserQuery {
        result: Result<Option<User>, UserQueryError>,
    }

    #[async_trait]
    impl UserQuery for MockUserQuery {
        async fn list_users(&self) -> Result<Vec<User>, UserQueryError> {
            unimplemented!()
        }

        async fn find_by_id(&self, _id: &UserId) -> Result<Option<User>, UserQueryError> {
            self.result.clone()
        }
    }

    #[tokio::test]
    async fn found_user_is_returned() {
        let service = GetUserByIdService::new(MockUserQuery {
            result: Ok(Some(User {
                id: UserId::from("u1"),
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                email_verified: false,
                image: Some("/avatars/ada.png".to_string()),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })),
        });

        let user = service.execute(&UserId::from("u1")).await.unwrap();

        assert_eq!(user.name, "Ada");
    }

    #[tokio::test]
    async fn missing_user_is_not_found() {
        let service = GetUserByIdService::new(MockUserQuery { result: Ok(None) });

        let result = service.execute(&UserId::from("ghost")).await;

        assert!(matches!(result, Err(GetUserByIdError::UserNotFound)));
    }

    #[tokio::test]
    async fn query_error_is_mapped() {
        let service = GetUserByIdService::new(MockUserQuery {
            result: Err(UserQueryError::DatabaseError("timeout".into())),
        });

        let result = service.execute(&UserId::from("u1")).await;

        assert!(matches!(result, Err(GetUserByIdError::QueryFailed(_))));
    }
}
