use async_trait::async_trait;

use crate::user::application::{
    domain::entities::User,
    ports::{
        incoming::use_cases::{GetUsersError, GetUsersUseCase},
        outgoing::UserQuery,
    },
};

#[derive(Debug, Clone)]
pub struct GetUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetUsersUseCase for GetUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<User>, GetUsersError> {
        self.query.list_users().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to list users");
            GetUsersError::QueryFailed(e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::auth::application::domain::entities::UserId;
    use crate::user::application::ports::outgoing::UserQueryError;

    struct MockUserQuery {
        result: Result<Vec<User>, UserQueryError>,
    }

    #[async_trait]
    impl UserQuery for MockUserQuery {
        async fn list_users(&self) -> Result<Vec<User>, UserQueryError> {
            self.result.clone()
        }

        async fn find_by_id(&self, _id: &UserId) -> Result<Option<User>, UserQueryError> {
            unimplemented!()
        }
    }

    fn user(id: &str, name: &str) -> User {
        User {
            id: UserId::from(id),
            name: name.to_string(),
            email: format!("{}@example.com", id),
            email_verified: true,
            image: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn returns_every_user_from_query() {
        // Arrange
        let service = GetUsersService::new(MockUserQuery {
            result: Ok(vec![user("u1", "Ada"), user("u2", "Lin")]),
        });

        // Act
        let users = service.execute().await.unwrap();

        // Assert
        assert_eq!(users.len(), 2);
        assert_eq!(users[1].name, "Lin");
    }

    #[tokio::test]
    async fn query_error_is_mapped() {
        let service = GetUsersService::new(MockUserQuery {
            result: Err(UserQueryError::DatabaseError("down".into())),
        });

        let result = service.execute().await;

        assert!(matches!(result, Err(GetUsersError::QueryFailed(_))));
    }
}
