use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, Statement,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::engagement::application::{
    domain::entities::{LikeState, PostLike},
    ports::outgoing::{LikeRepository, LikeRepositoryError},
};

use super::sea_orm_entity::{Column as LikeColumn, Entity as LikeEntity};

#[derive(Debug, Clone)]
pub struct LikeRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl LikeRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    // =====================================================
    // SQL builders
    // =====================================================

    fn delete_like_stmt(post_id: &str, user_id: &UserId) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            DELETE FROM post_likes
            WHERE post_id = $1
              AND user_id = $2
            "#,
            vec![post_id.into(), user_id.value().into()],
        )
    }

    /// Idempotent insert; the unique `(post_id, user_id)` index absorbs a
    /// concurrent duplicate.
    fn insert_like_stmt(post_id: &str, user_id: &UserId) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            INSERT INTO post_likes (id, post_id, user_id, created_at)
            VALUES ($1, $2, $3, now())
            ON CONFLICT (post_id, user_id) DO NOTHING
            "#,
            vec![
                Uuid::new_v4().to_string().into(),
                post_id.into(),
                user_id.value().into(),
            ],
        )
    }

    fn map_db_err(e: DbErr) -> LikeRepositoryError {
        LikeRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl LikeRepository for LikeRepositoryPostgres {
    async fn count_likes(&self, post_id: &str) -> Result<u64, LikeRepositoryError> {
        LikeEntity::find()
            .filter(LikeColumn::PostId.eq(post_id))
            .count(&*self.db)
            .await
            .map_err(Self::map_db_err)
    }

    async fn find_like(
        &self,
        post_id: &str,
        user_id: &UserId,
    ) -> Result<Option<PostLike>, LikeRepositoryError> {
        let model = LikeEntity::find()
            .filter(LikeColumn::PostId.eq(post_id))
            .filter(LikeColumn::UserId.eq(user_id.value()))
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(model.map(|m| m.to_domain()))
    }

    async fn toggle_like(
        &self,
        post_id: &str,
        user_id: &UserId,
    ) -> Result<LikeState, LikeRepositoryError> {
        let deleted = self
            .db
            .execute(Self::delete_like_stmt(post_id, user_id))
            .await
            .map_err(Self::map_db_err)?;

        if deleted.rows_affected() > 0 {
            return Ok(LikeState::NotLiked);
        }

        self.db
            .execute(Self::insert_like_stmt(post_id, user_id))
            .await
            .map_err(Self::map_db_err)?;

        Ok(LikeState::Liked)
    }
}
