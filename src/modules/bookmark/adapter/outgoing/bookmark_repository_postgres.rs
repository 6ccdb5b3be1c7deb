use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Select, Statement,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::bookmark::application::{
    domain::entities::{Bookmark, BookmarkTarget},
    ports::outgoing::{BookmarkRepository, BookmarkRepositoryError},
};

use super::sea_orm_entity::{Column as BookmarkColumn, Entity as BookmarkEntity};

#[derive(Debug, Clone)]
pub struct BookmarkRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl BookmarkRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn insert_stmt(user_id: &UserId, target: &BookmarkTarget) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            INSERT INTO bookmarks (id, user_id, target_id, type, created_at)
            VALUES ($1, $2, $3, $4, now())
            ON CONFLICT (user_id, target_id, type) DO NOTHING
            "#,
            vec![
                Uuid::new_v4().to_string().into(),
                user_id.value().into(),
                target.target_id().into(),
                target.kind().as_str().into(),
            ],
        )
    }

    fn matching(user_id: &UserId, target: &BookmarkTarget) -> Select<BookmarkEntity> {
        BookmarkEntity::find()
            .filter(BookmarkColumn::UserId.eq(user_id.value()))
            .filter(BookmarkColumn::TargetId.eq(target.target_id()))
            .filter(BookmarkColumn::TargetType.eq(target.kind().as_str()))
    }

    fn map_db_err(e: DbErr) -> BookmarkRepositoryError {
        BookmarkRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl BookmarkRepository for BookmarkRepositoryPostgres {
    async fn add(
        &self,
        user_id: &UserId,
        target: &BookmarkTarget,
    ) -> Result<(), BookmarkRepositoryError> {
        self.db
            .execute(Self::insert_stmt(user_id, target))
            .await
            .map_err(Self::map_db_err)?;

        Ok(())
    }

    async fn remove(
        &self,
        user_id: &UserId,
        target: &BookmarkTarget,
    ) -> Result<u64, BookmarkRepositoryError> {
        let result = BookmarkEntity::delete_many()
            .filter(BookmarkColumn::UserId.eq(user_id.value()))
            .filter(BookmarkColumn::TargetId.eq(target.target_id()))
            .filter(BookmarkColumn::TargetType.eq(target.kind().as_str()))
            .exec(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(result.rows_affected)
    }

    async fn exists(
        &self,
        user_id: &UserId,
        target: &BookmarkTarget,
    ) -> Result<bool, BookmarkRepositoryError> {
        let count = Self::matching(user_id, target)
            .count(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(count > 0)
    }

    async fn list_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Bookmark>, BookmarkRepositoryError> {
        let models = BookmarkEntity::find()
            .filter(BookmarkColumn::UserId.eq(user_id.value()))
            .order_by_desc(BookmarkColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(models
            .iter()
            .filter_map(|m| match m.to_domain() {
                Ok(bookmark) => Some(bookmark),
                Err(e) => {
                    tracing::warn!(bookmark_id = %m.id, error = %e, "Skipping unreadable bookmark row");
                    None
                }
            })
            .collect())
    }
}
