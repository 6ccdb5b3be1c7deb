use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseBackend, DatabaseConnection, DbErr, EntityTrait, Set, Statement,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::post::application::{
    domain::entities::Post,
    ports::outgoing::{NewPost, PostChanges, PostRepository, PostRepositoryError},
};

use super::sea_orm_entity::{ActiveModel as PostActiveModel, Entity as PostEntity};

#[derive(Debug, Clone)]
pub struct PostRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PostRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    // =====================================================
    // SQL builders
    // =====================================================

    fn toggle_visibility_stmt(post_id: &str) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            UPDATE posts
            SET is_published = NOT is_published,
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
            vec![post_id.into()],
        )
    }

    fn increment_likes_stmt(post_id: &str) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            UPDATE posts
            SET likes_count = likes_count + 1,
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
            vec![post_id.into()],
        )
    }

    fn decrement_likes_stmt(post_id: &str) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            UPDATE posts
            SET likes_count = GREATEST(likes_count - 1, 0),
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
            vec![post_id.into()],
        )
    }

    fn reconcile_counters_stmt(post_id: &str) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            UPDATE posts p
            SET likes_count = (SELECT COUNT(*) FROM post_likes l WHERE l.post_id = p.id),
                comments_count = (SELECT COUNT(*) FROM comments c WHERE c.post_id = p.id),
                updated_at = now()
            WHERE p.id = $1
            RETURNING p.*
            "#,
            vec![post_id.into()],
        )
    }

    fn map_db_err(e: DbErr) -> PostRepositoryError {
        match e {
            DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => PostRepositoryError::NotFound,
            other => PostRepositoryError::DatabaseError(other.to_string()),
        }
    }

    /// Run a single-row `UPDATE ... RETURNING` and map "no row" to not found.
    async fn update_returning(&self, stmt: Statement) -> Result<Post, PostRepositoryError> {
        PostEntity::find()
            .from_raw_sql(stmt)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .map(|m| m.to_domain())
            .ok_or(PostRepositoryError::NotFound)
    }
}

#[async_trait]
impl PostRepository for PostRepositoryPostgres {
    async fn create(&self, data: NewPost) -> Result<Post, PostRepositoryError> {
        let active = PostActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            content: Set(data.content),
            author_id: Set(data.author_id.into_inner()),
            is_published: Set(data.is_published),
            likes_count: Set(0),
            comments_count: Set(0),
            ..Default::default()
        };

        let inserted = active.insert(&*self.db).await.map_err(Self::map_db_err)?;

        Ok(inserted.to_domain())
    }

    async fn update(
        &self,
        post_id: &str,
        changes: PostChanges,
    ) -> Result<Post, PostRepositoryError> {
        let mut active = PostActiveModel {
            id: Set(post_id.to_string()),
            ..Default::default()
        };
        if let Some(content) = changes.content {
            active.content = Set(content);
        }
        if let Some(is_published) = changes.is_published {
            active.is_published = Set(is_published);
        }

        let updated = active.update(&*self.db).await.map_err(Self::map_db_err)?;

        Ok(updated.to_domain())
    }

    async fn delete(&self, post_id: &str) -> Result<(), PostRepositoryError> {
        let result = PostEntity::delete_by_id(post_id.to_string())
            .exec(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        if result.rows_affected == 0 {
            return Err(PostRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn toggle_visibility(&self, post_id: &str) -> Result<Post, PostRepositoryError> {
        self.update_returning(Self::toggle_visibility_stmt(post_id))
            .await
    }

    async fn increment_likes(&self, post_id: &str) -> Result<Post, PostRepositoryError> {
        self.update_returning(Self::increment_likes_stmt(post_id))
            .await
    }

    async fn decrement_likes(&self, post_id: &str) -> Result<Post, PostRepositoryError> {
        self.update_returning(Self::decrement_likes_stmt(post_id))
            .await
    }

    async fn reconcile_counters(&self, post_id: &str) -> Result<Post, PostRepositoryError> {
        self.update_returning(Self::reconcile_counters_stmt(post_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{MockDatabase, MockExecResult, RuntimeErr};

    use crate::auth::application::domain::entities::UserId;
    use super::super::sea_orm_entity::Model as PostModel;

    fn post_model(id: &str, likes: i32, published: bool) -> PostModel {
        let now = Utc::now().fixed_offset();
        PostModel {
            id: id.to_string(),
            content: "hello".to_string(),
            author_id: "u1".to_string(),
            created_at: now,
            updated_at: now,
            is_published: published,
            likes_count: likes,
            comments_count: 0,
        }
    }

    fn repo(db: MockDatabase) -> PostRepositoryPostgres {
        PostRepositoryPostgres::new(Arc::new(db.into_connection()))
    }

    #[tokio::test]
    async fn create_returns_inserted_post() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![post_model("p1", 0, true)]]);

        let post = repo(db)
            .create(NewPost {
                content: "hello".into(),
                author_id: UserId::from("u1"),
                is_published: true,
            })
            .await
            .unwrap();

        assert_eq!(post.id, "p1");
        assert_eq!(post.author_id, UserId::from("u1"));
    }

    #[tokio::test]
    async fn update_of_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<PostModel>::new()]);

        let result = repo(db)
            .update(
                "ghost",
                PostChanges {
                    content: Some("x".into()),
                    is_published: None,
                },
            )
            .await;

        assert!(matches!(result, Err(PostRepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn delete_without_rows_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).append_exec_results([
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ]);

        let result = repo(db).delete("ghost").await;

        assert!(matches!(result, Err(PostRepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn increment_returns_updated_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![post_model("p1", 4, true)]]);

        let post = repo(db).increment_likes("p1").await.unwrap();

        assert_eq!(post.likes_count, 4);
    }

    #[tokio::test]
    async fn decrement_on_missing_post_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<PostModel>::new()]);

        let result = repo(db).decrement_likes("ghost").await;

        assert!(matches!(result, Err(PostRepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn toggle_visibility_returns_flipped_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![post_model("p1", 0, false)]]);

        let post = repo(db).toggle_visibility("p1").await.unwrap();

        assert!(!post.is_published);
    }

    #[tokio::test]
    async fn database_error_is_surfaced() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).append_query_errors(vec![
            DbErr::Query(RuntimeErr::Internal("connection lost".into())),
        ]);

        let result = repo(db).reconcile_counters("p1").await;

        assert!(matches!(result, Err(PostRepositoryError::DatabaseError(_))));
    }
}
