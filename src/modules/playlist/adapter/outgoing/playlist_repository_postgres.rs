use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, EntityTrait,
    QueryOrder, Set, Statement,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::playlist::application::{
    domain::entities::Playlist,
    ports::outgoing::{NewPlaylist, PlaylistRepository, PlaylistRepositoryError},
};

use super::sea_orm_entity::{
    ActiveModel as PlaylistActiveModel, Column as PlaylistColumn, Entity as PlaylistEntity,
};

#[derive(Debug, Clone)]
pub struct PlaylistRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PlaylistRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> PlaylistRepositoryError {
        PlaylistRepositoryError::DatabaseError(e.to_string())
    }
}

// =====================================================
// SQL builders
// =====================================================

fn sync_user_name_stmt(user_id: &UserId) -> Statement {
    Statement::from_sql_and_values(
        DatabaseBackend::Postgres,
        r#"
        UPDATE playlists p
        SET user_name = u.name
        FROM users u
        WHERE u.id = p.user_id
          AND p.user_id = $1
          AND p.user_name IS DISTINCT FROM u.name
        "#,
        vec![user_id.value().into()],
    )
}

#[async_trait]
impl PlaylistRepository for PlaylistRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Playlist>, PlaylistRepositoryError> {
        let models = PlaylistEntity::find()
            .order_by_desc(PlaylistColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(models.iter().map(|m| m.to_domain()).collect())
    }

    async fn create(&self, data: NewPlaylist) -> Result<Playlist, PlaylistRepositoryError> {
        let active = PlaylistActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            description: Set(data.description),
            link: Set(data.link),
            user_id: Set(data.user_id.into_inner()),
            user_name: Set(data.user_name),
            image: Set(data.image),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let inserted = active.insert(&*self.db).await.map_err(Self::map_db_err)?;

        Ok(inserted.to_domain())
    }

    async fn delete(&self, id: Uuid) -> Result<u64, PlaylistRepositoryError> {
        let result = PlaylistEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(result.rows_affected)
    }

    async fn sync_user_name(&self, user_id: &UserId) -> Result<u64, PlaylistRepositoryError> {
        let result = self
            .db
            .execute(sync_user_name_stmt(user_id))
            .await
            .map_err(Self::map_db_err)?;

        Ok(result.rows_affected())
    }
}
