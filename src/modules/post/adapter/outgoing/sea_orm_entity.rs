use sea_orm::entity::prelude::*;

use crate::auth::application::domain::entities::UserId;
use crate::post::application::domain::entities::Post;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub content: String,

    pub author_id: String,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,

    pub is_published: bool,

    pub likes_count: i32,

    pub comments_count: i32,
}

impl Model {
    pub fn to_domain(&self) -> Post {
        Post {
            id: self.id.clone(),
            content: self.content.clone(),
            author_id: UserId::from(self.author_id.clone()),
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
            is_published: self.is_published,
            likes_count: self.likes_count,
            comments_count: self.comments_count,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::user::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::AuthorId",
        to = "crate::modules::user::adapter::outgoing::sea_orm_entity::Column::Id",
        on_delete = "Cascade"
    )]
    Author,
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        #[cfg(feature = "no_db_triggers")]
        {
            use chrono::Utc;
            use sea_orm::ActiveValue::Set;

            if !_insert {
                self.updated_at = Set(Utc::now().into());
            }
        }

        Ok(self)
    }
}
