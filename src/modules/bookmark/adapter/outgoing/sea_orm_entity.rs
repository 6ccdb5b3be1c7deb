use sea_orm::entity::prelude::*;

use crate::auth::application::domain::entities::UserId;
use crate::bookmark::application::domain::entities::{Bookmark, BookmarkTarget, BookmarkTargetError};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "bookmarks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub user_id: String,

    pub target_id: String,

    #[sea_orm(column_name = "type")]
    pub target_type: String,

    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> Result<Bookmark, BookmarkTargetError> {
        Ok(Bookmark {
            id: self.id.clone(),
            user_id: UserId::from(self.user_id.clone()),
            target: BookmarkTarget::parse(&self.target_type, &self.target_id)?,
            created_at: self.created_at.into(),
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::user::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::UserId",
        to = "crate::modules::user::adapter::outgoing::sea_orm_entity::Column::Id",
        on_delete = "Cascade"
    )]
    User,
}

impl ActiveModelBehavior for ActiveModel {}
