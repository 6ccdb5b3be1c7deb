use sea_orm::entity::prelude::*;

use crate::auth::application::domain::entities::UserId;
use crate::playlist::application::domain::entities::Playlist;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "playlists")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub name: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    #[sea_orm(column_type = "Text")]
    pub link: String,

    pub user_id: String,

    pub user_name: String,

    #[sea_orm(nullable)]
    pub image: Option<String>,

    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> Playlist {
        Playlist {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            link: self.link.clone(),
            user_id: UserId::from(self.user_id.clone()),
            user_name: self.user_name.clone(),
            image: self.image.clone(),
            created_at: self.created_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
