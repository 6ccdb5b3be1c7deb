use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create bookmarks table
        // target_id points at posts.id or playlists.id depending on type,
        // so it cannot carry a foreign key.
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Bookmarks::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Bookmarks::Id).text().not_null().primary_key())
                    .col(ColumnDef::new(Bookmarks::UserId).text().not_null())
                    .col(ColumnDef::new(Bookmarks::TargetId).text().not_null())
                    .col(ColumnDef::new(Bookmarks::Type).string_len(16).not_null())
                    .col(
                        ColumnDef::new(Bookmarks::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookmarks_user_id")
                            .from(Bookmarks::Table, Bookmarks::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE bookmarks
                ADD CONSTRAINT chk_bookmarks_type
                CHECK (type IN ('post', 'playlist'));
                "#,
            )
            .await?;

        // One bookmark per (user, target, type)
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX idx_bookmarks_user_target_unique
                ON bookmarks (user_id, target_id, type);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_bookmarks_user_created_at
                ON bookmarks (user_id, created_at DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_bookmarks_user_target_unique;
                DROP INDEX IF EXISTS idx_bookmarks_user_created_at;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Bookmarks::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Bookmarks {
    Table,
    Id,
    UserId,
    TargetId,
    Type,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
