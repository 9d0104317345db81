use sea_orm_migration::{prelude::*, schema::*};

use super::m20260805_000001_create_user_table::User;
use super::m20260805_000002_create_team_table::Team;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Poll::Table)
                    .if_not_exists()
                    .col(pk_auto(Poll::Id))
                    .col(integer(Poll::TeamId))
                    .col(integer(Poll::CreatorId))
                    .col(string(Poll::Title))
                    .col(text_null(Poll::Description))
                    .col(date(Poll::StartDate))
                    .col(date(Poll::EndDate))
                    .col(time(Poll::StartTime))
                    .col(time(Poll::EndTime))
                    .col(integer(Poll::IntervalMinutes))
                    .col(timestamp_null(Poll::Deadline))
                    .col(boolean(Poll::AllowMultipleSelection).default(true))
                    .col(boolean(Poll::IsActive).default(true))
                    .col(timestamp_null(Poll::ClosedAt))
                    .col(
                        timestamp(Poll::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_poll_team_id")
                            .from(Poll::Table, Poll::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_poll_creator_id")
                            .from(Poll::Table, Poll::CreatorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Poll::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Poll {
    Table,
    Id,
    TeamId,
    CreatorId,
    Title,
    Description,
    StartDate,
    EndDate,
    StartTime,
    EndTime,
    IntervalMinutes,
    Deadline,
    AllowMultipleSelection,
    IsActive,
    ClosedAt,
    CreatedAt,
}
