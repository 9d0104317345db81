use sea_orm_migration::{prelude::*, schema::*};

use super::m20260805_000001_create_user_table::User;
use super::m20260812_000004_create_poll_table::Poll;
use super::m20260812_000005_create_poll_slot_table::PollSlot;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PollResponse::Table)
                    .if_not_exists()
                    .col(pk_auto(PollResponse::Id))
                    .col(integer(PollResponse::PollId))
                    .col(integer(PollResponse::SlotId))
                    .col(integer(PollResponse::UserId))
                    .col(string(PollResponse::Availability))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_poll_response_poll_id")
                            .from(PollResponse::Table, PollResponse::PollId)
                            .to(Poll::Table, Poll::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_poll_response_slot_id")
                            .from(PollResponse::Table, PollResponse::SlotId)
                            .to(PollSlot::Table, PollSlot::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_poll_response_user_id")
                            .from(PollResponse::Table, PollResponse::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_poll_response_unique")
                            .col(PollResponse::UserId)
                            .col(PollResponse::SlotId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PollResponse::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PollResponse {
    Table,
    Id,
    PollId,
    SlotId,
    UserId,
    Availability,
}
