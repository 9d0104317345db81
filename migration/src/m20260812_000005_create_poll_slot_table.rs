use sea_orm_migration::{prelude::*, schema::*};

use super::m20260812_000004_create_poll_table::Poll;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PollSlot::Table)
                    .if_not_exists()
                    .col(pk_auto(PollSlot::Id))
                    .col(integer(PollSlot::PollId))
                    .col(date(PollSlot::SlotDate))
                    .col(time(PollSlot::StartTime))
                    .col(time(PollSlot::EndTime))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_poll_slot_poll_id")
                            .from(PollSlot::Table, PollSlot::PollId)
                            .to(Poll::Table, Poll::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_poll_slot_unique")
                            .col(PollSlot::PollId)
                            .col(PollSlot::SlotDate)
                            .col(PollSlot::StartTime),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PollSlot::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PollSlot {
    Table,
    Id,
    PollId,
    SlotDate,
    StartTime,
    EndTime,
}
