pub use sea_orm_migration::prelude::*;

mod m20260805_000001_create_user_table;
mod m20260805_000002_create_team_table;
mod m20260805_000003_create_team_member_table;
mod m20260812_000004_create_poll_table;
mod m20260812_000005_create_poll_slot_table;
mod m20260812_000006_create_poll_response_table;
mod m20260818_000007_create_notification_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260805_000001_create_user_table::Migration),
            Box::new(m20260805_000002_create_team_table::Migration),
            Box::new(m20260805_000003_create_team_member_table::Migration),
            Box::new(m20260812_000004_create_poll_table::Migration),
            Box::new(m20260812_000005_create_poll_slot_table::Migration),
            Box::new(m20260812_000006_create_poll_response_table::Migration),
            Box::new(m20260818_000007_create_notification_table::Migration),
        ]
    }
}
