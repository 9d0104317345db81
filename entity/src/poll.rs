//! Scheduling poll over a candidate date range. Slots are materialized
//! into `poll_slot` at creation; a poll is open while `is_active` is
//! true and its deadline (if any) has not passed.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "poll")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub team_id: i32,
    pub creator_id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    /// First candidate day, inclusive.
    pub start_date: Date,
    /// Last candidate day, inclusive.
    pub end_date: Date,
    /// Daily window start.
    pub start_time: Time,
    /// Daily window end (exclusive).
    pub end_time: Time,
    pub interval_minutes: i32,
    pub deadline: Option<DateTimeUtc>,
    /// When false, a participant keeps at most one `available` response
    /// across the whole poll.
    pub allow_multiple_selection: bool,
    pub is_active: bool,
    pub closed_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::poll_response::Entity")]
    PollResponse,
    #[sea_orm(has_many = "super::poll_slot::Entity")]
    PollSlot,
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::TeamId",
        to = "super::team::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Team,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatorId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::poll_response::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PollResponse.def()
    }
}

impl Related<super::poll_slot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PollSlot.def()
    }
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
