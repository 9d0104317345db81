use crate::data::team::TeamRepository;
use crate::model::team::{CreateTeamParams, UpdateTeamParams};
use entity::team_member::TeamRole;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all_for_user;
