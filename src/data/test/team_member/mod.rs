use crate::data::team_member::TeamMemberRepository;
use entity::team_member::TeamRole;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_managers;
mod create;
