use crate::data::user::UserRepository;
use crate::model::user::CreateUserParams;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod record_login;
