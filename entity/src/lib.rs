pub mod prelude;

pub mod notification;
pub mod poll;
pub mod poll_response;
pub mod poll_slot;
pub mod team;
pub mod team_member;
pub mod user;
