mod notification;
mod team;
mod team_member;
mod user;
