//! Wire-format DTOs shared by the HTTP controllers.
//!
//! Request bodies carry dates and times as strings ("YYYY-MM-DD", "HH:MM");
//! the service layer parses and validates them. Response bodies serialize
//! timestamps as epoch seconds.

pub mod api;
pub mod auth;
pub mod notification;
pub mod poll;
pub mod team;
