//! HTTP request handlers grouped by resource.

pub mod auth;
pub mod notification;
pub mod poll;
pub mod team;
