use crate::data::notification::NotificationRepository;
use crate::model::notification::CreateNotificationParams;
use entity::notification::NotificationKind;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod get_paginated_by_user;
mod mark_read;

/// Builds CreateNotificationParams for the given recipient.
fn notification_params(user_id: i32, title: &str) -> CreateNotificationParams {
    CreateNotificationParams {
        user_id,
        kind: NotificationKind::PollCreated,
        title: title.to_string(),
        message: "A new poll is open for responses".to_string(),
        related_id: None,
    }
}
