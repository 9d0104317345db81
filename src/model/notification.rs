//! Notification domain models and parameters.

use chrono::{DateTime, Utc};
use entity::notification::NotificationKind;

use crate::dto::notification::{NotificationDto, NotificationKindDto, PaginatedNotificationsDto};

/// In-app notification delivered to a single user.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// Unique identifier for the notification.
    pub id: i32,
    /// ID of the user the notification belongs to.
    pub user_id: i32,
    /// What happened.
    pub kind: NotificationKind,
    /// Short headline for the notification.
    pub title: String,
    /// Full notification text.
    pub message: String,
    /// ID of the poll or team the notification refers to, when there is one.
    pub related_id: Option<i32>,
    /// Whether the user has read the notification.
    pub is_read: bool,
    /// Timestamp when the notification was recorded.
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Converts an entity model to a notification domain model at the repository boundary.
    pub fn from_entity(entity: entity::notification::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            kind: entity.kind,
            title: entity.title,
            message: entity.message,
            related_id: entity.related_id,
            is_read: entity.is_read,
            created_at: entity.created_at,
        }
    }

    /// Converts the notification domain model to a DTO for API responses.
    ///
    /// The owning user ID is dropped; notifications are always fetched scoped
    /// to the authenticated user.
    pub fn into_dto(self) -> NotificationDto {
        let kind = match self.kind {
            NotificationKind::PollCreated => NotificationKindDto::PollCreated,
            NotificationKind::PollClosed => NotificationKindDto::PollClosed,
            NotificationKind::TeamMemberAdded => NotificationKindDto::TeamMemberAdded,
        };

        NotificationDto {
            id: self.id,
            kind,
            title: self.title,
            message: self.message,
            related_id: self.related_id,
            is_read: self.is_read,
            created_at: self.created_at,
        }
    }
}

/// Paginated collection of notifications with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedNotifications {
    /// Notifications for this page, newest first.
    pub notifications: Vec<Notification>,
    /// Total number of notifications across all pages.
    pub total: u64,
    /// Current page number (zero-indexed).
    pub page: u64,
    /// Number of notifications per page.
    pub per_page: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

impl PaginatedNotifications {
    /// Converts the paginated notifications domain model to a DTO for API responses.
    pub fn into_dto(self) -> PaginatedNotificationsDto {
        PaginatedNotificationsDto {
            notifications: self.notifications.into_iter().map(|n| n.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Parameters for recording a new notification.
#[derive(Debug, Clone)]
pub struct CreateNotificationParams {
    /// ID of the user to notify.
    pub user_id: i32,
    /// What happened.
    pub kind: NotificationKind,
    /// Short headline for the notification.
    pub title: String,
    /// Full notification text.
    pub message: String,
    /// ID of the poll or team the notification refers to, when there is one.
    pub related_id: Option<i32>,
}
