//! Notification factory for creating test notification entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::notification::NotificationKind;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test notifications with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use entity::notification::NotificationKind;
/// use test_utils::factory::notification::NotificationFactory;
///
/// let notification = NotificationFactory::new(&db, user.id)
///     .kind(NotificationKind::PollClosed)
///     .related_id(Some(poll.id))
///     .build()
///     .await?;
/// ```
pub struct NotificationFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    kind: NotificationKind,
    title: String,
    message: String,
    related_id: Option<i32>,
    is_read: bool,
}

impl<'a> NotificationFactory<'a> {
    /// Creates a new NotificationFactory with default values.
    ///
    /// Defaults:
    /// - kind: `NotificationKind::PollCreated`
    /// - title: `"Notification {id}"` where id is auto-incremented
    /// - message: `"Test notification message"`
    /// - related_id: `None`
    /// - is_read: `false`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Recipient user
    ///
    /// # Returns
    /// - `NotificationFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            kind: NotificationKind::PollCreated,
            title: format!("Notification {}", id),
            message: "Test notification message".to_string(),
            related_id: None,
            is_read: false,
        }
    }

    /// Sets the notification kind.
    pub fn kind(mut self, kind: NotificationKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the notification title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the notification message body.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Sets the related entity id (poll or team) the notification refers to.
    pub fn related_id(mut self, related_id: Option<i32>) -> Self {
        self.related_id = related_id;
        self
    }

    /// Sets whether the notification has been read.
    pub fn is_read(mut self, is_read: bool) -> Self {
        self.is_read = is_read;
        self
    }

    /// Builds and inserts the notification entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::notification::Model)` - Created notification entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::notification::Model, DbErr> {
        entity::notification::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(self.user_id),
            kind: ActiveValue::Set(self.kind),
            title: ActiveValue::Set(self.title),
            message: ActiveValue::Set(self.message),
            related_id: ActiveValue::Set(self.related_id),
            is_read: ActiveValue::Set(self.is_read),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a notification with default values for the specified user.
///
/// Shorthand for `NotificationFactory::new(db, user_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Recipient user
///
/// # Returns
/// - `Ok(entity::notification::Model)` - Created notification entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_notification(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::notification::Model, DbErr> {
    NotificationFactory::new(db, user_id).build().await
}
