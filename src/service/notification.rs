//! Notification service for the in-app notification feed.

use sea_orm::DatabaseConnection;

use crate::{
    data::notification::NotificationRepository, error::AppError,
    model::notification::PaginatedNotifications,
};

/// Service providing business logic for a user's notification feed.
pub struct NotificationService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    /// Creates a new NotificationService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `NotificationService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a user's notifications with pagination, newest first.
    ///
    /// # Arguments
    /// - `user_id` - User whose feed to read
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of notifications per page
    ///
    /// # Returns
    /// - `Ok(PaginatedNotifications)` - The requested page with pagination metadata
    /// - `Err(AppError::DbErr)` - Database error during pagination query
    pub async fn get_notifications(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedNotifications, AppError> {
        let notification_repo = NotificationRepository::new(self.db);

        let (notifications, total) = notification_repo
            .get_paginated_by_user(user_id, page, per_page)
            .await?;

        let total_pages = (total as f64 / per_page as f64).ceil() as u64;

        Ok(PaginatedNotifications {
            notifications,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Marks one of the user's notifications as read.
    ///
    /// Another user's notification is indistinguishable from a missing one.
    ///
    /// # Arguments
    /// - `notification_id` - Notification to mark
    /// - `user_id` - User the notification must belong to
    ///
    /// # Returns
    /// - `Ok(())` - Notification marked read
    /// - `Err(AppError::NotFound)` - No such notification for this user
    pub async fn mark_read(&self, notification_id: i32, user_id: i32) -> Result<(), AppError> {
        let notification_repo = NotificationRepository::new(self.db);

        if !notification_repo.mark_read(notification_id, user_id).await? {
            return Err(AppError::NotFound("Notification not found".to_string()));
        }

        Ok(())
    }
}
