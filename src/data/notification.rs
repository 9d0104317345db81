//! Notification data repository for database operations.
//!
//! This module provides the `NotificationRepository` for recording and querying
//! in-app notifications. Reads are always scoped to the owning user.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::notification::{CreateNotificationParams, Notification};

/// Repository providing database operations for notifications.
pub struct NotificationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationRepository<'a> {
    /// Creates a new NotificationRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a notification for a single user.
    ///
    /// # Arguments
    /// - `param` - Notification parameters containing recipient, kind, and content
    ///
    /// # Returns
    /// - `Ok(Notification)` - The recorded notification, unread
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateNotificationParams) -> Result<Notification, DbErr> {
        let entity = entity::notification::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            kind: ActiveValue::Set(param.kind),
            title: ActiveValue::Set(param.title),
            message: ActiveValue::Set(param.message),
            related_id: ActiveValue::Set(param.related_id),
            is_read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Notification::from_entity(entity))
    }

    /// Records notifications for multiple users at once.
    ///
    /// # Arguments
    /// - `params` - Notification parameters, one per recipient
    ///
    /// # Returns
    /// - `Ok(())` - All notifications recorded (returns early if the vec is empty)
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create_many(&self, params: Vec<CreateNotificationParams>) -> Result<(), DbErr> {
        if params.is_empty() {
            return Ok(());
        }

        for param in params {
            self.create(param).await?;
        }

        Ok(())
    }

    /// Gets paginated notifications for a user, newest first.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user whose notifications to list
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of notifications to return per page
    ///
    /// # Returns
    /// - `Ok((notifications, total))` - Vector of notifications and total count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated_by_user(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Notification>, u64), DbErr> {
        let paginator = entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .order_by_desc(entity::notification::Column::CreatedAt)
            .order_by_desc(entity::notification::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let notifications = entities.into_iter().map(Notification::from_entity).collect();

        Ok((notifications, total))
    }

    /// Marks a notification read, scoped to its owner.
    ///
    /// The user id is part of the filter, so marking another user's
    /// notification behaves exactly like marking a missing one.
    ///
    /// # Arguments
    /// - `id` - ID of the notification to mark
    /// - `user_id` - ID of the user the notification must belong to
    ///
    /// # Returns
    /// - `Ok(true)` - The notification existed, belonged to the user, and is now read
    /// - `Ok(false)` - No matching notification
    /// - `Err(DbErr)` - Database error during update
    pub async fn mark_read(&self, id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Notification::update_many()
            .filter(entity::notification::Column::Id.eq(id))
            .filter(entity::notification::Column::UserId.eq(user_id))
            .col_expr(
                entity::notification::Column::IsRead,
                sea_orm::sea_query::Expr::value(true),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
