use super::*;

/// Tests marking one's own notification read.
///
/// Expected: Ok(true) with is_read persisted
#[tokio::test]
async fn marks_owned_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let notification = factory::notification::create_notification(db, user.id).await?;

    let repo = NotificationRepository::new(db);
    let marked = repo.mark_read(notification.id, user.id).await?;

    assert!(marked);
    let stored = entity::prelude::Notification::find_by_id(notification.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.is_read);

    Ok(())
}

/// Tests marking a notification that belongs to someone else.
///
/// Expected: Ok(false) with the notification left unread
#[tokio::test]
async fn rejects_other_users_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let intruder = factory::user::create_user(db).await?;
    let notification = factory::notification::create_notification(db, owner.id).await?;

    let repo = NotificationRepository::new(db);
    let marked = repo.mark_read(notification.id, intruder.id).await?;

    assert!(!marked);
    let stored = entity::prelude::Notification::find_by_id(notification.id)
        .one(db)
        .await?
        .unwrap();
    assert!(!stored.is_read);

    Ok(())
}

/// Tests marking a notification that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_nonexistent_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = NotificationRepository::new(db);
    let marked = repo.mark_read(999, user.id).await?;

    assert!(!marked);

    Ok(())
}
