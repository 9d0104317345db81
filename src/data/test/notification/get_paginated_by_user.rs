use super::*;

/// Tests that notifications come back newest first.
///
/// Expected: Ok with the latest notification leading the page
#[tokio::test]
async fn orders_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let first = factory::notification::create_notification(db, user.id).await?;
    let second = factory::notification::create_notification(db, user.id).await?;
    let third = factory::notification::create_notification(db, user.id).await?;

    let repo = NotificationRepository::new(db);
    let (notifications, total) = repo.get_paginated_by_user(user.id, 0, 10).await?;

    assert_eq!(total, 3);
    assert_eq!(notifications.len(), 3);
    assert_eq!(notifications[0].id, third.id);
    assert_eq!(notifications[1].id, second.id);
    assert_eq!(notifications[2].id, first.id);

    Ok(())
}

/// Tests splitting notifications across pages.
///
/// Expected: Ok with the oldest notification alone on the second page
#[tokio::test]
async fn paginates_results() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let oldest = factory::notification::create_notification(db, user.id).await?;
    factory::notification::create_notification(db, user.id).await?;
    factory::notification::create_notification(db, user.id).await?;

    let repo = NotificationRepository::new(db);
    let (page_zero, total) = repo.get_paginated_by_user(user.id, 0, 2).await?;
    assert_eq!(total, 3);
    assert_eq!(page_zero.len(), 2);

    let (page_one, _) = repo.get_paginated_by_user(user.id, 1, 2).await?;
    assert_eq!(page_one.len(), 1);
    assert_eq!(page_one[0].id, oldest.id);

    Ok(())
}

/// Tests that one user's listing never includes another's notifications.
///
/// Expected: Ok with only the requested user's notifications
#[tokio::test]
async fn scopes_to_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let own = factory::notification::create_notification(db, user.id).await?;
    factory::notification::create_notification(db, other.id).await?;

    let repo = NotificationRepository::new(db);
    let (notifications, total) = repo.get_paginated_by_user(user.id, 0, 10).await?;

    assert_eq!(total, 1);
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].id, own.id);

    Ok(())
}
