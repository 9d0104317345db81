use super::*;

/// Tests closing an open poll.
///
/// Expected: Ok with is_active false and closed_at stamped
#[tokio::test]
async fn closes_open_poll() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_poll_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _team, poll) = factory::helpers::create_poll_with_dependencies(db).await?;

    let repo = PollRepository::new(db);
    let closed_at = Utc::now();
    let closed = repo.close(poll.id, closed_at).await?;

    assert_eq!(closed.id, poll.id);
    assert!(!closed.is_active);
    assert_eq!(closed.closed_at, Some(closed_at));

    Ok(())
}

/// Tests closing a poll that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_nonexistent_poll() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_poll_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PollRepository::new(db);
    let result = repo.close(999, Utc::now()).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
