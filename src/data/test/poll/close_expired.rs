use super::*;

/// Tests the deadline sweep against a mixed set of polls.
///
/// Only the open poll whose deadline has passed transitions; polls with
/// future deadlines, no deadline, or an earlier close are left alone.
///
/// Expected: Ok with only the expired open poll in the returned list
#[tokio::test]
async fn closes_only_expired_open_polls() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_poll_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, team, _membership) = factory::helpers::create_team_with_manager(db).await?;
    let now = Utc::now();

    let expired = factory::poll::PollFactory::new(db, team.id, user.id)
        .deadline(Some(now - Duration::hours(1)))
        .build()
        .await?;
    let upcoming = factory::poll::PollFactory::new(db, team.id, user.id)
        .deadline(Some(now + Duration::hours(1)))
        .build()
        .await?;
    let open_ended = factory::poll::create_poll(db, team.id, user.id).await?;
    let already_closed = factory::poll::PollFactory::new(db, team.id, user.id)
        .deadline(Some(now - Duration::hours(2)))
        .closed(now - Duration::hours(2))
        .build()
        .await?;

    let repo = PollRepository::new(db);
    let closed = repo.close_expired(now).await?;

    assert_eq!(closed.len(), 1);
    assert_eq!(closed[0].id, expired.id);
    assert!(!closed[0].is_active);
    assert!(closed[0].closed_at.is_some());

    let still_open = repo.get_by_id(upcoming.id).await?.unwrap();
    assert!(still_open.is_active);
    let still_open = repo.get_by_id(open_ended.id).await?.unwrap();
    assert!(still_open.is_active);

    let untouched = repo.get_by_id(already_closed.id).await?.unwrap();
    assert_eq!(untouched.closed_at, already_closed.closed_at);

    Ok(())
}

/// Tests the sweep when every poll is within its deadline.
///
/// Expected: Ok with an empty list and no state changes
#[tokio::test]
async fn returns_empty_when_none_expired() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_poll_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, team, _membership) = factory::helpers::create_team_with_manager(db).await?;
    let now = Utc::now();

    let poll = factory::poll::PollFactory::new(db, team.id, user.id)
        .deadline(Some(now + Duration::minutes(30)))
        .build()
        .await?;

    let repo = PollRepository::new(db);
    let closed = repo.close_expired(now).await?;

    assert!(closed.is_empty());
    assert!(repo.get_by_id(poll.id).await?.unwrap().is_active);

    Ok(())
}

/// Tests that a deadline exactly at the sweep time counts as expired.
///
/// Expected: Ok with the poll closed
#[tokio::test]
async fn treats_deadline_at_sweep_time_as_expired() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_poll_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, team, _membership) = factory::helpers::create_team_with_manager(db).await?;
    let now = Utc::now();

    let poll = factory::poll::PollFactory::new(db, team.id, user.id)
        .deadline(Some(now))
        .build()
        .await?;

    let repo = PollRepository::new(db);
    let closed = repo.close_expired(now).await?;

    assert_eq!(closed.len(), 1);
    assert_eq!(closed[0].id, poll.id);

    Ok(())
}
