use super::*;

/// Tests creating a poll with generated slots.
///
/// Verifies that the repository persists the poll and every slot, that
/// slots point back at the poll, and that the given order is preserved.
///
/// Expected: Ok with poll and three slots
#[tokio::test]
async fn creates_poll_with_slots() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_poll_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, team, _membership) = factory::helpers::create_team_with_manager(db).await?;

    let slots = vec![
        candidate(2026, 9, 7, 9, 10),
        candidate(2026, 9, 7, 10, 11),
        candidate(2026, 9, 7, 11, 12),
    ];

    let repo = PollRepository::new(db);
    let result = repo
        .create_with_slots(poll_params(team.id, user.id), &slots)
        .await;

    assert!(result.is_ok());
    let created = result.unwrap();
    assert_eq!(created.poll.team_id, team.id);
    assert_eq!(created.poll.creator_id, user.id);
    assert_eq!(created.poll.title, "Sprint planning");
    assert_eq!(created.slots.len(), 3);

    for (persisted, wanted) in created.slots.iter().zip(slots.iter()) {
        assert_eq!(persisted.poll_id, created.poll.id);
        assert_eq!(persisted.slot_date, wanted.slot_date);
        assert_eq!(persisted.start_time, wanted.start_time);
        assert_eq!(persisted.end_time, wanted.end_time);
    }

    Ok(())
}

/// Tests the initial lifecycle state of a created poll.
///
/// Expected: Ok with is_active true and closed_at unset
#[tokio::test]
async fn starts_open() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_poll_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, team, _membership) = factory::helpers::create_team_with_manager(db).await?;

    let repo = PollRepository::new(db);
    let created = repo
        .create_with_slots(poll_params(team.id, user.id), &[candidate(2026, 9, 7, 9, 10)])
        .await?;

    assert!(created.poll.is_active);
    assert!(created.poll.closed_at.is_none());

    Ok(())
}

/// Tests transactional rollback on slot insert failure.
///
/// The second slot duplicates the first, tripping the unique index on
/// (poll_id, slot_date, start_time). The whole creation must roll back,
/// leaving no poll row behind.
///
/// Expected: Err(DbErr) and zero poll rows
#[tokio::test]
async fn rolls_back_poll_when_slot_insert_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_poll_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, team, _membership) = factory::helpers::create_team_with_manager(db).await?;

    let duplicate = candidate(2026, 9, 7, 9, 10);
    let slots = vec![duplicate, duplicate];

    let repo = PollRepository::new(db);
    let result = repo
        .create_with_slots(poll_params(team.id, user.id), &slots)
        .await;

    assert!(result.is_err());

    let poll_count = entity::prelude::Poll::find().count(db).await?;
    assert_eq!(poll_count, 0);
    let slot_count = entity::prelude::PollSlot::find().count(db).await?;
    assert_eq!(slot_count, 0);

    Ok(())
}

/// Tests foreign key constraint on team_id.
///
/// Expected: Err(DbErr) due to foreign key constraint violation
#[tokio::test]
async fn fails_for_nonexistent_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_poll_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = PollRepository::new(db);
    let result = repo
        .create_with_slots(poll_params(999999, user.id), &[candidate(2026, 9, 7, 9, 10)])
        .await;

    assert!(result.is_err());

    Ok(())
}
