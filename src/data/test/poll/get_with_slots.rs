use super::*;

/// Tests fetching a poll with its slots.
///
/// Slots are inserted out of order through the factory and must come
/// back sorted by (date, start time).
///
/// Expected: Ok(Some) with slots in chronological order
#[tokio::test]
async fn returns_poll_with_ordered_slots() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_poll_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _team, poll) = factory::helpers::create_poll_with_dependencies(db).await?;

    // Insert later-day slot first, then two same-day slots in reverse order.
    test_utils::factory::poll_slot::PollSlotFactory::new(db, poll.id)
        .slot_date(NaiveDate::from_ymd_opt(2026, 9, 8).unwrap())
        .start_time(NaiveTime::from_hms_opt(9, 0, 0).unwrap())
        .end_time(NaiveTime::from_hms_opt(10, 0, 0).unwrap())
        .build()
        .await?;
    test_utils::factory::poll_slot::PollSlotFactory::new(db, poll.id)
        .slot_date(NaiveDate::from_ymd_opt(2026, 9, 7).unwrap())
        .start_time(NaiveTime::from_hms_opt(10, 0, 0).unwrap())
        .end_time(NaiveTime::from_hms_opt(11, 0, 0).unwrap())
        .build()
        .await?;
    test_utils::factory::poll_slot::PollSlotFactory::new(db, poll.id)
        .slot_date(NaiveDate::from_ymd_opt(2026, 9, 7).unwrap())
        .start_time(NaiveTime::from_hms_opt(9, 0, 0).unwrap())
        .end_time(NaiveTime::from_hms_opt(10, 0, 0).unwrap())
        .build()
        .await?;

    let repo = PollRepository::new(db);
    let fetched = repo.get_with_slots(poll.id).await?;

    assert!(fetched.is_some());
    let fetched = fetched.unwrap();
    assert_eq!(fetched.poll.id, poll.id);
    assert_eq!(fetched.slots.len(), 3);

    let coords: Vec<(NaiveDate, NaiveTime)> = fetched
        .slots
        .iter()
        .map(|s| (s.slot_date, s.start_time))
        .collect();
    let mut sorted = coords.clone();
    sorted.sort();
    assert_eq!(coords, sorted);
    assert_eq!(
        coords[0],
        (
            NaiveDate::from_ymd_opt(2026, 9, 7).unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap()
        )
    );

    Ok(())
}

/// Tests fetching a nonexistent poll.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_poll() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_poll_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PollRepository::new(db);
    let fetched = repo.get_with_slots(999999).await?;

    assert!(fetched.is_none());

    Ok(())
}
