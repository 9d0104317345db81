use super::*;

/// Tests clearing a participant's other available slots.
///
/// The participant is available on two slots and maybe on a third; after
/// clearing with the second slot kept, only the first available row goes.
///
/// Expected: Ok(1) with the kept and maybe rows still present
#[tokio::test]
async fn removes_only_other_available_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_poll_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _team, poll) = factory::helpers::create_poll_with_dependencies(db).await?;
    let first = factory::poll_slot::create_poll_slot(db, poll.id).await?;
    let second = factory::poll_slot::create_poll_slot(db, poll.id).await?;
    let third = factory::poll_slot::create_poll_slot(db, poll.id).await?;

    factory::poll_response::create_poll_response(db, poll.id, first.id, user.id).await?;
    factory::poll_response::create_poll_response(db, poll.id, second.id, user.id).await?;
    factory::poll_response::create_poll_response_with(
        db,
        poll.id,
        third.id,
        user.id,
        Availability::Maybe,
    )
    .await?;

    let repo = PollResponseRepository::new(db);
    let removed = repo.clear_other_available(poll.id, user.id, second.id).await?;

    assert_eq!(removed, 1);
    let remaining = repo.get_by_poll(poll.id).await?;
    assert_eq!(remaining.len(), 2);
    assert!(remaining
        .iter()
        .any(|r| r.slot_id == second.id && r.availability == Availability::Available));
    assert!(remaining
        .iter()
        .any(|r| r.slot_id == third.id && r.availability == Availability::Maybe));

    Ok(())
}

/// Tests that clearing one participant leaves others untouched.
///
/// Expected: Ok with the other participant's rows intact
#[tokio::test]
async fn leaves_other_participants_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_poll_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, team, poll) = factory::helpers::create_poll_with_dependencies(db).await?;
    let first = factory::poll_slot::create_poll_slot(db, poll.id).await?;
    let second = factory::poll_slot::create_poll_slot(db, poll.id).await?;
    let (other, _membership) = factory::helpers::create_member_for_team(db, team.id).await?;

    factory::poll_response::create_poll_response(db, poll.id, first.id, user.id).await?;
    factory::poll_response::create_poll_response(db, poll.id, first.id, other.id).await?;
    factory::poll_response::create_poll_response(db, poll.id, second.id, other.id).await?;

    let repo = PollResponseRepository::new(db);
    let removed = repo.clear_other_available(poll.id, user.id, second.id).await?;

    assert_eq!(removed, 1);
    let remaining = repo.get_by_poll(poll.id).await?;
    assert_eq!(
        remaining.iter().filter(|r| r.user_id == other.id).count(),
        2
    );

    Ok(())
}

/// Tests clearing when the participant has no other available rows.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_when_nothing_to_clear() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_poll_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _team, poll) = factory::helpers::create_poll_with_dependencies(db).await?;
    let slot = factory::poll_slot::create_poll_slot(db, poll.id).await?;
    factory::poll_response::create_poll_response(db, poll.id, slot.id, user.id).await?;

    let repo = PollResponseRepository::new(db);
    let removed = repo.clear_other_available(poll.id, user.id, slot.id).await?;

    assert_eq!(removed, 0);

    Ok(())
}
