use super::*;

/// Tests recording a first response for a slot.
///
/// Expected: Ok with the stored availability
#[tokio::test]
async fn inserts_new_response() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_poll_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _team, poll) = factory::helpers::create_poll_with_dependencies(db).await?;
    let slot = factory::poll_slot::create_poll_slot(db, poll.id).await?;

    let repo = PollResponseRepository::new(db);
    let response = repo
        .upsert(response_params(
            poll.id,
            slot.id,
            user.id,
            Availability::Available,
        ))
        .await?;

    assert_eq!(response.poll_id, poll.id);
    assert_eq!(response.slot_id, slot.id);
    assert_eq!(response.user_id, user.id);
    assert_eq!(response.availability, Availability::Available);
    assert_eq!(entity::prelude::PollResponse::find().count(db).await?, 1);

    Ok(())
}

/// Tests resubmitting with a different availability.
///
/// Verifies that the second write overwrites the first in place rather
/// than adding a row.
///
/// Expected: Ok with one row carrying the new availability
#[tokio::test]
async fn overwrites_existing_response() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_poll_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _team, poll) = factory::helpers::create_poll_with_dependencies(db).await?;
    let slot = factory::poll_slot::create_poll_slot(db, poll.id).await?;

    let repo = PollResponseRepository::new(db);
    repo.upsert(response_params(
        poll.id,
        slot.id,
        user.id,
        Availability::Available,
    ))
    .await?;
    let updated = repo
        .upsert(response_params(
            poll.id,
            slot.id,
            user.id,
            Availability::Unavailable,
        ))
        .await?;

    assert_eq!(updated.availability, Availability::Unavailable);
    assert_eq!(entity::prelude::PollResponse::find().count(db).await?, 1);

    Ok(())
}

/// Tests resubmitting the same availability twice.
///
/// Expected: Ok both times with a single unchanged row
#[tokio::test]
async fn tolerates_identical_resubmission() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_poll_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _team, poll) = factory::helpers::create_poll_with_dependencies(db).await?;
    let slot = factory::poll_slot::create_poll_slot(db, poll.id).await?;

    let repo = PollResponseRepository::new(db);
    let params = response_params(poll.id, slot.id, user.id, Availability::Maybe);
    repo.upsert(params.clone()).await?;
    let second = repo.upsert(params).await?;

    assert_eq!(second.availability, Availability::Maybe);
    assert_eq!(entity::prelude::PollResponse::find().count(db).await?, 1);

    Ok(())
}

/// Tests that one participant's response does not collide with another's.
///
/// Expected: Ok with two rows for the same slot
#[tokio::test]
async fn keeps_responses_per_participant() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_poll_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, team, poll) = factory::helpers::create_poll_with_dependencies(db).await?;
    let slot = factory::poll_slot::create_poll_slot(db, poll.id).await?;
    let (other, _membership) = factory::helpers::create_member_for_team(db, team.id).await?;

    let repo = PollResponseRepository::new(db);
    repo.upsert(response_params(
        poll.id,
        slot.id,
        user.id,
        Availability::Available,
    ))
    .await?;
    repo.upsert(response_params(
        poll.id,
        slot.id,
        other.id,
        Availability::Maybe,
    ))
    .await?;

    assert_eq!(entity::prelude::PollResponse::find().count(db).await?, 2);

    Ok(())
}

/// Tests recording a response against a slot that does not exist.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn fails_for_nonexistent_slot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_poll_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _team, poll) = factory::helpers::create_poll_with_dependencies(db).await?;

    let repo = PollResponseRepository::new(db);
    let result = repo
        .upsert(response_params(poll.id, 999, user.id, Availability::Available))
        .await;

    assert!(result.is_err());

    Ok(())
}
