use super::*;

/// Tests that deleting a poll removes its slots and responses.
///
/// Expected: Ok with no poll, slot, or response rows left behind
#[tokio::test]
async fn deletes_poll_with_slots_and_responses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_poll_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _team, poll) = factory::helpers::create_poll_with_dependencies(db).await?;
    let slot = factory::poll_slot::create_poll_slot(db, poll.id).await?;
    factory::poll_response::create_poll_response(db, poll.id, slot.id, user.id).await?;

    let repo = PollRepository::new(db);
    repo.delete(poll.id).await?;

    assert_eq!(entity::prelude::Poll::find().count(db).await?, 0);
    assert_eq!(entity::prelude::PollSlot::find().count(db).await?, 0);
    assert_eq!(entity::prelude::PollResponse::find().count(db).await?, 0);

    Ok(())
}

/// Tests that deleting one poll leaves other polls intact.
///
/// Expected: Ok with the other poll and its slot still present
#[tokio::test]
async fn leaves_other_polls_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_poll_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _team, doomed) = factory::helpers::create_poll_with_dependencies(db).await?;
    let (_other_user, _other_team, kept) =
        factory::helpers::create_poll_with_dependencies(db).await?;
    let kept_slot = factory::poll_slot::create_poll_slot(db, kept.id).await?;

    let repo = PollRepository::new(db);
    repo.delete(doomed.id).await?;

    assert!(repo.get_by_id(kept.id).await?.is_some());
    assert!(entity::prelude::PollSlot::find_by_id(kept_slot.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting a poll that does not exist.
///
/// Expected: Ok, nothing to remove
#[tokio::test]
async fn succeeds_for_nonexistent_poll() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_poll_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PollRepository::new(db);
    repo.delete(999).await?;

    Ok(())
}
