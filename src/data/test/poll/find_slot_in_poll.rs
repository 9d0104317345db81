use super::*;

/// Tests finding a slot that belongs to the poll.
///
/// Expected: Ok(Some(slot))
#[tokio::test]
async fn finds_slot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_poll_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _team, poll) = factory::helpers::create_poll_with_dependencies(db).await?;
    let slot = factory::poll_slot::create_poll_slot(db, poll.id).await?;

    let repo = PollRepository::new(db);
    let found = repo.find_slot_in_poll(poll.id, slot.id).await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().id, slot.id);

    Ok(())
}

/// Tests slot lookup scoping.
///
/// A slot id that exists but belongs to a different poll must not be
/// returned.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_slot_of_other_poll() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_poll_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, team, poll_a) = factory::helpers::create_poll_with_dependencies(db).await?;
    let poll_b = factory::poll::create_poll(db, team.id, user.id).await?;
    let slot_b = factory::poll_slot::create_poll_slot(db, poll_b.id).await?;

    let repo = PollRepository::new(db);
    let found = repo.find_slot_in_poll(poll_a.id, slot_b.id).await?;

    assert!(found.is_none());

    Ok(())
}
