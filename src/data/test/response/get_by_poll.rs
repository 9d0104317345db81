use super::*;

/// Tests fetching all responses for a poll.
///
/// Expected: Ok with every recorded response
#[tokio::test]
async fn returns_all_responses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_poll_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, team, poll) = factory::helpers::create_poll_with_dependencies(db).await?;
    let slot = factory::poll_slot::create_poll_slot(db, poll.id).await?;
    let (other, _membership) = factory::helpers::create_member_for_team(db, team.id).await?;

    factory::poll_response::create_poll_response(db, poll.id, slot.id, user.id).await?;
    factory::poll_response::create_poll_response_with(
        db,
        poll.id,
        slot.id,
        other.id,
        Availability::Unavailable,
    )
    .await?;

    let repo = PollResponseRepository::new(db);
    let responses = repo.get_by_poll(poll.id).await?;

    assert_eq!(responses.len(), 2);
    assert!(responses.iter().any(|r| r.user_id == user.id));
    assert!(responses
        .iter()
        .any(|r| r.user_id == other.id && r.availability == Availability::Unavailable));

    Ok(())
}

/// Tests that responses from other polls are not returned.
///
/// Expected: Ok with only the requested poll's responses
#[tokio::test]
async fn scopes_to_poll() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_poll_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user_a, _team_a, poll_a) = factory::helpers::create_poll_with_dependencies(db).await?;
    let slot_a = factory::poll_slot::create_poll_slot(db, poll_a.id).await?;
    factory::poll_response::create_poll_response(db, poll_a.id, slot_a.id, user_a.id).await?;

    let (user_b, _team_b, poll_b) = factory::helpers::create_poll_with_dependencies(db).await?;
    let slot_b = factory::poll_slot::create_poll_slot(db, poll_b.id).await?;
    factory::poll_response::create_poll_response(db, poll_b.id, slot_b.id, user_b.id).await?;

    let repo = PollResponseRepository::new(db);
    let responses = repo.get_by_poll(poll_a.id).await?;

    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0].poll_id, poll_a.id);

    Ok(())
}

/// Tests fetching responses for a poll nobody answered.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_for_unanswered_poll() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_poll_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _team, poll) = factory::helpers::create_poll_with_dependencies(db).await?;

    let repo = PollResponseRepository::new(db);
    let responses = repo.get_by_poll(poll.id).await?;

    assert!(responses.is_empty());

    Ok(())
}
