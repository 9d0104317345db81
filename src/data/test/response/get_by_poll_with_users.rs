use super::*;

/// Tests fetching responses joined with the responding users.
///
/// Expected: Ok with each response paired to its participant
#[tokio::test]
async fn pairs_responses_with_users() -> Result<(), DbErr> {
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
        Availability::Maybe,
    )
    .await?;

    let repo = PollResponseRepository::new(db);
    let rows = repo.get_by_poll_with_users(poll.id).await?;

    assert_eq!(rows.len(), 2);
    let creator_row = rows
        .iter()
        .find(|(response, _)| response.user_id == user.id)
        .unwrap();
    assert_eq!(creator_row.1.id, user.id);
    assert_eq!(creator_row.1.name, user.name);
    let other_row = rows
        .iter()
        .find(|(response, _)| response.user_id == other.id)
        .unwrap();
    assert_eq!(other_row.0.availability, Availability::Maybe);
    assert_eq!(other_row.1.email, other.email);

    Ok(())
}

/// Tests the joined fetch for a poll with no responses.
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
    let rows = repo.get_by_poll_with_users(poll.id).await?;

    assert!(rows.is_empty());

    Ok(())
}
