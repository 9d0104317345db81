use super::*;

/// Tests deleting a team with its full dependent graph.
///
/// Builds a team carrying a poll, slots, responses, and two members, then
/// deletes it and checks that no dependent row survives anywhere.
///
/// Expected: Ok with zero orphan rows
#[tokio::test]
async fn cascade_leaves_no_orphans() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_poll_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (manager, team, poll) = factory::helpers::create_poll_with_dependencies(db).await?;
    let (member, _membership) = factory::helpers::create_member_for_team(db, team.id).await?;

    let slot = factory::poll_slot::create_poll_slot(db, poll.id).await?;
    factory::poll_response::create_poll_response(db, poll.id, slot.id, manager.id).await?;
    factory::poll_response::create_poll_response(db, poll.id, slot.id, member.id).await?;

    let repo = TeamRepository::new(db);
    repo.delete(team.id).await?;

    let team_count = entity::prelude::Team::find()
        .filter(entity::team::Column::Id.eq(team.id))
        .count(db)
        .await?;
    let member_count = entity::prelude::TeamMember::find()
        .filter(entity::team_member::Column::TeamId.eq(team.id))
        .count(db)
        .await?;
    let poll_count = entity::prelude::Poll::find()
        .filter(entity::poll::Column::TeamId.eq(team.id))
        .count(db)
        .await?;
    let slot_count = entity::prelude::PollSlot::find()
        .filter(entity::poll_slot::Column::PollId.eq(poll.id))
        .count(db)
        .await?;
    let response_count = entity::prelude::PollResponse::find()
        .filter(entity::poll_response::Column::PollId.eq(poll.id))
        .count(db)
        .await?;

    assert_eq!(team_count, 0);
    assert_eq!(member_count, 0);
    assert_eq!(poll_count, 0);
    assert_eq!(slot_count, 0);
    assert_eq!(response_count, 0);

    // User accounts survive team deletion.
    let user_count = entity::prelude::User::find().count(db).await?;
    assert_eq!(user_count, 2);

    Ok(())
}

/// Tests that deleting one team leaves other teams intact.
///
/// Expected: Ok with the second team and its poll untouched
#[tokio::test]
async fn leaves_other_teams_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_poll_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user_a, team_a, _poll_a) = factory::helpers::create_poll_with_dependencies(db).await?;
    let (_user_b, team_b, poll_b) = factory::helpers::create_poll_with_dependencies(db).await?;

    let repo = TeamRepository::new(db);
    repo.delete(team_a.id).await?;

    let surviving_team = entity::prelude::Team::find_by_id(team_b.id).one(db).await?;
    assert!(surviving_team.is_some());

    let surviving_poll = entity::prelude::Poll::find_by_id(poll_b.id).one(db).await?;
    assert!(surviving_poll.is_some());

    Ok(())
}

/// Tests deleting a nonexistent team.
///
/// Expected: Ok
#[tokio::test]
async fn succeeds_for_nonexistent_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_poll_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TeamRepository::new(db);
    let result = repo.delete(999999).await;

    assert!(result.is_ok());

    Ok(())
}
