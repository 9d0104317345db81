use super::*;

/// Tests pagination of the team poll listing.
///
/// Three polls, two per page: the first page holds the two newest,
/// the second page the remaining one, with the full total on both.
///
/// Expected: Ok with pages split newest first
#[tokio::test]
async fn paginates_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_poll_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, team, _membership) = factory::helpers::create_team_with_manager(db).await?;

    let first = factory::poll::create_poll(db, team.id, user.id).await?;
    let second = factory::poll::create_poll(db, team.id, user.id).await?;
    let third = factory::poll::create_poll(db, team.id, user.id).await?;

    let repo = PollRepository::new(db);

    let (page_zero, total) = repo.get_paginated_by_team(team.id, 0, 2).await?;
    assert_eq!(total, 3);
    assert_eq!(page_zero.len(), 2);
    assert_eq!(page_zero[0].id, third.id);
    assert_eq!(page_zero[1].id, second.id);

    let (page_one, total) = repo.get_paginated_by_team(team.id, 1, 2).await?;
    assert_eq!(total, 3);
    assert_eq!(page_one.len(), 1);
    assert_eq!(page_one[0].id, first.id);

    Ok(())
}

/// Tests team scoping of the poll listing.
///
/// Expected: Ok with only the requested team's polls
#[tokio::test]
async fn scopes_to_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_poll_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user_a, team_a, poll_a) = factory::helpers::create_poll_with_dependencies(db).await?;
    let (_user_b, _team_b, _poll_b) = factory::helpers::create_poll_with_dependencies(db).await?;

    let repo = PollRepository::new(db);
    let (polls, total) = repo.get_paginated_by_team(team_a.id, 0, 10).await?;

    assert_eq!(total, 1);
    assert_eq!(polls.len(), 1);
    assert_eq!(polls[0].id, poll_a.id);

    Ok(())
}

/// Tests the listing for a team with no polls.
///
/// Expected: Ok with empty page and zero total
#[tokio::test]
async fn returns_empty_for_pollless_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_poll_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, team, _membership) = factory::helpers::create_team_with_manager(db).await?;

    let repo = PollRepository::new(db);
    let (polls, total) = repo.get_paginated_by_team(team.id, 0, 10).await?;

    assert!(polls.is_empty());
    assert_eq!(total, 0);

    Ok(())
}
