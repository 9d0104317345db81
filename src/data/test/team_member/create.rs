use super::*;

/// Tests enrolling a user into a team.
///
/// Expected: Ok with membership row carrying the requested role
#[tokio::test]
async fn enrolls_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_creator, team, _membership) = factory::helpers::create_team_with_manager(db).await?;
    let user = factory::user::create_user(db).await?;

    let repo = TeamMemberRepository::new(db);
    let result = repo.create(team.id, user.id, TeamRole::Member).await;

    assert!(result.is_ok());
    let membership = result.unwrap();
    assert_eq!(membership.team_id, team.id);
    assert_eq!(membership.user_id, user.id);
    assert_eq!(membership.role, TeamRole::Member);

    Ok(())
}

/// Tests the unique constraint on (team_id, user_id).
///
/// Verifies that enrolling the same user into the same team twice
/// fails regardless of role.
///
/// Expected: Err(DbErr) due to unique constraint violation
#[tokio::test]
async fn rejects_duplicate_enrollment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_creator, team, _membership) = factory::helpers::create_team_with_manager(db).await?;
    let user = factory::user::create_user(db).await?;

    let repo = TeamMemberRepository::new(db);
    repo.create(team.id, user.id, TeamRole::Member).await?;
    let result = repo.create(team.id, user.id, TeamRole::Manager).await;

    assert!(result.is_err());

    Ok(())
}

/// Tests foreign key constraint on team_id.
///
/// Expected: Err(DbErr) due to foreign key constraint violation
#[tokio::test]
async fn fails_for_nonexistent_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = TeamMemberRepository::new(db);
    let result = repo.create(999999, user.id, TeamRole::Member).await;

    assert!(result.is_err());

    Ok(())
}
