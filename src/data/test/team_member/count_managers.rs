use super::*;

/// Tests counting managers.
///
/// Verifies that only manager-role memberships are counted.
///
/// Expected: Ok(2) with one plain member ignored
#[tokio::test]
async fn counts_only_managers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_creator, team, _membership) = factory::helpers::create_team_with_manager(db).await?;

    let second_manager = factory::user::create_user(db).await?;
    factory::team_member::create_team_manager(db, team.id, second_manager.id).await?;
    factory::helpers::create_member_for_team(db, team.id).await?;

    let repo = TeamMemberRepository::new(db);
    let count = repo.count_managers(team.id).await?;

    assert_eq!(count, 2);

    Ok(())
}

/// Tests counting managers of a team with none.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_managerless_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::user::create_user(db).await?;
    let team = factory::team::create_team(db, creator.id).await?;
    factory::helpers::create_member_for_team(db, team.id).await?;

    let repo = TeamMemberRepository::new(db);
    let count = repo.count_managers(team.id).await?;

    assert_eq!(count, 0);

    Ok(())
}
