use super::*;

/// Tests membership scoping of the team listing.
///
/// Verifies that only teams the user belongs to are returned, whether
/// as manager or plain member.
///
/// Expected: Ok with exactly the user's teams
#[tokio::test]
async fn returns_only_teams_user_belongs_to() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::user::create_user(db).await?;
    let bob = factory::user::create_user(db).await?;

    // Alice manages one team, is a plain member of another, and has no
    // connection to the third.
    let managed = factory::team::create_team(db, alice.id).await?;
    factory::team_member::create_team_manager(db, managed.id, alice.id).await?;

    let joined = factory::team::create_team(db, bob.id).await?;
    factory::team_member::create_team_manager(db, joined.id, bob.id).await?;
    factory::team_member::create_team_member(db, joined.id, alice.id).await?;

    let foreign = factory::team::create_team(db, bob.id).await?;
    factory::team_member::create_team_manager(db, foreign.id, bob.id).await?;

    let repo = TeamRepository::new(db);
    let teams = repo.get_all_for_user(alice.id).await?;

    assert_eq!(teams.len(), 2);
    let ids: Vec<i32> = teams.iter().map(|t| t.id).collect();
    assert!(ids.contains(&managed.id));
    assert!(ids.contains(&joined.id));
    assert!(!ids.contains(&foreign.id));

    Ok(())
}

/// Tests alphabetical ordering of the team listing.
///
/// Expected: Ok with teams ordered by name
#[tokio::test]
async fn orders_teams_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let zulu = test_utils::factory::team::TeamFactory::new(db, user.id)
        .name("Zulu")
        .build()
        .await?;
    factory::team_member::create_team_manager(db, zulu.id, user.id).await?;

    let alpha = test_utils::factory::team::TeamFactory::new(db, user.id)
        .name("Alpha")
        .build()
        .await?;
    factory::team_member::create_team_manager(db, alpha.id, user.id).await?;

    let repo = TeamRepository::new(db);
    let teams = repo.get_all_for_user(user.id).await?;

    assert_eq!(teams.len(), 2);
    assert_eq!(teams[0].name, "Alpha");
    assert_eq!(teams[1].name, "Zulu");

    Ok(())
}

/// Tests the listing for a user with no memberships.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_without_memberships() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = TeamRepository::new(db);
    let teams = repo.get_all_for_user(user.id).await?;

    assert!(teams.is_empty());

    Ok(())
}
