use super::*;

/// Tests creating a team.
///
/// Verifies that the repository creates the team row and enrolls the
/// creator as a manager in the same operation.
///
/// Expected: Ok with team created and one manager membership
#[tokio::test]
async fn creates_team_and_enrolls_creator_as_manager() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = TeamRepository::new(db);
    let result = repo
        .create(CreateTeamParams {
            name: "Design Team".to_string(),
            description: Some("Weekly design sync".to_string()),
            creator_id: user.id,
        })
        .await;

    assert!(result.is_ok());
    let team = result.unwrap();
    assert_eq!(team.name, "Design Team");
    assert_eq!(team.description, Some("Weekly design sync".to_string()));
    assert_eq!(team.creator_id, user.id);

    let memberships = entity::prelude::TeamMember::find()
        .filter(entity::team_member::Column::TeamId.eq(team.id))
        .all(db)
        .await?;

    assert_eq!(memberships.len(), 1);
    assert_eq!(memberships[0].user_id, user.id);
    assert_eq!(memberships[0].role, TeamRole::Manager);

    Ok(())
}

/// Tests creating a team without a description.
///
/// Expected: Ok with None description
#[tokio::test]
async fn creates_team_without_description() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = TeamRepository::new(db);
    let team = repo
        .create(CreateTeamParams {
            name: "Minimal Team".to_string(),
            description: None,
            creator_id: user.id,
        })
        .await?;

    assert!(team.description.is_none());

    Ok(())
}

/// Tests foreign key constraint on creator_id.
///
/// Verifies that the transaction fails and persists nothing when the
/// creator does not exist.
///
/// Expected: Err(DbErr) and no team row
#[tokio::test]
async fn fails_for_nonexistent_creator() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TeamRepository::new(db);
    let result = repo
        .create(CreateTeamParams {
            name: "Orphan Team".to_string(),
            description: None,
            creator_id: 999999,
        })
        .await;

    assert!(result.is_err());

    let team_count = entity::prelude::Team::find().count(db).await?;
    assert_eq!(team_count, 0);

    Ok(())
}
