use super::*;

/// Tests stamping last_login_at on login.
///
/// Verifies that the repository sets last_login_at for a user who has
/// never logged in before.
///
/// Expected: Ok with last_login_at populated
#[tokio::test]
async fn stamps_last_login() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    assert!(user.last_login_at.is_none());

    let repo = UserRepository::new(db);
    repo.record_login(user.id).await?;

    let reloaded = repo.find_by_id(user.id).await?.unwrap();
    assert!(reloaded.last_login_at.is_some());

    Ok(())
}

/// Tests recording a login for a nonexistent user.
///
/// Verifies that the update completes without error when no row matches.
///
/// Expected: Ok
#[tokio::test]
async fn tolerates_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.record_login(999999).await;

    assert!(result.is_ok());

    Ok(())
}
