use super::*;

/// Tests a manager passes the manager check.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_to_manager() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (manager, team, _membership) = factory::helpers::create_team_with_manager(db).await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(manager.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Permission::TeamManager(team.id)]).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().id, manager.id);

    Ok(())
}

/// Tests a plain member is denied the manager check.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_plain_member() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (_manager, team, _membership) = factory::helpers::create_team_with_manager(db).await?;
    let (member, _member_membership) = factory::helpers::create_member_for_team(db, team.id).await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(member.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Permission::TeamManager(team.id)]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied))
    ));

    Ok(())
}

/// Tests a non-member is denied the manager check.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_non_member() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (_manager, team, _membership) = factory::helpers::create_team_with_manager(db).await?;
    let outsider = factory::user::create_user(db).await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(outsider.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Permission::TeamManager(team.id)]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied))
    ));

    Ok(())
}
