use super::*;

/// Tests creating a new user account.
///
/// Verifies that the repository successfully creates a user with the
/// specified email, password hash, and name, and that a fresh account
/// has never logged in.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParams {
            email: "alice@example.com".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            name: "Alice".to_string(),
        })
        .await;

    assert!(result.is_ok());
    let user = result.unwrap();
    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.password_hash, "$argon2id$stub");
    assert_eq!(user.name, "Alice");
    assert!(user.last_login_at.is_none());

    Ok(())
}

/// Tests the unique constraint on email.
///
/// Verifies that the repository returns an error when attempting to
/// create a second account with an email that is already taken.
///
/// Expected: Err(DbErr) due to unique constraint violation
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_team_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_email(db, "taken@example.com").await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParams {
            email: "taken@example.com".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            name: "Second".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
