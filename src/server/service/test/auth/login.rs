use super::*;

/// Tests that logging in after registering returns the same token and profile.
///
/// Expected: Ok with identical token and user
#[tokio::test]
async fn returns_registered_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    let registered = service.register(register_params("luca")).await?;
    let logged_in = service.login("luca", "s3cret-pass").await?;

    assert_eq!(logged_in.token, registered.token);
    assert_eq!(logged_in.user, registered.user);

    let resolved = service.user_for_token(&logged_in.token).await?;
    assert_eq!(resolved.map(|u| u.id), Some(registered.user.id));

    Ok(())
}

/// Tests a wrong password and an unknown username.
///
/// Expected: Err(InvalidCredentials) for both
#[tokio::test]
async fn bad_credentials_are_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    service.register(register_params("luca")).await?;

    let wrong_password = service.login("luca", "nope").await;
    let unknown_user = service.login("nobody", "s3cret-pass").await;

    assert!(matches!(
        wrong_password,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        unknown_user,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests that an account with an unusable password cannot log in.
///
/// Expected: Err(InvalidCredentials)
#[tokio::test]
async fn unusable_password_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = AuthService::new(db).login(&user.username, "").await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}
