use super::*;

/// Tests that a request without credentials is rejected.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_header() {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));
}

/// Tests that a known token resolves to its user.
///
/// Expected: Ok with the token owner
#[tokio::test]
async fn accepts_token_scheme() -> Result<(), sea_orm::DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let token = factory::create_token(db, user.id).await?;
    let headers = headers_with(&format!("Token {}", token.key));

    let result = AuthGuard::new(db, &headers).require(&[]).await;

    assert_eq!(result.unwrap().id, user.id);

    Ok(())
}

/// Tests that the Bearer scheme is accepted as an alias.
///
/// Expected: Ok with the token owner
#[tokio::test]
async fn accepts_bearer_scheme() -> Result<(), sea_orm::DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let token = factory::create_token(db, user.id).await?;
    let headers = headers_with(&format!("bearer {}", token.key));

    let result = AuthGuard::new(db, &headers).require(&[]).await;

    assert_eq!(result.unwrap().username, user.username);

    Ok(())
}

/// Tests that an unknown token is rejected rather than treated as anonymous.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_unknown_token() {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let headers = headers_with("Token 0000000000000000000000000000000000000000");

    let result = AuthGuard::new(db, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));
}

/// Tests that a non-staff user cannot pass an admin gate.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn admin_requires_staff() -> Result<(), sea_orm::DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let token = factory::create_token(db, user.id).await?;
    let headers = headers_with(&format!("Token {}", token.key));

    let result = AuthGuard::new(db, &headers)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) if id == user.id
    ));

    Ok(())
}

/// Tests that a staff user passes an admin gate.
///
/// Expected: Ok with the staff user
#[tokio::test]
async fn admin_accepts_staff() -> Result<(), sea_orm::DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let staff = factory::create_staff_user(db).await?;
    let token = factory::create_token(db, staff.id).await?;
    let headers = headers_with(&format!("Token {}", token.key));

    let result = AuthGuard::new(db, &headers)
        .require(&[Permission::Admin])
        .await;

    assert!(result.unwrap().is_staff);

    Ok(())
}
