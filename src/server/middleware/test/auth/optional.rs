use super::*;

/// Tests that no header means an anonymous caller.
///
/// Expected: Ok(None)
#[tokio::test]
async fn anonymous_without_header() {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &headers).optional().await;

    assert!(matches!(result, Ok(None)));
}

/// Tests that a header with an unknown scheme is rejected.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_unknown_scheme() {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let headers = headers_with("Basic dXNlcjpwYXNz");

    let result = AuthGuard::new(db, &headers).optional().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));
}

/// Tests that a valid token identifies the caller.
///
/// Expected: Ok(Some(user))
#[tokio::test]
async fn identifies_token_owner() -> Result<(), sea_orm::DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let token = factory::create_token(db, user.id).await?;
    let headers = headers_with(&format!("Token {}", token.key));

    let result = AuthGuard::new(db, &headers).optional().await.unwrap();

    assert_eq!(result.map(|u| u.id), Some(user.id));

    Ok(())
}
