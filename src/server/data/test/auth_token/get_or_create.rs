use super::*;

/// Tests that the first call stores the supplied key.
///
/// Expected: Ok with the new key
#[tokio::test]
async fn stores_new_key() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let key = AuthTokenRepository::new(db)
        .get_or_create(user.id, "a".repeat(40))
        .await?;

    assert_eq!(key, "a".repeat(40));

    Ok(())
}

/// Tests that an existing token is reused and no second row is stored.
///
/// Expected: Ok with the original key
#[tokio::test]
async fn reuses_existing_key() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let existing = factory::create_token(db, user.id).await?;

    let key = AuthTokenRepository::new(db)
        .get_or_create(user.id, "b".repeat(40))
        .await?;

    assert_eq!(key, existing.key);
    assert_eq!(entity::prelude::AuthToken::find().count(db).await?, 1);

    Ok(())
}
