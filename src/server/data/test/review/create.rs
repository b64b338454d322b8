use super::*;

/// Tests that a review is stored with its author.
///
/// Expected: Ok with the author's public profile attached
#[tokio::test]
async fn creates_review_with_author() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, dish) = factory::helpers::create_dish_with_category(db).await?;
    let user = factory::create_user(db).await?;

    let review = ReviewRepository::new(db)
        .create(CreateReviewParams {
            dish_id: dish.id,
            user_id: user.id,
            rating: 5,
            comment: Some("Perfect crust".to_string()),
        })
        .await?;

    assert_eq!(review.dish_id, dish.id);
    assert_eq!(review.user.username, user.username);
    assert_eq!(review.rating, 5);
    assert_eq!(review.comment.as_deref(), Some("Perfect crust"));

    Ok(())
}

/// Tests the (dish, user) uniqueness backstop.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_second_review_for_same_dish() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, dish) = factory::helpers::create_dish_with_category(db).await?;
    let user = factory::create_user(db).await?;
    factory::create_review(db, dish.id, user.id).await?;

    let result = ReviewRepository::new(db)
        .create(CreateReviewParams {
            dish_id: dish.id,
            user_id: user.id,
            rating: 3,
            comment: None,
        })
        .await;

    let err = result.unwrap_err();
    assert!(crate::server::error::is_unique_violation(&err));

    Ok(())
}
