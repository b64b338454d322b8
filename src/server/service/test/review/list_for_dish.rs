use super::*;

/// Tests that reviews of an unavailable dish are still listed.
///
/// Expected: Ok with the review
#[tokio::test]
async fn lists_reviews_of_hidden_dish() -> Result<(), AppError> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let dish = factory::dish::DishFactory::new(db, category.id)
        .available(false)
        .build()
        .await?;
    let user = factory::create_user(db).await?;
    factory::create_review(db, dish.id, user.id).await?;

    let reviews = ReviewService::new(db).list_for_dish(dish.id).await?;

    assert_eq!(reviews.len(), 1);

    Ok(())
}

/// Tests listing reviews of a dish that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn unknown_dish_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ReviewService::new(db).list_for_dish(7).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
