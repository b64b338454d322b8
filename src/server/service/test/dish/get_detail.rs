use super::*;

/// Tests that the detail view embeds the dish's reviews.
///
/// Expected: Ok with one review
#[tokio::test]
async fn includes_reviews() -> Result<(), AppError> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, dish) = factory::helpers::create_dish_with_category(db).await?;
    let user = factory::create_user(db).await?;
    factory::create_review(db, dish.id, user.id).await?;

    let detail = DishService::new(db).get_detail(dish.id).await?;

    assert_eq!(detail.dish.id, dish.id);
    assert_eq!(detail.reviews.len(), 1);

    Ok(())
}

/// Tests that unavailable dishes are hidden from the public detail view.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn unavailable_dish_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let dish = DishFactory::new(db, category.id)
        .available(false)
        .build()
        .await?;

    let result = DishService::new(db).get_detail(dish.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
