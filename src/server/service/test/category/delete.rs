use super::*;

/// Tests that deleting a category removes its dishes.
///
/// Expected: Ok and no dishes left
#[tokio::test]
async fn removes_dishes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (category, _) = factory::helpers::create_dish_with_category(db).await?;

    CategoryService::new(db).delete(category.id).await?;

    assert_eq!(entity::prelude::Dish::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting a category that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn missing_category_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CategoryService::new(db).delete(5).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
