use super::*;

/// Tests that deleting a category removes its dishes.
///
/// Expected: Ok(true) and no dishes left
#[tokio::test]
async fn cascades_to_dishes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (category, _) = factory::helpers::create_dish_with_category(db).await?;
    factory::create_dish(db, category.id).await?;

    let deleted = CategoryRepository::new(db).delete(category.id).await?;

    assert!(deleted);
    assert_eq!(entity::prelude::Dish::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting a category that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = CategoryRepository::new(db).delete(999).await?;

    assert!(!deleted);

    Ok(())
}
