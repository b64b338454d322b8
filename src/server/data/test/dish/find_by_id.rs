use super::*;

/// Tests that the public lookup hides unavailable dishes.
///
/// Expected: Ok(None) when restricted, Ok(Some) otherwise
#[tokio::test]
async fn respects_availability_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let hidden = DishFactory::new(db, category.id)
        .available(false)
        .build()
        .await?;

    let repo = DishRepository::new(db);

    assert!(repo.find_by_id(hidden.id, true).await?.is_none());
    assert_eq!(
        repo.find_by_id(hidden.id, false).await?.map(|d| d.id),
        Some(hidden.id)
    );

    Ok(())
}

/// Tests that the dish is returned with its nested category.
///
/// Expected: Ok with category name populated
#[tokio::test]
async fn includes_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (category, dish) = factory::helpers::create_dish_with_category(db).await?;

    let found = DishRepository::new(db).find_by_id(dish.id, true).await?.unwrap();

    assert_eq!(found.category.name, category.name);
    assert_eq!(found.price, dish.price);

    Ok(())
}
