use super::*;

/// Tests that category and tag filters ignore case.
///
/// Expected: Ok with only the spicy pizza
#[tokio::test]
async fn filters_ignore_case() -> Result<(), AppError> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pizza = factory::category::create_category_named(db, "Pizza").await?;
    let drinks = factory::category::create_category_named(db, "Drinks").await?;
    let diavola = DishFactory::new(db, pizza.id)
        .tags(Some(DishTag::Spicy))
        .build()
        .await?;
    DishFactory::new(db, pizza.id)
        .tags(Some(DishTag::Vegan))
        .build()
        .await?;
    DishFactory::new(db, drinks.id)
        .tags(Some(DishTag::Spicy))
        .build()
        .await?;

    let dishes = DishService::new(db)
        .list(DishFilter::from_query(DishQueryDto {
            category: Some("pIZZA".to_string()),
            tags: Some("spicy".to_string()),
            ..Default::default()
        }))
        .await?;

    let ids: Vec<i32> = dishes.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![diavola.id]);

    Ok(())
}

/// Tests that a non-numeric price bound is ignored.
///
/// Expected: Ok with every available dish
#[tokio::test]
async fn malformed_max_price_is_ignored() -> Result<(), AppError> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    factory::create_dish(db, category.id).await?;
    factory::create_dish(db, category.id).await?;

    let dishes = DishService::new(db)
        .list(DishFilter::from_query(DishQueryDto {
            max_price: Some("abc".to_string()),
            ..Default::default()
        }))
        .await?;

    assert_eq!(dishes.len(), 2);

    Ok(())
}
