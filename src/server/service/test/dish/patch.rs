use super::*;

/// Tests that a patch touches only the supplied fields.
///
/// Expected: Ok with the new price, the photo cleared and the rest unchanged
#[tokio::test]
async fn updates_supplied_fields_only() -> Result<(), AppError> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let stored = DishFactory::new(db, category.id)
        .name("Tiramisu")
        .photo(Some("tiramisu.jpg".to_string()))
        .tags(Some(DishTag::Sweet))
        .build()
        .await?;

    let dish = DishService::new(db)
        .patch(
            stored.id,
            PatchDishParams {
                price: Some(Decimal::new(799, 2)),
                photo: Some(None),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(dish.name, "Tiramisu");
    assert_eq!(dish.price, Decimal::new(799, 2));
    assert_eq!(dish.photo, None);
    assert_eq!(dish.tags, Some(DishTag::Sweet));
    assert_eq!(dish.category.id, category.id);

    Ok(())
}

/// Tests that an unavailable dish can still be edited.
///
/// Expected: Ok with the dish made available again
#[tokio::test]
async fn edits_unavailable_dish() -> Result<(), AppError> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let stored = DishFactory::new(db, category.id)
        .available(false)
        .build()
        .await?;

    let dish = DishService::new(db)
        .patch(
            stored.id,
            PatchDishParams {
                is_available: Some(true),
                ..Default::default()
            },
        )
        .await?;

    assert!(dish.is_available);

    Ok(())
}
