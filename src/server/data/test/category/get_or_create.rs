use super::*;

/// Tests that a missing category is created.
///
/// Expected: Ok with created flag set and one row stored
#[tokio::test]
async fn creates_missing_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let (category, created) = repo.get_or_create("Soups").await?;

    assert!(created);
    assert_eq!(category.name, "Soups");
    assert_eq!(entity::prelude::Category::find().count(db).await?, 1);

    Ok(())
}

/// Tests that an existing category is reused instead of duplicated.
///
/// Expected: Ok with the existing id and created flag unset
#[tokio::test]
async fn reuses_existing_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::category::create_category_named(db, "Desserts").await?;

    let repo = CategoryRepository::new(db);
    let (category, created) = repo.get_or_create("Desserts").await?;

    assert!(!created);
    assert_eq!(category.id, existing.id);
    assert_eq!(entity::prelude::Category::find().count(db).await?, 1);

    Ok(())
}

/// Tests that repeated calls for the same new name store a single row.
///
/// Expected: Ok with both calls returning the same id
#[tokio::test]
async fn repeated_calls_store_one_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let (first, _) = repo.get_or_create("Salads").await?;
    let (second, created) = repo.get_or_create("Salads").await?;

    assert!(!created);
    assert_eq!(first.id, second.id);
    assert_eq!(entity::prelude::Category::find().count(db).await?, 1);

    Ok(())
}
