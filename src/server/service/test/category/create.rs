use super::*;

/// Tests creating a category whose name is taken.
///
/// Expected: Err(Conflict) and one category stored
#[tokio::test]
async fn duplicate_name_conflicts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::category::create_category_named(db, "Desserts").await?;

    let result = CategoryService::new(db)
        .create(CreateCategoryParams {
            name: "Desserts".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(entity::prelude::Category::find().count(db).await?, 1);

    Ok(())
}

/// Tests that categories are listed by name.
///
/// Expected: Ok with names in alphabetical order
#[tokio::test]
async fn lists_alphabetically() -> Result<(), AppError> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CategoryService::new(db);
    for name in ["Soups", "Drinks", "Pizza"] {
        service
            .create(CreateCategoryParams {
                name: name.to_string(),
            })
            .await?;
    }

    let names: Vec<String> = service.get_all().await?.into_iter().map(|c| c.name).collect();

    assert_eq!(names, vec!["Drinks", "Pizza", "Soups"]);

    Ok(())
}
