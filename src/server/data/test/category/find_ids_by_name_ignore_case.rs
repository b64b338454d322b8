use super::*;

/// Tests that category lookup ignores case.
///
/// Expected: Ok with the matching id only
#[tokio::test]
async fn matches_regardless_of_case() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pizza = factory::category::create_category_named(db, "Pizza").await?;
    factory::category::create_category_named(db, "Pasta").await?;

    let ids = CategoryRepository::new(db)
        .find_ids_by_name_ignore_case("pIZZA")
        .await?;

    assert_eq!(ids, vec![pizza.id]);

    Ok(())
}

/// Tests that lookup is an exact match, not a prefix match.
///
/// Expected: Ok with no ids
#[tokio::test]
async fn does_not_match_prefixes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::category::create_category_named(db, "Pizza").await?;

    let ids = CategoryRepository::new(db)
        .find_ids_by_name_ignore_case("Piz")
        .await?;

    assert!(ids.is_empty());

    Ok(())
}
