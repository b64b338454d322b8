use super::*;

/// Tests that a completed order containing the dish qualifies.
///
/// Expected: Ok(true)
#[tokio::test]
async fn true_for_completed_purchase() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, dish) = factory::helpers::create_dish_with_category(db).await?;
    let (user, _) = factory::helpers::create_completed_purchase(db, &dish).await?;

    let result = OrderRepository::new(db)
        .has_completed_order_with_dish(user.id, dish.id)
        .await?;

    assert!(result);

    Ok(())
}

/// Tests that an order still in progress does not qualify.
///
/// Expected: Ok(false)
#[tokio::test]
async fn false_for_unfinished_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, dish) = factory::helpers::create_dish_with_category(db).await?;
    let user = factory::create_user(db).await?;
    OrderFactory::new(db)
        .user_id(Some(user.id))
        .status(OrderStatus::InProgress)
        .item(dish.id, 1, dish.price)
        .build()
        .await?;

    let result = OrderRepository::new(db)
        .has_completed_order_with_dish(user.id, dish.id)
        .await?;

    assert!(!result);

    Ok(())
}

/// Tests that someone else's completed order does not qualify.
///
/// Expected: Ok(false)
#[tokio::test]
async fn false_for_other_users_purchase() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, dish) = factory::helpers::create_dish_with_category(db).await?;
    factory::helpers::create_completed_purchase(db, &dish).await?;
    let other = factory::create_user(db).await?;

    let result = OrderRepository::new(db)
        .has_completed_order_with_dish(other.id, dish.id)
        .await?;

    assert!(!result);

    Ok(())
}

/// Tests that a completed order for a different dish does not qualify.
///
/// Expected: Ok(false)
#[tokio::test]
async fn false_for_different_dish() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (category, bought) = factory::helpers::create_dish_with_category(db).await?;
    let other_dish = factory::create_dish(db, category.id).await?;
    let (user, _) = factory::helpers::create_completed_purchase(db, &bought).await?;

    let result = OrderRepository::new(db)
        .has_completed_order_with_dish(user.id, other_dish.id)
        .await?;

    assert!(!result);

    Ok(())
}
