use super::*;

/// Tests that an owner can delete their order along with its lines.
///
/// Expected: Ok and no order or line rows left
#[tokio::test]
async fn owner_deletes_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, dish) = factory::helpers::create_dish_with_category(db).await?;
    let user = factory::create_user(db).await?;
    let order = OrderFactory::new(db)
        .user_id(Some(user.id))
        .item(dish.id, 1, dish.price)
        .build()
        .await?;

    OrderService::new(db)
        .delete(order.id, &User::from_entity(user))
        .await?;

    assert_eq!(entity::prelude::Order::find().count(db).await?, 0);
    assert_eq!(entity::prelude::OrderItem::find().count(db).await?, 0);

    Ok(())
}

/// Tests that another user's order is hidden rather than forbidden.
///
/// Expected: Err(NotFound) and the order still stored
#[tokio::test]
async fn foreign_order_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let stranger = factory::create_user(db).await?;
    let order = factory::create_order(db, Some(owner.id)).await?;

    let result = OrderService::new(db)
        .delete(order.id, &User::from_entity(stranger))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(entity::prelude::Order::find().count(db).await?, 1);

    Ok(())
}

/// Tests that staff may delete any order.
///
/// Expected: Ok
#[tokio::test]
async fn staff_deletes_any_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let staff = factory::create_staff_user(db).await?;
    let order = factory::create_order(db, Some(owner.id)).await?;

    OrderService::new(db)
        .delete(order.id, &User::from_entity(staff))
        .await?;

    assert_eq!(entity::prelude::Order::find().count(db).await?, 0);

    Ok(())
}
