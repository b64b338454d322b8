use super::*;

/// Tests that the stored total equals the sum of the line totals.
///
/// Expected: Ok with sums = 2 x 12.50 + 1 x 4.00
#[tokio::test]
async fn total_matches_lines() -> Result<(), AppError> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let pizza = DishFactory::new(db, category.id)
        .price(Decimal::new(1250, 2))
        .build()
        .await?;
    let lemonade = DishFactory::new(db, category.id)
        .price(Decimal::new(400, 2))
        .build()
        .await?;
    let user = factory::create_user(db).await?;

    let order = OrderService::new(db)
        .create(CreateOrderParams {
            user_id: Some(user.id),
            lines: vec![line(pizza.id, 2), line(lemonade.id, 1)],
        })
        .await?;

    assert_eq!(order.sums, Decimal::new(2900, 2));
    assert_eq!(order.status, OrderStatus::New);
    assert_eq!(order.items.len(), 2);
    let line_total: Decimal = order
        .items
        .iter()
        .map(|i| i.price * Decimal::from(i.quantity))
        .sum();
    assert_eq!(order.sums, line_total);
    assert_eq!(order.user.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests that a later price change does not touch an existing order.
///
/// Expected: Ok with the line price and total frozen at order time
#[tokio::test]
async fn prices_are_snapshotted() -> Result<(), AppError> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, dish) = factory::helpers::create_dish_with_category(db).await?;
    let user = factory::create_user(db).await?;
    let service = OrderService::new(db);

    let order = service
        .create(CreateOrderParams {
            user_id: Some(user.id),
            lines: vec![line(dish.id, 2)],
        })
        .await?;

    let mut active: entity::dish::ActiveModel = dish.clone().into();
    active.price = ActiveValue::Set(Decimal::new(9900, 2));
    active.update(db).await?;

    let reloaded = service.get(order.id, &User::from_entity(user)).await?;

    assert_eq!(reloaded.items[0].price, dish.price);
    assert_eq!(reloaded.sums, dish.price * Decimal::from(2));

    Ok(())
}

/// Tests that lines pointing at unknown dishes are dropped.
///
/// Expected: Ok with only the known dish in the order
#[tokio::test]
async fn unknown_dishes_are_skipped() -> Result<(), AppError> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, dish) = factory::helpers::create_dish_with_category(db).await?;

    let order = OrderService::new(db)
        .create(CreateOrderParams {
            user_id: None,
            lines: vec![line(dish.id, 1), line(dish.id + 1000, 3)],
        })
        .await?;

    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].dish_id, dish.id);
    assert_eq!(order.sums, dish.price);
    assert!(order.user.is_none());

    Ok(())
}

/// Tests that unavailable dishes can still be ordered.
///
/// Expected: Ok with the hidden dish on the order
#[tokio::test]
async fn unavailable_dish_is_accepted() -> Result<(), AppError> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let hidden = DishFactory::new(db, category.id)
        .available(false)
        .build()
        .await?;

    let order = OrderService::new(db)
        .create(CreateOrderParams {
            user_id: None,
            lines: vec![line(hidden.id, 1)],
        })
        .await?;

    assert_eq!(order.items.len(), 1);
    assert_eq!(entity::prelude::OrderItem::find().count(db).await?, 1);

    Ok(())
}
