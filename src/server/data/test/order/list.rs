use super::*;

/// Tests that orders come back newest first with their lines and owner.
///
/// Expected: Ok with the later order first
#[tokio::test]
async fn lists_newest_first_with_items() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, dish) = factory::helpers::create_dish_with_category(db).await?;
    let user = factory::create_user(db).await?;

    let repo = OrderRepository::new(db);
    let older = repo
        .create(Some(user.id), Utc::now() - Duration::hours(1))
        .await?;
    let newer = repo.create(Some(user.id), Utc::now()).await?;
    repo.add_item(newer.id, dish.id, 2, dish.price).await?;

    let orders = repo.list(None).await?;

    let ids: Vec<i32> = orders.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);
    assert_eq!(orders[0].items.len(), 1);
    assert_eq!(orders[0].items[0].dish_name, dish.name);
    assert_eq!(orders[0].items[0].quantity, 2);
    assert_eq!(orders[0].user.as_ref().map(|u| u.id), Some(user.id));
    assert!(orders[1].items.is_empty());

    Ok(())
}

/// Tests that the owner filter hides other users' orders.
///
/// Expected: Ok with only the owner's order
#[tokio::test]
async fn filters_by_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let mine = factory::create_order(db, Some(alice.id)).await?;
    factory::create_order(db, Some(bob.id)).await?;

    let orders = OrderRepository::new(db).list(Some(alice.id)).await?;

    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, mine.id);

    Ok(())
}

/// Tests that deleting the owner keeps the order with no user.
///
/// Expected: Ok with the order listed and `user` unset
#[tokio::test]
async fn keeps_orders_of_deleted_users() -> Result<(), DbErr> {
    use sea_orm::EntityTrait;

    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let order = factory::create_order(db, Some(user.id)).await?;
    entity::prelude::User::delete_by_id(user.id).exec(db).await?;

    let found = OrderRepository::new(db).find_by_id(order.id).await?.unwrap();

    assert_eq!(found.user, None);
    assert_eq!(found.sums, Decimal::ZERO);

    Ok(())
}
