use super::*;

/// Tests a valid status change, including moving backwards.
///
/// Expected: Ok with the new status each time
#[tokio::test]
async fn any_transition_is_allowed() -> Result<(), AppError> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let order = factory::create_order(db, None).await?;
    let service = OrderService::new(db);

    let completed = service.update_status(order.id, Some("COMPLETED")).await?;
    assert_eq!(completed.status, OrderStatus::Completed);

    let reopened = service.update_status(order.id, Some("NEW")).await?;
    assert_eq!(reopened.status, OrderStatus::New);

    Ok(())
}

/// Tests that invalid or missing statuses leave the order untouched.
///
/// Expected: Err(Validation) and the status still NEW
#[tokio::test]
async fn invalid_status_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let order = factory::create_order(db, None).await?;
    let service = OrderService::new(db);

    for status in [Some("DONE"), Some("completed"), None] {
        let result = service.update_status(order.id, status).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    let stored = entity::prelude::Order::find_by_id(order.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, OrderStatus::New);

    Ok(())
}

/// Tests that a missing order is reported before the payload is validated.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn missing_order_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = OrderService::new(db).update_status(42, Some("bogus")).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
