use super::*;

/// Tests that reviews are listed newest first and scoped to the dish.
///
/// Expected: Ok with the two reviews of the dish, latest first
#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (category, dish) = factory::helpers::create_dish_with_category(db).await?;
    let other_dish = factory::create_dish(db, category.id).await?;
    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;

    let older = factory::create_review(db, dish.id, alice.id).await?;
    let mut older_active: entity::review::ActiveModel = older.clone().into();
    older_active.date = ActiveValue::Set(Utc::now() - Duration::days(1));
    older_active.update(db).await?;

    let newer = factory::create_review(db, dish.id, bob.id).await?;
    factory::create_review(db, other_dish.id, alice.id).await?;

    let reviews = ReviewRepository::new(db).get_by_dish(dish.id).await?;

    let ids: Vec<i32> = reviews.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);
    assert_eq!(reviews[1].user.id, alice.id);

    Ok(())
}
