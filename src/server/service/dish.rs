use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::server::{
    data::{dish::DishRepository, review::ReviewRepository},
    error::{is_unique_violation, AppError},
    model::dish::{Dish, DishDetail, DishFilter, DishParams, DishValues, PatchDishParams},
    service::category::resolve_category,
};

pub struct DishService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DishService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists available dishes matching the filter
    pub async fn list(&self, filter: DishFilter) -> Result<Vec<Dish>, AppError> {
        Ok(DishRepository::new(self.db).list_available(&filter).await?)
    }

    /// Gets an available dish with its reviews
    pub async fn get_detail(&self, id: i32) -> Result<DishDetail, AppError> {
        let dish = DishRepository::new(self.db)
            .find_by_id(id, true)
            .await?
            .ok_or_else(dish_not_found)?;

        let reviews = ReviewRepository::new(self.db).get_by_dish(id).await?;

        Ok(DishDetail { dish, reviews })
    }

    /// Creates a dish, creating its category by name if needed.
    ///
    /// The category and the dish are written in one transaction, so a rejected dish does
    /// not leave an orphan category behind.
    ///
    /// # Returns
    /// - `Ok(Dish)` - Created dish
    /// - `Err(AppError::Conflict)` - Dish name already taken
    /// - `Err(AppError::NotFound)` - Category referenced by an unknown id
    pub async fn create(&self, params: DishParams) -> Result<Dish, AppError> {
        let txn = self.db.begin().await?;

        let category = resolve_category(&txn, params.category.clone()).await?;
        let name = params.name.clone();

        let dish = DishRepository::new(&txn)
            .create(params.into_values(category.id))
            .await
            .map_err(|e| map_write_error(e, &name))?;

        txn.commit().await?;

        tracing::info!("Created dish {} ({})", dish.id, dish.name);

        Ok(dish)
    }

    /// Replaces every field of a dish, regardless of its availability
    pub async fn replace(&self, id: i32, params: DishParams) -> Result<Dish, AppError> {
        let txn = self.db.begin().await?;

        let repo = DishRepository::new(&txn);
        if repo.find_model(id).await?.is_none() {
            return Err(dish_not_found());
        }

        let category = resolve_category(&txn, params.category.clone()).await?;
        let name = params.name.clone();

        let dish = repo
            .update(id, params.into_values(category.id))
            .await
            .map_err(|e| map_write_error(e, &name))?;

        txn.commit().await?;

        Ok(dish)
    }

    /// Updates only the supplied fields of a dish
    pub async fn patch(&self, id: i32, params: PatchDishParams) -> Result<Dish, AppError> {
        let txn = self.db.begin().await?;

        let repo = DishRepository::new(&txn);
        let Some(stored) = repo.find_model(id).await? else {
            return Err(dish_not_found());
        };

        let category_id = match params.category.clone() {
            Some(reference) => Some(resolve_category(&txn, reference).await?.id),
            None => None,
        };

        let values = params.apply(DishValues::from_entity(&stored), category_id);
        let name = values.name.clone();

        let dish = repo
            .update(id, values)
            .await
            .map_err(|e| map_write_error(e, &name))?;

        txn.commit().await?;

        Ok(dish)
    }

    /// Deletes a dish, regardless of its availability
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !DishRepository::new(self.db).delete(id).await? {
            return Err(dish_not_found());
        }

        tracing::info!("Deleted dish {}", id);

        Ok(())
    }
}

fn dish_not_found() -> AppError {
    AppError::NotFound("Dish not found".to_string())
}

fn map_write_error(err: DbErr, name: &str) -> AppError {
    if is_unique_violation(&err) {
        AppError::Conflict(format!("A dish named '{}' already exists", name))
    } else {
        err.into()
    }
}
