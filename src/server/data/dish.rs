//! Dish data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Select,
};

use crate::server::{
    data::category::CategoryRepository,
    model::dish::{Dish, DishFilter, DishOrdering, DishValues},
};

pub struct DishRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DishRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Lists available dishes matching `filter`.
    ///
    /// # Arguments
    /// - `filter` - Category, price bound, tag set and ordering
    ///
    /// # Returns
    /// - `Ok(Vec<Dish>)` - Matching dishes with their category, possibly empty
    /// - `Err(DbErr)` - Database error
    pub async fn list_available(&self, filter: &DishFilter) -> Result<Vec<Dish>, DbErr> {
        let mut query = entity::prelude::Dish::find()
            .filter(entity::dish::Column::IsAvailable.eq(true));

        if let Some(name) = &filter.category {
            let category_ids = CategoryRepository::new(self.db)
                .find_ids_by_name_ignore_case(name)
                .await?;
            if category_ids.is_empty() {
                return Ok(Vec::new());
            }
            query = query.filter(entity::dish::Column::CategoryId.is_in(category_ids));
        }

        if let Some(max_price) = filter.max_price {
            query = query.filter(entity::dish::Column::Price.lte(max_price));
        }

        if let Some(tags) = &filter.tags {
            if tags.is_empty() {
                return Ok(Vec::new());
            }
            query = query.filter(entity::dish::Column::Tags.is_in(tags.iter().copied()));
        }

        let rows = apply_ordering(query, filter.ordering)
            .find_also_related(entity::prelude::Category)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(dish, category)| with_category(dish, category))
            .collect()
    }

    /// Finds a dish by id together with its category.
    ///
    /// # Arguments
    /// - `id` - Dish id
    /// - `available_only` - When true, an unavailable dish is reported as absent
    pub async fn find_by_id(&self, id: i32, available_only: bool) -> Result<Option<Dish>, DbErr> {
        let mut query = entity::prelude::Dish::find_by_id(id);
        if available_only {
            query = query.filter(entity::dish::Column::IsAvailable.eq(true));
        }

        let row = query
            .find_also_related(entity::prelude::Category)
            .one(self.db)
            .await?;

        row.map(|(dish, category)| with_category(dish, category))
            .transpose()
    }

    /// Finds the raw dish row, regardless of availability.
    pub async fn find_model(&self, id: i32) -> Result<Option<entity::dish::Model>, DbErr> {
        entity::prelude::Dish::find_by_id(id).one(self.db).await
    }

    /// Loads the dishes whose ids appear in `ids`. Unknown ids are simply absent.
    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<entity::dish::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Dish::find()
            .filter(entity::dish::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Inserts a dish and returns it with its category.
    ///
    /// # Returns
    /// - `Ok(Dish)` - Created dish
    /// - `Err(DbErr)` - Database error, including a unique violation on `name`
    pub async fn create(&self, values: DishValues) -> Result<Dish, DbErr> {
        let entity = entity::dish::ActiveModel {
            name: ActiveValue::Set(values.name),
            description: ActiveValue::Set(values.description),
            price: ActiveValue::Set(values.price),
            category_id: ActiveValue::Set(values.category_id),
            photo: ActiveValue::Set(values.photo),
            rating: ActiveValue::Set(values.rating),
            is_available: ActiveValue::Set(values.is_available),
            tags: ActiveValue::Set(values.tags),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.reload(entity.id).await
    }

    /// Overwrites every column of an existing dish.
    ///
    /// # Returns
    /// - `Ok(Dish)` - Updated dish
    /// - `Err(DbErr::RecordNotUpdated)` - No dish with that id
    /// - `Err(DbErr)` - Other database error, including a unique violation on `name`
    pub async fn update(&self, id: i32, values: DishValues) -> Result<Dish, DbErr> {
        entity::dish::ActiveModel {
            id: ActiveValue::Unchanged(id),
            name: ActiveValue::Set(values.name),
            description: ActiveValue::Set(values.description),
            price: ActiveValue::Set(values.price),
            category_id: ActiveValue::Set(values.category_id),
            photo: ActiveValue::Set(values.photo),
            rating: ActiveValue::Set(values.rating),
            is_available: ActiveValue::Set(values.is_available),
            tags: ActiveValue::Set(values.tags),
        }
        .update(self.db)
        .await?;

        self.reload(id).await
    }

    /// Deletes a dish. Order lines and reviews referencing it cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - Dish deleted
    /// - `Ok(false)` - No dish with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Dish::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    async fn reload(&self, id: i32) -> Result<Dish, DbErr> {
        self.find_by_id(id, false).await?.ok_or_else(|| {
            DbErr::RecordNotFound(format!("Dish with id {} not found after write", id))
        })
    }
}

fn apply_ordering(
    query: Select<entity::prelude::Dish>,
    ordering: DishOrdering,
) -> Select<entity::prelude::Dish> {
    use entity::dish::Column;

    match ordering {
        DishOrdering::Id => query.order_by_asc(Column::Id),
        DishOrdering::PriceAsc => query.order_by_asc(Column::Price).order_by_asc(Column::Id),
        DishOrdering::PriceDesc => query.order_by_desc(Column::Price).order_by_asc(Column::Id),
        DishOrdering::RatingAsc => query.order_by_asc(Column::Rating).order_by_asc(Column::Id),
        DishOrdering::RatingDesc => query.order_by_desc(Column::Rating).order_by_asc(Column::Id),
        DishOrdering::NameAsc => query.order_by_asc(Column::Name),
        DishOrdering::NameDesc => query.order_by_desc(Column::Name),
    }
}

fn with_category(
    dish: entity::dish::Model,
    category: Option<entity::category::Model>,
) -> Result<Dish, DbErr> {
    let category = category.ok_or_else(|| {
        DbErr::RecordNotFound(format!("Category {} of dish {} missing", dish.category_id, dish.id))
    })?;

    Ok(Dish::from_entity(dish, category))
}
