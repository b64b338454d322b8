//! Category data repository.

use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::category::Category;

pub struct CategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CategoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all categories ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Category>, DbErr> {
        let entities = entity::prelude::Category::find()
            .order_by_asc(entity::category::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Category::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Category>, DbErr> {
        let entity = entity::prelude::Category::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Category::from_entity))
    }

    /// Finds a category by exact name.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Category>, DbErr> {
        let entity = entity::prelude::Category::find()
            .filter(entity::category::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Category::from_entity))
    }

    /// Ids of the categories whose name equals `name` ignoring case.
    ///
    /// The comparison runs in Rust so it behaves the same for non-ASCII names on every
    /// backend.
    pub async fn find_ids_by_name_ignore_case(&self, name: &str) -> Result<Vec<i32>, DbErr> {
        let wanted = name.to_lowercase();

        Ok(entity::prelude::Category::find()
            .all(self.db)
            .await?
            .into_iter()
            .filter(|c| c.name.to_lowercase() == wanted)
            .map(|c| c.id)
            .collect())
    }

    /// Inserts a new category.
    ///
    /// # Returns
    /// - `Ok(Category)` - Created category
    /// - `Err(DbErr)` - Database error, including a unique violation on `name`
    pub async fn create(&self, name: &str) -> Result<Category, DbErr> {
        let entity = entity::category::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Category::from_entity(entity))
    }

    /// Returns the category named `name`, inserting it when absent.
    ///
    /// The insert uses `ON CONFLICT DO NOTHING`, so a concurrent request that created the
    /// same name first is picked up by the follow-up select instead of failing.
    ///
    /// # Returns
    /// - `Ok((category, true))` - Category was created by this call
    /// - `Ok((category, false))` - Category already existed
    /// - `Err(DbErr)` - Database error
    pub async fn get_or_create(&self, name: &str) -> Result<(Category, bool), DbErr> {
        if let Some(category) = self.find_by_name(name).await? {
            return Ok((category, false));
        }

        let inserted = entity::prelude::Category::insert(entity::category::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::category::Column::Name)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await;

        let created = match inserted {
            Ok(rows) => rows > 0,
            Err(DbErr::RecordNotInserted) => false,
            Err(err) => return Err(err),
        };

        let category = self.find_by_name(name).await?.ok_or_else(|| {
            DbErr::RecordNotFound(format!("Category '{}' not found after insert", name))
        })?;

        Ok((category, created))
    }

    /// Deletes a category. Its dishes are removed by the cascading foreign key.
    ///
    /// # Returns
    /// - `Ok(true)` - Category deleted
    /// - `Ok(false)` - No category with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Category::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
