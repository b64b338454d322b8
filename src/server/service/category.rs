use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::server::{
    data::category::CategoryRepository,
    error::{is_unique_violation, AppError},
    model::category::{Category, CategoryRef, CreateCategoryParams},
};

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all categories alphabetically
    pub async fn get_all(&self) -> Result<Vec<Category>, AppError> {
        Ok(CategoryRepository::new(self.db).get_all().await?)
    }

    /// Creates a category, failing with Conflict when the name is taken
    pub async fn create(&self, params: CreateCategoryParams) -> Result<Category, AppError> {
        let repo = CategoryRepository::new(self.db);

        if repo.find_by_name(&params.name).await?.is_some() {
            return Err(duplicate_category(&params.name));
        }

        repo.create(&params.name).await.map_err(|e| {
            if is_unique_violation(&e) {
                duplicate_category(&params.name)
            } else {
                e.into()
            }
        })
    }

    /// Deletes a category together with its dishes
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !CategoryRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Category not found".to_string()));
        }

        tracing::info!("Deleted category {}", id);

        Ok(())
    }
}

/// Resolves a dish payload's category reference on `conn`.
///
/// A name is created on demand; an id must already exist.
pub async fn resolve_category<C: ConnectionTrait>(
    conn: &C,
    reference: CategoryRef,
) -> Result<Category, AppError> {
    let repo = CategoryRepository::new(conn);

    match reference {
        CategoryRef::Id(id) => repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id))),
        CategoryRef::Name(name) => {
            let (category, created) = repo.get_or_create(&name).await?;
            if created {
                tracing::info!("Created category '{}' on demand", category.name);
            }
            Ok(category)
        }
    }
}

fn duplicate_category(name: &str) -> AppError {
    AppError::Conflict(format!("Category '{}' already exists", name))
}
