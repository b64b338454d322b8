//! Category domain models and parameters.

use crate::{
    model::category::{CategoryDto, CategoryRefDto, CreateCategoryDto},
    server::{error::AppError, util::validate},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

impl Category {
    pub fn from_entity(entity: entity::category::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            id: self.id,
            name: self.name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCategoryParams {
    pub name: String,
}

impl CreateCategoryParams {
    pub fn from_dto(dto: CreateCategoryDto) -> Result<Self, AppError> {
        Ok(Self {
            name: validate::category_name(&dto.name)?,
        })
    }
}

/// How a dish payload points at its category.
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryRef {
    /// Existing category id; an unknown id is an error.
    Id(i32),
    /// Category name, created if absent.
    Name(String),
}

impl CategoryRef {
    pub fn from_dto(dto: CategoryRefDto) -> Result<Self, AppError> {
        match dto {
            CategoryRefDto::Id(id) => Ok(Self::Id(id)),
            CategoryRefDto::Name(name) => Ok(Self::Name(validate::category_name(&name)?)),
        }
    }
}
