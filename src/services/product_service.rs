//! Product service for business logic operations.

use crate::error::{AppError, AppResult};
use crate::models::{NewProduct, Product, UpdateProduct};
use crate::repositories::{ProductFilter, ProductRepository};

#[derive(Clone)]
pub struct ProductService {
    repo: ProductRepository,
}

impl ProductService {
    pub fn new(repo: ProductRepository) -> Self {
        Self { repo }
    }

    pub async fn create_product(&self, new_product: NewProduct) -> AppResult<Product> {
        self.repo.create(new_product).await
    }

    pub async fn get_product(&self, id: i32) -> AppResult<Product> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("product", id))
    }

    pub async fn list_products(
        &self,
        filter: &ProductFilter,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<Product>, i64)> {
        self.repo.list(filter, offset, limit).await
    }

    pub async fn update_product(&self, id: i32, changes: UpdateProduct) -> AppResult<Product> {
        self.get_product(id).await?;
        self.repo.update(id, changes).await
    }

    pub async fn delete_product(&self, id: i32) -> AppResult<bool> {
        let affected = self.repo.soft_delete(id).await?;
        Ok(affected > 0)
    }
}
