//! Product repository for async database operations.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult};
use crate::models::{NewProduct, Product, UpdateProduct};
use crate::schema::products;

/// Optional filters for product listings.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub name: Option<String>,
    pub code: Option<String>,
}

#[derive(Clone)]
pub struct ProductRepository {
    pool: AsyncDbPool,
}

impl ProductRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new_product: NewProduct) -> AppResult<Product> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| AppError::ConnectionPool {
                source: anyhow::Error::new(e),
            })?;

        diesel::insert_into(products::table)
            .values(&new_product)
            .returning(Product::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn find_by_id(&self, product_id: i32) -> AppResult<Option<Product>> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| AppError::ConnectionPool {
                source: anyhow::Error::new(e),
            })?;

        products::table
            .filter(products::id.eq(product_id))
            .filter(products::removed.is_null())
            .select(Product::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Batch lookup of live products by id, used by enrichment joins.
    pub async fn find_by_ids(&self, ids: &[i32]) -> AppResult<Vec<Product>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| AppError::ConnectionPool {
                source: anyhow::Error::new(e),
            })?;

        products::table
            .filter(products::id.eq_any(ids))
            .filter(products::removed.is_null())
            .select(Product::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Lists live products, newest first, with optional LIKE filters.
    pub async fn list(
        &self,
        filter: &ProductFilter,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<Product>, i64)> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| AppError::ConnectionPool {
                source: anyhow::Error::new(e),
            })?;

        let mut query = products::table
            .filter(products::removed.is_null())
            .select(Product::as_select())
            .into_boxed();
        let mut count_query = products::table
            .filter(products::removed.is_null())
            .count()
            .into_boxed();

        if let Some(name) = &filter.name {
            let pattern = format!("%{}%", name);
            query = query.filter(products::name.like(pattern.clone()));
            count_query = count_query.filter(products::name.like(pattern));
        }
        if let Some(code) = &filter.code {
            let pattern = format!("%{}%", code);
            query = query.filter(products::code.like(pattern.clone()));
            count_query = count_query.filter(products::code.like(pattern));
        }

        let total: i64 = count_query.get_result(&mut conn).await?;

        let items = query
            .order(products::created.desc())
            .offset(offset)
            .limit(limit)
            .load(&mut conn)
            .await?;

        Ok((items, total))
    }

    pub async fn update(&self, product_id: i32, changes: UpdateProduct) -> AppResult<Product> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| AppError::ConnectionPool {
                source: anyhow::Error::new(e),
            })?;

        diesel::update(
            products::table
                .filter(products::id.eq(product_id))
                .filter(products::removed.is_null()),
        )
        .set((&changes, products::updated.eq(diesel::dsl::now)))
        .returning(Product::as_returning())
        .get_result(&mut conn)
        .await
        .map_err(|e| match e {
            diesel::result::Error::NotFound => AppError::not_found("product", product_id),
            _ => AppError::from(e),
        })
    }

    pub async fn soft_delete(&self, product_id: i32) -> AppResult<usize> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| AppError::ConnectionPool {
                source: anyhow::Error::new(e),
            })?;

        diesel::update(
            products::table
                .filter(products::id.eq(product_id))
                .filter(products::removed.is_null()),
        )
        .set(products::removed.eq(diesel::dsl::now.nullable()))
        .execute(&mut conn)
        .await
        .map_err(AppError::from)
    }
}
