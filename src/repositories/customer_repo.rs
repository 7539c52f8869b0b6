//! Customer repository for async database operations.
//!
//! Provides CRUD operations for the customers table using diesel_async.
//! Soft-deleted rows (`removed` set) are invisible to reads but persist.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult};
use crate::models::{Customer, NewCustomer, UpdateCustomer};
use crate::schema::customers;

/// Optional filters for customer listings. LIKE filters match substrings.
#[derive(Debug, Clone, Default)]
pub struct CustomerFilter {
    pub name: Option<String>,
    pub level: Option<String>,
}

/// Customer repository holding an async connection pool.
///
/// Since `AsyncDbPool` (bb8::Pool) internally uses `Arc`, cloning is cheap
/// (just reference count increment). No need for `Arc<CustomerRepository>`.
#[derive(Clone)]
pub struct CustomerRepository {
    pool: AsyncDbPool,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Inserts a new customer row.
    ///
    /// # Returns
    /// The created customer with generated id and timestamps
    pub async fn create(&self, new_customer: NewCustomer) -> AppResult<Customer> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| AppError::ConnectionPool {
                source: anyhow::Error::new(e),
            })?;

        diesel::insert_into(customers::table)
            .values(&new_customer)
            .returning(Customer::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Finds a live (not soft-deleted) customer by id.
    ///
    /// # Returns
    /// `Some(Customer)` if found, `None` otherwise
    pub async fn find_by_id(&self, customer_id: i32) -> AppResult<Option<Customer>> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| AppError::ConnectionPool {
                source: anyhow::Error::new(e),
            })?;

        customers::table
            .filter(customers::id.eq(customer_id))
            .filter(customers::removed.is_null())
            .select(Customer::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Batch lookup of live customers by id, used by enrichment joins.
    pub async fn find_by_ids(&self, ids: &[i32]) -> AppResult<Vec<Customer>> {
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

        customers::table
            .filter(customers::id.eq_any(ids))
            .filter(customers::removed.is_null())
            .select(Customer::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Lists live customers ordered by creation time (newest first).
    ///
    /// # Arguments
    /// * `filter` - Optional name/level LIKE filters
    /// * `offset` - Number of records to skip
    /// * `limit` - Maximum number of records to return
    ///
    /// # Returns
    /// A tuple of (customers, total matching count)
    pub async fn list(
        &self,
        filter: &CustomerFilter,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<Customer>, i64)> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| AppError::ConnectionPool {
                source: anyhow::Error::new(e),
            })?;

        let mut query = customers::table
            .filter(customers::removed.is_null())
            .select(Customer::as_select())
            .into_boxed();
        let mut count_query = customers::table
            .filter(customers::removed.is_null())
            .count()
            .into_boxed();

        if let Some(name) = &filter.name {
            let pattern = format!("%{}%", name);
            query = query.filter(customers::name.like(pattern.clone()));
            count_query = count_query.filter(customers::name.like(pattern));
        }
        if let Some(level) = &filter.level {
            let pattern = format!("%{}%", level);
            query = query.filter(customers::level.like(pattern.clone()));
            count_query = count_query.filter(customers::level.like(pattern));
        }

        let total: i64 = count_query.get_result(&mut conn).await?;

        let items = query
            .order(customers::created.desc())
            .offset(offset)
            .limit(limit)
            .load(&mut conn)
            .await?;

        Ok((items, total))
    }

    /// Applies a partial update to a live customer and bumps `updated`.
    pub async fn update(&self, customer_id: i32, changes: UpdateCustomer) -> AppResult<Customer> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| AppError::ConnectionPool {
                source: anyhow::Error::new(e),
            })?;

        diesel::update(
            customers::table
                .filter(customers::id.eq(customer_id))
                .filter(customers::removed.is_null()),
        )
        .set((&changes, customers::updated.eq(diesel::dsl::now)))
        .returning(Customer::as_returning())
        .get_result(&mut conn)
        .await
        .map_err(|e| match e {
            diesel::result::Error::NotFound => AppError::not_found("customer", customer_id),
            _ => AppError::from(e),
        })
    }

    /// Soft-deletes a customer by stamping `removed`. The row persists.
    ///
    /// # Returns
    /// The number of affected rows (0 when absent or already deleted)
    pub async fn soft_delete(&self, customer_id: i32) -> AppResult<usize> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| AppError::ConnectionPool {
                source: anyhow::Error::new(e),
            })?;

        diesel::update(
            customers::table
                .filter(customers::id.eq(customer_id))
                .filter(customers::removed.is_null()),
        )
        .set(customers::removed.eq(diesel::dsl::now.nullable()))
        .execute(&mut conn)
        .await
        .map_err(AppError::from)
    }
}
