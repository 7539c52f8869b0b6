//! Business and business history repositories.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult};
use crate::models::{
    Business, BusinessHistory, NewBusiness, NewBusinessHistory, UpdateBusiness,
    UpdateBusinessHistory,
};
use crate::schema::{business_histories, businesses};

/// Optional filters for business listings.
#[derive(Debug, Clone, Default)]
pub struct BusinessFilter {
    pub name: Option<String>,
    pub customer_id: Option<i32>,
    pub manager_id: Option<i32>,
}

#[derive(Clone)]
pub struct BusinessRepository {
    pool: AsyncDbPool,
}

impl BusinessRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new_business: NewBusiness) -> AppResult<Business> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| AppError::ConnectionPool {
                source: anyhow::Error::new(e),
            })?;

        diesel::insert_into(businesses::table)
            .values(&new_business)
            .returning(Business::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn find_by_id(&self, business_id: i32) -> AppResult<Option<Business>> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| AppError::ConnectionPool {
                source: anyhow::Error::new(e),
            })?;

        businesses::table
            .filter(businesses::id.eq(business_id))
            .filter(businesses::removed.is_null())
            .select(Business::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Batch lookup of live businesses by id, used by enrichment joins.
    pub async fn find_by_ids(&self, ids: &[i32]) -> AppResult<Vec<Business>> {
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

        businesses::table
            .filter(businesses::id.eq_any(ids))
            .filter(businesses::removed.is_null())
            .select(Business::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Lists live businesses, newest first.
    ///
    /// `name` is a LIKE filter; `customer_id`/`manager_id` are equality
    /// filters.
    pub async fn list(
        &self,
        filter: &BusinessFilter,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<Business>, i64)> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| AppError::ConnectionPool {
                source: anyhow::Error::new(e),
            })?;

        let mut query = businesses::table
            .filter(businesses::removed.is_null())
            .select(Business::as_select())
            .into_boxed();
        let mut count_query = businesses::table
            .filter(businesses::removed.is_null())
            .count()
            .into_boxed();

        if let Some(name) = &filter.name {
            let pattern = format!("%{}%", name);
            query = query.filter(businesses::name.like(pattern.clone()));
            count_query = count_query.filter(businesses::name.like(pattern));
        }
        if let Some(customer_id) = filter.customer_id {
            query = query.filter(businesses::customer_id.eq(customer_id));
            count_query = count_query.filter(businesses::customer_id.eq(customer_id));
        }
        if let Some(manager_id) = filter.manager_id {
            query = query.filter(businesses::manager_id.eq(manager_id));
            count_query = count_query.filter(businesses::manager_id.eq(manager_id));
        }

        let total: i64 = count_query.get_result(&mut conn).await?;

        let items = query
            .order(businesses::created.desc())
            .offset(offset)
            .limit(limit)
            .load(&mut conn)
            .await?;

        Ok((items, total))
    }

    pub async fn update(&self, business_id: i32, changes: UpdateBusiness) -> AppResult<Business> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| AppError::ConnectionPool {
                source: anyhow::Error::new(e),
            })?;

        diesel::update(
            businesses::table
                .filter(businesses::id.eq(business_id))
                .filter(businesses::removed.is_null()),
        )
        .set((&changes, businesses::updated.eq(diesel::dsl::now)))
        .returning(Business::as_returning())
        .get_result(&mut conn)
        .await
        .map_err(|e| match e {
            diesel::result::Error::NotFound => AppError::not_found("business", business_id),
            _ => AppError::from(e),
        })
    }

    pub async fn soft_delete(&self, business_id: i32) -> AppResult<usize> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| AppError::ConnectionPool {
                source: anyhow::Error::new(e),
            })?;

        diesel::update(
            businesses::table
                .filter(businesses::id.eq(business_id))
                .filter(businesses::removed.is_null()),
        )
        .set(businesses::removed.eq(diesel::dsl::now.nullable()))
        .execute(&mut conn)
        .await
        .map_err(AppError::from)
    }
}

/// Repository for the business history sub-resource.
#[derive(Clone)]
pub struct BusinessHistoryRepository {
    pool: AsyncDbPool,
}

impl BusinessHistoryRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new_history: NewBusinessHistory) -> AppResult<BusinessHistory> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| AppError::ConnectionPool {
                source: anyhow::Error::new(e),
            })?;

        diesel::insert_into(business_histories::table)
            .values(&new_history)
            .returning(BusinessHistory::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn find_by_id(&self, history_id: i32) -> AppResult<Option<BusinessHistory>> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| AppError::ConnectionPool {
                source: anyhow::Error::new(e),
            })?;

        business_histories::table
            .filter(business_histories::id.eq(history_id))
            .filter(business_histories::removed.is_null())
            .select(BusinessHistory::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Lists live history entries of one business, newest first.
    pub async fn list_for_business(
        &self,
        business_id: i32,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<BusinessHistory>, i64)> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| AppError::ConnectionPool {
                source: anyhow::Error::new(e),
            })?;

        let total: i64 = business_histories::table
            .filter(business_histories::business_id.eq(business_id))
            .filter(business_histories::removed.is_null())
            .count()
            .get_result(&mut conn)
            .await?;

        let items = business_histories::table
            .filter(business_histories::business_id.eq(business_id))
            .filter(business_histories::removed.is_null())
            .order(business_histories::created.desc())
            .offset(offset)
            .limit(limit)
            .select(BusinessHistory::as_select())
            .load(&mut conn)
            .await?;

        Ok((items, total))
    }

    pub async fn update(
        &self,
        history_id: i32,
        changes: UpdateBusinessHistory,
    ) -> AppResult<BusinessHistory> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| AppError::ConnectionPool {
                source: anyhow::Error::new(e),
            })?;

        diesel::update(
            business_histories::table
                .filter(business_histories::id.eq(history_id))
                .filter(business_histories::removed.is_null()),
        )
        .set((&changes, business_histories::updated.eq(diesel::dsl::now)))
        .returning(BusinessHistory::as_returning())
        .get_result(&mut conn)
        .await
        .map_err(|e| match e {
            diesel::result::Error::NotFound => AppError::not_found("business history", history_id),
            _ => AppError::from(e),
        })
    }

    pub async fn soft_delete(&self, history_id: i32) -> AppResult<usize> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| AppError::ConnectionPool {
                source: anyhow::Error::new(e),
            })?;

        diesel::update(
            business_histories::table
                .filter(business_histories::id.eq(history_id))
                .filter(business_histories::removed.is_null()),
        )
        .set(business_histories::removed.eq(diesel::dsl::now.nullable()))
        .execute(&mut conn)
        .await
        .map_err(AppError::from)
    }
}
