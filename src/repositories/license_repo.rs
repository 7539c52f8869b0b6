//! License repository for async database operations.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult};
use crate::models::{License, NewLicense, UpdateLicense};
use crate::schema::licenses;

/// Optional filters for license listings.
///
/// `status` is an equality filter over the caller-supplied status string.
#[derive(Debug, Clone, Default)]
pub struct LicenseFilter {
    pub status: Option<String>,
    pub business_id: Option<i32>,
    pub product_id: Option<i32>,
}

#[derive(Clone)]
pub struct LicenseRepository {
    pool: AsyncDbPool,
}

impl LicenseRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new_license: NewLicense) -> AppResult<License> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| AppError::ConnectionPool {
                source: anyhow::Error::new(e),
            })?;

        diesel::insert_into(licenses::table)
            .values(&new_license)
            .returning(License::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn find_by_id(&self, license_id: i32) -> AppResult<Option<License>> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| AppError::ConnectionPool {
                source: anyhow::Error::new(e),
            })?;

        licenses::table
            .filter(licenses::id.eq(license_id))
            .filter(licenses::removed.is_null())
            .select(License::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Lists live licenses, newest first.
    pub async fn list(
        &self,
        filter: &LicenseFilter,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<License>, i64)> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| AppError::ConnectionPool {
                source: anyhow::Error::new(e),
            })?;

        let mut query = licenses::table
            .filter(licenses::removed.is_null())
            .select(License::as_select())
            .into_boxed();
        let mut count_query = licenses::table
            .filter(licenses::removed.is_null())
            .count()
            .into_boxed();

        if let Some(status) = &filter.status {
            query = query.filter(licenses::status.eq(status.clone()));
            count_query = count_query.filter(licenses::status.eq(status.clone()));
        }
        if let Some(business_id) = filter.business_id {
            query = query.filter(licenses::business_id.eq(business_id));
            count_query = count_query.filter(licenses::business_id.eq(business_id));
        }
        if let Some(product_id) = filter.product_id {
            query = query.filter(licenses::product_id.eq(product_id));
            count_query = count_query.filter(licenses::product_id.eq(product_id));
        }

        let total: i64 = count_query.get_result(&mut conn).await?;

        let items = query
            .order(licenses::created.desc())
            .offset(offset)
            .limit(limit)
            .load(&mut conn)
            .await?;

        Ok((items, total))
    }

    pub async fn update(&self, license_id: i32, changes: UpdateLicense) -> AppResult<License> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| AppError::ConnectionPool {
                source: anyhow::Error::new(e),
            })?;

        diesel::update(
            licenses::table
                .filter(licenses::id.eq(license_id))
                .filter(licenses::removed.is_null()),
        )
        .set((&changes, licenses::updated.eq(diesel::dsl::now)))
        .returning(License::as_returning())
        .get_result(&mut conn)
        .await
        .map_err(|e| match e {
            diesel::result::Error::NotFound => AppError::not_found("license", license_id),
            _ => AppError::from(e),
        })
    }

    pub async fn soft_delete(&self, license_id: i32) -> AppResult<usize> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| AppError::ConnectionPool {
                source: anyhow::Error::new(e),
            })?;

        diesel::update(
            licenses::table
                .filter(licenses::id.eq(license_id))
                .filter(licenses::removed.is_null()),
        )
        .set(licenses::removed.eq(diesel::dsl::now.nullable()))
        .execute(&mut conn)
        .await
        .map_err(AppError::from)
    }
}
