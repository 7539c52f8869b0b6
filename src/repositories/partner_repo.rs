//! Partner repository for async database operations.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult};
use crate::models::{NewPartner, Partner, UpdatePartner};
use crate::schema::partners;

/// Optional filters for partner listings.
#[derive(Debug, Clone, Default)]
pub struct PartnerFilter {
    pub name: Option<String>,
    pub level: Option<String>,
}

#[derive(Clone)]
pub struct PartnerRepository {
    pool: AsyncDbPool,
}

impl PartnerRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new_partner: NewPartner) -> AppResult<Partner> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| AppError::ConnectionPool {
                source: anyhow::Error::new(e),
            })?;

        diesel::insert_into(partners::table)
            .values(&new_partner)
            .returning(Partner::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn find_by_id(&self, partner_id: i32) -> AppResult<Option<Partner>> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| AppError::ConnectionPool {
                source: anyhow::Error::new(e),
            })?;

        partners::table
            .filter(partners::id.eq(partner_id))
            .filter(partners::removed.is_null())
            .select(Partner::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Lists live partners, newest first, with optional LIKE filters.
    pub async fn list(
        &self,
        filter: &PartnerFilter,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<Partner>, i64)> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| AppError::ConnectionPool {
                source: anyhow::Error::new(e),
            })?;

        let mut query = partners::table
            .filter(partners::removed.is_null())
            .select(Partner::as_select())
            .into_boxed();
        let mut count_query = partners::table
            .filter(partners::removed.is_null())
            .count()
            .into_boxed();

        if let Some(name) = &filter.name {
            let pattern = format!("%{}%", name);
            query = query.filter(partners::name.like(pattern.clone()));
            count_query = count_query.filter(partners::name.like(pattern));
        }
        if let Some(level) = &filter.level {
            let pattern = format!("%{}%", level);
            query = query.filter(partners::level.like(pattern.clone()));
            count_query = count_query.filter(partners::level.like(pattern));
        }

        let total: i64 = count_query.get_result(&mut conn).await?;

        let items = query
            .order(partners::created.desc())
            .offset(offset)
            .limit(limit)
            .load(&mut conn)
            .await?;

        Ok((items, total))
    }

    pub async fn update(&self, partner_id: i32, changes: UpdatePartner) -> AppResult<Partner> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| AppError::ConnectionPool {
                source: anyhow::Error::new(e),
            })?;

        diesel::update(
            partners::table
                .filter(partners::id.eq(partner_id))
                .filter(partners::removed.is_null()),
        )
        .set((&changes, partners::updated.eq(diesel::dsl::now)))
        .returning(Partner::as_returning())
        .get_result(&mut conn)
        .await
        .map_err(|e| match e {
            diesel::result::Error::NotFound => AppError::not_found("partner", partner_id),
            _ => AppError::from(e),
        })
    }

    pub async fn soft_delete(&self, partner_id: i32) -> AppResult<usize> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| AppError::ConnectionPool {
                source: anyhow::Error::new(e),
            })?;

        diesel::update(
            partners::table
                .filter(partners::id.eq(partner_id))
                .filter(partners::removed.is_null()),
        )
        .set(partners::removed.eq(diesel::dsl::now.nullable()))
        .execute(&mut conn)
        .await
        .map_err(AppError::from)
    }
}
