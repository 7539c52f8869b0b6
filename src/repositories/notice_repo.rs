//! Notice repository for async database operations.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult};
use crate::models::{NewNotice, Notice, UpdateNotice};
use crate::schema::notices;

/// Optional filters for notice listings.
#[derive(Debug, Clone, Default)]
pub struct NoticeFilter {
    pub title: Option<String>,
}

#[derive(Clone)]
pub struct NoticeRepository {
    pool: AsyncDbPool,
}

impl NoticeRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new_notice: NewNotice) -> AppResult<Notice> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| AppError::ConnectionPool {
                source: anyhow::Error::new(e),
            })?;

        diesel::insert_into(notices::table)
            .values(&new_notice)
            .returning(Notice::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn find_by_id(&self, notice_id: i32) -> AppResult<Option<Notice>> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| AppError::ConnectionPool {
                source: anyhow::Error::new(e),
            })?;

        notices::table
            .filter(notices::id.eq(notice_id))
            .filter(notices::removed.is_null())
            .select(Notice::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Lists live notices, pinned first, then newest first.
    pub async fn list(
        &self,
        filter: &NoticeFilter,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<Notice>, i64)> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| AppError::ConnectionPool {
                source: anyhow::Error::new(e),
            })?;

        let mut query = notices::table
            .filter(notices::removed.is_null())
            .select(Notice::as_select())
            .into_boxed();
        let mut count_query = notices::table
            .filter(notices::removed.is_null())
            .count()
            .into_boxed();

        if let Some(title) = &filter.title {
            let pattern = format!("%{}%", title);
            query = query.filter(notices::title.like(pattern.clone()));
            count_query = count_query.filter(notices::title.like(pattern));
        }

        let total: i64 = count_query.get_result(&mut conn).await?;

        let items = query
            .order((notices::pinned.desc(), notices::created.desc()))
            .offset(offset)
            .limit(limit)
            .load(&mut conn)
            .await?;

        Ok((items, total))
    }

    pub async fn update(&self, notice_id: i32, changes: UpdateNotice) -> AppResult<Notice> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| AppError::ConnectionPool {
                source: anyhow::Error::new(e),
            })?;

        diesel::update(
            notices::table
                .filter(notices::id.eq(notice_id))
                .filter(notices::removed.is_null()),
        )
        .set((&changes, notices::updated.eq(diesel::dsl::now)))
        .returning(Notice::as_returning())
        .get_result(&mut conn)
        .await
        .map_err(|e| match e {
            diesel::result::Error::NotFound => AppError::not_found("notice", notice_id),
            _ => AppError::from(e),
        })
    }

    pub async fn soft_delete(&self, notice_id: i32) -> AppResult<usize> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| AppError::ConnectionPool {
                source: anyhow::Error::new(e),
            })?;

        diesel::update(
            notices::table
                .filter(notices::id.eq(notice_id))
                .filter(notices::removed.is_null()),
        )
        .set(notices::removed.eq(diesel::dsl::now.nullable()))
        .execute(&mut conn)
        .await
        .map_err(AppError::from)
    }
}
