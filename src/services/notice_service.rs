//! Notice service for business logic operations.

use crate::error::{AppError, AppResult};
use crate::models::{NewNotice, Notice, UpdateNotice};
use crate::repositories::{NoticeFilter, NoticeRepository};

#[derive(Clone)]
pub struct NoticeService {
    repo: NoticeRepository,
}

impl NoticeService {
    pub fn new(repo: NoticeRepository) -> Self {
        Self { repo }
    }

    pub async fn create_notice(&self, new_notice: NewNotice) -> AppResult<Notice> {
        self.repo.create(new_notice).await
    }

    pub async fn get_notice(&self, id: i32) -> AppResult<Notice> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("notice", id))
    }

    pub async fn list_notices(
        &self,
        filter: &NoticeFilter,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<Notice>, i64)> {
        self.repo.list(filter, offset, limit).await
    }

    pub async fn update_notice(&self, id: i32, changes: UpdateNotice) -> AppResult<Notice> {
        self.get_notice(id).await?;
        self.repo.update(id, changes).await
    }

    pub async fn delete_notice(&self, id: i32) -> AppResult<bool> {
        let affected = self.repo.soft_delete(id).await?;
        Ok(affected > 0)
    }
}
