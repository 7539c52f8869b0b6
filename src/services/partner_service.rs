//! Partner service for business logic operations.

use crate::error::{AppError, AppResult};
use crate::models::{NewPartner, Partner, UpdatePartner};
use crate::repositories::{PartnerFilter, PartnerRepository};

#[derive(Clone)]
pub struct PartnerService {
    repo: PartnerRepository,
}

impl PartnerService {
    pub fn new(repo: PartnerRepository) -> Self {
        Self { repo }
    }

    pub async fn create_partner(&self, new_partner: NewPartner) -> AppResult<Partner> {
        self.repo.create(new_partner).await
    }

    pub async fn get_partner(&self, id: i32) -> AppResult<Partner> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("partner", id))
    }

    pub async fn list_partners(
        &self,
        filter: &PartnerFilter,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<Partner>, i64)> {
        self.repo.list(filter, offset, limit).await
    }

    pub async fn update_partner(&self, id: i32, changes: UpdatePartner) -> AppResult<Partner> {
        self.get_partner(id).await?;
        self.repo.update(id, changes).await
    }

    pub async fn delete_partner(&self, id: i32) -> AppResult<bool> {
        let affected = self.repo.soft_delete(id).await?;
        Ok(affected > 0)
    }
}
