//! License service: CRUD and business/product name enrichment.
//!
//! License reads resolve the owning business name and licensed product
//! name with batched lookups over the page's foreign ids, joined in
//! memory.

use std::collections::HashMap;

use crate::error::{AppError, AppResult};
use crate::models::{License, NewLicense, UpdateLicense};
use crate::repositories::{BusinessRepository, LicenseFilter, LicenseRepository, ProductRepository};

/// A license joined with display names for its foreign keys.
#[derive(Debug, Clone)]
pub struct LicenseDetail {
    pub license: License,
    pub business_name: Option<String>,
    pub product_name: Option<String>,
}

#[derive(Clone)]
pub struct LicenseService {
    repo: LicenseRepository,
    businesses: BusinessRepository,
    products: ProductRepository,
}

impl LicenseService {
    pub fn new(
        repo: LicenseRepository,
        businesses: BusinessRepository,
        products: ProductRepository,
    ) -> Self {
        Self {
            repo,
            businesses,
            products,
        }
    }

    pub async fn create_license(&self, new_license: NewLicense) -> AppResult<License> {
        self.repo.create(new_license).await
    }

    pub async fn get_license(&self, id: i32) -> AppResult<License> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("license", id))
    }

    /// Gets a license with business and product name enrichment.
    pub async fn get_license_detailed(&self, id: i32) -> AppResult<LicenseDetail> {
        let license = self.get_license(id).await?;
        let mut details = self.enrich(vec![license]).await?;
        Ok(details.remove(0))
    }

    pub async fn list_licenses(
        &self,
        filter: &LicenseFilter,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<License>, i64)> {
        self.repo.list(filter, offset, limit).await
    }

    /// Lists licenses with business and product name enrichment.
    pub async fn list_licenses_detailed(
        &self,
        filter: &LicenseFilter,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<LicenseDetail>, i64)> {
        let (licenses, total) = self.repo.list(filter, offset, limit).await?;
        let details = self.enrich(licenses).await?;
        Ok((details, total))
    }

    pub async fn update_license(&self, id: i32, changes: UpdateLicense) -> AppResult<License> {
        self.get_license(id).await?;
        self.repo.update(id, changes).await
    }

    pub async fn delete_license(&self, id: i32) -> AppResult<bool> {
        let affected = self.repo.soft_delete(id).await?;
        Ok(affected > 0)
    }

    async fn enrich(&self, licenses: Vec<License>) -> AppResult<Vec<LicenseDetail>> {
        let business_ids = distinct_ids(licenses.iter().map(|l| l.business_id));
        let product_ids = distinct_ids(licenses.iter().map(|l| l.product_id));

        let (businesses, products) = futures::join!(
            self.businesses.find_by_ids(&business_ids),
            self.products.find_by_ids(&product_ids),
        );

        let business_names: HashMap<i32, String> =
            businesses?.into_iter().map(|b| (b.id, b.name)).collect();
        let product_names: HashMap<i32, String> =
            products?.into_iter().map(|p| (p.id, p.name)).collect();

        Ok(merge_license_details(licenses, &business_names, &product_names))
    }
}

/// Distinct ids in first-seen order.
pub(crate) fn distinct_ids(ids: impl Iterator<Item = i32>) -> Vec<i32> {
    let mut seen = Vec::new();
    for id in ids {
        if !seen.contains(&id) {
            seen.push(id);
        }
    }
    seen
}

/// Joins each license with its business and product names.
///
/// Pure merge over pre-fetched maps; a soft-deleted business or product
/// leaves the name `None`.
pub(crate) fn merge_license_details(
    licenses: Vec<License>,
    business_names: &HashMap<i32, String>,
    product_names: &HashMap<i32, String>,
) -> Vec<LicenseDetail> {
    licenses
        .into_iter()
        .map(|license| {
            let business_name = business_names.get(&license.business_id).cloned();
            let product_name = product_names.get(&license.product_id).cloned();
            LicenseDetail {
                license,
                business_name,
                product_name,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts() -> jiff_diesel::DateTime {
        use jiff_diesel::ToDiesel;
        jiff::civil::date(2025, 7, 1).at(12, 0, 0, 0).to_diesel()
    }

    fn sample_license(id: i32, business_id: i32, product_id: i32) -> License {
        License {
            id,
            business_id,
            product_id,
            license_key: format!("KEY-{:04}", id),
            status: "active".to_string(),
            expires_at: None,
            created: ts(),
            updated: ts(),
            removed: None,
        }
    }

    #[test]
    fn test_distinct_ids() {
        let ids = distinct_ids([3, 1, 3, 2, 1].into_iter());
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_merge_license_details() {
        let licenses = vec![sample_license(1, 10, 100), sample_license(2, 11, 100)];
        let business_names = HashMap::from([(10, "Acme rollout".to_string())]);
        let product_names = HashMap::from([(100, "Portal Pro".to_string())]);

        let details = merge_license_details(licenses, &business_names, &product_names);

        assert_eq!(details[0].business_name.as_deref(), Some("Acme rollout"));
        assert_eq!(details[0].product_name.as_deref(), Some("Portal Pro"));
        assert!(details[1].business_name.is_none());
        assert_eq!(details[1].product_name.as_deref(), Some("Portal Pro"));
    }

    #[test]
    fn test_merge_keeps_license_fields() {
        let licenses = vec![sample_license(5, 10, 100)];
        let details = merge_license_details(licenses, &HashMap::new(), &HashMap::new());
        assert_eq!(details[0].license.license_key, "KEY-0005");
        assert_eq!(details[0].license.status, "active");
    }
}
