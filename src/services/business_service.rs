//! Business service: CRUD, history entries, and manager/customer
//! enrichment.
//!
//! Listing and detail reads return businesses augmented with the manager's
//! identity attributes and the owning customer's name. Foreign ids are
//! collected per page and resolved with one batched identity call and one
//! batched customer query, then joined in memory.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::external::identity::{IdentityProvider, IdentityUser};
use crate::models::{
    Business, BusinessHistory, NewBusiness, NewBusinessHistory, UpdateBusiness,
    UpdateBusinessHistory,
};
use crate::repositories::{BusinessFilter, BusinessHistoryRepository, BusinessRepository, CustomerRepository};

/// A business joined with its enrichment fields.
///
/// Enrichment is best-effort: a missing manager or customer record leaves
/// the corresponding field `None` without failing the read.
#[derive(Debug, Clone)]
pub struct BusinessDetail {
    pub business: Business,
    pub manager: Option<IdentityUser>,
    pub customer_name: Option<String>,
}

#[derive(Clone)]
pub struct BusinessService {
    repo: BusinessRepository,
    histories: BusinessHistoryRepository,
    customers: CustomerRepository,
    identity: Arc<dyn IdentityProvider>,
}

impl BusinessService {
    pub fn new(
        repo: BusinessRepository,
        histories: BusinessHistoryRepository,
        customers: CustomerRepository,
        identity: Arc<dyn IdentityProvider>,
    ) -> Self {
        Self {
            repo,
            histories,
            customers,
            identity,
        }
    }

    pub async fn create_business(&self, new_business: NewBusiness) -> AppResult<Business> {
        self.repo.create(new_business).await
    }

    pub async fn get_business(&self, id: i32) -> AppResult<Business> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("business", id))
    }

    /// Gets a business with manager and customer enrichment.
    pub async fn get_business_detailed(&self, id: i32) -> AppResult<BusinessDetail> {
        let business = self.get_business(id).await?;
        let mut details = self.enrich(vec![business]).await?;
        // enrich preserves its single input row
        Ok(details.remove(0))
    }

    pub async fn list_businesses(
        &self,
        filter: &BusinessFilter,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<Business>, i64)> {
        self.repo.list(filter, offset, limit).await
    }

    /// Lists businesses with manager and customer enrichment.
    ///
    /// # Returns
    /// A tuple of (enriched businesses, total matching count)
    pub async fn list_businesses_detailed(
        &self,
        filter: &BusinessFilter,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<BusinessDetail>, i64)> {
        let (businesses, total) = self.repo.list(filter, offset, limit).await?;
        let details = self.enrich(businesses).await?;
        Ok((details, total))
    }

    pub async fn update_business(&self, id: i32, changes: UpdateBusiness) -> AppResult<Business> {
        self.get_business(id).await?;
        self.repo.update(id, changes).await
    }

    pub async fn delete_business(&self, id: i32) -> AppResult<bool> {
        let affected = self.repo.soft_delete(id).await?;
        Ok(affected > 0)
    }

    // ------------------------------------------------------------------
    // History sub-resource
    // ------------------------------------------------------------------

    /// Adds a history entry to an existing business.
    pub async fn add_history(&self, business_id: i32, content: String) -> AppResult<BusinessHistory> {
        // The parent business must be live
        self.get_business(business_id).await?;
        self.histories
            .create(NewBusinessHistory {
                business_id,
                content,
            })
            .await
    }

    pub async fn list_histories(
        &self,
        business_id: i32,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<BusinessHistory>, i64)> {
        self.get_business(business_id).await?;
        self.histories
            .list_for_business(business_id, offset, limit)
            .await
    }

    pub async fn update_history(
        &self,
        history_id: i32,
        changes: UpdateBusinessHistory,
    ) -> AppResult<BusinessHistory> {
        self.histories
            .find_by_id(history_id)
            .await?
            .ok_or_else(|| AppError::not_found("business history", history_id))?;
        self.histories.update(history_id, changes).await
    }

    /// Soft-deletes a history entry. A miss is reported, not swallowed.
    pub async fn delete_history(&self, history_id: i32) -> AppResult<bool> {
        let affected = self.histories.soft_delete(history_id).await?;
        Ok(affected > 0)
    }

    // ------------------------------------------------------------------
    // Enrichment
    // ------------------------------------------------------------------

    async fn enrich(&self, businesses: Vec<Business>) -> AppResult<Vec<BusinessDetail>> {
        let manager_ids = collect_ids(businesses.iter().map(|b| b.manager_id));
        let customer_ids = collect_ids(businesses.iter().map(|b| b.customer_id));

        // One identity round-trip and one customer query per page
        let (managers, customers) = futures::join!(
            lookup_managers(self.identity.as_ref(), &manager_ids),
            self.customers.find_by_ids(&customer_ids),
        );

        let customer_names: HashMap<i32, String> =
            customers?.into_iter().map(|c| (c.id, c.name)).collect();

        Ok(merge_business_details(businesses, &managers, &customer_names))
    }
}

/// Collects the distinct present ids from an iterator of optional
/// foreign keys, preserving first-seen order.
pub(crate) fn collect_ids(ids: impl Iterator<Item = Option<i32>>) -> Vec<i32> {
    let mut seen = Vec::new();
    for id in ids.flatten() {
        if !seen.contains(&id) {
            seen.push(id);
        }
    }
    seen
}

/// Batched identity lookup that degrades to an empty map on provider
/// failure; a broken identity provider must not take down business reads.
pub(crate) async fn lookup_managers(
    identity: &dyn IdentityProvider,
    manager_ids: &[i32],
) -> HashMap<i32, IdentityUser> {
    if manager_ids.is_empty() {
        return HashMap::new();
    }

    match identity.get_users_by_ids(manager_ids).await {
        Ok(users) => users,
        Err(e) => {
            tracing::warn!(error = %e, "Identity lookup failed; returning businesses without manager info");
            HashMap::new()
        }
    }
}

/// Joins each business with its manager and customer lookups.
///
/// Pure merge over pre-fetched maps; row order is preserved.
pub(crate) fn merge_business_details(
    businesses: Vec<Business>,
    managers: &HashMap<i32, IdentityUser>,
    customer_names: &HashMap<i32, String>,
) -> Vec<BusinessDetail> {
    businesses
        .into_iter()
        .map(|business| {
            let manager = business
                .manager_id
                .and_then(|id| managers.get(&id).cloned());
            let customer_name = business
                .customer_id
                .and_then(|id| customer_names.get(&id).cloned());
            BusinessDetail {
                business,
                manager,
                customer_name,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    fn ts() -> jiff_diesel::DateTime {
        use jiff_diesel::ToDiesel;
        jiff::civil::date(2025, 7, 1).at(12, 0, 0, 0).to_diesel()
    }

    fn sample_business(id: i32, customer_id: Option<i32>, manager_id: Option<i32>) -> Business {
        Business {
            id,
            name: format!("business-{}", id),
            telnum: None,
            customer_id,
            manager_id,
            created: ts(),
            updated: ts(),
            removed: None,
        }
    }

    fn sample_user(id: i32, name: &str) -> IdentityUser {
        IdentityUser {
            id,
            username: name.to_lowercase(),
            name: name.to_string(),
            user_type: "manager".to_string(),
            company_id: Some(1),
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl IdentityProvider for FailingProvider {
        async fn get_user(&self, user_id: i32) -> AppResult<IdentityUser> {
            Err(AppError::external(
                "identity",
                format!("get_user({}) unavailable", user_id),
                None,
            ))
        }

        async fn get_users_by_ids(
            &self,
            _user_ids: &[i32],
        ) -> AppResult<HashMap<i32, IdentityUser>> {
            Err(AppError::external("identity", "unavailable", None))
        }
    }

    struct StaticProvider {
        users: HashMap<i32, IdentityUser>,
    }

    #[async_trait]
    impl IdentityProvider for StaticProvider {
        async fn get_user(&self, user_id: i32) -> AppResult<IdentityUser> {
            self.users.get(&user_id).cloned().ok_or_else(|| {
                AppError::NotFound {
                    entity: "identity user".to_string(),
                    field: "id".to_string(),
                    value: user_id.to_string(),
                }
            })
        }

        async fn get_users_by_ids(
            &self,
            user_ids: &[i32],
        ) -> AppResult<HashMap<i32, IdentityUser>> {
            Ok(user_ids
                .iter()
                .filter_map(|id| self.users.get(id).map(|u| (*id, u.clone())))
                .collect())
        }
    }

    #[test]
    fn test_collect_ids_dedupes_and_skips_none() {
        let businesses = vec![
            sample_business(1, Some(10), Some(7)),
            sample_business(2, None, Some(7)),
            sample_business(3, Some(11), None),
        ];
        let manager_ids = collect_ids(businesses.iter().map(|b| b.manager_id));
        let customer_ids = collect_ids(businesses.iter().map(|b| b.customer_id));

        assert_eq!(manager_ids, vec![7]);
        assert_eq!(customer_ids, vec![10, 11]);
    }

    #[test]
    fn test_merge_joins_manager_and_customer() {
        let businesses = vec![
            sample_business(1, Some(10), Some(7)),
            sample_business(2, Some(99), Some(8)),
        ];
        let managers = HashMap::from([(7, sample_user(7, "Hana"))]);
        let customer_names = HashMap::from([(10, "Acme Co".to_string())]);

        let details = merge_business_details(businesses, &managers, &customer_names);

        assert_eq!(details.len(), 2);
        assert_eq!(details[0].manager.as_ref().unwrap().name, "Hana");
        assert_eq!(details[0].customer_name.as_deref(), Some("Acme Co"));
        // Unresolvable ids degrade to None instead of erroring
        assert!(details[1].manager.is_none());
        assert!(details[1].customer_name.is_none());
    }

    #[test]
    fn test_merge_preserves_row_order() {
        let businesses = vec![
            sample_business(3, None, None),
            sample_business(1, None, None),
            sample_business(2, None, None),
        ];
        let details =
            merge_business_details(businesses, &HashMap::new(), &HashMap::new());
        let ids: Vec<i32> = details.iter().map(|d| d.business.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[tokio::test]
    async fn test_lookup_managers_degrades_on_provider_failure() {
        let result = lookup_managers(&FailingProvider, &[1, 2]).await;
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_lookup_managers_empty_ids_skips_provider() {
        // FailingProvider would error if called
        let result = lookup_managers(&FailingProvider, &[]).await;
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_lookup_managers_returns_batch() {
        let provider = StaticProvider {
            users: HashMap::from([(7, sample_user(7, "Hana")), (8, sample_user(8, "Min"))]),
        };
        let result = lookup_managers(&provider, &[7, 8, 9]).await;
        assert_eq!(result.len(), 2);
        assert_eq!(result.get(&7).unwrap().name, "Hana");
        assert!(!result.contains_key(&9));
    }
}
