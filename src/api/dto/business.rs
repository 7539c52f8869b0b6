//! Business and business-history DTOs for API requests and responses.

use crate::api::dto::timestamp_string;
use crate::models::{
    Business, BusinessHistory, NewBusiness, UpdateBusiness, UpdateBusinessHistory,
};
use crate::services::BusinessDetail;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for creating a new business.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateBusinessRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,
    #[validate(length(max = 32, message = "Phone number must be at most 32 characters"))]
    pub telnum: Option<String>,
    /// Owning customer id
    pub customer_id: Option<i32>,
    /// Manager user id in the identity provider
    pub manager_id: Option<i32>,
}

impl CreateBusinessRequest {
    pub fn into_new_business(self) -> NewBusiness {
        NewBusiness {
            name: self.name,
            telnum: self.telnum,
            customer_id: self.customer_id,
            manager_id: self.manager_id,
        }
    }
}

/// Request body for updating a business. Omitted fields are unchanged.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateBusinessRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: Option<String>,
    #[validate(length(max = 32, message = "Phone number must be at most 32 characters"))]
    pub telnum: Option<String>,
    pub customer_id: Option<i32>,
    pub manager_id: Option<i32>,
}

impl UpdateBusinessRequest {
    pub fn into_update_business(self) -> UpdateBusiness {
        UpdateBusiness {
            name: self.name,
            telnum: self.telnum,
            customer_id: self.customer_id,
            manager_id: self.manager_id,
        }
    }
}

/// Query filters for business listings.
#[derive(Debug, Deserialize, IntoParams, Default)]
pub struct BusinessListFilter {
    /// Substring match on business name
    pub name: Option<String>,
    /// Equality filter on owning customer
    pub customer_id: Option<i32>,
    /// Equality filter on manager
    pub manager_id: Option<i32>,
}

/// Request body for adding a business history entry.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateHistoryRequest {
    #[validate(length(min = 1, message = "Content must not be empty"))]
    pub content: String,
}

/// Request body for updating a business history entry.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateHistoryRequest {
    #[validate(length(min = 1, message = "Content must not be empty"))]
    pub content: Option<String>,
}

impl UpdateHistoryRequest {
    pub fn into_update_history(self) -> UpdateBusinessHistory {
        UpdateBusinessHistory {
            content: self.content,
        }
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Response body for business data without enrichment.
#[derive(Debug, Serialize, ToSchema)]
pub struct BusinessResponse {
    pub id: i32,
    pub name: String,
    pub telnum: Option<String>,
    pub customer_id: Option<i32>,
    pub manager_id: Option<i32>,
    pub created: String,
    pub updated: String,
}

impl From<Business> for BusinessResponse {
    fn from(business: Business) -> Self {
        Self {
            id: business.id,
            name: business.name,
            telnum: business.telnum,
            customer_id: business.customer_id,
            manager_id: business.manager_id,
            created: timestamp_string(business.created),
            updated: timestamp_string(business.updated),
        }
    }
}

/// Response body for business data joined with manager and customer
/// enrichment fields.
#[derive(Debug, Serialize, ToSchema)]
pub struct BusinessDetailResponse {
    pub id: i32,
    pub name: String,
    pub telnum: Option<String>,
    pub customer_id: Option<i32>,
    pub customer_name: Option<String>,
    pub manager_id: Option<i32>,
    pub manager_name: Option<String>,
    pub manager_type: Option<String>,
    pub manager_company_id: Option<i32>,
    pub created: String,
    pub updated: String,
}

impl From<BusinessDetail> for BusinessDetailResponse {
    fn from(detail: BusinessDetail) -> Self {
        let BusinessDetail {
            business,
            manager,
            customer_name,
        } = detail;

        let (manager_name, manager_type, manager_company_id) = match manager {
            Some(user) => (Some(user.name), Some(user.user_type), user.company_id),
            None => (None, None, None),
        };

        Self {
            id: business.id,
            name: business.name,
            telnum: business.telnum,
            customer_id: business.customer_id,
            customer_name,
            manager_id: business.manager_id,
            manager_name,
            manager_type,
            manager_company_id,
            created: timestamp_string(business.created),
            updated: timestamp_string(business.updated),
        }
    }
}

/// Response body for a business history entry.
#[derive(Debug, Serialize, ToSchema)]
pub struct HistoryResponse {
    pub id: i32,
    pub business_id: i32,
    pub content: String,
    pub created: String,
    pub updated: String,
}

impl From<BusinessHistory> for HistoryResponse {
    fn from(history: BusinessHistory) -> Self {
        Self {
            id: history.id,
            business_id: history.business_id,
            content: history.content,
            created: timestamp_string(history.created),
            updated: timestamp_string(history.updated),
        }
    }
}
