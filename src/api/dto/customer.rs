//! Customer-related DTOs for API requests and responses.

use crate::api::dto::timestamp_string;
use crate::models::{Customer, NewCustomer, UpdateCustomer};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for creating a new customer.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateCustomerRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    #[schema(min_length = 1, max_length = 255)]
    pub name: String,
    #[validate(length(max = 32, message = "Phone number must be at most 32 characters"))]
    pub telnum: Option<String>,
    #[validate(length(max = 16, message = "Level must be at most 16 characters"))]
    pub level: Option<String>,
}

impl CreateCustomerRequest {
    /// Converts the request DTO into a NewCustomer model for insertion.
    pub fn into_new_customer(self) -> NewCustomer {
        NewCustomer {
            name: self.name,
            telnum: self.telnum,
            level: self.level,
        }
    }
}

/// Request body for updating a customer. Omitted fields are unchanged.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateCustomerRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: Option<String>,
    #[validate(length(max = 32, message = "Phone number must be at most 32 characters"))]
    pub telnum: Option<String>,
    #[validate(length(max = 16, message = "Level must be at most 16 characters"))]
    pub level: Option<String>,
}

impl UpdateCustomerRequest {
    /// Converts the request DTO into an UpdateCustomer changeset.
    pub fn into_update_customer(self) -> UpdateCustomer {
        UpdateCustomer {
            name: self.name,
            telnum: self.telnum,
            level: self.level,
        }
    }
}

/// Query filters for customer listings.
#[derive(Debug, Deserialize, IntoParams, Default)]
pub struct CustomerListFilter {
    /// Substring match on customer name
    pub name: Option<String>,
    /// Substring match on customer level
    pub level: Option<String>,
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Response body for customer data.
#[derive(Debug, Serialize, ToSchema)]
pub struct CustomerResponse {
    pub id: i32,
    pub name: String,
    pub telnum: Option<String>,
    pub level: Option<String>,
    pub created: String,
    pub updated: String,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.name,
            telnum: customer.telnum,
            level: customer.level,
            created: timestamp_string(customer.created),
            updated: timestamp_string(customer.updated),
        }
    }
}
