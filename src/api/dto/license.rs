//! License-related DTOs for API requests and responses.

use crate::api::dto::timestamp_string;
use crate::models::{License, NewLicense, UpdateLicense};
use crate::services::LicenseDetail;
use jiff_diesel::ToDiesel;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Request body for creating a new license.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateLicenseRequest {
    pub business_id: i32,
    pub product_id: i32,
    #[validate(length(min = 1, max = 64, message = "License key must be between 1 and 64 characters"))]
    pub license_key: String,
    /// Status string set directly by the caller (active/inactive/expired)
    #[validate(length(min = 1, max = 16, message = "Status must be between 1 and 16 characters"))]
    pub status: String,
    /// Expiry timestamp, e.g. "2026-01-01T00:00:00"
    #[schema(value_type = Option<String>, format = DateTime)]
    pub expires_at: Option<jiff::civil::DateTime>,
}

impl CreateLicenseRequest {
    pub fn into_new_license(self) -> NewLicense {
        NewLicense {
            business_id: self.business_id,
            product_id: self.product_id,
            license_key: self.license_key,
            status: self.status,
            expires_at: self.expires_at.map(|dt| dt.to_diesel()),
        }
    }
}

/// Request body for updating a license. Omitted fields are unchanged.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateLicenseRequest {
    pub business_id: Option<i32>,
    pub product_id: Option<i32>,
    #[validate(length(min = 1, max = 64, message = "License key must be between 1 and 64 characters"))]
    pub license_key: Option<String>,
    #[validate(length(min = 1, max = 16, message = "Status must be between 1 and 16 characters"))]
    pub status: Option<String>,
    #[schema(value_type = Option<String>, format = DateTime)]
    pub expires_at: Option<jiff::civil::DateTime>,
}

impl UpdateLicenseRequest {
    pub fn into_update_license(self) -> UpdateLicense {
        UpdateLicense {
            business_id: self.business_id,
            product_id: self.product_id,
            license_key: self.license_key,
            status: self.status,
            expires_at: self.expires_at.map(|dt| dt.to_diesel()),
        }
    }
}

/// Query filters for license listings.
#[derive(Debug, Deserialize, IntoParams, Default)]
pub struct LicenseListFilter {
    /// Equality filter on status string
    pub status: Option<String>,
    pub business_id: Option<i32>,
    pub product_id: Option<i32>,
}

/// Response body for license data without enrichment.
#[derive(Debug, Serialize, ToSchema)]
pub struct LicenseResponse {
    pub id: i32,
    pub business_id: i32,
    pub product_id: i32,
    pub license_key: String,
    pub status: String,
    pub expires_at: Option<String>,
    pub created: String,
    pub updated: String,
}

impl From<License> for LicenseResponse {
    fn from(license: License) -> Self {
        Self {
            id: license.id,
            business_id: license.business_id,
            product_id: license.product_id,
            license_key: license.license_key,
            status: license.status,
            expires_at: license.expires_at.map(timestamp_string),
            created: timestamp_string(license.created),
            updated: timestamp_string(license.updated),
        }
    }
}

/// Response body for license data joined with business and product names.
#[derive(Debug, Serialize, ToSchema)]
pub struct LicenseDetailResponse {
    pub id: i32,
    pub business_id: i32,
    pub business_name: Option<String>,
    pub product_id: i32,
    pub product_name: Option<String>,
    pub license_key: String,
    pub status: String,
    pub expires_at: Option<String>,
    pub created: String,
    pub updated: String,
}

impl From<LicenseDetail> for LicenseDetailResponse {
    fn from(detail: LicenseDetail) -> Self {
        let LicenseDetail {
            license,
            business_name,
            product_name,
        } = detail;

        Self {
            id: license.id,
            business_id: license.business_id,
            business_name,
            product_id: license.product_id,
            product_name,
            license_key: license.license_key,
            status: license.status,
            expires_at: license.expires_at.map(timestamp_string),
            created: timestamp_string(license.created),
            updated: timestamp_string(license.updated),
        }
    }
}
