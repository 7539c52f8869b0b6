//! Partner-related DTOs for API requests and responses.

use crate::api::dto::timestamp_string;
use crate::models::{NewPartner, Partner, UpdatePartner};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Request body for creating a new partner.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreatePartnerRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,
    #[validate(length(max = 32, message = "Phone number must be at most 32 characters"))]
    pub telnum: Option<String>,
    #[validate(length(max = 16, message = "Level must be at most 16 characters"))]
    pub level: Option<String>,
}

impl CreatePartnerRequest {
    pub fn into_new_partner(self) -> NewPartner {
        NewPartner {
            name: self.name,
            telnum: self.telnum,
            level: self.level,
        }
    }
}

/// Request body for updating a partner. Omitted fields are unchanged.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdatePartnerRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: Option<String>,
    #[validate(length(max = 32, message = "Phone number must be at most 32 characters"))]
    pub telnum: Option<String>,
    #[validate(length(max = 16, message = "Level must be at most 16 characters"))]
    pub level: Option<String>,
}

impl UpdatePartnerRequest {
    pub fn into_update_partner(self) -> UpdatePartner {
        UpdatePartner {
            name: self.name,
            telnum: self.telnum,
            level: self.level,
        }
    }
}

/// Query filters for partner listings.
#[derive(Debug, Deserialize, IntoParams, Default)]
pub struct PartnerListFilter {
    pub name: Option<String>,
    pub level: Option<String>,
}

/// Response body for partner data.
#[derive(Debug, Serialize, ToSchema)]
pub struct PartnerResponse {
    pub id: i32,
    pub name: String,
    pub telnum: Option<String>,
    pub level: Option<String>,
    pub created: String,
    pub updated: String,
}

impl From<Partner> for PartnerResponse {
    fn from(partner: Partner) -> Self {
        Self {
            id: partner.id,
            name: partner.name,
            telnum: partner.telnum,
            level: partner.level,
            created: timestamp_string(partner.created),
            updated: timestamp_string(partner.updated),
        }
    }
}
