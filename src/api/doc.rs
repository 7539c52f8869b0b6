use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

pub const CUSTOMER_TAG: &str = "Customers";
pub const PARTNER_TAG: &str = "Partners";
pub const BUSINESS_TAG: &str = "Businesses";
pub const LICENSE_TAG: &str = "Licenses";
pub const PRODUCT_TAG: &str = "Products";
pub const NOTICE_TAG: &str = "Notices";
pub const HEALTH_TAG: &str = "Health";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bizportal",
        description = "Business administration portal API",
    ),
    modifiers(&SecurityAddon),
    paths(
        crate::api::handlers::health::health_check,
        crate::api::handlers::health::readiness_check,
        crate::api::handlers::health::liveness_check,
    ),
    components(
        schemas(
            crate::api::dto::ErrorResponse,
        )
    ),
    tags(
        (name = CUSTOMER_TAG, description = "Customer management endpoints"),
        (name = PARTNER_TAG, description = "Partner management endpoints"),
        (name = BUSINESS_TAG, description = "Business and business history endpoints"),
        (name = LICENSE_TAG, description = "License management endpoints"),
        (name = PRODUCT_TAG, description = "Product catalog endpoints"),
        (name = NOTICE_TAG, description = "Notice board endpoints"),
        (name = HEALTH_TAG, description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;

pub struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer Token Authentication"))
                        .build(),
                ),
            )
        }
    }
}
