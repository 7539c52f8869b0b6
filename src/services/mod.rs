//! Service layer for business logic operations.
//!
//! Services encapsulate business logic and coordinate between
//! repositories, the identity provider, and handlers.

mod business_service;
mod customer_service;
mod license_service;
mod notice_service;
mod partner_service;
mod product_service;

pub use business_service::{BusinessDetail, BusinessService};
pub use customer_service::CustomerService;
pub use license_service::{LicenseDetail, LicenseService};
pub use notice_service::NoticeService;
pub use partner_service::PartnerService;
pub use product_service::ProductService;

use std::sync::Arc;

use crate::external::identity::IdentityProvider;
use crate::repositories::Repositories;

/// Aggregates all services for convenient access.
///
/// Designed to be used as Axum application state; cloning is cheap since
/// underlying pools use `Arc` internally.
#[derive(Clone)]
pub struct Services {
    pub customers: CustomerService,
    pub partners: PartnerService,
    pub businesses: BusinessService,
    pub licenses: LicenseService,
    pub products: ProductService,
    pub notices: NoticeService,
}

impl Services {
    /// Creates a new Services instance from repositories and the identity
    /// provider client.
    pub fn new(repos: Repositories, identity: Arc<dyn IdentityProvider>) -> Self {
        Self {
            customers: CustomerService::new(repos.customers.clone()),
            partners: PartnerService::new(repos.partners),
            businesses: BusinessService::new(
                repos.businesses.clone(),
                repos.business_histories,
                repos.customers,
                identity,
            ),
            licenses: LicenseService::new(repos.licenses, repos.businesses, repos.products.clone()),
            products: ProductService::new(repos.products),
            notices: NoticeService::new(repos.notices),
        }
    }
}
