//! Repository layer for data access operations.
//!
//! Provides async CRUD operations for all portal entities. Reads exclude
//! soft-deleted rows; deletes stamp `removed` and keep the row.

mod business_repo;
mod customer_repo;
mod license_repo;
mod notice_repo;
mod partner_repo;
mod product_repo;

pub use business_repo::{BusinessFilter, BusinessHistoryRepository, BusinessRepository};
pub use customer_repo::{CustomerFilter, CustomerRepository};
pub use license_repo::{LicenseFilter, LicenseRepository};
pub use notice_repo::{NoticeFilter, NoticeRepository};
pub use partner_repo::{PartnerFilter, PartnerRepository};
pub use product_repo::{ProductFilter, ProductRepository};

use crate::db::AsyncDbPool;

/// Aggregates all repositories for convenient access.
///
/// Since `AsyncDbPool` uses `Arc` internally, cloning is cheap.
#[derive(Clone)]
pub struct Repositories {
    pub customers: CustomerRepository,
    pub partners: PartnerRepository,
    pub businesses: BusinessRepository,
    pub business_histories: BusinessHistoryRepository,
    pub licenses: LicenseRepository,
    pub products: ProductRepository,
    pub notices: NoticeRepository,
}

impl Repositories {
    /// Creates a new Repositories instance with all repositories initialized.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self {
            customers: CustomerRepository::new(pool.clone()),
            partners: PartnerRepository::new(pool.clone()),
            businesses: BusinessRepository::new(pool.clone()),
            business_histories: BusinessHistoryRepository::new(pool.clone()),
            licenses: LicenseRepository::new(pool.clone()),
            products: ProductRepository::new(pool.clone()),
            notices: NoticeRepository::new(pool),
        }
    }
}
