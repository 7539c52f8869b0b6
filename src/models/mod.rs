//! Database row models for all portal entities.
//!
//! Every entity carries `created`/`updated` timestamps and a nullable
//! `removed` timestamp used for soft deletes.

mod business;
mod customer;
mod license;
mod notice;
mod partner;
mod product;

pub use business::{
    Business, BusinessHistory, NewBusiness, NewBusinessHistory, UpdateBusiness,
    UpdateBusinessHistory,
};
pub use customer::{Customer, NewCustomer, UpdateCustomer};
pub use license::{License, NewLicense, UpdateLicense};
pub use notice::{NewNotice, Notice, UpdateNotice};
pub use partner::{NewPartner, Partner, UpdatePartner};
pub use product::{NewProduct, Product, UpdateProduct};
