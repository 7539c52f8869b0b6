//! Customer service for business logic operations.
//!
//! Provides a higher-level API for customer operations, encapsulating
//! business rules and coordinating with the repository layer.

use crate::error::{AppError, AppResult};
use crate::models::{Customer, NewCustomer, UpdateCustomer};
use crate::repositories::{CustomerFilter, CustomerRepository};

/// Customer service wrapping the `CustomerRepository`.
///
/// Since the repository uses `Arc` internally via the connection pool,
/// cloning is cheap.
#[derive(Clone)]
pub struct CustomerService {
    repo: CustomerRepository,
}

impl CustomerService {
    /// Creates a new CustomerService with the given repository.
    pub fn new(repo: CustomerRepository) -> Self {
        Self { repo }
    }

    /// Creates a new customer.
    pub async fn create_customer(&self, new_customer: NewCustomer) -> AppResult<Customer> {
        self.repo.create(new_customer).await
    }

    /// Gets a customer by id, or `NotFound` when absent or soft-deleted.
    pub async fn get_customer(&self, id: i32) -> AppResult<Customer> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("customer", id))
    }

    /// Lists customers with pagination and optional filters.
    ///
    /// # Returns
    /// A tuple of (customers, total matching count)
    pub async fn list_customers(
        &self,
        filter: &CustomerFilter,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<Customer>, i64)> {
        self.repo.list(filter, offset, limit).await
    }

    /// Applies a partial update to a customer.
    ///
    /// Unspecified fields keep their current values.
    pub async fn update_customer(&self, id: i32, changes: UpdateCustomer) -> AppResult<Customer> {
        // Verify the customer exists first
        self.get_customer(id).await?;
        self.repo.update(id, changes).await
    }

    /// Soft-deletes a customer.
    ///
    /// # Returns
    /// `true` if a live row was deleted, `false` if nothing matched
    pub async fn delete_customer(&self, id: i32) -> AppResult<bool> {
        let affected = self.repo.soft_delete(id).await?;
        Ok(affected > 0)
    }
}
