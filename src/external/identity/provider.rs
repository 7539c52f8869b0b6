use super::types::IdentityUser;
use crate::error::AppResult;
use async_trait::async_trait;
use std::collections::HashMap;

/// Lookup interface over the external identity provider.
///
/// Services depend on this trait rather than the REST client so enrichment
/// logic can be exercised with an in-memory fake.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Fetches a single user by id.
    async fn get_user(&self, user_id: i32) -> AppResult<IdentityUser>;

    /// Fetches many users in one request, keyed by user id.
    ///
    /// Ids unknown to the provider are simply absent from the map.
    async fn get_users_by_ids(&self, user_ids: &[i32]) -> AppResult<HashMap<i32, IdentityUser>>;
}
