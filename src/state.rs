//! Application state for Axum web framework.
//!
//! Contains shared services and resources that are accessible
//! across all request handlers.

use std::sync::Arc;

use crate::config::{IdentityConfig, JwtConfig};
use crate::db::AsyncDbPool;
use crate::external::identity::{IdentityProvider, RestIdentityClient};
use crate::repositories::Repositories;
use crate::services::Services;

/// Application state containing all shared services and resources.
///
/// Designed to be used with Axum's State extractor. Cloning is cheap since
/// Services and AsyncDbPool use Arc internally.
#[derive(Clone)]
pub struct AppState {
    /// All business logic services
    pub services: Services,
    /// Direct access to the database connection pool
    pub db_pool: AsyncDbPool,
    /// JWT configuration for bearer token validation
    pub jwt_config: JwtConfig,
}

impl AppState {
    /// Creates a new AppState from a database pool and configuration.
    ///
    /// Initializes repositories, the identity provider client, and all
    /// services.
    ///
    /// # Example
    /// ```ignore
    /// let pool = establish_async_connection_pool(&settings.database).await?;
    /// let state = AppState::new(pool, settings.jwt.clone(), settings.identity.clone());
    /// ```
    pub fn new(pool: AsyncDbPool, jwt_config: JwtConfig, identity_config: IdentityConfig) -> Self {
        let identity: Arc<dyn IdentityProvider> =
            Arc::new(RestIdentityClient::new(identity_config));
        Self::with_identity_provider(pool, jwt_config, identity)
    }

    /// Creates an AppState with a custom identity provider implementation.
    ///
    /// Integration tests use this to substitute an in-memory provider.
    pub fn with_identity_provider(
        pool: AsyncDbPool,
        jwt_config: JwtConfig,
        identity: Arc<dyn IdentityProvider>,
    ) -> Self {
        let repos = Repositories::new(pool.clone());
        let services = Services::new(repos, identity);
        Self {
            services,
            db_pool: pool,
            jwt_config,
        }
    }
}
