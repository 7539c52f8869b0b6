//! Router configuration for the API.
//!
//! This module provides centralized route registration and middleware
//! configuration for the application.

use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::doc::ApiDoc;
use crate::api::handlers;
use crate::api::middleware::{auth_middleware, logging_middleware, request_id_middleware};
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
///
/// # Routes
/// - `/api/customers`  - Customer CRUD operations
/// - `/api/partners`   - Partner CRUD operations
/// - `/api/businesses` - Business CRUD + history sub-resource
/// - `/api/licenses`   - License CRUD operations
/// - `/api/products`   - Product CRUD operations
/// - `/api/notices`    - Notice CRUD operations
/// - `/health*`        - Probes (unauthenticated)
/// - `/swagger-ui`     - OpenAPI documentation
///
/// # Middleware Order
/// Middleware is applied in reverse order of declaration (last added runs
/// first): request IDs are assigned before request logging, and the bearer
/// auth guard applies to the `/api` group only.
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .nest("/customers", handlers::customers::customer_routes())
        .nest("/partners", handlers::partners::partner_routes())
        .nest("/businesses", handlers::businesses::business_routes())
        .nest("/licenses", handlers::licenses::license_routes())
        .nest("/products", handlers::products::product_routes())
        .nest("/notices", handlers::notices::notice_routes())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .nest("/api", api_routes)
        .merge(handlers::health::health_routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
