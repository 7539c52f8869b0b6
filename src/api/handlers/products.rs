//! Product CRUD request handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use validator::Validate;

use crate::api::dto::{
    CreateProductRequest, PagedResponse, PaginationParams, ProductListFilter, ProductResponse,
    UpdateProductRequest,
};
use crate::error::AppError;
use crate::repositories::ProductFilter;
use crate::state::AppState;

/// Creates product-related routes.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
}

/// GET /api/products - List products
async fn list_products(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
    Query(filter): Query<ProductListFilter>,
) -> Result<Json<PagedResponse<ProductResponse>>, AppError> {
    let pagination = pagination.normalize();
    let filter = ProductFilter {
        name: filter.name,
        code: filter.code,
    };

    let (products, total) = state
        .services
        .products
        .list_products(&filter, pagination.offset(), pagination.limit())
        .await?;

    let items: Vec<ProductResponse> = products.into_iter().map(ProductResponse::from).collect();
    Ok(Json(PagedResponse::new(items, &pagination, total as u64)))
}

/// GET /api/products/{id} - Get product by ID
async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = state.services.products.get_product(id).await?;
    Ok(Json(ProductResponse::from(product)))
}

/// POST /api/products - Create new product
///
/// A duplicate product code surfaces as 409 Conflict.
async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), AppError> {
    payload.validate()?;
    let product = state
        .services
        .products
        .create_product(payload.into_new_product()?)
        .await?;
    Ok((StatusCode::CREATED, Json(ProductResponse::from(product))))
}

/// PUT /api/products/{id} - Update product
async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateProductRequest>,
) -> Result<Json<ProductResponse>, AppError> {
    payload.validate()?;
    let product = state
        .services
        .products
        .update_product(id, payload.into_update_product()?)
        .await?;
    Ok(Json(ProductResponse::from(product)))
}

/// DELETE /api/products/{id} - Soft-delete product
async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let deleted = state.services.products.delete_product(id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("product", id))
    }
}
